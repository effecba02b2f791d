//! Row-by-row rendering of an image to text.

use std::io::{self, Write};

use image::{GenericImageView, Pixel};

use super::alphabet::Alphabet;
use super::grayscale::{luminance_into, premultiply};
use super::mapping::{map_into, RenderOptions};

/// Shape of a finished rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Lines written (the image height)
    pub lines: u32,
    /// Characters per line (the image width)
    pub columns: u32,
}

/// Render `image` as ASCII art into `out`.
///
/// Each image row becomes one line of exactly `width` characters followed
/// by `\n`. A line is written as soon as its row is mapped, so only one
/// row of samples is held at a time. Translucent pixels are composited
/// over black first, so a fully transparent pixel reads as black.
///
/// A zero-width image produces `height` empty lines; a zero-height image
/// produces no output.
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn render<I, W>(
    image: &I,
    alphabet: Alphabet,
    options: RenderOptions,
    out: &mut W,
) -> io::Result<RenderStats>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
    W: Write + ?Sized,
{
    let (width, height) = image.dimensions();
    let mut samples = Vec::with_capacity(width as usize);
    let mut line = String::with_capacity(width as usize + 1);

    for y in 0..height {
        luminance_into(
            (0..width).map(|x| premultiply(image.get_pixel(x, y).to_rgba())),
            &mut samples,
        );
        line.clear();
        map_into(&samples, alphabet, options, &mut line);
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }

    Ok(RenderStats {
        lines: height,
        columns: width,
    })
}

/// Render `image` into a `String`.
pub fn render_to_string<I>(image: &I, alphabet: Alphabet, options: RenderOptions) -> String
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let mut out = Vec::new();
    // Writing into a Vec cannot fail
    let _ = render(image, alphabet, options, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}
