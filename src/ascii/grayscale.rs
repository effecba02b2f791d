//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

use image::{Rgb, Rgba};

/// Convert an RGB pixel to a grayscale sample (0-255).
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Channels are widened to 16 bits (`c * 0x101`) and weighted with
/// 16.16 fixed-point coefficients that sum to 65536:
/// - R: 19595
/// - G: 38470
/// - B: 7471
///
/// The weighted sum is rounded and shifted back down to 8 bits, so a gray
/// pixel (R = G = B) maps to its own value.
#[inline]
pub fn luminance(pixel: Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0.map(|c| c as u32 * 0x101);
    // Max sum is 65536 * 65535 + 2^15, which still fits in u32
    ((19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24) as u8
}

/// Composite an RGBA pixel over black (`c * a / 255` per channel).
#[inline]
pub fn premultiply(pixel: Rgba<u8>) -> Rgb<u8> {
    let [r, g, b, a] = pixel.0;
    let scale = |c: u8| (c as u16 * a as u16 / 255) as u8;
    Rgb([scale(r), scale(g), scale(b)])
}

/// Convert a row of RGB pixels to grayscale samples, reusing `buffer`.
///
/// # Returns
/// The number of samples written to the buffer
pub fn luminance_into<I>(pixels: I, buffer: &mut Vec<u8>) -> usize
where
    I: IntoIterator<Item = Rgb<u8>>,
{
    buffer.clear();
    buffer.extend(pixels.into_iter().map(luminance));
    buffer.len()
}
