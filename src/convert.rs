//! One conversion run: acquire, decode, resize, render.

use std::io::Write;

use crate::ascii::{render, Alphabet, RenderOptions, RenderStats, DEFAULT_WIDTH};
use crate::error::AsciiArtError;
use crate::sink::OutputLocator;
use crate::source::{decode, read_input, resize_to_width, InputLocator};

/// Settings for a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Output width in characters
    pub width: u32,
    /// Alphabet used for every pixel
    pub alphabet: Alphabet,
    pub render: RenderOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            alphabet: Alphabet::default(),
            render: RenderOptions::default(),
        }
    }
}

/// Decode `bytes`, resize to `options.width`, and render into `out`.
///
/// # Errors
///
/// Returns `AsciiArtError::Decode` for undecodable input, or
/// `AsciiArtError::Write` if writing to `out` fails.
pub fn convert_bytes<W>(
    bytes: &[u8],
    options: &ConvertOptions,
    out: &mut W,
) -> Result<RenderStats, AsciiArtError>
where
    W: Write + ?Sized,
{
    let image = decode(bytes)?;
    let thumb = resize_to_width(&image, options.width);
    let stats =
        render(&thumb, options.alphabet, options.render, out).map_err(AsciiArtError::Write)?;
    out.flush().map_err(AsciiArtError::Write)?;
    log::info!(
        "Rendered {} lines of {} columns with alphabet {}",
        stats.lines,
        stats.columns,
        options.alphabet
    );
    Ok(stats)
}

/// Run a full conversion from `input` to `output`.
///
/// The input is read completely before the output is opened, so a failed
/// fetch never creates or truncates the output file. Nothing is decoded
/// until both ends are available.
///
/// # Errors
///
/// Any `AsciiArtError`; see [`AsciiArtError::exit_code`] for how each maps
/// to a process status.
pub async fn run(
    input: &InputLocator,
    output: &OutputLocator,
    options: &ConvertOptions,
) -> Result<RenderStats, AsciiArtError> {
    log::info!("Converting {} -> {}", input, output);
    let bytes = read_input(input).await?;
    let mut out = output.open()?;
    convert_bytes(&bytes, options, &mut out)
}
