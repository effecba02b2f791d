//! Image acquisition: resolve an input locator to bytes, decode, resize.
//!
//! Inputs can be a local file, stdin (absent or `-`), or an `http`/`https`
//! URL fetched with a GET request.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use futures_util::StreamExt;
use image::imageops::FilterType;
use image::DynamicImage;
use tokio::io::AsyncReadExt;

use crate::ascii::scaled_height;
use crate::error::AsciiArtError;

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound on the buffer reserved from a response's `Content-Length`.
/// Larger bodies still load; the buffer just grows as chunks arrive.
const MAX_PREALLOC: u64 = 8 * 1024 * 1024;

/// Locator that means "read from stdin".
pub const STDIN_LOCATOR: &str = "-";

/// Where to read the input image from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLocator {
    Stdin,
    File(PathBuf),
    Url(String),
}

impl InputLocator {
    /// Resolve a positional argument to a locator.
    ///
    /// Absent or `-` reads stdin; a string starting with `http://` or
    /// `https://` (scheme in any case) is fetched; anything else is a path.
    pub fn parse(arg: Option<&str>) -> Self {
        match arg {
            None | Some(STDIN_LOCATOR) => InputLocator::Stdin,
            Some(s) if is_http_url(s) => InputLocator::Url(s.to_string()),
            Some(s) => InputLocator::File(PathBuf::from(s)),
        }
    }
}

impl fmt::Display for InputLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputLocator::Stdin => f.write_str(STDIN_LOCATOR),
            InputLocator::File(path) => write!(f, "{}", path.display()),
            InputLocator::Url(url) => f.write_str(url),
        }
    }
}

fn is_http_url(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Read the raw bytes behind `locator`.
///
/// # Errors
///
/// Returns `AsciiArtError::InputOpen` if a file or stdin cannot be read,
/// `AsciiArtError::ResourceFetch` if the HTTP request fails, or
/// `AsciiArtError::ResourceStatus` if the server answers with a
/// non-success status.
pub async fn read_input(locator: &InputLocator) -> Result<Vec<u8>, AsciiArtError> {
    match locator {
        InputLocator::Stdin => {
            log::debug!("Reading image from stdin");
            let mut bytes = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut bytes)
                .await
                .map_err(|source| AsciiArtError::InputOpen {
                    locator: STDIN_LOCATOR.to_string(),
                    source,
                })?;
            Ok(bytes)
        }
        InputLocator::File(path) => {
            log::debug!("Reading image from {:?}", path);
            tokio::fs::read(path)
                .await
                .map_err(|source| AsciiArtError::InputOpen {
                    locator: path.display().to_string(),
                    source,
                })
        }
        InputLocator::Url(url) => fetch(url).await,
    }
}

/// Fetch `url` with a GET request and return the response body.
///
/// The body is streamed into memory chunk by chunk.
///
/// # Errors
///
/// Returns `AsciiArtError::ResourceStatus` for any non-success status, or
/// `AsciiArtError::ResourceFetch` if the client cannot be built, the
/// request fails, or the body cannot be read.
pub async fn fetch(url: &str) -> Result<Vec<u8>, AsciiArtError> {
    let fetch_error = |source: reqwest::Error| AsciiArtError::ResourceFetch {
        url: url.to_string(),
        source,
    };

    let http_client = reqwest::Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .build()
        .map_err(fetch_error)?;

    log::info!("Fetching {}", url);
    let response = http_client.get(url).send().await.map_err(fetch_error)?;

    if !response.status().is_success() {
        let status = response.status();
        log::warn!("Fetch of {} failed with status {}", url, status);
        return Err(AsciiArtError::ResourceStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let hint = response.content_length().unwrap_or(0).min(MAX_PREALLOC);
    let mut bytes = Vec::with_capacity(hint as usize);
    let mut stream = response.bytes_stream();
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(fetch_error)?;
        bytes.extend_from_slice(&chunk);
    }

    log::debug!("Fetched {} bytes from {}", bytes.len(), url);
    Ok(bytes)
}

/// Decode image bytes, guessing the format from their content.
///
/// # Errors
///
/// Returns `AsciiArtError::Decode` if the bytes are not a supported image.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, AsciiArtError> {
    let image = image::load_from_memory(bytes)?;
    log::debug!("Decoded {}x{} image", image.width(), image.height());
    Ok(image)
}

/// Resample `image` to `width` columns, keeping its aspect ratio.
///
/// Uses bilinear filtering. Narrow images are enlarged. An empty image, or
/// a width of 0, returns an empty image of the requested shape.
pub fn resize_to_width(image: &DynamicImage, width: u32) -> DynamicImage {
    let height = scaled_height(image.width(), image.height(), width);
    if width == 0 || height == 0 {
        return DynamicImage::new_luma8(width, height);
    }
    if image.width() == width && image.height() == height {
        return image.clone();
    }

    log::debug!(
        "Resizing {}x{} -> {}x{}",
        image.width(),
        image.height(),
        width,
        height
    );
    image.resize_exact(width, height, FilterType::Triangle)
}
