//! asciiart library crate.
//!
//! Converts raster images into ASCII art: every pixel's luminance picks a
//! character from an ordered alphabet, one text line per image row.
//!
//! ```
//! use asciiart::ascii::{render_to_string, Alphabet, RenderOptions};
//! use image::GrayImage;
//!
//! let img = GrayImage::from_raw(3, 1, vec![0, 128, 255]).unwrap();
//! let text = render_to_string(&img, Alphabet::default(), RenderOptions::default());
//! assert_eq!(text, "#O \n");
//! ```

pub mod ascii;
pub mod cli;
pub mod convert;
pub mod error;
pub mod sink;
pub mod source;

pub use error::AsciiArtError;
