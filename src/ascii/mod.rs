//! ASCII renderer module for converting images to ASCII art.
//!
//! The pipeline for one image is:
//!
//! 1. **Grayscale conversion** - RGB to luminance using BT.601
//! 2. **Character mapping** - Bucket each sample into an alphabet
//! 3. **Rendering** - Emit one text line per image row
//!
//! # Alphabets
//!
//! Alphabets are looked up by name with [`Alphabet::from_name`]:
//! `heuristic` (default), `alternate`, `asciifi1`, `asciifi2`, `asciifi3`.

mod alphabet;
mod dimensions;
mod grayscale;
mod mapping;
mod render;

pub use alphabet::{
    alphabet_names, recognized_alphabets, Alphabet, ALTERNATE, ASCIIFI1, ASCIIFI2, ASCIIFI3,
    DEFAULT_ALPHABET, HEURISTIC, UNKNOWN_ALPHABET,
};
pub use dimensions::{scaled_height, DEFAULT_WIDTH};
pub use grayscale::{luminance, luminance_into, premultiply};
pub use mapping::{bucket_index, map_into, map_luminance, RenderOptions, MAX_SAMPLE};
pub use render::{render, render_to_string, RenderStats};
