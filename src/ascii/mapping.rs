//! Brightness to character mapping.

use super::alphabet::Alphabet;

/// Largest grayscale sample value.
pub const MAX_SAMPLE: u8 = 255;

/// Number of distinct sample values (`MAX_SAMPLE + 1`).
const SAMPLE_RANGE: usize = MAX_SAMPLE as usize + 1;

/// Options applied while mapping samples to characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Invert brightness before mapping (for light terminals)
    pub invert: bool,
}

/// Bucket a sample into one of `levels` equal-width bands.
///
/// Computes `floor(sample * levels / (MAX_SAMPLE + 1))`. Dividing by the
/// sample range rather than by `MAX_SAMPLE` keeps `MAX_SAMPLE` inside the
/// last band. Samples above `MAX_SAMPLE` are clamped to it, and the result
/// is always in `[0, levels - 1]` (0 when `levels` is 0).
#[inline]
pub fn bucket_index(sample: u32, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    let sample = sample.min(MAX_SAMPLE as u32) as usize;
    (sample * levels / SAMPLE_RANGE).min(levels - 1)
}

/// Map one grayscale sample to a character of `alphabet`.
///
/// Sample 0 maps to the first (darkest) character and `MAX_SAMPLE` to the
/// last; with `invert` set the order is reversed.
///
/// # Example
/// ```
/// use asciiart::ascii::{map_luminance, Alphabet, RenderOptions};
///
/// let heuristic = Alphabet::default();
/// let opts = RenderOptions::default();
/// assert_eq!(map_luminance(0, heuristic, opts), '#');
/// assert_eq!(map_luminance(128, heuristic, opts), 'O');
/// assert_eq!(map_luminance(255, heuristic, opts), ' ');
/// ```
#[inline]
pub fn map_luminance(sample: u8, alphabet: Alphabet, options: RenderOptions) -> char {
    let sample = if options.invert {
        MAX_SAMPLE - sample
    } else {
        sample
    };
    alphabet.symbols()[bucket_index(sample as u32, alphabet.len())]
}

/// Map a run of samples to characters, appending to `line`.
///
/// # Returns
/// The number of characters appended.
pub fn map_into(
    samples: &[u8],
    alphabet: Alphabet,
    options: RenderOptions,
    line: &mut String,
) -> usize {
    line.reserve(samples.len());
    for &sample in samples {
        line.push(map_luminance(sample, alphabet, options));
    }
    samples.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::alphabet::{ALTERNATE, ASCIIFI3};

    #[test]
    fn test_bucket_index_boundaries_sixteen_levels() {
        // 16 levels over 256 values: bands of exactly 16 samples
        assert_eq!(bucket_index(0, 16), 0);
        assert_eq!(bucket_index(15, 16), 0);
        assert_eq!(bucket_index(16, 16), 1);
        assert_eq!(bucket_index(127, 16), 7);
        assert_eq!(bucket_index(128, 16), 8);
        assert_eq!(bucket_index(240, 16), 15);
        assert_eq!(bucket_index(255, 16), 15);
    }

    #[test]
    fn test_bucket_index_uneven_levels() {
        // 9 levels: floor(g * 9 / 256)
        assert_eq!(bucket_index(28, 9), 0);
        assert_eq!(bucket_index(29, 9), 1);
        assert_eq!(bucket_index(255, 9), 8);
    }

    #[test]
    fn test_bucket_index_clamps_out_of_range() {
        assert_eq!(bucket_index(256, 16), 15);
        assert_eq!(bucket_index(u32::MAX, 25), 24);
    }

    #[test]
    fn test_bucket_index_single_and_zero_levels() {
        assert_eq!(bucket_index(0, 1), 0);
        assert_eq!(bucket_index(255, 1), 0);
        assert_eq!(bucket_index(200, 0), 0);
    }

    #[test]
    fn test_map_luminance_heuristic_examples() {
        let alphabet = Alphabet::default();
        let opts = RenderOptions::default();
        assert_eq!(map_luminance(0, alphabet, opts), '#');
        assert_eq!(map_luminance(112, alphabet, opts), '\\');
        assert_eq!(map_luminance(128, alphabet, opts), 'O');
        assert_eq!(map_luminance(255, alphabet, opts), ' ');
    }

    #[test]
    fn test_map_luminance_invert() {
        let alphabet = Alphabet::new(ALTERNATE).unwrap();
        let opts = RenderOptions { invert: true };
        assert_eq!(map_luminance(0, alphabet, opts), ' ');
        assert_eq!(map_luminance(255, alphabet, opts), '@');
    }

    #[test]
    fn test_map_luminance_endpoints_asciifi3() {
        let alphabet = Alphabet::new(ASCIIFI3).unwrap();
        let opts = RenderOptions::default();
        assert_eq!(map_luminance(0, alphabet, opts), '#');
        assert_eq!(map_luminance(255, alphabet, opts), ' ');
    }

    #[test]
    fn test_map_into_appends() {
        let mut line = String::from(">");
        let n = map_into(&[0, 255], Alphabet::default(), RenderOptions::default(), &mut line);
        assert_eq!(n, 2);
        assert_eq!(line, "># ");
    }
}
