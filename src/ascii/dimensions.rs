//! Dimension calculation for width-driven resizing.

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 80;

/// Rounding bias applied to the proportional height. Heights whose
/// fractional part reaches 0.3 round up.
const HEIGHT_ROUNDING_BIAS: f64 = 0.7;

/// Calculate the output height that preserves the source aspect ratio at
/// `target_width` columns.
///
/// The result is `floor(0.7 + img_height * target_width / img_width)`,
/// never less than 1 for a non-empty source and target.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `target_width` - Requested output width in characters
///
/// # Returns
/// The output height in lines, or 0 if any input dimension is 0.
///
/// # Example
/// ```
/// use asciiart::ascii::scaled_height;
///
/// // 640x480 (4:3) at 80 columns
/// assert_eq!(scaled_height(640, 480, 80), 60);
/// ```
pub fn scaled_height(img_width: u32, img_height: u32, target_width: u32) -> u32 {
    if img_width == 0 || img_height == 0 || target_width == 0 {
        return 0;
    }

    let scale = img_width as f64 / target_width as f64;
    let height = (HEIGHT_ROUNDING_BIAS + img_height as f64 / scale) as u32;
    height.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_height_square() {
        assert_eq!(scaled_height(100, 100, 80), 80);
    }

    #[test]
    fn test_scaled_height_downscale() {
        assert_eq!(scaled_height(1920, 1080, 80), 45);
        assert_eq!(scaled_height(640, 480, 80), 60);
    }

    #[test]
    fn test_scaled_height_upscale() {
        assert_eq!(scaled_height(10, 5, 80), 40);
    }

    #[test]
    fn test_scaled_height_rounding_bias() {
        // 3 * 10 / 4 = 7.5 -> 8.2 -> 8
        assert_eq!(scaled_height(4, 3, 10), 8);
        // 1 * 10 / 4 = 2.5 -> 3.2 -> 3
        assert_eq!(scaled_height(4, 1, 10), 3);
        // 7 * 1 / 10 = 0.7 -> 1.4 -> 1
        assert_eq!(scaled_height(10, 7, 1), 1);
        // 1 * 2 / 10 = 0.2 -> 0.9 -> 0, clamped up to 1
        assert_eq!(scaled_height(10, 1, 2), 1);
    }

    #[test]
    fn test_scaled_height_empty_inputs() {
        assert_eq!(scaled_height(0, 10, 80), 0);
        assert_eq!(scaled_height(10, 0, 80), 0);
        assert_eq!(scaled_height(10, 10, 0), 0);
    }
}
