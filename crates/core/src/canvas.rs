//! Canvas dimensions for pattern generation.

use serde::{Deserialize, Serialize};

use crate::error::PatternError;

/// Number of `f32` channels per pixel in a [`PixelBuffer`](crate::PixelBuffer).
pub const CHANNELS: usize = 4;

/// Width and height of the target canvas, in pixels.
///
/// A zero-sized side is representable and produces an empty buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: usize,
    pub height: usize,
}

impl CanvasSpec {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Returns `width * height`, or `InvalidDimensions` on overflow.
    pub fn pixel_count(&self) -> Result<usize, PatternError> {
        self.width
            .checked_mul(self.height)
            .ok_or(PatternError::InvalidDimensions)
    }

    /// Returns the RGBA buffer length `width * height * 4`, or
    /// `InvalidDimensions` on overflow.
    pub fn buffer_len(&self) -> Result<usize, PatternError> {
        self.pixel_count()?
            .checked_mul(CHANNELS)
            .ok_or(PatternError::InvalidDimensions)
    }

    /// Whether either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_len_is_four_channels_per_pixel() {
        let canvas = CanvasSpec::new(200, 150);
        assert_eq!(canvas.pixel_count().unwrap(), 30_000);
        assert_eq!(canvas.buffer_len().unwrap(), 120_000);
    }

    #[test]
    fn zero_side_has_empty_buffer() {
        let canvas = CanvasSpec::new(0, 10);
        assert!(canvas.is_empty());
        assert_eq!(canvas.buffer_len().unwrap(), 0);
    }

    #[test]
    fn overflowing_pixel_count_is_rejected() {
        let canvas = CanvasSpec::new(usize::MAX, 2);
        assert!(matches!(
            canvas.pixel_count(),
            Err(PatternError::InvalidDimensions)
        ));
    }

    #[test]
    fn overflowing_channel_count_is_rejected() {
        let canvas = CanvasSpec::new(usize::MAX / 2, 1);
        assert!(canvas.pixel_count().is_ok());
        assert!(matches!(
            canvas.buffer_len(),
            Err(PatternError::InvalidDimensions)
        ));
    }

    #[test]
    fn serde_round_trip() {
        let canvas = CanvasSpec::new(600, 400);
        let json = serde_json::to_string(&canvas).unwrap();
        assert_eq!(json, r#"{"width":600,"height":400}"#);
        let back: CanvasSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, canvas);
    }
}
