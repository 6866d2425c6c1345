//! Pure conversion from the float RGBA buffer to 8-bit RGBA.
//!
//! This module is always available (no feature gate) so that both the PNG
//! snapshot path and any byte-oriented texture path share the same conversion.

use grid_art_core::PixelBuffer;

/// Converts a float RGBA buffer to 8-bit RGBA.
///
/// Each channel is scaled by 255 and truncated toward zero. Values outside
/// [0, 1] saturate to 0 or 255. The output has the same length as the input.
pub fn to_rgba8(buffer: &PixelBuffer) -> Vec<u8> {
    buffer.data().iter().map(|&v| channel_to_u8(v)).collect()
}

fn channel_to_u8(v: f32) -> u8 {
    // `as` saturates and maps NaN to 0.
    (v * 255.0) as u8
}
