//! PNG snapshots of a [`PixelBuffer`].
//!
//! Feature-gated behind `png` (default on). The byte conversion itself lives
//! in [`crate::pixel`] (always available).

use grid_art_core::{PatternError, PixelBuffer};
use std::path::Path;

use crate::pixel::to_rgba8;

/// Writes a buffer as an RGBA PNG.
///
/// Returns `PatternError::InvalidDimensions` if the buffer is empty or a side
/// overflows `u32`, or `PatternError::Io` on write failure.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), PatternError> {
    if buffer.is_empty() {
        return Err(PatternError::InvalidDimensions);
    }
    let w = u32::try_from(buffer.width()).map_err(|_| PatternError::InvalidDimensions)?;
    let h = u32::try_from(buffer.height()).map_err(|_| PatternError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, to_rgba8(buffer))
        .ok_or_else(|| PatternError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| PatternError::Io(e.to_string()))?;
    log::info!("wrote {}x{} snapshot to {}", w, h, path.display());
    Ok(())
}
