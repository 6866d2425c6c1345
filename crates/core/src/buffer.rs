//! Flat RGBA `f32` pixel buffer.
//!
//! A `PixelBuffer` stores `width * height * 4` values in row-major,
//! channel-interleaved order (R, G, B, A per pixel, left-to-right then
//! top-to-bottom). This is the canonical output of the generator and matches
//! the layout of a float RGBA texture upload.

use crate::canvas::{CanvasSpec, CHANNELS};
use crate::error::PatternError;

/// A dense RGBA float image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Creates a buffer with every pixel set to `rgba`.
    ///
    /// Returns `PatternError::InvalidDimensions` if the buffer length
    /// overflows `usize`.
    pub fn filled(canvas: CanvasSpec, rgba: [f32; 4]) -> Result<Self, PatternError> {
        canvas.buffer_len()?;
        let data = rgba.repeat(canvas.pixel_count()?);
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data,
        })
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of `f32` values (not pixels).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only access to the interleaved data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Consumes the buffer, returning the interleaved data.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Returns the RGBA value at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * CHANNELS;
        let px = &self.data[start..start + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Iterates over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(CHANNELS)
    }

    /// Fills the half-open region `[x0, x1) x [y0, y1)` with `rgba`.
    ///
    /// The region is clipped to the buffer; an empty region is a no-op.
    pub fn fill_rect(&mut self, x0: usize, x1: usize, y0: usize, y1: usize, rgba: [f32; 4]) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for y in y0..y1 {
            let row = y * self.width;
            let span = &mut self.data[(row + x0) * CHANNELS..(row + x1) * CHANNELS];
            for px in span.chunks_exact_mut(CHANNELS) {
                px.copy_from_slice(&rgba);
            }
        }
    }
}
