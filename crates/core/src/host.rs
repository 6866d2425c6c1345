//! State holder for interactive front-ends.
//!
//! A control surface (sliders, color pickers, a "regenerate" button) owns a
//! [`PatternHost`]. Each control change becomes a [`ParamUpdate`]; the host
//! applies it to its current [`PatternParams`], regenerates the pattern, checks
//! the buffer, and hands it to a [`TextureSink`] for display.
//!
//! The generator itself stays stateless: the host is the only place where the
//! "current parameters" live.

use crate::buffer::PixelBuffer;
use crate::canvas::CanvasSpec;
use crate::color::Srgb;
use crate::error::PatternError;
use crate::generator::generate;
use crate::params::PatternParams;

/// Destination for generated buffers, e.g. a float RGBA texture.
///
/// This trait is object-safe so hosts can hold a `Box<dyn TextureSink>`.
pub trait TextureSink {
    /// Replaces the displayed image with `data` (`width * height * 4` floats).
    fn upload(&mut self, width: usize, height: usize, data: &[f32]) -> Result<(), PatternError>;
}

impl<S: TextureSink + ?Sized> TextureSink for Box<S> {
    fn upload(&mut self, width: usize, height: usize, data: &[f32]) -> Result<(), PatternError> {
        (**self).upload(width, height, data)
    }
}

/// A single change reported by a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamUpdate {
    Rows(usize),
    Cols(usize),
    Background(Srgb),
    RectBase(Srgb),
    ColorVary(f64),
}

impl ParamUpdate {
    /// Writes this change into `params`.
    pub fn apply(self, params: &mut PatternParams) {
        match self {
            ParamUpdate::Rows(rows) => params.rows = rows,
            ParamUpdate::Cols(cols) => params.cols = cols,
            ParamUpdate::Background(color) => params.background = color,
            ParamUpdate::RectBase(color) => params.rect_base = color,
            ParamUpdate::ColorVary(vary) => params.color_vary = vary,
        }
    }
}

/// Owns the current parameters for a fixed-size canvas and pushes a freshly
/// generated buffer to its sink after every change.
pub struct PatternHost<S: TextureSink> {
    canvas: CanvasSpec,
    params: PatternParams,
    sink: S,
    generation: u64,
}

impl<S: TextureSink> PatternHost<S> {
    /// Creates a host. Nothing is drawn until [`initial_draw`](Self::initial_draw)
    /// or the first update.
    pub fn new(canvas: CanvasSpec, params: PatternParams, sink: S) -> Self {
        Self {
            canvas,
            params,
            sink,
            generation: 0,
        }
    }

    pub fn canvas(&self) -> CanvasSpec {
        self.canvas
    }

    pub fn params(&self) -> &PatternParams {
        &self.params
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Number of buffers successfully uploaded so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Draws the pattern for the starting parameters.
    pub fn initial_draw(&mut self) -> Result<(), PatternError> {
        log::info!(
            "initial draw on {}x{} canvas",
            self.canvas.width,
            self.canvas.height
        );
        self.regenerate()
    }

    /// Applies one control change and redraws.
    ///
    /// The change is kept even if regeneration fails, matching a control
    /// that already shows the new value.
    pub fn apply(&mut self, update: ParamUpdate) -> Result<(), PatternError> {
        log::debug!("applying {update:?}");
        update.apply(&mut self.params);
        self.regenerate()
    }

    /// Replaces every parameter at once and redraws.
    pub fn replace_params(&mut self, params: PatternParams) -> Result<(), PatternError> {
        self.params = params;
        self.regenerate()
    }

    /// Regenerates with the current parameters and uploads the result.
    ///
    /// Returns `PatternError::BufferSizeMismatch` without uploading if the
    /// buffer does not cover the canvas.
    pub fn regenerate(&mut self) -> Result<(), PatternError> {
        let buffer = generate(self.canvas, &self.params)
            .inspect_err(|e| log::warn!("pattern generation rejected: {e}"))?;
        self.upload(&buffer)
    }

    fn upload(&mut self, buffer: &PixelBuffer) -> Result<(), PatternError> {
        let expected = self.canvas.buffer_len()?;
        if buffer.len() != expected {
            log::error!(
                "generated buffer has {} values, expected {expected}; skipping upload",
                buffer.len()
            );
            return Err(PatternError::BufferSizeMismatch {
                expected,
                got: buffer.len(),
            });
        }
        self.sink
            .upload(self.canvas.width, self.canvas.height, buffer.data())?;
        self.generation += 1;
        log::debug!(
            "uploaded generation {} ({} values)",
            self.generation,
            buffer.len()
        );
        Ok(())
    }
}
