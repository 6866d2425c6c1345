#![deny(unsafe_code)]
//! Core types for the grid-art pattern generator.
//!
//! Provides the [`generate`] function that turns a [`CanvasSpec`] and
//! [`PatternParams`] into a flat RGBA float [`PixelBuffer`], the [`Srgb`]
//! color type, JSON parameter helpers, and [`PatternHost`], which keeps the
//! current parameters for interactive front-ends.

pub mod buffer;
pub mod canvas;
pub mod color;
pub mod error;
pub mod generator;
pub mod host;
pub mod params;

pub use buffer::PixelBuffer;
pub use canvas::CanvasSpec;
pub use color::Srgb;
pub use error::PatternError;
pub use generator::generate;
pub use host::{ParamUpdate, PatternHost, TextureSink};
pub use params::PatternParams;
