#![deny(unsafe_code)]
//! Output helpers for grid-art pixel buffers.
//!
//! The generator's float RGBA buffer is the canonical representation. This
//! crate converts it to 8-bit RGBA for consumers that need bytes, and writes
//! PNG snapshots (feature `png`, default on) so builds that only need the
//! conversion do not pull in the `image` crate.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::to_rgba8;

#[cfg(feature = "png")]
pub use snapshot::write_png;
