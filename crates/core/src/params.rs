//! Pattern parameters and helpers for reading them from a `serde_json::Value`.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail; they always produce a usable value.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::color::Srgb;
use crate::error::PatternError;

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 5;
/// Default number of grid columns.
pub const DEFAULT_COLS: usize = 5;
/// Default background color.
pub const DEFAULT_BACKGROUND: Srgb = Srgb::new(0.1, 0.1, 0.1);
/// Default rectangle base color.
pub const DEFAULT_RECT_BASE: Srgb = Srgb::new(0.2, 0.5, 0.8);
/// Default color variation factor.
pub const DEFAULT_COLOR_VARY: f64 = 0.3;

/// Largest grid size offered by the interactive rows/cols sliders.
pub const MAX_GRID: usize = 20;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only succeeds if the JSON value is a non-negative integer that fits in `usize`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Extracts a color from `params[name]`, returning `default` if missing or malformed.
///
/// Accepts a hex string (`"#rrggbb"`) or an array of three numbers in [0, 1].
pub fn param_color(params: &Value, name: &str, default: Srgb) -> Srgb {
    params
        .get(name)
        .and_then(|v| Srgb::deserialize(v).ok())
        .unwrap_or(default)
}

/// Parameters for the rectangle-grid pattern.
///
/// An immutable value built by the caller and passed into
/// [`generate`](crate::generate). Hosts that let users tweak parameters keep
/// their own copy and update it; see [`PatternHost`](crate::PatternHost).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternParams {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// Color drawn wherever no rectangle covers the canvas.
    pub background: Srgb,
    /// Color each rectangle's variation is centered on.
    pub rect_base: Srgb,
    /// Strength of the per-cell color variation. Typically in [0, 1];
    /// larger values are allowed and saturate through clamping.
    pub color_vary: f64,
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            background: DEFAULT_BACKGROUND,
            rect_base: DEFAULT_RECT_BASE,
            color_vary: DEFAULT_COLOR_VARY,
        }
    }
}

impl PatternParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            rows: param_usize(params, "rows", DEFAULT_ROWS),
            cols: param_usize(params, "cols", DEFAULT_COLS),
            background: param_color(params, "bg_color_rgb", DEFAULT_BACKGROUND),
            rect_base: param_color(params, "rect_base_color_rgb", DEFAULT_RECT_BASE),
            color_vary: param_f64(params, "rect_color_vary_factor", DEFAULT_COLOR_VARY),
        }
    }

    /// Current parameter values as a JSON object, using the same keys as
    /// [`PatternParams::from_json`].
    pub fn to_json(&self) -> Value {
        json!({
            "rows": self.rows,
            "cols": self.cols,
            "bg_color_rgb": self.background.to_array(),
            "rect_base_color_rgb": self.rect_base.to_array(),
            "rect_color_vary_factor": self.color_vary,
        })
    }

    /// Schema describing all parameters, their types, ranges, and defaults.
    pub fn param_schema() -> Value {
        json!({
            "rows": {
                "type": "integer",
                "default": DEFAULT_ROWS,
                "min": 1,
                "max": MAX_GRID,
                "description": "Number of grid rows"
            },
            "cols": {
                "type": "integer",
                "default": DEFAULT_COLS,
                "min": 1,
                "max": MAX_GRID,
                "description": "Number of grid columns"
            },
            "bg_color_rgb": {
                "type": "color",
                "default": DEFAULT_BACKGROUND.to_array(),
                "description": "Background color as RGB floats in [0, 1]"
            },
            "rect_base_color_rgb": {
                "type": "color",
                "default": DEFAULT_RECT_BASE.to_array(),
                "description": "Rectangle base color as RGB floats in [0, 1]"
            },
            "rect_color_vary_factor": {
                "type": "number",
                "default": DEFAULT_COLOR_VARY,
                "min": 0.0,
                "max": 1.0,
                "description": "Per-cell color variation around the base color"
            }
        })
    }

    /// Rejects grids with zero rows or columns.
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(PatternError::InvalidGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}
