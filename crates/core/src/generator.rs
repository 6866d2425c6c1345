//! Rectangle-grid pattern generator.
//!
//! The canvas is divided into `rows x cols` cells. Each cell gets a rectangle
//! inset by 10% of the cell size on every side, so a gutter of background
//! color separates neighbours. Rectangle colors vary around the base color:
//! red follows the row, green follows the column, and blue follows the
//! diagonal `row + col`, each centered so the middle of the grid keeps the
//! base value.
//!
//! Generation is a pure function of its inputs. Every call allocates and
//! returns a fresh [`PixelBuffer`], so concurrent calls never share state.

use crate::buffer::PixelBuffer;
use crate::canvas::CanvasSpec;
use crate::color::{clamp01, Srgb};
use crate::error::PatternError;
use crate::params::PatternParams;

/// Fraction of the cell width/height left empty on each side of a rectangle.
pub const PADDING_FRACTION: f64 = 0.1;

/// Alpha written for every pixel; the pattern is fully opaque.
const OPAQUE: f32 = 1.0;

/// Pixel extent of one cell's rectangle, as half-open ranges
/// `[x0, x1) x [y0, y1)`. Always non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x0: usize,
    pub x1: usize,
    pub y0: usize,
    pub y1: usize,
}

/// Generates the rectangle-grid pattern for `canvas`.
///
/// Returns a buffer of exactly `width * height * 4` values, all in [0, 1],
/// with alpha 1.0 everywhere. A zero-sized canvas yields an empty buffer.
///
/// Out-of-range background and base colors are clamped rather than rejected.
///
/// # Errors
///
/// - `PatternError::InvalidGrid` if `rows` or `cols` is zero.
/// - `PatternError::InvalidDimensions` if the buffer length overflows `usize`.
pub fn generate(canvas: CanvasSpec, params: &PatternParams) -> Result<PixelBuffer, PatternError> {
    params.validate()?;
    log::debug!(
        "generating {}x{} pattern: {}x{} grid, vary {}",
        canvas.width,
        canvas.height,
        params.rows,
        params.cols,
        params.color_vary
    );

    let mut buffer = PixelBuffer::filled(canvas, rgba(params.background.clamped()))?;
    if canvas.is_empty() {
        return Ok(buffer);
    }

    for r in 0..params.rows {
        for c in 0..params.cols {
            if let Some(rect) = cell_rect(r, c, canvas, params) {
                let color = rgba(cell_color(r, c, params));
                buffer.fill_rect(rect.x0, rect.x1, rect.y0, rect.y1, color);
            }
        }
    }

    Ok(buffer)
}

/// Color of the rectangle in grid cell `(r, c)`.
///
/// Each channel is `base + (t - 0.5) * vary`, clamped to [0, 1], where `t` is
/// the cell's normalized position along that channel's axis. An axis with a
/// single cell has no position to vary over and keeps the base value.
pub fn cell_color(r: usize, c: usize, params: &PatternParams) -> Srgb {
    let base = params.rect_base.clamped();
    let vary = params.color_vary;
    Srgb {
        r: vary_channel(base.r, r, params.rows.saturating_sub(1), vary),
        g: vary_channel(base.g, c, params.cols.saturating_sub(1), vary),
        b: vary_channel(
            base.b,
            r + c,
            params.rows.saturating_add(params.cols).saturating_sub(2),
            vary,
        ),
    }
}

/// `span` is the largest index on the axis; zero means the axis has one cell.
fn vary_channel(base: f64, index: usize, span: usize, vary: f64) -> f64 {
    if span == 0 {
        return clamp01(base);
    }
    let t = index as f64 / span.max(1) as f64;
    clamp01(base + (t - 0.5) * vary)
}

/// Pixel extent of the rectangle in grid cell `(r, c)`, or `None` if the
/// padding leaves no whole pixel to draw.
///
/// Cell bounds are real-valued; each edge is truncated toward zero and then
/// clipped to the canvas.
pub fn cell_rect(
    r: usize,
    c: usize,
    canvas: CanvasSpec,
    params: &PatternParams,
) -> Option<CellRect> {
    let cell_w = canvas.width as f64 / params.cols as f64;
    let cell_h = canvas.height as f64 / params.rows as f64;
    let pad_w = cell_w * PADDING_FRACTION;
    let pad_h = cell_h * PADDING_FRACTION;

    let x0 = to_pixel(c as f64 * cell_w + pad_w, canvas.width);
    let x1 = to_pixel((c + 1) as f64 * cell_w - pad_w, canvas.width);
    let y0 = to_pixel(r as f64 * cell_h + pad_h, canvas.height);
    let y1 = to_pixel((r + 1) as f64 * cell_h - pad_h, canvas.height);

    (x0 < x1 && y0 < y1).then_some(CellRect { x0, x1, y0, y1 })
}

/// Truncates toward zero, then clips into `[0, limit]`.
fn to_pixel(v: f64, limit: usize) -> usize {
    v.trunc().clamp(0.0, limit as f64) as usize
}

fn rgba(color: Srgb) -> [f32; 4] {
    [color.r as f32, color.g as f32, color.b as f32, OPAQUE]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;
    const BACKGROUND: [f32; 4] = [0.1, 0.1, 0.1, 1.0];

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn params(rows: usize, cols: usize, vary: f64) -> PatternParams {
        PatternParams {
            rows,
            cols,
            background: Srgb::new(0.1, 0.1, 0.1),
            rect_base: Srgb::new(0.7, 0.2, 0.2),
            color_vary: vary,
        }
    }

    // ---- cell_color ----

    #[test]
    fn cell_color_top_left_of_three_by_four() {
        let c = cell_color(0, 0, &params(3, 4, 0.7));
        assert!(approx_eq(c.r, 0.35), "red {}", c.r);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn cell_color_bottom_right_of_three_by_four() {
        // red: 0.7 + 0.5 * 0.7 = 1.05 -> 1.0
        // green: 0.2 + 0.5 * 0.7 = 0.55
        // blue: 0.2 + 0.5 * 0.7 = 0.55
        let c = cell_color(2, 3, &params(3, 4, 0.7));
        assert_eq!(c.r, 1.0);
        assert!(approx_eq(c.g, 0.55));
        assert!(approx_eq(c.b, 0.55));
    }

    #[test]
    fn cell_color_single_cell_keeps_base() {
        let c = cell_color(0, 0, &params(1, 1, 0.9));
        assert_eq!(c, Srgb::new(0.7, 0.2, 0.2));
    }

    #[test]
    fn cell_color_single_row_varies_green_and_blue_only() {
        let c = cell_color(0, 2, &params(1, 3, 0.4));
        assert!(approx_eq(c.r, 0.7));
        assert!(approx_eq(c.g, 0.4));
        // blue span is rows + cols - 2 = 2
        assert!(approx_eq(c.b, 0.4));
    }

    #[test]
    fn cell_color_zero_vary_is_base() {
        let p = params(4, 4, 0.0);
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(cell_color(r, c, &p), Srgb::new(0.7, 0.2, 0.2));
            }
        }
    }

    #[test]
    fn cell_color_clamps_out_of_range_base() {
        let p = PatternParams {
            rect_base: Srgb::new(2.0, -1.0, 0.5),
            ..params(1, 1, 0.3)
        };
        assert_eq!(cell_color(0, 0, &p), Srgb::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn cell_color_huge_grid_does_not_overflow() {
        let p = params(usize::MAX, usize::MAX, 0.4);
        let c = cell_color(0, 0, &p);
        assert!(approx_eq(c.r, 0.5));
        assert!(approx_eq(c.g, 0.0));
        assert!(approx_eq(c.b, 0.0));
    }

    // ---- cell_rect ----

    #[test]
    fn cell_rect_applies_ten_percent_padding() {
        // 200 / 4 = 50 wide cells, 150 / 3 = 50 tall cells, padding 5.
        let canvas = CanvasSpec::new(200, 150);
        let p = params(3, 4, 0.7);
        assert_eq!(
            cell_rect(0, 0, canvas, &p),
            Some(CellRect {
                x0: 5,
                x1: 45,
                y0: 5,
                y1: 45
            })
        );
        assert_eq!(
            cell_rect(2, 3, canvas, &p),
            Some(CellRect {
                x0: 155,
                x1: 195,
                y0: 105,
                y1: 145
            })
        );
    }

    #[test]
    fn cell_rect_truncates_fractional_bounds() {
        // cell 10 / 3 = 3.33.., pad 0.33..: x0 = trunc(3.66..) = 3,
        // x1 = trunc(6.33..) = 6
        let rect = cell_rect(0, 1, CanvasSpec::new(10, 10), &params(1, 3, 0.0)).unwrap();
        assert_eq!(rect.x0, 3);
        assert_eq!(rect.x1, 6);
        assert_eq!(rect.y0, 1);
        assert_eq!(rect.y1, 9);
    }

    #[test]
    fn cell_rect_single_pixel_canvas_is_degenerate() {
        assert_eq!(
            cell_rect(0, 0, CanvasSpec::new(1, 1), &params(1, 1, 0.3)),
            None
        );
    }

    #[test]
    fn cell_rect_more_cells_than_pixels_is_degenerate() {
        let p = params(1, 20, 0.3);
        assert!((0..20).all(|c| cell_rect(0, c, CanvasSpec::new(10, 10), &p).is_none()));
    }

    // ---- generate ----

    #[test]
    fn generate_fills_gutter_with_background() {
        let buf = generate(CanvasSpec::new(200, 150), &params(3, 4, 0.7)).unwrap();
        assert_eq!(buf.pixel(0, 0), Some(BACKGROUND));
        // vertical gutter between columns 0 and 1
        assert_eq!(buf.pixel(50, 25), Some(BACKGROUND));
    }

    #[test]
    fn generate_fills_cell_with_its_color() {
        let p = params(3, 4, 0.7);
        let buf = generate(CanvasSpec::new(200, 150), &p).unwrap();
        let expected = rgba(cell_color(0, 0, &p));
        assert_eq!(buf.pixel(5, 5), Some(expected));
        assert_eq!(buf.pixel(44, 44), Some(expected));
        assert_eq!(buf.pixel(45, 44), Some(BACKGROUND));
        assert_eq!(buf.pixel(44, 45), Some(BACKGROUND));
    }

    #[test]
    fn generate_zero_sized_canvas_is_empty() {
        let p = PatternParams::default();
        assert!(generate(CanvasSpec::new(0, 0), &p).unwrap().is_empty());
        assert!(generate(CanvasSpec::new(0, 50), &p).unwrap().is_empty());
        assert!(generate(CanvasSpec::new(50, 0), &p).unwrap().is_empty());
    }

    #[test]
    fn generate_rejects_zero_grid() {
        let canvas = CanvasSpec::new(10, 10);
        assert!(matches!(
            generate(canvas, &params(0, 3, 0.3)),
            Err(PatternError::InvalidGrid { rows: 0, cols: 3 })
        ));
        assert!(matches!(
            generate(canvas, &params(3, 0, 0.3)),
            Err(PatternError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn generate_rejects_zero_grid_even_on_empty_canvas() {
        assert!(generate(CanvasSpec::new(0, 0), &params(0, 0, 0.3)).is_err());
    }

    #[test]
    fn generate_clamps_background() {
        let p = PatternParams {
            background: Srgb::new(-0.5, 1.5, 0.25),
            ..params(2, 2, 0.3)
        };
        let buf = generate(CanvasSpec::new(20, 20), &p).unwrap();
        assert_eq!(buf.pixel(0, 0), Some([0.0, 1.0, 0.25, 1.0]));
    }

    #[test]
    fn generate_single_pixel_is_background() {
        let buf = generate(CanvasSpec::new(1, 1), &params(1, 1, 0.3)).unwrap();
        assert_eq!(buf.data(), &BACKGROUND);
    }

    #[test]
    fn generate_more_cells_than_pixels_is_all_background() {
        let buf = generate(CanvasSpec::new(10, 10), &params(20, 20, 0.3)).unwrap();
        assert!(buf.pixels().all(|px| px == BACKGROUND));
    }

    #[test]
    fn generate_concurrent_calls_agree() {
        let canvas = CanvasSpec::new(64, 48);
        let p = params(4, 6, 0.5);
        let reference = generate(canvas, &p).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| generate(canvas, &p))).collect();
            for h in handles {
                assert_eq!(h.join().unwrap().unwrap(), reference);
            }
        });
    }
}
