//! Seeded parameter generator for watermarks.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng as _, RngCore as _, SeedableRng as _};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{StampError, StampResult};
use crate::text::font::{FontStyle, TEXT_SCALE, TextExtent, text_extent};
use crate::watermark::params::{PositionBounds, WatermarkParams};

/// Pseudo-random stream feeding watermark parameters.
///
/// Seeded once and advanced by every draw; pass it by `&mut` through a run so
/// consecutive images get different watermarks.
#[derive(Clone, Debug)]
pub struct WatermarkRng {
    seed: u64,
    inner: StdRng,
}

impl WatermarkRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from the wall clock (nanoseconds since the Unix epoch).
    pub fn from_time() -> Self {
        Self::from_seed(time_seed())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Integer in `[lo, hi)`.
    pub fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.inner.gen_range(lo..hi)
    }

    /// Real in `[lo, hi)`.
    pub fn uniform_real(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.inner.gen_range(lo..hi)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    /// One color from one 32-bit draw.
    pub fn color(&mut self) -> Rgb8 {
        Rgb8::from_draw(self.next_u32())
    }

    /// Real in `[lo, hi]`. An inverted range collapses to `lo`; a value is
    /// still drawn so the stream stays aligned.
    pub fn sample_range(&mut self, lo: f64, hi: f64) -> f64 {
        let draw = self.next_u32();
        if hi <= lo {
            return lo;
        }
        (lo + (hi - lo) * (f64::from(draw) / f64::from(u32::MAX))).min(hi)
    }
}

pub(crate) fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Draw one [`WatermarkParams`] for `text` on a `canvas_width x canvas_height` canvas.
///
/// Draw order is fixed: style, scale, thickness, color, angle, then the anchor
/// (after measuring the text with the chosen style and thickness).
pub fn draw_params(
    rng: &mut WatermarkRng,
    text: &str,
    canvas_width: u32,
    canvas_height: u32,
) -> StampResult<WatermarkParams> {
    if canvas_width == 0 || canvas_height == 0 {
        return Err(StampError::invalid_input(format!(
            "canvas dimensions must be non-zero, got {canvas_width}x{canvas_height}"
        )));
    }

    let style_index = rng.uniform_int(0, 8);
    let font_style = FontStyle::from_index(style_index).unwrap_or(FontStyle::Simplex);
    let font_scale = f64::from(rng.uniform_int(0, 100)) * 0.05 + 0.1;
    let thickness = rng.uniform_int(1, 5);
    let color = rng.color();
    let angle_deg = rng.uniform_real(-90.0, 90.0);

    let extent = text_extent(text, font_style, TEXT_SCALE, thickness)?;
    let (anchor_x, anchor_y) = draw_anchor(rng, canvas_width, canvas_height, thickness, &extent);

    Ok(WatermarkParams {
        font_style,
        font_scale,
        thickness,
        color,
        angle_deg,
        anchor_x,
        anchor_y,
    })
}

/// Anchor inside [`PositionBounds`]; inverted ranges clamp to their lower bound.
pub fn draw_anchor(
    rng: &mut WatermarkRng,
    canvas_width: u32,
    canvas_height: u32,
    thickness: u32,
    extent: &TextExtent,
) -> (f64, f64) {
    let b = PositionBounds::new(canvas_width, canvas_height, thickness, extent);
    if b.is_inverted() {
        tracing::debug!(?b, "watermark text exceeds canvas, clamping anchor");
    }
    let x = rng.sample_range(b.x_lo, b.x_hi);
    let y = rng.sample_range(b.y_lo, b.y_hi);
    (x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/watermark/random.rs"]
mod tests;
