use crate::foundation::core::{Rect, Rgb8};
use crate::text::font::{FontStyle, TextExtent};

/// Visual parameters of one watermark. Drawn fresh per image and consumed once.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WatermarkParams {
    pub font_style: FontStyle,
    /// Drawn in `[0.1, 5.1)` and recorded; glyphs are always rendered at
    /// [`TEXT_SCALE`](crate::TEXT_SCALE).
    pub font_scale: f64,
    /// Stroke thickness in `1..=4`.
    pub thickness: u32,
    pub color: Rgb8,
    /// Rotation in degrees, `[-90, 90)`, counter-clockwise positive.
    pub angle_deg: f64,
    /// Baseline-left anchor x.
    pub anchor_x: f64,
    /// Baseline-left anchor y.
    pub anchor_y: f64,
}

/// Inclusive anchor ranges that keep un-rotated text inside the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionBounds {
    pub x_lo: f64,
    pub x_hi: f64,
    pub y_lo: f64,
    pub y_hi: f64,
}

impl PositionBounds {
    /// `x in [t - min(left, 0), W - 2t - right]`, `y in [2t + ascent, H - t - descent]`.
    pub fn new(canvas_width: u32, canvas_height: u32, thickness: u32, extent: &TextExtent) -> Self {
        let t = f64::from(thickness);
        let (w, h) = (f64::from(canvas_width), f64::from(canvas_height));
        Self {
            x_lo: t - extent.left.min(0.0),
            x_hi: w - 2.0 * t - extent.right,
            y_lo: 2.0 * t + extent.ascent,
            y_hi: h - t - extent.descent,
        }
    }

    /// Return `true` when either range is empty, i.e. the text is too large for the canvas.
    pub fn is_inverted(&self) -> bool {
        self.x_hi < self.x_lo || self.y_hi < self.y_lo
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x_lo..=self.x_hi).contains(&x) && (self.y_lo..=self.y_hi).contains(&y)
    }
}

impl WatermarkParams {
    /// Pixel box covered by the un-rotated ink, stroke included.
    pub fn footprint(&self, extent: &TextExtent) -> Rect {
        let half = extent.stroke_width / 2.0;
        Rect::new(
            self.anchor_x + extent.left - half,
            self.anchor_y - extent.ascent - half,
            self.anchor_x + extent.right + half,
            self.anchor_y + extent.descent + half,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/watermark/params.rs"]
mod tests;
