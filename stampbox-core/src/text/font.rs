//! Built-in single-stroke vector font.
//!
//! Glyphs are SVG path data in font units: baseline at `y = 0`, y pointing down,
//! cap height 8, x-height 5, descenders reaching `y = 3`. Paths are centerlines;
//! stroke width is applied at render time.

use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, Point, Vec2};
use crate::foundation::error::{StampError, StampResult};

/// Pixel height of one font unit at scale 1 and style size 1.
///
/// Cap height 8 units -> 21 px, the nominal glyph height of a unit-scale font.
pub const PX_PER_UNIT: f64 = 21.0 / 8.0;

/// Text scale used for every watermark; `fontScale` in the parameters is not applied.
pub const TEXT_SCALE: f64 = 2.0;

/// Glyph substituted for characters the font does not cover.
const FALLBACK: char = '?';

/// Eight presentation variants, indexed 0..=7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FontStyle {
    Simplex,
    Plain,
    Duplex,
    Complex,
    Triplex,
    ComplexSmall,
    ScriptSimplex,
    ScriptComplex,
}

/// Size, weight, spacing and slant of a [`FontStyle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleMetrics {
    /// Multiplier on [`PX_PER_UNIT`].
    pub size: f64,
    /// Stroke width as a multiple of the requested thickness. Never above 2.
    pub weight: f64,
    /// Multiplier on glyph advances.
    pub tracking: f64,
    /// Horizontal shear per unit of height above the baseline.
    pub slant: f64,
}

impl FontStyle {
    /// All styles in index order.
    pub const ALL: [FontStyle; 8] = [
        FontStyle::Simplex,
        FontStyle::Plain,
        FontStyle::Duplex,
        FontStyle::Complex,
        FontStyle::Triplex,
        FontStyle::ComplexSmall,
        FontStyle::ScriptSimplex,
        FontStyle::ScriptComplex,
    ];

    /// Style for `index`, or `None` when `index > 7`.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn metrics(self) -> StyleMetrics {
        let (size, weight, tracking, slant) = match self {
            FontStyle::Simplex => (1.0, 1.0, 1.0, 0.0),
            FontStyle::Plain => (0.6, 1.0, 1.0, 0.0),
            FontStyle::Duplex => (1.0, 1.5, 1.0, 0.0),
            FontStyle::Complex => (1.05, 1.5, 1.05, 0.0),
            FontStyle::Triplex => (1.05, 2.0, 1.1, 0.0),
            FontStyle::ComplexSmall => (0.75, 1.5, 1.0, 0.0),
            FontStyle::ScriptSimplex => (1.0, 1.0, 0.95, 0.3),
            FontStyle::ScriptComplex => (1.0, 1.5, 0.95, 0.3),
        };
        StyleMetrics {
            size,
            weight,
            tracking,
            slant,
        }
    }
}

/// Ink box of laid-out text relative to its baseline origin, in pixels.
///
/// Measured on the stroke centerlines; `stroke_width` is reported alongside.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Leftmost ink x. Negative when a slanted descender leans past the origin.
    pub left: f64,
    /// Rightmost ink x.
    pub right: f64,
    /// Height of ink above the baseline.
    pub ascent: f64,
    /// Depth of ink below the baseline.
    pub descent: f64,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl TextExtent {
    pub fn width(&self) -> f64 {
        self.right
    }

    pub fn height(&self) -> f64 {
        self.ascent
    }
}

/// Stroke width in pixels for `style` at `thickness`.
pub fn stroke_width(style: FontStyle, thickness: u32) -> f64 {
    f64::from(thickness.max(1)) * style.metrics().weight
}

/// Lay out `text` as centerline strokes with the baseline starting at `origin`.
pub fn layout_text(text: &str, style: FontStyle, scale: f64, origin: Point) -> StampResult<BezPath> {
    let m = style.metrics();
    let px = PX_PER_UNIT * scale * m.size;
    let to_px = Affine::translate(origin.to_vec2())
        * Affine::scale(px)
        * Affine::new([1.0, 0.0, -m.slant, 1.0, 0.0, 0.0]);

    let mut out = BezPath::new();
    let mut pen = 0.0f64;
    for ch in text.chars() {
        let (advance, d) = glyph_or_fallback(ch);
        if !d.is_empty() {
            let mut glyph = BezPath::from_svg(d).map_err(|e| {
                StampError::render(format!("glyph {ch:?} has invalid path data: {e}"))
            })?;
            glyph.apply_affine(to_px * Affine::translate(Vec2::new(pen, 0.0)));
            out.extend(glyph);
        }
        pen += advance * m.tracking;
    }
    Ok(out)
}

/// Measure `text` the way [`layout_text`] would place it at the origin.
pub fn text_extent(text: &str, style: FontStyle, scale: f64, thickness: u32) -> StampResult<TextExtent> {
    let path = layout_text(text, style, scale, Point::ORIGIN)?;
    let stroke_width = stroke_width(style, thickness);
    if path.elements().is_empty() {
        return Ok(TextExtent {
            stroke_width,
            ..TextExtent::default()
        });
    }
    let bbox = path.bounding_box();
    Ok(TextExtent {
        left: bbox.x0,
        right: bbox.x1,
        ascent: (-bbox.y0).max(0.0),
        descent: bbox.y1.max(0.0),
        stroke_width,
    })
}

/// Return `true` when `ch` has its own glyph.
pub fn has_glyph(ch: char) -> bool {
    glyph(ch).is_some()
}

fn glyph_or_fallback(ch: char) -> (f64, &'static str) {
    glyph(ch)
        .or_else(|| glyph(FALLBACK))
        .unwrap_or((6.0, ""))
}

fn glyph(ch: char) -> Option<(f64, &'static str)> {
    let g = match ch {
        ' ' => (4.0, ""),
        'A' => (7.0, "M0,0 L2.5,-8 L5,0 M1,-3 L4,-3"),
        'B' => (7.0, "M0,0 L0,-8 L3,-8 Q5,-8 5,-6 Q5,-4 3,-4 L0,-4 M3,-4 Q5,-4 5,-2 Q5,0 3,0 L0,0"),
        'C' => (7.0, "M5,-7 Q4,-8 2.5,-8 Q0,-8 0,-4 Q0,0 2.5,0 Q4,0 5,-1"),
        'D' => (7.0, "M0,0 L0,-8 L2,-8 Q5,-8 5,-4 Q5,0 2,0 Z"),
        'E' => (7.0, "M5,-8 L0,-8 L0,0 L5,0 M0,-4 L4,-4"),
        'F' => (6.5, "M5,-8 L0,-8 L0,0 M0,-4 L4,-4"),
        'G' => (7.0, "M5,-7 Q4,-8 2.5,-8 Q0,-8 0,-4 Q0,0 2.5,0 Q5,0 5,-3 L5,-4 L3,-4"),
        'H' => (7.0, "M0,0 L0,-8 M5,0 L5,-8 M0,-4 L5,-4"),
        'I' => (5.5, "M0.5,-8 L3.5,-8 M2,-8 L2,0 M0.5,0 L3.5,0"),
        'J' => (7.0, "M5,-8 L5,-2 Q5,0 2.5,0 Q0,0 0,-2"),
        'K' => (7.0, "M0,0 L0,-8 M5,-8 L0,-3 M1.5,-4.5 L5,0"),
        'L' => (6.5, "M0,-8 L0,0 L5,0"),
        'M' => (8.0, "M0,0 L0,-8 L3,-3 L6,-8 L6,0"),
        'N' => (7.0, "M0,0 L0,-8 L5,0 L5,-8"),
        'O' => (7.0, "M2.5,-8 Q0,-8 0,-4 Q0,0 2.5,0 Q5,0 5,-4 Q5,-8 2.5,-8 Z"),
        'P' => (7.0, "M0,0 L0,-8 L3,-8 Q5,-8 5,-6 Q5,-4 3,-4 L0,-4"),
        'Q' => (7.0, "M2.5,-8 Q0,-8 0,-4 Q0,0 2.5,0 Q5,0 5,-4 Q5,-8 2.5,-8 Z M3,-2 L5.5,0.5"),
        'R' => (7.0, "M0,0 L0,-8 L3,-8 Q5,-8 5,-6 Q5,-4 3,-4 L0,-4 M2.5,-4 L5,0"),
        'S' => (7.0, "M5,-7 Q4,-8 2.5,-8 Q0,-8 0,-6 Q0,-4 2.5,-4 Q5,-4 5,-2 Q5,0 2.5,0 Q1,0 0,-1"),
        'T' => (8.0, "M0,-8 L6,-8 M3,-8 L3,0"),
        'U' => (7.0, "M0,-8 L0,-2 Q0,0 2.5,0 Q5,0 5,-2 L5,-8"),
        'V' => (7.0, "M0,-8 L2.5,0 L5,-8"),
        'W' => (9.0, "M0,-8 L1.5,0 L3.5,-6 L5.5,0 L7,-8"),
        'X' => (7.0, "M0,-8 L5,0 M5,-8 L0,0"),
        'Y' => (7.0, "M0,-8 L2.5,-4 L5,-8 M2.5,-4 L2.5,0"),
        'Z' => (7.0, "M0,-8 L5,-8 L0,0 L5,0"),
        'a' => (6.0, "M4,-5 L4,0 M4,-1.5 Q3.5,0 2,0 Q0,0 0,-2.5 Q0,-5 2,-5 Q3.5,-5 4,-3.5"),
        'b' => (6.0, "M0,-8 L0,0 M0,-3.5 Q0.5,-5 2,-5 Q4,-5 4,-2.5 Q4,0 2,0 Q0.5,0 0,-1.5"),
        'c' => (6.0, "M4,-4 Q3.5,-5 2,-5 Q0,-5 0,-2.5 Q0,0 2,0 Q3.5,0 4,-1"),
        'd' => (6.0, "M4,-8 L4,0 M4,-3.5 Q3.5,-5 2,-5 Q0,-5 0,-2.5 Q0,0 2,0 Q3.5,0 4,-1.5"),
        'e' => (6.0, "M0,-2.5 L4,-2.5 Q4,-5 2,-5 Q0,-5 0,-2.5 Q0,0 2,0 Q3.5,0 4,-1"),
        'f' => (5.0, "M3.5,-8 Q1.5,-8 1.5,-6 L1.5,0 M0,-5 L3,-5"),
        'g' => (6.0, "M4,-5 L4,1 Q4,3 2,3 Q0.5,3 0,2 M4,-3.5 Q3.5,-5 2,-5 Q0,-5 0,-2.5 Q0,0 2,0 Q3.5,0 4,-1.5"),
        'h' => (6.0, "M0,-8 L0,0 M0,-3.5 Q0.5,-5 2,-5 Q4,-5 4,-3 L4,0"),
        'i' => (3.0, "M1,-5 L1,0 M1,-7 L1,-6.6"),
        'j' => (4.0, "M2,-5 L2,1.5 Q2,3 0.5,3 M2,-7 L2,-6.6"),
        'k' => (6.0, "M0,-8 L0,0 M4,-5 L0,-1.5 M1.3,-2.6 L4,0"),
        'l' => (3.0, "M1,-8 L1,0"),
        'm' => (8.0, "M0,0 L0,-5 M0,-3.5 Q0.5,-5 1.8,-5 Q3,-5 3,-3 L3,0 M3,-3.5 Q3.5,-5 4.8,-5 Q6,-5 6,-3 L6,0"),
        'n' => (6.0, "M0,0 L0,-5 M0,-3.5 Q0.5,-5 2,-5 Q4,-5 4,-3 L4,0"),
        'o' => (6.0, "M2,-5 Q0,-5 0,-2.5 Q0,0 2,0 Q4,0 4,-2.5 Q4,-5 2,-5 Z"),
        'p' => (6.0, "M0,-5 L0,3 M0,-3.5 Q0.5,-5 2,-5 Q4,-5 4,-2.5 Q4,0 2,0 Q0.5,0 0,-1.5"),
        'q' => (6.0, "M4,-5 L4,3 M4,-3.5 Q3.5,-5 2,-5 Q0,-5 0,-2.5 Q0,0 2,0 Q3.5,0 4,-1.5"),
        'r' => (5.0, "M0,0 L0,-5 M0,-3 Q0.5,-5 3,-5"),
        's' => (6.0, "M4,-4.3 Q3.5,-5 2,-5 Q0,-5 0,-3.8 Q0,-2.5 2,-2.5 Q4,-2.5 4,-1.2 Q4,0 2,0 Q0.5,0 0,-0.7"),
        't' => (5.0, "M1.5,-7 L1.5,-1 Q1.5,0 3,0 M0,-5 L3,-5"),
        'u' => (6.0, "M0,-5 L0,-2 Q0,0 2,0 Q3.5,0 4,-1.5 M4,-5 L4,0"),
        'v' => (6.0, "M0,-5 L2,0 L4,-5"),
        'w' => (8.0, "M0,-5 L1.5,0 L3,-4 L4.5,0 L6,-5"),
        'x' => (6.0, "M0,-5 L4,0 M4,-5 L0,0"),
        'y' => (6.0, "M0,-5 L2,0 M4,-5 L1,3"),
        'z' => (6.0, "M0,-5 L4,-5 L0,0 L4,0"),
        '0' => (6.0, "M2,-8 Q0,-8 0,-4 Q0,0 2,0 Q4,0 4,-4 Q4,-8 2,-8 Z"),
        '1' => (6.0, "M0.5,-6.5 L2,-8 L2,0 M0.5,0 L3.5,0"),
        '2' => (6.0, "M0,-6.5 Q0.5,-8 2,-8 Q4,-8 4,-6 Q4,-4.5 0,0 L4,0"),
        '3' => (6.0, "M0,-7 Q0.5,-8 2,-8 Q4,-8 4,-6 Q4,-4 2,-4 Q4,-4 4,-2 Q4,0 2,0 Q0.5,0 0,-1"),
        '4' => (6.0, "M3,0 L3,-8 L0,-2.5 L4,-2.5"),
        '5' => (6.0, "M4,-8 L0.5,-8 L0,-4.5 Q1,-5 2,-5 Q4,-5 4,-2.5 Q4,0 2,0 Q0.5,0 0,-1"),
        '6' => (6.0, "M3.7,-7.5 Q3,-8 2,-8 Q0,-8 0,-4 Q0,0 2,0 Q4,0 4,-2.5 Q4,-5 2,-5 Q0.5,-5 0,-3.5"),
        '7' => (6.0, "M0,-8 L4,-8 L1.5,0"),
        '8' => (6.0, "M2,-4 Q0,-4 0,-6 Q0,-8 2,-8 Q4,-8 4,-6 Q4,-4 2,-4 Q0,-4 0,-2 Q0,0 2,0 Q4,0 4,-2 Q4,-4 2,-4 Z"),
        '9' => (6.0, "M0.3,-0.5 Q1,0 2,0 Q4,0 4,-4 Q4,-8 2,-8 Q0,-8 0,-5.5 Q0,-3 2,-3 Q3.5,-3 4,-4.5"),
        '.' => (3.0, "M1,-0.4 L1,0"),
        ',' => (3.0, "M1,-0.5 L0.5,1.5"),
        ':' => (3.0, "M1,-4.4 L1,-4 M1,-0.4 L1,0"),
        ';' => (3.0, "M1,-4.4 L1,-4 M1,-0.5 L0.5,1.5"),
        '!' => (3.0, "M1,-8 L1,-2.5 M1,-0.4 L1,0"),
        '?' => (6.0, "M0,-6.5 Q0.5,-8 2,-8 Q4,-8 4,-6 Q4,-4.5 2,-3.5 L2,-2.3 M2,-0.4 L2,0"),
        '\'' => (3.0, "M1,-8 L1,-6"),
        '"' => (4.0, "M0.5,-8 L0.5,-6 M2.5,-8 L2.5,-6"),
        '`' => (3.0, "M0.5,-8 L1.5,-6.5"),
        '-' => (5.0, "M0,-3 L3,-3"),
        '_' => (7.0, "M0,1 L5,1"),
        '+' => (6.0, "M0,-3 L4,-3 M2,-5 L2,-1"),
        '=' => (6.0, "M0,-4 L4,-4 M0,-2 L4,-2"),
        '*' => (6.0, "M2,-7 L2,-3 M0.3,-6 L3.7,-4 M3.7,-6 L0.3,-4"),
        '/' => (6.0, "M0,1 L4,-8"),
        '\\' => (6.0, "M0,-8 L4,1"),
        '|' => (3.0, "M1,-9 L1,2"),
        '<' => (6.0, "M4,-6 L0,-3 L4,0"),
        '>' => (6.0, "M0,-6 L4,-3 L0,0"),
        '^' => (6.0, "M0,-5 L2,-8 L4,-5"),
        '~' => (6.0, "M0,-3 Q1,-4.5 2,-3.5 Q3,-2.5 4,-4"),
        '(' => (4.0, "M2.5,-8.5 Q0,-6 0,-3 Q0,0 2.5,2"),
        ')' => (4.0, "M0,-8.5 Q2.5,-6 2.5,-3 Q2.5,0 0,2"),
        '[' => (4.0, "M2.5,-8.5 L0,-8.5 L0,2 L2.5,2"),
        ']' => (4.0, "M0,-8.5 L2.5,-8.5 L2.5,2 L0,2"),
        '{' => (5.0, "M3,-8.5 Q1.5,-8.5 1.5,-7 L1.5,-4.5 Q1.5,-3.2 0,-3.2 Q1.5,-3.2 1.5,-2 L1.5,0.5 Q1.5,2 3,2"),
        '}' => (5.0, "M0,-8.5 Q1.5,-8.5 1.5,-7 L1.5,-4.5 Q1.5,-3.2 3,-3.2 Q1.5,-3.2 1.5,-2 L1.5,0.5 Q1.5,2 0,2"),
        '#' => (7.0, "M1.5,-7 L1,0 M3.5,-7 L3,0 M0,-5 L5,-5 M0,-2 L4.5,-2"),
        '$' => (6.0, "M4,-6.5 Q3.5,-7 2,-7 Q0,-7 0,-5.5 Q0,-4 2,-4 Q4,-4 4,-2.5 Q4,-1 2,-1 Q0.5,-1 0,-1.5 M2,-8 L2,0"),
        '%' => (7.0, "M0,0 L5,-8 M1,-8 Q0,-8 0,-7 Q0,-6 1,-6 Q2,-6 2,-7 Q2,-8 1,-8 Z M4,-2 Q3,-2 3,-1 Q3,0 4,0 Q5,0 5,-1 Q5,-2 4,-2 Z"),
        '&' => (7.0, "M5,0 L1,-5.5 Q0,-7 1.5,-8 Q3,-8 3,-6.5 Q3,-5.5 1,-4 Q0,-3 0,-1.8 Q0,0 2,0 Q3.5,0 5,-3"),
        '@' => (9.0, "M5,-5.5 L5,-3 M5,-4 Q5,-5.5 3.5,-5.5 Q2,-5.5 2,-4 Q2,-2.5 3.5,-2.5 Q5,-2.5 5,-4 Q5,-2 6,-2 Q7,-2 7,-4 Q7,-8 3.5,-8 Q0,-8 0,-4 Q0,0 3.5,0 Q5,0 6,-0.7"),
        _ => return None,
    };
    Some(g)
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
