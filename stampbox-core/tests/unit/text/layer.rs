use super::*;
use crate::foundation::core::Rgb8;
use crate::text::font::{FontStyle, text_extent};

fn params(angle_deg: f64) -> WatermarkParams {
    WatermarkParams {
        font_style: FontStyle::Triplex,
        font_scale: 1.0,
        thickness: 4,
        color: Rgb8::new(200, 100, 50),
        angle_deg,
        anchor_x: 20.0,
        anchor_y: 100.0,
    }
}

fn lit_pixels(r: &Raster) -> Vec<(u32, u32, Rgb8)> {
    let mut out = Vec::new();
    for y in 0..r.height() {
        for x in 0..r.width() {
            let px = r.pixel(x, y).unwrap();
            if !px.is_black() {
                out.push((x, y, px));
            }
        }
    }
    out
}

#[test]
fn glyph_ink_stays_inside_footprint() {
    let p = params(0.0);
    let layer = render_text_layer(300, 160, "Desung", &p).unwrap();
    let ext = text_extent("Desung", p.font_style, TEXT_SCALE, p.thickness).unwrap();
    let fp = p.footprint(&ext);

    let lit = lit_pixels(&layer);
    assert!(!lit.is_empty());
    for (x, y, _) in &lit {
        let (x, y) = (f64::from(*x), f64::from(*y));
        assert!(x + 1.0 >= fp.x0 && x <= fp.x1 && y + 1.0 >= fp.y0 && y <= fp.y1);
    }
}

#[test]
fn stroke_cores_carry_the_full_color() {
    let layer = render_text_layer(300, 160, "Desung", &params(0.0)).unwrap();
    let max_r = lit_pixels(&layer).iter().map(|(_, _, px)| px.r).max().unwrap();
    assert!(max_r >= 195, "max red {max_r}");
}

#[test]
fn rotation_moves_ink_but_keeps_size() {
    let flat = synthesize(300, 300, "Desung", &params(0.0)).unwrap();
    let turned = synthesize(300, 300, "Desung", &params(45.0)).unwrap();
    assert_eq!(flat.dimensions(), turned.dimensions());
    assert_ne!(flat, turned);
    assert!(!turned.is_black());
}

#[test]
fn blank_text_leaves_layer_black() {
    let layer = synthesize(64, 64, "  ", &params(30.0)).unwrap();
    assert!(layer.is_black());
}

#[test]
fn oversized_layer_is_a_render_error() {
    let err = render_text_layer(70_000, 1, "x", &params(0.0)).unwrap_err();
    assert!(matches!(err, StampError::Render(_)));
}
