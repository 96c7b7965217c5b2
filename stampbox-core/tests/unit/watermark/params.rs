use super::*;

fn extent() -> TextExtent {
    TextExtent {
        left: 0.0,
        right: 180.0,
        ascent: 42.0,
        descent: 0.0,
        stroke_width: 2.0,
    }
}

#[test]
fn bounds_reduce_to_classic_formula_without_descent_or_overhang() {
    let b = PositionBounds::new(750, 750, 2, &extent());
    assert_eq!(b.x_lo, 2.0);
    assert_eq!(b.x_hi, 750.0 - 4.0 - 180.0);
    assert_eq!(b.y_lo, 4.0 + 42.0);
    assert_eq!(b.y_hi, 748.0);
    assert!(!b.is_inverted());
}

#[test]
fn descent_and_left_overhang_tighten_bounds() {
    let ext = TextExtent {
        left: -3.0,
        descent: 15.0,
        ..extent()
    };
    let b = PositionBounds::new(750, 750, 1, &ext);
    assert_eq!(b.x_lo, 4.0);
    assert_eq!(b.y_hi, 750.0 - 1.0 - 15.0);
}

#[test]
fn oversized_text_inverts_bounds() {
    let b = PositionBounds::new(100, 100, 4, &extent());
    assert!(b.is_inverted());
}

#[test]
fn footprint_includes_half_stroke() {
    let p = WatermarkParams {
        font_style: FontStyle::Simplex,
        font_scale: 1.0,
        thickness: 2,
        color: Rgb8::new(1, 2, 3),
        angle_deg: 0.0,
        anchor_x: 10.0,
        anchor_y: 60.0,
    };
    let r = p.footprint(&extent());
    assert_eq!(r, Rect::new(9.0, 17.0, 191.0, 61.0));
}
