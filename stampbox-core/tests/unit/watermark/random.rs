use super::*;
use crate::foundation::core::Rect;

fn representative_extent(thickness: u32) -> TextExtent {
    text_extent("Desung", FontStyle::Simplex, TEXT_SCALE, thickness).unwrap()
}

#[test]
fn anchor_draws_stay_in_bounds_and_keep_footprint_on_canvas() {
    let mut rng = WatermarkRng::from_seed(7);
    let canvas = Rect::new(0.0, 0.0, 750.0, 750.0);
    for i in 0..10_000u32 {
        let thickness = 1 + i % 4;
        let extent = representative_extent(thickness);
        let b = PositionBounds::new(750, 750, thickness, &extent);
        assert!(!b.is_inverted());

        let (x, y) = draw_anchor(&mut rng, 750, 750, thickness, &extent);
        assert!(b.contains(x, y), "({x}, {y}) outside {b:?}");

        let params = WatermarkParams {
            font_style: FontStyle::Simplex,
            font_scale: 1.0,
            thickness,
            color: Rgb8::BLACK,
            angle_deg: 0.0,
            anchor_x: x,
            anchor_y: y,
        };
        let fp = params.footprint(&extent);
        assert!(
            fp.x0 >= canvas.x0 && fp.y0 >= canvas.y0 && fp.x1 <= canvas.x1 && fp.y1 <= canvas.y1,
            "footprint {fp:?} leaves canvas"
        );
    }
}

#[test]
fn drawn_params_respect_their_ranges() {
    let mut rng = WatermarkRng::from_seed(42);
    for _ in 0..2_000 {
        let p = draw_params(&mut rng, "Desung", 750, 750).unwrap();
        assert!(p.font_style.index() <= 7);
        assert!((0.1..5.1).contains(&p.font_scale), "{}", p.font_scale);
        assert!((1..=4).contains(&p.thickness));
        assert!((-90.0..90.0).contains(&p.angle_deg));

        let ext = text_extent("Desung", p.font_style, TEXT_SCALE, p.thickness).unwrap();
        let b = PositionBounds::new(750, 750, p.thickness, &ext);
        assert!(b.contains(p.anchor_x, p.anchor_y));
        let fp = p.footprint(&ext);
        assert!(fp.x0 >= 0.0 && fp.y0 >= 0.0 && fp.x1 <= 750.0 && fp.y1 <= 750.0);
    }
}

#[test]
fn every_style_gets_drawn_eventually() {
    let mut rng = WatermarkRng::from_seed(3);
    let mut seen = [false; 8];
    for _ in 0..500 {
        let p = draw_params(&mut rng, "x", 200, 200).unwrap();
        seen[p.font_style.index() as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn same_seed_reproduces_and_different_seeds_diverge() {
    let a = draw_params(&mut WatermarkRng::from_seed(11), "Desung", 750, 750).unwrap();
    let b = draw_params(&mut WatermarkRng::from_seed(11), "Desung", 750, 750).unwrap();
    assert_eq!(a, b);

    let mut rng = WatermarkRng::from_seed(11);
    let first = draw_params(&mut rng, "Desung", 750, 750).unwrap();
    let second = draw_params(&mut rng, "Desung", 750, 750).unwrap();
    assert_ne!(first, second);

    let c = draw_params(&mut WatermarkRng::from_seed(12), "Desung", 750, 750).unwrap();
    assert_ne!(a, c);
}

#[test]
fn inverted_range_clamps_to_lower_bound() {
    let mut rng = WatermarkRng::from_seed(1);
    assert_eq!(rng.sample_range(10.0, 5.0), 10.0);

    let ext = representative_extent(4);
    let (x, y) = draw_anchor(&mut rng, 40, 40, 4, &ext);
    let b = PositionBounds::new(40, 40, 4, &ext);
    assert!(b.is_inverted());
    assert_eq!(x, b.x_lo);
    assert_eq!(y, b.y_lo);
}

#[test]
fn clamped_draw_still_advances_the_stream() {
    let mut clamped = WatermarkRng::from_seed(5);
    let mut plain = WatermarkRng::from_seed(5);
    clamped.sample_range(1.0, 0.0);
    plain.next_u32();
    assert_eq!(clamped.next_u32(), plain.next_u32());
}

#[test]
fn degenerate_uniform_ranges_return_lower_bound() {
    let mut rng = WatermarkRng::from_seed(9);
    assert_eq!(rng.uniform_int(4, 4), 4);
    assert_eq!(rng.uniform_real(1.5, 1.5), 1.5);
}

#[test]
fn zero_canvas_is_invalid_input() {
    let mut rng = WatermarkRng::from_seed(0);
    assert!(matches!(
        draw_params(&mut rng, "x", 0, 10),
        Err(StampError::InvalidInput(_))
    ));
}

#[test]
fn seed_is_reported() {
    assert_eq!(WatermarkRng::from_seed(99).seed(), 99);
}
