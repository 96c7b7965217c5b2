use super::*;
use crate::foundation::core::Rgb8;

fn one_px(px: [u8; 3]) -> Raster {
    Raster::from_raw(1, 1, px.to_vec()).unwrap()
}

#[test]
fn additive_blend_half_alpha() {
    let out = composite(one_px([100, 100, 100]), &one_px([200, 200, 200]), 0.5, false).unwrap();
    assert_eq!(out.pixel(0, 0), Some(Rgb8::new(200, 200, 200)));
}

#[test]
fn additive_blend_saturates_at_255() {
    let out = composite(one_px([200, 10, 255]), &one_px([200, 200, 255]), 0.5, false).unwrap();
    assert_eq!(out.pixel(0, 0), Some(Rgb8::new(255, 110, 255)));
}

#[test]
fn zero_layer_leaves_canvas_untouched() {
    let canvas = Raster::from_raw(2, 1, vec![1, 2, 3, 250, 251, 252]).unwrap();
    let layer = Raster::black(2, 1).unwrap();
    let out = composite(canvas.clone(), &layer, 1.0, true).unwrap();
    assert_eq!(out, canvas);
}

#[test]
fn mask_marks_black_as_keep_and_anything_else_as_glyph() {
    let layer = Raster::from_raw(3, 1, vec![0, 0, 0, 10, 0, 0, 0, 0, 1]).unwrap();
    assert_eq!(compute_mask(&layer), vec![1, 1, 1, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn clean_before_add_starts_glyph_pixels_from_black() {
    let canvas = Raster::from_raw(2, 1, vec![100, 100, 100, 100, 100, 100]).unwrap();
    let layer = Raster::from_raw(2, 1, vec![0, 0, 0, 200, 0, 40]).unwrap();

    let cleaned = composite(canvas.clone(), &layer, 0.5, true).unwrap();
    assert_eq!(cleaned.pixel(0, 0), Some(Rgb8::new(100, 100, 100)));
    assert_eq!(cleaned.pixel(1, 0), Some(Rgb8::new(100, 0, 20)));

    let additive = composite(canvas, &layer, 0.5, false).unwrap();
    assert_eq!(additive.pixel(1, 0), Some(Rgb8::new(200, 100, 120)));
}

#[test]
fn mismatched_sizes_and_bad_alpha_are_rejected() {
    let canvas = Raster::black(2, 2).unwrap();
    assert!(matches!(
        composite(canvas.clone(), &Raster::black(1, 2).unwrap(), 0.5, false),
        Err(StampError::InvalidInput(_))
    ));
    assert!(composite(canvas.clone(), &Raster::black(2, 2).unwrap(), f32::NAN, false).is_err());
    assert!(composite(canvas, &Raster::black(2, 2).unwrap(), -0.1, false).is_err());
}

#[test]
fn apply_mask_rejects_wrong_length() {
    let mut canvas = Raster::black(2, 2).unwrap();
    assert!(apply_mask_in_place(&mut canvas, &[1, 1, 1]).is_err());
}
