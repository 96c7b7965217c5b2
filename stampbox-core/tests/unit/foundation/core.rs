use super::*;

#[test]
fn black_raster_is_zeroed_and_sized() {
    let r = Raster::black(4, 3).unwrap();
    assert_eq!(r.dimensions(), (4, 3));
    assert_eq!(r.as_bytes().len(), 4 * 3 * 3);
    assert!(r.is_black());
}

#[test]
fn zero_dimension_is_invalid_input() {
    assert!(matches!(
        Raster::black(0, 3),
        Err(StampError::InvalidInput(_))
    ));
    assert!(matches!(
        Raster::from_raw(3, 0, vec![]),
        Err(StampError::InvalidInput(_))
    ));
}

#[test]
fn from_raw_rejects_length_mismatch() {
    assert!(Raster::from_raw(2, 2, vec![0u8; 11]).is_err());
    assert!(Raster::from_raw(2, 2, vec![0u8; 12]).is_ok());
}

#[test]
fn pixel_access_is_row_major() {
    let mut r = Raster::black(3, 2).unwrap();
    r.put_pixel(2, 1, Rgb8::new(1, 2, 3));
    assert_eq!(&r.as_bytes()[15..18], &[1, 2, 3]);
    assert_eq!(r.pixel(2, 1), Some(Rgb8::new(1, 2, 3)));
    assert_eq!(r.pixel(3, 1), None);
}

#[test]
fn blit_copies_into_offset_and_rejects_overflow() {
    let mut dst = Raster::black(4, 4).unwrap();
    let src = Raster::from_raw(2, 1, vec![9, 9, 9, 8, 8, 8]).unwrap();
    dst.blit(&src, 1, 2).unwrap();
    assert_eq!(dst.pixel(1, 2), Some(Rgb8::new(9, 9, 9)));
    assert_eq!(dst.pixel(2, 2), Some(Rgb8::new(8, 8, 8)));
    assert_eq!(dst.pixel(0, 2), Some(Rgb8::BLACK));
    assert!(matches!(
        dst.blit(&src, 3, 0),
        Err(StampError::Geometry(_))
    ));
}

#[test]
fn rgb_image_conversion_keeps_bytes() {
    let r = Raster::from_raw(1, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let img = r.to_rgb_image();
    assert_eq!(img.dimensions(), (1, 2));
    let back = Raster::from_rgb_image(img).unwrap();
    assert_eq!(back, r);
}

#[test]
fn color_from_draw_splits_low_three_bytes() {
    let c = Rgb8::from_draw(0xAABB_CCDD);
    assert_eq!(c, Rgb8::new(0xDD, 0xCC, 0xBB));
}

#[test]
fn placement_rect_predicates() {
    let r = PlacementRect {
        x: 0,
        y: 187,
        width: 750,
        height: 375,
    };
    assert!(r.fits_within(750, 750));
    assert!(r.fills_one_axis(750, 750));
    assert_eq!(r.bottom(), 562);
    assert!(!r.fits_within(700, 750));
}
