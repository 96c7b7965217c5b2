//! Affine transform helpers.

use crate::foundation::core::{Affine, Point, Raster};
use crate::foundation::math::{lerp, saturate_u8};

/// Rotation by `angle_deg` about the center `(cols / 2, rows / 2)` of a `width x height` raster.
///
/// Positive angles turn content counter-clockwise on screen (y pointing down).
pub fn rotation_about_center(width: u32, height: u32, angle_deg: f64) -> Affine {
    let center = Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
    Affine::rotate_about(-angle_deg.to_radians(), center)
}

/// Resample `src` through `forward` into a raster of the same size.
///
/// Every output pixel reads the input at `forward⁻¹(x, y)` with bilinear
/// interpolation; reads outside the input contribute zero.
pub fn warp_affine(src: &Raster, forward: Affine) -> Raster {
    let inverse = forward.inverse();
    let (w, h) = src.dimensions();
    let mut out = src.clone();
    let bytes = out.as_bytes_mut();

    let mut idx = 0usize;
    for y in 0..h {
        for x in 0..w {
            let p = inverse * Point::new(f64::from(x), f64::from(y));
            let px = sample_bilinear(src, p);
            for (c, v) in px.iter().enumerate() {
                bytes[idx + c] = saturate_u8(*v as f32);
            }
            idx += Raster::CHANNELS;
        }
    }
    out
}

/// Rotate `src` about its center, keeping its dimensions. Content rotated past
/// the edges is clipped.
pub fn rotate_about_center(src: &Raster, angle_deg: f64) -> Raster {
    if angle_deg.rem_euclid(360.0) == 0.0 {
        return src.clone();
    }
    let (w, h) = src.dimensions();
    warp_affine(src, rotation_about_center(w, h, angle_deg))
}

fn sample_bilinear(src: &Raster, p: Point) -> [f64; 3] {
    if !p.x.is_finite() || !p.y.is_finite() {
        return [0.0; 3];
    }
    let x0 = p.x.floor();
    let y0 = p.y.floor();
    let fx = p.x - x0;
    let fy = p.y - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let tl = texel(src, x0, y0);
    let tr = texel(src, x0 + 1, y0);
    let bl = texel(src, x0, y0 + 1);
    let br = texel(src, x0 + 1, y0 + 1);

    let mut out = [0.0f64; 3];
    for c in 0..3 {
        let top = lerp(tl[c], tr[c], fx);
        let bottom = lerp(bl[c], br[c], fx);
        out[c] = lerp(top, bottom, fy);
    }
    out
}

fn texel(src: &Raster, x: i64, y: i64) -> [f64; 3] {
    if x < 0 || y < 0 || x >= i64::from(src.width()) || y >= i64::from(src.height()) {
        return [0.0; 3];
    }
    let idx = (y as usize * src.width() as usize + x as usize) * Raster::CHANNELS;
    let b = &src.as_bytes()[idx..idx + Raster::CHANNELS];
    [f64::from(b[0]), f64::from(b[1]), f64::from(b[2])]
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
