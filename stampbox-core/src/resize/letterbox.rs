//! Aspect-preserving resize with black padding.

use image::imageops::{self, FilterType};

use crate::foundation::core::{PlacementRect, Raster};
use crate::foundation::error::{StampError, StampResult};

/// Compute where an `ow x oh` source lands inside a `tw x th` canvas.
///
/// The smaller of the two scale ratios wins so the image fits both axes. When
/// `widthRatio > heightRatio` the height is filled and the width is centered
/// (integer division, so odd remainders lean left); otherwise the width is
/// filled and the height is centered. Equal ratios take the second branch and
/// fill the canvas on both axes.
pub fn compute_placement(ow: u32, oh: u32, tw: u32, th: u32) -> StampResult<PlacementRect> {
    if ow == 0 || oh == 0 {
        return Err(StampError::invalid_input(format!(
            "source dimensions must be non-zero, got {ow}x{oh}"
        )));
    }
    if tw == 0 || th == 0 {
        return Err(StampError::invalid_input(format!(
            "canvas dimensions must be non-zero, got {tw}x{th}"
        )));
    }
    if ow == tw && oh == th {
        return Ok(PlacementRect {
            x: 0,
            y: 0,
            width: tw,
            height: th,
        });
    }

    let width_ratio = tw as f32 / ow as f32;
    let height_ratio = th as f32 / oh as f32;

    let rect = if width_ratio > height_ratio {
        let width = scaled_extent(ow, height_ratio, tw)?;
        PlacementRect {
            x: (tw - width) / 2,
            y: 0,
            width,
            height: th,
        }
    } else {
        let height = scaled_extent(oh, width_ratio, th)?;
        PlacementRect {
            x: 0,
            y: (th - height) / 2,
            width: tw,
            height,
        }
    };

    if !rect.fits_within(tw, th) {
        return Err(StampError::geometry(format!(
            "placement {rect:?} escapes a {tw}x{th} canvas"
        )));
    }
    Ok(rect)
}

/// `floor(len * ratio)` kept within `1..=limit`.
fn scaled_extent(len: u32, ratio: f32, limit: u32) -> StampResult<u32> {
    let v = (len as f32 * ratio).floor();
    if !v.is_finite() || v < 0.0 {
        return Err(StampError::geometry(format!(
            "scaling {len}px by {ratio} gives {v}"
        )));
    }
    // Extreme aspect ratios floor to zero; keep a one pixel strip.
    Ok((v as u32).clamp(1, limit))
}

/// Letterbox `source` into `canvas`, returning the canvas.
///
/// Pixels outside the placement rectangle are left as they were.
pub fn letterbox_into(source: &Raster, mut canvas: Raster) -> StampResult<Raster> {
    let (ow, oh) = source.dimensions();
    let (tw, th) = canvas.dimensions();
    let rect = compute_placement(ow, oh, tw, th)?;
    tracing::debug!(ow, oh, tw, th, ?rect, "letterbox placement");

    if ow == tw && oh == th {
        canvas.as_bytes_mut().copy_from_slice(source.as_bytes());
        return Ok(canvas);
    }

    let scaled = if (ow, oh) == (rect.width, rect.height) {
        source.clone()
    } else {
        let resized = imageops::resize(
            &source.to_rgb_image(),
            rect.width,
            rect.height,
            FilterType::Lanczos3,
        );
        Raster::from_rgb_image(resized)?
    };
    canvas.blit(&scaled, rect.x, rect.y)?;
    Ok(canvas)
}

/// Letterbox `source` onto a fresh black `target_size x target_size` canvas.
pub fn normalize(source: &Raster, target_size: u32) -> StampResult<Raster> {
    let canvas = Raster::black(target_size, target_size)?;
    letterbox_into(source, canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/resize/letterbox.rs"]
mod tests;
