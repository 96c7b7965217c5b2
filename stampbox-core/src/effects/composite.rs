use crate::foundation::core::Raster;
use crate::foundation::error::{StampError, StampResult};
use crate::foundation::math::add_scaled_sat;

/// Per-pixel keep mask for `layer`: `1` where all three channels are zero, `0` elsewhere.
///
/// The mask has one byte per channel so it can be multiplied straight into a canvas.
pub fn compute_mask(layer: &Raster) -> Vec<u8> {
    let mut mask = vec![0u8; layer.as_bytes().len()];
    for (m, px) in mask
        .chunks_exact_mut(Raster::CHANNELS)
        .zip(layer.as_bytes().chunks_exact(Raster::CHANNELS))
    {
        let keep = u8::from(px.iter().all(|&c| c == 0));
        m.fill(keep);
    }
    mask
}

/// Multiply `canvas` elementwise by a 0/1 mask.
pub fn apply_mask_in_place(canvas: &mut Raster, mask: &[u8]) -> StampResult<()> {
    if canvas.as_bytes().len() != mask.len() {
        return Err(StampError::invalid_input(
            "apply_mask_in_place expects a mask matching the canvas",
        ));
    }
    for (c, &m) in canvas.as_bytes_mut().iter_mut().zip(mask) {
        *c = c.saturating_mul(m);
    }
    Ok(())
}

/// `canvas += alpha * layer`, rounded and saturated per channel.
pub fn add_weighted_in_place(canvas: &mut Raster, layer: &Raster, alpha: f32) -> StampResult<()> {
    check_pair(canvas, layer)?;
    check_alpha(alpha)?;
    for (c, &l) in canvas.as_bytes_mut().iter_mut().zip(layer.as_bytes()) {
        if l != 0 {
            *c = add_scaled_sat(*c, l, alpha);
        }
    }
    Ok(())
}

/// Blend `layer` onto `canvas` additively.
///
/// With `clean_before_add` the canvas is zeroed under every non-black layer pixel
/// first, so glyphs start from black instead of the image content.
pub fn composite(
    mut canvas: Raster,
    layer: &Raster,
    alpha: f32,
    clean_before_add: bool,
) -> StampResult<Raster> {
    check_pair(&canvas, layer)?;
    check_alpha(alpha)?;
    if clean_before_add {
        let mask = compute_mask(layer);
        apply_mask_in_place(&mut canvas, &mask)?;
    }
    add_weighted_in_place(&mut canvas, layer, alpha)?;
    Ok(canvas)
}

fn check_pair(canvas: &Raster, layer: &Raster) -> StampResult<()> {
    if canvas.dimensions() != layer.dimensions() {
        let (cw, ch) = canvas.dimensions();
        let (lw, lh) = layer.dimensions();
        return Err(StampError::invalid_input(format!(
            "layer {lw}x{lh} does not match canvas {cw}x{ch}"
        )));
    }
    Ok(())
}

fn check_alpha(alpha: f32) -> StampResult<()> {
    if !alpha.is_finite() || alpha < 0.0 {
        return Err(StampError::invalid_input(format!(
            "alpha must be finite and >= 0, got {alpha}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
