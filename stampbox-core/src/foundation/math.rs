/// Round to nearest and clamp into the `u8` range. NaN maps to 0.
pub(crate) fn saturate_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// `base + alpha * add`, rounded and saturated at 255.
pub(crate) fn add_scaled_sat(base: u8, add: u8, alpha: f32) -> u8 {
    saturate_u8(f32::from(base) + alpha * f32::from(add))
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
