/// Linear interpolation from `a` to `b`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `v` inside `[a, b]` as a fraction. Empty spans map to `0`.
pub(crate) fn inverse_lerp(a: f64, b: f64, v: f64) -> f64 {
    let span = b - a;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    (v - a) / span
}

pub(crate) fn is_finite_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// Replace NaN/infinite or negative measurements with `0`.
pub(crate) fn sanitize_length(v: f64) -> f64 {
    if is_finite_non_negative(v) { v } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
