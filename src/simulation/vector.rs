//! Small helpers on 2D vectors.
//!
//! nalgebra's own `normalize` divides by zero on a null vector; the field code
//! needs a null field to map to a null direction instead.

use super::states::NVec2;

/// Euclidean norm `sqrt(x^2 + y^2)`
pub fn magnitude(v: NVec2) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Unit vector along `v`, or `(0, 0)` when `v` has zero length
pub fn normalize(v: NVec2) -> NVec2 {
    let mag = magnitude(v);
    if mag == 0.0 {
        return NVec2::zeros();
    }
    NVec2::new(v.x / mag, v.y / mag)
}
