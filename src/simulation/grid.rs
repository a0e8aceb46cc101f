//! Regular-grid and single-point field sampling for the vector overlay and
//! the mouse probe

use crate::simulation::fields::FieldSampler;
use crate::simulation::params::{Bounds, MIN_FIELD};
use crate::simulation::states::NVec2;
use crate::simulation::vector::{magnitude, normalize};

/// Default distance between grid samples
pub const GRID_SPACING: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSample {
    pub point: NVec2,
    pub field: NVec2,
    pub magnitude: f64,
    pub direction: NVec2, // unit field direction
}

/// Sample the field at one point, `None` if it is too weak to have a direction
pub fn probe<F>(sampler: &F, point: NVec2) -> Option<GridSample>
where
    F: FieldSampler + ?Sized,
{
    let field = sampler.field_at(point);
    let mag = magnitude(field);
    if mag < MIN_FIELD {
        return None;
    }
    Some(GridSample {
        point,
        field,
        magnitude: mag,
        direction: normalize(field),
    })
}

/// Sample cell centres `(spacing/2 + i*spacing, spacing/2 + j*spacing)` that
/// fall inside the scene, column by column, skipping weak samples
pub fn sample_grid<F>(sampler: &F, bounds: Bounds, spacing: f64) -> Vec<GridSample>
where
    F: FieldSampler + ?Sized,
{
    let mut out = Vec::new();
    if spacing <= 0.0 {
        return out;
    }

    let mut x = spacing / 2.0;
    while x < bounds.width {
        let mut y = spacing / 2.0;
        while y < bounds.height {
            if let Some(s) = probe(sampler, NVec2::new(x, y)) {
                out.push(s);
            }
            y += spacing;
        }
        x += spacing;
    }
    out
}
