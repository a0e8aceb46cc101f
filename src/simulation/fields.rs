//! Field samplers
//!
//! Superposition of point-source fields at a single sample point:
//! - electric field of point charges, inverse-square
//! - magnetic field of straight wires through the plane, inverse-distance,
//!   circulating per the right-hand rule
//!
//! Sources inside a fixed skip radius are left out of the sum instead of
//! producing a singular value.

use crate::simulation::params::{ELECTRIC_SKIP_RADIUS, K, MAGNETIC_SKIP_RADIUS, MU0_2PI};
use crate::simulation::states::{Charge, NVec2, Wire};

/// Something that can be evaluated as a vector field
pub trait FieldSampler {
    fn field_at(&self, point: NVec2) -> NVec2;
}

impl<F> FieldSampler for F
where
    F: Fn(NVec2) -> NVec2,
{
    fn field_at(&self, point: NVec2) -> NVec2 {
        self(point)
    }
}

/// Electric field of a set of charges
#[derive(Debug, Clone, Copy)]
pub struct ElectricField<'a> {
    pub charges: &'a [Charge],
}

impl FieldSampler for ElectricField<'_> {
    fn field_at(&self, point: NVec2) -> NVec2 {
        electric_field_at(point, self.charges)
    }
}

/// Magnetic field of a set of wires
#[derive(Debug, Clone, Copy)]
pub struct MagneticField<'a> {
    pub wires: &'a [Wire],
}

impl FieldSampler for MagneticField<'_> {
    fn field_at(&self, point: NVec2) -> NVec2 {
        magnetic_field_at(point, self.wires)
    }
}

/// Sum of `K q / r^2` along the unit displacement from each charge to `point`
pub fn electric_field_at(point: NVec2, charges: &[Charge]) -> NVec2 {
    let mut total = NVec2::zeros();

    for charge in charges {
        let dx = point.x - charge.x.x;
        let dy = point.y - charge.x.y;
        let r2 = dx * dx + dy * dy;
        let r = r2.sqrt();
        if r < ELECTRIC_SKIP_RADIUS {
            continue;
        }

        let mag = (K * charge.q) / r2;
        total.x += mag * (dx / r);
        total.y += mag * (dy / r);
    }

    total
}

/// Sum of `MU0_2PI i / r` along the displacement rotated by +90 degrees
pub fn magnetic_field_at(point: NVec2, wires: &[Wire]) -> NVec2 {
    let mut total = NVec2::zeros();

    for wire in wires {
        let dx = point.x - wire.x.x;
        let dy = point.y - wire.x.y;
        let r = (dx * dx + dy * dy).sqrt();
        if r < MAGNETIC_SKIP_RADIUS {
            continue;
        }

        let mag = (MU0_2PI * wire.i) / r;
        total.x += mag * (-dy / r);
        total.y += mag * (dx / r);
    }

    total
}
