//! Seed placement for field lines
//!
//! Electric lines start on a small ring around every charge and run with the
//! field from positive charges and against it from negative ones. Magnetic
//! lines start on concentric rings around every wire.

use std::f64::consts::PI;

use crate::simulation::engine::SimulationMode;
use crate::simulation::fields::{ElectricField, FieldSampler, MagneticField};
use crate::simulation::params::{Bounds, TraceParams};
use crate::simulation::scene::Scene;
use crate::simulation::states::{Charge, NVec2, PointSource, Wire};
use crate::simulation::tracer::{trace_line, Direction};

/// Radius of the seed ring around a charge
pub const CHARGE_SEED_RADIUS: f64 = 10.0;

/// Seed ring radii around a wire: 30, 70, ... below 200
pub const WIRE_SEED_RADII: [f64; 5] = [30.0, 70.0, 110.0, 150.0, 190.0];

/// Seeds per ring around a wire
pub const WIRE_SEEDS_PER_RING: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed {
    pub point: NVec2,
    pub direction: Direction,
}

/// A traced line together with the sign of the source it started from
#[derive(Debug, Clone)]
pub struct FieldLine {
    pub polarity: Direction,
    pub points: Vec<NVec2>,
}

fn ring(center: NVec2, radius: f64, n: usize, direction: Direction, out: &mut Vec<Seed>) {
    for k in 0..n {
        let angle = (k as f64 / n as f64) * PI * 2.0;
        out.push(Seed {
            point: NVec2::new(center.x + angle.cos() * radius, center.y + angle.sin() * radius),
            direction,
        });
    }
}

/// `density` evenly spaced seeds per charge
pub fn electric_seeds(charges: &[Charge], density: usize) -> Vec<Seed> {
    let mut out = Vec::with_capacity(charges.len() * density);
    for c in charges {
        ring(c.x, CHARGE_SEED_RADIUS, density, Direction::from_sign(c.q), &mut out);
    }
    out
}

/// Four seeds on each of the fixed rings around every wire
pub fn magnetic_seeds(wires: &[Wire]) -> Vec<Seed> {
    let mut out = Vec::with_capacity(wires.len() * WIRE_SEED_RADII.len() * WIRE_SEEDS_PER_RING);
    for w in wires {
        for r in WIRE_SEED_RADII {
            ring(w.x, r, WIRE_SEEDS_PER_RING, Direction::from_sign(w.i), &mut out);
        }
    }
    out
}

/// Trace every field line the scene's current mode asks for.
/// Dynamics mode and a zero line density produce no lines
pub fn trace_field_lines(scene: &Scene) -> Vec<FieldLine> {
    let density = scene.settings.field_line_density;
    if density == 0 {
        return Vec::new();
    }

    let params = TraceParams::with_step_size(scene.settings.step_size);
    let bounds = scene.bounds();

    match scene.mode {
        SimulationMode::Electric => {
            let sampler = ElectricField { charges: &scene.charges };
            trace_all(&electric_seeds(&scene.charges, density), &sampler, &scene.charges, &params, bounds)
        }
        SimulationMode::Magnetic => {
            let sampler = MagneticField { wires: &scene.wires };
            trace_all(&magnetic_seeds(&scene.wires), &sampler, &scene.wires, &params, bounds)
        }
        SimulationMode::Dynamic => Vec::new(),
    }
}

fn trace_all<F, S>(seeds: &[Seed], sampler: &F, sources: &[S], params: &TraceParams, bounds: Bounds) -> Vec<FieldLine>
where
    F: FieldSampler,
    S: PointSource,
{
    seeds
        .iter()
        .map(|s| FieldLine {
            polarity: s.direction,
            points: trace_line(s.point, s.direction, sampler, sources, params, bounds),
        })
        .collect()
}
