//! Field-line tracing
//!
//! Walks a fixed-length Euler step along the normalized field from a seed
//! point and returns the visited points as a polyline. A line ends when the
//! field becomes too weak, when it comes within the absorption radius of a
//! source, when it leaves the scene (plus a margin), or at the step cap.

use crate::simulation::fields::FieldSampler;
use crate::simulation::params::{Bounds, TraceParams};
use crate::simulation::states::{NVec2, PointSource};
use crate::simulation::vector::{magnitude, normalize};

/// Whether a line follows the field or runs against it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// `Forward` for strictly positive values, `Backward` otherwise
    pub fn from_sign(value: f64) -> Self {
        if value > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Trace one field line starting at `seed`.
///
/// The returned polyline begins with `seed` itself, so it always holds at
/// least one point. Each call is independent of every other call.
pub fn trace_line<F, S>(
    seed: NVec2,
    direction: Direction,
    sampler: &F,
    sources: &[S],
    params: &TraceParams,
    bounds: Bounds,
) -> Vec<NVec2>
where
    F: FieldSampler + ?Sized,
    S: PointSource,
{
    let mut points = Vec::with_capacity(params.max_steps + 1);
    let mut p = seed;
    points.push(p);

    let advance = params.step_size * direction.sign();

    for _ in 0..params.max_steps {
        let field = sampler.field_at(p);
        if magnitude(field) < params.min_field {
            break;
        }

        let dir = normalize(field);
        p = NVec2::new(p.x + dir.x * advance, p.y + dir.y * advance);
        points.push(p);

        let absorbed = sources.iter().any(|s| {
            let s = s.position();
            let dx = p.x - s.x;
            let dy = p.y - s.y;
            dx * dx + dy * dy < params.absorb_r2
        });
        if absorbed {
            break;
        }

        if !bounds.contains_with_margin(p.x, p.y, params.margin) {
            break;
        }
    }

    points
}
