//! Fixed-step integrator for dynamics mode
//!
//! Semi-implicit Euler with velocity damping and padded-wall bounces,
//! driven by a `ForceSet` and `DynamicsParams`

use super::forces::ForceSet;
use super::params::{Bounds, DynamicsParams};
use super::states::{Charge, NVec2};

/// Advance all charges by one step with the default Coulomb forces and
/// parameters inside a `width` x `height` scene
pub fn step_dynamics(charges: &[Charge], width: f64, height: f64) -> Vec<Charge> {
    step_dynamics_with(
        charges,
        Bounds::new(width, height),
        &ForceSet::coulomb(),
        &DynamicsParams::default(),
    )
}

/// Advance all charges by one step.
///
/// The input is left untouched; the result holds the same charges in the
/// same order with only position and velocity changed. Charges are swept in
/// order on the working copy, so charge `i` sees charges before it at their
/// new positions and charges after it at their old ones.
pub fn step_dynamics_with(
    charges: &[Charge],
    bounds: Bounds,
    forces: &ForceSet,
    params: &DynamicsParams,
) -> Vec<Charge> {
    let mut updated = charges.to_vec();
    let dt = params.dt;

    for i in 0..updated.len() {
        // Net force at the current state of the sweep
        let f = forces.net_force_on(i, &updated);

        let c = &mut updated[i];

        // Kick: v' = (v + f / divisor * dt) * friction
        c.v = NVec2::new(
            (c.v.x + (f.x / params.mass_divisor) * dt) * params.friction,
            (c.v.y + (f.y / params.mass_divisor) * dt) * params.friction,
        );

        // Drift: x' = x + v' dt
        c.x.x += c.v.x * dt;
        c.x.y += c.v.y * dt;

        bounce_off_walls(c, bounds, params);
    }

    updated
}

/// Clamp a charge into the padded scene and reflect the clamped
/// velocity components, one axis at a time
fn bounce_off_walls(c: &mut Charge, bounds: Bounds, params: &DynamicsParams) {
    let pad = params.wall_padding;

    if c.x.x < pad {
        c.x.x = pad;
        c.v.x *= params.bounce;
    }
    if c.x.x > bounds.width - pad {
        c.x.x = bounds.width - pad;
        c.v.x *= params.bounce;
    }
    if c.x.y < pad {
        c.x.y = pad;
        c.v.y *= params.bounce;
    }
    if c.x.y > bounds.height - pad {
        c.x.y = bounds.height - pad;
        c.v.y *= params.bounce;
    }
}
