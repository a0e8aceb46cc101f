//! Numerical and physical parameters for the engine
//!
//! The constants are scaled for a pixel-sized scene, not physically calibrated:
//! - `K` and `MU0_2PI` set field strengths,
//! - the skip radii keep samplers away from source singularities,
//! - `TraceParams` and `DynamicsParams` bundle the per-call knobs of the
//!   tracer and the integrator

/// Scaled Coulomb constant
pub const K: f64 = 9.0e3;

/// Scaled mu_0 / 2pi
pub const MU0_2PI: f64 = 2.0;

/// Charges closer than this to a sample point contribute nothing
pub const ELECTRIC_SKIP_RADIUS: f64 = 15.0;

/// Wires closer than this to a sample point contribute nothing
pub const MAGNETIC_SKIP_RADIUS: f64 = 10.0;

/// Fields weaker than this have no meaningful direction
pub const MIN_FIELD: f64 = 0.1;

/// Scene rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True if `(x, y)` lies inside the rectangle grown by `margin` on every side
    pub fn contains_with_margin(&self, x: f64, y: f64, margin: f64) -> bool {
        !(x < -margin || x > self.width + margin || y < -margin || y > self.height + margin)
    }
}

/// Field-line tracing settings
#[derive(Debug, Clone)]
pub struct TraceParams {
    pub step_size: f64, // distance advanced per step
    pub max_steps: usize, // safety cap against degenerate fields
    pub min_field: f64, // stop below this field magnitude
    pub absorb_r2: f64, // squared absorption radius around sources
    pub margin: f64, // how far a line may leave the scene
}

impl TraceParams {
    pub fn with_step_size(step_size: f64) -> Self {
        Self {
            step_size,
            ..Self::default()
        }
    }
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            step_size: 2.0,
            max_steps: 300,
            min_field: MIN_FIELD,
            absorb_r2: 100.0,
            margin: 10.0,
        }
    }
}

/// Dynamics-mode integration settings
#[derive(Debug, Clone)]
pub struct DynamicsParams {
    pub dt: f64, // fixed time step
    pub mass_divisor: f64, // uniform force-to-acceleration divisor
    pub friction: f64, // velocity damping applied every step
    pub wall_padding: f64, // distance of the invisible walls from the scene edge
    pub bounce: f64, // velocity factor on wall contact
}

impl Default for DynamicsParams {
    fn default() -> Self {
        Self {
            dt: 0.08,
            mass_divisor: 12.0,
            friction: 0.98,
            wall_padding: 30.0,
            bounce: -0.5,
        }
    }
}
