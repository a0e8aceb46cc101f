//! Force contributors for dynamics mode
//!
//! Defines the `Force` trait, a `ForceSet` that sums several terms, and the
//! clamped Coulomb interaction between charges

use crate::simulation::params::K;
use crate::simulation::states::{Charge, NVec2};

/// Collection of force terms (Coulomb, external fields, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into a single net force per charge
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// The force set dynamics mode runs with: clamped Coulomb only
    pub fn coulomb() -> Self {
        Self::new().with(CoulombForce::default())
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Net force on charge `i` from every registered term
    pub fn net_force_on(&self, i: usize, charges: &[Charge]) -> NVec2 {
        let mut f = NVec2::zeros();
        for term in &self.terms {
            f += term.force_on(i, charges);
        }
        f
    }
}

/// A force acting on a single charge given the positions of all charges
pub trait Force {
    fn force_on(&self, i: usize, charges: &[Charge]) -> NVec2;
}

/// Coulomb repulsion/attraction with a minimum-distance clamp.
/// Pairs closer than `sqrt(min_r2)` are treated as if they were exactly that
/// far apart, which bounds the force on near collisions
#[derive(Debug, Clone)]
pub struct CoulombForce {
    pub k: f64, // scaled Coulomb constant
    pub min_r2: f64, // squared clamp distance
}

impl Default for CoulombForce {
    fn default() -> Self {
        Self {
            k: K,
            min_r2: 625.0,
        }
    }
}

impl Force for CoulombForce {
    fn force_on(&self, i: usize, charges: &[Charge]) -> NVec2 {
        let ci = &charges[i];
        let mut fx = 0.0;
        let mut fy = 0.0;

        for (j, cj) in charges.iter().enumerate() {
            if i == j {
                continue;
            }

            // d points from j to i, so like charges push i along +d
            let dx = ci.x.x - cj.x.x;
            let dy = ci.x.y - cj.x.y;
            let r2 = (dx * dx + dy * dy).max(self.min_r2);
            let r = r2.sqrt();

            let f_mag = (self.k * ci.q * cj.q) / r2;
            fx += f_mag * (dx / r);
            fy += f_mag * (dy / r);
        }

        NVec2::new(fx, fy)
    }
}

/// Net force on every charge at the current positions.
/// Used for the force-arrow overlay; the integrator evaluates forces
/// charge by charge as it sweeps
pub fn net_forces(charges: &[Charge], forces: &ForceSet) -> Vec<NVec2> {
    (0..charges.len())
        .map(|i| forces.net_force_on(i, charges))
        .collect()
}
