//! Core state types for the field engine.
//!
//! Defines the two kinds of point sources the engine understands:
//! - `Charge` a movable point charge (used by the electric sampler and dynamics)
//! - `Wire`   an infinite straight current through the plane (magnetic sampler)
//!
//! All positions live in scene coordinates (pixels, y pointing down).

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Charge {
    pub id: String, // caller-assigned, unique among charges
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub q: f64, // signed charge
    pub m: f64, // mass (carried, not read by the integrator)
}

impl Charge {
    /// A charge at rest
    pub fn at_rest(id: impl Into<String>, x: NVec2, q: f64, m: f64) -> Self {
        Self {
            id: id.into(),
            x,
            v: NVec2::zeros(),
            q,
            m,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    pub id: String, // caller-assigned, unique among wires
    pub x: NVec2, // position of the wire's cross-section
    pub i: f64, // signed current, positive = out of the page
}

impl Wire {
    pub fn new(id: impl Into<String>, x: NVec2, i: f64) -> Self {
        Self { id: id.into(), x, i }
    }
}

/// Anything with a location in the scene.
/// The tracer uses this to decide when a line has reached a source
pub trait PointSource {
    fn position(&self) -> NVec2;
}

impl PointSource for Charge {
    fn position(&self) -> NVec2 {
        self.x
    }
}

impl PointSource for Wire {
    fn position(&self) -> NVec2 {
        self.x
    }
}

impl PointSource for NVec2 {
    fn position(&self) -> NVec2 {
        *self
    }
}

/// Borrowed view over either kind of source.
/// Which variant is live is decided by the simulation mode
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Charge(&'a Charge),
    Wire(&'a Wire),
}

impl<'a> Source<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Source::Charge(c) => &c.id,
            Source::Wire(w) => &w.id,
        }
    }

    /// Charge `q` or current `i`
    pub fn strength(&self) -> f64 {
        match self {
            Source::Charge(c) => c.q,
            Source::Wire(w) => w.i,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.strength() > 0.0
    }
}

impl PointSource for Source<'_> {
    fn position(&self) -> NVec2 {
        match self {
            Source::Charge(c) => c.x,
            Source::Wire(w) => w.x,
        }
    }
}
