//! High-level runtime engine settings
//!
//! Selects the simulation mode, scene size, and the dynamics tick interval
//! used when building and running a `Scenario`

use std::time::Duration;

use serde::Deserialize;

/// Which field or simulation is active.
/// `mode: "electric"`, `mode: "magnetic"` or `mode: "dynamic"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationMode {
    #[serde(rename = "electric")] // static charges, electric field lines and vectors
    #[default]
    Electric,

    #[serde(rename = "magnetic")] // static wires, circulating magnetic field lines
    Magnetic,

    #[serde(rename = "dynamic")] // charges move under mutual Coulomb force
    Dynamic,
}

impl SimulationMode {
    pub fn label(self) -> &'static str {
        match self {
            SimulationMode::Electric => "ELECTRIC",
            SimulationMode::Magnetic => "MAGNETIC",
            SimulationMode::Dynamic => "DYNAMIC",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    pub mode: SimulationMode, // active mode at start-up
    pub width: f64, // scene width in pixels
    pub height: f64, // scene height in pixels
    pub tick: Duration, // dynamics step interval
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            mode: SimulationMode::Electric,
            width: 800.0,
            height: 600.0,
            tick: Duration::from_millis(16),
        }
    }
}
