//! Configuration types for loading scenes from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scene. A scenario consists of:
//!
//! - [`EngineConfig`]   – start-up mode, scene size and dynamics tick interval
//! - [`SettingsConfig`] – display toggles and tracing settings (optional)
//! - [`ChargeConfig`]   – initial state for each point charge (optional)
//! - [`WireConfig`]     – position and current of each wire (optional)
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The built-in default scene written out as YAML:
//!
//! ```yaml
//! engine:
//!   mode: "electric"        # electric | magnetic | dynamic
//!   width: 800.0            # scene width in pixels
//!   height: 600.0           # scene height in pixels
//!   tick_ms: 16             # dynamics step interval
//!
//! settings:
//!   field_line_density: 16  # field lines per charge
//!   step_size: 2.0          # tracer step in pixels
//!
//! charges:
//!   - id: "1"
//!     x: [ 250.0, 300.0 ]
//!     v: [ 0.0, 0.0 ]
//!     q: 15.0
//!     m: 10.0
//!   - id: "2"
//!     x: [ 550.0, 300.0 ]
//!     q: -15.0
//!     m: 10.0
//!
//! wires:
//!   - id: "w1"
//!     x: [ 400.0, 300.0 ]
//!     i: 10.0
//! ```
//!
//! The scenario builder maps this onto the runtime `Scene`, after
//! [`ScenarioConfig::validate`] has checked the engine's preconditions.

use std::collections::HashSet;

use serde::Deserialize;

use crate::configuration::error::ConfigError;
use crate::simulation::engine::SimulationMode;

fn default_width() -> f64 { 800.0 }
fn default_height() -> f64 { 600.0 }
fn default_tick_ms() -> u64 { 16 }
fn default_true() -> bool { true }
fn default_density() -> usize { 16 }
fn default_step_size() -> f64 { 2.0 }
fn default_mass() -> f64 { 10.0 }
fn default_velocity() -> Vec<f64> { vec![0.0, 0.0] }

/// Start-up engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub mode: SimulationMode, // mode the viewer opens in
    #[serde(default = "default_width")]
    pub width: f64, // scene width, also the dynamics wall extent
    #[serde(default = "default_height")]
    pub height: f64, // scene height
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64, // milliseconds between dynamics steps
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: SimulationMode::Electric,
            width: default_width(),
            height: default_height(),
            tick_ms: default_tick_ms(),
        }
    }
}

/// Display toggles and tracer settings; every field is optional
#[derive(Deserialize, Debug, Clone)]
pub struct SettingsConfig {
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default = "default_true")]
    pub show_vectors: bool,
    #[serde(default = "default_density")]
    pub field_line_density: usize, // seeds per charge, 0 disables field lines
    #[serde(default = "default_step_size")]
    pub step_size: f64, // tracer step length
    #[serde(default = "default_true")]
    pub show_mouse_vector: bool,
    #[serde(default = "default_true")]
    pub intensity_coloring: bool,
    #[serde(default)]
    pub is_paused: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_vectors: true,
            field_line_density: default_density(),
            step_size: default_step_size(),
            show_mouse_vector: true,
            intensity_coloring: true,
            is_paused: false,
        }
    }
}

/// Initial state of a single point charge
#[derive(Deserialize, Debug, Clone)]
pub struct ChargeConfig {
    pub id: String, // unique among charges
    pub x: Vec<f64>, // position `[x, y]` in pixels
    #[serde(default = "default_velocity")]
    pub v: Vec<f64>, // velocity `[vx, vy]`
    pub q: f64, // signed charge
    #[serde(default = "default_mass")]
    pub m: f64, // mass, must be positive
}

/// A straight wire through the plane
#[derive(Deserialize, Debug, Clone)]
pub struct WireConfig {
    pub id: String, // unique among wires
    pub x: Vec<f64>, // position `[x, y]` in pixels
    pub i: f64, // signed current, positive = out of the page
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub charges: Vec<ChargeConfig>,
    #[serde(default)]
    pub wires: Vec<WireConfig>,
}

impl Default for ScenarioConfig {
    /// Dipole with a single wire, the scene the viewer opens without a file
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            settings: SettingsConfig::default(),
            charges: vec![
                ChargeConfig { id: "1".into(), x: vec![250.0, 300.0], v: default_velocity(), q: 15.0, m: 10.0 },
                ChargeConfig { id: "2".into(), x: vec![550.0, 300.0], v: default_velocity(), q: -15.0, m: 10.0 },
            ],
            wires: vec![WireConfig { id: "w1".into(), x: vec![400.0, 300.0], i: 10.0 }],
        }
    }
}

fn check_vector(id: &str, field: &'static str, v: &[f64]) -> Result<(), ConfigError> {
    if v.len() != 2 {
        return Err(ConfigError::BadVector { id: id.to_string(), field, len: v.len() });
    }
    if v.iter().any(|c| !c.is_finite()) {
        return Err(ConfigError::NonFinite { id: id.to_string(), field });
    }
    Ok(())
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // written as a negation so NaN is rejected too
    if !(value > 0.0) {
        return Err(ConfigError::NonPositive { name, value });
    }
    Ok(())
}

impl ScenarioConfig {
    /// Check everything the engine assumes about its input
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("engine.width", self.engine.width)?;
        check_positive("engine.height", self.engine.height)?;
        check_positive("engine.tick_ms", self.engine.tick_ms as f64)?;
        check_positive("settings.step_size", self.settings.step_size)?;

        let mut seen = HashSet::new();
        for c in &self.charges {
            if !seen.insert(c.id.as_str()) {
                return Err(ConfigError::DuplicateId { kind: "charge", id: c.id.clone() });
            }
            check_vector(&c.id, "x", &c.x)?;
            check_vector(&c.id, "v", &c.v)?;
            if !c.q.is_finite() {
                return Err(ConfigError::NonFinite { id: c.id.clone(), field: "q" });
            }
            if !(c.m > 0.0) {
                return Err(ConfigError::NonPositiveMass { id: c.id.clone(), m: c.m });
            }
        }

        let mut seen = HashSet::new();
        for w in &self.wires {
            if !seen.insert(w.id.as_str()) {
                return Err(ConfigError::DuplicateId { kind: "wire", id: w.id.clone() });
            }
            check_vector(&w.id, "x", &w.x)?;
            if !w.i.is_finite() {
                return Err(ConfigError::NonFinite { id: w.id.clone(), field: "i" });
            }
        }

        Ok(())
    }
}
