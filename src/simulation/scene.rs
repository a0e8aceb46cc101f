//! Host-side application state
//!
//! `Scene` owns everything the viewer edits: the active mode, the charges and
//! wires, the display settings and the scene size. Engine calls borrow from
//! it each frame; the engine itself keeps no state.

use tracing::debug;

use crate::simulation::engine::SimulationMode;
use crate::simulation::fields::{electric_field_at, magnetic_field_at};
use crate::simulation::integrator::step_dynamics;
use crate::simulation::params::Bounds;
use crate::simulation::states::{Charge, NVec2, PointSource, Source, Wire};

/// Default charge for sources added in electric/dynamic mode
pub const NEW_CHARGE_Q: f64 = 10.0;

/// Default mass for new charges
pub const NEW_CHARGE_MASS: f64 = 10.0;

/// Default current for wires added in magnetic mode
pub const NEW_WIRE_CURRENT: f64 = 10.0;

/// Squared grab radius for picking a source
pub const PICK_R2: f64 = 625.0;

/// Display toggles and tracing settings
#[derive(Debug, Clone, PartialEq)]
pub struct SimSettings {
    pub show_grid: bool,
    pub show_vectors: bool,
    pub field_line_density: usize, // seeds per charge
    pub step_size: f64, // tracer step
    pub show_mouse_vector: bool,
    pub intensity_coloring: bool,
    pub is_paused: bool,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_vectors: true,
            field_line_density: 16,
            step_size: 2.0,
            show_mouse_vector: true,
            intensity_coloring: true,
            is_paused: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub mode: SimulationMode,
    pub charges: Vec<Charge>,
    pub wires: Vec<Wire>,
    pub settings: SimSettings,
    pub width: f64,
    pub height: f64,
    initial_charges: Vec<Charge>,
    initial_wires: Vec<Wire>,
    next_id: u64,
}

impl Scene {
    pub fn new(
        mode: SimulationMode,
        charges: Vec<Charge>,
        wires: Vec<Wire>,
        settings: SimSettings,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            mode,
            initial_charges: charges.clone(),
            initial_wires: wires.clone(),
            charges,
            wires,
            settings,
            width,
            height,
            next_id: 1,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn set_mode(&mut self, mode: SimulationMode) {
        if self.mode != mode {
            debug!("mode {} -> {}", self.mode.label(), mode.label());
        }
        self.mode = mode;
    }

    pub fn toggle_pause(&mut self) {
        self.settings.is_paused = !self.settings.is_paused;
    }

    /// Field of the live sources: wires in magnetic mode, charges otherwise
    pub fn field_at(&self, point: NVec2) -> NVec2 {
        match self.mode {
            SimulationMode::Magnetic => magnetic_field_at(point, &self.wires),
            SimulationMode::Electric | SimulationMode::Dynamic => electric_field_at(point, &self.charges),
        }
    }

    /// Sources of the kind the current mode works with
    pub fn sources(&self) -> Vec<Source<'_>> {
        match self.mode {
            SimulationMode::Magnetic => self.wires.iter().map(Source::Wire).collect(),
            SimulationMode::Electric | SimulationMode::Dynamic => {
                self.charges.iter().map(Source::Charge).collect()
            }
        }
    }

    fn fresh_id(&mut self, prefix: char) -> String {
        loop {
            let id = format!("{prefix}{}", self.next_id);
            self.next_id += 1;
            let taken = self.charges.iter().any(|c| c.id == id) || self.wires.iter().any(|w| w.id == id);
            if !taken {
                return id;
            }
        }
    }

    /// Add a default source of the live kind at `at` and return its id
    pub fn add_source(&mut self, at: NVec2) -> String {
        match self.mode {
            SimulationMode::Magnetic => {
                let id = self.fresh_id('w');
                self.wires.push(Wire::new(id.clone(), at, NEW_WIRE_CURRENT));
                debug!(id = %id, "added wire");
                id
            }
            SimulationMode::Electric | SimulationMode::Dynamic => {
                let id = self.fresh_id('c');
                self.charges.push(Charge::at_rest(id.clone(), at, NEW_CHARGE_Q, NEW_CHARGE_MASS));
                debug!(id = %id, "added charge");
                id
            }
        }
    }

    /// Remove the live source with `id`; false if there is none
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.charges.len() + self.wires.len();
        match self.mode {
            SimulationMode::Magnetic => self.wires.retain(|w| w.id != id),
            SimulationMode::Electric | SimulationMode::Dynamic => self.charges.retain(|c| c.id != id),
        }
        before != self.charges.len() + self.wires.len()
    }

    /// Remove every live source
    pub fn clear(&mut self) {
        match self.mode {
            SimulationMode::Magnetic => self.wires.clear(),
            SimulationMode::Electric | SimulationMode::Dynamic => self.charges.clear(),
        }
    }

    /// Set the charge `q` or current `i` of the live source with `id`
    pub fn update_value(&mut self, id: &str, value: f64) -> bool {
        match self.mode {
            SimulationMode::Magnetic => match self.wires.iter_mut().find(|w| w.id == id) {
                Some(w) => {
                    w.i = value;
                    true
                }
                None => false,
            },
            SimulationMode::Electric | SimulationMode::Dynamic => match self.charges.iter_mut().find(|c| c.id == id) {
                Some(c) => {
                    c.q = value;
                    true
                }
                None => false,
            },
        }
    }

    /// Move the live source with `id`; a dragged charge loses its velocity
    pub fn update_position(&mut self, id: &str, at: NVec2) -> bool {
        match self.mode {
            SimulationMode::Magnetic => match self.wires.iter_mut().find(|w| w.id == id) {
                Some(w) => {
                    w.x = at;
                    true
                }
                None => false,
            },
            SimulationMode::Electric | SimulationMode::Dynamic => match self.charges.iter_mut().find(|c| c.id == id) {
                Some(c) => {
                    c.x = at;
                    c.v = NVec2::zeros();
                    true
                }
                None => false,
            },
        }
    }

    /// Restore the sources the scene was built with and unpause
    pub fn reset(&mut self) {
        self.charges = self.initial_charges.clone();
        self.wires = self.initial_wires.clone();
        self.settings.is_paused = false;
    }

    /// Id of the first live source within the grab radius of `point`
    pub fn pick(&self, point: NVec2) -> Option<String> {
        self.sources()
            .into_iter()
            .find(|s| {
                let p = s.position();
                (p.x - point.x).powi(2) + (p.y - point.y).powi(2) < PICK_R2
            })
            .map(|s| s.id().to_string())
    }

    /// One dynamics step; does nothing outside dynamics mode or while paused.
    /// Returns whether a step ran
    pub fn step(&mut self) -> bool {
        if self.mode != SimulationMode::Dynamic || self.settings.is_paused {
            return false;
        }
        self.charges = step_dynamics(&self.charges, self.width, self.height);
        true
    }
}
