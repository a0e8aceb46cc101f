//! Build fully-initialized scenes from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it and produces the
//! runtime bundle `Scenario` containing:
//! - engine settings (`Engine`)
//! - the editable scene (`Scene`) with its charges and wires
//! - the tick source (`TickSource`) that paces dynamics mode
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, stepping and drawing systems, or driven directly in headless runs

use std::time::Duration;

use bevy::prelude::Resource;
use tracing::info;

use crate::configuration::config::{ChargeConfig, ScenarioConfig, WireConfig};
use crate::configuration::error::ConfigError;
use crate::simulation::engine::Engine;
use crate::simulation::scene::{Scene, SimSettings};
use crate::simulation::scheduler::TickSource;
use crate::simulation::states::{Charge, NVec2, Wire};

/// Bevy resource representing a fully-initialized scene
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, the scene the user edits, and the tick
/// source that decides when dynamics mode advances
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub scene: Scene,
    pub ticker: TickSource,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Charges: map `ChargeConfig` -> runtime `Charge` using nalgebra vectors
        let charges: Vec<Charge> = cfg.charges.iter().map(|cc: &ChargeConfig| Charge {
            id: cc.id.clone(),
            x: NVec2::new(cc.x[0], cc.x[1]),
            v: NVec2::new(cc.v[0], cc.v[1]),
            q: cc.q,
            m: cc.m,
        }).collect();

        // Wires: map `WireConfig` -> runtime `Wire`
        let wires: Vec<Wire> = cfg.wires.iter().map(|wc: &WireConfig| {
            Wire::new(wc.id.clone(), NVec2::new(wc.x[0], wc.x[1]), wc.i)
        }).collect();

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            mode: e_cfg.mode,
            width: e_cfg.width,
            height: e_cfg.height,
            tick: Duration::from_millis(e_cfg.tick_ms),
        };

        // Settings (runtime) from SettingsConfig
        let s_cfg = cfg.settings;
        let settings = SimSettings {
            show_grid: s_cfg.show_grid,
            show_vectors: s_cfg.show_vectors,
            field_line_density: s_cfg.field_line_density,
            step_size: s_cfg.step_size,
            show_mouse_vector: s_cfg.show_mouse_vector,
            intensity_coloring: s_cfg.intensity_coloring,
            is_paused: s_cfg.is_paused,
        };

        info!(
            mode = engine.mode.label(),
            charges = charges.len(),
            wires = wires.len(),
            "built scenario {}x{}",
            engine.width,
            engine.height
        );

        let scene = Scene::new(engine.mode, charges, wires, settings, engine.width, engine.height);
        let ticker = TickSource::new(engine.tick);

        Ok(Self {
            engine,
            scene,
            ticker,
        })
    }

    /// Feed `elapsed` wall-clock time to the tick source and run every
    /// dynamics step that is due. Returns the number of steps taken
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let Scenario { scene, ticker, .. } = self;

        let due = ticker.poll(elapsed, scene.settings.is_paused);
        let mut taken = 0;
        for _ in 0..due {
            if scene.step() {
                taken += 1;
            }
        }
        taken
    }
}
