pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Charge, Wire, Source, PointSource, NVec2};
pub use simulation::vector::{magnitude, normalize};
pub use simulation::params::{Bounds, TraceParams, DynamicsParams, K, MU0_2PI};
pub use simulation::fields::{FieldSampler, ElectricField, MagneticField, electric_field_at, magnetic_field_at};
pub use simulation::tracer::{Direction, trace_line};
pub use simulation::seeding::{FieldLine, Seed, electric_seeds, magnetic_seeds, trace_field_lines};
pub use simulation::grid::{GridSample, probe, sample_grid};
pub use simulation::forces::{Force, ForceSet, CoulombForce, net_forces};
pub use simulation::integrator::{step_dynamics, step_dynamics_with};
pub use simulation::engine::{Engine, SimulationMode};
pub use simulation::scheduler::TickSource;
pub use simulation::scene::{Scene, SimSettings};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, SettingsConfig, ChargeConfig, WireConfig, ScenarioConfig};
pub use configuration::error::ConfigError;

pub use visualization::fieldsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_fields, bench_dynamics};
