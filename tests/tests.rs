use std::time::Duration;

use fieldsim::simulation::states::{Charge, Wire, NVec2};
use fieldsim::simulation::vector::{magnitude, normalize};
use fieldsim::simulation::params::{Bounds, TraceParams, DynamicsParams, K};
use fieldsim::simulation::fields::{electric_field_at, magnetic_field_at, ElectricField, MagneticField, FieldSampler};
use fieldsim::simulation::tracer::{trace_line, Direction};
use fieldsim::simulation::seeding::{electric_seeds, magnetic_seeds, trace_field_lines, WIRE_SEED_RADII};
use fieldsim::simulation::grid::{probe, sample_grid};
use fieldsim::simulation::forces::{net_forces, CoulombForce, Force, ForceSet};
use fieldsim::simulation::integrator::{step_dynamics, step_dynamics_with};
use fieldsim::simulation::engine::SimulationMode;
use fieldsim::simulation::scheduler::TickSource;
use fieldsim::simulation::scene::{Scene, SimSettings};
use fieldsim::simulation::scenario::Scenario;
use fieldsim::configuration::config::ScenarioConfig;
use fieldsim::configuration::error::ConfigError;

const EPS: f64 = 1e-12;

/// Charge at rest with the default mass
pub fn charge(id: &str, x: f64, y: f64, q: f64) -> Charge {
    Charge::at_rest(id, NVec2::new(x, y), q, 10.0)
}

pub fn wire(id: &str, x: f64, y: f64, i: f64) -> Wire {
    Wire::new(id, NVec2::new(x, y), i)
}

/// +15 at (250, 300) and -15 at (550, 300)
pub fn dipole() -> Vec<Charge> {
    vec![charge("1", 250.0, 300.0, 15.0), charge("2", 550.0, 300.0, -15.0)]
}

/// Dipole plus one wire in an 800x600 scene
pub fn test_scene(mode: SimulationMode) -> Scene {
    Scene::new(mode, dipole(), vec![wire("w1", 400.0, 300.0, 10.0)], SimSettings::default(), 800.0, 600.0)
}

fn close(a: NVec2, b: NVec2, tol: f64) -> bool {
    (a - b).norm() <= tol
}

// ==================================================================================
// Vector tests
// ==================================================================================

#[test]
fn magnitude_of_3_4_is_5() {
    assert_eq!(magnitude(NVec2::new(3.0, 4.0)), 5.0);
    assert_eq!(magnitude(NVec2::zeros()), 0.0);
}

#[test]
fn normalize_zero_vector_is_zero() {
    let n = normalize(NVec2::zeros());
    assert_eq!(n, NVec2::zeros());
    assert!(n.x.is_finite() && n.y.is_finite());
}

#[test]
fn normalize_gives_unit_length() {
    let n = normalize(NVec2::new(-7.0, 24.0));
    assert!((magnitude(n) - 1.0).abs() < EPS);
    assert!(close(n, NVec2::new(-7.0 / 25.0, 24.0 / 25.0), EPS));
}

// ==================================================================================
// Electric field tests
// ==================================================================================

#[test]
fn positive_charge_field_points_outward() {
    let charges = vec![charge("a", 0.0, 0.0, 15.0)];
    let e = electric_field_at(NVec2::new(100.0, 0.0), &charges);

    assert!(e.x > 0.0, "field not outward: {:?}", e);
    assert_eq!(e.y, 0.0);
}

#[test]
fn negative_charge_field_points_inward() {
    let charges = vec![charge("a", 0.0, 0.0, -15.0)];
    let p = NVec2::new(60.0, -80.0);
    let e = electric_field_at(p, &charges);

    // anti-parallel to the displacement from the charge
    let dir = normalize(e);
    assert!(close(dir, -normalize(p), 1e-12), "field not inward: {:?}", e);
}

#[test]
fn electric_field_inverse_square() {
    let charges = vec![charge("a", 0.0, 0.0, 10.0)];
    let e_r = electric_field_at(NVec2::new(50.0, 0.0), &charges);
    let e_2r = electric_field_at(NVec2::new(100.0, 0.0), &charges);

    let ratio = magnitude(e_r) / magnitude(e_2r);
    assert!((ratio - 4.0).abs() < 1e-9, "Expected 4x, got {}", ratio);
}

#[test]
fn electric_field_superposes() {
    let a = charge("a", 120.0, 80.0, 12.0);
    let b = charge("b", 430.0, 260.0, -7.5);
    let both = vec![a.clone(), b.clone()];

    for p in [NVec2::new(300.0, 150.0), NVec2::new(0.0, 0.0), NVec2::new(145.0, 80.0), NVec2::new(700.0, 500.0)] {
        let sum = electric_field_at(p, &[a.clone()]) + electric_field_at(p, &[b.clone()]);
        let joint = electric_field_at(p, &both);
        assert!(close(sum, joint, 1e-12), "superposition broken at {:?}", p);
    }
}

#[test]
fn electric_skip_radius_excludes_near_charges() {
    let charges = vec![charge("a", 0.0, 0.0, 15.0)];

    assert_eq!(electric_field_at(NVec2::new(14.9, 0.0), &charges), NVec2::zeros());
    assert!(magnitude(electric_field_at(NVec2::new(15.0, 0.0), &charges)) > 0.0);
    assert_eq!(electric_field_at(NVec2::new(1.0, 1.0), &[]), NVec2::zeros());
}

#[test]
fn dipole_midpoint_field_points_from_positive_to_negative() {
    let e = electric_field_at(NVec2::new(400.0, 300.0), &dipole());

    // each charge contributes K * 15 / 150^2 along +x
    let expected = 2.0 * K * 15.0 / (150.0 * 150.0);
    assert!((e.x - expected).abs() < EPS, "got {:?}, expected {}", e, expected);
    assert!(e.y.abs() < EPS);

    // positive charge on the left, negative on the right
    assert!(e.x > 0.0);
}

#[test]
fn samplers_are_deterministic() {
    let charges = dipole();
    let wires = vec![wire("w1", 400.0, 300.0, 10.0), wire("w2", 100.0, 80.0, -3.0)];
    let p = NVec2::new(333.3, 123.4);

    assert_eq!(electric_field_at(p, &charges), electric_field_at(p, &charges));
    assert_eq!(magnetic_field_at(p, &wires), magnetic_field_at(p, &wires));

    let sampler = ElectricField { charges: &charges };
    assert_eq!(sampler.field_at(p), electric_field_at(p, &charges));
}

// ==================================================================================
// Magnetic field tests
// ==================================================================================

#[test]
fn magnetic_field_circulates_around_wire() {
    let wires = vec![wire("w", 0.0, 0.0, 10.0)];
    let b = magnetic_field_at(NVec2::new(100.0, 0.0), &wires);

    // MU0_2PI * i / r = 2 * 10 / 100 along +y for displacement +x
    assert_eq!(b.x, 0.0);
    assert!((b.y - 0.2).abs() < EPS);

    let p = NVec2::new(37.0, -81.0);
    let b = magnetic_field_at(p, &wires);
    assert!(b.dot(&p).abs() < 1e-12, "field not perpendicular to displacement");
}

#[test]
fn magnetic_field_flips_with_current() {
    let p = NVec2::new(70.0, 40.0);
    let up = magnetic_field_at(p, &[wire("w", 0.0, 0.0, 5.0)]);
    let down = magnetic_field_at(p, &[wire("w", 0.0, 0.0, -5.0)]);
    assert!(close(up, -down, EPS));
}

#[test]
fn magnetic_field_falls_off_as_one_over_r() {
    let wires = vec![wire("w", 0.0, 0.0, 10.0)];
    let ratio = magnitude(magnetic_field_at(NVec2::new(0.0, 50.0), &wires))
        / magnitude(magnetic_field_at(NVec2::new(0.0, 100.0), &wires));
    assert!((ratio - 2.0).abs() < 1e-9, "Expected 2x, got {}", ratio);
}

#[test]
fn magnetic_skip_radius_excludes_near_wires() {
    let wires = vec![wire("w", 0.0, 0.0, 10.0)];
    assert_eq!(magnetic_field_at(NVec2::new(0.0, 9.9), &wires), NVec2::zeros());
    assert!(magnitude(magnetic_field_at(NVec2::new(0.0, 10.0), &wires)) > 0.0);
}

// ==================================================================================
// Tracer tests
// ==================================================================================

#[test]
fn direction_from_sign() {
    assert_eq!(Direction::from_sign(15.0), Direction::Forward);
    assert_eq!(Direction::from_sign(-3.0), Direction::Backward);
    assert_eq!(Direction::from_sign(0.0), Direction::Backward);
    assert_eq!(Direction::Forward.sign(), 1.0);
    assert_eq!(Direction::Backward.sign(), -1.0);
}

#[test]
fn tracer_from_isolated_charge_stays_bounded() {
    let charges = vec![charge("a", 400.0, 300.0, 15.0)];
    let sampler = ElectricField { charges: &charges };
    let bounds = Bounds::new(800.0, 600.0);
    let params = TraceParams::default();

    for seed in electric_seeds(&charges, 16) {
        let line = trace_line(seed.point, seed.direction, &sampler, &charges, &params, bounds);
        assert!(!line.is_empty() && line.len() <= params.max_steps + 1);
        for p in &line {
            assert!(bounds.contains_with_margin(p.x, p.y, params.margin), "point {:?} escaped", p);
        }
    }
}

#[test]
fn tracer_runs_outward_until_it_leaves_the_scene() {
    let charges = vec![charge("a", 400.0, 300.0, 15.0)];
    let sampler = ElectricField { charges: &charges };
    let bounds = Bounds::new(800.0, 600.0);
    let params = TraceParams::default();

    let line = trace_line(NVec2::new(420.0, 300.0), Direction::Forward, &sampler, &charges, &params, bounds);

    assert_eq!(line[0], NVec2::new(420.0, 300.0));
    let last = *line.last().unwrap();
    // the point that crossed the margin is the last one kept
    assert!(last.x > 810.0 && last.x <= 810.0 + params.step_size, "last = {:?}", last);
    for p in &line[..line.len() - 1] {
        assert!(bounds.contains_with_margin(p.x, p.y, params.margin));
    }
    assert!(line.len() <= params.max_steps + 1);
}

#[test]
fn tracer_is_absorbed_by_sink() {
    let charges = dipole();
    let sampler = ElectricField { charges: &charges };
    let params = TraceParams::default();

    let line = trace_line(NVec2::new(260.0, 300.0), Direction::Forward, &sampler, &charges, &params, Bounds::new(800.0, 600.0));

    let last = *line.last().unwrap();
    let d2 = (last - charges[1].x).norm_squared();
    assert!(d2 < params.absorb_r2, "line ended at {:?}, not at the sink", last);
    assert!(line.len() < params.max_steps + 1);
}

#[test]
fn tracer_stops_in_weak_field() {
    let weak = |_p: NVec2| NVec2::new(0.05, 0.0);
    let sources: Vec<NVec2> = Vec::new();
    let line = trace_line(NVec2::new(10.0, 10.0), Direction::Forward, &weak, &sources, &TraceParams::default(), Bounds::new(100.0, 100.0));
    assert_eq!(line, vec![NVec2::new(10.0, 10.0)]);
}

#[test]
fn tracer_respects_step_cap() {
    let uniform = |_p: NVec2| NVec2::new(3.0, 0.0);
    let sources: Vec<NVec2> = Vec::new();
    let params = TraceParams::with_step_size(1.0);
    let line = trace_line(NVec2::zeros(), Direction::Forward, &uniform, &sources, &params, Bounds::new(1.0e9, 1.0e9));

    assert_eq!(line.len(), params.max_steps + 1);
    assert!((line.last().unwrap().x - params.max_steps as f64).abs() < EPS);
}

#[test]
fn tracer_backward_runs_against_field() {
    let uniform = |_p: NVec2| NVec2::new(0.0, 2.0);
    let sources: Vec<NVec2> = Vec::new();
    let params = TraceParams { max_steps: 5, ..TraceParams::default() };
    let line = trace_line(NVec2::new(50.0, 50.0), Direction::Backward, &uniform, &sources, &params, Bounds::new(100.0, 100.0));

    assert_eq!(line.len(), 6);
    assert!(close(line[5], NVec2::new(50.0, 40.0), EPS));
}

// ==================================================================================
// Seeding tests
// ==================================================================================

#[test]
fn electric_seeds_ring_each_charge() {
    let charges = dipole();
    let seeds = electric_seeds(&charges, 16);
    assert_eq!(seeds.len(), 32);

    for (k, s) in seeds.iter().enumerate() {
        let c = &charges[k / 16];
        assert!(((s.point - c.x).norm() - 10.0).abs() < 1e-9);
        assert_eq!(s.direction, Direction::from_sign(c.q));
    }
    assert!(close(seeds[0].point, NVec2::new(260.0, 300.0), EPS));
}

#[test]
fn magnetic_seeds_on_concentric_rings() {
    let wires = vec![wire("w", 400.0, 300.0, -10.0)];
    let seeds = magnetic_seeds(&wires);
    assert_eq!(seeds.len(), WIRE_SEED_RADII.len() * 4);

    for (k, s) in seeds.iter().enumerate() {
        let r = (s.point - wires[0].x).norm();
        assert!((r - WIRE_SEED_RADII[k / 4]).abs() < 1e-9);
        assert_eq!(s.direction, Direction::Backward);
    }
}

#[test]
fn field_lines_follow_mode() {
    let mut scene = test_scene(SimulationMode::Electric);
    scene.settings.field_line_density = 8;
    let lines = trace_field_lines(&scene);
    assert_eq!(lines.len(), 16);
    assert!(lines.iter().all(|l| !l.points.is_empty()));

    scene.set_mode(SimulationMode::Magnetic);
    assert_eq!(trace_field_lines(&scene).len(), WIRE_SEED_RADII.len() * 4);

    scene.set_mode(SimulationMode::Dynamic);
    assert!(trace_field_lines(&scene).is_empty());

    scene.set_mode(SimulationMode::Electric);
    scene.settings.field_line_density = 0;
    assert!(trace_field_lines(&scene).is_empty());
}

// ==================================================================================
// Grid tests
// ==================================================================================

#[test]
fn grid_samples_cell_centres() {
    let uniform = |_p: NVec2| NVec2::new(0.0, -4.0);
    let grid = sample_grid(&uniform, Bounds::new(80.0, 80.0), 40.0);

    let points: Vec<NVec2> = grid.iter().map(|s| s.point).collect();
    assert_eq!(
        points,
        vec![NVec2::new(20.0, 20.0), NVec2::new(20.0, 60.0), NVec2::new(60.0, 20.0), NVec2::new(60.0, 60.0)]
    );
    assert!(grid.iter().all(|s| s.magnitude == 4.0 && s.direction == NVec2::new(0.0, -1.0)));
}

#[test]
fn grid_and_probe_drop_weak_samples() {
    let none = |_p: NVec2| NVec2::new(0.01, 0.0);
    assert!(sample_grid(&none, Bounds::new(400.0, 400.0), 40.0).is_empty());
    assert!(probe(&none, NVec2::new(1.0, 1.0)).is_none());

    let wires = vec![wire("w", 200.0, 200.0, 10.0)];
    let sampler = MagneticField { wires: &wires };
    let s = probe(&sampler, NVec2::new(220.0, 200.0)).unwrap();
    assert!((s.magnitude - 1.0).abs() < EPS);
}

// ==================================================================================
// Force tests
// ==================================================================================

#[test]
fn coulomb_newton_third_law() {
    let charges = vec![charge("a", 100.0, 120.0, 7.0), charge("b", 260.0, 310.0, -4.0)];
    let f = net_forces(&charges, &ForceSet::coulomb());

    assert!((f[0] + f[1]).norm() < 1e-12, "Net force not zero: {:?}", f[0] + f[1]);
    // opposite charges: force on a points toward b
    assert!(f[0].dot(&(charges[1].x - charges[0].x)) > 0.0);
}

#[test]
fn coulomb_clamps_close_pairs() {
    let charges = vec![charge("a", 0.0, 0.0, 10.0), charge("b", 1.0, 0.0, 10.0)];
    let f = CoulombForce::default().force_on(0, &charges);

    // r^2 clamped to 625, so |f| = K q q / 625 / 25 along -x
    assert!((f.x - (-57.6)).abs() < 1e-9, "got {:?}", f);
    assert_eq!(f.y, 0.0);
}

#[test]
fn force_set_sums_terms() {
    let charges = dipole();
    let single = ForceSet::coulomb();
    let double = ForceSet::new().with(CoulombForce::default()).with(CoulombForce::default());

    assert_eq!(double.len(), 2);
    assert!(ForceSet::new().is_empty());
    let f1 = single.net_force_on(0, &charges);
    let f2 = double.net_force_on(0, &charges);
    assert!(close(f2, 2.0 * f1, 1e-12));
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn close_charges_stay_finite() {
    let mut charges = vec![charge("a", 400.0, 300.0, 10.0), charge("b", 401.0, 300.0, 10.0)];

    for _ in 0..5000 {
        charges = step_dynamics(&charges, 800.0, 600.0);
        for c in &charges {
            assert!(c.x.x.is_finite() && c.x.y.is_finite(), "position blew up: {:?}", c);
            assert!(c.v.x.is_finite() && c.v.y.is_finite(), "velocity blew up: {:?}", c);
        }
    }
}

#[test]
fn wall_bounce_clamps_and_reflects() {
    let mut c = charge("a", 29.0, 300.0, 10.0);
    c.v = NVec2::new(-5.0, 0.0);

    let out = step_dynamics(&[c], 800.0, 600.0);

    // pre-clamp velocity is -5 * 0.98 = -4.9
    assert_eq!(out[0].x.x, 30.0);
    assert!(out[0].v.x > 0.0);
    assert!((out[0].v.x - 2.45).abs() < EPS, "vx = {}", out[0].v.x);
    assert_eq!(out[0].x.y, 300.0);
    assert_eq!(out[0].v.y, 0.0);
}

#[test]
fn wall_bounce_on_far_walls() {
    let mut c = charge("a", 790.0, 590.0, 10.0);
    c.v = NVec2::new(3.0, 3.0);

    let out = step_dynamics(&[c], 800.0, 600.0);
    assert_eq!(out[0].x, NVec2::new(770.0, 570.0));
    assert!(out[0].v.x < 0.0 && out[0].v.y < 0.0);
}

#[test]
fn step_preserves_identity_and_input() {
    let mut input = dipole();
    input.push(charge("3", 400.0, 100.0, 5.0));
    let before = input.clone();

    let out = step_dynamics(&input, 800.0, 600.0);

    assert_eq!(input, before, "input was mutated");
    assert_eq!(out.len(), input.len());
    for (a, b) in out.iter().zip(input.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.q, b.q);
        assert_eq!(a.m, b.m);
    }
    assert_ne!(out[0].x, input[0].x);
}

#[test]
fn lone_charge_only_damps() {
    let mut c = charge("a", 400.0, 300.0, 10.0);
    c.v = NVec2::new(10.0, 0.0);

    let out = step_dynamics(&[c], 800.0, 600.0);
    assert!((out[0].v.x - 9.8).abs() < EPS);
    assert!((out[0].x.x - (400.0 + 9.8 * 0.08)).abs() < EPS);

    assert!(step_dynamics(&[], 800.0, 600.0).is_empty());
}

#[test]
fn opposite_charges_attract_like_charges_repel() {
    let out = step_dynamics(&dipole(), 800.0, 600.0);
    assert!(out[0].v.x > 0.0 && out[1].v.x < 0.0);

    let like = vec![charge("a", 300.0, 300.0, 10.0), charge("b", 500.0, 300.0, 10.0)];
    let out = step_dynamics(&like, 800.0, 600.0);
    assert!(out[0].v.x < 0.0 && out[1].v.x > 0.0);
}

#[test]
fn later_charges_see_updated_positions() {
    let mut a = charge("a", 300.0, 300.0, 10.0);
    a.v = NVec2::new(0.0, 40.0);
    let b = charge("b", 360.0, 300.0, -10.0);
    let params = DynamicsParams::default();

    let out = step_dynamics(&[a.clone(), b.clone()], 800.0, 600.0);

    // b's force comes from a's new position
    let f = CoulombForce::default().force_on(1, &[out[0].clone(), b.clone()]);
    let vx = (b.v.x + (f.x / params.mass_divisor) * params.dt) * params.friction;
    let vy = (b.v.y + (f.y / params.mass_divisor) * params.dt) * params.friction;
    assert!((out[1].v.x - vx).abs() < EPS);
    assert!((out[1].v.y - vy).abs() < EPS);
    assert!(out[1].v.y > 0.0, "b should be pulled toward a's new position");
}

#[test]
fn mass_is_not_read_by_integrator() {
    let light = dipole();
    let mut heavy = dipole();
    for c in heavy.iter_mut() {
        c.m = 1000.0;
    }

    let a = step_dynamics(&light, 800.0, 600.0);
    let b = step_dynamics(&heavy, 800.0, 600.0);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.x, y.x);
        assert_eq!(x.v, y.v);
    }
}

#[test]
fn custom_params_change_the_step() {
    let mut c = charge("a", 400.0, 300.0, 10.0);
    c.v = NVec2::new(1.0, 0.0);
    let params = DynamicsParams { friction: 1.0, dt: 1.0, ..DynamicsParams::default() };

    let out = step_dynamics_with(&[c], Bounds::new(800.0, 600.0), &ForceSet::new(), &params);
    assert_eq!(out[0].x, NVec2::new(401.0, 300.0));
    assert_eq!(out[0].v, NVec2::new(1.0, 0.0));
}

// ==================================================================================
// Scheduler tests
// ==================================================================================

#[test]
fn ticker_accumulates_fixed_intervals() {
    let mut t = TickSource::new(Duration::from_millis(16));

    assert_eq!(t.poll(Duration::from_millis(10), false), 0);
    assert_eq!(t.poll(Duration::from_millis(10), false), 1);
    assert_eq!(t.poll(Duration::from_millis(40), false), 2);

    // paused time is not banked
    assert_eq!(t.poll(Duration::from_millis(100), true), 0);
    assert_eq!(t.poll(Duration::from_millis(4), false), 1);
}

#[test]
fn ticker_cancel_and_catch_up_cap() {
    let mut t = TickSource::new(Duration::from_millis(10)).with_max_catch_up(3);

    assert_eq!(t.poll(Duration::from_secs(1), false), 3);
    assert_eq!(t.poll(Duration::ZERO, false), 0);

    t.cancel();
    assert!(!t.is_registered());
    assert_eq!(t.poll(Duration::from_millis(50), false), 0);

    t.register();
    assert_eq!(t.poll(Duration::from_millis(25), false), 2);
}

// ==================================================================================
// Scene tests
// ==================================================================================

#[test]
fn scene_field_follows_mode() {
    let mut scene = test_scene(SimulationMode::Electric);
    let p = NVec2::new(400.0, 200.0);

    assert_eq!(scene.field_at(p), electric_field_at(p, &scene.charges));
    scene.set_mode(SimulationMode::Magnetic);
    assert_eq!(scene.field_at(p), magnetic_field_at(p, &scene.wires));
    assert_eq!(scene.sources().len(), 1);
    assert_eq!(scene.sources()[0].id(), "w1");
}

#[test]
fn scene_add_uses_live_kind_and_fresh_ids() {
    let mut scene = test_scene(SimulationMode::Electric);
    let c1 = scene.add_source(NVec2::new(100.0, 100.0));
    let c2 = scene.add_source(NVec2::new(120.0, 100.0));

    assert_ne!(c1, c2);
    assert_eq!(scene.charges.len(), 4);
    let added = scene.charges.iter().find(|c| c.id == c1).unwrap();
    assert_eq!(added.q, 10.0);
    assert_eq!(added.v, NVec2::zeros());

    scene.set_mode(SimulationMode::Magnetic);
    let w = scene.add_source(NVec2::new(50.0, 50.0));
    assert_eq!(scene.wires.len(), 2);
    assert_ne!(w, "w1");
    assert_eq!(scene.wires[1].i, 10.0);
}

#[test]
fn scene_edits_report_unknown_ids() {
    let mut scene = test_scene(SimulationMode::Dynamic);
    scene.charges[0].v = NVec2::new(3.0, 3.0);

    assert!(scene.update_position("1", NVec2::new(100.0, 100.0)));
    assert_eq!(scene.charges[0].x, NVec2::new(100.0, 100.0));
    assert_eq!(scene.charges[0].v, NVec2::zeros());

    assert!(scene.update_value("2", -20.0));
    assert_eq!(scene.charges[1].q, -20.0);

    // wire ids are not live outside magnetic mode
    assert!(!scene.update_value("w1", 1.0));
    assert!(!scene.remove("nope"));
    assert!(scene.remove("1"));
    assert_eq!(scene.charges.len(), 1);

    scene.clear();
    assert!(scene.charges.is_empty());
    assert_eq!(scene.wires.len(), 1);
}

#[test]
fn scene_reset_restores_sources_and_unpauses() {
    let mut scene = test_scene(SimulationMode::Electric);
    scene.clear();
    scene.add_source(NVec2::new(10.0, 10.0));
    scene.settings.is_paused = true;

    scene.reset();
    assert_eq!(scene.charges, dipole());
    assert!(!scene.settings.is_paused);
}

#[test]
fn scene_pick_uses_grab_radius() {
    let scene = test_scene(SimulationMode::Electric);
    assert_eq!(scene.pick(NVec2::new(260.0, 310.0)), Some("1".to_string()));
    assert_eq!(scene.pick(NVec2::new(400.0, 300.0)), None);

    let scene = test_scene(SimulationMode::Magnetic);
    assert_eq!(scene.pick(NVec2::new(400.0, 320.0)), Some("w1".to_string()));
}

#[test]
fn scene_steps_only_in_running_dynamics_mode() {
    let mut scene = test_scene(SimulationMode::Electric);
    assert!(!scene.step());
    assert_eq!(scene.charges, dipole());

    scene.set_mode(SimulationMode::Dynamic);
    scene.toggle_pause();
    assert!(!scene.step());

    scene.toggle_pause();
    assert!(scene.step());
    assert_eq!(scene.charges, step_dynamics(&dipole(), 800.0, 600.0));
}

// ==================================================================================
// Configuration / scenario tests
// ==================================================================================

#[test]
fn default_scenario_is_the_dipole_scene() {
    let scenario = Scenario::build_scenario(ScenarioConfig::default()).unwrap();

    assert_eq!(scenario.scene.mode, SimulationMode::Electric);
    assert_eq!(scenario.scene.charges, dipole());
    assert_eq!(scenario.scene.wires, vec![wire("w1", 400.0, 300.0, 10.0)]);
    assert_eq!(scenario.scene.settings, SimSettings::default());
    assert_eq!(scenario.ticker.interval(), Duration::from_millis(16));
}

#[test]
fn yaml_fills_defaults() {
    let yaml = r#"
engine:
  mode: "dynamic"
charges:
  - id: "a"
    x: [100.0, 200.0]
    q: -3.0
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.engine.mode, SimulationMode::Dynamic);
    assert_eq!(cfg.engine.width, 800.0);
    assert_eq!(cfg.settings.field_line_density, 16);
    assert_eq!(cfg.charges[0].v, vec![0.0, 0.0]);
    assert_eq!(cfg.charges[0].m, 10.0);
    assert!(cfg.wires.is_empty());

    let scenario = Scenario::build_scenario(cfg).unwrap();
    assert_eq!(scenario.scene.charges[0].x, NVec2::new(100.0, 200.0));
}

#[test]
fn validation_rejects_malformed_sources() {
    let mut cfg = ScenarioConfig::default();
    cfg.charges[1].id = "1".into();
    assert!(matches!(cfg.validate(), Err(ConfigError::DuplicateId { kind: "charge", .. })));

    let mut cfg = ScenarioConfig::default();
    cfg.charges[0].m = 0.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::NonPositiveMass { .. })));

    let mut cfg = ScenarioConfig::default();
    cfg.wires[0].x = vec![1.0, 2.0, 3.0];
    assert!(matches!(cfg.validate(), Err(ConfigError::BadVector { len: 3, .. })));

    let mut cfg = ScenarioConfig::default();
    cfg.charges[0].v = vec![f64::NAN, 0.0];
    assert!(matches!(cfg.validate(), Err(ConfigError::NonFinite { field: "v", .. })));

    let mut cfg = ScenarioConfig::default();
    cfg.settings.step_size = 0.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { name: "settings.step_size", .. })));

    let mut cfg = ScenarioConfig::default();
    cfg.engine.tick_ms = 0;
    assert!(Scenario::build_scenario(cfg).is_err());
}

#[test]
fn bundled_scenarios_load() {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["dipole.yaml", "wires.yaml", "dynamics.yaml"] {
        let text = std::fs::read_to_string(dir.join(name)).unwrap();
        let cfg: ScenarioConfig = serde_yaml::from_str(&text).unwrap();
        assert!(Scenario::build_scenario(cfg).is_ok(), "{name} failed to build");
    }
}

#[test]
fn scenario_advance_runs_due_steps() {
    let mut cfg = ScenarioConfig::default();
    cfg.engine.mode = SimulationMode::Dynamic;
    let mut scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.advance(Duration::from_millis(8)), 0);
    assert_eq!(scenario.advance(Duration::from_millis(8)), 1);
    assert_eq!(scenario.scene.charges, step_dynamics(&dipole(), 800.0, 600.0));

    scenario.scene.settings.is_paused = true;
    assert_eq!(scenario.advance(Duration::from_millis(100)), 0);
}
