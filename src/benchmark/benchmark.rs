use std::time::Instant;

use crate::simulation::fields::{electric_field_at, ElectricField};
use crate::simulation::grid::{sample_grid, GRID_SPACING};
use crate::simulation::integrator::step_dynamics;
use crate::simulation::params::{Bounds, TraceParams};
use crate::simulation::seeding::electric_seeds;
use crate::simulation::states::{Charge, NVec2};
use crate::simulation::tracer::trace_line;

const WIDTH: f64 = 1600.0;
const HEIGHT: f64 = 1200.0;

/// Helper to build `n` charges spread over the scene with alternating sign
fn make_charges(n: usize) -> Vec<Charge> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec2::new(
                WIDTH / 2.0 + (i_f * 0.37).sin() * 600.0,
                HEIGHT / 2.0 + (i_f * 0.13).cos() * 450.0,
            );
            let q = if i % 2 == 0 { 10.0 } else { -10.0 };
            Charge::at_rest(i.to_string(), x, q, 10.0)
        })
        .collect()
}

/// Time one full redraw worth of sampling: vector grid plus all field lines
pub fn bench_fields() {
    let ns = [2, 8, 32, 128];
    let bounds = Bounds::new(WIDTH, HEIGHT);
    let params = TraceParams::default();

    for n in ns {
        let charges = make_charges(n);
        let sampler = ElectricField { charges: &charges };

        // Warm up
        let _ = electric_field_at(NVec2::new(1.0, 1.0), &charges);

        let t0 = Instant::now();
        let grid = sample_grid(&sampler, bounds, GRID_SPACING);
        let dt_grid = t0.elapsed().as_secs_f64() * 1000.0;

        let seeds = electric_seeds(&charges, 16);
        let t1 = Instant::now();
        let mut points = 0;
        for s in &seeds {
            points += trace_line(s.point, s.direction, &sampler, &charges, &params, bounds).len();
        }
        let dt_lines = t1.elapsed().as_secs_f64() * 1000.0;

        println!(
            "N = {n:4}, grid = {dt_grid:8.3} ms ({} samples), lines = {dt_lines:8.3} ms ({} lines, {points} points)",
            grid.len(),
            seeds.len()
        );
    }
}

/// Time dynamics steps for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_dynamics() {
    println!("N,step_ms");

    for n in (50..=800).step_by(50) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 200 { 20 } else { 3 };
        let mut charges = make_charges(n);

        let t0 = Instant::now();
        for _ in 0..steps {
            charges = step_dynamics(&charges, WIDTH, HEIGHT);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
