use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::engine::SimulationMode;
use crate::simulation::forces::{net_forces, ForceSet};
use crate::simulation::grid::{probe, sample_grid, GRID_SPACING};
use crate::simulation::scenario::Scenario;
use crate::simulation::scene::Scene;
use crate::simulation::seeding::trace_field_lines;
use crate::simulation::states::{NVec2, PointSource};
use crate::simulation::tracer::Direction;

/// Id of the source currently held by the mouse
#[derive(Resource, Default)]
struct DragState {
    id: Option<String>,
}

const BACKGROUND: Color = Color::srgb(0.059, 0.090, 0.165);
const GRID_LINE: Color = Color::srgb(0.118, 0.161, 0.231);
const POSITIVE: Color = Color::srgb(0.231, 0.510, 0.965);
const NEGATIVE: Color = Color::srgb(0.937, 0.267, 0.267);
const FORCE: Color = Color::srgb(0.984, 0.749, 0.141);
const POSITIVE_LINE: Color = Color::srgba(0.231, 0.510, 0.965, 0.4);
const NEGATIVE_LINE: Color = Color::srgba(0.937, 0.267, 0.267, 0.4);
const WIRE_LINE: Color = Color::srgba(0.388, 0.400, 0.945, 0.4);
const ATTRACT_LINK: Color = Color::srgba(0.231, 0.510, 0.965, 0.1);
const REPEL_LINK: Color = Color::srgba(0.937, 0.267, 0.267, 0.1);

const SOURCE_RADIUS: f32 = 14.0;
const VALUE_STEP: f64 = 5.0;

pub fn run_2d(scenario: Scenario) {
    info!(
        "run_2d: starting Bevy 2D viewer in {} mode with {} charges, {} wires",
        scenario.scene.mode.label(),
        scenario.scene.charges.len(),
        scenario.scene.wires.len()
    );

    let resolution = (scenario.engine.width as f32, scenario.engine.height as f32);

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(BACKGROUND))
        .init_resource::<DragState>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "fieldsim".into(),
                resolution: resolution.into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_camera_system)
        .add_systems(
            Update,
            (resize_system, keyboard_system, mouse_system, physics_step_system, draw_system).chain(),
        )
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    // 2D camera, origin at the window centre, y up
    commands.spawn(Camera2dBundle::default());
}

/// Cursor in scene coordinates (top-left origin, y down), same as the window's
fn cursor_in_scene(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<NVec2> {
    windows
        .get_single()
        .ok()
        .and_then(|w| w.cursor_position())
        .map(|c| NVec2::new(c.x as f64, c.y as f64))
}

fn to_world(scene: &Scene, p: NVec2) -> Vec2 {
    Vec2::new((p.x - scene.width / 2.0) as f32, (scene.height / 2.0 - p.y) as f32)
}

fn resize_system(windows: Query<&Window, With<PrimaryWindow>>, mut scenario: ResMut<Scenario>) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let (w, h) = (window.width() as f64, window.height() as f64);
    if w != scenario.scene.width || h != scenario.scene.height {
        scenario.scene.resize(w, h);
    }
}

fn keyboard_system(
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scenario: ResMut<Scenario>,
) {
    let cursor = cursor_in_scene(&windows);
    let scene = &mut scenario.scene;

    if keys.just_pressed(KeyCode::Digit1) {
        scene.set_mode(SimulationMode::Electric);
    }
    if keys.just_pressed(KeyCode::Digit2) {
        scene.set_mode(SimulationMode::Magnetic);
    }
    if keys.just_pressed(KeyCode::Digit3) {
        scene.set_mode(SimulationMode::Dynamic);
    }
    if keys.just_pressed(KeyCode::Space) {
        scene.toggle_pause();
    }
    if keys.just_pressed(KeyCode::KeyA) {
        let at = cursor.unwrap_or(NVec2::new(scene.width / 2.0, scene.height / 2.0));
        let id = scene.add_source(at);
        info!("added source {id}");
    }
    if keys.just_pressed(KeyCode::KeyC) {
        scene.clear();
    }
    if keys.just_pressed(KeyCode::KeyR) {
        scene.reset();
    }
    if keys.just_pressed(KeyCode::KeyG) {
        scene.settings.show_grid = !scene.settings.show_grid;
    }
    if keys.just_pressed(KeyCode::KeyV) {
        scene.settings.show_vectors = !scene.settings.show_vectors;
    }
    if keys.just_pressed(KeyCode::KeyP) {
        scene.settings.show_mouse_vector = !scene.settings.show_mouse_vector;
    }
    if keys.just_pressed(KeyCode::KeyI) {
        scene.settings.intensity_coloring = !scene.settings.intensity_coloring;
    }
    if keys.just_pressed(KeyCode::Equal) || keys.just_pressed(KeyCode::NumpadAdd) {
        scene.settings.field_line_density = (scene.settings.field_line_density + 4).min(64);
    }
    if keys.just_pressed(KeyCode::Minus) || keys.just_pressed(KeyCode::NumpadSubtract) {
        scene.settings.field_line_density = scene.settings.field_line_density.saturating_sub(4);
    }

    // Edits on the source under the cursor
    let Some(hovered) = cursor.and_then(|p| scene.pick(p)) else {
        return;
    };
    if keys.just_pressed(KeyCode::Delete) || keys.just_pressed(KeyCode::Backspace) {
        scene.remove(&hovered);
        return;
    }
    let delta = if keys.just_pressed(KeyCode::ArrowUp) {
        VALUE_STEP
    } else if keys.just_pressed(KeyCode::ArrowDown) {
        -VALUE_STEP
    } else {
        return;
    };
    let current = scene
        .sources()
        .iter()
        .find(|s| s.id() == hovered)
        .map(|s| s.strength())
        .unwrap_or(0.0);
    scene.update_value(&hovered, current + delta);
}

fn mouse_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut drag: ResMut<DragState>,
    mut scenario: ResMut<Scenario>,
) {
    let cursor = cursor_in_scene(&windows);

    if buttons.just_pressed(MouseButton::Left) {
        drag.id = cursor.and_then(|p| scenario.scene.pick(p));
    }
    if buttons.just_released(MouseButton::Left) || cursor.is_none() {
        drag.id = None;
    }

    if let (Some(id), Some(p)) = (drag.id.clone(), cursor) {
        // mode switched under the drag
        if !scenario.scene.update_position(&id, p) {
            drag.id = None;
        }
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    scenario.advance(time.delta());
}

/// Grid-arrow colour, hue shifting from blue towards red with field strength
fn vector_color(magnitude: f64, intensity_coloring: bool) -> Color {
    if intensity_coloring {
        let hue = (200.0 + (magnitude * 0.5).min(160.0)) % 360.0;
        Color::hsla(hue as f32, 0.8, 0.6, 0.3)
    } else {
        Color::hsla(200.0, 0.8, 0.6, 0.3)
    }
}

fn draw_system(
    mut gizmos: Gizmos,
    scenario: Res<Scenario>,
    drag: Res<DragState>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let scene = &scenario.scene;
    let sampler = |p: NVec2| scene.field_at(p);

    if scene.settings.show_grid {
        let step = 40.0;
        let mut x = 0.0;
        while x < scene.width {
            gizmos.line_2d(to_world(scene, NVec2::new(x, 0.0)), to_world(scene, NVec2::new(x, scene.height)), GRID_LINE);
            x += step;
        }
        let mut y = 0.0;
        while y < scene.height {
            gizmos.line_2d(to_world(scene, NVec2::new(0.0, y)), to_world(scene, NVec2::new(scene.width, y)), GRID_LINE);
            y += step;
        }
    }

    match scene.mode {
        SimulationMode::Electric | SimulationMode::Magnetic => {
            if scene.settings.show_vectors {
                for s in sample_grid(&sampler, scene.bounds(), GRID_SPACING) {
                    let len = (s.magnitude * 0.1).min(15.0);
                    gizmos.line_2d(
                        to_world(scene, s.point),
                        to_world(scene, s.point + s.direction * len),
                        vector_color(s.magnitude, scene.settings.intensity_coloring),
                    );
                }
            }

            for line in trace_field_lines(scene) {
                let color = match (scene.mode, line.polarity) {
                    (SimulationMode::Magnetic, _) => WIRE_LINE,
                    (_, Direction::Forward) => POSITIVE_LINE,
                    (_, Direction::Backward) => NEGATIVE_LINE,
                };
                gizmos.linestrip_2d(line.points.iter().map(|p| to_world(scene, *p)), color);
            }

            if scene.settings.show_mouse_vector {
                if let Some(s) = cursor_in_scene(&windows).and_then(|p| probe(&sampler, p)) {
                    let len = (s.magnitude * 1.5).min(80.0);
                    gizmos.arrow_2d(to_world(scene, s.point), to_world(scene, s.point + s.direction * len), FORCE);
                }
            }
        }
        SimulationMode::Dynamic => {
            let forces = net_forces(&scene.charges, &ForceSet::coulomb());
            for (i, (c1, &f)) in scene.charges.iter().zip(forces.iter()).enumerate() {
                // faint link to every other charge, red for repulsion, blue for attraction
                for c2 in scene.charges.iter().skip(i + 1) {
                    let color = if c1.q * c2.q > 0.0 { REPEL_LINK } else { ATTRACT_LINK };
                    gizmos.line_2d(to_world(scene, c1.x), to_world(scene, c2.x), color);
                }

                let f_mag = f.norm();
                if f_mag > 0.5 {
                    let len = (f_mag * 0.8).min(60.0);
                    gizmos.arrow_2d(to_world(scene, c1.x), to_world(scene, c1.x + f / f_mag * len), FORCE);
                }
            }
        }
    }

    for s in scene.sources() {
        let center = to_world(scene, s.position());
        let color = if s.is_positive() { POSITIVE } else { NEGATIVE };
        gizmos.circle_2d(center, SOURCE_RADIUS, color);
        if drag.id.as_deref() == Some(s.id()) {
            gizmos.circle_2d(center, SOURCE_RADIUS + 4.0, Color::WHITE);
        }

        // sign marker
        let arm = SOURCE_RADIUS * 0.5;
        gizmos.line_2d(center - Vec2::X * arm, center + Vec2::X * arm, Color::WHITE);
        if s.is_positive() {
            gizmos.line_2d(center - Vec2::Y * arm, center + Vec2::Y * arm, Color::WHITE);
        }
    }
}
