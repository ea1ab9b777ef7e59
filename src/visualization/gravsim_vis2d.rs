use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct ParticleIndex(pub usize);

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} particles (seed {})",
        scenario.particles().len(),
        scenario.parameters.seed
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_particles_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system, completion_system))
        .run();
}

/// Map world coordinates (origin top-left, y down) onto the Bevy camera
/// (origin centered, y up)
fn world_to_screen(x: f64, y: f64, params: &Parameters) -> (f32, f32) {
    (
        (x - params.world_width * 0.5) as f32,
        (params.world_height * 0.5 - y) as f32,
    )
}

/// Heavier particles shift from blue toward orange
fn mass_color(m: f64) -> Color {
    let c = (m * 5.0).min(255.0) as u8;
    Color::rgb_u8(c, c / 2, 255 - c / 3)
}

fn setup_particles_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, p) in scenario.particles().iter().enumerate() {
        let (x, y) = world_to_screen(p.x.x, p.x.y, &scenario.parameters);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(p.radius as f32))),
                material: materials.add(ColorMaterial::from(mass_color(p.m))),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // One simulation step per rendered frame; a no-op once finished
    scenario.tick();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&ParticleIndex, &mut Transform)>) {
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = scenario.particles().get(*i) {
            let (x, y) = world_to_screen(p.x.x, p.x.y, &scenario.parameters);
            transform.translation.x = x;
            transform.translation.y = y;
        }
    }
}

/// Print the completion summary exactly once, then honor auto-exit
fn completion_system(scenario: Res<Scenario>, mut reported: Local<bool>, mut exit: EventWriter<AppExit>) {
    if !scenario.is_finished() {
        return;
    }

    if !*reported {
        *reported = true;
        if let Some(stats) = scenario.stats() {
            println!("Simulation completed!");
            println!("Steps: {}", stats.steps);
            println!("Execution time: {:.4} seconds", stats.elapsed.as_secs_f64());
            println!("Average time per step: {:.4} ms", stats.avg_step.as_secs_f64() * 1000.0);
        }
    }

    if scenario.engine.auto_exit {
        exit.send(AppExit);
    }
}
