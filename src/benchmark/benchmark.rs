use std::time::Instant;
use crate::simulation::states::{Particle, System, NVec2};
use crate::simulation::params::Parameters;
use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;

/// Helper to build a deterministic System of size `n`
/// Positions trace sine curves inside the world, no rand needed
fn make_system(n: usize, params: &Parameters) -> System {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new(
            (0.5 + 0.45 * (i_f * 0.37).sin()) * params.world_width,
            (0.5 + 0.45 * (i_f * 0.13).cos()) * params.world_height,
        );
        // Masses cycle over the configured [10, 50] range
        let m = 10.0 + (i % 5) as f64 * 10.0;

        particles.push(Particle {
            x,
            v: NVec2::zeros(),
            m,
            radius: Particle::radius_for_mass(m),
        });
    }

    System { particles, step_count: 0 }
}

/// Default physics parameters for the benchmarks
fn make_params() -> Parameters {
    Parameters {
        dt: 0.1,
        g: 0.1,
        min_distance: 5.0,
        restitution: 0.8,
        world_width: 800.0,
        world_height: 600.0,
        step_limit: 1000,
        seed: 42,
    }
}

/// Time a single direct force pass for a range of population sizes
pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [50, 100, 200, 400, 800, 1600, 3200];

    for n in ns {
        let params = make_params();
        let sys = make_system(n, &params);

        let mut out = vec![NVec2::zeros(); n];

        let gravity = NewtonianGravity {
            g: params.g,
            min_distance: params.min_distance,
        };

        // Warm up
        gravity.acceleration(&sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(&sys, &mut out);
        let dt_force = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, force pass = {:8.6} s", dt_force);
    }
}

/// Benchmark full ticks (force pass + integrator) across a size curve
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    // Steps of 50 to give a smooth curve
    for n in (50..=3200).step_by(50) {
        // Small n: average over a few steps to smooth noise
        // Large n: fewer steps to keep the runtime bounded
        let steps = if n <= 800 { 5 } else { 1 };

        let params = make_params();
        let mut sys = make_system(n, &params);

        let forces = AccelSet::new().with(NewtonianGravity {
            g: params.g,
            min_distance: params.min_distance,
        });

        let mut accels = vec![NVec2::zeros(); n];

        // Warm-up one tick
        forces.accumulate_accels(&sys, &mut accels);
        euler_integrator(&mut sys, &accels, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            forces.accumulate_accels(&sys, &mut accels);
            euler_integrator(&mut sys, &accels, &params);
        }
        let ms_step = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms_step);
    }
}
