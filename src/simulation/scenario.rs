//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the randomized particle population)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and ticked by the
//! visualization layer once per frame. It is also the step driver: each
//! tick runs one force pass and one integrator pass, and a run that has
//! spent its step budget freezes (further ticks are no-ops)

use std::time::{Duration, Instant};

use bevy::prelude::Resource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{System, Particle, NVec2};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;

/// Timing summary of a finished run
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    pub steps: u32, // completed steps
    pub elapsed: Duration, // wall clock from construction to finish
    pub avg_step: Duration, // elapsed / steps
}

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system state, and
/// the set of active force laws (accelerations)
///
/// The scenario starts running and transitions to finished exactly once,
/// on the first tick that pushes `step_count` past the step limit. The
/// transition never reverts; a finished scenario keeps its state frozen
/// for display and reporting
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    finished: bool,
    started_at: Instant,
    finished_at: Option<Instant>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let p_cfg = cfg.parameters;
        let w_cfg = cfg.world;

        // Resolve the seed up front so every run is reproducible:
        // an absent seed is drawn from OS entropy and kept in Parameters
        let seed = p_cfg.seed.unwrap_or_else(rand::random::<u64>);

        // Parameters (runtime) from ParametersConfig + WorldConfig
        let parameters = Parameters {
            dt: p_cfg.dt,
            g: p_cfg.g,
            min_distance: p_cfg.min_distance,
            restitution: p_cfg.restitution,
            world_width: w_cfg.width,
            world_height: w_cfg.height,
            step_limit: p_cfg.step_limit,
            seed,
        };

        // Particles: uniform position over the world, velocity in
        // [-1, 1] per axis, mass in [10, 50), radius derived from mass
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let particles: Vec<Particle> = (0..w_cfg.particles)
            .map(|_| {
                let x = NVec2::new(
                    rng.random_range(0.0..parameters.world_width),
                    rng.random_range(0.0..parameters.world_height),
                );
                let v = NVec2::new(
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                );
                let m = rng.random_range(10.0..50.0);

                Particle {
                    x,
                    v,
                    m,
                    radius: Particle::radius_for_mass(m),
                }
            })
            .collect();

        // Initial system state: particles at step 0
        let system = System {
            particles,
            step_count: 0,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            auto_exit: cfg.engine.auto_exit,
        };

        // Forces: construct an AccelSet and register floored gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            min_distance: parameters.min_distance,
        });

        Self {
            engine,
            parameters,
            system,
            forces,
            finished: false,
            started_at: Instant::now(),
            finished_at: None,
        }
    }

    /// Advance the simulation by one step: one force pass, then one
    /// integrator pass. A no-op once the run is finished
    pub fn tick(&mut self) {
        if self.finished {
            return;
        }

        // Force pass: accelerations for the current configuration
        let mut accels = vec![NVec2::zeros(); self.system.particles.len()];
        self.forces.accumulate_accels(&self.system, &mut accels);

        // Integrator pass: kinematics, walls, step counter
        euler_integrator(&mut self.system, &accels, &self.parameters);

        // Checked right after the integrator bumps the counter; the
        // transition fires exactly once and never reverts
        if self.system.step_count > self.parameters.step_limit {
            self.finished = true;
            self.finished_at = Some(Instant::now());
        }
    }

    /// Current particle snapshot for rendering
    pub fn particles(&self) -> &[Particle] {
        &self.system.particles
    }

    /// Completed steps so far
    pub fn step_count(&self) -> u32 {
        self.system.step_count
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Wall clock spent so far, frozen at the completion timestamp once
    /// the run finishes
    pub fn elapsed(&self) -> Duration {
        match self.finished_at {
            Some(end) => end.duration_since(self.started_at),
            None => self.started_at.elapsed(),
        }
    }

    /// Timing summary, available once the run is finished
    pub fn stats(&self) -> Option<RunStats> {
        let end = self.finished_at?;
        let steps = self.system.step_count;
        let elapsed = end.duration_since(self.started_at);

        Some(RunStats {
            steps,
            elapsed,
            avg_step: elapsed / steps,
        })
    }
}
