pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Particle, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::scenario::{Scenario, RunStats};

pub use configuration::config::{EngineConfig, ParametersConfig, WorldConfig, ScenarioConfig};

pub use visualization::gravsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_gravity, bench_step_curve};
