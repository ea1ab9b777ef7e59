//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – runtime behavior switches
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`WorldConfig`]      – world bounds and population size
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   auto_exit: false      # terminate the process once finished
//!
//! parameters:
//!   dt: 0.1               # fixed step size
//!   g: 0.1                # gravitational constant
//!   min_distance: 5.0     # pairwise separation floor
//!   restitution: 0.8      # velocity kept after a wall bounce
//!   step_limit: 1000      # step budget
//!   seed: 42              # reproducible initial conditions
//!
//! world:
//!   width: 800.0
//!   height: 600.0
//!   particles: 50
//! ```
//!
//! Every field is optional and falls back to the defaults shown above;
//! `seed` falls back to OS entropy so repeated unseeded runs differ.

use serde::Deserialize;

/// Runtime behavior switches
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub auto_exit: bool, // terminate the process once the run finishes
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64,           // time step size
    pub g: f64,            // gravitational constant
    pub min_distance: f64, // pairwise separation floor
    pub restitution: f64,  // velocity fraction kept after a wall bounce
    pub step_limit: u32,   // step budget
    pub seed: Option<u64>, // deterministic seed, OS entropy when absent
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: 0.1,
            g: 0.1,
            min_distance: 5.0,
            restitution: 0.8,
            step_limit: 1000,
            seed: None,
        }
    }
}

/// World bounds and population size
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,       // world width in world units
    pub height: f64,      // world height in world units
    pub particles: usize, // population size, fixed for the run
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            particles: 50,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // runtime behavior switches
    pub parameters: ParametersConfig, // numerical and physical parameters
    pub world: WorldConfig, // world bounds and population size
}
