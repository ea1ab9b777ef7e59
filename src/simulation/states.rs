//! Core state types for the gravity particle simulation
//!
//! Defines the flat particle arena advanced by the engine:
//! - `Particle` position/velocity/mass/radius using `NVec2`
//! - `System` the particle collection plus the completed-step counter

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, fixed after creation
    pub radius: f64, // geometric extent, fixed after creation
}

impl Particle {
    /// Radius derived from mass at creation time: max(2, m / 5)
    pub fn radius_for_mass(m: f64) -> f64 {
        (m / 5.0).max(2.0)
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub particles: Vec<Particle>, // flat arena, fixed length for the run
    pub step_count: u32, // completed steps
}
