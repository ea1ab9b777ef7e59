//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and the step budget,
//! - world bounds the particles bounce inside,
//! - distance floor, restitution and gravitational constant (`min_distance`, `g`),
//! - the random seed the initial conditions were drawn from

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub g: f64, // gravitational constant
    pub min_distance: f64, // pairwise separation floor
    pub restitution: f64, // velocity fraction kept after a wall bounce
    pub world_width: f64, // world bounds
    pub world_height: f64,
    pub step_limit: u32, // step budget
    pub seed: u64, // seed the particle population was drawn from
}
