//! Force / acceleration contributors for the particle engine
//!
//! Defines the 2D acceleration trait and direct pairwise
//! Newtonian gravity with a hard distance floor

use crate::simulation::states::{System, NVec2};

/// Collection of 2D acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per particle
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all particles in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }
}

/// Trait for 2D acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each particle
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]);
}

/// 2D Newtonian gravity with a hard distance floor
/// Separations below `min_distance` are evaluated at `min_distance`
/// instead, which bounds the force magnitude near coincidence
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub min_distance: f64, // pairwise separation floor
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) {
        let n = sys.particles.len();
        if n == 0 { // No particles, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // pi: particle i (left side of the pair)
            let pi = &sys.particles[i];
            let xi = pi.x;      // position of particle i
            let mi = pi.m;      // mass of particle i

            for j in (i + 1)..n {
                // pj: particle j (right side of the pair)
                let pj = &sys.particles[j];

                // r is the displacement vector from i to j
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r
                let r = pj.x - xi;

                // Floored separation: below `min_distance` the floor is
                // substituted for the true distance, in the magnitude and
                // in the direction scaling alike. At exact coincidence r
                // is the zero vector and the pair contributes nothing
                let d = r.norm().max(self.min_distance);

                // Scalar force magnitude:
                // F = G * m_i * m_j / d^2
                let f = self.g * mi * pj.m / (d * d);

                // Force vector on i, decomposed through the floored
                // separation: (Fx, Fy) = F * (rx / d, ry / d)
                let fv = r * (f / d);

                // -------------------------
                // Apply Newton's law:
                // a_i +=  F_vec / m_i
                // a_j += -F_vec / m_j
                // (equal and opposite)
                // -------------------------
                out[i] += fv / mi;
                out[j] -= fv / pj.m;
            }
        }
    }
}
