//! Fixed-step time integration for the particle system
//!
//! Semi-implicit Euler: velocities are advanced from the accelerations
//! first, positions from the just-updated velocities, then wall
//! collisions are resolved per axis

use super::states::{System, NVec2};
use super::params::Parameters;

/// Advance the system by one step of size `params.dt`
///
/// `accels` must hold one entry per particle, populated for the current
/// configuration (see [`AccelSet::accumulate_accels`]). Particles are
/// advanced independently, there is no cross-particle coupling in this
/// pass. The pass ends by incrementing `sys.step_count`
///
/// [`AccelSet::accumulate_accels`]: super::forces::AccelSet::accumulate_accels
pub fn euler_integrator(sys: &mut System, accels: &[NVec2], params: &Parameters) {
    let dt = params.dt; // time step dt

    for (p, a) in sys.particles.iter_mut().zip(accels.iter()) {
        // Kick: v_n+1 = v_n + dt * a_n
        p.v += *a * dt;

        // Drift: x_n+1 = x_n + dt * v_n+1
        // (the just-updated velocity, not v_n)
        p.x += p.v * dt;

        // Wall bounce, evaluated per axis on the already-advanced
        // position: the axis velocity is flipped and damped even on the
        // step that caused the overshoot
        if p.x.x <= p.radius || p.x.x >= params.world_width - p.radius {
            p.v.x = -p.v.x * params.restitution;
        }
        if p.x.y <= p.radius || p.x.y >= params.world_height - p.radius {
            p.v.y = -p.v.y * params.restitution;
        }

        // Clamp so the particle's full extent stays inside the world.
        // A fast particle can overshoot by more than its own radius in
        // one step; the clamp masks that, it does not resolve it
        p.x.x = p.x.x.clamp(p.radius, params.world_width - p.radius);
        p.x.y = p.x.y.clamp(p.radius, params.world_height - p.radius);
    }

    // One more completed step
    sys.step_count += 1;
}
