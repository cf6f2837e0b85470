//! Numerical integration of projectile flight.
//!
//! The integrator is semi-implicit (symplectic) Euler: velocity is updated
//! first and the new velocity moves the position.
//!
//! ```text
//! 1. v_new = v + a(x, v)*dt
//! 2. x_new = x + v_new*dt
//! ```
//!
//! The step size is fixed by the caller. Trajectories are defined by this
//! discrete recurrence, not by the continuous parabola, so changing `dt`
//! changes where the projectile lands.

use crate::types::{Projectile, Vec3};

/// Trait for computing the acceleration on the projectile.
pub trait ForceModel {
    /// Linear acceleration at the given position and velocity.
    fn acceleration(&self, pos: &Vec3, vel: &Vec3) -> Vec3;
}

/// Semi-implicit Euler integrator for projectile flight.
pub struct ProjectileIntegrator;

impl ProjectileIntegrator {
    /// Advance position and velocity by one time step.
    ///
    /// # Returns
    /// `(position, velocity)` after the step.
    pub fn step<F: ForceModel>(pos: Vec3, vel: Vec3, forces: &F, dt: f64) -> (Vec3, Vec3) {
        let new_vel = vel + forces.acceleration(&pos, &vel) * dt;
        let new_pos = pos + new_vel * dt;
        (new_pos, new_vel)
    }

    /// Advance a flying projectile in place. A pinned projectile is left
    /// untouched.
    pub fn step_projectile<F: ForceModel>(projectile: &mut Projectile, forces: &F, dt: f64) {
        if !projectile.is_flying() {
            return;
        }
        let (pos, vel) = Self::step(projectile.pos, projectile.vel, forces, dt);
        projectile.pos = pos;
        projectile.vel = vel;
    }
}

// =============================================================================
// Tests
// =============================================================================
