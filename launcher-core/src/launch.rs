//! Release velocity at the instant of a throw.
//!
//! The projectile leaves along the tangent of the arm: the release direction
//! is the arm angle turned a quarter turn. Its magnitude is the angular speed
//! setting times an empirical scale, not `ω·r`.

use std::f64::consts::FRAC_PI_2;

use crate::config::LauncherConfig;
use crate::types::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchVelocityResolver {
    speed_scale: f64,
}

impl LaunchVelocityResolver {
    pub fn new(speed_scale: f64) -> Self {
        Self { speed_scale }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(config.launch_speed_scale)
    }

    /// Release speed magnitude. A stationary arm releases with no speed.
    pub fn launch_speed(&self, speed: f64, spin_enabled: bool) -> f64 {
        if spin_enabled {
            speed * self.speed_scale
        } else {
            0.0
        }
    }

    /// Bound on how far a throw at this speed setting moves the projectile
    /// under `gravity`: with release speed `v`, a flight back to launch height
    /// lasts at most `2v/|g|`, so no coordinate moves more than `2v²/|g|`.
    /// The bound doubles that. Infinite when the flight could leave the finite
    /// range. `gravity.y` must be negative.
    pub fn reach_bound(&self, speed: f64, gravity: &Vec3) -> f64 {
        let launch_speed = self.launch_speed(speed, true);
        4.0 * launch_speed * launch_speed / -gravity.y
    }

    /// Release velocity for the current arm angle and speed setting.
    pub fn resolve(&self, angle: f64, speed: f64, spin_enabled: bool) -> Vec3 {
        let launch_speed = self.launch_speed(speed, spin_enabled);
        let (sin, cos) = (-angle + FRAC_PI_2).sin_cos();
        Vec3::new(launch_speed * cos, launch_speed * sin, 0.0)
    }
}

impl Default for LaunchVelocityResolver {
    fn default() -> Self {
        Self::from_config(&LauncherConfig::default())
    }
}
