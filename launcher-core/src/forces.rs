//! Forces acting on the projectile in flight.
//!
//! Only uniform gravity is modeled. There is no drag: the projectile follows
//! a plain parabola between release and ground contact.

use crate::config::LauncherConfig;
use crate::integrator::ForceModel;
use crate::types::{constants, Vec3};

/// Constant gravitational acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGravity {
    pub gravity: Vec3,
}

impl UniformGravity {
    pub fn new(gravity: Vec3) -> Self {
        Self { gravity }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(config.gravity)
    }
}

impl Default for UniformGravity {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, -constants::GRAVITY, 0.0))
    }
}

impl ForceModel for UniformGravity {
    fn acceleration(&self, _pos: &Vec3, _vel: &Vec3) -> Vec3 {
        self.gravity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_ignores_state() {
        let gravity = UniformGravity::default();
        let a = gravity.acceleration(&Vec3::ZERO, &Vec3::ZERO);
        let b = gravity.acceleration(&Vec3::new(5.0, 100.0, -3.0), &Vec3::new(10.0, -4.0, 0.0));
        assert_eq!(a, Vec3::new(0.0, -9.8, 0.0));
        assert_eq!(a, b);
    }
}
