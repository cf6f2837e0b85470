//! Arm rotation and tip kinematics.
//!
//! The arm turns about the pivot in the world XY plane. Spin speed is an
//! angle per update call, not per second, so the arm only turns at a
//! reproducible rate when updates arrive at a fixed cadence.
//!
//! ```text
//!            tip = pivot + r·(cos θ', sin θ', 0)
//!           ●
//!          /
//!         /  r
//!        /
//!   pivot ●      θ' = -angle + mount offset
//! ```

use crate::config::LauncherConfig;
use crate::types::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmRotator {
    arm_radius: f64,
    mount_angle_offset: f64,
}

impl ArmRotator {
    pub fn new(arm_radius: f64, mount_angle_offset: f64) -> Self {
        Self {
            arm_radius,
            mount_angle_offset,
        }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(config.arm_radius, config.mount_angle_offset)
    }

    pub fn arm_radius(&self) -> f64 {
        self.arm_radius
    }

    /// Angle after one update. The arm turns clockwise, so the angle only
    /// ever decreases.
    pub fn advance(angle: f64, spin_enabled: bool, speed: f64) -> f64 {
        if spin_enabled {
            angle - speed
        } else {
            angle
        }
    }

    /// World position of the arm tip for the given pivot and angle.
    pub fn tip_world_position(&self, pivot: Vec3, angle: f64) -> Vec3 {
        let (sin, cos) = (-angle + self.mount_angle_offset).sin_cos();
        pivot + Vec3::new(cos, sin, 0.0) * self.arm_radius
    }
}

impl Default for ArmRotator {
    fn default() -> Self {
        Self::from_config(&LauncherConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mount::MountTransform;
    use crate::types::constants;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_advance_only_while_spinning() {
        assert_eq!(ArmRotator::advance(1.0, false, 0.1), 1.0);
        assert_abs_diff_eq!(ArmRotator::advance(1.0, true, 0.1), 0.9, epsilon = 1e-15);
    }

    #[test]
    fn test_angle_is_unbounded() {
        let mut angle = 0.0;
        for _ in 0..1000 {
            angle = ArmRotator::advance(angle, true, 0.1);
        }
        assert_abs_diff_eq!(angle, -100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_resting_tip_matches_initial_position() {
        let pivot = MountTransform::default().pivot_world_position();
        let tip = ArmRotator::default().tip_world_position(pivot, 0.0);
        assert_abs_diff_eq!(tip, constants::INITIAL_PROJECTILE_POSITION, epsilon = 0.01);
    }

    #[test]
    fn test_tip_quarter_turn() {
        let arm = ArmRotator::new(2.0, 0.0);
        // A negative angle of a quarter turn points the arm straight up.
        let tip = arm.tip_world_position(Vec3::new(1.0, 1.0, 1.0), -FRAC_PI_2);
        assert_abs_diff_eq!(tip, Vec3::new(1.0, 3.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_tip_stays_at_arm_radius() {
        let arm = ArmRotator::default();
        let pivot = Vec3::new(0.0, 10.0, 2.4);
        for i in 0..32 {
            let tip = arm.tip_world_position(pivot, i as f64 * -0.37);
            assert_abs_diff_eq!((tip - pivot).magnitude(), arm.arm_radius(), epsilon = 1e-12);
            assert_eq!(tip.z, pivot.z);
        }
    }
}
