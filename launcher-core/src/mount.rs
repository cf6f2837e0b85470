//! World-space placement of the arm pivot.
//!
//! The arm hangs off a post whose base sits at a fixed position and
//! orientation. The pivot is a fixed offset in the base's local frame, so its
//! world position is a constant of the mount and is computed once here rather
//! than read back from a renderer.

use crate::config::MountConfig;
use crate::types::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountTransform {
    base_position: Vec3,
    base_rotation: Vec3,
    pivot_offset: Vec3,
}

impl MountTransform {
    pub fn new(config: &MountConfig) -> Self {
        Self {
            base_position: config.base_position,
            base_rotation: config.base_rotation,
            pivot_offset: config.pivot_offset,
        }
    }

    /// Transform a point from the base's local frame to world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.base_position + local.rotated_euler_xyz(&self.base_rotation)
    }

    /// World position of the arm pivot.
    pub fn pivot_world_position(&self) -> Vec3 {
        self.to_world(self.pivot_offset)
    }
}

impl Default for MountTransform {
    fn default() -> Self {
        Self::new(&MountConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_pivot_sits_in_front_of_post() {
        // The base is tipped so the post's local Y axis points along world Z.
        let pivot = MountTransform::default().pivot_world_position();
        assert_abs_diff_eq!(pivot, Vec3::new(0.0, 10.0, 2.4), epsilon = 1e-12);
    }

    #[test]
    fn test_identity_rotation_is_plain_offset() {
        let mount = MountTransform::new(&MountConfig {
            base_position: Vec3::new(1.0, 2.0, 3.0),
            base_rotation: Vec3::ZERO,
            pivot_offset: Vec3::new(0.5, 0.5, 0.5),
        });
        assert_eq!(mount.pivot_world_position(), Vec3::new(1.5, 2.5, 3.5));
    }
}
