//! Ground plane crossing detection.
//!
//! The projectile is treated as a point. Contact is discrete: it is reported
//! on the first frame whose integrated position is at or below the plane,
//! without backing up to the exact crossing time.

use crate::types::{Projectile, Vec3};

/// Horizontal ground plane at a fixed height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub height: f64,
}

impl GroundPlane {
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// Whether a point is on or below the plane.
    pub fn is_reached(&self, pos: &Vec3) -> bool {
        pos.y <= self.height
    }

    /// Contact point for a flying projectile that has reached the plane.
    ///
    /// Pinned projectiles never touch the ground, however low the arm tip.
    pub fn detect(&self, projectile: &Projectile) -> Option<Vec3> {
        if projectile.is_flying() && self.is_reached(&projectile.pos) {
            Some(projectile.pos)
        } else {
            None
        }
    }
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self::new(crate::types::constants::GROUND_HEIGHT)
    }
}
