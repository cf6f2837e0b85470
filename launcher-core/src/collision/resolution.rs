//! Ground contact response.
//!
//! A landing does not leave the projectile on the ground. The landing is
//! recorded, and the projectile is put back on the arm tip with zero
//! velocity, ready for the next throw. The tip is taken at the arm's
//! current angle, which keeps advancing during flight while spin is on.

use crate::collision::detection::GroundPlane;
use crate::types::{Landing, Projectile, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroundContactHandler {
    pub ground: GroundPlane,
}

impl GroundContactHandler {
    pub fn new(ground: GroundPlane) -> Self {
        Self { ground }
    }

    /// Check a flying projectile against the ground and re-pin it on contact.
    ///
    /// # Arguments
    /// * `projectile` - Projectile after this frame's integration step
    /// * `arm_tip` - Arm tip world position at the current angle
    /// * `frame` - Current frame number, stored in the landing record
    ///
    /// # Returns
    /// The landing record if contact occurred.
    pub fn check_and_resolve(
        &self,
        projectile: &mut Projectile,
        arm_tip: Vec3,
        frame: u64,
    ) -> Option<Landing> {
        let point = self.ground.detect(projectile)?;
        projectile.pin_to(arm_tip);
        Some(Landing {
            distance: point.x,
            point,
            frame,
        })
    }
}
