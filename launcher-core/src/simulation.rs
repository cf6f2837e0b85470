//! The launcher simulation: one owned value advanced one frame at a time.
//!
//! ```text
//!            toggle_spin            throw
//!   Idle  <-------------> Spinning -------> Flying
//!    ^                       ^                |
//!    |                       |  ground contact|
//!    +-----------------------+----------------+
//!          (by current spin flag)
//! ```
//!
//! Commands take `&mut self`, so they land between frames and never inside
//! an update. Within a frame the arm angle is advanced before the projectile
//! is integrated and checked against the ground, so a landing re-pins the
//! projectile to the tip at the angle of that same frame.

use serde::{Deserialize, Serialize};

use crate::arm::ArmRotator;
use crate::collision::{GroundContactHandler, GroundPlane};
use crate::config::LauncherConfig;
use crate::error::{Result, SimulationError};
use crate::forces::UniformGravity;
use crate::integrator::ProjectileIntegrator;
use crate::launch::LaunchVelocityResolver;
use crate::mount::MountTransform;
use crate::types::{Landing, Projectile, ProjectileState, Snapshot, Vec3};

/// Coarse state of the launcher as seen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LauncherPhase {
    /// Spin off, projectile pinned.
    Idle,
    /// Spin on, projectile pinned and following the tip.
    Spinning,
    /// Projectile in flight. The arm spins or not independently.
    Flying,
}

#[derive(Debug, Clone)]
pub struct LauncherSimulation {
    config: LauncherConfig,
    arm: ArmRotator,
    resolver: LaunchVelocityResolver,
    forces: UniformGravity,
    contact: GroundContactHandler,
    pivot: Vec3,

    angle: f64,
    spin_enabled: bool,
    speed: f64,
    projectile: Projectile,
    frame: u64,
    last_landing: Option<Landing>,
    landings: u64,
}

impl Default for LauncherSimulation {
    fn default() -> Self {
        Self::from_valid_config(LauncherConfig::default())
    }
}

impl LauncherSimulation {
    /// Simulation with the tuned default launcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulation for a custom launcher. The configuration is validated first.
    pub fn with_config(config: LauncherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: LauncherConfig) -> Self {
        let pivot = MountTransform::new(&config.mount).pivot_world_position();
        Self {
            arm: ArmRotator::from_config(&config),
            resolver: LaunchVelocityResolver::from_config(&config),
            forces: UniformGravity::from_config(&config),
            contact: GroundContactHandler::new(GroundPlane::new(config.ground_height)),
            pivot,
            angle: 0.0,
            spin_enabled: false,
            speed: config.default_speed,
            projectile: Projectile::pinned_at(config.initial_projectile_position),
            frame: 0,
            last_landing: None,
            landings: 0,
            config,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn last_landing(&self) -> Option<&Landing> {
        self.last_landing.as_ref()
    }

    /// World position of the arm pivot.
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// World position of the arm tip at the current angle.
    pub fn arm_tip(&self) -> Vec3 {
        self.arm.tip_world_position(self.pivot, self.angle)
    }

    pub fn phase(&self) -> LauncherPhase {
        match (self.projectile.state, self.spin_enabled) {
            (ProjectileState::Flying, _) => LauncherPhase::Flying,
            (ProjectileState::Pinned, true) => LauncherPhase::Spinning,
            (ProjectileState::Pinned, false) => LauncherPhase::Idle,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            arm_angle: self.angle,
            arm_tip: self.arm_tip(),
            projectile_position: self.projectile.pos,
            projectile_velocity: self.projectile.vel,
            projectile_state: self.projectile.state,
            spin_enabled: self.spin_enabled,
            speed: self.speed,
            last_landing_distance: self.last_landing.map(|landing| landing.distance),
            landings: self.landings,
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Flip the spin flag.
    ///
    /// Spin is never enabled while the speed is zero: toggling a stopped arm
    /// at zero speed leaves it stopped and the launcher stays `Idle`.
    pub fn toggle_spin(&mut self) -> Snapshot {
        let enable = !self.spin_enabled;
        self.set_spin(enable)
    }

    /// Turn spin on or off. Spin cannot be turned on while the speed is zero.
    pub fn set_spin(&mut self, enabled: bool) -> Snapshot {
        if enabled && self.speed == 0.0 {
            log::warn!("Ignoring spin request while speed is zero");
        } else {
            self.spin_enabled = enabled;
        }
        self.snapshot()
    }

    /// Set the angular speed (rad per update).
    ///
    /// Negative values are clamped to zero. A zero speed also turns spin off.
    /// Speeds that are not finite, or fast enough that a throw could carry the
    /// projectile out of the finite range, are rejected and leave the state
    /// unchanged.
    pub fn set_speed(&mut self, speed: f64) -> Result<Snapshot> {
        if !self.is_usable_speed(speed) {
            log::warn!("Rejecting speed {}", speed);
            return Err(SimulationError::InvalidSpeed(speed));
        }
        self.apply_speed(speed);
        Ok(self.snapshot())
    }

    /// Raise the speed by the configured step. The speed is kept if the
    /// raised one would be rejected by `set_speed`.
    pub fn speed_up(&mut self) -> Snapshot {
        let speed = self.speed + self.config.speed_step;
        if self.is_usable_speed(speed) {
            self.apply_speed(speed);
        } else {
            log::warn!("Speed {} is at its limit", self.speed);
        }
        self.snapshot()
    }

    /// Lower the speed by the configured step, stopping at zero.
    pub fn speed_down(&mut self) -> Snapshot {
        self.apply_speed(self.speed - self.config.speed_step);
        self.snapshot()
    }

    fn is_usable_speed(&self, speed: f64) -> bool {
        speed.is_finite()
            && self
                .resolver
                .reach_bound(speed, &self.forces.gravity)
                .is_finite()
    }

    fn apply_speed(&mut self, speed: f64) {
        if speed < 0.0 {
            log::warn!("Clamping negative speed {} to zero", speed);
        }
        self.speed = speed.max(0.0);
        if self.speed == 0.0 && self.spin_enabled {
            log::debug!("Speed is zero, stopping spin");
            self.spin_enabled = false;
        }
        log::debug!("Speed set to {}", self.speed);
    }

    /// Release the projectile from the arm tip.
    ///
    /// Only a pinned projectile can be thrown; a throw during flight does
    /// nothing.
    pub fn throw(&mut self) -> Snapshot {
        if self.projectile.is_flying() {
            log::debug!("Throw ignored, projectile already in flight");
            return self.snapshot();
        }

        let vel = self
            .resolver
            .resolve(self.angle, self.speed, self.spin_enabled);
        self.projectile.release(vel);
        log::debug!(
            "Projectile thrown at angle {:.4} with velocity ({:.4}, {:.4}, {:.4})",
            self.angle,
            vel.x,
            vel.y,
            vel.z
        );
        self.snapshot()
    }

    /// Return to the initial state, keeping the configuration.
    pub fn reset(&mut self) -> Snapshot {
        *self = Self::from_valid_config(self.config.clone());
        log::debug!("Simulation reset");
        self.snapshot()
    }

    // =========================================================================
    // Frame update
    // =========================================================================

    /// Advance one frame with the configured fixed time step.
    pub fn update(&mut self) -> Snapshot {
        self.tick(self.config.time_step);
        self.snapshot()
    }

    /// Advance one frame with an explicit time step.
    ///
    /// The arm still turns by one speed increment regardless of `dt`; only
    /// flight integration uses it. A step so large that the integrated
    /// projectile would leave the finite range is rejected before anything
    /// is committed.
    pub fn advance(&mut self, dt: f64) -> Result<Snapshot> {
        if !(dt.is_finite() && dt > 0.0) {
            log::warn!("Rejecting time step {}", dt);
            return Err(SimulationError::InvalidTimeStep(dt));
        }
        if self.projectile.is_flying() {
            let (pos, vel) =
                ProjectileIntegrator::step(self.projectile.pos, self.projectile.vel, &self.forces, dt);
            if !(pos.is_finite() && vel.is_finite()) {
                log::warn!("Rejecting time step {}, projectile state would overflow", dt);
                return Err(SimulationError::InvalidTimeStep(dt));
            }
        }
        self.tick(dt);
        Ok(self.snapshot())
    }

    /// Advance `frames` frames with the configured fixed time step.
    pub fn step_n(&mut self, frames: usize) -> Snapshot {
        for _ in 0..frames {
            self.tick(self.config.time_step);
        }
        self.snapshot()
    }

    fn tick(&mut self, dt: f64) {
        self.frame += 1;
        self.angle = ArmRotator::advance(self.angle, self.spin_enabled, self.speed);
        let tip = self.arm_tip();

        match self.projectile.state {
            ProjectileState::Pinned => {
                if self.spin_enabled {
                    self.projectile.pin_to(tip);
                }
            }
            ProjectileState::Flying => {
                ProjectileIntegrator::step_projectile(&mut self.projectile, &self.forces, dt);
                if let Some(landing) =
                    self.contact
                        .check_and_resolve(&mut self.projectile, tip, self.frame)
                {
                    log::debug!(
                        "Projectile landed at x = {:.4} on frame {}",
                        landing.distance,
                        landing.frame
                    );
                    self.last_landing = Some(landing);
                    self.landings += 1;
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
