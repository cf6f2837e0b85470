//! Core types for the launcher simulation.
//!
//! Units follow the scene the simulation was tuned against:
//! - Position: scene units (the arm is 2.7 units long)
//! - Velocity: scene units per second
//! - Angles: radians
//!
//! Coordinate system:
//! - X: horizontal, in the plane of the arm's rotation
//! - Y: vertical (positive upward, ground plane at y = 0)
//! - Z: horizontal, along the arm's pivot axis

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

// =============================================================================
// Vec3 - 3D Vector
// =============================================================================

/// A 3D vector used for positions, velocities and gravity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude (length) of the vector
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Rotate about the X axis by `angle` radians (right-hand rule).
    pub fn rotated_x(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }

    /// Rotate about the Y axis by `angle` radians (right-hand rule).
    pub fn rotated_y(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// Rotate about the Z axis by `angle` radians (right-hand rule).
    pub fn rotated_z(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
            z: self.z,
        }
    }

    /// Apply an intrinsic XYZ Euler rotation, `euler` holding the X, Y and Z
    /// angles. Equivalent to the matrix product `Rx * Ry * Rz`, so Z is
    /// applied first.
    pub fn rotated_euler_xyz(&self, euler: &Vec3) -> Self {
        self.rotated_z(euler.z)
            .rotated_y(euler.y)
            .rotated_x(euler.x)
    }
}

// Operator overloads for Vec3
impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon)
            && f64::abs_diff_eq(&self.y, &other.y, epsilon)
            && f64::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

// =============================================================================
// Projectile
// =============================================================================

/// Whether the projectile rides the arm or moves on its own.
///
/// Ground contact is not a state of its own: it produces a [`Landing`] record
/// and puts the projectile straight back into `Pinned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileState {
    /// Slaved to the arm tip, zero velocity.
    Pinned,
    /// Moving under gravity.
    Flying,
}

impl ProjectileState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectileState::Pinned => "pinned",
            ProjectileState::Flying => "flying",
        }
    }
}

/// Complete state of the projectile at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec3,
    pub vel: Vec3,
    pub state: ProjectileState,
}

impl Projectile {
    /// Projectile pinned at `pos` with zero velocity.
    pub fn pinned_at(pos: Vec3) -> Self {
        Self {
            pos,
            vel: Vec3::ZERO,
            state: ProjectileState::Pinned,
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.state == ProjectileState::Pinned
    }

    pub fn is_flying(&self) -> bool {
        self.state == ProjectileState::Flying
    }

    /// Put the projectile back on the arm tip, discarding any velocity.
    pub fn pin_to(&mut self, tip: Vec3) {
        self.pos = tip;
        self.vel = Vec3::ZERO;
        self.state = ProjectileState::Pinned;
    }

    /// Release the projectile with the given velocity.
    pub fn release(&mut self, vel: Vec3) {
        self.vel = vel;
        self.state = ProjectileState::Flying;
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self::pinned_at(constants::INITIAL_PROJECTILE_POSITION)
    }
}

// =============================================================================
// Landing / Snapshot
// =============================================================================

/// Record of the projectile reaching the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landing {
    /// Horizontal landing distance (the X coordinate at contact).
    pub distance: f64,
    /// Where the projectile was when contact was detected.
    pub point: Vec3,
    /// Frame on which contact was detected.
    pub frame: u64,
}

/// Read-only view of the simulation handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub arm_angle: f64,
    pub arm_tip: Vec3,
    pub projectile_position: Vec3,
    pub projectile_velocity: Vec3,
    pub projectile_state: ProjectileState,
    pub spin_enabled: bool,
    pub speed: f64,
    pub last_landing_distance: Option<f64>,
    pub landings: u64,
}

// =============================================================================
// Constants
// =============================================================================

/// Constants the launcher was tuned with.
///
/// The mount offset and launch scale are empirical, matched by eye against
/// the rendered arm. They are not derived from the geometry.
pub mod constants {
    use super::Vec3;
    use std::f64::consts::FRAC_PI_2;

    /// Gravitational acceleration (scene units/s²)
    pub const GRAVITY: f64 = 9.8;

    /// Distance from the pivot to the arm tip.
    pub const ARM_RADIUS: f64 = 2.7;

    /// Static angular offset of the arm in its mount (rad).
    pub const MOUNT_ANGLE_OFFSET: f64 = 0.04;

    /// Release speed per unit of angular speed setting.
    pub const LAUNCH_SPEED_SCALE: f64 = 50.0;

    /// Fixed integration step (s), one frame at roughly 60 Hz.
    pub const FIXED_TIME_STEP: f64 = 0.016;

    /// Default angular speed setting (rad per update).
    pub const DEFAULT_SPEED: f64 = 0.10;

    /// Increment used by speed up / speed down.
    pub const SPEED_STEP: f64 = 0.02;

    /// Height of the ground plane.
    pub const GROUND_HEIGHT: f64 = 0.0;

    /// Resting tip location of the arm at angle zero.
    pub const INITIAL_PROJECTILE_POSITION: Vec3 = Vec3::new(2.7, 10.1, 2.4);

    /// Post base position in world space.
    pub const MOUNT_BASE_POSITION: Vec3 = Vec3::new(0.0, 10.0, 0.2);

    /// Post base orientation as XYZ Euler angles.
    pub const MOUNT_BASE_ROTATION: Vec3 = Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0);

    /// Pivot location relative to the post base.
    pub const PIVOT_OFFSET: Vec3 = Vec3::new(0.0, 2.2, 0.0);
}

// =============================================================================
// Tests
// =============================================================================
