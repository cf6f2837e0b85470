//! # Launcher Core
//!
//! Frame-paced kinematics for a pivoting launcher arm and the projectile it
//! throws.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec3, projectile state, snapshot, constants)
//! - `mount`: Fixed transform from the world to the arm pivot
//! - `arm`: Arm rotation and tip position
//! - `launch`: Release velocity at the moment of a throw
//! - `forces`: Gravity acting on the projectile in flight
//! - `integrator`: Numerical integration (semi-implicit Euler)
//! - `collision`: Ground contact detection and re-anchoring
//! - `config`: Launcher tunables and YAML preset loader
//! - `simulation`: Main orchestrator

pub mod arm;
pub mod collision;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod launch;
pub mod mount;
pub mod simulation;
pub mod types;

pub use error::SimulationError;
pub use simulation::{LauncherPhase, LauncherSimulation};
