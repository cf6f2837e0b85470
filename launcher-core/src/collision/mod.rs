//! Ground contact for the launcher projectile.
//!
//! This module handles:
//! - **Detection**: finding the frame on which the projectile reaches the
//!   ground plane
//! - **Resolution**: recording the landing and re-anchoring the projectile to
//!   the arm tip
//!
//! ```text
//!   frame k-1   ●
//!                \
//!   frame k       ● <- first position with y <= ground: landing at this x
//! ══════════════════ ground
//! ```
//!
//! The flat ground plane is the only collision surface.

pub mod detection;
pub mod resolution;

pub use detection::*;
pub use resolution::*;
