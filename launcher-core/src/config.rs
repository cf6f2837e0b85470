//! Launcher configuration and preset loader.
//!
//! Every tunable constant of the simulation lives in [`LauncherConfig`]. The
//! defaults reproduce the tuned launcher exactly; presets are YAML files that
//! override any subset of fields:
//!
//! ```text
//! presets/
//! ├── default.yaml
//! ├── long_arm.yaml
//! └── moon.yaml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::launch::LaunchVelocityResolver;
use crate::types::{constants, Vec3};

/// Fixed transform chain from the world origin to the arm pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountConfig {
    /// Post base position in world space.
    pub base_position: Vec3,
    /// Post base orientation as XYZ Euler angles (rad).
    pub base_rotation: Vec3,
    /// Pivot position in the base's local frame.
    pub pivot_offset: Vec3,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            base_position: constants::MOUNT_BASE_POSITION,
            base_rotation: constants::MOUNT_BASE_ROTATION,
            pivot_offset: constants::PIVOT_OFFSET,
        }
    }
}

/// All tunables of the launcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub name: String,
    pub arm_radius: f64,
    /// Static angular offset of the arm in its mount (rad).
    pub mount_angle_offset: f64,
    /// Release speed per unit of angular speed setting.
    pub launch_speed_scale: f64,
    pub gravity: Vec3,
    /// Integration step used by `update` (s).
    pub time_step: f64,
    /// Angular speed setting on start and after reset (rad per update).
    pub default_speed: f64,
    /// Increment for speed up / speed down.
    pub speed_step: f64,
    pub ground_height: f64,
    pub initial_projectile_position: Vec3,
    pub mount: MountConfig,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            arm_radius: constants::ARM_RADIUS,
            mount_angle_offset: constants::MOUNT_ANGLE_OFFSET,
            launch_speed_scale: constants::LAUNCH_SPEED_SCALE,
            gravity: Vec3::new(0.0, -constants::GRAVITY, 0.0),
            time_step: constants::FIXED_TIME_STEP,
            default_speed: constants::DEFAULT_SPEED,
            speed_step: constants::SPEED_STEP,
            ground_height: constants::GROUND_HEIGHT,
            initial_projectile_position: constants::INITIAL_PROJECTILE_POSITION,
            mount: MountConfig::default(),
        }
    }
}

impl LauncherConfig {
    /// Parse a configuration from YAML. Missing fields take their defaults.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: LauncherConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values the integrator and rotator rely on.
    pub fn validate(&self) -> Result<()> {
        if !(self.arm_radius.is_finite() && self.arm_radius > 0.0) {
            return Err(invalid(format!(
                "arm_radius must be positive, got {}",
                self.arm_radius
            )));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(SimulationError::InvalidTimeStep(self.time_step));
        }
        if !(self.default_speed.is_finite() && self.default_speed >= 0.0) {
            return Err(invalid(format!(
                "default_speed must be non-negative, got {}",
                self.default_speed
            )));
        }
        if !(self.speed_step.is_finite() && self.speed_step >= 0.0) {
            return Err(invalid(format!(
                "speed_step must be non-negative, got {}",
                self.speed_step
            )));
        }
        let scalars = [
            ("mount_angle_offset", self.mount_angle_offset),
            ("launch_speed_scale", self.launch_speed_scale),
            ("ground_height", self.ground_height),
        ];
        if let Some((field, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{} must be finite, got {}", field, value)));
        }
        let vectors = [
            ("gravity", self.gravity),
            ("initial_projectile_position", self.initial_projectile_position),
            ("mount.base_position", self.mount.base_position),
            ("mount.base_rotation", self.mount.base_rotation),
            ("mount.pivot_offset", self.mount.pivot_offset),
        ];
        if let Some((field, _)) = vectors.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{} must be finite", field)));
        }
        // A projectile dropped or thrown under level or upward gravity never
        // comes back down to the ground plane.
        if self.gravity.y >= 0.0 {
            return Err(invalid(format!(
                "gravity must point downward, got y = {}",
                self.gravity.y
            )));
        }
        let resolver = LaunchVelocityResolver::from_config(self);
        if !resolver
            .reach_bound(self.default_speed, &self.gravity)
            .is_finite()
        {
            return Err(invalid(format!(
                "default_speed {} throws beyond the finite range",
                self.default_speed
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> SimulationError {
    SimulationError::InvalidConfig(message)
}

/// Loads named launcher presets from a directory of YAML files.
#[derive(Debug, Clone)]
pub struct PresetLoader {
    base_path: PathBuf,
}

impl PresetLoader {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load a preset by name (without .yaml extension).
    ///
    /// # Example
    /// ```ignore
    /// let loader = PresetLoader::new("presets");
    /// let config = loader.load("long_arm")?;
    /// ```
    pub fn load(&self, name: &str) -> Result<LauncherConfig> {
        let path = self.base_path.join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(SimulationError::PresetNotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let config = LauncherConfig::from_yaml(&contents)?;
        log::info!("Loaded launcher preset {} from {}", config.name, path.display());
        Ok(config)
    }

    /// List all available presets, sorted by name.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if let Some(stem) = name.strip_suffix(".yaml") {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn get_presets_path() -> PathBuf {
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(manifest_dir).join("..").join("presets")
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(LauncherConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = LauncherConfig::from_yaml("arm_radius: 4.0\n").unwrap();
        assert_eq!(config.arm_radius, 4.0);
        assert_eq!(config.launch_speed_scale, constants::LAUNCH_SPEED_SCALE);
        assert_eq!(config.mount, MountConfig::default());
    }

    #[test]
    fn test_rejects_zero_time_step() {
        let result = LauncherConfig::from_yaml("time_step: 0.0\n");
        assert!(matches!(result, Err(SimulationError::InvalidTimeStep(_))));
    }

    #[test]
    fn test_rejects_negative_arm_radius() {
        let config = LauncherConfig {
            arm_radius: -1.0,
            ..LauncherConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_gravity() {
        let config = LauncherConfig {
            gravity: Vec3::new(0.0, f64::NAN, 0.0),
            ..LauncherConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_level_or_upward_gravity() {
        for y in [0.0, 9.8] {
            let yaml = format!("gravity: {{ x: 0.0, y: {}, z: 0.0 }}\n", y);
            let result = LauncherConfig::from_yaml(&yaml);
            assert!(
                matches!(result, Err(SimulationError::InvalidConfig(_))),
                "gravity y = {} accepted",
                y
            );
        }
    }

    #[test]
    fn test_rejects_default_speed_beyond_finite_range() {
        let config = LauncherConfig {
            default_speed: 1e200,
            ..LauncherConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_default_preset() {
        let loader = PresetLoader::new(get_presets_path());
        let result = loader.load("default");

        assert!(result.is_ok(), "Should load default: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn test_load_long_arm_preset() {
        let loader = PresetLoader::new(get_presets_path());
        let config = loader.load("long_arm").unwrap();
        assert_eq!(config.name, "long_arm");
        assert!(config.arm_radius > constants::ARM_RADIUS);
    }

    #[test]
    fn test_load_nonexistent_preset() {
        let loader = PresetLoader::new(get_presets_path());
        match loader.load("nonexistent_preset_xyz") {
            Err(SimulationError::PresetNotFound(name)) => {
                assert_eq!(name, "nonexistent_preset_xyz");
            }
            other => panic!("Expected PresetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_list_presets() {
        let loader = PresetLoader::new(get_presets_path());
        let presets = loader.list().unwrap();
        assert_eq!(presets, vec!["default", "long_arm", "moon"]);
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let loader = PresetLoader::new(get_presets_path().join("missing"));
        assert!(loader.list().unwrap().is_empty());
    }
}
