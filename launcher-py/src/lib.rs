//! Python bindings for the launcher-core simulation.
//!
//! Provides a simple Python API for a host render loop:
//!
//! ```python
//! from launcher_physics import Simulation
//!
//! sim = Simulation()
//! sim.toggle_spin()
//! sim.throw_projectile()
//!
//! while True:
//!     state = sim.update()
//!     pos = sim.projectile_position()
//!     print(f"Projectile at ({pos.x}, {pos.y}, {pos.z})")
//!     if state["landings"] > 0:
//!         break
//! ```

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use launcher_core::config::PresetLoader;
use launcher_core::types::{Snapshot, Vec3 as CoreVec3};
use launcher_core::{LauncherPhase, LauncherSimulation, SimulationError};

/// 3D vector for positions and velocities.
#[pyclass]
#[derive(Clone, Copy)]
pub struct Vec3 {
    #[pyo3(get, set)]
    pub x: f64,
    #[pyo3(get, set)]
    pub y: f64,
    #[pyo3(get, set)]
    pub z: f64,
}

#[pymethods]
impl Vec3 {
    #[new]
    fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn __repr__(&self) -> String {
        format!("Vec3({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }

    fn magnitude(&self) -> f64 {
        CoreVec3::from(*self).magnitude()
    }

    fn to_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl From<CoreVec3> for Vec3 {
    fn from(v: CoreVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Vec3> for CoreVec3 {
    fn from(v: Vec3) -> Self {
        CoreVec3::new(v.x, v.y, v.z)
    }
}

fn to_py_err(err: SimulationError) -> PyErr {
    match err {
        SimulationError::Io(e) => PyIOError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

fn to_dict<'py>(py: Python<'py>, snapshot: &Snapshot) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("frame", snapshot.frame)?;
    dict.set_item("arm_angle", snapshot.arm_angle)?;
    dict.set_item("arm_tip", <[f64; 3]>::from(snapshot.arm_tip))?;
    dict.set_item("projectile_position", <[f64; 3]>::from(snapshot.projectile_position))?;
    dict.set_item("projectile_velocity", <[f64; 3]>::from(snapshot.projectile_velocity))?;
    dict.set_item("projectile_state", snapshot.projectile_state.as_str())?;
    dict.set_item("spin_enabled", snapshot.spin_enabled)?;
    dict.set_item("speed", snapshot.speed)?;
    dict.set_item("last_landing_distance", snapshot.last_landing_distance)?;
    dict.set_item("landings", snapshot.landings)?;
    Ok(dict)
}

/// Launcher simulation.
///
/// Every command returns the updated state as a dict.
#[pyclass]
pub struct Simulation {
    inner: LauncherSimulation,
}

#[pymethods]
impl Simulation {
    /// Create a simulation, optionally from a named preset in `presets_dir`.
    #[new]
    #[pyo3(signature = (preset=None, presets_dir="presets"))]
    fn new(preset: Option<&str>, presets_dir: &str) -> PyResult<Self> {
        let inner = match preset {
            Some(name) => {
                let config = PresetLoader::new(presets_dir).load(name).map_err(to_py_err)?;
                LauncherSimulation::with_config(config).map_err(to_py_err)?
            }
            None => LauncherSimulation::new(),
        };
        Ok(Self { inner })
    }

    /// Names of the presets available in `presets_dir`.
    #[staticmethod]
    #[pyo3(signature = (presets_dir="presets"))]
    fn presets(presets_dir: &str) -> PyResult<Vec<String>> {
        PresetLoader::new(presets_dir).list().map_err(to_py_err)
    }

    #[getter]
    fn frame(&self) -> u64 {
        self.inner.frame()
    }

    #[getter]
    fn arm_angle(&self) -> f64 {
        self.inner.angle()
    }

    #[getter]
    fn speed(&self) -> f64 {
        self.inner.speed()
    }

    #[getter]
    fn spin_enabled(&self) -> bool {
        self.inner.spin_enabled()
    }

    /// "idle", "spinning" or "flying".
    #[getter]
    fn phase(&self) -> &'static str {
        match self.inner.phase() {
            LauncherPhase::Idle => "idle",
            LauncherPhase::Spinning => "spinning",
            LauncherPhase::Flying => "flying",
        }
    }

    fn projectile_position(&self) -> Vec3 {
        self.inner.projectile().pos.into()
    }

    fn projectile_velocity(&self) -> Vec3 {
        self.inner.projectile().vel.into()
    }

    fn arm_tip(&self) -> Vec3 {
        self.inner.arm_tip().into()
    }

    /// Distance of the last landing, or None before the first one.
    fn last_landing_distance(&self) -> Option<f64> {
        self.inner.last_landing().map(|landing| landing.distance)
    }

    fn toggle_spin<'py>(&mut self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        to_dict(py, &self.inner.toggle_spin())
    }

    fn set_spin<'py>(&mut self, py: Python<'py>, enabled: bool) -> PyResult<Bound<'py, PyDict>> {
        to_dict(py, &self.inner.set_spin(enabled))
    }

    /// Set the angular speed. Raises ValueError for NaN or infinity.
    fn set_speed<'py>(&mut self, py: Python<'py>, speed: f64) -> PyResult<Bound<'py, PyDict>> {
        let snapshot = self.inner.set_speed(speed).map_err(to_py_err)?;
        to_dict(py, &snapshot)
    }

    fn speed_up<'py>(&mut self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        to_dict(py, &self.inner.speed_up())
    }

    fn speed_down<'py>(&mut self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        to_dict(py, &self.inner.speed_down())
    }

    /// Release the projectile from the arm tip. No effect while in flight.
    fn throw_projectile<'py>(&mut self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        to_dict(py, &self.inner.throw())
    }

    fn reset<'py>(&mut self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        to_dict(py, &self.inner.reset())
    }

    /// Advance one frame. Without `dt` the fixed time step is used.
    #[pyo3(signature = (dt=None))]
    fn update<'py>(&mut self, py: Python<'py>, dt: Option<f64>) -> PyResult<Bound<'py, PyDict>> {
        let snapshot = match dt {
            Some(dt) => self.inner.advance(dt).map_err(to_py_err)?,
            None => self.inner.update(),
        };
        to_dict(py, &snapshot)
    }

    /// Run multiple fixed-step frames at once.
    fn step_n<'py>(&mut self, py: Python<'py>, frames: usize) -> PyResult<Bound<'py, PyDict>> {
        to_dict(py, &self.inner.step_n(frames))
    }

    /// Current state as a dict.
    fn snapshot_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        to_dict(py, &self.inner.snapshot())
    }
}

/// Python module definition.
#[pymodule]
fn launcher_physics(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Vec3>()?;
    m.add_class::<Simulation>()?;
    Ok(())
}
