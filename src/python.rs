use numpy::ndarray::{Array1, Array2};
use numpy::{IntoPyArray, PyArray1, PyArray2};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::particle::DIM;
use crate::core::{Param, Params, Simulation};
use crate::error::Error;

fn py_err(e: Error) -> PyErr {
    match e {
        Error::NumericFault { .. } | Error::Disconnected => PyRuntimeError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

/// Python-facing wrapper around the kinetics core.
///
/// - __new__(count=150, seed=None)
/// - tick(), step(n)
/// - set_parameter(name, value) -> applied value
/// - get_positions() -> np.ndarray, shape (N, 3)
/// - get_speeds() -> np.ndarray, shape (N,)
/// - get_pressure() -> float
#[pyclass]
pub struct IdealGas {
    sim: Simulation,
}

#[pymethods]
impl IdealGas {
    /// Create a gas of `count` particles with default parameters.
    ///
    /// `seed` makes the initial draw reproducible; None seeds from OS entropy.
    #[new]
    #[pyo3(signature = (count=150, seed=None))]
    fn new(count: usize, seed: Option<u64>) -> PyResult<Self> {
        let params = Params {
            count,
            ..Params::default()
        };
        let sim = Simulation::new(params, seed).map_err(py_err)?;
        Ok(Self { sim })
    }

    /// Advance one timestep. Raises RuntimeError if the state went non-finite.
    fn tick(&mut self) -> PyResult<()> {
        self.sim.tick().map_err(py_err)
    }

    /// Advance `n` timesteps (releases the GIL during computation).
    fn step(&mut self, py: Python<'_>, n: usize) -> PyResult<()> {
        py.detach(|| self.sim.step(n)).map_err(py_err)
    }

    /// Set a parameter by name ("count", "mass", "radius", "restitution", "timestep",
    /// "temperature", "half_extent"). Out-of-range values are clamped; returns the value stored.
    fn set_parameter(&mut self, name: &str, value: f64) -> PyResult<f64> {
        let key: Param = name.parse().map_err(py_err)?;
        self.sim.set_parameter(key, value).map_err(py_err)
    }

    /// Current value of a parameter by name.
    fn get_parameter(&self, name: &str) -> PyResult<f64> {
        let key: Param = name.parse().map_err(py_err)?;
        Ok(self.sim.params().get(key))
    }

    /// Return positions as a NumPy array of shape (N, 3), dtype=float64.
    fn get_positions(&self, py: Python<'_>) -> PyResult<Py<PyArray2<f64>>> {
        let n = self.sim.num_particles();
        let mut arr = Array2::<f64>::zeros((n, DIM));
        for (i, p) in self.sim.particles().iter().enumerate() {
            for k in 0..DIM {
                arr[[i, k]] = p.r[k];
            }
        }
        Ok(arr.into_pyarray(py).unbind())
    }

    /// Return per-particle speeds as a NumPy array of shape (N,), dtype=float64.
    fn get_speeds(&self, py: Python<'_>) -> PyResult<Py<PyArray1<f64>>> {
        let arr = Array1::from_vec(self.sim.speeds());
        Ok(arr.into_pyarray(py).unbind())
    }

    /// Kinetic pressure estimate as of the last tick.
    fn get_pressure(&self) -> f64 {
        self.sim.pressure()
    }

    /// Measured temperature (mean squared speed).
    fn get_temperature(&self) -> f64 {
        self.sim.temperature()
    }

    /// Total kinetic energy.
    fn get_kinetic_energy(&self) -> f64 {
        self.sim.kinetic_energy()
    }
}

/// The idealgas Python module entry point.
#[pymodule]
fn idealgas(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<IdealGas>()?;
    Ok(())
}
