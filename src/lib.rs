//! Fixed-timestep ideal-gas kinetics.
//!
//! N equal-mass hard spheres in a reflecting cube, held at a target temperature by a
//! velocity-rescaling thermostat, with instantaneous impulse contacts and a kinetic
//! pressure estimate. See [`core::Simulation`] for the per-tick pipeline.
//!
//! With the `python` feature the crate also builds a pyo3 extension module that exposes
//! the same operations to a plotting front end.

pub mod core;
pub mod error;

#[cfg(feature = "python")]
mod python;

pub use crate::core::{Command, Controller, Param, Params, Simulation};
pub use crate::error::{Error, Result};
