//! Ideal-gas kinetics core.
//!
//! The particle arena and its parameters live in [`Ensemble`]; the per-tick stages are free
//! functions over `&mut [Particle]` so the pipeline in [`Simulation::tick`] reads top to bottom.

pub mod boundary;
pub mod command;
pub mod contact;
pub mod ensemble;
pub mod integrator;
pub mod observables;
pub mod params;
pub mod particle;
pub mod sim;
pub mod thermostat;

pub use command::{Command, Controller};
pub use ensemble::Ensemble;
pub use params::{ControlRange, Param, Params};
pub use particle::Particle;
pub use sim::Simulation;
