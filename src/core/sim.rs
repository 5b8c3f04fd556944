use crate::core::command::{Command, CommandQueue, Controller};
use crate::core::ensemble::Ensemble;
use crate::core::params::{Param, Params};
use crate::core::particle::{Particle, DIM};
use crate::core::{boundary, contact, integrator, observables, thermostat};
use crate::error::{Error, Result};

/// Fixed-timestep ideal-gas simulation in the box `[-h, h]^3`.
///
/// One call to [`tick`](Simulation::tick) runs, strictly in order:
/// command drain, thermostat, Euler drift, wall reflection, pairwise contacts, pressure.
/// Every stage mutates the same particle arena in place.
#[derive(Debug)]
pub struct Simulation {
    ensemble: Ensemble,
    commands: CommandQueue,
    pressure: f64,
    ticks: u64,
    contacts_last_tick: usize,
    wall_hits_last_tick: usize,
}

impl Simulation {
    /// Create a simulation from `params` (sanitized) and an optional RNG seed.
    pub fn new(params: Params, seed: Option<u64>) -> Result<Self> {
        let ensemble = Ensemble::new(params, seed)?;
        let mut sim = Self {
            ensemble,
            commands: CommandQueue::new(),
            pressure: 0.0,
            ticks: 0,
            contacts_last_tick: 0,
            wall_hits_last_tick: 0,
        };
        sim.refresh_pressure();
        Ok(sim)
    }

    /// Create a simulation with the sandbox defaults (150 particles in a unit half-extent box).
    pub fn with_defaults(seed: Option<u64>) -> Result<Self> {
        Self::new(Params::default(), seed)
    }

    /// Handle for queueing parameter writes from another thread.
    pub fn controller(&self) -> Controller {
        self.commands.controller()
    }

    /// Apply every queued controller command. Returns how many were applied.
    ///
    /// Runs automatically at the start of each tick. Non-finite values are logged and
    /// dropped; they never fail the tick.
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0usize;
        for cmd in self.commands.drain() {
            match cmd {
                Command::Set(key, value) => match self.ensemble.set_param(key, value) {
                    Ok(_) => applied += 1,
                    Err(e) => {
                        tracing::warn!(param = %key, error = %e, "dropped controller write")
                    }
                },
                Command::Resize(n) => {
                    self.ensemble.resize(n);
                    applied += 1;
                }
                Command::Reseed => {
                    self.ensemble.reseed();
                    applied += 1;
                }
            }
        }
        if applied > 0 {
            self.refresh_pressure();
        }
        applied
    }

    /// Set a parameter directly between ticks; clamps to its domain and returns the stored value.
    /// Changing `Param::Count` reseeds the whole ensemble before returning.
    pub fn set_parameter(&mut self, key: Param, value: f64) -> Result<f64> {
        let applied = self.ensemble.set_param(key, value)?;
        self.refresh_pressure();
        Ok(applied)
    }

    /// Change the particle count (full reseed). Returns the count applied.
    pub fn resize(&mut self, count: usize) -> usize {
        let applied = self.ensemble.resize(count);
        self.refresh_pressure();
        applied
    }

    /// Redraw every particle at the current count.
    pub fn reseed(&mut self) {
        self.ensemble.reseed();
        self.refresh_pressure();
    }

    /// Advance the simulation by one timestep.
    ///
    /// Errors:
    /// - `Error::NumericFault` if any position, velocity or the pressure is non-finite
    ///   afterwards. The state is left as computed; the caller should reseed or stop.
    pub fn tick(&mut self) -> Result<()> {
        self.apply_pending();

        let (particles, params) = self.ensemble.split_mut();
        thermostat::rescale(particles, params.temperature);
        integrator::step(particles, params.timestep);
        let wall_hits = boundary::reflect(particles, params.half_extent, params.restitution);
        let contacts = contact::resolve(particles, params.radius, params.restitution);
        let pressure = observables::pressure(particles, params.mass, params.half_extent);

        check_finite(particles, pressure)?;

        self.pressure = pressure;
        self.contacts_last_tick = contacts;
        self.wall_hits_last_tick = wall_hits;
        self.ticks += 1;
        tracing::trace!(tick = self.ticks, pressure, contacts, wall_hits, "tick");
        Ok(())
    }

    /// Run `n` ticks, stopping at the first fault.
    pub fn step(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.tick()?;
        }
        Ok(())
    }

    /// Current parameters.
    pub fn params(&self) -> &Params {
        self.ensemble.params()
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.ensemble.len()
    }

    /// Read-only view of the particle arena.
    pub fn particles(&self) -> &[Particle] {
        self.ensemble.particles()
    }

    /// Mutable view of the arena for placing particles by hand. Cannot change the count.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        self.ensemble.particles_mut()
    }

    /// Positions as a Vec of fixed-size arrays.
    pub fn positions(&self) -> Vec<[f64; DIM]> {
        self.particles().iter().map(|p| p.r).collect()
    }

    /// Velocities as a Vec of fixed-size arrays.
    pub fn velocities(&self) -> Vec<[f64; DIM]> {
        self.particles().iter().map(|p| p.v).collect()
    }

    /// Per-particle speeds |v| (used by hosts for colouring).
    pub fn speeds(&self) -> Vec<f64> {
        observables::speeds(self.particles())
    }

    /// Kinetic pressure as of the last tick (or the last parameter change).
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Total kinetic energy (diagnostic).
    pub fn kinetic_energy(&self) -> f64 {
        observables::kinetic_energy(self.particles(), self.params().mass)
    }

    /// Measured temperature, mean |v|^2 (diagnostic).
    pub fn temperature(&self) -> f64 {
        observables::temperature(self.particles())
    }

    /// Box volume `(2h)^3`.
    pub fn volume(&self) -> f64 {
        self.params().volume()
    }

    /// Completed ticks since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Pair impulses applied during the last completed tick.
    pub fn contacts_last_tick(&self) -> usize {
        self.contacts_last_tick
    }

    /// Wall reflections (particle-axis) during the last completed tick.
    pub fn wall_hits_last_tick(&self) -> usize {
        self.wall_hits_last_tick
    }

    fn refresh_pressure(&mut self) {
        let params = self.ensemble.params();
        self.pressure =
            observables::pressure(self.ensemble.particles(), params.mass, params.half_extent);
    }
}

fn check_finite(particles: &[Particle], pressure: f64) -> Result<()> {
    for (index, p) in particles.iter().enumerate() {
        if p.is_finite() {
            continue;
        }
        let what = if p.r.iter().all(|x| x.is_finite()) {
            "velocity"
        } else {
            "position"
        };
        tracing::error!(index, what, "non-finite particle state after tick");
        return Err(Error::NumericFault { what, index });
    }
    if !pressure.is_finite() {
        tracing::error!(pressure, "non-finite pressure after tick");
        return Err(Error::NumericFault {
            what: "pressure",
            index: 0,
        });
    }
    Ok(())
}
