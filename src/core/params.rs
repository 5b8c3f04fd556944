//! Shared scalar parameters of the ensemble and their domains.
//!
//! Every setter clamps to the parameter's domain instead of failing: a controller dragging a
//! slider past its end must never stop the simulation. Only non-finite input is refused.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Floor applied to parameters that must stay strictly positive.
pub const MIN_POSITIVE: f64 = 1e-6;

/// Upper bound on the particle count accepted by a resize.
pub const MAX_PARTICLES: usize = 100_000;

/// Parameter keys accepted by [`Params::set`] and the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    Count,
    Mass,
    Radius,
    Restitution,
    Timestep,
    Temperature,
    HalfExtent,
}

/// Control range for laying out a host slider. Advisory only; the engine enforces the
/// (wider) physical domain through [`Param::clamp`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl Param {
    pub const ALL: [Param; 7] = [
        Param::Count,
        Param::Mass,
        Param::Radius,
        Param::Restitution,
        Param::Timestep,
        Param::Temperature,
        Param::HalfExtent,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Param::Count => "count",
            Param::Mass => "mass",
            Param::Radius => "radius",
            Param::Restitution => "restitution",
            Param::Timestep => "timestep",
            Param::Temperature => "temperature",
            Param::HalfExtent => "half_extent",
        }
    }

    /// Clamp a finite value into this parameter's domain.
    ///
    /// `Count` is rounded to the nearest integer and kept in `[1, MAX_PARTICLES]`.
    pub fn clamp(self, value: f64) -> f64 {
        match self {
            Param::Count => value.round().clamp(1.0, MAX_PARTICLES as f64),
            Param::Mass | Param::Timestep | Param::HalfExtent => value.max(MIN_POSITIVE),
            Param::Radius | Param::Temperature => value.max(0.0),
            Param::Restitution => value.clamp(0.0, 1.0),
        }
    }

    /// Clamp `value` into the domain, logging when it had to move.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `value` is NaN/inf.
    pub fn checked_clamp(self, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(Error::InvalidParam(format!("{self} must be finite, got {value}")));
        }
        let applied = self.clamp(value);
        if applied != value {
            tracing::warn!(param = %self, requested = value, applied, "parameter clamped to domain");
        }
        Ok(applied)
    }

    /// Slider ranges of the sandbox control panel.
    pub fn control_range(self) -> ControlRange {
        let (min, max, default) = match self {
            Param::Count => (50.0, 400.0, 150.0),
            Param::Mass => (0.01, 5.0, 1.0),
            Param::Radius => (0.001, 0.1, 0.04),
            Param::Restitution => (0.5, 1.0, 1.0),
            Param::Timestep => (0.001, 0.1, 0.02),
            Param::Temperature => (0.1, 3.0, 1.0),
            Param::HalfExtent => (0.6, 3.0, 1.0),
        };
        ControlRange { min, max, default }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Param {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" | "n" => Ok(Param::Count),
            "mass" | "m" => Ok(Param::Mass),
            "radius" | "r" => Ok(Param::Radius),
            "restitution" | "e" => Ok(Param::Restitution),
            "timestep" | "dt" => Ok(Param::Timestep),
            "temperature" | "t" => Ok(Param::Temperature),
            "half_extent" | "box" => Ok(Param::HalfExtent),
            _ => Err(Error::UnknownParameter(s.to_string())),
        }
    }
}

/// Scalar parameters shared by every particle.
///
/// Deserialized presets may omit fields (defaults fill in) and may carry out-of-domain
/// values; pass them through [`Params::sanitized`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Number of particles (>= 1).
    pub count: usize,
    /// Particle mass (> 0).
    pub mass: f64,
    /// Hard-sphere radius (>= 0); contact threshold is `2 * radius`.
    pub radius: f64,
    /// Coefficient of restitution in [0, 1].
    pub restitution: f64,
    /// Integration timestep (> 0).
    pub timestep: f64,
    /// Target temperature in natural units (>= 0); the thermostat drives mean |v|^2 to it.
    pub temperature: f64,
    /// Half the box edge (> 0); the box is `[-half_extent, half_extent]^3`.
    pub half_extent: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            count: 150,
            mass: 1.0,
            radius: 0.04,
            restitution: 1.0,
            timestep: 0.02,
            temperature: 1.0,
            half_extent: 1.0,
        }
    }
}

impl Params {
    /// Current value of `key` as `f64`.
    pub fn get(&self, key: Param) -> f64 {
        match key {
            Param::Count => self.count as f64,
            Param::Mass => self.mass,
            Param::Radius => self.radius,
            Param::Restitution => self.restitution,
            Param::Timestep => self.timestep,
            Param::Temperature => self.temperature,
            Param::HalfExtent => self.half_extent,
        }
    }

    /// Set `key`, clamping to its domain. Returns the value actually stored.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `value` is NaN/inf; the parameter is left unchanged.
    pub fn set(&mut self, key: Param, value: f64) -> Result<f64> {
        let applied = key.checked_clamp(value)?;
        self.store(key, applied);
        Ok(applied)
    }

    /// Box volume `(2 * half_extent)^3`.
    #[inline]
    pub fn volume(&self) -> f64 {
        (2.0 * self.half_extent).powi(3)
    }

    /// Clamp every field into its domain; non-finite fields fall back to the default.
    pub fn sanitized(self) -> Self {
        let defaults = Params::default();
        let mut out = self;
        for key in Param::ALL {
            let raw = self.get(key);
            let value = if raw.is_finite() { raw } else { defaults.get(key) };
            out.store(key, key.clamp(value));
        }
        out
    }

    fn store(&mut self, key: Param, value: f64) {
        match key {
            Param::Count => self.count = value as usize,
            Param::Mass => self.mass = value,
            Param::Radius => self.radius = value,
            Param::Restitution => self.restitution = value,
            Param::Timestep => self.timestep = value,
            Param::Temperature => self.temperature = value,
            Param::HalfExtent => self.half_extent = value,
        }
    }
}
