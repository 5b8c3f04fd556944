use crate::error::{Error, Result};

/// Fixed spatial dimension (3D).
pub const DIM: usize = 3;

/// One record of the particle arena.
///
/// Mass and radius are shared by the whole ensemble (see [`Params`](super::Params)),
/// so a particle carries only its kinematic state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    /// Position (x, y, z).
    pub r: [f64; DIM],
    /// Velocity (vx, vy, vz).
    pub v: [f64; DIM],
}

impl Particle {
    /// Create a new particle after checking that every component is finite.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if any component is NaN/inf.
    pub fn new(r: [f64; DIM], v: [f64; DIM]) -> Result<Self> {
        if !r.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !v.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self { r, v })
    }

    /// Squared speed |v|^2.
    #[inline]
    pub fn speed_sq(&self) -> f64 {
        dot(&self.v, &self.v)
    }

    /// Speed |v|.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed_sq().sqrt()
    }

    /// Returns the particle's kinetic energy for the shared ensemble mass: 1/2 m |v|^2.
    #[inline]
    pub fn kinetic_energy(&self, mass: f64) -> f64 {
        0.5 * mass * self.speed_sq()
    }

    #[inline]
    pub(crate) fn is_finite(&self) -> bool {
        self.r.iter().chain(self.v.iter()).all(|x| x.is_finite())
    }
}

#[inline]
pub(crate) fn dot(a: &[f64; DIM], b: &[f64; DIM]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
