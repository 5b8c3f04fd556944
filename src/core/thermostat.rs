//! Velocity-rescaling thermostat.
//!
//! Temperature is in natural units: the target is the mean squared speed itself, so no
//! Boltzmann constant appears anywhere in the engine.

use crate::core::particle::Particle;

/// Guards the rescale factor against an all-zero velocity field.
pub const RMS_EPS: f64 = 1e-6;

/// Root-mean-square speed of the ensemble; 0 for an empty slice.
pub fn rms_speed(particles: &[Particle]) -> f64 {
    if particles.is_empty() {
        return 0.0;
    }
    let sum: f64 = particles.iter().map(Particle::speed_sq).sum();
    (sum / particles.len() as f64).sqrt()
}

/// Scale every velocity by one factor so the RMS speed becomes `sqrt(temperature)`.
///
/// Applied in full every tick. Returns the factor used.
pub fn rescale(particles: &mut [Particle], temperature: f64) -> f64 {
    let factor = temperature.max(0.0).sqrt() / (rms_speed(particles) + RMS_EPS);
    for p in particles.iter_mut() {
        p.v.iter_mut().for_each(|c| *c *= factor);
    }
    factor
}
