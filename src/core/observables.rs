//! Derived scalars computed fresh from the current velocity field.

use crate::core::particle::Particle;

/// Virial-style kinetic pressure `P = sum(m |v|^2) / (3 V)` with `V = (2 * half_extent)^3`.
///
/// Not a wall-impulse average: recomputed from scratch every tick, no smoothing.
pub fn pressure(particles: &[Particle], mass: f64, half_extent: f64) -> f64 {
    let volume = (2.0 * half_extent).powi(3);
    let sum: f64 = particles.iter().map(|p| mass * p.speed_sq()).sum();
    sum / (3.0 * volume)
}

/// Total kinetic energy `sum(1/2 m |v|^2)`.
pub fn kinetic_energy(particles: &[Particle], mass: f64) -> f64 {
    particles.iter().map(|p| p.kinetic_energy(mass)).sum()
}

/// Measured temperature in natural units: mean |v|^2, the quantity the thermostat targets.
pub fn temperature(particles: &[Particle]) -> f64 {
    if particles.is_empty() {
        return 0.0;
    }
    particles.iter().map(Particle::speed_sq).sum::<f64>() / particles.len() as f64
}

/// Per-particle speeds |v|, in arena order.
pub fn speeds(particles: &[Particle]) -> Vec<f64> {
    particles.iter().map(Particle::speed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_of_known_field() {
        // sum m|v|^2 = 2 * (1 + 4) = 10; V = 8; P = 10 / 24
        let ps = vec![
            Particle {
                r: [0.0; 3],
                v: [1.0, 0.0, 0.0],
            },
            Particle {
                r: [0.0; 3],
                v: [0.0, 2.0, 0.0],
            },
        ];
        assert!((pressure(&ps, 2.0, 1.0) - 10.0 / 24.0).abs() < 1e-12);
    }

    #[test]
    fn pressure_scales_inversely_with_volume() {
        let ps = vec![Particle {
            r: [0.0; 3],
            v: [1.0, 1.0, 1.0],
        }];
        let small = pressure(&ps, 1.0, 1.0);
        let large = pressure(&ps, 1.0, 2.0);
        assert!((small / large - 8.0).abs() < 1e-12);
    }

    #[test]
    fn energy_temperature_speeds() {
        let ps = vec![
            Particle {
                r: [0.0; 3],
                v: [3.0, 4.0, 0.0],
            },
            Particle {
                r: [0.0; 3],
                v: [0.0, 0.0, 1.0],
            },
        ];
        assert!((kinetic_energy(&ps, 1.0) - 13.0).abs() < 1e-12);
        assert!((temperature(&ps) - 13.0).abs() < 1e-12);
        assert_eq!(speeds(&ps), vec![5.0, 1.0]);
        assert_eq!(temperature(&[]), 0.0);
    }
}
