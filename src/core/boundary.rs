use crate::core::particle::Particle;

/// Reflect particles that left the box `[-half_extent, half_extent]^3`.
///
/// Each axis is handled on its own: an escaped component has its velocity multiplied by
/// `-restitution` and its position snapped onto the wall. A corner exit flips every escaped
/// axis in the same pass. Returns the number of (particle, axis) reflections.
pub fn reflect(particles: &mut [Particle], half_extent: f64, restitution: f64) -> usize {
    let mut hits = 0usize;
    for p in particles.iter_mut() {
        for (r, v) in p.r.iter_mut().zip(p.v.iter_mut()) {
            if r.abs() > half_extent {
                *v *= -restitution;
                *r = r.signum() * half_extent;
                hits += 1;
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_and_damps_escaped_axis() {
        let mut ps = vec![Particle {
            r: [1.09, 0.3, 0.0],
            v: [1.0, 0.2, 0.0],
        }];
        let hits = reflect(&mut ps, 1.0, 0.5);
        assert_eq!(hits, 1);
        assert_eq!(ps[0].r, [1.0, 0.3, 0.0]);
        assert_eq!(ps[0].v, [-0.5, 0.2, 0.0]);
    }

    #[test]
    fn corner_exit_flips_all_axes() {
        let mut ps = vec![Particle {
            r: [-1.2, 1.1, -1.05],
            v: [-1.0, 2.0, -3.0],
        }];
        assert_eq!(reflect(&mut ps, 1.0, 1.0), 3);
        assert_eq!(ps[0].r, [-1.0, 1.0, -1.0]);
        assert_eq!(ps[0].v, [1.0, -2.0, 3.0]);
    }

    #[test]
    fn inside_particles_untouched() {
        let p = Particle {
            r: [1.0, -1.0, 0.0],
            v: [5.0, -5.0, 1.0],
        };
        let mut ps = vec![p];
        assert_eq!(reflect(&mut ps, 1.0, 0.8), 0);
        assert_eq!(ps[0], p);
    }
}
