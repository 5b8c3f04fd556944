use crate::core::particle::Particle;

/// Explicit Euler drift: `r += v * dt` for every particle.
///
/// No sub-stepping. Large `dt` relative to `radius / speed` can tunnel through neighbours
/// or past a wall within one tick; the boundary pass clamps the latter afterwards.
pub fn step(particles: &mut [Particle], dt: f64) {
    for p in particles.iter_mut() {
        for (r, v) in p.r.iter_mut().zip(p.v.iter()) {
            *r += v * dt;
        }
    }
}
