use crate::core::params::{Param, Params};
use crate::core::particle::{Particle, DIM};
use crate::error::{Error, Result};
use rand::{rng, rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Standard deviation of each freshly drawn velocity component.
pub const VELOCITY_SIGMA: f64 = 0.6;

/// The particle arena plus the shared parameters it is simulated under.
///
/// The buffer length always equals `params.count`. Anything that changes the count goes
/// through [`Ensemble::resize`], which reallocates and reseeds the whole buffer at once.
#[derive(Debug)]
pub struct Ensemble {
    particles: Vec<Particle>,
    params: Params,
    rng: StdRng,
    velocity_dist: Normal<f64>,
}

impl Ensemble {
    /// Build and seed an ensemble. `params` is sanitized first.
    ///
    /// `seed` makes the initial draw reproducible; `None` seeds from OS entropy.
    pub fn new(params: Params, seed: Option<u64>) -> Result<Self> {
        let rng: StdRng = match seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };
        let velocity_dist = Normal::new(0.0, VELOCITY_SIGMA)
            .map_err(|e| Error::InvalidParam(format!("velocity distribution: {e}")))?;
        let mut ens = Self {
            particles: Vec::new(),
            params: params.sanitized(),
            rng,
            velocity_dist,
        };
        ens.reseed();
        Ok(ens)
    }

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view of the arena. A slice, so the length invariant cannot be broken through it.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Split borrow used by the tick pipeline: stages mutate particles while reading params.
    pub(crate) fn split_mut(&mut self) -> (&mut [Particle], &Params) {
        (&mut self.particles, &self.params)
    }

    /// Set a parameter with clamping; a changed `Count` reseeds immediately.
    pub fn set_param(&mut self, key: Param, value: f64) -> Result<f64> {
        if key == Param::Count {
            let applied = key.checked_clamp(value)?;
            return Ok(self.resize(applied as usize) as f64);
        }
        self.params.set(key, value)
    }

    /// Change the particle count, reallocating and reseeding both position and velocity
    /// for every particle. Returns the count actually applied. A no-op when unchanged.
    pub fn resize(&mut self, count: usize) -> usize {
        let applied = Param::Count.clamp(count as f64) as usize;
        if applied != count {
            tracing::warn!(requested = count, applied, "particle count clamped to domain");
        }
        if applied != self.particles.len() {
            self.params.count = applied;
            self.reseed();
        }
        applied
    }

    /// Redraw every particle: uniform position inside the box, Gaussian velocity.
    pub fn reseed(&mut self) {
        let n = self.params.count;
        let h = self.params.half_extent;
        let mut particles = Vec::with_capacity(n);
        for _ in 0..n {
            let mut r = [0.0_f64; DIM];
            r.iter_mut().for_each(|x| *x = self.rng.random_range(-h..=h));
            let mut v = [0.0_f64; DIM];
            v.iter_mut()
                .for_each(|x| *x = self.velocity_dist.sample(&mut self.rng));
            particles.push(Particle { r, v });
        }
        self.particles = particles;
        tracing::debug!(count = n, half_extent = h, "ensemble reseeded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ensemble_matches_count() -> Result<()> {
        let ens = Ensemble::new(Params::default(), Some(1))?;
        assert_eq!(ens.len(), 150);
        assert_eq!(ens.params().count, 150);
        Ok(())
    }

    #[test]
    fn same_seed_same_draw() -> Result<()> {
        let a = Ensemble::new(Params::default(), Some(99))?;
        let b = Ensemble::new(Params::default(), Some(99))?;
        assert_eq!(a.particles(), b.particles());
        Ok(())
    }

    #[test]
    fn resize_reseeds_inside_box() -> Result<()> {
        let params = Params {
            half_extent: 0.7,
            ..Params::default()
        };
        let mut ens = Ensemble::new(params, Some(5))?;
        assert_eq!(ens.resize(321), 321);
        assert_eq!(ens.len(), 321);
        assert_eq!(ens.params().count, 321);
        for p in ens.particles() {
            assert!(p.r.iter().all(|x| x.abs() <= 0.7));
        }
        Ok(())
    }

    #[test]
    fn unchanged_count_keeps_state() -> Result<()> {
        let mut ens = Ensemble::new(Params::default(), Some(8))?;
        let before = ens.particles().to_vec();
        ens.set_param(Param::Count, 150.0)?;
        assert_eq!(ens.particles(), &before[..]);
        Ok(())
    }

    #[test]
    fn zero_count_clamped_to_one() -> Result<()> {
        let mut ens = Ensemble::new(Params::default(), Some(3))?;
        assert_eq!(ens.resize(0), 1);
        assert_eq!(ens.len(), 1);
        Ok(())
    }

    #[test]
    fn non_finite_count_rejected_like_other_params() -> Result<()> {
        let mut ens = Ensemble::new(Params::default(), Some(6))?;
        let before = ens.particles().to_vec();
        for key in [Param::Count, Param::Mass] {
            let err = ens.set_param(key, f64::NAN).unwrap_err();
            assert!(err.to_string().contains(key.name()), "{err}");
        }
        assert_eq!(ens.len(), 150);
        assert_eq!(ens.particles(), &before[..]);
        assert_eq!(ens.set_param(Param::Count, -7.0)?, 1.0);
        Ok(())
    }

    #[test]
    fn set_non_count_param_keeps_particles() -> Result<()> {
        let mut ens = Ensemble::new(Params::default(), Some(4))?;
        let before = ens.particles().to_vec();
        assert_eq!(ens.set_param(Param::Restitution, 0.5)?, 0.5);
        assert_eq!(ens.particles(), &before[..]);
        Ok(())
    }
}
