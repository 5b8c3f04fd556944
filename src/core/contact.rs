//! Pairwise hard-sphere contact resolution.
//!
//! Exhaustive O(N^2) scan over unordered pairs in ascending `(i, j)` order. Each resolved
//! pair writes its new velocities straight back into the arena, so a later pair in the
//! same pass sees them. The aggregate result for a particle touching several neighbours
//! therefore depends on that order, and the order is part of the contract.
//!
//! Only velocities change. Overlapping spheres are not pushed apart; they separate once
//! their relative motion carries them out of contact.

use crate::core::particle::{dot, Particle, DIM};

/// Added to the centre distance before normalising, so coincident centres give a zero
/// normal (and therefore a skipped pair) instead of a division by zero.
pub const NORMAL_EPS: f64 = 1e-8;

/// Resolve one candidate pair in place. Returns `true` if an impulse was applied.
///
/// `n` points from `j` to `i`. Pairs with `vn >= 0` are separating (or resting) and are
/// left alone; otherwise the equal-mass impulse `J = -(1 + e) vn / 2` is applied along `n`.
#[inline]
pub fn resolve_pair(
    pi: &mut Particle,
    pj: &mut Particle,
    contact_dist: f64,
    restitution: f64,
) -> bool {
    let mut d = [0.0_f64; DIM];
    for (dk, (&ri, &rj)) in d.iter_mut().zip(pi.r.iter().zip(pj.r.iter())) {
        *dk = ri - rj;
    }
    let dist = dot(&d, &d).sqrt();
    if dist >= contact_dist {
        return false;
    }

    let mut n = d;
    n.iter_mut().for_each(|c| *c /= dist + NORMAL_EPS);

    let mut u = [0.0_f64; DIM];
    for (uk, (&vi, &vj)) in u.iter_mut().zip(pi.v.iter().zip(pj.v.iter())) {
        *uk = vi - vj;
    }
    let vn = dot(&u, &n);
    if vn >= 0.0 {
        return false;
    }

    let impulse = -(1.0 + restitution) * vn / 2.0;
    for (k, &nk) in n.iter().enumerate() {
        pi.v[k] += impulse * nk;
        pj.v[k] -= impulse * nk;
    }
    true
}

/// Scan every unordered pair and resolve contacts closer than `2 * radius`.
///
/// Returns the number of pairs that received an impulse.
pub fn resolve(particles: &mut [Particle], radius: f64, restitution: f64) -> usize {
    let contact_dist = 2.0 * radius;
    let mut resolved = 0usize;
    for i in 0..particles.len() {
        // Split so `i` and every `j > i` can be borrowed mutably at once.
        let (head, tail) = particles.split_at_mut(i + 1);
        let pi = &mut head[i];
        for pj in tail.iter_mut() {
            if resolve_pair(pi, pj, contact_dist, restitution) {
                resolved += 1;
            }
        }
    }
    resolved
}
