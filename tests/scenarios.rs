use idealgas::core::{boundary, contact, integrator, Params, Particle, Simulation};
use idealgas::error::Result;

/// Two overlapping particles approaching head-on swap velocities under one elastic pass.
#[test]
fn head_on_pair_swaps_along_normal() -> Result<()> {
    let params = Params {
        count: 2,
        radius: 0.5,
        restitution: 1.0,
        mass: 1.0,
        ..Params::default()
    };
    let mut sim = Simulation::new(params, Some(1))?;
    {
        let ps = sim.particles_mut();
        ps[0] = Particle::new([-0.4, 0.0, 0.0], [1.0, 0.0, 0.0])?;
        ps[1] = Particle::new([0.4, 0.0, 0.0], [-1.0, 0.0, 0.0])?;
    }
    let p = *sim.params();
    let resolved = contact::resolve(sim.particles_mut(), p.radius, p.restitution);
    assert_eq!(resolved, 1);

    let v = sim.velocities();
    let expect = [[-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
    for (got, want) in v.iter().zip(expect.iter()) {
        for k in 0..3 {
            assert!((got[k] - want[k]).abs() < 1e-6, "{got:?} vs {want:?}");
        }
    }
    Ok(())
}

/// Drift past the wall, then clamp and damp by the restitution.
#[test]
fn wall_clamp_with_restitution() -> Result<()> {
    let params = Params {
        count: 1,
        half_extent: 1.0,
        restitution: 0.5,
        timestep: 0.1,
        ..Params::default()
    };
    let mut sim = Simulation::new(params, Some(2))?;
    sim.particles_mut()[0] = Particle::new([0.99, 0.0, 0.0], [1.0, 0.0, 0.0])?;
    let p = *sim.params();

    integrator::step(sim.particles_mut(), p.timestep);
    assert!((sim.positions()[0][0] - 1.09).abs() < 1e-12);

    let hits = boundary::reflect(sim.particles_mut(), p.half_extent, p.restitution);
    assert_eq!(hits, 1);
    assert_eq!(sim.positions()[0], [1.0, 0.0, 0.0]);
    assert!((sim.velocities()[0][0] + 0.5).abs() < 1e-12);
    Ok(())
}

/// Energy over a whole tick: the thermostat fixes it, inelastic contacts can only remove it.
#[test]
fn inelastic_contacts_never_add_energy() -> Result<()> {
    let params = Params {
        count: 300,
        radius: 0.08,
        restitution: 0.3,
        ..Params::default()
    };
    let mut sim = Simulation::new(params, Some(4242))?;
    let mut saw_contacts = false;
    for _ in 0..50 {
        sim.tick()?;
        saw_contacts |= sim.contacts_last_tick() > 0;
        // Post-thermostat energy is N * m * T / 2; walls and contacts only dissipate.
        let ceiling = 0.5 * 300.0 * sim.params().temperature;
        assert!(
            sim.kinetic_energy() <= ceiling + 1e-9,
            "E={} above thermostat level {ceiling}",
            sim.kinetic_energy()
        );
    }
    assert!(saw_contacts, "dense gas should produce contacts");
    Ok(())
}

/// Same seed and parameters give bit-identical trajectories.
#[test]
fn ticks_are_deterministic() -> Result<()> {
    let mut a = Simulation::with_defaults(Some(123))?;
    let mut b = Simulation::with_defaults(Some(123))?;
    a.step(40)?;
    b.step(40)?;
    assert_eq!(a.particles(), b.particles());
    assert_eq!(a.pressure(), b.pressure());
    Ok(())
}
