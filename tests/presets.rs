use idealgas::core::{Param, Params, Simulation};
use idealgas::error::Result;

/// Partial presets fill in defaults; out-of-domain values are clamped on construction.
#[test]
fn partial_preset_is_sanitized() -> Result<()> {
    let raw: Params = serde_json::from_str(r#"{ "count": 40, "restitution": 1.5, "mass": -2.0 }"#)
        .map_err(|e| idealgas::Error::InvalidParam(e.to_string()))?;
    assert_eq!(raw.radius, Params::default().radius);

    let sim = Simulation::new(raw, Some(1))?;
    assert_eq!(sim.num_particles(), 40);
    assert_eq!(sim.params().restitution, 1.0);
    assert!(sim.params().mass > 0.0);
    Ok(())
}

/// Parameter keys serialize under their canonical names, which also parse back.
#[test]
fn param_keys_use_canonical_names() -> Result<()> {
    for key in Param::ALL {
        let json = serde_json::to_string(&key)
            .map_err(|e| idealgas::Error::InvalidParam(e.to_string()))?;
        assert_eq!(json, format!("\"{}\"", key.name()));
        assert_eq!(key.name().parse::<Param>()?, key);
    }
    Ok(())
}
