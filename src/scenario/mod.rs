use std::path::Path;

use deflect_config::{ConfigError, ScenarioConfig, load_scenario};
use deflect_impulsive::{DeflectionScenario, DeltaVSource, KineticImpactor};
use deflect_orbits::{CentralBody, OrbitError, OrbitalElements};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("scenario '{name}': {source}")]
    Elements {
        name: String,
        #[source]
        source: OrbitError,
    },
    #[error("scenario '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

/// Load a scenario file, or fall back to the built-in Midas scenario when `path` is `None`.
pub fn load(path: Option<&Path>, name: Option<&str>) -> Result<DeflectionScenario, ScenarioError> {
    let config = match path {
        Some(path) => load_scenario(path, name)?,
        None => ScenarioConfig::midas(),
    };
    from_config(config)
}

/// Validate a scenario record and build the runtime scenario from it.
pub fn from_config(value: ScenarioConfig) -> Result<DeflectionScenario, ScenarioError> {
    let asteroid = &value.asteroid;
    let elements = OrbitalElements::new(
        asteroid.semi_major_axis_au,
        asteroid.eccentricity,
        asteroid.inclination_deg,
        asteroid.ascending_node_deg,
        asteroid.argument_perihelion_deg,
        asteroid.mean_anomaly_deg,
        asteroid.epoch_jd,
    )
    .map_err(|source| ScenarioError::Elements {
        name: value.name.clone(),
        source,
    })?;

    let invalid = |reason: &str| ScenarioError::Invalid {
        name: value.name.clone(),
        reason: reason.to_string(),
    };

    let body = value.central_body;
    if !(body.mu_m3_s2 > 0.0 && body.au_m > 0.0) {
        return Err(invalid("central body constants must be positive"));
    }
    let mission = &value.mission;
    if !mission.years_to_impact.is_finite() {
        return Err(invalid("years_to_impact must be finite"));
    }
    if !(mission.deflection_window_years.is_finite() && mission.deflection_window_years > 0.0) {
        return Err(invalid("deflection_window_years must be positive"));
    }

    let delta_v = match mission.delta_v_m_s {
        Some(dv) => DeltaVSource::Fixed(dv),
        None => DeltaVSource::Impactor(KineticImpactor {
            probe_count: mission.probe_count,
            probe_mass_kg: mission.probe_mass_kg,
            impact_speed_m_s: mission.impact_speed_m_s,
            beta: mission.beta,
        }),
    };

    Ok(DeflectionScenario {
        name: value.name.clone(),
        elements,
        body: CentralBody {
            mu_m3_s2: body.mu_m3_s2,
            au_m: body.au_m,
        },
        asteroid_mass_kg: asteroid.mass_kg,
        delta_v,
        years_to_impact: mission.years_to_impact,
        window_years: mission.deflection_window_years,
    })
}
