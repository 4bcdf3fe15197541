//! Kinetic-impactor momentum transfer.

use serde::{Deserialize, Serialize};

use crate::DeflectionError;

/// A salvo of identical probes striking the target at the same epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticImpactor {
    pub probe_count: u32,
    pub probe_mass_kg: f64,
    pub impact_speed_m_s: f64,
    /// Momentum enhancement factor from ejecta (1 = perfectly inelastic).
    pub beta: f64,
}

impl KineticImpactor {
    /// Total momentum carried by the salvo (kg·m/s), before ejecta enhancement.
    pub fn momentum_kg_m_s(&self) -> f64 {
        f64::from(self.probe_count) * self.probe_mass_kg * self.impact_speed_m_s
    }

    /// ΔV imparted to a target of `asteroid_mass_kg`: `N·m·v·β / M`.
    pub fn delta_v(&self, asteroid_mass_kg: f64) -> Result<f64, DeflectionError> {
        kinetic_impactor_delta_v(self, asteroid_mass_kg)
    }
}

pub fn kinetic_impactor_delta_v(
    impactor: &KineticImpactor,
    asteroid_mass_kg: f64,
) -> Result<f64, DeflectionError> {
    if !asteroid_mass_kg.is_finite() || asteroid_mass_kg <= 0.0 {
        return Err(DeflectionError::InvalidInput(format!(
            "asteroid mass must be positive, got {asteroid_mass_kg} kg"
        )));
    }
    let params = [
        impactor.probe_mass_kg,
        impactor.impact_speed_m_s,
        impactor.beta,
    ];
    if params.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(DeflectionError::InvalidInput(
            "impactor mass, speed and beta must be finite and non-negative".to_string(),
        ));
    }
    Ok(impactor.momentum_kg_m_s() * impactor.beta / asteroid_mass_kg)
}
