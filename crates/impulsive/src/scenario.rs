//! End-to-end evaluation of a kinetic deflection mission.

use deflect_orbits::{CentralBody, OrbitalElements};

use crate::DeflectionError;
use crate::deflection::{ImpactSummary, deflect_about};
use crate::impactor::KineticImpactor;

/// Where the ΔV of a mission comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeltaVSource {
    /// A fixed, pre-computed ΔV (m/s).
    Fixed(f64),
    /// Derived from the impactor salvo and the target mass.
    Impactor(KineticImpactor),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeflectionScenario {
    pub name: String,
    pub elements: OrbitalElements,
    pub body: CentralBody,
    pub asteroid_mass_kg: f64,
    pub delta_v: DeltaVSource,
    /// Burn epoch, in Julian years after the element epoch.
    pub years_to_impact: f64,
    /// Span of the comparison window, in years after the element epoch.
    pub window_years: f64,
}

/// Baseline and deflected orbits of a scenario with its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct DeflectionOutcome {
    pub baseline: OrbitalElements,
    pub deflected: OrbitalElements,
    pub summary: ImpactSummary,
}

impl DeflectionScenario {
    pub fn delta_v_m_s(&self) -> Result<f64, DeflectionError> {
        match &self.delta_v {
            DeltaVSource::Fixed(dv) => Ok(*dv),
            DeltaVSource::Impactor(impactor) => impactor.delta_v(self.asteroid_mass_kg),
        }
    }

    pub fn deflected_elements(&self) -> Result<OrbitalElements, DeflectionError> {
        deflect_about(
            &self.elements,
            &self.body,
            self.years_to_impact,
            self.delta_v_m_s()?,
        )
    }

    pub fn evaluate(&self) -> Result<DeflectionOutcome, DeflectionError> {
        let dv = self.delta_v_m_s()?;
        let deflected = deflect_about(&self.elements, &self.body, self.years_to_impact, dv)?;
        let summary = ImpactSummary::between(&self.elements, &deflected, dv);
        tracing::info!(
            scenario = %self.name,
            delta_v_m_s = dv,
            delta_period_days = summary.delta_period_days,
            "evaluated deflection scenario"
        );
        Ok(DeflectionOutcome {
            baseline: self.elements,
            deflected,
            summary,
        })
    }
}
