//! Tangential ΔV applied at a burn epoch and the resulting semi-major axis change.
//!
//! The burn is instantaneous and leaves the position untouched. Only the semi-major
//! axis is re-derived (vis-viva); eccentricity, orientation, mean anomaly at epoch and
//! the epoch itself are carried over from the baseline elements. A real impulse would
//! also perturb those, so the result is a first-order picture of the deflection.

use deflect_core::constants::DAYS_PER_YEAR;
use deflect_core::time::jd_after_years;
use deflect_orbits::{CentralBody, OrbitalElements, propagate_about};
use serde::Serialize;

use crate::DeflectionError;

/// ΔV delivered and the resulting change in orbital period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactSummary {
    pub delta_v_m_s: f64,
    pub delta_period_days: f64,
}

impl ImpactSummary {
    /// Period change between two element sets already related by a burn of `delta_v_m_s`.
    pub fn between(
        baseline: &OrbitalElements,
        deflected: &OrbitalElements,
        delta_v_m_s: f64,
    ) -> Self {
        Self {
            delta_v_m_s,
            delta_period_days: (deflected.period_years() - baseline.period_years())
                * DAYS_PER_YEAR,
        }
    }
}

/// Deflect heliocentric elements with a tangential burn `years_since_epoch` after epoch.
pub fn deflect(
    elements: &OrbitalElements,
    years_since_epoch: f64,
    delta_v_m_s: f64,
) -> Result<OrbitalElements, DeflectionError> {
    deflect_about(elements, &CentralBody::SUN, years_since_epoch, delta_v_m_s)
}

/// Apply `delta_v_m_s` along the velocity vector and re-derive the semi-major axis.
pub fn deflect_about(
    elements: &OrbitalElements,
    body: &CentralBody,
    years_since_epoch: f64,
    delta_v_m_s: f64,
) -> Result<OrbitalElements, DeflectionError> {
    if !years_since_epoch.is_finite() {
        return Err(DeflectionError::InvalidInput(format!(
            "burn time {years_since_epoch} years is not finite"
        )));
    }
    if !delta_v_m_s.is_finite() {
        return Err(DeflectionError::InvalidInput(format!(
            "delta-v {delta_v_m_s} m/s is not finite"
        )));
    }

    let burn_jd = jd_after_years(elements.epoch_jd, years_since_epoch);
    let state = propagate_about(elements, body, burn_jd)?;

    let speed = state.speed_m_s();
    if speed <= 0.0 {
        return Err(DeflectionError::DegenerateState(
            "zero velocity at burn point; tangential direction undefined".to_string(),
        ));
    }

    let v_hat = state.velocity_m_s.normalize();
    let v_new = state.velocity_m_s + v_hat * delta_v_m_s;
    let r = state.radius_m();

    // vis-viva: 1/a = 2/r - v²/μ
    let inv_a = 2.0 / r - v_new.dot(&v_new) / body.mu_m3_s2;
    if !inv_a.is_finite() || inv_a <= 0.0 {
        return Err(DeflectionError::DegenerateState(format!(
            "post-burn trajectory is not a bound ellipse (1/a = {inv_a:e} 1/m)"
        )));
    }

    let deflected = elements.with_semi_major_axis_au(1.0 / inv_a / body.au_m);
    tracing::debug!(
        burn_jd,
        delta_v_m_s,
        speed_m_s = speed,
        radius_m = r,
        a_old_au = elements.semi_major_axis_au,
        a_new_au = deflected.semi_major_axis_au,
        "applied tangential impulse"
    );
    Ok(deflected)
}

/// Summarise a deflection performed `years_to_impact` after epoch.
pub fn impact_summary(
    elements: &OrbitalElements,
    delta_v_m_s: f64,
    years_to_impact: f64,
) -> Result<ImpactSummary, DeflectionError> {
    impact_summary_about(elements, &CentralBody::SUN, delta_v_m_s, years_to_impact)
}

/// Period change uses `T = a^1.5` (years, AU), so it is only meaningful for solar orbits.
pub fn impact_summary_about(
    elements: &OrbitalElements,
    body: &CentralBody,
    delta_v_m_s: f64,
    years_to_impact: f64,
) -> Result<ImpactSummary, DeflectionError> {
    let deflected = deflect_about(elements, body, years_to_impact, delta_v_m_s)?;
    Ok(ImpactSummary::between(elements, &deflected, delta_v_m_s))
}
