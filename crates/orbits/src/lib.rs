//! Two-body Keplerian propagation of heliocentric element sets.
//!
//! Element sets are validated against the elliptical-orbit contract before any
//! computation, and every function here is pure: the same elements and Julian
//! Date always produce the same state.

pub mod elements;
pub mod kepler;

use deflect_core::time::days_to_seconds;
use deflect_core::units::deg_to_rad;
use deflect_core::vector::Vector3;

pub use elements::{CentralBody, OrbitError, OrbitalElements, OrbitalState};
pub use kepler::{
    KeplerSolution, normalize_angle, perifocal_to_inertial, solve_kepler, true_anomaly,
};

/// Mean anomaly (rad, in `[0, 2π)`) reached at `target_jd`.
pub fn mean_anomaly_at(elements: &OrbitalElements, body: &CentralBody, target_jd: f64) -> f64 {
    let dt_seconds = days_to_seconds(target_jd - elements.epoch_jd);
    let m0 = deg_to_rad(elements.mean_anomaly_deg);
    normalize_angle(m0 + elements.mean_motion(body) * dt_seconds)
}

/// Propagate heliocentric elements to `target_jd` about the Sun.
pub fn propagate(elements: &OrbitalElements, target_jd: f64) -> Result<OrbitalState, OrbitError> {
    propagate_about(elements, &CentralBody::SUN, target_jd)
}

/// Propagate elements to `target_jd` about an arbitrary central body.
pub fn propagate_about(
    elements: &OrbitalElements,
    body: &CentralBody,
    target_jd: f64,
) -> Result<OrbitalState, OrbitError> {
    elements.validate()?;
    if !target_jd.is_finite() {
        return Err(OrbitError::InvalidInput(format!(
            "target Julian Date {target_jd} is not finite"
        )));
    }

    let inclination = deg_to_rad(elements.inclination_deg);
    let raan = deg_to_rad(elements.ascending_node_deg);
    let arg_perihelion = deg_to_rad(elements.argument_perihelion_deg);

    let a = elements.semi_major_axis_m(body);
    let mu = body.mu_m3_s2;
    let e = elements.eccentricity;

    let mean_anomaly = mean_anomaly_at(elements, body, target_jd);
    let solution = solve_kepler(mean_anomaly, e);
    let ea = solution.eccentric_anomaly;
    let nu = true_anomaly(ea, e);

    let r = a * (1.0 - e * ea.cos());
    let p = a * (1.0 - e * e);
    let (sin_nu, cos_nu) = nu.sin_cos();
    let radial_rate = (mu / p).sqrt() * e * sin_nu;
    let transverse_rate = (mu / p).sqrt() * (1.0 + e * cos_nu);

    let r_pf = Vector3::new(r * cos_nu, r * sin_nu, 0.0);
    let v_pf = Vector3::new(
        radial_rate * cos_nu - transverse_rate * sin_nu,
        radial_rate * sin_nu + transverse_rate * cos_nu,
        0.0,
    );

    let rotation = kepler::perifocal_rotation(inclination, raan, arg_perihelion);
    let state = OrbitalState {
        position_m: kepler::rotate(&rotation, r_pf),
        velocity_m_s: kepler::rotate(&rotation, v_pf),
        julian_date: target_jd,
    };

    tracing::trace!(
        target_jd,
        mean_anomaly,
        eccentric_anomaly = ea,
        iterations = solution.iterations,
        radius_m = r,
        "propagated state"
    );

    Ok(state)
}

/// Upper bound on the number of states a single sampling call may produce.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Sample states every `step_days` from `start_jd` to `end_jd` inclusive.
///
/// The final sample lands exactly on `end_jd` even if the step does not divide the span.
pub fn sample_trajectory(
    elements: &OrbitalElements,
    body: &CentralBody,
    start_jd: f64,
    end_jd: f64,
    step_days: f64,
) -> Result<Vec<OrbitalState>, OrbitError> {
    if !step_days.is_finite() || step_days <= 0.0 {
        return Err(OrbitError::InvalidInput(format!(
            "sample step must be positive, got {step_days} days"
        )));
    }
    if !start_jd.is_finite() || !end_jd.is_finite() || end_jd < start_jd {
        return Err(OrbitError::InvalidInput(format!(
            "invalid sample window [{start_jd}, {end_jd}]"
        )));
    }

    let steps = ((end_jd - start_jd) / step_days).floor();
    if !steps.is_finite() || steps >= MAX_SAMPLES as f64 {
        return Err(OrbitError::InvalidInput(format!(
            "step of {step_days} days over [{start_jd}, {end_jd}] exceeds {MAX_SAMPLES} samples"
        )));
    }
    let steps = steps as usize;
    let mut states = Vec::with_capacity(steps + 2);
    for k in 0..=steps {
        let jd = start_jd + step_days * k as f64;
        states.push(propagate_about(elements, body, jd)?);
    }
    if states.last().is_some_and(|s| end_jd - s.julian_date > 1e-9) {
        states.push(propagate_about(elements, body, end_jd)?);
    }
    Ok(states)
}
