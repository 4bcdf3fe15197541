use asteroid_deflection::impulsive::{
    DeflectionError, KineticImpactor, deflect, deflect_about, impact_summary,
    kinetic_impactor_delta_v,
};
use asteroid_deflection::orbits::{CentralBody, OrbitalElements, propagate};

const MU_SUN: f64 = 1.327_124_400_18e20; // m^3 / s^2
const AU_M: f64 = 1.495_978_707e11; // m

fn midas() -> OrbitalElements {
    OrbitalElements::new(1.7759, 0.6502, 39.833, 356.90, 267.80, 256.48, 2_458_000.5)
        .expect("midas elements")
}

fn midas_impactor() -> KineticImpactor {
    KineticImpactor {
        probe_count: 50,
        probe_mass_kg: 10_000.0,
        impact_speed_m_s: 10_000.0,
        beta: 2.5,
    }
}

#[test]
fn zero_delta_v_leaves_semi_major_axis_unchanged() {
    let elements = midas();
    for &years in &[0.0, 2.5, 11.0, -4.0] {
        let deflected = deflect(&elements, years, 0.0).unwrap();
        let rel = (deflected.semi_major_axis_au - elements.semi_major_axis_au).abs()
            / elements.semi_major_axis_au;
        assert!(rel < 1e-9, "years = {years}, rel = {rel}");
    }
}

#[test]
fn midas_scenario_raises_semi_major_axis_slightly() {
    let elements = midas();
    let deflected = deflect(&elements, 11.0, 0.00125).unwrap();
    let da = deflected.semi_major_axis_au - elements.semi_major_axis_au;
    assert!(da > 0.0, "da = {da}");
    assert!(da < 1e-4, "da = {da}");

    let summary = impact_summary(&elements, 0.00125, 11.0).unwrap();
    assert_eq!(summary.delta_v_m_s, 0.00125);
    assert!(summary.delta_period_days > 0.0);
    assert!(summary.delta_period_days < 0.1);

    // reproducible bit for bit
    let again = impact_summary(&elements, 0.00125, 11.0).unwrap();
    assert_eq!(summary, again);
}

#[test]
fn deflection_matches_linearised_vis_viva() {
    let elements = midas();
    let dv = 0.00125;
    let state = propagate(&elements, elements.epoch_jd + 11.0 * 365.25).unwrap();
    let a = elements.semi_major_axis_au * AU_M;
    // d(1/a) = -2 v dv / μ  =>  da ≈ 2 a² v dv / μ
    let expected_da_au = 2.0 * a * a * state.speed_m_s() * dv / MU_SUN / AU_M;
    let deflected = deflect(&elements, 11.0, dv).unwrap();
    let da_au = deflected.semi_major_axis_au - elements.semi_major_axis_au;
    assert!(
        (da_au - expected_da_au).abs() / expected_da_au < 1e-3,
        "da = {da_au}, expected = {expected_da_au}"
    );
}

#[test]
fn retrograde_burn_shrinks_orbit() {
    let elements = midas();
    let deflected = deflect(&elements, 11.0, -0.5).unwrap();
    assert!(deflected.semi_major_axis_au < elements.semi_major_axis_au);
    let summary = impact_summary(&elements, -0.5, 11.0).unwrap();
    assert!(summary.delta_period_days < 0.0);
}

#[test]
fn other_elements_are_carried_over() {
    let elements = midas();
    let deflected = deflect(&elements, 11.0, 0.00125).unwrap();
    assert_eq!(deflected.eccentricity, elements.eccentricity);
    assert_eq!(deflected.inclination_deg, elements.inclination_deg);
    assert_eq!(deflected.ascending_node_deg, elements.ascending_node_deg);
    assert_eq!(deflected.argument_perihelion_deg, elements.argument_perihelion_deg);
    assert_eq!(deflected.mean_anomaly_deg, elements.mean_anomaly_deg);
    assert_eq!(deflected.epoch_jd, elements.epoch_jd);
    // the input is never modified
    assert_eq!(elements, midas());
}

#[test]
fn escape_burn_is_degenerate() {
    let elements = midas();
    let result = deflect(&elements, 11.0, 100_000.0);
    assert!(matches!(result, Err(DeflectionError::DegenerateState(_))));
    assert!(impact_summary(&elements, 100_000.0, 11.0).is_err());
}

#[test]
fn invalid_inputs_are_rejected() {
    let mut elements = midas();
    assert!(matches!(
        deflect(&elements, f64::NAN, 0.001),
        Err(DeflectionError::InvalidInput(_))
    ));
    assert!(matches!(
        deflect(&elements, 1.0, f64::INFINITY),
        Err(DeflectionError::InvalidInput(_))
    ));
    elements.semi_major_axis_au = -1.0;
    assert!(matches!(
        deflect(&elements, 1.0, 0.001),
        Err(DeflectionError::InvalidInput(_))
    ));
}

#[test]
fn deflection_about_custom_body_uses_its_constants() {
    let elements = midas();
    let sun = deflect_about(&elements, &CentralBody::SUN, 3.0, 1.0).unwrap();
    let default = deflect(&elements, 3.0, 1.0).unwrap();
    assert_eq!(sun, default);
}

#[test]
fn midas_impactor_salvo_delivers_mission_delta_v() {
    let impactor = midas_impactor();
    assert_eq!(impactor.momentum_kg_m_s(), 5.0e9);
    let dv = impactor.delta_v(1.0e13).unwrap();
    assert!((dv - 0.00125).abs() < 1e-15, "dv = {dv}");
    assert!(kinetic_impactor_delta_v(&impactor, 0.0).is_err());

    let mut bad = impactor;
    bad.beta = -1.0;
    assert!(bad.delta_v(1.0e13).is_err());
}
