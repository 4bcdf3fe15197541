use asteroid_deflection::orbits::{
    CentralBody, OrbitError, OrbitalElements, mean_anomaly_at, normalize_angle, propagate,
    propagate_about, sample_trajectory, solve_kepler,
};

const MU_SUN: f64 = 1.327_124_400_18e20; // m^3 / s^2
const AU_M: f64 = 1.495_978_707e11; // m

fn midas() -> OrbitalElements {
    OrbitalElements::new(1.7759, 0.6502, 39.833, 356.90, 267.80, 256.48, 2_458_000.5)
        .expect("midas elements")
}

#[test]
fn circular_orbit_keeps_constant_radius() {
    let elements = OrbitalElements::new(1.0, 0.0, 12.0, 40.0, 75.0, 10.0, 2_451_545.0).unwrap();
    for k in -10..40 {
        let jd = elements.epoch_jd + 37.3 * k as f64;
        let state = propagate(&elements, jd).unwrap();
        let rel = (state.radius_m() - AU_M).abs() / AU_M;
        assert!(rel < 1e-12, "jd = {jd}, rel = {rel}");
    }
}

#[test]
fn circular_equatorial_orbit_at_epoch_sits_on_x_axis() {
    let elements = OrbitalElements::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2_451_545.0).unwrap();
    let state = propagate(&elements, elements.epoch_jd).unwrap();
    assert!((state.position_m.x - AU_M).abs() < 1e-3);
    assert!(state.position_m.y.abs() < 1e-3);
    let v_circ = (MU_SUN / AU_M).sqrt();
    assert!(state.velocity_m_s.x.abs() < 1e-9);
    assert!((state.velocity_m_s.y - v_circ).abs() < 1e-9);
    assert!(state.velocity_m_s.z.abs() < 1e-12);
}

#[test]
fn epoch_state_matches_initial_mean_anomaly() {
    let elements = midas();
    let m = mean_anomaly_at(&elements, &CentralBody::SUN, elements.epoch_jd);
    let m0 = normalize_angle(elements.mean_anomaly_deg.to_radians());
    assert!((m - m0).abs() < 1e-12);

    let e0 = solve_kepler(m0, elements.eccentricity).eccentric_anomaly;
    let expected_r = elements.semi_major_axis_au * AU_M * (1.0 - elements.eccentricity * e0.cos());
    let state = propagate(&elements, elements.epoch_jd).unwrap();
    assert!((state.radius_m() - expected_r).abs() / expected_r < 1e-12);
    assert_eq!(state.julian_date, elements.epoch_jd);
}

#[test]
fn vis_viva_holds_along_the_orbit() {
    let elements = midas();
    let a = elements.semi_major_axis_au * AU_M;
    for k in -5..30 {
        let jd = elements.epoch_jd + 61.0 * k as f64;
        let state = propagate(&elements, jd).unwrap();
        let v2 = state.velocity_m_s.dot(&state.velocity_m_s);
        let expected = MU_SUN * (2.0 / state.radius_m() - 1.0 / a);
        assert!(
            (v2 - expected).abs() / expected < 1e-10,
            "jd = {jd}, v2 = {v2}, expected = {expected}"
        );
    }
}

#[test]
fn radius_stays_between_apsides() {
    let elements = midas();
    let a = elements.semi_major_axis_au * AU_M;
    let e = elements.eccentricity;
    let states = sample_trajectory(
        &elements,
        &CentralBody::SUN,
        elements.epoch_jd,
        elements.epoch_jd + 1_000.0,
        7.0,
    )
    .unwrap();
    for state in states {
        let r = state.radius_m();
        assert!(r >= a * (1.0 - e) * (1.0 - 1e-12));
        assert!(r <= a * (1.0 + e) * (1.0 + 1e-12));
    }
}

#[test]
fn propagation_is_deterministic_and_periodic() {
    let elements = midas();
    let jd = elements.epoch_jd + 4_017.75;
    let s1 = propagate(&elements, jd).unwrap();
    let s2 = propagate(&elements, jd).unwrap();
    assert_eq!(s1, s2);

    let period_days = elements.orbital_period_seconds(&CentralBody::SUN) / 86_400.0;
    let s3 = propagate(&elements, jd + period_days).unwrap();
    let diff = (s3.position_m - s1.position_m).norm();
    assert!(diff / s1.radius_m() < 1e-6, "diff = {diff} m");
}

#[test]
fn period_follows_keplers_third_law() {
    let elements = midas();
    let seconds = elements.orbital_period_seconds(&CentralBody::SUN);
    let years = seconds / 86_400.0 / 365.25;
    // normalised a^1.5 ignores the small offset between the Gaussian and Julian year
    assert!((years - elements.period_years()).abs() / years < 1e-3);
    assert!((elements.period_years() - 2.3666).abs() < 1e-3);
}

#[test]
fn propagation_runs_backwards_in_time() {
    let elements = midas();
    let state = propagate(&elements, elements.epoch_jd - 3_650.0).unwrap();
    assert!(state.radius_m() > 0.0);
    assert_eq!(state.julian_date, elements.epoch_jd - 3_650.0);
}

#[test]
fn invalid_elements_are_rejected() {
    assert!(matches!(
        OrbitalElements::new(1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 2_451_545.0),
        Err(OrbitError::InvalidInput(_))
    ));
    assert!(matches!(
        OrbitalElements::new(1.0, -0.1, 0.0, 0.0, 0.0, 0.0, 2_451_545.0),
        Err(OrbitError::InvalidInput(_))
    ));
    assert!(matches!(
        OrbitalElements::new(0.0, 0.2, 0.0, 0.0, 0.0, 0.0, 2_451_545.0),
        Err(OrbitError::InvalidInput(_))
    ));

    // fields are public, so propagation re-validates
    let mut hyperbolic = midas();
    hyperbolic.eccentricity = 1.3;
    assert!(matches!(
        propagate(&hyperbolic, 2_458_000.5),
        Err(OrbitError::InvalidInput(_))
    ));
    assert!(propagate(&midas(), f64::NAN).is_err());
}

#[test]
fn custom_central_body_scales_mean_motion() {
    let elements = midas();
    let heavy = CentralBody {
        mu_m3_s2: 4.0 * MU_SUN,
        au_m: AU_M,
    };
    let n_sun = elements.mean_motion(&CentralBody::SUN);
    let n_heavy = elements.mean_motion(&heavy);
    assert!((n_heavy / n_sun - 2.0).abs() < 1e-12);
    assert!(propagate_about(&elements, &heavy, elements.epoch_jd + 10.0).is_ok());
}

#[test]
fn sample_trajectory_includes_window_end() {
    let elements = midas();
    let start = elements.epoch_jd;
    let states = sample_trajectory(&elements, &CentralBody::SUN, start, start + 10.0, 3.0).unwrap();
    let jds: Vec<f64> = states.iter().map(|s| s.julian_date - start).collect();
    assert_eq!(jds, vec![0.0, 3.0, 6.0, 9.0, 10.0]);

    let single = sample_trajectory(&elements, &CentralBody::SUN, start, start, 1.0).unwrap();
    assert_eq!(single.len(), 1);

    assert!(sample_trajectory(&elements, &CentralBody::SUN, start, start + 1.0, 0.0).is_err());
    assert!(sample_trajectory(&elements, &CentralBody::SUN, start + 1.0, start, 1.0).is_err());
}

#[test]
fn sample_trajectory_rejects_steps_too_small_for_the_window() {
    let elements = midas();
    let start = elements.epoch_jd;
    for step in [1e-300, 1e-6] {
        let result = sample_trajectory(&elements, &CentralBody::SUN, start, start + 10.0, step);
        assert!(
            matches!(result, Err(OrbitError::InvalidInput(_))),
            "step {step}"
        );
    }

    // a zero-length window needs only one sample whatever the step
    let single = sample_trajectory(&elements, &CentralBody::SUN, start, start, 1e-300).unwrap();
    assert_eq!(single.len(), 1);
}
