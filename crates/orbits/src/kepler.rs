//! Anomaly conversions and the perifocal-to-inertial rotation.

use std::f64::consts::TAU;

use deflect_core::vector::Vector3;

/// Iteration cap for the Newton-Raphson Kepler solver.
pub const MAX_ITERATIONS: usize = 50;
/// Stop once a Newton step is smaller than this (rad).
pub const TOLERANCE: f64 = 1e-10;

/// Outcome of solving Kepler's equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: f64,
    pub iterations: usize,
    /// False when the iteration cap was reached first. The last iterate is still returned.
    pub converged: bool,
}

/// Reduce an angle (rad) into `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle_rad: f64) -> f64 {
    let reduced = angle_rad % TAU;
    if reduced >= 0.0 {
        return reduced;
    }
    // tiny negative remainders round up to exactly 2π
    let wrapped = reduced + TAU;
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Solve `M = E - e sin E` for `E` by Newton-Raphson starting from `E = M`.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> KeplerSolution {
    let mut ea = mean_anomaly;
    let mut iterations = 0;
    let mut converged = false;

    while iterations < MAX_ITERATIONS {
        let f = ea - e * ea.sin() - mean_anomaly;
        let fp = 1.0 - e * ea.cos();
        let delta = -f / fp;
        ea += delta;
        iterations += 1;
        if delta.abs() < TOLERANCE {
            converged = true;
            break;
        }
    }

    if !converged {
        tracing::warn!(
            mean_anomaly,
            eccentricity = e,
            eccentric_anomaly = ea,
            "kepler solver hit iteration cap; accepting last iterate"
        );
    }

    KeplerSolution {
        eccentric_anomaly: ea,
        iterations,
        converged,
    }
}

/// True anomaly (rad) from eccentric anomaly.
pub fn true_anomaly(eccentric_anomaly: f64, e: f64) -> f64 {
    let (sin_e, cos_e) = eccentric_anomaly.sin_cos();
    let denom = 1.0 - e * cos_e;
    let sin_nu = (1.0 - e * e).sqrt() * sin_e / denom;
    let cos_nu = (cos_e - e) / denom;
    sin_nu.atan2(cos_nu)
}

/// Rotation matrix `Rz(Ω)·Rx(i)·Rz(ω)` taking perifocal vectors into the inertial frame.
pub fn perifocal_rotation(inclination: f64, raan: f64, arg_perihelion: f64) -> [[f64; 3]; 3] {
    let (sin_o, cos_o) = raan.sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();
    let (sin_w, cos_w) = arg_perihelion.sin_cos();

    [
        [
            cos_o * cos_w - sin_o * sin_w * cos_i,
            -cos_o * sin_w - sin_o * cos_w * cos_i,
            sin_o * sin_i,
        ],
        [
            sin_o * cos_w + cos_o * sin_w * cos_i,
            -sin_o * sin_w + cos_o * cos_w * cos_i,
            -cos_o * sin_i,
        ],
        [sin_w * sin_i, cos_w * sin_i, cos_i],
    ]
}

/// Apply a 3×3 rotation to a vector.
#[inline]
pub fn rotate(m: &[[f64; 3]; 3], v: Vector3) -> Vector3 {
    Vector3::new(
        m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
        m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
        m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
    )
}

/// Rotate a perifocal vector into the inertial frame (angles in radians).
pub fn perifocal_to_inertial(
    v: Vector3,
    inclination: f64,
    raan: f64,
    arg_perihelion: f64,
) -> Vector3 {
    rotate(&perifocal_rotation(inclination, raan, arg_perihelion), v)
}
