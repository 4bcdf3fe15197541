//! Classical element sets, propagated states, and the attracting body.

use deflect_core::constants::{AU_M, GM_SUN_M3_S2};
use deflect_core::vector::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when an element set cannot describe a bound ellipse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    #[error("invalid orbital elements: {0}")]
    InvalidInput(String),
}

/// Gravitational parameter and length scale of the central body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentralBody {
    pub mu_m3_s2: f64,
    /// Metres per astronomical unit, used to convert the semi-major axis.
    pub au_m: f64,
}

impl CentralBody {
    pub const SUN: CentralBody = CentralBody {
        mu_m3_s2: GM_SUN_M3_S2,
        au_m: AU_M,
    };
}

/// Heliocentric Keplerian elements. Angles are degrees; the semi-major axis is in AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub ascending_node_deg: f64,
    pub argument_perihelion_deg: f64,
    pub mean_anomaly_deg: f64,
    pub epoch_jd: f64,
}

impl OrbitalElements {
    /// Build a validated element set.
    pub fn new(
        semi_major_axis_au: f64,
        eccentricity: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
        argument_perihelion_deg: f64,
        mean_anomaly_deg: f64,
        epoch_jd: f64,
    ) -> Result<Self, OrbitError> {
        let elements = Self {
            semi_major_axis_au,
            eccentricity,
            inclination_deg,
            ascending_node_deg,
            argument_perihelion_deg,
            mean_anomaly_deg,
            epoch_jd,
        };
        elements.validate()?;
        Ok(elements)
    }

    /// Check the elliptical-orbit contract: `a > 0`, `0 <= e < 1`, every field finite.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let fields = [
            ("semi-major axis", self.semi_major_axis_au),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination_deg),
            ("ascending node", self.ascending_node_deg),
            ("argument of perihelion", self.argument_perihelion_deg),
            ("mean anomaly", self.mean_anomaly_deg),
            ("epoch", self.epoch_jd),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(OrbitError::InvalidInput(format!("{name} is not finite")));
        }
        if self.semi_major_axis_au <= 0.0 {
            return Err(OrbitError::InvalidInput(format!(
                "semi-major axis must be positive, got {} AU",
                self.semi_major_axis_au
            )));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(OrbitError::InvalidInput(format!(
                "eccentricity {} outside [0, 1)",
                self.eccentricity
            )));
        }
        Ok(())
    }

    /// Copy of these elements with a different semi-major axis.
    pub fn with_semi_major_axis_au(&self, semi_major_axis_au: f64) -> Self {
        Self {
            semi_major_axis_au,
            ..*self
        }
    }

    pub fn semi_major_axis_m(&self, body: &CentralBody) -> f64 {
        self.semi_major_axis_au * body.au_m
    }

    /// Period in years from Kepler's third law normalised to 1 AU / 1 year / 1 solar mass.
    pub fn period_years(&self) -> f64 {
        self.semi_major_axis_au.powf(1.5)
    }

    /// Mean motion (rad/s).
    pub fn mean_motion(&self, body: &CentralBody) -> f64 {
        let a = self.semi_major_axis_m(body);
        (body.mu_m3_s2 / (a * a * a)).sqrt()
    }

    /// Orbital period (s) about `body`.
    pub fn orbital_period_seconds(&self, body: &CentralBody) -> f64 {
        std::f64::consts::TAU / self.mean_motion(body)
    }
}

/// Position (m) and velocity (m/s) in the heliocentric inertial frame at a Julian Date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalState {
    pub position_m: Vector3,
    pub velocity_m_s: Vector3,
    pub julian_date: f64,
}

impl OrbitalState {
    pub fn radius_m(&self) -> f64 {
        self.position_m.norm()
    }

    pub fn speed_m_s(&self) -> f64 {
        self.velocity_m_s.norm()
    }
}
