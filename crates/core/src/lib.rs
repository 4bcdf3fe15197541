//! Core units, constants, and shared primitives for the asteroid deflection workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Metres per astronomical unit (IAU 2012).
    pub const AU_M: f64 = 1.495_978_707e11;
    /// Heliocentric gravitational parameter (m³/s²).
    pub const GM_SUN_M3_S2: f64 = 1.327_124_400_18e20;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Days per Julian year.
    pub const DAYS_PER_YEAR: f64 = 365.25;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::AU_M;

    /// Convert astronomical units to metres.
    #[inline]
    pub fn au_to_m(v: f64) -> f64 {
        v * AU_M
    }

    /// Convert metres to astronomical units.
    #[inline]
    pub fn m_to_au(v: f64) -> f64 {
        v / AU_M
    }

    /// Convert metres per second to kilometres per second.
    #[inline]
    pub fn ms_to_kms(v: f64) -> f64 {
        v / 1_000.0
    }

    #[inline]
    pub fn deg_to_rad(deg: f64) -> f64 {
        deg.to_radians()
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{DAYS_PER_YEAR, SECONDS_PER_DAY};

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert Julian years to days.
    #[inline]
    pub fn years_to_days(years: f64) -> f64 {
        years * DAYS_PER_YEAR
    }

    /// Julian Date reached `years` Julian years after `epoch_jd`.
    #[inline]
    pub fn jd_after_years(epoch_jd: f64, years: f64) -> f64 {
        epoch_jd + years_to_days(years)
    }
}

/// Value-type 3D vector used for positions (m) and velocities (m/s).
pub mod vector {
    use std::ops::{Add, Mul, Sub};

    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct Vector3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    impl Vector3 {
        pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

        #[inline]
        pub const fn new(x: f64, y: f64, z: f64) -> Self {
            Self { x, y, z }
        }

        /// Dot product of two vectors.
        #[inline]
        pub fn dot(&self, other: &Vector3) -> f64 {
            self.x * other.x + self.y * other.y + self.z * other.z
        }

        /// Euclidean norm.
        #[inline]
        pub fn norm(&self) -> f64 {
            self.dot(self).sqrt()
        }

        /// Scale by a scalar.
        #[inline]
        pub fn scale(&self, s: f64) -> Vector3 {
            Vector3::new(self.x * s, self.y * s, self.z * s)
        }

        /// Unit vector in the same direction; the zero vector maps to itself.
        pub fn normalize(&self) -> Vector3 {
            let n = self.norm();
            if n > 0.0 {
                self.scale(1.0 / n)
            } else {
                Vector3::ZERO
            }
        }
    }

    impl Add for Vector3 {
        type Output = Vector3;

        fn add(self, rhs: Vector3) -> Vector3 {
            Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
        }
    }

    impl Sub for Vector3 {
        type Output = Vector3;

        fn sub(self, rhs: Vector3) -> Vector3 {
            Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
        }
    }

    impl Mul<f64> for Vector3 {
        type Output = Vector3;

        fn mul(self, s: f64) -> Vector3 {
            self.scale(s)
        }
    }
}
