use std::ops::{Add, Div, Mul, Sub};

pub const KM_PER_HOUR_TO_M_PER_SEC: f64 = 1.0 / 3.6;

/// A speed in m/s.
///
/// Vector velocities stay as `nalgebra` vectors; this type carries magnitudes
/// such as the slip speed between a droplet and the surrounding gas.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_cm_per_sec(value: f64) -> Self {
        Self(value / 100.0)
    }

    pub fn from_km_per_hour(value: f64) -> Self {
        Self(value * KM_PER_HOUR_TO_M_PER_SEC)
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_cm_per_sec(&self) -> f64 {
        self.0 * 100.0
    }

    pub fn to_km_per_hour(&self) -> f64 {
        self.0 / KM_PER_HOUR_TO_M_PER_SEC
    }

    /// Square of the speed, the dynamic-pressure factor in ρ u².
    pub fn squared(&self) -> f64 {
        self.0 * self.0
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
