use std::ops::{Div, Mul};

/// Volume density in kg/m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Density(f64);

impl Density {
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value)
    }

    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value * 1000.0)
    }

    pub fn to_kg_per_m3(&self) -> f64 {
        self.0
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl Mul<f64> for Density {
    type Output = Density;

    fn mul(self, rhs: f64) -> Density {
        Density(self.0 * rhs)
    }
}

/// Density ratio, e.g. liquid-to-gas ρ_l/ρ_g
impl Div for Density {
    type Output = f64;

    fn div(self, rhs: Density) -> f64 {
        self.0 / rhs.0
    }
}
