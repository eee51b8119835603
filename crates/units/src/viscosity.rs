use serde::{Deserialize, Serialize};

/// Dynamic viscosity with Pa·s (kg/(m·s)) as the base unit.
///
/// # Examples
///
/// ```rust
/// use units::DynamicViscosity;
///
/// let water = DynamicViscosity::from_centipoise(1.0);
/// assert!((water.to_pascal_seconds() - 1e-3).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DynamicViscosity(f64); // Base unit: Pa·s

impl DynamicViscosity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_pascal_seconds(value: f64) -> Self {
        Self(value)
    }

    /// 1 P = 0.1 Pa·s
    pub fn from_poise(value: f64) -> Self {
        Self(value * 0.1)
    }

    pub fn from_centipoise(value: f64) -> Self {
        Self(value * 1e-3)
    }

    pub fn to_pascal_seconds(&self) -> f64 {
        self.0
    }

    pub fn to_centipoise(&self) -> f64 {
        self.0 / 1e-3
    }
}
