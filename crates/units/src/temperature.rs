use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

pub const CELSIUS_OFFSET: f64 = 273.15;

/// A thermodynamic temperature using f64 precision.
///
/// Kelvin is the base unit. Material-property curves are expressed against
/// Kelvin, so everything that evaluates them goes through [`to_kelvin`].
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let fuel = Temperature::from_celsius(25.0);
/// assert!((fuel.to_kelvin() - 298.15).abs() < 1e-12);
///
/// let warmer = fuel + 10.0;
/// assert!((warmer - fuel - 10.0).abs() < 1e-12);
/// ```
///
/// [`to_kelvin`]: Temperature::to_kelvin
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// K = °C + 273.15
    pub fn from_celsius(value: f64) -> Self {
        Self(value + CELSIUS_OFFSET)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    pub fn to_celsius(&self) -> f64 {
        self.0 - CELSIUS_OFFSET
    }

    /// Standard ambient temperature (298.15 K).
    pub fn standard_ambient() -> Self {
        Self::from_kelvin(298.15)
    }

    pub fn water_boiling() -> Self {
        Self::from_kelvin(373.15)
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::standard_ambient()
    }
}

/// Offset a temperature by a difference in Kelvin
impl Add<f64> for Temperature {
    type Output = Temperature;

    fn add(self, rhs: f64) -> Temperature {
        Temperature(self.0 + rhs)
    }
}

/// The difference of two temperatures, in Kelvin
impl Sub for Temperature {
    type Output = f64;

    fn sub(self, rhs: Temperature) -> f64 {
        self.0 - rhs.0
    }
}
