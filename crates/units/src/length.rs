use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const MM_TO_M: f64 = 1e-3;
pub const MICRON_TO_M: f64 = 1e-6;
pub const CM_TO_M: f64 = 1e-2;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with meters as the base unit.
/// Spray droplets live in the micron-to-millimeter range, so the micron and
/// millimeter constructors are the ones most often used.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let droplet = Length::from_microns(100.0);
/// let nozzle = Length::from_mm(0.3);
///
/// assert!((droplet.to_meters() - 1e-4).abs() < 1e-18);
/// assert!(nozzle > droplet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: m

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value * CM_TO_M)
    }

    /// Creates a new `Length` from a value in millimeters.
    pub fn from_mm(value: f64) -> Self {
        Self(value * MM_TO_M)
    }

    /// Creates a new `Length` from a value in microns.
    pub fn from_microns(value: f64) -> Self {
        Self(value * MICRON_TO_M)
    }

    /// Returns the length in meters.
    pub fn to_meters(&self) -> f64 {
        self.0
    }

    pub fn to_cm(&self) -> f64 {
        self.0 / CM_TO_M
    }

    pub fn to_mm(&self) -> f64 {
        self.0 / MM_TO_M
    }

    pub fn to_microns(&self) -> f64 {
        self.0 / MICRON_TO_M
    }

    /// Volume of a sphere with this length as its diameter (m³).
    ///
    /// V = π d³ / 6
    pub fn sphere_volume(&self) -> f64 {
        std::f64::consts::PI * self.0.powi(3) / 6.0
    }

    /// Raise to integer power (returns dimensionless f64 for dimensional consistency)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
