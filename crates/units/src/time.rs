use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

const MS_TO_S: f64 = 1e-3;
const US_TO_S: f64 = 1e-6;

/// A physical time quantity using f64 precision.
///
/// The `Time` struct represents time with seconds as the base unit. Droplet
/// relaxation and breakup happen on microsecond to millisecond scales.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let substep = Time::from_microseconds(5.0);
/// let flight = Time::from_milliseconds(1.0);
///
/// assert_eq!((flight / substep).round(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: s

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    pub fn from_milliseconds(value: f64) -> Self {
        Self(value * MS_TO_S)
    }

    pub fn from_microseconds(value: f64) -> Self {
        Self(value * US_TO_S)
    }

    /// Returns the time in seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    pub fn to_milliseconds(&self) -> f64 {
        self.0 / MS_TO_S
    }

    pub fn to_microseconds(&self) -> f64 {
        self.0 / US_TO_S
    }

    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 { self } else { other }
    }

    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 { self } else { other }
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Time (commutative multiplication)
impl Mul<Time> for f64 {
    type Output = Time;

    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}
