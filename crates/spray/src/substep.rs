//! Sub-step selection for parcel time of flight.
//!
//! A parcel's time of flight through a cell is split into sub-steps no longer
//! than a fraction of its momentum response time, so the explicit drag update
//! stays stable for small, strongly coupled droplets:
//!
//! ```text
//! Δt = clamp(safety_factor × τ_p, min_step, max_step), capped by the time left
//! ```

use serde::{Deserialize, Serialize};
use units::Time;

/// Fraction of the response time taken per sub-step.
///
/// Explicit Euler on v' = −v/τ is stable for Δt < 2τ; 0.5 keeps the slip
/// decay monotonic.
const DEFAULT_SAFETY_FACTOR: f64 = 0.5;

const DEFAULT_MIN_STEP_SECONDS: f64 = 1e-9;
const DEFAULT_MAX_STEP_SECONDS: f64 = 1e-3;
const DEFAULT_MAX_SUBSTEPS: usize = 100_000;

/// Remaining time below this fraction of the time of flight counts as done.
const COMPLETION_TOLERANCE: f64 = 1e-12;

/// Limits on sub-step length and count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubStepControl {
    pub safety_factor: f64,
    pub min_step: Time,
    pub max_step: Time,
    pub max_substeps: usize,
}

impl Default for SubStepControl {
    fn default() -> Self {
        Self {
            safety_factor: DEFAULT_SAFETY_FACTOR,
            min_step: Time::from_seconds(DEFAULT_MIN_STEP_SECONDS),
            max_step: Time::from_seconds(DEFAULT_MAX_STEP_SECONDS),
            max_substeps: DEFAULT_MAX_SUBSTEPS,
        }
    }
}

impl SubStepControl {
    /// Length of the next sub-step.
    ///
    /// # Arguments
    /// * `remaining` - Time of flight still to cover, positive
    /// * `response_time` - Momentum response time of the parcel (may be infinite)
    pub fn choose_step(&self, remaining: Time, response_time: Time) -> Time {
        let limit = (response_time * self.safety_factor)
            .min(self.max_step)
            .max(self.min_step);

        limit.min(remaining)
    }

    /// Whether `remaining` is small enough to stop sub-stepping.
    pub fn is_complete(&self, remaining: Time, time_of_flight: Time) -> bool {
        remaining.to_seconds() <= COMPLETION_TOLERANCE * time_of_flight.to_seconds()
    }
}

/// Bookkeeping from advancing one or more parcels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubStepStats {
    /// Parcels advanced.
    pub parcels: usize,
    /// Sub-steps taken across all parcels.
    pub substeps: usize,
    /// Largest Reynolds number reported by the integrator.
    pub max_reynolds: f64,
    /// Parcels whose sub-step budget ran out before the time of flight.
    pub exhausted: usize,
}

impl SubStepStats {
    pub fn merge(self, other: Self) -> Self {
        Self {
            parcels: self.parcels + other.parcels,
            substeps: self.substeps + other.substeps,
            max_reynolds: self.max_reynolds.max(other.max_reynolds),
            exhausted: self.exhausted + other.exhausted,
        }
    }
}
