//! Continuous-phase state seen by a parcel.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use units::{Density, DynamicViscosity, Temperature};

/// Gas conditions at a parcel's location for one sub-step.
///
/// Produced by the flow solver through a [`FluidSampler`] and handed to the
/// integrator and breakup model by reference. Nothing in this crate keeps a
/// sample beyond the call it was passed to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidSample {
    pub velocity: Vector3<f64>, // m/s
    pub density: Density,
    pub viscosity: DynamicViscosity,
    pub temperature: Temperature,
}

impl FluidSample {
    pub fn new(
        velocity: Vector3<f64>,
        density: Density,
        viscosity: DynamicViscosity,
        temperature: Temperature,
    ) -> Self {
        Self {
            velocity,
            density,
            viscosity,
            temperature,
        }
    }

    /// Still air at 1 atm and the given temperature.
    ///
    /// Density from the ideal gas law, viscosity from Sutherland's law.
    pub fn still_air(temperature: Temperature) -> Self {
        const R_AIR: f64 = 287.05; // J/(kg·K)
        const P_ATM: f64 = 101_325.0; // Pa
        const MU_REF: f64 = 1.716e-5; // Pa·s at 273.15 K
        const T_REF: f64 = 273.15;
        const SUTHERLAND: f64 = 110.4;

        let t = temperature.to_kelvin();
        let mu = MU_REF * (t / T_REF).powf(1.5) * (T_REF + SUTHERLAND) / (t + SUTHERLAND);

        Self {
            velocity: Vector3::zeros(),
            density: Density::from_kg_per_m3(P_ATM / (R_AIR * t)),
            viscosity: DynamicViscosity::from_pascal_seconds(mu),
            temperature,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }
}

/// Source of local fluid state, implemented by the flow solver.
///
/// Samplers are queried concurrently from many parcel updates, hence
/// `Send + Sync`. Returned values must be finite.
pub trait FluidSampler: Send + Sync {
    fn sample(&self, position: &Point3<f64>) -> FluidSample;
}

impl<F> FluidSampler for F
where
    F: Fn(&Point3<f64>) -> FluidSample + Send + Sync,
{
    fn sample(&self, position: &Point3<f64>) -> FluidSample {
        self(position)
    }
}

/// The same fluid state everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformFlow {
    state: FluidSample,
}

impl UniformFlow {
    pub fn new(state: FluidSample) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &FluidSample {
        &self.state
    }
}

impl FluidSampler for UniformFlow {
    fn sample(&self, _position: &Point3<f64>) -> FluidSample {
        self.state
    }
}
