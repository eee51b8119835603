//! Shared fixtures for unit tests.

use nalgebra::{Point3, Vector3};
use units::{Density, DynamicViscosity, Length, SurfaceTension, Temperature};

use crate::fluid::FluidSample;
use crate::material::{DensityFunction, TensionFunction};
use crate::parcel::{BinId, Parcel};

pub const WATER_DENSITY: f64 = 1000.0;
pub const FUEL_TENSION: f64 = 0.03;
pub const AIR_DENSITY: f64 = 1.2;
pub const AIR_VISCOSITY: f64 = 1.8e-5;

pub fn water_density() -> DensityFunction {
    DensityFunction::constant(Density::from_kg_per_m3(WATER_DENSITY))
}

pub fn fuel_tension() -> TensionFunction {
    TensionFunction::constant(SurfaceTension::from_newtons_per_meter(FUEL_TENSION))
}

/// Air at 300 K moving with `velocity`.
pub fn air(velocity: Vector3<f64>) -> FluidSample {
    FluidSample::new(
        velocity,
        Density::from_kg_per_m3(AIR_DENSITY),
        DynamicViscosity::from_pascal_seconds(AIR_VISCOSITY),
        Temperature::from_kelvin(300.0),
    )
}

/// A parcel at rest at the origin.
pub fn parcel(diameter_m: f64, count: f64) -> Parcel {
    Parcel::new(
        BinId(0),
        Point3::origin(),
        Vector3::zeros(),
        Length::from_meters(diameter_m),
        count,
        Temperature::from_kelvin(300.0),
    )
}
