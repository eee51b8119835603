//! Temperature-dependent material properties.
//!
//! A species carries one [`PropertyModel`] per property. The model is wrapped
//! in an `Arc` by [`DensityFunction`] and [`TensionFunction`] so every parcel,
//! integrator and breakup model of a bin evaluates the same immutable curve.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use units::{Density, SurfaceTension, Temperature};

/// A scalar material property as a function of temperature (Kelvin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyModel {
    /// Temperature-independent value.
    Constant { value: f64 },

    /// value + slope × (T − T_ref)
    Linear {
        value: f64,
        slope: f64,
        reference_temperature: f64,
    },

    /// Σ cᵢ Tⁱ with T in Kelvin, lowest order first.
    Polynomial { coefficients: Vec<f64> },
}

impl PropertyModel {
    /// Evaluate the property at temperature `t`.
    pub fn evaluate(&self, t: Temperature) -> f64 {
        let kelvin = t.to_kelvin();
        match self {
            PropertyModel::Constant { value } => *value,
            PropertyModel::Linear {
                value,
                slope,
                reference_temperature,
            } => value + slope * (kelvin - reference_temperature),
            PropertyModel::Polynomial { coefficients } => coefficients
                .iter()
                .rev()
                .fold(0.0, |acc, c| acc * kelvin + c),
        }
    }

    /// Structural problems that make the model unusable, if any.
    pub fn defect(&self) -> Option<&'static str> {
        let finite = match self {
            PropertyModel::Constant { value } => value.is_finite(),
            PropertyModel::Linear {
                value,
                slope,
                reference_temperature,
            } => value.is_finite() && slope.is_finite() && reference_temperature.is_finite(),
            PropertyModel::Polynomial { coefficients } => {
                if coefficients.is_empty() {
                    return Some("polynomial has no coefficients");
                }
                coefficients.iter().all(|c| c.is_finite())
            }
        };

        if finite {
            None
        } else {
            Some("non-finite coefficient")
        }
    }
}

/// Particle material density ρ_p(T), shared by reference.
#[derive(Debug, Clone)]
pub struct DensityFunction(Arc<PropertyModel>);

impl DensityFunction {
    pub fn new(model: PropertyModel) -> Self {
        Self(Arc::new(model))
    }

    /// Temperature-independent density.
    pub fn constant(density: Density) -> Self {
        Self::new(PropertyModel::Constant {
            value: density.to_kg_per_m3(),
        })
    }

    pub fn density(&self, t: Temperature) -> Density {
        Density::from_kg_per_m3(self.0.evaluate(t))
    }

    pub fn model(&self) -> &PropertyModel {
        &self.0
    }
}

/// Liquid surface tension σ(T), shared by reference.
#[derive(Debug, Clone)]
pub struct TensionFunction(Arc<PropertyModel>);

impl TensionFunction {
    pub fn new(model: PropertyModel) -> Self {
        Self(Arc::new(model))
    }

    pub fn constant(tension: SurfaceTension) -> Self {
        Self::new(PropertyModel::Constant {
            value: tension.to_newtons_per_meter(),
        })
    }

    pub fn tension(&self, t: Temperature) -> SurfaceTension {
        SurfaceTension::from_newtons_per_meter(self.0.evaluate(t))
    }

    pub fn model(&self) -> &PropertyModel {
        &self.0
    }
}
