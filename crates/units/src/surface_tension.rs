use serde::{Deserialize, Serialize};

/// Surface tension in N/m.
///
/// Water against air sits near 0.072 N/m at room temperature; hydrocarbon
/// fuels near 0.02–0.03 N/m.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SurfaceTension(f64); // Base unit: N/m

impl SurfaceTension {
    pub fn from_newtons_per_meter(value: f64) -> Self {
        Self(value)
    }

    /// 1 dyn/cm = 1 mN/m
    pub fn from_dyn_per_cm(value: f64) -> Self {
        Self(value * 1e-3)
    }

    pub fn to_newtons_per_meter(&self) -> f64 {
        self.0
    }

    pub fn to_dyn_per_cm(&self) -> f64 {
        self.0 / 1e-3
    }
}
