//! Sphere drag correlations and the dimensionless groups that drive them.
//!
//! # Drag curve
//!
//! The drag coefficient follows the standard piecewise sphere correlation:
//!
//! | regime       | range          | C_D                          |
//! |--------------|----------------|------------------------------|
//! | Stokes       | Re < 1         | 24 / Re                      |
//! | Intermediate | 1 ≤ Re < 1000  | (24 / Re)(1 + 0.15 Re^0.687) |
//! | Newton       | Re ≥ 1000      | 0.44                         |
//!
//! The intermediate branch meets the Newton plateau at Re = 1000 (0.438 vs
//! 0.44). At Re = 1 it sits a factor 1.15 above the Stokes branch.
//!
//! # Droplet deformation
//!
//! A droplet flattens as the Weber number grows and presents a larger frontal
//! area. The distortion `y = 1 − exp(−We / 12)` rises smoothly from 0 and
//! saturates at 1; the drag coefficient is scaled by `1 + 2.632 y`, which
//! reaches the disk-to-sphere drag ratio for a fully flattened drop
//! (Liu, Mather & Reitz 1993).

use nalgebra::Vector3;
use units::{Density, DynamicViscosity, Length, SurfaceTension, Time, Velocity};

/// Upper Reynolds number of the Stokes branch.
pub const STOKES_LIMIT: f64 = 1.0;

/// Reynolds number where the drag coefficient becomes constant.
pub const NEWTON_LIMIT: f64 = 1000.0;

/// Drag coefficient on the Newton plateau.
pub const NEWTON_DRAG_COEFFICIENT: f64 = 0.44;

const SCHILLER_NAUMANN_FACTOR: f64 = 0.15;
const SCHILLER_NAUMANN_EXPONENT: f64 = 0.687;

/// Viscosities at or below this (Pa·s) are treated as inviscid: Re → ∞.
pub const VISCOSITY_FLOOR: f64 = 1e-30;

/// Weber number over which droplet distortion develops.
pub const WE_DISTORTION_SCALE: f64 = 12.0;

/// Extra drag of a fully distorted droplet relative to a sphere.
pub const DISTORTION_DRAG_INCREASE: f64 = 2.632;

/// Flow regime around a particle, selected by its Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRegime {
    /// Creeping flow, Re < 1.
    Stokes,
    /// Empirical transition regime, 1 ≤ Re < 1000.
    Intermediate,
    /// Inertial regime with a constant drag coefficient, Re ≥ 1000.
    Newton,
}

impl DragRegime {
    pub fn from_reynolds(re: f64) -> Self {
        if re < STOKES_LIMIT {
            DragRegime::Stokes
        } else if re < NEWTON_LIMIT {
            DragRegime::Intermediate
        } else {
            DragRegime::Newton
        }
    }
}

/// Rigid-sphere drag coefficient C_D(Re).
///
/// Diverges as Re → 0; callers with zero slip have zero drag and should not
/// need a coefficient.
pub fn drag_coefficient(re: f64) -> f64 {
    match DragRegime::from_reynolds(re) {
        DragRegime::Stokes => 24.0 / re,
        DragRegime::Intermediate => {
            (24.0 / re) * (1.0 + SCHILLER_NAUMANN_FACTOR * re.powf(SCHILLER_NAUMANN_EXPONENT))
        }
        DragRegime::Newton => NEWTON_DRAG_COEFFICIENT,
    }
}

/// Particle Reynolds number Re = ρ_f |u_rel| d / μ.
///
/// Zero slip gives 0. A vanishing viscosity gives +∞, which places the
/// particle on the Newton plateau instead of dividing by zero.
pub fn reynolds_number(
    fluid_density: Density,
    slip: Velocity,
    diameter: Length,
    viscosity: DynamicViscosity,
) -> f64 {
    let u = slip.to_meters_per_sec();
    if u == 0.0 {
        return 0.0;
    }

    let mu = viscosity.to_pascal_seconds();
    if mu <= VISCOSITY_FLOOR {
        return f64::INFINITY;
    }

    fluid_density.to_kg_per_m3() * u * diameter.to_meters() / mu
}

/// Weber number We = ρ_f |u_rel|² d / σ.
///
/// Zero slip gives 0; a non-positive surface tension gives +∞.
pub fn weber_number(
    fluid_density: Density,
    slip: Velocity,
    diameter: Length,
    tension: SurfaceTension,
) -> f64 {
    if slip.to_meters_per_sec() == 0.0 {
        return 0.0;
    }

    let sigma = tension.to_newtons_per_meter();
    if sigma <= 0.0 {
        return f64::INFINITY;
    }

    fluid_density.to_kg_per_m3() * slip.squared() * diameter.to_meters() / sigma
}

/// Ohnesorge number Oh = μ_l / √(ρ_l σ d).
pub fn ohnesorge_number(
    liquid_viscosity: DynamicViscosity,
    liquid_density: Density,
    tension: SurfaceTension,
    diameter: Length,
) -> f64 {
    let denom = (liquid_density.to_kg_per_m3()
        * tension.to_newtons_per_meter()
        * diameter.to_meters())
    .sqrt();
    liquid_viscosity.to_pascal_seconds() / denom
}

/// Droplet distortion y(We) in [0, 1).
pub fn distortion(we: f64) -> f64 {
    1.0 - (-we / WE_DISTORTION_SCALE).exp()
}

/// Multiplier applied to the sphere drag coefficient of a deforming droplet.
pub fn deformation_drag_factor(we: f64) -> f64 {
    1.0 + DISTORTION_DRAG_INCREASE * distortion(we)
}

/// Drag acceleration a = (3/4)(ρ_f/ρ_p)(C_D |u_rel| / d) u_rel.
///
/// Exactly zero when the particle co-moves with the fluid.
pub fn drag_acceleration(
    relative_velocity: &Vector3<f64>,
    drag_coefficient: f64,
    fluid_density: Density,
    particle_density: Density,
    diameter: Length,
) -> Vector3<f64> {
    let slip = relative_velocity.norm();
    if slip == 0.0 {
        return Vector3::zeros();
    }

    let density_ratio = fluid_density / particle_density;
    relative_velocity * (0.75 * density_ratio * drag_coefficient * slip / diameter.to_meters())
}

/// Momentum response time τ_p: the e-folding time of the slip velocity.
///
/// τ_p = 4 ρ_p d / (3 ρ_f C_D |u_rel|), falling back to the Stokes value
/// ρ_p d² / (18 μ) at zero slip. Infinite when neither applies.
pub fn response_time(
    particle_density: Density,
    fluid_density: Density,
    drag_coefficient: f64,
    slip: Velocity,
    diameter: Length,
    viscosity: DynamicViscosity,
) -> Time {
    let rho_p = particle_density.to_kg_per_m3();
    let d = diameter.to_meters();
    let u = slip.to_meters_per_sec();

    let tau = if u > 0.0 && drag_coefficient.is_finite() {
        4.0 * rho_p * d / (3.0 * fluid_density.to_kg_per_m3() * drag_coefficient * u)
    } else if viscosity.to_pascal_seconds() > VISCOSITY_FLOOR {
        rho_p * d * d / (18.0 * viscosity.to_pascal_seconds())
    } else {
        f64::INFINITY
    };

    Time::from_seconds(tau)
}
