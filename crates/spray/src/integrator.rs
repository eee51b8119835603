//! Momentum integration for spray parcels
//!
//! Integrators advance a parcel's velocity and position over one sub-step
//! under aerodynamic drag plus an external acceleration (gravity, frame
//! acceleration). Both variants share the same explicit update:
//!
//! 1. v(t + dt) = v(t) + dt (a_drag + a_ext)
//! 2. x(t + dt) = x(t) + dt v(t + dt)
//!
//! and differ only in the drag coefficient they feed into a_drag.

use std::fmt;

use nalgebra::Vector3;
use units::{Density, Time};

use crate::drag;
use crate::fluid::FluidSample;
use crate::material::{DensityFunction, TensionFunction};
use crate::parcel::Parcel;

/// A drag law plus time-stepping scheme for parcel momentum
///
/// Instances are built once per bin and shared by every parcel of that bin,
/// across threads. They hold no mutable state.
pub trait MomentumIntegrator: Send + Sync + fmt::Debug {
    /// Advance `parcel` by one sub-step
    ///
    /// # Arguments
    ///
    /// * `parcel` - Parcel to update (velocity and position modified in place)
    /// * `dt` - Sub-step in seconds, must be positive
    /// * `fluid` - Fluid state at the parcel location
    /// * `accel` - External acceleration in m/s²
    ///
    /// # Returns
    ///
    /// The particle Reynolds number evaluated at the start of the step
    ///
    /// # Panics
    ///
    /// If `dt` or the parcel diameter is not positive, or the material
    /// density evaluates to a non-positive value.
    fn integrate_momentum(
        &self,
        parcel: &mut Parcel,
        dt: f64,
        fluid: &FluidSample,
        accel: &Vector3<f64>,
    ) -> f64;

    /// Momentum response time of `parcel` under this drag law
    fn response_time(&self, parcel: &Parcel, fluid: &FluidSample) -> Time;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}

/// Drag state of a parcel at the start of a sub-step.
struct DragEvaluation {
    relative_velocity: Vector3<f64>,
    reynolds: f64,
    drag_coefficient: f64,
    particle_density: Density,
}

impl DragEvaluation {
    /// Rigid-sphere drag of `parcel` in `fluid`.
    fn sphere(parcel: &Parcel, fluid: &FluidSample, density: &DensityFunction) -> Self {
        let particle_density = density.density(parcel.temperature);
        assert!(
            particle_density.to_kg_per_m3() > 0.0,
            "particle density must be positive, got {} kg/m³",
            particle_density.to_kg_per_m3()
        );

        let reynolds = drag::reynolds_number(
            fluid.density,
            parcel.slip_speed(fluid),
            parcel.diameter(),
            fluid.viscosity,
        );

        // C_D is unused at zero slip; keep it finite so downstream products stay clean
        let drag_coefficient = if reynolds > 0.0 {
            drag::drag_coefficient(reynolds)
        } else {
            0.0
        };

        Self {
            relative_velocity: parcel.relative_velocity(fluid),
            reynolds,
            drag_coefficient,
            particle_density,
        }
    }

    fn acceleration(&self, parcel: &Parcel, fluid: &FluidSample) -> Vector3<f64> {
        drag::drag_acceleration(
            &self.relative_velocity,
            self.drag_coefficient,
            fluid.density,
            self.particle_density,
            parcel.diameter(),
        )
    }

    fn response_time(&self, parcel: &Parcel, fluid: &FluidSample) -> Time {
        drag::response_time(
            self.particle_density,
            fluid.density,
            self.drag_coefficient,
            parcel.slip_speed(fluid),
            parcel.diameter(),
            fluid.viscosity,
        )
    }
}

fn check_preconditions(parcel: &Parcel, dt: f64) {
    assert!(dt > 0.0, "integration step must be positive, got {dt}");
    assert!(
        parcel.diameter > 0.0,
        "parcel diameter must be positive, got {}",
        parcel.diameter
    );
}

/// Explicit update shared by all drag laws; returns the Reynolds number.
fn advance(
    parcel: &mut Parcel,
    dt: f64,
    drag: &DragEvaluation,
    fluid: &FluidSample,
    accel: &Vector3<f64>,
) -> f64 {
    let a_drag = drag.acceleration(parcel, fluid);

    parcel.velocity += (a_drag + accel) * dt;
    parcel.position += parcel.velocity * dt;

    drag.reynolds
}

/// Rigid-sphere drag integrator
///
/// Uses the piecewise sphere drag curve in [`drag::drag_coefficient`]. Suits
/// solid particles and small droplets that stay spherical.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point3, Vector3};
/// use spray::fluid::FluidSample;
/// use spray::integrator::{CliftGauvin, MomentumIntegrator};
/// use spray::material::DensityFunction;
/// use spray::parcel::{BinId, Parcel};
/// use units::{Density, Length, Temperature};
///
/// let integrator = CliftGauvin::new(DensityFunction::constant(Density::from_kg_per_m3(1000.0)));
/// let air = FluidSample::still_air(Temperature::from_kelvin(300.0));
/// let mut parcel = Parcel::new(
///     BinId(0),
///     Point3::origin(),
///     Vector3::new(10.0, 0.0, 0.0),
///     Length::from_microns(20.0),
///     1.0,
///     Temperature::from_kelvin(300.0),
/// );
///
/// let re = integrator.integrate_momentum(&mut parcel, 1e-5, &air, &Vector3::zeros());
/// assert!(re > 0.0);
/// assert!(parcel.velocity.x < 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct CliftGauvin {
    density: DensityFunction,
}

impl CliftGauvin {
    pub fn new(density: DensityFunction) -> Self {
        Self { density }
    }

    pub fn density(&self) -> &DensityFunction {
        &self.density
    }
}

impl MomentumIntegrator for CliftGauvin {
    fn integrate_momentum(
        &self,
        parcel: &mut Parcel,
        dt: f64,
        fluid: &FluidSample,
        accel: &Vector3<f64>,
    ) -> f64 {
        check_preconditions(parcel, dt);
        let drag = DragEvaluation::sphere(parcel, fluid, &self.density);
        advance(parcel, dt, &drag, fluid, accel)
    }

    fn response_time(&self, parcel: &Parcel, fluid: &FluidSample) -> Time {
        DragEvaluation::sphere(parcel, fluid, &self.density).response_time(parcel, fluid)
    }

    fn name(&self) -> &'static str {
        "CliftGauvin"
    }
}

/// Deforming-droplet drag integrator
///
/// Starts from the sphere drag curve and scales the coefficient by
/// [`drag::deformation_drag_factor`] of the local Weber number, so a droplet
/// in a strong cross-flow flattens and decelerates faster than a solid sphere
/// of the same size.
#[derive(Debug, Clone)]
pub struct CliftGauvinDroplet {
    density: DensityFunction,
    tension: TensionFunction,
}

impl CliftGauvinDroplet {
    pub fn new(density: DensityFunction, tension: TensionFunction) -> Self {
        Self { density, tension }
    }

    pub fn density(&self) -> &DensityFunction {
        &self.density
    }

    pub fn tension(&self) -> &TensionFunction {
        &self.tension
    }

    fn evaluate(&self, parcel: &Parcel, fluid: &FluidSample) -> DragEvaluation {
        let mut drag = DragEvaluation::sphere(parcel, fluid, &self.density);

        let we = drag::weber_number(
            fluid.density,
            parcel.slip_speed(fluid),
            parcel.diameter(),
            self.tension.tension(parcel.temperature),
        );
        drag.drag_coefficient *= drag::deformation_drag_factor(we);

        drag
    }
}

impl MomentumIntegrator for CliftGauvinDroplet {
    fn integrate_momentum(
        &self,
        parcel: &mut Parcel,
        dt: f64,
        fluid: &FluidSample,
        accel: &Vector3<f64>,
    ) -> f64 {
        check_preconditions(parcel, dt);
        let drag = self.evaluate(parcel, fluid);
        advance(parcel, dt, &drag, fluid, accel)
    }

    fn response_time(&self, parcel: &Parcel, fluid: &FluidSample) -> Time {
        self.evaluate(parcel, fluid).response_time(parcel, fluid)
    }

    fn name(&self) -> &'static str {
        "CliftGauvinDroplet"
    }
}
