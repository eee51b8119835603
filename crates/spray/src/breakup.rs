//! Droplet breakup models.
//!
//! A breakup model inspects a parcel after its momentum update and, when the
//! droplets are aerodynamically unstable, shrinks the representative diameter
//! while multiplying the droplet count so that `count × d³` stays fixed.

use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};
use units::{DynamicViscosity, Time};

use crate::config::{
    first_name, first_real, OptionsList, ParticleBinEos, SpeciesDatabase, BREAKUP_TIMING,
    DROPLET_VISCOSITY, WEBER_CRITICAL,
};
use crate::drag;
use crate::error::{ConfigError, ConfigResult};
use crate::fluid::FluidSample;
use crate::material::{DensityFunction, TensionFunction};
use crate::parcel::Parcel;

/// Breakup-time constant C_B in t_b = C_B (d/|u|) √(ρ_l/ρ_g) (1 + 1.2 Oh^1.6)
pub const BREAKUP_TIME_CONSTANT: f64 = 5.0;

/// A fragmentation model evaluated once per parcel per sub-step.
pub trait BreakupMethod: Send + Sync + fmt::Debug {
    /// Fragment `parcel` if it is unstable in `fluid`.
    ///
    /// Only `diameter` and `count` may change.
    fn breakup(&self, parcel: &mut Parcel, dt: f64, fluid: &FluidSample);

    fn name(&self) -> &'static str;
}

/// Parcels never fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBreakup;

impl BreakupMethod for NoBreakup {
    fn breakup(&self, _parcel: &mut Parcel, _dt: f64, _fluid: &FluidSample) {}

    fn name(&self) -> &'static str {
        "NoBreakup"
    }
}

/// When an unstable droplet reaches its stable size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BreakupTiming {
    /// The diameter jumps to the stable size in the sub-step where We first
    /// exceeds the critical value.
    #[default]
    Instantaneous,

    /// The diameter relaxes toward the stable size over the characteristic
    /// breakup time, d ← d − (d − d_stable) min(1, dt / t_b).
    RateLimited,
}

impl FromStr for BreakupTiming {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instantaneous" => Ok(BreakupTiming::Instantaneous),
            "rateLimited" => Ok(BreakupTiming::RateLimited),
            other => Err(ConfigError::InvalidOption {
                model: WeberBreakup::MODEL,
                option: BREAKUP_TIMING,
                value: other.to_string(),
                reason: "expected `instantaneous` or `rateLimited`",
            }),
        }
    }
}

/// Critical-Weber-number breakup.
///
/// A droplet with We = ρ_g |u_rel|² d / σ above `weber_critical` is replaced
/// by droplets of the diameter at which We equals the critical value:
///
/// d' = We_crit σ / (ρ_g |u_rel|²)
///
/// # Example
/// ```
/// use nalgebra::{Point3, Vector3};
/// use spray::breakup::{BreakupMethod, WeberBreakup};
/// use spray::fluid::FluidSample;
/// use spray::material::{DensityFunction, TensionFunction};
/// use spray::parcel::{BinId, Parcel};
/// use units::{Density, DynamicViscosity, Length, SurfaceTension, Temperature};
///
/// let model = WeberBreakup::new(
///     DensityFunction::constant(Density::from_kg_per_m3(800.0)),
///     TensionFunction::constant(SurfaceTension::from_newtons_per_meter(0.03)),
///     6.0,
///     DynamicViscosity::from_pascal_seconds(1e-3),
/// )
/// .unwrap();
///
/// let gas = FluidSample::new(
///     Vector3::new(50.0, 0.0, 0.0),
///     Density::from_kg_per_m3(1.2),
///     DynamicViscosity::from_pascal_seconds(1.8e-5),
///     Temperature::from_kelvin(300.0),
/// );
/// let mut parcel = Parcel::new(
///     BinId(0),
///     Point3::origin(),
///     Vector3::zeros(),
///     Length::from_microns(100.0),
///     1.0,
///     Temperature::from_kelvin(300.0),
/// );
///
/// model.breakup(&mut parcel, 1e-6, &gas);
/// assert!((parcel.diameter - 6e-5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct WeberBreakup {
    density: DensityFunction,
    tension: TensionFunction,
    weber_critical: f64,
    droplet_viscosity: DynamicViscosity,
    timing: BreakupTiming,
}

impl WeberBreakup {
    pub const MODEL: &'static str = "WeberBreakup";

    /// Validate the constants and build an instantaneous-breakup model.
    ///
    /// `weber_critical` must be positive and finite; `droplet_viscosity`
    /// non-negative and finite.
    pub fn new(
        density: DensityFunction,
        tension: TensionFunction,
        weber_critical: f64,
        droplet_viscosity: DynamicViscosity,
    ) -> ConfigResult<Self> {
        if !(weber_critical.is_finite() && weber_critical > 0.0) {
            return Err(ConfigError::InvalidOption {
                model: Self::MODEL,
                option: WEBER_CRITICAL,
                value: weber_critical.to_string(),
                reason: "must be a positive number",
            });
        }

        let mu = droplet_viscosity.to_pascal_seconds();
        if !(mu.is_finite() && mu >= 0.0) {
            return Err(ConfigError::InvalidOption {
                model: Self::MODEL,
                option: DROPLET_VISCOSITY,
                value: mu.to_string(),
                reason: "must be a non-negative number",
            });
        }

        Ok(Self {
            density,
            tension,
            weber_critical,
            droplet_viscosity,
            timing: BreakupTiming::default(),
        })
    }

    /// Build from named options.
    ///
    /// Each option is looked up in `model_args` first, then `bin_options`,
    /// then the options of the bin's species in `species_db`.
    /// `WeberCritical` and `dropletViscosity` are required;
    /// `breakupTiming` defaults to `instantaneous`.
    pub fn from_options(
        eos: &ParticleBinEos,
        model_args: &OptionsList,
        bin_options: &OptionsList,
        species_db: &SpeciesDatabase,
    ) -> ConfigResult<Self> {
        let tension = eos.require_tension(Self::MODEL)?;
        let species = species_db.get(eos.species())?;
        let layers = [model_args, bin_options, &species.options];

        let weber_critical = first_real(Self::MODEL, &layers, WEBER_CRITICAL)?.ok_or(
            ConfigError::MissingOption {
                model: Self::MODEL,
                option: WEBER_CRITICAL,
            },
        )?;
        let viscosity = first_real(Self::MODEL, &layers, DROPLET_VISCOSITY)?.ok_or(
            ConfigError::MissingOption {
                model: Self::MODEL,
                option: DROPLET_VISCOSITY,
            },
        )?;
        let timing = match first_name(Self::MODEL, &layers, BREAKUP_TIMING)? {
            Some(name) => name.parse()?,
            None => BreakupTiming::default(),
        };

        Ok(Self::new(
            eos.density().clone(),
            tension,
            weber_critical,
            DynamicViscosity::from_pascal_seconds(viscosity),
        )?
        .with_timing(timing))
    }

    pub fn with_timing(mut self, timing: BreakupTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn weber_critical(&self) -> f64 {
        self.weber_critical
    }

    pub fn droplet_viscosity(&self) -> DynamicViscosity {
        self.droplet_viscosity
    }

    pub fn timing(&self) -> BreakupTiming {
        self.timing
    }

    /// Weber number of `parcel` in `fluid`.
    pub fn weber_number(&self, parcel: &Parcel, fluid: &FluidSample) -> f64 {
        drag::weber_number(
            fluid.density,
            parcel.slip_speed(fluid),
            parcel.diameter(),
            self.tension.tension(parcel.temperature),
        )
    }

    /// Diameter at which the parcel would be exactly critical, if it is
    /// currently unstable and that diameter is physical (0 < d' < d).
    pub fn stable_diameter(&self, parcel: &Parcel, fluid: &FluidSample) -> Option<f64> {
        let we = self.weber_number(parcel, fluid);
        if !(we > self.weber_critical) {
            return None;
        }

        let dynamic_pressure = fluid.density.to_kg_per_m3() * parcel.slip_speed(fluid).squared();
        let sigma = self.tension.tension(parcel.temperature).to_newtons_per_meter();
        let d_stable = self.weber_critical * sigma / dynamic_pressure;

        (d_stable.is_finite() && d_stable > 0.0 && d_stable < parcel.diameter).then_some(d_stable)
    }

    /// Characteristic breakup time of `parcel` in `fluid`.
    ///
    /// t_b = C_B (d / |u_rel|) √(ρ_l / ρ_g) (1 + 1.2 Oh^1.6)
    ///
    /// The Ohnesorge factor slows the breakup of viscous droplets.
    pub fn breakup_time(&self, parcel: &Parcel, fluid: &FluidSample) -> Time {
        let slip = parcel.slip_speed(fluid).to_meters_per_sec();
        let rho_l = self.density.density(parcel.temperature);
        let oh = drag::ohnesorge_number(
            self.droplet_viscosity,
            rho_l,
            self.tension.tension(parcel.temperature),
            parcel.diameter(),
        );

        let t_b = BREAKUP_TIME_CONSTANT
            * (parcel.diameter / slip)
            * (rho_l / fluid.density).sqrt()
            * (1.0 + 1.2 * oh.powf(1.6));

        Time::from_seconds(t_b)
    }
}

impl BreakupMethod for WeberBreakup {
    fn breakup(&self, parcel: &mut Parcel, dt: f64, fluid: &FluidSample) {
        assert!(dt > 0.0, "breakup step must be positive, got {dt}");
        assert!(
            parcel.diameter > 0.0,
            "parcel diameter must be positive, got {}",
            parcel.diameter
        );

        let Some(d_stable) = self.stable_diameter(parcel, fluid) else {
            return;
        };

        let d_old = parcel.diameter;
        let d_new = match self.timing {
            BreakupTiming::Instantaneous => d_stable,
            BreakupTiming::RateLimited => {
                let fraction = (dt / self.breakup_time(parcel, fluid).to_seconds()).min(1.0);
                d_old - (d_old - d_stable) * fraction
            }
        };

        // a non-finite breakup time leaves nothing to do
        if !(d_new > 0.0 && d_new < d_old) {
            return;
        }

        parcel.count *= (d_old / d_new).powi(3);
        parcel.diameter = d_new;

        trace!(
            "breakup: d {:.3e} -> {:.3e} m, count x{:.3}",
            d_old,
            d_new,
            (d_old / d_new).powi(3)
        );
    }

    fn name(&self) -> &'static str {
        Self::MODEL
    }
}
