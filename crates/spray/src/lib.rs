//! Lagrangian spray parcel physics.
//!
//! This crate advances statistical droplet parcels through a gas flow:
//! - Drag-driven momentum exchange (rigid sphere and deforming droplet)
//! - Weber-number droplet breakup with mass-conserving parcel rescaling
//! - Temperature-dependent material properties shared per bin
//!
//! # Physics
//!
//! A parcel stands for `count` identical droplets of diameter `d`. Each
//! sub-step the surrounding solver samples the gas at the parcel position,
//! the bin's integrator applies drag and external acceleration, and the bin's
//! breakup model checks the Weber number
//!
//! We = ρ_g |u_rel|² d / σ
//!
//! against its critical value. Unstable parcels shrink to the critical
//! diameter and their count grows so that `count × d³` is unchanged.
//!
//! # Concurrency
//!
//! Integrators, breakup models and material functions are immutable and
//! `Send + Sync`; they live behind `Arc` in a [`ParticleBin`]. A parcel is
//! only ever borrowed mutably by the worker advancing it.

pub mod bin;
pub mod breakup;
pub mod config;
pub mod drag;
pub mod error;
pub mod fluid;
pub mod integrator;
pub mod material;
pub mod parcel;
pub mod substep;

#[cfg(test)]
mod drag_test;
#[cfg(test)]
mod integrator_test;
#[cfg(test)]
mod test_support;

pub use bin::{BinTable, ParticleBin};
pub use breakup::{BreakupMethod, BreakupTiming, NoBreakup, WeberBreakup};
pub use config::{
    build_bin, build_table, BinSpec, BreakupSpec, IntegratorKind, OptionValue, OptionsList,
    ParticleBinEos, SpeciesDatabase, SpeciesProperties,
};
pub use drag::{drag_coefficient, reynolds_number, weber_number, DragRegime};
pub use error::{ConfigError, ConfigResult};
pub use fluid::{FluidSample, FluidSampler, UniformFlow};
pub use integrator::{CliftGauvin, CliftGauvinDroplet, MomentumIntegrator};
pub use material::{DensityFunction, PropertyModel, TensionFunction};
pub use parcel::{BinId, Parcel};
pub use substep::{SubStepControl, SubStepStats};
