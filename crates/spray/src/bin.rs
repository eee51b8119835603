//! Particle bins: the shared models governing a group of parcels.
//!
//! A `ParticleBin` bundles the material functions of one species with the
//! momentum integrator and breakup model selected for it. Bins are built once
//! from configuration and shared read-only by every parcel whose `bin` refers
//! to them, so a `BinTable` can drive many parcels in parallel.

use std::sync::Arc;

use log::warn;
use nalgebra::Vector3;
use rayon::prelude::*;
use units::Time;

use crate::breakup::BreakupMethod;
use crate::config::ParticleBinEos;
use crate::fluid::{FluidSample, FluidSampler};
use crate::integrator::MomentumIntegrator;
use crate::parcel::{BinId, Parcel};
use crate::substep::{SubStepControl, SubStepStats};

/// Models and materials shared by all parcels of one bin.
#[derive(Debug, Clone)]
pub struct ParticleBin {
    id: BinId,
    name: String,
    eos: ParticleBinEos,
    integrator: Arc<dyn MomentumIntegrator>,
    breakup: Arc<dyn BreakupMethod>,
}

impl ParticleBin {
    pub fn new(
        id: BinId,
        name: &str,
        eos: ParticleBinEos,
        integrator: Arc<dyn MomentumIntegrator>,
        breakup: Arc<dyn BreakupMethod>,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            eos,
            integrator,
            breakup,
        }
    }

    pub fn id(&self) -> BinId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn eos(&self) -> &ParticleBinEos {
        &self.eos
    }

    pub fn integrator(&self) -> &dyn MomentumIntegrator {
        self.integrator.as_ref()
    }

    pub fn breakup(&self) -> &dyn BreakupMethod {
        self.breakup.as_ref()
    }

    /// Total liquid mass of `parcel` under this bin's density law (kg).
    pub fn parcel_mass(&self, parcel: &Parcel) -> f64 {
        parcel.mass(self.eos.density())
    }

    /// One sub-step: sample the fluid, integrate momentum, then evaluate
    /// breakup against the same sample. Returns the Reynolds number.
    pub fn sub_step(
        &self,
        parcel: &mut Parcel,
        dt: f64,
        sampler: &dyn FluidSampler,
        accel: &Vector3<f64>,
    ) -> f64 {
        let fluid = sampler.sample(&parcel.position);
        self.step_in(parcel, dt, &fluid, accel)
    }

    fn step_in(
        &self,
        parcel: &mut Parcel,
        dt: f64,
        fluid: &FluidSample,
        accel: &Vector3<f64>,
    ) -> f64 {
        let re = self.integrator.integrate_momentum(parcel, dt, fluid, accel);
        self.breakup.breakup(parcel, dt, fluid);
        re
    }

    /// Advance `parcel` through `time_of_flight`, sub-stepping on its
    /// response time.
    pub fn advance(
        &self,
        parcel: &mut Parcel,
        time_of_flight: Time,
        sampler: &dyn FluidSampler,
        accel: &Vector3<f64>,
        control: &SubStepControl,
    ) -> SubStepStats {
        let mut stats = SubStepStats {
            parcels: 1,
            ..SubStepStats::default()
        };
        let mut elapsed = Time::zero();

        loop {
            let remaining = time_of_flight - elapsed;
            if control.is_complete(remaining, time_of_flight) {
                break;
            }
            if stats.substeps == control.max_substeps {
                warn!(
                    "bin `{}`: sub-step budget of {} spent with {:.3e} s of flight left",
                    self.name,
                    control.max_substeps,
                    remaining.to_seconds()
                );
                stats.exhausted = 1;
                break;
            }

            let fluid = sampler.sample(&parcel.position);
            let tau = self.integrator.response_time(parcel, &fluid);
            let dt = control.choose_step(remaining, tau);

            let re = self.step_in(parcel, dt.to_seconds(), &fluid, accel);

            stats.substeps += 1;
            stats.max_reynolds = stats.max_reynolds.max(re);
            elapsed = elapsed + dt;
        }

        stats
    }
}

/// All bins of a run, indexed by `BinId`.
#[derive(Debug, Clone, Default)]
pub struct BinTable {
    bins: Vec<ParticleBin>,
}

impl BinTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bin. Its id must equal its position in the table.
    ///
    /// # Panics
    ///
    /// If `bin.id()` does not match the next free index.
    pub fn push(&mut self, bin: ParticleBin) {
        assert_eq!(
            bin.id().index(),
            self.bins.len(),
            "bin `{}` has id {} but would be stored at {}",
            bin.name(),
            bin.id().0,
            self.bins.len()
        );
        self.bins.push(bin);
    }

    pub fn get(&self, id: BinId) -> Option<&ParticleBin> {
        self.bins.get(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&ParticleBin> {
        self.bins.iter().find(|bin| bin.name() == name)
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticleBin> {
        self.bins.iter()
    }

    /// Bin governing `parcel`.
    ///
    /// # Panics
    ///
    /// If the parcel refers to a bin that does not exist.
    pub fn bin_of(&self, parcel: &Parcel) -> &ParticleBin {
        match self.get(parcel.bin) {
            Some(bin) => bin,
            None => panic!(
                "parcel refers to bin {} but only {} bins exist",
                parcel.bin.0,
                self.bins.len()
            ),
        }
    }

    /// Total liquid mass of `parcels` (kg).
    pub fn total_mass(&self, parcels: &[Parcel]) -> f64 {
        parcels
            .iter()
            .map(|parcel| self.bin_of(parcel).parcel_mass(parcel))
            .sum()
    }

    /// Advance every parcel through `time_of_flight` in parallel.
    ///
    /// Parcels are independent; each is borrowed by exactly one worker.
    pub fn advance_parcels(
        &self,
        parcels: &mut [Parcel],
        time_of_flight: Time,
        sampler: &dyn FluidSampler,
        accel: &Vector3<f64>,
        control: &SubStepControl,
    ) -> SubStepStats {
        parcels
            .par_iter_mut()
            .map(|parcel| {
                self.bin_of(parcel)
                    .advance(parcel, time_of_flight, sampler, accel, control)
            })
            .reduce(SubStepStats::default, SubStepStats::merge)
    }
}
