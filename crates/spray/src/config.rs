//! Building bins from named options and a species database.
//!
//! A bin is described by a [`BinSpec`]: the species it draws material
//! properties from, the momentum integrator to use and an optional breakup
//! model with its own argument list. All validation happens here, before any
//! parcel is advanced.
//!
//! ```text
//! BinSpec(
//!     name: "fuel",
//!     species: "n-heptane",
//!     integrator: CliftGauvinDroplet,
//!     breakup: Weber({"WeberCritical": 12.0}),
//!     options: {"dropletViscosity": 4.0e-4},
//! )
//! ```

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::bin::{BinTable, ParticleBin};
use crate::breakup::{BreakupMethod, NoBreakup, WeberBreakup};
use crate::error::{ConfigError, ConfigResult};
use crate::integrator::{CliftGauvin, CliftGauvinDroplet, MomentumIntegrator};
use crate::material::{DensityFunction, PropertyModel, TensionFunction};
use crate::parcel::BinId;

/// Critical Weber number of the Weber breakup model.
pub const WEBER_CRITICAL: &str = "WeberCritical";

/// Liquid dynamic viscosity (Pa·s) used by the breakup time scale.
pub const DROPLET_VISCOSITY: &str = "dropletViscosity";

/// Breakup timing policy, `instantaneous` or `rateLimited`.
pub const BREAKUP_TIMING: &str = "breakupTiming";

/// A single option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Real(f64),
    Name(String),
}

/// Named options attached to a model, bin or species.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionsList(BTreeMap<String, OptionValue>);

impl OptionsList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_real(mut self, option: &str, value: f64) -> Self {
        self.0.insert(option.to_string(), OptionValue::Real(value));
        self
    }

    pub fn with_name(mut self, option: &str, value: &str) -> Self {
        self.0
            .insert(option.to_string(), OptionValue::Name(value.to_string()));
        self
    }

    pub fn get(&self, option: &str) -> Option<&OptionValue> {
        self.0.get(option)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric option, or an error if it is present but not a number.
    pub fn real(&self, model: &'static str, option: &'static str) -> ConfigResult<Option<f64>> {
        match self.get(option) {
            None => Ok(None),
            Some(OptionValue::Real(value)) => Ok(Some(*value)),
            Some(OptionValue::Name(value)) => Err(ConfigError::InvalidOption {
                model,
                option,
                value: format!("\"{value}\""),
                reason: "expected a number",
            }),
        }
    }

    /// Named option, or an error if it is present but not a name.
    pub fn name(&self, model: &'static str, option: &'static str) -> ConfigResult<Option<&str>> {
        match self.get(option) {
            None => Ok(None),
            Some(OptionValue::Name(value)) => Ok(Some(value.as_str())),
            Some(OptionValue::Real(value)) => Err(ConfigError::InvalidOption {
                model,
                option,
                value: value.to_string(),
                reason: "expected a name",
            }),
        }
    }
}

/// First numeric value of `option` across `layers`, highest priority first.
pub fn first_real(
    model: &'static str,
    layers: &[&OptionsList],
    option: &'static str,
) -> ConfigResult<Option<f64>> {
    for layer in layers {
        if let Some(value) = layer.real(model, option)? {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// First named value of `option` across `layers`, highest priority first.
pub fn first_name<'a>(
    model: &'static str,
    layers: &[&'a OptionsList],
    option: &'static str,
) -> ConfigResult<Option<&'a str>> {
    for &layer in layers {
        if let Some(value) = layer.name(model, option)? {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Material data for one species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProperties {
    pub density: PropertyModel,
    #[serde(default)]
    pub surface_tension: Option<PropertyModel>,
    #[serde(default)]
    pub options: OptionsList,
}

/// Species name → material data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesDatabase(BTreeMap<String, SpeciesProperties>);

impl SpeciesDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_species(mut self, name: &str, properties: SpeciesProperties) -> Self {
        self.0.insert(name.to_string(), properties);
        self
    }

    pub fn get(&self, name: &str) -> ConfigResult<&SpeciesProperties> {
        self.0
            .get(name)
            .ok_or_else(|| ConfigError::UnknownSpecies(name.to_string()))
    }
}

/// Material-property functions bound for the species of one bin.
#[derive(Debug, Clone)]
pub struct ParticleBinEos {
    species: String,
    density: DensityFunction,
    tension: Option<TensionFunction>,
}

impl ParticleBinEos {
    pub fn new(species: &str, density: DensityFunction, tension: Option<TensionFunction>) -> Self {
        Self {
            species: species.to_string(),
            density,
            tension,
        }
    }

    /// Bind the property models of `species` from the database.
    pub fn from_species(species: &str, db: &SpeciesDatabase) -> ConfigResult<Self> {
        let properties = db.get(species)?;

        check_property(species, "density", &properties.density)?;
        if let Some(model) = &properties.surface_tension {
            check_property(species, "surface tension", model)?;
        }

        Ok(Self {
            species: species.to_string(),
            density: DensityFunction::new(properties.density.clone()),
            tension: properties.surface_tension.clone().map(TensionFunction::new),
        })
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn density(&self) -> &DensityFunction {
        &self.density
    }

    pub fn tension(&self) -> Option<&TensionFunction> {
        self.tension.as_ref()
    }

    /// The surface-tension function, required by `model`.
    pub fn require_tension(&self, model: &'static str) -> ConfigResult<TensionFunction> {
        self.tension
            .clone()
            .ok_or_else(|| ConfigError::MissingProperty {
                model,
                species: self.species.clone(),
                property: "surface tension",
            })
    }
}

fn check_property(species: &str, property: &'static str, model: &PropertyModel) -> ConfigResult<()> {
    match model.defect() {
        None => Ok(()),
        Some(reason) => Err(ConfigError::InvalidProperty {
            species: species.to_string(),
            property,
            reason,
        }),
    }
}

/// Momentum integrator selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntegratorKind {
    #[default]
    CliftGauvin,
    CliftGauvinDroplet,
}

/// Breakup model selection with the model's own arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum BreakupSpec {
    #[default]
    Disabled,
    Weber(OptionsList),
}

/// Configuration of one bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinSpec {
    pub name: String,
    pub species: String,
    #[serde(default)]
    pub integrator: IntegratorKind,
    #[serde(default)]
    pub breakup: BreakupSpec,
    #[serde(default)]
    pub options: OptionsList,
}

pub fn build_integrator(
    kind: IntegratorKind,
    eos: &ParticleBinEos,
) -> ConfigResult<Arc<dyn MomentumIntegrator>> {
    Ok(match kind {
        IntegratorKind::CliftGauvin => Arc::new(CliftGauvin::new(eos.density().clone())),
        IntegratorKind::CliftGauvinDroplet => Arc::new(CliftGauvinDroplet::new(
            eos.density().clone(),
            eos.require_tension("CliftGauvinDroplet")?,
        )),
    })
}

pub fn build_breakup(
    spec: &BreakupSpec,
    eos: &ParticleBinEos,
    bin_options: &OptionsList,
    db: &SpeciesDatabase,
) -> ConfigResult<Arc<dyn BreakupMethod>> {
    Ok(match spec {
        BreakupSpec::Disabled => Arc::new(NoBreakup),
        BreakupSpec::Weber(args) => Arc::new(WeberBreakup::from_options(eos, args, bin_options, db)?),
    })
}

/// Build one bin.
pub fn build_bin(id: BinId, spec: &BinSpec, db: &SpeciesDatabase) -> ConfigResult<ParticleBin> {
    let eos = ParticleBinEos::from_species(&spec.species, db)?;
    let integrator = build_integrator(spec.integrator, &eos)?;
    let breakup = build_breakup(&spec.breakup, &eos, &spec.options, db)?;

    debug!(
        "bin {} `{}`: species {}, integrator {}, breakup {}",
        id.0,
        spec.name,
        spec.species,
        integrator.name(),
        breakup.name()
    );

    Ok(ParticleBin::new(id, &spec.name, eos, integrator, breakup))
}

/// Build every bin; bin ids follow the order of `specs`.
pub fn build_table(specs: &[BinSpec], db: &SpeciesDatabase) -> ConfigResult<BinTable> {
    let mut seen = HashSet::new();
    let mut table = BinTable::new();

    for (idx, spec) in specs.iter().enumerate() {
        if !seen.insert(spec.name.as_str()) {
            return Err(ConfigError::DuplicateBin(spec.name.clone()));
        }
        table.push(build_bin(BinId(idx as u32), spec, db)?);
    }

    Ok(table)
}
