//! Configuration errors raised while building bins and their models.

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{model}: missing required option `{option}`")]
    MissingOption {
        model: &'static str,
        option: &'static str,
    },

    #[error("{model}: invalid value {value} for option `{option}`, {reason}")]
    InvalidOption {
        model: &'static str,
        option: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("unknown species `{0}`")]
    UnknownSpecies(String),

    #[error("{model}: species `{species}` has no {property} model")]
    MissingProperty {
        model: &'static str,
        species: String,
        property: &'static str,
    },

    #[error("species `{species}`: invalid {property} model, {reason}")]
    InvalidProperty {
        species: String,
        property: &'static str,
        reason: &'static str,
    },

    #[error("bin `{0}` is defined more than once")]
    DuplicateBin(String),
}
