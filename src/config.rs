//! Request defaults from the environment.

use std::env::VarError;

use thiserror::Error;

use crate::charset::{CharacterClass, ClassSet, UnknownClass};
use crate::request::{DEFAULT_LENGTH, InvalidRequest, PasswordRequest};

pub const LENGTH_VAR: &str = "PWD_GEN_LENGTH";
pub const CLASSES_VAR: &str = "PWD_GEN_CLASSES";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PWD_GEN_LENGTH value: {0:?}")]
    InvalidLength(String),
    #[error("Unknown character class in PWD_GEN_CLASSES: {0:?}")]
    UnknownClass(String),
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
    #[error(transparent)]
    Invalid(#[from] InvalidRequest),
}

/// Returns the default password length.
///
/// Priority:
/// 1. Environment variable `PWD_GEN_LENGTH`
/// 2. `12`
pub fn get_default_length() -> Result<usize, ConfigError> {
    match std::env::var(LENGTH_VAR) {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(length) => Ok(length),
            Err(_) => Err(ConfigError::InvalidLength(raw)),
        },
        Err(VarError::NotPresent) => Ok(DEFAULT_LENGTH),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(LENGTH_VAR)),
    }
}

/// Returns the default enabled classes.
///
/// Priority:
/// 1. Environment variable `PWD_GEN_CLASSES`, comma separated labels
///    such as `uppercase,numbers`
/// 2. All four classes
pub fn get_default_classes() -> Result<ClassSet, ConfigError> {
    match std::env::var(CLASSES_VAR) {
        Ok(raw) => parse_classes(&raw),
        Err(VarError::NotPresent) => Ok(CharacterClass::ALL.into_iter().collect()),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(CLASSES_VAR)),
    }
}

fn parse_classes(raw: &str) -> Result<ClassSet, ConfigError> {
    let mut classes = ClassSet::new();
    for label in raw.split(',').filter(|l| !l.trim().is_empty()) {
        let class = label
            .parse::<CharacterClass>()
            .map_err(|UnknownClass(label)| ConfigError::UnknownClass(label))?;
        classes.insert(class);
    }
    Ok(classes)
}

impl PasswordRequest {
    /// Builds a validated request from `PWD_GEN_LENGTH` and `PWD_GEN_CLASSES`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - either variable is not valid unicode
    /// - the length is not a non-negative integer
    /// - a class label is unknown
    /// - the resulting request is invalid (zero length, no classes)
    pub fn from_env() -> Result<Self, ConfigError> {
        let length = get_default_length()?;
        let classes = get_default_classes()?;
        let request = PasswordRequest::new(length, classes)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Password defaults loaded: length {}, {} classes",
            request.length,
            request.enabled_classes.len()
        );

        Ok(request)
    }
}
