//! Password requests and their validation.

use thiserror::Error;

use crate::charset::{CharacterClass, ClassSet, combined_alphabet};

pub const DEFAULT_LENGTH: usize = 12;

/// Contract violation on a [`PasswordRequest`].
///
/// Callers are expected to validate user input before generating; the
/// generator still checks and fails fast instead of panicking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("Select at least one character type")]
    NoCharacterClasses,
    #[error("Password length must be at least 1")]
    ZeroLength,
}

/// What to generate: how many characters and from which classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: usize,
    pub enabled_classes: ClassSet,
}

impl PasswordRequest {
    /// Builds a request and validates it.
    pub fn new<I>(length: usize, classes: I) -> Result<Self, InvalidRequest>
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        let request = Self {
            length,
            enabled_classes: classes.into_iter().collect(),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if self.enabled_classes.is_empty() {
            return Err(InvalidRequest::NoCharacterClasses);
        }
        if self.length == 0 {
            return Err(InvalidRequest::ZeroLength);
        }
        Ok(())
    }

    /// The sampling domain for this request.
    pub fn alphabet(&self) -> Vec<char> {
        combined_alphabet(&self.enabled_classes)
    }
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            enabled_classes: CharacterClass::ALL.into_iter().collect(),
        }
    }
}
