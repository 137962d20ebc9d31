//! Password rating sections
//!
//! Each section checks one aspect of a password against a tier threshold
//! and explains the shortfall.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

use crate::charset::{ClassSet, classes_present};

/// Result type for section functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// The two measurements the strength rule depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordFacts {
    /// Length in characters.
    pub length: usize,
    pub present: ClassSet,
}

impl PasswordFacts {
    pub fn of(password: &str) -> Self {
        Self {
            length: password.chars().count(),
            present: classes_present(password),
        }
    }

    pub fn class_count(&self) -> usize {
        self.present.len()
    }
}

/// Minimums a password must reach to get past a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    pub min_length: usize,
    pub min_classes: usize,
}
