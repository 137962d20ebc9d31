//! Strength categories and rating results.

use std::fmt;

/// Categorical strength of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of rating a password.
///
/// `fill_percent` is the proportion of a strength meter to fill. It is not
/// a function of `strength` alone: a weak password fills 20 or 30.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub(crate) strength: Strength,
    pub(crate) fill_percent: u8,
    pub(crate) reasons: Vec<String>,
}

impl Rating {
    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn fill_percent(&self) -> u8 {
        self.fill_percent
    }

    /// What keeps the password out of the next tier. Empty when strong.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_labels() {
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Medium.to_string(), "Medium");
        assert_eq!(Strength::Strong.to_string(), "Strong");
    }

    #[test]
    fn test_strength_ordering() {
        assert!(Strength::Weak < Strength::Medium);
        assert!(Strength::Medium < Strength::Strong);
    }
}
