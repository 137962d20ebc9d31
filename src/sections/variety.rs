//! Character variety section - checks how many character classes appear.

use super::{PasswordFacts, SectionResult, Threshold};
use crate::charset::CharacterClass;

/// Checks the number of character classes present against the tier minimum.
///
/// # Returns
/// - `Some(reason)` listing the missing classes if too few are present
/// - `None` if enough classes are present
pub fn character_variety_section(facts: &PasswordFacts, threshold: &Threshold) -> SectionResult {
    if facts.class_count() >= threshold.min_classes {
        return None;
    }

    let missing: Vec<_> = CharacterClass::ALL
        .into_iter()
        .filter(|class| !facts.present.contains(class))
        .map(CharacterClass::label)
        .collect();

    Some(format!(
        "Use at least {} character types (missing: {})",
        threshold.min_classes,
        missing.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold(min_classes: usize) -> Threshold {
        Threshold {
            min_length: 0,
            min_classes,
        }
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = character_variety_section(&PasswordFacts::of("lowercase123!"), &threshold(4));
        assert_eq!(
            result,
            Some("Use at least 4 character types (missing: uppercase)".to_string())
        );
    }

    #[test]
    fn test_variety_section_lists_every_missing_class() {
        let result = character_variety_section(&PasswordFacts::of("abcdefg"), &threshold(2));
        let reason = result.expect("Expected a reason");
        assert!(reason.contains("uppercase"));
        assert!(reason.contains("numbers"));
        assert!(reason.contains("symbols"));
        assert!(!reason.contains("lowercase"));
    }

    #[test]
    fn test_variety_section_enough_classes() {
        let result = character_variety_section(&PasswordFacts::of("NoSymbols123"), &threshold(3));
        assert_eq!(result, None);
    }

    #[test]
    fn test_variety_section_all_categories() {
        let result = character_variety_section(&PasswordFacts::of("HasAll123!@#"), &threshold(4));
        assert_eq!(result, None);
    }
}
