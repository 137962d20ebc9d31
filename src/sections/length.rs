//! Length section - checks the password reaches a tier's minimum length.

use super::{PasswordFacts, SectionResult, Threshold};

/// Checks the password length against the tier minimum.
///
/// # Returns
/// - `Some(reason)` if the password is too short
/// - `None` if the password is long enough
pub fn length_section(facts: &PasswordFacts, threshold: &Threshold) -> SectionResult {
    if facts.length < threshold.min_length {
        return Some(format!(
            "Password must be at least {} characters",
            threshold.min_length
        ));
    }
    None
}
