//! Password strength rating - main rating logic.

use crate::rating::{Rating, Strength};
use crate::sections::{
    PasswordFacts, SectionResult, Threshold, character_variety_section, length_section,
};

#[cfg(feature = "async")]
use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// A rung of the strength ladder: a password short of `threshold` gets
/// `strength` and `fill_percent`.
struct Tier {
    threshold: Threshold,
    strength: Strength,
    fill_percent: u8,
}

/// Checked in order; the first tier the password falls short of wins.
const TIERS: [Tier; 3] = [
    Tier {
        threshold: Threshold { min_length: 6, min_classes: 2 },
        strength: Strength::Weak,
        fill_percent: 20,
    },
    Tier {
        threshold: Threshold { min_length: 8, min_classes: 3 },
        strength: Strength::Weak,
        fill_percent: 30,
    },
    Tier {
        threshold: Threshold { min_length: 12, min_classes: 4 },
        strength: Strength::Medium,
        fill_percent: 60,
    },
];

const STRONG_FILL_PERCENT: u8 = 100;

/// Rates a password by its length and the character classes it contains.
///
/// Pure: the result depends only on the text, not on which classes were
/// requested when it was generated. The empty string is weak.
pub fn rate(password: &str) -> Rating {
    let facts = PasswordFacts::of(password);

    for tier in &TIERS {
        if facts.length < tier.threshold.min_length
            || facts.class_count() < tier.threshold.min_classes
        {
            return Rating {
                strength: tier.strength,
                fill_percent: tier.fill_percent,
                reasons: shortfall_reasons(&facts, &tier.threshold),
            };
        }
    }

    Rating {
        strength: Strength::Strong,
        fill_percent: STRONG_FILL_PERCENT,
        reasons: Vec::new(),
    }
}

fn shortfall_reasons(facts: &PasswordFacts, threshold: &Threshold) -> Vec<String> {
    let sections: [fn(&PasswordFacts, &Threshold) -> SectionResult; 2] =
        [length_section, character_variety_section];

    sections
        .into_iter()
        .filter_map(|section| section(facts, threshold))
        .collect()
}

/// Rates a password after a short typing pause and sends the result.
///
/// Nothing is sent if `token` is cancelled before the pause ends, so a
/// caller can cancel a stale rating when the input changes again.
#[cfg(feature = "async")]
pub async fn rate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Rating>,
) {
    use std::time::Duration;

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("password rating cancelled");
        return;
    }

    let rating = rate(password.expose_secret());

    if let Err(e) = tx.send(rating).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password rating: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
