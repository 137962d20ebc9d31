//! Random password construction.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::rate;
use crate::rating::{Rating, Strength};
use crate::request::{InvalidRequest, PasswordRequest};

/// A password produced for a request, together with its rating.
///
/// The value is kept in a [`SecretString`]: it is zeroized on drop and
/// redacted from `Debug` output.
#[derive(Debug)]
pub struct GeneratedPassword {
    value: SecretString,
    rating: Rating,
}

impl GeneratedPassword {
    pub fn value(&self) -> &SecretString {
        &self.value
    }

    pub fn strength(&self) -> Strength {
        self.rating.strength()
    }

    pub fn rating(&self) -> &Rating {
        &self.rating
    }

    /// Number of characters in the password.
    pub fn len(&self) -> usize {
        self.value.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.expose_secret().is_empty()
    }
}

/// Generates a password for `request` using `rng`.
///
/// Each character is drawn independently and uniformly from the
/// concatenation of the enabled alphabets, so larger classes show up more
/// often and a password may lack some of the requested classes entirely.
///
/// # Errors
///
/// Returns [`InvalidRequest`] if no class is enabled or the length is zero.
/// No randomness is consumed in that case.
pub fn generate<R>(request: &PasswordRequest, rng: &mut R) -> Result<GeneratedPassword, InvalidRequest>
where
    R: Rng + ?Sized,
{
    if let Err(e) = request.validate() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected password request: {}", e);
        return Err(e);
    }

    let alphabet = request.alphabet();
    let value: String = (0..request.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = request.length,
        classes = request.enabled_classes.len(),
        alphabet = alphabet.len(),
        "password generated"
    );

    let rating = rate(&value);
    Ok(GeneratedPassword {
        value: SecretString::new(value.into()),
        rating,
    })
}

/// Generates a password with the thread-local RNG.
///
/// `rand::thread_rng` is a cryptographically secure generator, periodically
/// reseeded from the operating system.
pub fn generate_password(request: &PasswordRequest) -> Result<GeneratedPassword, InvalidRequest> {
    generate(request, &mut rand::thread_rng())
}
