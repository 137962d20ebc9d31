//! Password generation and strength rating library
//!
//! This library builds random passwords from a chosen set of character
//! classes and rates any password as weak, medium or strong from its
//! length and the classes it contains.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced, cancellable rating helper
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GEN_LENGTH`: Default password length (default: `12`)
//! - `PWD_GEN_CLASSES`: Default character classes, comma separated
//!   (default: `uppercase,lowercase,numbers,symbols`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{generate_password, rate, CharacterClass, PasswordRequest};
//! use secrecy::ExposeSecret;
//!
//! let request = PasswordRequest::new(16, CharacterClass::ALL).expect("valid request");
//! let password = generate_password(&request).expect("valid request");
//!
//! println!("Password: {}", password.value().expose_secret());
//! println!("Strength: {}", password.strength());
//!
//! let rating = rate("Abc12345!");
//! println!("{} ({}%)", rating.strength(), rating.fill_percent());
//! ```

// Internal modules
mod charset;
mod config;
mod evaluator;
mod generator;
mod rating;
mod request;
mod sections;

// Public API
pub use charset::{CharacterClass, ClassSet, UnknownClass, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use config::{get_default_classes, get_default_length, ConfigError};
pub use evaluator::rate;
pub use generator::{generate, generate_password, GeneratedPassword};
pub use rating::{Rating, Strength};
pub use request::{InvalidRequest, PasswordRequest, DEFAULT_LENGTH};

#[cfg(feature = "async")]
pub use evaluator::rate_password_tx;
