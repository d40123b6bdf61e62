//! Shared vocabulary for Finnish noun inflection.
//!
//! - [`case`] -- grammatical case, number and the `(case, number)` form key
//! - [`character`] -- vowel/consonant classification, syllable counting
//! - [`harmony`] -- vowel harmony and archiphoneme resolution

pub mod case;
pub mod character;
pub mod harmony;

pub use case::{Case, FormKey, Number};
pub use harmony::Harmony;

/// Error type for parsing textual case, number and form-key names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown case: {0}")]
    UnknownCase(String),
    #[error("unknown number: {0}")]
    UnknownNumber(String),
    #[error("invalid case/number key {0:?}; expected e.g. 'nominative_singular'")]
    InvalidFormKey(String),
}
