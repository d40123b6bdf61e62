//! Finnish noun inflection: classification, stems and form generation.
//!
//! A word is classified once from a handful of witness forms into one of
//! the 51 Kotus declension classes plus a consonant gradation pattern. Only
//! that assignment and any irregular stems or forms are stored; every other
//! form is derived from the static rule tables when requested.
//!
//! # Architecture
//!
//! - [`gradation`] -- Consonant gradation patterns and their application
//! - [`declension`] -- The 51-class rule table and suffix templates
//! - [`stems`] -- Stem sets, witness forms and the stem extractor
//! - [`entry`] -- The sparse persisted word record
//! - [`classifier`] -- Witness forms to (class, gradation)
//! - [`synthesis`] -- (entry, case, number) to surface form
//! - [`validate`] -- Case-ending and vowel-harmony checks on witnesses
//! - [`store`] -- Lemma-keyed persistence
//! - [`generator`] -- Facade tying the above together

mod cache;
pub mod classifier;
pub mod declension;
pub mod entry;
pub mod generator;
pub mod gradation;
pub mod stems;
pub mod store;
pub mod synthesis;
pub mod validate;

pub use classifier::{Classification, ClassifyError, classify, construct, reproduces_witnesses};
pub use declension::{DeclensionClass, InvalidClass, RULE_TABLE_VERSION};
pub use entry::WordEntry;
pub use generator::{Generator, GeneratorOptions, KeinontoError, WordInfo};
pub use gradation::{Grade, GradationPattern, Unclassified, UnknownGradation};
pub use stems::{StemKind, StemSet, Witnesses};
pub use store::{MemoryStore, StoreError, WordStore};
pub use synthesis::{GenerateError, generate, generate_all};
pub use validate::InvalidWitness;

pub use keinonto_core::{Case, FormKey, Number};
