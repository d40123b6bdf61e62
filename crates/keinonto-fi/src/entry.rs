// WordEntry: the persisted unit of the lexicon

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use keinonto_core::FormKey;

use crate::declension::DeclensionClass;
use crate::gradation::GradationPattern;
use crate::stems::{StemKind, StemSet};

/// One word: its class assignment plus whatever the rules cannot derive.
///
/// The serialized record is sparse. A regular word stores only lemma,
/// class and gradation; stems and forms appear only as exceptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub lemma: String,
    pub class: DeclensionClass,
    #[serde(default, skip_serializing_if = "no_gradation")]
    pub gradation: GradationPattern,
    /// Stem overrides.
    #[serde(default, skip_serializing_if = "StemSet::is_empty")]
    pub stems: StemSet,
    /// Surface form overrides.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub forms: BTreeMap<FormKey, String>,
}

impl WordEntry {
    /// A rule-only entry with no overrides.
    pub fn new(lemma: impl Into<String>, class: DeclensionClass, gradation: GradationPattern) -> Self {
        Self {
            lemma: lemma.into(),
            class,
            gradation,
            stems: StemSet::default(),
            forms: BTreeMap::new(),
        }
    }

    pub fn set_stem(&mut self, kind: StemKind, stem: impl Into<String>) {
        self.stems.set(kind, stem);
    }

    pub fn set_form(&mut self, key: FormKey, form: impl Into<String>) {
        self.forms.insert(key, form.into());
    }

    pub fn form_override(&self, key: FormKey) -> Option<&str> {
        self.forms.get(&key).map(String::as_str)
    }

    /// Whether the entry carries no overrides at all.
    pub fn is_regular(&self) -> bool {
        self.stems.is_empty() && self.forms.is_empty()
    }
}

fn no_gradation(pattern: &GradationPattern) -> bool {
    pattern.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use keinonto_core::{Case, Number};

    #[test]
    fn regular_record_is_sparse() {
        let entry = WordEntry::new("sana", DeclensionClass::Kala, GradationPattern::None);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"lemma":"sana","class":9}"#);
        assert!(entry.is_regular());
    }

    #[test]
    fn overrides_serialize() {
        let mut entry = WordEntry::new("kukka", DeclensionClass::Koira, GradationPattern::KkK);
        entry.set_form(FormKey::new(Case::Genitive, Number::Plural), "kukkain");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"lemma":"kukka","class":10,"gradation":"kk-k","forms":{"genitive_plural":"kukkain"}}"#
        );
        let back: WordEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
        assert!(!back.is_regular());
    }

    #[test]
    fn rejects_out_of_range_class() {
        let err = serde_json::from_str::<WordEntry>(r#"{"lemma":"x","class":60}"#);
        assert!(err.is_err());
    }
}
