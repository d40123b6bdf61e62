// Stem sets and the stem extractor
//
// A StemSet holds the five canonical stems of a word. Each is optional:
// an absent stem is derived from the lemma by the class rules when read.
// The extractor fills a StemSet from witness forms by stripping the
// known case endings.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use keinonto_core::{Case, FormKey, Number};

use crate::classifier::ClassifyError;

/// The witness forms the extractor understands, nominative first.
pub const WITNESS_KEYS: [FormKey; 6] = [
    FormKey::new(Case::Nominative, Number::Singular),
    FormKey::new(Case::Genitive, Number::Singular),
    FormKey::new(Case::Partitive, Number::Singular),
    FormKey::new(Case::Nominative, Number::Plural),
    FormKey::new(Case::Inessive, Number::Singular),
    FormKey::new(Case::Illative, Number::Singular),
];

const NOMINATIVE_SG: FormKey = WITNESS_KEYS[0];
const GENITIVE_SG: FormKey = WITNESS_KEYS[1];
const PARTITIVE_SG: FormKey = WITNESS_KEYS[2];
const NOMINATIVE_PL: FormKey = WITNESS_KEYS[3];
const INESSIVE_SG: FormKey = WITNESS_KEYS[4];
const ILLATIVE_SG: FormKey = WITNESS_KEYS[5];

// ---------------------------------------------------------------------------
// StemKind / StemSet
// ---------------------------------------------------------------------------

/// Which canonical stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemKind {
    /// Nominative singular stem.
    Strong,
    /// Genitive singular stem.
    Weak,
    /// Partitive singular stem.
    Partitive,
    /// Nominative plural stem.
    Plural,
    /// Illative singular stem.
    Illative,
}

impl StemKind {
    pub const ALL: [StemKind; 5] = [
        StemKind::Strong,
        StemKind::Weak,
        StemKind::Partitive,
        StemKind::Plural,
        StemKind::Illative,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StemKind::Strong => "strong",
            StemKind::Weak => "weak",
            StemKind::Partitive => "partitive",
            StemKind::Plural => "plural",
            StemKind::Illative => "illative",
        }
    }
}

impl fmt::Display for StemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown stem kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stem kind: {0} (expected strong, weak, partitive, plural or illative)")]
pub struct UnknownStemKind(pub String);

impl FromStr for StemKind {
    type Err = UnknownStemKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strong" => Ok(StemKind::Strong),
            "weak" | "genitive" => Ok(StemKind::Weak),
            "partitive" => Ok(StemKind::Partitive),
            "plural" => Ok(StemKind::Plural),
            "illative" => Ok(StemKind::Illative),
            _ => Err(UnknownStemKind(s.to_string())),
        }
    }
}

/// The canonical stems of a word. `None` means derive by rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weak: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partitive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illative: Option<String>,
}

impl StemSet {
    pub fn get(&self, kind: StemKind) -> Option<&str> {
        self.slot(kind).as_deref()
    }

    pub fn set(&mut self, kind: StemKind, stem: impl Into<String>) {
        *self.slot_mut(kind) = Some(stem.into());
    }

    pub fn clear(&mut self, kind: StemKind) {
        *self.slot_mut(kind) = None;
    }

    pub fn is_empty(&self) -> bool {
        StemKind::ALL.iter().all(|k| self.slot(*k).is_none())
    }

    /// Present stems in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StemKind, &str)> {
        StemKind::ALL
            .into_iter()
            .filter_map(|k| self.get(k).map(|s| (k, s)))
    }

    fn slot(&self, kind: StemKind) -> &Option<String> {
        match kind {
            StemKind::Strong => &self.strong,
            StemKind::Weak => &self.weak,
            StemKind::Partitive => &self.partitive,
            StemKind::Plural => &self.plural,
            StemKind::Illative => &self.illative,
        }
    }

    fn slot_mut(&mut self, kind: StemKind) -> &mut Option<String> {
        match kind {
            StemKind::Strong => &mut self.strong,
            StemKind::Weak => &mut self.weak,
            StemKind::Partitive => &mut self.partitive,
            StemKind::Plural => &mut self.plural,
            StemKind::Illative => &mut self.illative,
        }
    }
}

// ---------------------------------------------------------------------------
// Witnesses
// ---------------------------------------------------------------------------

/// Known correct inflected forms of one word, keyed by (case, number).
///
/// Serialized as a JSON object of `"case_number": "form"` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Witnesses(BTreeMap<FormKey, String>);

impl Witnesses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: FormKey, form: impl Into<String>) -> Self {
        self.insert(key, form);
        self
    }

    pub fn insert(&mut self, key: FormKey, form: impl Into<String>) {
        self.0.insert(key, form.into());
    }

    pub fn get(&self, key: FormKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn nominative(&self) -> Option<&str> {
        self.get(NOMINATIVE_SG)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every one of the six canonical witnesses is present.
    pub fn is_complete(&self) -> bool {
        WITNESS_KEYS.iter().all(|k| self.0.contains_key(k))
    }

    /// Canonical witness keys that are absent.
    pub fn missing(&self) -> Vec<FormKey> {
        WITNESS_KEYS
            .into_iter()
            .filter(|k| !self.0.contains_key(k))
            .collect()
    }
}

impl FromIterator<(FormKey, String)> for Witnesses {
    fn from_iter<I: IntoIterator<Item = (FormKey, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

fn strip_harmonic(form: &str, template: &str) -> Option<String> {
    ["a", "\u{00E4}"].iter().find_map(|v| {
        let ending = template.replace('A', v);
        form.strip_suffix(ending.as_str()).map(str::to_string)
    })
}

/// The stem a single witness form pins down, or `None` if the form lacks
/// the expected ending.
pub(crate) fn witness_stem(key: FormKey, form: &str) -> Option<String> {
    match key {
        NOMINATIVE_SG => Some(form.to_string()),
        GENITIVE_SG | ILLATIVE_SG => form.strip_suffix('n').map(str::to_string),
        PARTITIVE_SG => strip_harmonic(form, "A"),
        NOMINATIVE_PL => form.strip_suffix('t').map(str::to_string),
        INESSIVE_SG => strip_harmonic(form, "ssA"),
        _ => None,
    }
}

/// Derive the stem set of `lemma` from witness forms.
///
/// The nominative singular must be present and equal `lemma`, and at least
/// one other canonical witness must be given. Stems without a witness stay
/// `None`.
pub fn derive_stems(lemma: &str, witnesses: &Witnesses) -> Result<StemSet, ClassifyError> {
    let nominative = witnesses
        .nominative()
        .ok_or(ClassifyError::InsufficientWitnesses)?;
    if nominative != lemma {
        return Err(ClassifyError::LemmaMismatch {
            lemma: lemma.to_string(),
            nominative: nominative.to_string(),
        });
    }
    if !WITNESS_KEYS[1..].iter().any(|k| witnesses.get(*k).is_some()) {
        return Err(ClassifyError::InsufficientWitnesses);
    }

    let stem = |key: FormKey| witnesses.get(key).and_then(|f| witness_stem(key, f));
    let plural = stem(NOMINATIVE_PL);
    Ok(StemSet {
        strong: Some(nominative.to_string()),
        weak: stem(GENITIVE_SG)
            .or_else(|| stem(INESSIVE_SG))
            .or_else(|| plural.clone()),
        partitive: stem(PARTITIVE_SG),
        plural,
        illative: stem(ILLATIVE_SG),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sana() -> Witnesses {
        Witnesses::new()
            .with(NOMINATIVE_SG, "sana")
            .with(GENITIVE_SG, "sanan")
            .with(PARTITIVE_SG, "sanaa")
            .with(NOMINATIVE_PL, "sanat")
            .with(INESSIVE_SG, "sanassa")
            .with(ILLATIVE_SG, "sanaan")
    }

    #[test]
    fn full_witness_set() {
        let stems = derive_stems("sana", &sana()).unwrap();
        assert_eq!(stems.strong.as_deref(), Some("sana"));
        assert_eq!(stems.weak.as_deref(), Some("sana"));
        assert_eq!(stems.partitive.as_deref(), Some("sana"));
        assert_eq!(stems.plural.as_deref(), Some("sana"));
        assert_eq!(stems.illative.as_deref(), Some("sanaa"));
    }

    #[test]
    fn weak_falls_back_to_inessive_then_plural() {
        let w = Witnesses::new()
            .with(NOMINATIVE_SG, "kukka")
            .with(INESSIVE_SG, "kukassa");
        assert_eq!(derive_stems("kukka", &w).unwrap().weak.as_deref(), Some("kuka"));

        let w = Witnesses::new()
            .with(NOMINATIVE_SG, "p\u{00E4}iv\u{00E4}")
            .with(NOMINATIVE_PL, "p\u{00E4}iv\u{00E4}t");
        let stems = derive_stems("p\u{00E4}iv\u{00E4}", &w).unwrap();
        assert_eq!(stems.weak.as_deref(), Some("p\u{00E4}iv\u{00E4}"));
        assert_eq!(stems.partitive, None);
    }

    #[test]
    fn front_partitive_stripped() {
        let w = Witnesses::new()
            .with(NOMINATIVE_SG, "tiili")
            .with(PARTITIVE_SG, "tiilt\u{00E4}");
        assert_eq!(derive_stems("tiili", &w).unwrap().partitive.as_deref(), Some("tiilt"));
    }

    #[test]
    fn nominative_alone_is_insufficient() {
        let w = Witnesses::new().with(NOMINATIVE_SG, "talo");
        assert!(matches!(derive_stems("talo", &w), Err(ClassifyError::InsufficientWitnesses)));
        let w = Witnesses::new().with(GENITIVE_SG, "talon");
        assert!(matches!(derive_stems("talo", &w), Err(ClassifyError::InsufficientWitnesses)));
    }

    #[test]
    fn nominative_must_match_lemma() {
        let w = Witnesses::new()
            .with(NOMINATIVE_SG, "talo")
            .with(GENITIVE_SG, "talon");
        assert!(matches!(derive_stems("kala", &w), Err(ClassifyError::LemmaMismatch { .. })));
    }

    #[test]
    fn stem_kind_names() {
        assert_eq!("genitive".parse::<StemKind>(), Ok(StemKind::Weak));
        assert_eq!("Plural".parse::<StemKind>(), Ok(StemKind::Plural));
        assert!("oblique".parse::<StemKind>().is_err());
    }

    #[test]
    fn stem_set_accessors() {
        let mut stems = StemSet::default();
        assert!(stems.is_empty());
        stems.set(StemKind::Illative, "maaha");
        assert_eq!(stems.get(StemKind::Illative), Some("maaha"));
        assert_eq!(stems.iter().count(), 1);
        stems.clear(StemKind::Illative);
        assert!(stems.is_empty());
    }

    #[test]
    fn witnesses_json_shape() {
        let json = r#"{"nominative_singular":"sana","genitive_singular":"sanan"}"#;
        let w: Witnesses = serde_json::from_str(json).unwrap();
        assert_eq!(w.len(), 2);
        assert_eq!(w.get(GENITIVE_SG), Some("sanan"));
        assert!(!w.is_complete());
        assert_eq!(w.missing().len(), 4);
        assert!(sana().is_complete());
    }
}
