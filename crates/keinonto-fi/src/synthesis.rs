// Form synthesis: (entry, case, number) -> surface form
//
// Generation is a pure function of the entry and the static tables:
//   1. an explicit form override wins;
//   2. the class template names a stem slot and an ending;
//   3. the slot is read from the stem overrides or derived by rule, in the
//      grade the slot calls for, from the strong stem (the lemma unless
//      overridden);
//   4. the ending's archiphonemes take the harmony of the stem, and an
//      oblique stem ending in vowel + `i` glides to `j` before a vowel.

use keinonto_core::character::is_vowel;
use keinonto_core::{Case, FormKey, Harmony, Number};

use crate::declension::rules::strip_chars;
use crate::declension::{GradationKind, StemSlot, SuffixTemplate, suffix_for};
use crate::entry::WordEntry;
use crate::gradation::Grade;
use crate::stems::{StemKind, StemSet};

/// Synthesis failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The paradigm leaves this (case, number) undefined.
    #[error("{key} is not defined for {lemma:?}")]
    UnsupportedCombination { lemma: String, key: FormKey },
}

/// Stem values derived once per entry, shared by every slot lookup.
struct Stems<'a> {
    entry: &'a WordEntry,
    /// Base of every lemma-derived stem: the strong stem override, or the
    /// lemma.
    strong: &'a str,
    /// Strong-grade vowel stem.
    vowel: String,
    /// Genitive-grade vowel stem.
    weak: String,
}

impl<'a> Stems<'a> {
    fn new(entry: &'a WordEntry) -> Self {
        let record = entry.class.record();
        let strong = entry.stems.get(StemKind::Strong).unwrap_or(entry.lemma.as_str());
        let vowel = record.vowel_stem(strong, entry.gradation);
        let weak = match entry.stems.get(StemKind::Weak) {
            Some(weak) => weak.to_string(),
            None => weaken(entry, &vowel),
        };
        Self {
            entry,
            strong,
            vowel,
            weak,
        }
    }

    fn slot(&self, slot: StemSlot) -> String {
        let entry = self.entry;
        let record = entry.class.record();
        let overridden = |kind: StemKind| entry.stems.get(kind).map(str::to_string);
        match slot {
            StemSlot::Lemma => self.strong.to_string(),
            StemSlot::Vowel => self.vowel.clone(),
            StemSlot::Weak => self.weak.clone(),
            StemSlot::Root => strip_chars(&self.vowel, 1).to_string(),
            StemSlot::Partitive => overridden(StemKind::Partitive)
                .unwrap_or_else(|| record.partitive.stem(self.strong, &self.vowel)),
            StemSlot::Illative => {
                overridden(StemKind::Illative).unwrap_or_else(|| record.illative.stem(&self.vowel))
            }
            StemSlot::Plural => overridden(StemKind::Plural).unwrap_or_else(|| self.weak.clone()),
            StemSlot::Oblique => self.oblique(),
            StemSlot::WeakOblique => weaken(entry, &self.oblique()),
        }
    }

    fn oblique(&self) -> String {
        self.entry.class.record().oblique.stem(self.strong, &self.vowel)
    }
}

/// Weak grade of a strong stem for straight-gradation classes; the stem
/// itself otherwise.
fn weaken(entry: &WordEntry, stem: &str) -> String {
    match entry.class.record().gradation {
        GradationKind::Straight => entry.gradation.apply(stem, Grade::Weak),
        GradationKind::None | GradationKind::Inverse => stem.to_string(),
    }
}

fn attach(stem: &str, template: &SuffixTemplate) -> String {
    let ending = template.resolve(Harmony::of(stem));
    let glides = matches!(template.slot, StemSlot::Oblique | StemSlot::WeakOblique)
        && ending.chars().next().is_some_and(is_vowel)
        && ends_in_vowel_i(stem);
    if glides {
        let base = strip_chars(stem, 1);
        return format!("{base}j{ending}");
    }
    format!("{stem}{ending}")
}

fn ends_in_vowel_i(stem: &str) -> bool {
    let mut rev = stem.chars().rev();
    matches!((rev.next(), rev.next()), (Some('i'), Some(prev)) if is_vowel(prev))
}

/// Generate the surface form of `entry` for `key`.
pub fn generate(entry: &WordEntry, key: FormKey) -> Result<String, GenerateError> {
    if let Some(form) = entry.form_override(key) {
        return Ok(form.to_string());
    }
    let template = suffix_for(entry.class, key).ok_or_else(|| GenerateError::UnsupportedCombination {
        lemma: entry.lemma.clone(),
        key,
    })?;
    let stems = Stems::new(entry);
    let stem = stems.slot(template.slot);
    Ok(attach(&stem, &template))
}

/// Convenience wrapper over [`generate`].
pub fn generate_case(entry: &WordEntry, case: Case, number: Number) -> Result<String, GenerateError> {
    generate(entry, FormKey::new(case, number))
}

/// Every defined form of `entry`, in paradigm order.
pub fn generate_all(entry: &WordEntry) -> Vec<(FormKey, String)> {
    FormKey::all()
        .filter_map(|key| generate(entry, key).ok().map(|form| (key, form)))
        .collect()
}

/// The full stem set of `entry`: overrides where present, rule-derived
/// stems elsewhere.
pub fn resolve_stems(entry: &WordEntry) -> StemSet {
    let stems = Stems::new(entry);
    StemSet {
        strong: Some(stems.slot(StemSlot::Lemma)),
        weak: Some(stems.slot(StemSlot::Weak)),
        partitive: Some(stems.slot(StemSlot::Partitive)),
        plural: Some(stems.slot(StemSlot::Plural)),
        illative: Some(stems.slot(StemSlot::Illative)),
    }
}
