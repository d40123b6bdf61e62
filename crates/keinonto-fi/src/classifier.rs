// Declension classifier: witness forms -> (class, gradation)
//
// Candidates come from the rule table in plausibility order. For each one
// the lemma is projected onto the class's vowel stem, the gradation is
// read off against the witness weak stem, and the witnesses are
// regenerated from a rule-only entry. The first candidate that reproduces
// every witness wins.

use tracing::{debug, info};

use keinonto_core::{Case, FormKey, Number};

use crate::declension::{ClassRecord, DeclensionClass, GradationKind, classes_for};
use crate::entry::WordEntry;
use crate::gradation::{GradationPattern, Unclassified};
use crate::stems::{StemKind, StemSet, Witnesses, derive_stems, witness_stem};
use crate::synthesis::{generate, resolve_stems};

/// Classification failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("insufficient witnesses: the nominative singular and at least one other form are required")]
    InsufficientWitnesses,

    #[error("explicit construction needs all six witness forms; missing: {}", missing.join(", "))]
    IncompleteWitnesses { missing: Vec<String> },

    #[error("nominative singular {nominative:?} does not match lemma {lemma:?}")]
    LemmaMismatch { lemma: String, nominative: String },

    #[error(transparent)]
    Unclassified(#[from] Unclassified),

    #[error("no declension class reproduces the witness forms of {lemma:?}")]
    AmbiguousOrUnknownClass { lemma: String },
}

/// An accepted classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub lemma: String,
    pub class: DeclensionClass,
    pub gradation: GradationPattern,
    /// Every stem, as derived by rule.
    pub stems: StemSet,
}

impl Classification {
    /// The rule-only entry to persist: no stem or form overrides.
    pub fn into_entry(self) -> WordEntry {
        WordEntry::new(self.lemma, self.class, self.gradation)
    }
}

/// Gradation pattern `record` needs to turn `lemma` into the witness weak
/// stem. Without a weak stem the class default applies.
fn candidate_gradation(
    record: &ClassRecord,
    lemma: &str,
    weak: Option<&str>,
) -> Result<GradationPattern, Unclassified> {
    let Some(weak) = weak else {
        return Ok(record.default_gradation);
    };
    let projected = record.project(lemma);
    let pattern = match record.gradation {
        GradationKind::Inverse => GradationPattern::classify(weak, &projected)?,
        GradationKind::Straight | GradationKind::None => GradationPattern::classify(&projected, weak)?,
    };
    if record.gradation == GradationKind::None && !pattern.is_none() {
        return Err(Unclassified {
            strong: projected,
            weak: weak.to_string(),
        });
    }
    Ok(pattern)
}

/// Whether `entry` regenerates every witness form exactly.
pub fn reproduces_witnesses(entry: &WordEntry, witnesses: &Witnesses) -> bool {
    witnesses
        .iter()
        .all(|(key, form)| generate(entry, key).is_ok_and(|generated| generated == form))
}

/// Assign a declension class and gradation pattern to `lemma`.
///
/// Fails with [`ClassifyError::Unclassified`] when no candidate could
/// explain the gradation, and with
/// [`ClassifyError::AmbiguousOrUnknownClass`] when candidates remain but
/// none reproduces the witnesses.
pub fn classify(lemma: &str, witnesses: &Witnesses) -> Result<Classification, ClassifyError> {
    let stems = derive_stems(lemma, witnesses)?;
    let candidates = classes_for(lemma);
    debug!(lemma, candidates = candidates.len(), "classifying");

    let mut gradation_failures = 0;
    let mut last_unclassified = None;
    for &class in &candidates {
        let gradation = match candidate_gradation(class.record(), lemma, stems.weak.as_deref()) {
            Ok(pattern) => pattern,
            Err(err) => {
                debug!(lemma, class = class.id(), %err, "gradation rejected");
                gradation_failures += 1;
                last_unclassified = Some(err);
                continue;
            }
        };
        let entry = WordEntry::new(lemma, class, gradation);
        if reproduces_witnesses(&entry, witnesses) {
            info!(lemma, class = class.id(), %gradation, "classified");
            return Ok(Classification {
                lemma: lemma.to_string(),
                class,
                gradation,
                stems: resolve_stems(&entry),
            });
        }
        debug!(lemma, class = class.id(), "witnesses not reproduced");
    }

    match last_unclassified {
        Some(err) if gradation_failures == candidates.len() => Err(err.into()),
        _ => Err(ClassifyError::AmbiguousOrUnknownClass {
            lemma: lemma.to_string(),
        }),
    }
}

/// Witness forms and the stem override that can explain each, in the order
/// explicit construction tries them.
const OVERRIDE_ORDER: [(FormKey, StemKind); 5] = [
    (FormKey::new(Case::Genitive, Number::Singular), StemKind::Weak),
    (FormKey::new(Case::Partitive, Number::Singular), StemKind::Partitive),
    (FormKey::new(Case::Nominative, Number::Plural), StemKind::Plural),
    (FormKey::new(Case::Illative, Number::Singular), StemKind::Illative),
    (FormKey::new(Case::Inessive, Number::Singular), StemKind::Weak),
];

/// Build an entry for `lemma` in an explicitly chosen class.
///
/// All six witnesses are required. The gradation pattern is `gradation`
/// when given; otherwise it is read off the witness weak stem, and an
/// alternation `class` cannot explain fails with
/// [`ClassifyError::Unclassified`]. Whatever the class rules cannot
/// reproduce is stored as an override: a stem override when one explains
/// the witness without breaking an earlier one, a form override otherwise.
pub fn construct(
    lemma: &str,
    class: DeclensionClass,
    gradation: Option<GradationPattern>,
    witnesses: &Witnesses,
) -> Result<WordEntry, ClassifyError> {
    if !witnesses.is_complete() {
        return Err(ClassifyError::IncompleteWitnesses {
            missing: witnesses.missing().iter().map(FormKey::to_string).collect(),
        });
    }
    let stems = derive_stems(lemma, witnesses)?;
    let record = class.record();
    let gradation = match gradation {
        Some(pattern) => pattern,
        None => candidate_gradation(record, lemma, stems.weak.as_deref())?,
    };

    let mut entry = WordEntry::new(lemma, class, gradation);
    let mut checked = Witnesses::new();
    for (key, kind) in OVERRIDE_ORDER {
        let Some(expected) = witnesses.get(key) else {
            continue;
        };
        checked.insert(key, expected);
        if reproduces_witnesses(&entry, &checked) {
            continue;
        }
        if let Some(stem) = witness_stem(key, expected) {
            let previous = entry.stems.get(kind).map(str::to_string);
            entry.set_stem(kind, stem);
            if reproduces_witnesses(&entry, &checked) {
                continue;
            }
            match previous {
                Some(previous) => entry.set_stem(kind, previous),
                None => entry.stems.clear(kind),
            }
        }
        entry.set_form(key, expected);
    }
    debug!(
        lemma,
        class = class.id(),
        stems = entry.stems.iter().count(),
        forms = entry.forms.len(),
        "constructed"
    );
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOM_SG: FormKey = FormKey::new(Case::Nominative, Number::Singular);
    const GEN_SG: FormKey = FormKey::new(Case::Genitive, Number::Singular);
    const PAR_SG: FormKey = FormKey::new(Case::Partitive, Number::Singular);
    const NOM_PL: FormKey = FormKey::new(Case::Nominative, Number::Plural);
    const INE_SG: FormKey = FormKey::new(Case::Inessive, Number::Singular);
    const ILL_SG: FormKey = FormKey::new(Case::Illative, Number::Singular);

    fn full(forms: [&str; 6]) -> Witnesses {
        [NOM_SG, GEN_SG, PAR_SG, NOM_PL, INE_SG, ILL_SG]
            .into_iter()
            .zip(forms)
            .map(|(k, f)| (k, f.to_string()))
            .collect()
    }

    #[test]
    fn sana_is_kala_class() {
        let w = full(["sana", "sanan", "sanaa", "sanat", "sanassa", "sanaan"]);
        let c = classify("sana", &w).unwrap();
        assert_eq!(c.class, DeclensionClass::Kala);
        assert_eq!(c.gradation, GradationPattern::None);
        assert_eq!(c.stems.illative.as_deref(), Some("sanaa"));
    }

    #[test]
    fn kukka_with_genitive() {
        let w = Witnesses::new().with(NOM_SG, "kukka").with(GEN_SG, "kukan");
        let c = classify("kukka", &w).unwrap();
        assert_eq!(c.class, DeclensionClass::Koira);
        assert_eq!(c.gradation, GradationPattern::KkK);
    }

    #[test]
    fn talo_is_valo_class() {
        let w = full(["talo", "talon", "taloa", "talot", "talossa", "taloon"]);
        let c = classify("talo", &w).unwrap();
        assert_eq!(c.class, DeclensionClass::Valo);
        assert!(c.into_entry().is_regular());
    }

    #[test]
    fn inverse_gradation_class() {
        let w = full(["rengas", "renkaan", "rengasta", "renkaat", "renkaassa", "renkaaseen"]);
        let c = classify("rengas", &w).unwrap();
        assert_eq!(c.class, DeclensionClass::Vieras);
        assert_eq!(c.gradation, GradationPattern::NkNg);
    }

    #[test]
    fn unexplained_alternation_is_unclassified() {
        let w = Witnesses::new().with(NOM_SG, "talo").with(GEN_SG, "kalon");
        assert!(matches!(classify("talo", &w), Err(ClassifyError::Unclassified(_))));
    }

    #[test]
    fn unreproducible_witnesses_are_ambiguous() {
        let w = Witnesses::new()
            .with(NOM_SG, "talo")
            .with(GEN_SG, "talon")
            .with(PAR_SG, "taloja");
        assert!(matches!(
            classify("talo", &w),
            Err(ClassifyError::AmbiguousOrUnknownClass { .. })
        ));
    }

    #[test]
    fn classification_reproduces_its_witnesses() {
        let w = full(["k\u{00E4}si", "k\u{00E4}den", "k\u{00E4}tt\u{00E4}", "k\u{00E4}det", "k\u{00E4}dess\u{00E4}", "k\u{00E4}teen"]);
        let c = classify("k\u{00E4}si", &w).unwrap();
        assert_eq!(c.class, DeclensionClass::Kasi);
        assert_eq!(c.gradation, GradationPattern::TD);
        assert!(reproduces_witnesses(&c.into_entry(), &w));
    }

    #[test]
    fn construct_regular_word_has_no_overrides() {
        let w = full(["sana", "sanan", "sanaa", "sanat", "sanassa", "sanaan"]);
        let entry = construct("sana", DeclensionClass::Kala, None, &w).unwrap();
        assert!(entry.is_regular());
    }

    #[test]
    fn construct_prefers_stem_overrides() {
        // Class 10 would give "koiraan"; the witness illative differs.
        let w = full(["koira", "koiran", "koiraa", "koirat", "koirassa", "koirahan"]);
        let entry = construct("koira", DeclensionClass::Koira, None, &w).unwrap();
        assert_eq!(entry.stems.get(StemKind::Illative), Some("koiraha"));
        assert!(entry.forms.is_empty());
        assert!(reproduces_witnesses(&entry, &w));
    }

    #[test]
    fn construct_falls_back_to_form_overrides() {
        // The inessive stem contradicts the genitive stem.
        let w = full(["talo", "talon", "taloa", "talot", "talussa", "taloon"]);
        let entry = construct("talo", DeclensionClass::Valo, None, &w).unwrap();
        assert_eq!(entry.stems.get(StemKind::Weak), None);
        assert_eq!(entry.form_override(INE_SG), Some("talussa"));
        assert!(reproduces_witnesses(&entry, &w));
    }

    #[test]
    fn construct_reports_unexplained_alternation() {
        let w = full(["talo", "kalon", "taloa", "kalot", "kalossa", "taloon"]);
        assert!(matches!(
            construct("talo", DeclensionClass::Valo, None, &w),
            Err(ClassifyError::Unclassified(_))
        ));
    }

    #[test]
    fn construct_with_explicit_gradation() {
        let w = full(["talo", "kalon", "taloa", "kalot", "kalossa", "taloon"]);
        let entry =
            construct("talo", DeclensionClass::Valo, Some(GradationPattern::None), &w).unwrap();
        assert_eq!(entry.gradation, GradationPattern::None);
        assert_eq!(entry.stems.get(StemKind::Weak), Some("kalo"));
        assert!(reproduces_witnesses(&entry, &w));
    }

    #[test]
    fn long_stem_askel_keeps_stem_overrides() {
        let w = full(["askel", "askeleen", "askelta", "askeleet", "askeleessa", "askeleeseen"]);
        let entry =
            construct("askel", DeclensionClass::Askel, Some(GradationPattern::None), &w).unwrap();
        assert_eq!(entry.stems.get(StemKind::Weak), Some("askelee"));
        assert_eq!(entry.stems.get(StemKind::Illative), Some("askeleesee"));
        assert!(entry.forms.is_empty());
        assert!(reproduces_witnesses(&entry, &w));
    }

    #[test]
    fn construct_requires_all_witnesses() {
        let w = Witnesses::new().with(NOM_SG, "talo").with(GEN_SG, "talon");
        assert!(matches!(
            construct("talo", DeclensionClass::Valo, None, &w),
            Err(ClassifyError::IncompleteWitnesses { .. })
        ));
    }
}
