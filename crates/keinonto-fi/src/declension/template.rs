// Suffix templates: which stem and which ending build a (case, number) form

use keinonto_core::{Case, FormKey, Harmony, Number};

use super::DeclensionClass;
use super::rules::{GenitivePlural, IllativePlural, PartitivePlural};

/// The stem a template attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemSlot {
    /// The lemma itself.
    Lemma,
    /// Vowel stem, strong grade (`kukka-`, `renkaa-`).
    Vowel,
    /// Vowel stem in the grade of the genitive singular: weak for
    /// straight gradation (`kuka-`), the vowel stem otherwise.
    Weak,
    /// Vowel stem without its final vowel (`rist-` in `ristien`).
    Root,
    /// Partitive singular stem (`kala-`, `maat-`, `last-`).
    Partitive,
    /// Illative singular stem (`kalaa-`, `maaha-`).
    Illative,
    /// Nominative plural stem (`kuka-`).
    Plural,
    /// Oblique i-plural stem, strong grade (`kukki-`).
    Oblique,
    /// Oblique i-plural stem, weak grade (`kuki-`).
    WeakOblique,
}

/// A stem slot plus an ending written with archiphonemes (`ssA`, `hin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuffixTemplate {
    pub slot: StemSlot,
    pub suffix: &'static str,
}

impl SuffixTemplate {
    const fn new(slot: StemSlot, suffix: &'static str) -> Self {
        Self { slot, suffix }
    }

    /// The ending with the given harmony applied.
    pub fn resolve(&self, harmony: Harmony) -> String {
        harmony.resolve(self.suffix)
    }

    /// Back and front renderings of the ending.
    pub fn variants(&self) -> (String, String) {
        (self.resolve(Harmony::Back), self.resolve(Harmony::Front))
    }
}

/// Local and abstract case endings shared by both numbers.
fn shared_ending(case: Case) -> Option<&'static str> {
    Some(match case {
        Case::Inessive => "ssA",
        Case::Elative => "stA",
        Case::Adessive => "llA",
        Case::Ablative => "ltA",
        Case::Allative => "lle",
        Case::Translative => "ksi",
        Case::Abessive => "ttA",
        _ => return None,
    })
}

/// Template for a (case, number) of a class, or `None` if the paradigm
/// leaves the combination undefined (instructive and comitative singular).
pub fn suffix_for(class: DeclensionClass, key: FormKey) -> Option<SuffixTemplate> {
    use StemSlot::*;

    let record = class.record();
    if let Some(ending) = shared_ending(key.case) {
        let slot = match key.number {
            Number::Singular => Weak,
            Number::Plural => WeakOblique,
        };
        return Some(SuffixTemplate::new(slot, ending));
    }

    let plural_slot = if record.weak_plural { WeakOblique } else { Oblique };
    let template = match (key.case, key.number) {
        (Case::Nominative, Number::Singular) => SuffixTemplate::new(Lemma, ""),
        (Case::Genitive, Number::Singular) => SuffixTemplate::new(Weak, "n"),
        (Case::Partitive, Number::Singular) => SuffixTemplate::new(Partitive, "A"),
        (Case::Illative, Number::Singular) => SuffixTemplate::new(Illative, "n"),
        (Case::Essive, Number::Singular) => SuffixTemplate::new(Vowel, "nA"),
        (Case::Instructive | Case::Comitative, Number::Singular) => return None,

        (Case::Nominative, Number::Plural) => SuffixTemplate::new(Plural, "t"),
        (Case::Genitive, Number::Plural) => match record.genitive_plural {
            GenitivePlural::ObliqueEn => SuffixTemplate::new(plural_slot, "en"),
            GenitivePlural::ObliqueDen => SuffixTemplate::new(plural_slot, "den"),
            GenitivePlural::RootIen => SuffixTemplate::new(Root, "ien"),
            GenitivePlural::PartitiveEn => SuffixTemplate::new(Partitive, "en"),
        },
        (Case::Partitive, Number::Plural) => match record.partitive_plural {
            PartitivePlural::A => SuffixTemplate::new(plural_slot, "A"),
            PartitivePlural::TA => SuffixTemplate::new(plural_slot, "tA"),
        },
        (Case::Illative, Number::Plural) => match record.illative_plural {
            IllativePlural::In => SuffixTemplate::new(plural_slot, "in"),
            IllativePlural::Hin => SuffixTemplate::new(plural_slot, "hin"),
            IllativePlural::Siin => SuffixTemplate::new(plural_slot, "siin"),
        },
        (Case::Essive, Number::Plural) => SuffixTemplate::new(Oblique, "nA"),
        (Case::Instructive, Number::Plural) => SuffixTemplate::new(WeakOblique, "n"),
        (Case::Comitative, Number::Plural) => SuffixTemplate::new(Oblique, "ne"),

        (
            Case::Inessive
            | Case::Elative
            | Case::Adessive
            | Case::Ablative
            | Case::Allative
            | Case::Translative
            | Case::Abessive,
            _,
        ) => return None,
    };
    Some(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(case: Case, number: Number) -> FormKey {
        FormKey::new(case, number)
    }

    #[test]
    fn undefined_singular_pairs() {
        for class in DeclensionClass::ALL {
            assert_eq!(suffix_for(class, key(Case::Instructive, Number::Singular)), None);
            assert_eq!(suffix_for(class, key(Case::Comitative, Number::Singular)), None);
        }
    }

    #[test]
    fn every_other_pair_is_defined() {
        let defined = FormKey::all()
            .filter(|k| suffix_for(DeclensionClass::Kala, *k).is_some())
            .count();
        assert_eq!(defined, 26);
    }

    #[test]
    fn locatives_use_weak_slots() {
        let t = suffix_for(DeclensionClass::Kala, key(Case::Inessive, Number::Singular)).unwrap();
        assert_eq!(t, SuffixTemplate::new(StemSlot::Weak, "ssA"));
        let t = suffix_for(DeclensionClass::Kala, key(Case::Inessive, Number::Plural)).unwrap();
        assert_eq!(t.slot, StemSlot::WeakOblique);
    }

    #[test]
    fn plural_schemes_follow_record() {
        let t = suffix_for(DeclensionClass::Maa, key(Case::Genitive, Number::Plural)).unwrap();
        assert_eq!(t, SuffixTemplate::new(StemSlot::Oblique, "den"));
        let t = suffix_for(DeclensionClass::Laatikko, key(Case::Partitive, Number::Plural)).unwrap();
        assert_eq!(t, SuffixTemplate::new(StemSlot::WeakOblique, "tA"));
        let t = suffix_for(DeclensionClass::Lapsi, key(Case::Genitive, Number::Plural)).unwrap();
        assert_eq!(t, SuffixTemplate::new(StemSlot::Partitive, "en"));
    }

    #[test]
    fn harmony_variants() {
        let t = suffix_for(DeclensionClass::Kala, key(Case::Elative, Number::Singular)).unwrap();
        assert_eq!(t.variants(), ("sta".to_string(), "st\u{00E4}".to_string()));
    }
}
