// Witness validation: case endings and vowel harmony of supplied forms

use keinonto_core::{Case, FormKey, Harmony, Number};

use crate::stems::Witnesses;

/// A witness form that cannot be the requested (case, number).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {key} witness {form:?}: {reason}")]
pub struct InvalidWitness {
    pub key: FormKey,
    pub form: String,
    pub reason: String,
}

/// Endings a form may have for `key`, with archiphonemes. An empty slice
/// accepts any form; `None` marks a combination with no forms at all.
fn endings(key: FormKey) -> Option<&'static [&'static str]> {
    let sg = key.number == Number::Singular;
    let endings: &'static [&'static str] = match key.case {
        Case::Nominative if sg => &[],
        Case::Nominative => &["t"],
        Case::Genitive if sg => &["n"],
        Case::Genitive => &["en", "in"],
        Case::Partitive => &["A"],
        Case::Inessive if sg => &["ssA"],
        Case::Inessive => &["issA"],
        Case::Elative if sg => &["stA"],
        Case::Elative => &["istA"],
        Case::Illative if sg => &["an", "\u{00E4}n", "en", "in", "on", "\u{00F6}n", "un", "yn"],
        Case::Illative => &["iin", "ihin"],
        Case::Adessive if sg => &["llA"],
        Case::Adessive => &["illA"],
        Case::Ablative if sg => &["ltA"],
        Case::Ablative => &["iltA"],
        Case::Allative if sg => &["lle"],
        Case::Allative => &["ille"],
        Case::Essive if sg => &["nA"],
        Case::Essive => &["inA"],
        Case::Translative if sg => &["ksi"],
        Case::Translative => &["iksi"],
        Case::Abessive if sg => &["ttA"],
        Case::Abessive => &["ittA"],
        Case::Instructive | Case::Comitative if sg => return None,
        Case::Instructive => &["in"],
        Case::Comitative => &["ine"],
    };
    Some(endings)
}

fn invalid(key: FormKey, form: &str, reason: impl Into<String>) -> InvalidWitness {
    InvalidWitness {
        key,
        form: form.to_string(),
        reason: reason.into(),
    }
}

/// Check one witness form against its case endings and the harmony of
/// `lemma`.
pub fn validate_form(lemma: &str, key: FormKey, form: &str) -> Result<(), InvalidWitness> {
    if form.is_empty() {
        return Err(invalid(key, form, "empty form"));
    }
    let Some(templates) = endings(key) else {
        return Err(invalid(key, form, "combination has no forms"));
    };
    if templates.is_empty() {
        return Ok(());
    }
    let harmony = Harmony::of(lemma);
    let other = match harmony {
        Harmony::Back => Harmony::Front,
        Harmony::Front => Harmony::Back,
    };
    if templates.iter().any(|t| form.ends_with(harmony.resolve(t).as_str())) {
        return Ok(());
    }
    if templates.iter().any(|t| form.ends_with(other.resolve(t).as_str())) {
        return Err(invalid(
            key,
            form,
            format!("vowel harmony of {lemma:?} requires {harmony:?} vowels in the ending"),
        ));
    }
    let expected: Vec<String> = templates.iter().map(|t| harmony.resolve(t)).collect();
    Err(invalid(
        key,
        form,
        format!("expected an ending in {}", expected.join(", ")),
    ))
}

/// Validate every witness of `lemma`.
pub fn validate_witnesses(lemma: &str, witnesses: &Witnesses) -> Result<(), InvalidWitness> {
    witnesses
        .iter()
        .try_for_each(|(key, form)| validate_form(lemma, key, form))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(case: Case, number: Number) -> FormKey {
        FormKey::new(case, number)
    }

    #[test]
    fn accepts_regular_witnesses() {
        let w = Witnesses::new()
            .with(key(Case::Nominative, Number::Singular), "talo")
            .with(key(Case::Genitive, Number::Singular), "talon")
            .with(key(Case::Partitive, Number::Singular), "taloa")
            .with(key(Case::Nominative, Number::Plural), "talot")
            .with(key(Case::Inessive, Number::Singular), "talossa")
            .with(key(Case::Illative, Number::Singular), "taloon");
        assert_eq!(validate_witnesses("talo", &w), Ok(()));
    }

    #[test]
    fn rejects_wrong_ending() {
        let err = validate_form("talo", key(Case::Genitive, Number::Singular), "taloa").unwrap_err();
        assert!(err.reason.contains("expected"));
    }

    #[test]
    fn rejects_wrong_harmony() {
        let err = validate_form(
            "p\u{00E4}iv\u{00E4}",
            key(Case::Inessive, Number::Singular),
            "p\u{00E4}iv\u{00E4}ssa",
        )
        .unwrap_err();
        assert!(err.reason.contains("harmony"));
    }

    #[test]
    fn rejects_undefined_combination() {
        assert!(validate_form("talo", key(Case::Comitative, Number::Singular), "taloine").is_err());
        assert!(validate_form("talo", key(Case::Comitative, Number::Plural), "taloine").is_ok());
    }

    #[test]
    fn front_partitive_with_t() {
        assert!(validate_form("tiili", key(Case::Partitive, Number::Singular), "tiilt\u{00E4}").is_ok());
    }
}
