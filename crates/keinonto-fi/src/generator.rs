// Generator: lexicon facade over the classifier, synthesizer and store.
//
// Adding a word validates and classifies its witnesses and stores the
// sparse entry. Generating a form reads the entry and derives the form
// from the rule table. An optional read-through cache holds generated
// forms; every write to a lemma invalidates that lemma's cached forms.
// Overrides equal to what the rules derive are never stored.

use tracing::{debug, info};

use keinonto_core::{Case, FormKey, Number, ParseError};

use crate::cache::FormCache;
use crate::classifier::{ClassifyError, classify, construct};
use crate::declension::{DeclensionClass, InvalidClass};
use crate::entry::WordEntry;
use crate::gradation::{GradationPattern, UnknownGradation};
use crate::stems::{StemKind, StemSet, UnknownStemKind, Witnesses};
use crate::store::{MemoryStore, StoreError, WordStore};
use crate::synthesis::{GenerateError, generate, generate_all, resolve_stems};
use crate::validate::{InvalidWitness, validate_witnesses};

/// Any failure surfaced by the generator facade.
#[derive(Debug, thiserror::Error)]
pub enum KeinontoError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    InvalidWitness(#[from] InvalidWitness),

    #[error(transparent)]
    InvalidClass(#[from] InvalidClass),

    #[error(transparent)]
    UnknownGradation(#[from] UnknownGradation),

    #[error(transparent)]
    UnknownStemKind(#[from] UnknownStemKind),
}

/// Generator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Cache generated forms.
    pub cache_enabled: bool,
    /// Number of lemmas whose forms the cache holds.
    pub cache_capacity: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_capacity: 1024,
        }
    }
}

/// A stored entry together with its resolved stems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordInfo {
    pub entry: WordEntry,
    /// Every stem: overrides where stored, rule-derived elsewhere.
    pub stems: StemSet,
}

/// Word lexicon and form generator.
pub struct Generator<S: WordStore = MemoryStore> {
    store: S,
    cache: Option<FormCache>,
}

impl Generator<MemoryStore> {
    /// A generator over an empty in-memory store with default options.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new(), GeneratorOptions::default())
    }
}

impl Default for Generator<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WordStore> Generator<S> {
    pub fn with_store(store: S, options: GeneratorOptions) -> Self {
        let cache = options
            .cache_enabled
            .then(|| FormCache::new(options.cache_capacity));
        Self { store, cache }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn invalidate(&self, lemma: &str) {
        if let Some(cache) = &self.cache {
            cache.invalidate(lemma);
        }
    }

    fn put(&self, entry: &WordEntry) -> Result<(), KeinontoError> {
        self.store.put(entry)?;
        self.invalidate(&entry.lemma);
        Ok(())
    }

    /// Surface form of `lemma` in the given case and number.
    pub fn generate(&self, lemma: &str, case: Case, number: Number) -> Result<String, KeinontoError> {
        let key = FormKey::new(case, number);
        let read = || -> Result<String, KeinontoError> { Ok(generate(&self.store.get(lemma)?, key)?) };
        match &self.cache {
            Some(cache) => cache.get_or_try_insert(lemma, key, read),
            None => read(),
        }
    }

    /// Every defined form of `lemma`, in paradigm order.
    pub fn get_all_forms(&self, lemma: &str) -> Result<Vec<(FormKey, String)>, KeinontoError> {
        let entry = self.store.get(lemma)?;
        Ok(generate_all(&entry))
    }

    /// Classify `witnesses` and store the resulting entry.
    ///
    /// The lemma is the nominative singular witness.
    pub fn add_word(&self, witnesses: &Witnesses) -> Result<WordEntry, KeinontoError> {
        let lemma = witnesses
            .nominative()
            .ok_or(ClassifyError::InsufficientWitnesses)?;
        validate_witnesses(lemma, witnesses)?;
        let entry = classify(lemma, witnesses)?.into_entry();
        self.put(&entry)?;
        info!(lemma, class = entry.class.id(), gradation = %entry.gradation, "added word");
        Ok(entry)
    }

    /// Store `lemma` in an explicitly chosen class, keeping whatever the
    /// class rules cannot reproduce as overrides.
    ///
    /// Without an explicit `gradation` the pattern is read off the
    /// witnesses, and an alternation the class cannot explain is an error.
    pub fn add_word_with_class(
        &self,
        lemma: &str,
        class: DeclensionClass,
        gradation: Option<GradationPattern>,
        witnesses: &Witnesses,
    ) -> Result<WordEntry, KeinontoError> {
        validate_witnesses(lemma, witnesses)?;
        let entry = construct(lemma, class, gradation, witnesses)?;
        self.put(&entry)?;
        info!(lemma, class = class.id(), regular = entry.is_regular(), "added word with class");
        Ok(entry)
    }

    /// Override one stem of a stored word.
    ///
    /// A stem the class rules already derive clears the override instead.
    pub fn add_stem(&self, lemma: &str, kind: StemKind, stem: &str) -> Result<WordEntry, KeinontoError> {
        let mut stored = false;
        let entry = self
            .store
            .update(lemma, &mut |e: &mut WordEntry| stored = override_stem(e, kind, stem))?;
        self.invalidate(lemma);
        debug!(lemma, kind = kind.name(), stem, stored, "stem override");
        Ok(entry)
    }

    /// Override one surface form of a stored word.
    ///
    /// A form the class rules already generate clears the override instead.
    pub fn set_form(
        &self,
        lemma: &str,
        case: Case,
        number: Number,
        form: &str,
    ) -> Result<WordEntry, KeinontoError> {
        let key = FormKey::new(case, number);
        let mut stored = false;
        let entry = self
            .store
            .update(lemma, &mut |e: &mut WordEntry| stored = override_form(e, key, form))?;
        self.invalidate(lemma);
        debug!(lemma, %key, form, stored, "form override");
        Ok(entry)
    }

    /// Remove `lemma` and everything stored for it.
    pub fn remove(&self, lemma: &str) -> Result<(), KeinontoError> {
        self.store.delete(lemma)?;
        self.invalidate(lemma);
        info!(lemma, "removed word");
        Ok(())
    }

    pub fn info(&self, lemma: &str) -> Result<WordInfo, KeinontoError> {
        let entry = self.store.get(lemma)?;
        let stems = resolve_stems(&entry);
        Ok(WordInfo { entry, stems })
    }

    /// Drop all cached forms.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

/// Set a stem override on `entry` unless the rules derive `stem` without
/// it. Returns whether an override is stored.
fn override_stem(entry: &mut WordEntry, kind: StemKind, stem: &str) -> bool {
    entry.stems.clear(kind);
    if resolve_stems(entry).get(kind) == Some(stem) {
        return false;
    }
    entry.set_stem(kind, stem);
    true
}

/// Set a form override on `entry` unless the rules generate `form`
/// without it. Returns whether an override is stored.
fn override_form(entry: &mut WordEntry, key: FormKey, form: &str) -> bool {
    entry.forms.remove(&key);
    if generate(entry, key).is_ok_and(|generated| generated == form) {
        return false;
    }
    entry.set_form(key, form);
    true
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

    fn sana() -> Witnesses {
        Witnesses::new()
            .with(NOM_SG, "sana")
            .with(GEN_SG, "sanan")
            .with(PAR_SG, "sanaa")
            .with(NOM_PL, "sanat")
            .with(INE_SG, "sanassa")
            .with(ILL_SG, "sanaan")
    }

    #[test]
    fn add_and_generate() {
        let generator = Generator::new();
        let entry = generator.add_word(&sana()).unwrap();
        assert_eq!(entry.class, DeclensionClass::Kala);
        assert_eq!(
            generator.generate("sana", Case::Inessive, Number::Plural).unwrap(),
            "sanoissa"
        );
    }

    #[test]
    fn unknown_lemma_is_not_found() {
        let generator = Generator::new();
        assert!(matches!(
            generator.generate("sana", Case::Genitive, Number::Singular),
            Err(KeinontoError::Store(StoreError::NotFound { .. }))
        ));
    }

    #[test]
    fn missing_nominative_is_insufficient() {
        let generator = Generator::new();
        let w = Witnesses::new().with(GEN_SG, "sanan");
        assert!(matches!(
            generator.add_word(&w),
            Err(KeinontoError::Classify(ClassifyError::InsufficientWitnesses))
        ));
    }

    #[test]
    fn invalid_witness_is_rejected_before_classifying() {
        let generator = Generator::new();
        let w = Witnesses::new().with(NOM_SG, "sana").with(INE_SG, "sanass\u{00E4}");
        assert!(matches!(generator.add_word(&w), Err(KeinontoError::InvalidWitness(_))));
        assert!(generator.store().is_empty());
    }

    #[test]
    fn overrides_invalidate_cache() {
        let generator = Generator::new();
        generator.add_word(&sana()).unwrap();
        assert_eq!(
            generator.generate("sana", Case::Essive, Number::Singular).unwrap(),
            "sanana"
        );
        generator
            .set_form("sana", Case::Essive, Number::Singular, "sanaina")
            .unwrap();
        assert_eq!(
            generator.generate("sana", Case::Essive, Number::Singular).unwrap(),
            "sanaina"
        );
    }

    #[test]
    fn stem_override_changes_derived_forms() {
        let generator = Generator::new();
        generator.add_word(&sana()).unwrap();
        generator.add_stem("sana", StemKind::Illative, "sanaha").unwrap();
        assert_eq!(
            generator.generate("sana", Case::Illative, Number::Singular).unwrap(),
            "sanahan"
        );
        let info = generator.info("sana").unwrap();
        assert_eq!(info.stems.illative.as_deref(), Some("sanaha"));
    }

    #[test]
    fn derivable_overrides_are_not_stored() {
        let generator = Generator::new();
        generator.add_word(&sana()).unwrap();
        let size = generator.store().record_size("sana");
        let entry = generator
            .set_form("sana", Case::Genitive, Number::Singular, "sanan")
            .unwrap();
        assert!(entry.is_regular());
        let entry = generator.add_stem("sana", StemKind::Illative, "sanaa").unwrap();
        assert!(entry.is_regular());
        assert_eq!(generator.store().record_size("sana"), size);
    }

    #[test]
    fn restoring_rule_value_clears_override() {
        let generator = Generator::new();
        generator.add_word(&sana()).unwrap();
        generator.add_stem("sana", StemKind::Illative, "sanaha").unwrap();
        generator
            .set_form("sana", Case::Essive, Number::Singular, "sanaina")
            .unwrap();
        generator.add_stem("sana", StemKind::Illative, "sanaa").unwrap();
        let entry = generator
            .set_form("sana", Case::Essive, Number::Singular, "sanana")
            .unwrap();
        assert!(entry.is_regular());
        assert_eq!(
            generator.generate("sana", Case::Illative, Number::Singular).unwrap(),
            "sanaan"
        );
    }

    #[test]
    fn cached_reads_from_many_threads() {
        use std::sync::Arc;
        let generator = Arc::new(Generator::new());
        let lemmas = ["sana", "kala", "vala", "tapa"];
        for lemma in lemmas {
            let w = Witnesses::new()
                .with(NOM_SG, lemma)
                .with(GEN_SG, format!("{lemma}n"));
            generator.add_word(&w).unwrap();
        }
        let handles: Vec<_> = lemmas
            .into_iter()
            .map(|lemma| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let form = generator.generate(lemma, Case::Genitive, Number::Singular).unwrap();
                        assert_eq!(form, format!("{lemma}n"));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        generator
            .set_form("tapa", Case::Genitive, Number::Singular, "tavan")
            .unwrap();
        assert_eq!(
            generator.generate("tapa", Case::Genitive, Number::Singular).unwrap(),
            "tavan"
        );
    }

    #[test]
    fn remove_deletes_word() {
        let generator = Generator::new();
        generator.add_word(&sana()).unwrap();
        generator.generate("sana", Case::Genitive, Number::Singular).unwrap();
        generator.remove("sana").unwrap();
        assert!(generator.generate("sana", Case::Genitive, Number::Singular).is_err());
        assert!(generator.remove("sana").is_err());
    }

    #[test]
    fn clearing_cache_keeps_results() {
        let generator = Generator::new();
        generator.add_word(&sana()).unwrap();
        let first = generator.generate("sana", Case::Genitive, Number::Plural).unwrap();
        generator.clear_cache();
        assert_eq!(
            generator.generate("sana", Case::Genitive, Number::Plural).unwrap(),
            first
        );
    }

    #[test]
    fn works_without_cache() {
        let options = GeneratorOptions {
            cache_enabled: false,
            ..GeneratorOptions::default()
        };
        let generator = Generator::with_store(MemoryStore::new(), options);
        generator.add_word(&sana()).unwrap();
        assert_eq!(generator.get_all_forms("sana").unwrap().len(), 26);
    }

    #[test]
    fn explicit_class_keeps_overrides() {
        let generator = Generator::new();
        let w = Witnesses::new()
            .with(NOM_SG, "koira")
            .with(GEN_SG, "koiran")
            .with(PAR_SG, "koiraa")
            .with(NOM_PL, "koirat")
            .with(INE_SG, "koirassa")
            .with(ILL_SG, "koirahan");
        let entry = generator
            .add_word_with_class("koira", DeclensionClass::Koira, None, &w)
            .unwrap();
        assert!(!entry.is_regular());
        assert_eq!(
            generator.generate("koira", Case::Illative, Number::Singular).unwrap(),
            "koirahan"
        );
    }
}
