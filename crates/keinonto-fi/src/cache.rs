// Read-through cache of generated forms, keyed by (lemma, case, number)

use dashmap::DashMap;
use hashbrown::HashMap;
use keinonto_core::FormKey;

/// Bounded cache of generated forms, grouped by lemma.
///
/// Lemmas are spread over the shards of a `DashMap`, so lookups of
/// different lemmas take different locks. Grouping lets a write to one
/// lemma drop all of its cached forms at once. When `capacity` lemmas are
/// cached and a new lemma arrives, the whole cache is cleared; there is no
/// LRU bookkeeping.
pub(crate) struct FormCache {
    capacity: usize,
    forms: DashMap<String, HashMap<FormKey, String>>,
}

impl FormCache {
    /// Create an empty cache holding forms for up to `capacity` lemmas.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            forms: DashMap::new(),
        }
    }

    pub fn get(&self, lemma: &str, key: FormKey) -> Option<String> {
        self.forms.get(lemma)?.get(&key).cloned()
    }

    /// The cached form of `lemma` for `key`, or the result of `fill`,
    /// cached on success.
    ///
    /// The shard holding `lemma` stays write-locked while `fill` runs, so
    /// an [`invalidate`](Self::invalidate) issued after a store write lands
    /// after any form computed from the old record. `fill` must not touch
    /// this cache.
    pub fn get_or_try_insert<E>(
        &self,
        lemma: &str,
        key: FormKey,
        fill: impl FnOnce() -> Result<String, E>,
    ) -> Result<String, E> {
        if let Some(form) = self.get(lemma, key) {
            return Ok(form);
        }
        if self.capacity == 0 {
            return fill();
        }
        if !self.forms.contains_key(lemma) && self.forms.len() >= self.capacity {
            self.forms.clear();
        }

        let mut forms = self.forms.entry(lemma.to_string()).or_default();
        if let Some(form) = forms.get(&key) {
            return Ok(form.clone());
        }
        match fill() {
            Ok(form) => {
                forms.insert(key, form.clone());
                Ok(form)
            }
            Err(err) => {
                let empty = forms.is_empty();
                drop(forms);
                if empty {
                    self.forms.remove_if(lemma, |_, f| f.is_empty());
                }
                Err(err)
            }
        }
    }

    /// Drop every cached form of `lemma`.
    pub fn invalidate(&self, lemma: &str) {
        self.forms.remove(lemma);
    }

    pub fn clear(&self) {
        self.forms.clear();
    }

    /// Number of lemmas with cached forms.
    #[cfg(test)]
    pub fn lemma_count(&self) -> usize {
        self.forms.len()
    }
}
