//! In-memory word store backed by DashMap, with JSON file persistence.
//!
//! Entries are kept encoded, so the size of a stored record is exactly what
//! a file or database would hold for it.

use std::fs;
use std::path::Path;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{StoreError, WordStore};
use crate::declension::RULE_TABLE_VERSION;
use crate::entry::WordEntry;

/// On-disk layout of a store file.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    /// Rule table version the records were classified against.
    version: u32,
    words: Vec<WordEntry>,
}

/// Concurrent in-memory store using a sharded hashmap.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<String, Vec<u8>>,
}

fn encode(entry: &WordEntry) -> Result<Vec<u8>, StoreError> {
    Ok(serde_json::to_vec(entry)?)
}

fn decode(bytes: &[u8]) -> Result<WordEntry, StoreError> {
    Ok(serde_json::from_slice(bytes)?)
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: DashMap::with_capacity(capacity),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Encoded size in bytes of the record for `lemma`.
    pub fn record_size(&self, lemma: &str) -> Option<usize> {
        self.records.get(lemma).map(|r| r.value().len())
    }

    /// Load a store file written by [`MemoryStore::save`].
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: StoreFile = serde_json::from_str(&text)?;
        if file.version != RULE_TABLE_VERSION {
            warn!(
                path = %path.display(),
                file_version = file.version,
                table_version = RULE_TABLE_VERSION,
                "store was written against a different rule table"
            );
        }
        let store = Self::with_capacity(file.words.len());
        for entry in &file.words {
            store.put(entry)?;
        }
        info!(path = %path.display(), words = store.len(), "loaded store");
        Ok(store)
    }

    /// Write all entries to `path` as JSON, sorted by lemma.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let words = self
            .lemmas()
            .iter()
            .map(|lemma| self.get(lemma))
            .collect::<Result<Vec<_>, _>>()?;
        let file = StoreFile {
            version: RULE_TABLE_VERSION,
            words,
        };
        let json = serde_json::to_string_pretty(&file)?;
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, json).map_err(io_err)?;
        info!(path = %path.display(), words = file.words.len(), "saved store");
        Ok(())
    }
}

impl WordStore for MemoryStore {
    fn get(&self, lemma: &str) -> Result<WordEntry, StoreError> {
        match self.records.get(lemma) {
            Some(record) => decode(record.value()),
            None => Err(StoreError::NotFound {
                lemma: lemma.to_string(),
            }),
        }
    }

    fn put(&self, entry: &WordEntry) -> Result<(), StoreError> {
        let bytes = encode(entry)?;
        debug!(lemma = %entry.lemma, bytes = bytes.len(), "put");
        self.records.insert(entry.lemma.clone(), bytes);
        Ok(())
    }

    fn delete(&self, lemma: &str) -> Result<(), StoreError> {
        match self.records.remove(lemma) {
            Some(_) => {
                debug!(lemma, "delete");
                Ok(())
            }
            None => Err(StoreError::NotFound {
                lemma: lemma.to_string(),
            }),
        }
    }

    fn update(
        &self,
        lemma: &str,
        change: &mut dyn FnMut(&mut WordEntry),
    ) -> Result<WordEntry, StoreError> {
        let mut record = self
            .records
            .get_mut(lemma)
            .ok_or_else(|| StoreError::NotFound {
                lemma: lemma.to_string(),
            })?;
        let mut entry = decode(record.value())?;
        change(&mut entry);
        *record.value_mut() = encode(&entry)?;
        debug!(lemma, "update");
        Ok(entry)
    }

    fn lemmas(&self) -> Vec<String> {
        let mut lemmas: Vec<String> = self.records.iter().map(|r| r.key().clone()).collect();
        lemmas.sort();
        lemmas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declension::DeclensionClass;
    use crate::gradation::GradationPattern;
    use crate::stems::StemKind;

    fn sana() -> WordEntry {
        WordEntry::new("sana", DeclensionClass::Kala, GradationPattern::None)
    }

    #[test]
    fn put_and_get() {
        let store = MemoryStore::new();
        store.put(&sana()).unwrap();
        assert_eq!(store.get("sana").unwrap(), sana());
        assert!(store.contains("sana"));
    }

    #[test]
    fn missing_lemma_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.get("sana"), Err(StoreError::NotFound { .. })));
        assert!(matches!(store.delete("sana"), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn delete_removes_whole_entry() {
        let store = MemoryStore::new();
        store.put(&sana()).unwrap();
        store.delete("sana").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn regular_record_is_small() {
        let store = MemoryStore::new();
        store.put(&sana()).unwrap();
        assert_eq!(store.record_size("sana"), Some(r#"{"lemma":"sana","class":9}"#.len()));
    }

    #[test]
    fn update_rewrites_record() {
        let store = MemoryStore::new();
        store.put(&sana()).unwrap();
        let before = store.record_size("sana").unwrap();
        let updated = store
            .update("sana", &mut |e: &mut WordEntry| e.set_stem(StemKind::Illative, "sanaa"))
            .unwrap();
        assert_eq!(updated.stems.get(StemKind::Illative), Some("sanaa"));
        assert!(store.record_size("sana").unwrap() > before);
    }

    #[test]
    fn lemmas_are_sorted() {
        let store = MemoryStore::new();
        for lemma in ["talo", "kala", "sana"] {
            store
                .put(&WordEntry::new(lemma, DeclensionClass::Kala, GradationPattern::None))
                .unwrap();
        }
        assert_eq!(store.lemmas(), vec!["kala", "sana", "talo"]);
    }

    #[test]
    fn save_and_load() {
        let dir = std::env::temp_dir().join(format!("keinonto-store-{}", std::process::id()));
        let path = dir.join("words.json");
        let store = MemoryStore::new();
        store.put(&sana()).unwrap();
        store.save(&path).unwrap();

        let loaded = MemoryStore::load(&path).unwrap();
        assert_eq!(loaded.get("sana").unwrap(), sana());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let path = Path::new("/nonexistent/keinonto/words.json");
        assert!(matches!(MemoryStore::load(path), Err(StoreError::Io { .. })));
    }

    #[test]
    fn concurrent_writes_to_distinct_lemmas() {
        use std::sync::Arc;
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let entry = WordEntry::new(format!("sana{i}"), DeclensionClass::Kala, GradationPattern::None);
                    store.put(&entry).unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.len(), 64);
    }
}
