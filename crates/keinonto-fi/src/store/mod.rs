// Backing store: persists only what the rules cannot derive
//
// A store maps lemmas to WordEntry records. Records are sparse (see
// `WordEntry`), so their size grows with the number of exceptions, not
// with the size of the paradigm.

mod memory;

pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::entry::WordEntry;

/// Store failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No entry for the lemma.
    #[error("word not found: {lemma:?}")]
    NotFound { lemma: String },

    /// A record could not be encoded or decoded.
    #[error("record codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Reading or writing a store file failed.
    #[error("store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lemma-keyed persistence of word entries.
///
/// Implementations serialize writes per lemma; reads need no coordination.
pub trait WordStore: Send + Sync {
    /// Fetch the entry for `lemma`.
    fn get(&self, lemma: &str) -> Result<WordEntry, StoreError>;

    /// Insert or replace the entry keyed by its lemma.
    fn put(&self, entry: &WordEntry) -> Result<(), StoreError>;

    /// Remove the entry for `lemma`.
    fn delete(&self, lemma: &str) -> Result<(), StoreError>;

    /// Apply `change` to the stored entry for `lemma` while holding that
    /// lemma's write lock, and return the updated entry.
    fn update(
        &self,
        lemma: &str,
        change: &mut dyn FnMut(&mut WordEntry),
    ) -> Result<WordEntry, StoreError>;

    /// All stored lemmas, sorted.
    fn lemmas(&self) -> Vec<String>;

    fn contains(&self, lemma: &str) -> bool {
        self.get(lemma).is_ok()
    }
}
