use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::index::*;
use crate::types::*;

///Shareable handle to a single [`AnagramIndex`], guarded by a readers-writer
///lock. Clones refer to the same index.
///
///Every operation holds the lock for its whole duration, so each one
///appears atomic to every other caller: a bulk insert is never seen half
///done, and a clear is never seen partially applied.
#[derive(Clone,Debug,Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<AnagramIndex>>,
}

impl SharedIndex {
    pub fn new() -> SharedIndex {
        SharedIndex::default()
    }

    pub fn from_index(index: AnagramIndex) -> SharedIndex {
        SharedIndex {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    //No critical section can leave the map half-updated, so a poisoned
    //lock still guards a consistent index
    fn read(&self) -> RwLockReadGuard<'_, AnagramIndex> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AnagramIndex> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    ///Adds all words, returns how many were new
    pub fn insert_words<S: AsRef<str> + Sync>(&self, words: &[S]) -> usize {
        self.write().bulk_insert(words)
    }

    ///Adds a single word
    pub fn insert_word(&self, word: &str) -> bool {
        self.write().insert(word)
    }

    ///Anagrams of `word` (excluding `word` itself), truncated to `limit` if given
    pub fn lookup_anagrams(&self, word: &str, limit: Option<usize>) -> Vec<Word> {
        let mut anagrams = self.read().lookup(word);
        if let Some(limit) = limit {
            anagrams.truncate(limit);
        }
        anagrams
    }

    ///Removes a single word; absence is not an error
    pub fn delete_word(&self, word: &str) -> bool {
        self.write().delete(word)
    }

    pub fn clear_all(&self) {
        self.write().clear()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.read().contains(word)
    }

    pub fn stats(&self) -> IndexStats {
        self.read().stats()
    }
}

impl From<AnagramIndex> for SharedIndex {
    fn from(index: AnagramIndex) -> Self {
        SharedIndex::from_index(index)
    }
}
