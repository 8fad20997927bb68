use std::collections::HashMap;
use std::collections::hash_map;

use rayon::prelude::*;
use tracing::debug;

use crate::anakey::*;
use crate::group::*;
use crate::types::*;

///Maps anagram keys to the group of words that instantiate them.
///
///This is the plain, single-owner data structure; see [`crate::SharedIndex`]
///for the lock-protected handle that is shared between request handlers.
///Groups that become empty through deletion are dropped from the map, so
///every key present maps to a non-empty group.
#[derive(Clone,Debug,Default)]
pub struct AnagramIndex {
    groups: HashMap<AnagramKey, AnagramGroup>,
}

impl AnagramIndex {
    pub fn new() -> AnagramIndex {
        AnagramIndex::default()
    }

    fn get_or_create_group(&mut self, key: AnagramKey) -> &mut AnagramGroup {
        self.groups.entry(key).or_default()
    }

    ///Adds a word to its anagram group, creating the group if needed.
    ///Returns false if the word was already present
    pub fn insert(&mut self, word: &str) -> bool {
        let key = word.anagram_key();
        self.insert_with_key(key, word)
    }

    fn insert_with_key(&mut self, key: AnagramKey, word: &str) -> bool {
        self.get_or_create_group(key).insert(word)
    }

    ///Adds all words, returns how many of them were new.
    ///The input need not be deduplicated. Large batches compute their
    ///keys in parallel, the map itself is filled sequentially.
    pub fn bulk_insert<S: AsRef<str> + Sync>(&mut self, words: &[S]) -> usize {
        let keys: Vec<AnagramKey> = if words.len() >= PARALLEL_THRESHOLD {
            words.par_iter().map(|word| word.as_ref().anagram_key()).collect()
        } else {
            words.iter().map(|word| word.as_ref().anagram_key()).collect()
        };
        let mut added = 0;
        for (key, word) in keys.into_iter().zip(words.iter()) {
            if self.insert_with_key(key, word.as_ref()) {
                added += 1;
            }
        }
        debug!(submitted = words.len(), added, groups = self.groups.len(), "bulk insert");
        added
    }

    ///Removes a word from its anagram group. Removing a word that is not
    ///in the index is a no-op; returns whether anything was removed
    pub fn delete(&mut self, word: &str) -> bool {
        let key = word.anagram_key();
        if let hash_map::Entry::Occupied(mut entry) = self.groups.entry(key) {
            let removed = entry.get_mut().remove(word);
            if entry.get().is_empty() {
                entry.remove();
            }
            removed
        } else {
            false
        }
    }

    ///Drops every group
    pub fn clear(&mut self) {
        self.groups = HashMap::new();
    }

    ///All anagrams of the given word that are in the index, except the
    ///word itself (exact, case-sensitive match). Order is unspecified
    pub fn lookup(&self, word: &str) -> Vec<Word> {
        match self.groups.get(&word.anagram_key()) {
            Some(group) => group.others(word),
            None => Vec::new(),
        }
    }

    ///Tests if the index has this exact word
    pub fn contains(&self, word: &str) -> bool {
        self.groups.get(&word.anagram_key()).map_or(false, |group| group.contains(word))
    }

    ///Get the group for a specific key
    pub fn group(&self, key: &str) -> Option<&AnagramGroup> {
        self.groups.get(key)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, AnagramKey, AnagramGroup> {
        self.groups.iter()
    }

    ///Total number of words in the index
    pub fn len(&self) -> usize {
        self.groups.values().map(|group| group.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    ///Number of distinct anagram keys
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            groups: self.group_count(),
            words: self.len(),
        }
    }
}
