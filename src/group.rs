use std::collections::HashSet;
use std::collections::hash_set;

use crate::types::*;

///The set of distinct words that share one anagram key.
///Membership is exact (case-sensitive) string equality
#[derive(Clone,Debug,Default,PartialEq,Eq)]
pub struct AnagramGroup {
    words: HashSet<Word>,
}

impl AnagramGroup {
    pub fn new() -> AnagramGroup {
        AnagramGroup::default()
    }

    ///Adds a word, returns false if it was already a member
    pub fn insert(&mut self, word: &str) -> bool {
        if self.words.contains(word) {
            false
        } else {
            self.words.insert(word.to_owned())
        }
    }

    ///Removes a word, returns false if it was not a member
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Word> {
        self.words.iter()
    }

    ///All members except `word` itself
    pub fn others(&self, word: &str) -> Vec<Word> {
        self.words.iter().filter(|member| member.as_str() != word).cloned().collect()
    }
}

impl<'a> IntoIterator for &'a AnagramGroup {
    type Item = &'a Word;
    type IntoIter = hash_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for AnagramGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut group = AnagramGroup::new();
        for word in iter {
            group.insert(word.as_ref());
        }
        group
    }
}
