use crate::types::*;

///Trait for objects that can be reduced to an anagram key (string-like)
pub trait Anagrammable {
    fn anagram_key(&self) -> AnagramKey;
    fn is_anagram_of(&self, other: &str) -> bool;
}

impl Anagrammable for str {
    ///Compute the anagram key for a given string.
    ///Lowercasing happens before sorting so the result does not depend
    ///on how upper and lower case code points interleave.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anagramsearch::*;
    /// assert_eq!("Read".anagram_key(), "ader");
    /// assert_eq!("dare".anagram_key(), "dear".anagram_key());
    /// ```
    fn anagram_key(&self) -> AnagramKey {
        let mut chars: Vec<char> = self.to_lowercase().chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }

    ///Tests whether two strings fall in the same anagram class
    fn is_anagram_of(&self, other: &str) -> bool {
        self.anagram_key() == other.anagram_key()
    }
}

///Derive the anagram key of a word, see [`Anagrammable::anagram_key`]
pub fn derive_key(word: &str) -> AnagramKey {
    word.anagram_key()
}

///Tests if two words are anagrams of each other (case-insensitive)
pub fn is_anagram(a: &str, b: &str) -> bool {
    a.is_anagram_of(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_sorted_lowercase() {
        assert_eq!(derive_key("read"), "ader");
        assert_eq!(derive_key("READ"), "ader");
        assert_eq!(derive_key("ReAd"), "ader");
    }

    #[test]
    fn key_of_empty_word() {
        assert_eq!(derive_key(""), "");
    }

    #[test]
    fn lowercase_before_sort() {
        //'B' (0x42) sorts before 'a' (0x61) if case were folded afterwards
        assert_eq!(derive_key("Ba"), "ab");
        assert_eq!(derive_key("aB"), "ab");
    }

    #[test]
    fn non_ascii() {
        assert_eq!(derive_key("Ébé"), derive_key("béé"));
        assert!(is_anagram("Straße", "aßerts"));
    }

    #[test]
    fn anagram_equivalence() {
        assert!(is_anagram("stressed", "desserts"));
        assert!(is_anagram("Dormitory", "dirtyroom"));
        assert!(!is_anagram("read", "reed"));
        assert!(!is_anagram("read", "reads"));
    }
}
