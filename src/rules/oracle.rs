//! The dictionary seam.
//!
//! The engine reports which words a move forms but never judges them. A
//! caller supplies a [`WordOracle`] and checks an accepted move before
//! committing it.

use std::collections::HashSet;
use std::hash::BuildHasher;

/// Answers whether a string is a playable word.
///
/// Words are passed in uppercase.
pub trait WordOracle {
    fn is_legal_word(&self, word: &str) -> bool;
}

impl<F> WordOracle for F
where
    F: Fn(&str) -> bool,
{
    fn is_legal_word(&self, word: &str) -> bool {
        self(word)
    }
}

impl<S: BuildHasher> WordOracle for HashSet<String, S> {
    fn is_legal_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_closure_oracle() {
        let oracle = |w: &str| w.len() > 1;
        assert!(oracle.is_legal_word("AT"));
        assert!(!oracle.is_legal_word("A"));
    }

    #[test]
    fn test_set_oracle() {
        let words: FxHashSet<String> = ["CAT", "CATS"].iter().map(|s| s.to_string()).collect();
        assert!(words.is_legal_word("CAT"));
        assert!(!words.is_legal_word("CA"));
    }
}
