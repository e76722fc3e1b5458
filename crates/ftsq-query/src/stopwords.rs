//! Stop-word filtering for query terms.
//!
//! Stop words are terms the full-text engine does not index. Sending them in a query either
//! matches nothing or is rejected outright, so the parser drops them before building terminals.
//!
//! Membership is exact and case-sensitive: `the` is a standard stop word, `The` is not.

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// An insertion-ordered set of stop words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    /// Words in insertion order.
    order: Vec<String>,
    /// Lookup index over `order`.
    lookup: HashSet<String>,
}

impl StopWords {
    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set holding the built-in list ([`STANDARD_STOP_WORDS`]).
    pub fn standard() -> Self {
        let mut words = Self::empty();
        words.extend(STANDARD_STOP_WORDS.iter().copied());
        words
    }

    /// Creates a set holding the Stopwords ISO English list from the `stop-words` crate.
    pub fn iso_english() -> Self {
        let mut words = Self::empty();
        words.extend(stop_words::get(LANGUAGE::English).iter().map(|w| w.to_string()));
        words
    }

    /// Parses a newline-separated word list.
    ///
    /// Blank lines are skipped and `#` starts a comment that runs to the end of the line.
    pub fn parse_list(text: &str) -> Self {
        let mut words = Self::empty();
        words.extend(
            text.lines()
                .map(|line| line.split('#').next().unwrap_or_default().trim())
                .filter(|line| !line.is_empty()),
        );
        words
    }

    /// Adds a word. Returns false if it was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if word.is_empty() || self.lookup.contains(&word) {
            return false;
        }
        self.lookup.insert(word.clone());
        self.order.push(word);
        true
    }

    /// Removes a word. Returns false if it was not present.
    pub fn remove(&mut self, word: &str) -> bool {
        if !self.lookup.remove(word) {
            return false;
        }
        self.order.retain(|w| w != word);
        true
    }

    /// Adds every word from `words`.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.insert(word);
        }
    }

    /// Checks if a word is a stop word. The comparison is exact.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Iterates over the words in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns the number of stop words.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut words = Self::empty();
        words.extend(iter);
        words
    }
}

/// Built-in stop words: common short English words, single letters and digits.
pub static STANDARD_STOP_WORDS: &[&str] = &[
    "about", "1", "after", "2", "all", "also", "3", "an", "4", "and", "5", "another", "6", "any",
    "7", "are", "8", "as", "9", "at", "0", "be", "$", "because", "been", "before", "being",
    "between", "both", "but", "by", "came", "can", "come", "could", "did", "do", "does", "each",
    "else", "for", "from", "get", "got", "has", "had", "he", "have", "her", "here", "him",
    "himself", "his", "how", "if", "in", "into", "is", "it", "its", "just", "like", "make",
    "many", "me", "might", "more", "most", "much", "must", "my", "never", "no", "now", "of", "on",
    "only", "or", "other", "our", "out", "over", "re", "said", "same", "see", "should", "since",
    "so", "some", "still", "such", "take", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "up", "use", "very", "want",
    "was", "way", "we", "well", "were", "what", "when", "where", "which", "while", "who", "will",
    "with", "would", "you", "your", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
    "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
];
