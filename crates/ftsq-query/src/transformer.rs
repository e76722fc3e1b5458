//! The transformation engine.

use serde::Serialize;
use tracing::debug;

use crate::{
    node::{Conjunction, Node},
    normalize::normalize,
    parser::Parser,
    render::Grammar,
    stopwords::StopWords,
};

/// Translates Google-style queries into full-text boolean expressions.
///
/// The engine is immutable once built, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Transformer {
    /// Terms dropped from queries.
    stop_words: StopWords,
    /// Keyword spellings used for output.
    grammar: Grammar,
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Transformer {
    /// Creates an engine, optionally preloading the standard stop words.
    pub fn new(use_standard_stop_words: bool) -> Self {
        let stop_words = if use_standard_stop_words {
            StopWords::standard()
        } else {
            StopWords::empty()
        };
        Self::with_stop_words(stop_words)
    }

    /// Creates an engine with a custom stop-word set.
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            grammar: Grammar::default(),
        }
    }

    /// Replaces the output keyword spellings.
    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Checks if `word` is a stop word. The comparison is exact and case-sensitive.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Returns the stop-word set.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Returns the output keyword spellings.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Parses `query` into a raw, unrepaired expression tree.
    pub fn parse(&self, query: &str) -> Option<Node> {
        Parser::new(&self.stop_words).parse_node(query, Conjunction::And)
    }

    /// Parses `query` and repairs the tree. `None` means nothing is left to search for.
    pub fn normalize(&self, query: &str) -> Option<Node> {
        normalize(self.parse(query))
    }

    /// Transforms `query` into a full-text boolean expression.
    ///
    /// Never fails. Returns an empty string if no valid search term remains.
    pub fn transform(&self, query: &str) -> String {
        let expression = self
            .normalize(query)
            .map(|node| node.render(&self.grammar))
            .unwrap_or_default();
        debug!(query, expression = %expression, "transformed query");
        expression
    }

    /// Transforms `query`, keeping the intermediate trees.
    pub fn explain(&self, query: &str) -> Explanation {
        // Derived `Clone` recurses once per tree level; parsing again does not.
        let raw = self.parse(query);
        let normalized = self.normalize(query);
        let expression = normalized
            .as_ref()
            .map(|node| node.render(&self.grammar))
            .unwrap_or_default();
        Explanation {
            query: query.to_string(),
            raw,
            normalized,
            expression,
        }
    }
}

/// The stages of a single transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    /// The input query.
    pub query: String,
    /// The tree as parsed.
    pub raw: Option<Node>,
    /// The tree after repair.
    pub normalized: Option<Node>,
    /// The rendered expression.
    pub expression: String,
}
