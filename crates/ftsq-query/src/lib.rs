//! Google-style search queries for full-text search engines.
//!
//! This crate translates the search syntax people already know into a boolean full-text
//! expression (the `CONTAINS` grammar of SQL Server style engines):
//!
//! - **Terms**: `rust` - matches inflected forms (`FORMSOF(INFLECTIONAL, rust)`)
//! - **Phrases**: `"error handling"` - exact match
//! - **Wildcards**: `data*` - prefix match
//! - **Exact**: `+rust` - exact match of a single word
//! - **Synonyms**: `~fast` - thesaurus match
//! - **Negation**: `-deprecated` or `NOT deprecated`
//! - **Operators**: `rust OR golang`, `rust AND golang`, `"rust" NEAR "async"`
//! - **Grouping**: `(a b) OR (c d)`
//! - **Proximity groups**: `<+rust +async>` - every term near the next
//!
//! Malformed input never produces an error. The result is the best valid expression that
//! can be built, or an empty string if no search term survives.
//!
//! # Example
//!
//! ```
//! use ftsq_query::Transformer;
//!
//! let engine = Transformer::new(true);
//! assert_eq!(
//!     engine.transform("-deprecated rust"),
//!     "FORMSOF(INFLECTIONAL, rust) AND NOT FORMSOF(INFLECTIONAL, deprecated)"
//! );
//! assert_eq!(engine.transform("the"), "");
//! ```

#![warn(missing_docs)]

mod node;
mod normalize;
mod parser;
mod render;
mod scanner;
mod stopwords;
mod transformer;

pub use node::{Conjunction, Node, NodeKind, TermForm};
pub use normalize::normalize;
pub use render::Grammar;
pub use scanner::{NUL, Scanner};
pub use stopwords::{STANDARD_STOP_WORDS, StopWords};
pub use transformer::{Explanation, Transformer};

/// Transforms `query` with the standard stop words and default grammar.
///
/// Builds a fresh [`Transformer`] on every call; reuse one for repeated work.
pub fn transform(query: &str) -> String {
    Transformer::default().transform(query)
}
