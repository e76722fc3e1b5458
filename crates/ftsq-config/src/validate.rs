//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// Operator words recognized in queries regardless of case.
const OPERATOR_WORDS: &[&str] = &["and", "or", "near", "not"];

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A grammar keyword is configured as an empty string.
    EmptyKeyword {
        /// Name of the grammar key.
        key: &'static str,
    },
    /// A stop-word file does not exist.
    StopWordFileMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// An operator word is listed as an extra stop word; operators are matched first, so the
    /// entry has no effect.
    OperatorStopWord {
        /// The listed word.
        word: String,
    },
    /// A word listed under `remove` is not in any configured list.
    RemovedWordNotPresent {
        /// The listed word.
        word: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKeyword { key } => {
                write!(f, "grammar keyword '{key}' is empty")
            }
            Self::StopWordFileMissing { path } => {
                write!(f, "stop-word file does not exist: {path}")
            }
            Self::OperatorStopWord { word } => {
                write!(
                    f,
                    "stop word '{word}' is an operator keyword and is never filtered"
                )
            }
            Self::RemovedWordNotPresent { word } => {
                write!(f, "removed word '{word}' is not in any stop-word list")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - Empty grammar keywords
/// - Stop-word files that don't exist
/// - Operator words configured as stop words
/// - Removed words that no list contains
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    let grammar = &config.grammar;
    let keywords = [
        ("and", &grammar.and),
        ("or", &grammar.or),
        ("near", &grammar.near),
        ("not", &grammar.not),
        ("forms_of", &grammar.forms_of),
        ("inflectional", &grammar.inflectional),
        ("thesaurus", &grammar.thesaurus),
    ];
    for (key, value) in keywords {
        if value.trim().is_empty() {
            warnings.push(ConfigWarning::EmptyKeyword { key });
        }
    }

    for path in &config.stopwords.files {
        if !path.is_file() {
            warnings.push(ConfigWarning::StopWordFileMissing {
                path: path.display().to_string(),
            });
        }
    }

    for word in &config.stopwords.extra {
        if OPERATOR_WORDS
            .iter()
            .any(|op| op.eq_ignore_ascii_case(word))
        {
            warnings.push(ConfigWarning::OperatorStopWord { word: word.clone() });
        }
    }

    if !config.stopwords.remove.is_empty() {
        // Missing files are already reported above
        if let Ok(candidates) = config.stopwords.collect(false) {
            for word in &config.stopwords.remove {
                if !candidates.contains(word) {
                    warnings.push(ConfigWarning::RemovedWordNotPresent { word: word.clone() });
                }
            }
        }
    }

    warnings
}
