//! Configuration system for ftsq.
//!
//! ftsq uses TOML configuration files named `.ftsq.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.ftsq.toml` files
//! found, then loading `~/.ftsq.toml` as the global config with lowest precedence.
//!
//! A configuration controls two things: which stop words are dropped from queries, and how
//! the keywords of the target full-text grammar are spelled.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
use ftsq_query::{Grammar, StopWords, Transformer};
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawGrammar, RawStopWords, parse_config_file, parse_config_str};
pub use resolve::resolve_path;
use serde::Serialize;
use tracing::debug;
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for ftsq.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.ftsq.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Stop-word settings.
    pub stopwords: StopWordSettings,
    /// Output keyword spellings.
    pub grammar: Grammar,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.ftsq.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Builds the effective stop-word set.
    ///
    /// Lists are combined in order: built-in, ISO, files, extra words. Removed words are
    /// taken out last.
    pub fn stop_words(&self) -> Result<StopWords, ConfigError> {
        let mut words = self.stopwords.collect(true)?;
        for word in &self.stopwords.remove {
            words.remove(word);
        }
        debug!(count = words.len(), "built stop-word set");
        Ok(words)
    }

    /// Builds a transformation engine from this configuration.
    pub fn transformer(&self) -> Result<Transformer, ConfigError> {
        Ok(Transformer::with_stop_words(self.stop_words()?).with_grammar(self.grammar.clone()))
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            stopwords: SerializableStopWords::from(&self.stopwords),
            grammar: self.grammar.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Stop-word settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordSettings {
    /// Preload the built-in list.
    pub standard: bool,
    /// Add the Stopwords ISO English list.
    pub iso: bool,
    /// Additional stop words.
    pub extra: Vec<String>,
    /// Words removed from the final set.
    pub remove: Vec<String>,
    /// Resolved word list files.
    pub files: Vec<PathBuf>,
}

impl Default for StopWordSettings {
    fn default() -> Self {
        Self {
            standard: true,
            iso: false,
            extra: Vec::new(),
            remove: Vec::new(),
            files: Vec::new(),
        }
    }
}

impl StopWordSettings {
    /// Collects every configured word before removals.
    ///
    /// When `strict` is false, unreadable files are skipped instead of failing.
    pub(crate) fn collect(&self, strict: bool) -> Result<StopWords, ConfigError> {
        let mut words = if self.standard {
            StopWords::standard()
        } else {
            StopWords::empty()
        };
        if self.iso {
            words.extend(StopWords::iso_english().iter());
        }
        for path in &self.files {
            match fs::read_to_string(path) {
                Ok(text) => words.extend(StopWords::parse_list(&text).iter()),
                Err(source) if strict => {
                    return Err(ConfigError::ReadStopWords {
                        path: path.clone(),
                        source,
                    });
                }
                Err(_) => {}
            }
        }
        words.extend(self.extra.iter().cloned());
        Ok(words)
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Stop-word settings.
    stopwords: SerializableStopWords,
    /// Output grammar.
    grammar: Grammar,
}

/// Stop-word settings with display paths.
#[derive(Serialize)]
struct SerializableStopWords {
    /// Preload the built-in list.
    standard: bool,
    /// Add the ISO list.
    iso: bool,
    /// Additional words.
    extra: Vec<String>,
    /// Removed words.
    remove: Vec<String>,
    /// Word list files.
    files: Vec<String>,
}

impl From<&StopWordSettings> for SerializableStopWords {
    fn from(settings: &StopWordSettings) -> Self {
        Self {
            standard: settings.standard,
            iso: settings.iso,
            extra: settings.extra.clone(),
            remove: settings.remove.clone(),
            files: settings
                .files
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
        }
    }
}
