//! Configuration file parsing.
//!
//! Parses individual `.ftsq.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Stop-word section.
    pub stopwords: Option<RawStopWords>,
    /// Output grammar section.
    pub grammar: Option<RawGrammar>,
}

/// Raw stop-word settings.
///
/// List values accept either a single string or an array of strings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStopWords {
    /// Preload the built-in list.
    pub standard: Option<bool>,
    /// Add the Stopwords ISO English list.
    pub iso: Option<bool>,
    /// Additional stop words.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub extra: Option<Vec<String>>,
    /// Words removed from the final set.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub remove: Option<Vec<String>>,
    /// Word list files, relative to the config file.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub files: Option<Vec<String>>,
}

/// Raw grammar keyword spellings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGrammar {
    /// Keyword for AND.
    pub and: Option<String>,
    /// Keyword for OR.
    pub or: Option<String>,
    /// Keyword for NEAR.
    pub near: Option<String>,
    /// Negation prefix.
    pub not: Option<String>,
    /// Function wrapping generated term forms.
    pub forms_of: Option<String>,
    /// Inflectional generation type.
    pub inflectional: Option<String>,
    /// Thesaurus generation type.
    pub thesaurus: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
///
/// Useful for validating template content (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
