//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use ftsq_query::Grammar;

use crate::{
    Config, ConfigError, StopWordSettings,
    parse::{RawConfig, RawGrammar, RawStopWords},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - `extra`, `remove` and `files` lists accumulate across all configs
/// - Word list files are resolved relative to the config file that names them
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let stopwords = merge_stopwords(configs)?;
    let grammar = merge_grammar(configs);
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Ok(Config {
        stopwords,
        grammar,
        config_root,
    })
}

/// Merges stop-word settings.
fn merge_stopwords(configs: &[ParsedConfig]) -> Result<StopWordSettings, ConfigError> {
    let mut result = StopWordSettings::default();

    // Lowest precedence first so closer configs overwrite scalars
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.stopwords {
            let config_dir = parsed.path.parent().unwrap_or_else(|| Path::new("."));
            apply_raw_stopwords(&mut result, raw, config_dir)?;
        }
    }

    Ok(result)
}

/// Applies raw stop-word settings to result.
fn apply_raw_stopwords(
    result: &mut StopWordSettings,
    raw: &RawStopWords,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.standard {
        result.standard = v;
    }
    if let Some(v) = raw.iso {
        result.iso = v;
    }
    if let Some(ref words) = raw.extra {
        result.extra.extend(words.iter().cloned());
    }
    if let Some(ref words) = raw.remove {
        result.remove.extend(words.iter().cloned());
    }
    if let Some(ref files) = raw.files {
        for file in files {
            result.files.push(resolve_path(file, config_dir)?);
        }
    }
    Ok(())
}

/// Merges grammar spellings, taking the closest defined value for each keyword.
fn merge_grammar(configs: &[ParsedConfig]) -> Grammar {
    let mut result = Grammar::default();

    for parsed in configs.iter().rev() {
        if let Some(ref grammar) = parsed.config.grammar {
            apply_raw_grammar(&mut result, grammar);
        }
    }

    result
}

/// Applies raw grammar spellings to result.
fn apply_raw_grammar(result: &mut Grammar, raw: &RawGrammar) {
    let fields = [
        (&mut result.and, &raw.and),
        (&mut result.or, &raw.or),
        (&mut result.near, &raw.near),
        (&mut result.not, &raw.not),
        (&mut result.forms_of, &raw.forms_of),
        (&mut result.inflectional, &raw.inflectional),
        (&mut result.thesaurus, &raw.thesaurus),
    ];
    for (target, value) in fields {
        if let Some(v) = value {
            target.clone_from(v);
        }
    }
}
