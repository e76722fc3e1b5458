//! Integration tests for ftsq-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> resolve -> merge.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use ftsq_config::{CONFIG_FILENAME, Config, ConfigError, ConfigWarning};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_from_no_files_returns_default() {
    let config = Config::load_from_files(&[]).unwrap();

    assert!(config.stopwords.standard);
    assert!(config.config_root.is_none());
    assert_eq!(config.grammar.and, "AND");
}

#[test]
fn test_load_nested_configs() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        r#"root = true

[stopwords]
extra = "lorem"
files = "lists/common.txt"

[grammar]
near = "CLOSE"
and = "&"
"#,
    );
    env.create_file("lists/common.txt", "# shared\nipsum\n");
    env.create_file(
        &format!("project/{CONFIG_FILENAME}"),
        "[stopwords]\nstandard = false\n\n[grammar]\nnear = \"~\"\n",
    );
    let cwd = env.create_dir("project/src");

    let config = Config::load(&cwd).unwrap();
    assert_eq!(config.config_root, Some(env.path().join("project")));
    assert!(!config.stopwords.standard);
    assert_eq!(config.stopwords.files, vec![env.path().join("lists/common.txt")]);
    assert_eq!(config.grammar.near, "~");
    assert_eq!(config.grammar.and, "&");

    let engine = config.transformer().unwrap();
    assert!(engine.is_stop_word("lorem"));
    assert!(engine.is_stop_word("ipsum"));
    assert!(!engine.is_stop_word("a"));
    assert_eq!(
        engine.transform("lorem <\"x\" \"y\"> a"),
        "\"x\" ~ \"y\" & FORMSOF(INFLECTIONAL, a)"
    );
}

#[test]
fn test_load_reports_parse_errors() {
    let env = TestEnv::new();
    let path = env.create_file(CONFIG_FILENAME, "root = true\n[grammar\n");

    let err = Config::load(env.path()).unwrap_err();
    match err {
        ConfigError::ParseToml { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_word_file_warns_then_fails() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "root = true\n[stopwords]\nfiles = \"missing.txt\"\n",
    );

    let config = Config::load(env.path()).unwrap();
    assert_eq!(
        config.validate(),
        vec![ConfigWarning::StopWordFileMissing {
            path: env.path().join("missing.txt").display().to_string()
        }]
    );
    assert!(matches!(
        config.stop_words(),
        Err(ConfigError::ReadStopWords { .. })
    ));
}

#[test]
fn test_settings_round_trip_through_toml() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "root = true\n[stopwords]\niso = true\nremove = [\"about\"]\n[grammar]\nor = \"|\"\n",
    );
    let config = Config::load(env.path()).unwrap();

    let dumped = env.create_file("dump/.ftsq.toml", &config.settings_to_toml());
    let reloaded = Config::load_from_files(&[dumped]).unwrap();

    assert_eq!(reloaded.stopwords, config.stopwords);
    assert_eq!(reloaded.grammar, config.grammar);
}
