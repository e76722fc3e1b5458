//! Clap argument definitions for the `ftsq` CLI.

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "ftsq")]
#[command(about = "Translate Google-style search queries into full-text boolean expressions")]
pub struct Cli {
    /// Log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `ftsq transform`.
#[derive(Args, Debug, Clone)]
pub struct TransformCommand {
    /// Queries to transform; read one per line from stdin when omitted
    pub queries: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Keep every word, ignoring configured stop words
    #[arg(long)]
    pub no_stopwords: bool,
}

/// Arguments for `ftsq explain`.
#[derive(Args, Debug, Clone)]
pub struct ExplainCommand {
    /// Query to explain
    pub query: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `ftsq stopwords`.
#[derive(Args, Debug, Clone)]
pub struct StopWordsCommand {
    /// Words to look up; lists the whole set when omitted
    pub words: Vec<String>,
}

/// Arguments for `ftsq init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.ftsq.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `ftsq` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Transform queries into boolean expressions
    #[command(after_help = "\
QUERY SYNTAX:
  term              Any inflected form of the term
  term1 term2       Both terms (implicit AND)
  \"phrase\"          Exact phrase
  +term, term*      Exact term / prefix
  ~term             Thesaurus expansion
  -term             Term must NOT appear
  term1 OR term2    Either term
  term1 NEAR term2  Terms close together (exact terms only)
  (expr)            Grouping
  <expr>            Proximity group

EXAMPLES:
  ftsq transform 'rust -deprecated'
  ftsq transform '\"error handling\" OR panics'
  echo 'async <+tokio +runtime>' | ftsq transform --json")]
    Transform(TransformCommand),

    /// Show how a query is parsed and repaired
    Explain(ExplainCommand),

    /// List stop words or check whether words are stop words
    #[command(name = "stopwords")]
    StopWords(StopWordsCommand),

    /// Initialize ftsq configuration in current directory
    Init(InitCommand),

    /// Show configuration files and effective settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}

/// Parses CLI arguments, exiting with usage on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
