//! Implementation of `ftsq check`.

use std::process::ExitCode;

use ftsq_config::{ConfigWarning, discover_config_files};
use ftsq_highlight::{dim, subheader, success, warning};

use crate::cli::context::CommandContext;

/// Validates configuration; fails when the stop words cannot be built or warnings exist.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("ftsq init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("   {}", path.display());
    }
    println!();

    let warnings = ctx.config.validate();

    match ctx.config.stop_words() {
        Ok(words) => println!("{} {}", subheader("Stop words:"), words.len()),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }
    println!();

    if warnings.is_empty() {
        println!("{}", success("No issues found."));
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|w| match w {
            ConfigWarning::EmptyKeyword { .. } => {
                "Hint: give every [grammar] key a non-empty value, or remove it"
            }
            ConfigWarning::StopWordFileMissing { .. } => {
                "Hint: stop-word files are resolved relative to the config file naming them"
            }
            ConfigWarning::OperatorStopWord { .. } => {
                "Hint: AND, OR, NEAR and NOT are always read as operators"
            }
            ConfigWarning::RemovedWordNotPresent { .. } => {
                "Hint: 'remove' only affects words from the configured lists"
            }
        })
        .collect();
    hints.sort_unstable();
    hints.dedup();

    for hint in hints {
        println!("{}", dim(hint));
    }
}
