//! Implementation of `ftsq config`.

use std::process::ExitCode;

use ftsq_config::{discover_config_files, is_global_config};
use ftsq_highlight::{Highlighter, dim, rule, subheader};

use crate::cli::context::CommandContext;

/// Shows discovered config files and the effective settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("{}", subheader("Config files (highest precedence first):"));
    if config_files.is_empty() {
        println!("   {}", dim("(none, using defaults)"));
    }
    for path in &config_files {
        if is_global_config(path) {
            println!("   {} {}", path.display(), dim("(global)"));
        } else {
            println!("   {}", path.display());
        }
    }
    println!();

    println!("{}", subheader("Effective settings:"));
    println!("{}", rule(40));
    print!(
        "{}",
        Highlighter::new().highlight_toml(&ctx.config.settings_to_toml())
    );
    println!("{}", rule(40));

    ExitCode::SUCCESS
}
