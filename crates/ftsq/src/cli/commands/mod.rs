//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod explain;
pub mod init;
pub mod stopwords;
pub mod transform;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands) -> ExitCode {
    match command {
        Commands::Transform(cmd) => with_context(CommandContext::load(), |ctx| {
            transform::run(ctx, &cmd)
        }),
        Commands::Explain(cmd) => {
            with_context(CommandContext::load(), |ctx| explain::run(ctx, &cmd))
        }
        Commands::StopWords(cmd) => {
            with_context(CommandContext::load(), |ctx| stopwords::run(ctx, &cmd))
        }
        Commands::Init(cmd) => {
            with_context(CommandContext::load_cwd_only(), |ctx| init::run(ctx, &cmd))
        }
        Commands::Config => with_context(CommandContext::load(), config::run),
        Commands::Check => with_context(CommandContext::load(), check::run),
    }
}

/// Runs `command` if the context loaded, otherwise returns the load failure.
fn with_context(
    ctx: Result<CommandContext, ExitCode>,
    command: impl FnOnce(&CommandContext) -> ExitCode,
) -> ExitCode {
    match ctx {
        Ok(ctx) => command(&ctx),
        Err(code) => code,
    }
}
