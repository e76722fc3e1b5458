//! ftsq: translate Google-style search queries into full-text boolean expressions.
//!
//! The command-line front end over `ftsq-query`, configured through `.ftsq.toml` files.

#![warn(missing_docs)]

mod cli;

use std::process::ExitCode;

use cli::{args::parse_cli, commands, logging};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);
    commands::run(cli.command)
}
