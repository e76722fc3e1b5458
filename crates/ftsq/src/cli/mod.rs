//! CLI support for the `ftsq` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod logging;
pub mod output;
