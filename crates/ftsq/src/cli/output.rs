//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use ftsq_highlight::highlight_expression;
use ftsq_query::Grammar;
use serde::Serialize;

/// JSON output for a single transformed query.
#[derive(Serialize)]
pub struct JsonTransform {
    /// The original query string.
    pub query: String,
    /// The generated expression; empty when nothing is searchable.
    pub expression: String,
}

/// JSON output for `ftsq transform`.
#[derive(Serialize)]
pub struct JsonTransformOutput {
    /// Results in input order.
    pub queries: Vec<JsonTransform>,
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Colors an expression using the operator spellings of `grammar`.
pub fn styled_expression(expression: &str, grammar: &Grammar) -> String {
    let keywords = [
        grammar.and.as_str(),
        grammar.or.as_str(),
        grammar.near.as_str(),
        grammar.not.as_str(),
    ];
    highlight_expression(expression, &keywords)
}
