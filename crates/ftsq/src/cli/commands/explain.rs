//! Implementation of `ftsq explain`.

use std::process::ExitCode;

use ftsq_highlight::{dim, subheader};
use ftsq_query::Node;

use crate::cli::{
    args::ExplainCommand,
    context::CommandContext,
    output::{print_json, styled_expression},
};

/// Shows the parsed tree, the repaired tree and the generated expression.
pub fn run(ctx: &CommandContext, cmd: &ExplainCommand) -> ExitCode {
    let engine = match ctx.transformer(true) {
        Ok(engine) => engine,
        Err(code) => return code,
    };
    let explanation = engine.explain(&cmd.query);

    if cmd.json {
        return print_json(&explanation);
    }

    println!("{}", subheader("Parsed:"));
    print_tree(explanation.raw.as_ref());
    println!();

    println!("{}", subheader("Normalized:"));
    print_tree(explanation.normalized.as_ref());
    println!();

    println!("{}", subheader("Expression:"));
    if explanation.expression.is_empty() {
        println!("  {}", dim("(nothing to search for)"));
    } else {
        println!(
            "  {}",
            styled_expression(&explanation.expression, engine.grammar())
        );
    }

    ExitCode::SUCCESS
}

/// Prints an indented tree, or a placeholder when there is none.
fn print_tree(node: Option<&Node>) {
    let Some(node) = node else {
        println!("  {}", dim("(empty)"));
        return;
    };
    for line in node.to_string().lines() {
        println!("  {line}");
    }
}
