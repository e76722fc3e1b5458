//! Implementation of `ftsq transform`.

use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use ftsq_query::Transformer;

use crate::cli::{
    args::TransformCommand,
    context::CommandContext,
    output::{JsonTransform, JsonTransformOutput, print_json},
};

/// Transforms each query, printing one expression per line.
pub fn run(ctx: &CommandContext, cmd: &TransformCommand) -> ExitCode {
    let engine = match ctx.transformer(!cmd.no_stopwords) {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let queries = if cmd.queries.is_empty() {
        match read_stdin_queries() {
            Ok(queries) => queries,
            Err(e) => {
                eprintln!("error: failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        cmd.queries.clone()
    };

    if cmd.json {
        return print_json(&transform_all(&engine, queries));
    }

    for query in &queries {
        println!("{}", engine.transform(query));
    }
    ExitCode::SUCCESS
}

/// Reads one query per stdin line.
fn read_stdin_queries() -> io::Result<Vec<String>> {
    io::stdin().lock().lines().collect()
}

/// Transforms every query into its JSON record.
fn transform_all(engine: &Transformer, queries: Vec<String>) -> JsonTransformOutput {
    let queries = queries
        .into_iter()
        .map(|query| {
            let expression = engine.transform(&query);
            JsonTransform { query, expression }
        })
        .collect();
    JsonTransformOutput { queries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_records_keep_input_order() {
        let engine = Transformer::default();
        let output = transform_all(&engine, vec!["the".into(), "+abc".into()]);
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["queries"][0]["query"], "the");
        assert_eq!(json["queries"][0]["expression"], "");
        assert_eq!(json["queries"][1]["expression"], "\"abc\"");
    }
}
