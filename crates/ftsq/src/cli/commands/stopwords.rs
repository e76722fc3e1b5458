//! Implementation of `ftsq stopwords`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use ftsq_query::StopWords;

use crate::cli::{args::StopWordsCommand, context::CommandContext};

/// Lists the effective stop words, or reports on the given words.
pub fn run(ctx: &CommandContext, cmd: &StopWordsCommand) -> ExitCode {
    let stop_words = match ctx.stop_words() {
        Ok(words) => words,
        Err(code) => return code,
    };

    if cmd.words.is_empty() {
        for word in stop_words.iter() {
            println!("{word}");
        }
    } else {
        println!("{}", lookup_table(&stop_words, &cmd.words));
    }

    ExitCode::SUCCESS
}

/// Builds a table of words and whether each is a stop word.
fn lookup_table(stop_words: &StopWords, words: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Word", "Stop word"]);
    for word in words {
        let verdict = if stop_words.contains(word) { "yes" } else { "no" };
        table.add_row(vec![Cell::new(word), Cell::new(verdict)]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_marks_stop_words() {
        let table = lookup_table(&StopWords::standard(), &["the".into(), "rust".into()]);
        let rendered = table.to_string();
        let the_row = rendered.lines().find(|l| l.contains("the")).unwrap();
        let rust_row = rendered.lines().find(|l| l.contains("rust")).unwrap();
        assert!(the_row.contains("yes"));
        assert!(rust_row.contains("no"));
    }
}
