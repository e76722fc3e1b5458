//! Terminal styling for ftsq output.
//!
//! Configuration files are highlighted with syntect, using the extra syntaxes and themes
//! bundled by two-face. Generated search expressions get a lighter treatment: operator
//! keywords and quoted literals are colored directly with ANSI escapes.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Highlights configuration text for terminal output.
pub struct Highlighter {
    /// Language definitions, including TOML.
    syntax_set: SyntaxSet,
    /// Bundled color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Active theme.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self::with_theme(EmbeddedThemeName::Dracula)
    }

    /// Creates a highlighter using the given bundled theme.
    pub fn with_theme(theme: EmbeddedThemeName) -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme,
        }
    }

    /// Highlights TOML content.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights content in the named syntax, looked up by extension and then by name.
    ///
    /// Unknown syntaxes fall back to plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self.find_syntax(syntax_name);
        let mut lines = HighlightLines::new(syntax, self.theme_set.get(self.theme));

        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(colors::RESET);
        output
    }

    /// Resolves a syntax name to a definition.
    fn find_syntax(&self, syntax_name: &str) -> &SyntaxReference {
        self.syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}

/// ANSI escape codes.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text.
    pub const CYAN: &str = "\x1b[36m";
    /// Green text.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text.
    pub const YELLOW: &str = "\x1b[33m";
    /// Magenta text.
    pub const MAGENTA: &str = "\x1b[35m";
    /// Red text.
    pub const RED: &str = "\x1b[31m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps `text` in the given escape codes followed by a reset.
fn paint(codes: &[&str], text: &str) -> String {
    let mut out = codes.concat();
    out.push_str(text);
    out.push_str(colors::RESET);
    out
}

/// Formats a header (bold cyan).
pub fn header(text: &str) -> String {
    paint(&[colors::BOLD, colors::CYAN], text)
}

/// Formats a subheader (bold).
pub fn subheader(text: &str) -> String {
    paint(&[colors::BOLD], text)
}

/// Formats secondary text (dim).
pub fn dim(text: &str) -> String {
    paint(&[colors::DIM], text)
}

/// Formats a success message (green).
pub fn success(text: &str) -> String {
    paint(&[colors::GREEN], text)
}

/// Formats a warning (yellow).
pub fn warning(text: &str) -> String {
    paint(&[colors::YELLOW], text)
}

/// Formats an error (red).
pub fn error(text: &str) -> String {
    paint(&[colors::RED], text)
}

/// Returns a dimmed horizontal rule.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// Colors a rendered search expression.
///
/// Words equal to one of `keywords` are shown bold magenta, quoted literals green.
/// Everything else passes through unchanged.
pub fn highlight_expression(expression: &str, keywords: &[&str]) -> String {
    let mut out = String::with_capacity(expression.len() * 2);
    let mut word = String::new();
    let mut chars = expression.chars();

    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }
        flush_word(&mut out, &mut word, keywords);
        if c == '"' {
            let mut literal = String::from('"');
            for inner in chars.by_ref() {
                literal.push(inner);
                if inner == '"' {
                    break;
                }
            }
            out.push_str(&paint(&[colors::GREEN], &literal));
        } else if keywords.iter().any(|k| k.chars().eq([c])) {
            out.push_str(&paint(&[colors::BOLD, colors::MAGENTA], &c.to_string()));
        } else {
            out.push(c);
        }
    }
    flush_word(&mut out, &mut word, keywords);
    out
}

/// Emits a pending word, colored when it is a keyword.
fn flush_word(out: &mut String, word: &mut String, keywords: &[&str]) {
    if word.is_empty() {
        return;
    }
    if keywords.contains(&word.as_str()) {
        out.push_str(&paint(&[colors::BOLD, colors::MAGENTA], word.as_str()));
    } else {
        out.push_str(word);
    }
    word.clear();
}
