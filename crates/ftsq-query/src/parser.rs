//! Query parser.
//!
//! Scans a Google-style query and builds a raw expression tree, one term at a time.
//!
//! # Syntax
//!
//! ```text
//! word          inflectional match             "a phrase"   literal match
//! word*         prefix match (literal)         +word        literal match
//! ~word         thesaurus match                NOT word     exclude
//! -word         exclude                        a AND b      conjunction
//! a OR b        disjunction                    a NEAR b     proximity
//! (a b)         grouping                       <a b>        proximity group
//! ```
//!
//! An apostrophe is an ordinary word character, so `don't` and `'quoted'` are single words.
//!
//! Adjacent terms are joined by the default conjunction of the enclosing group. Operators are
//! modifiers that apply to the next term only; after each term they reset. The parser never
//! fails: unknown punctuation is skipped and unterminated quotes and groups run to the end of
//! the text. Groups nested deeper than [`MAX_GROUP_DEPTH`] are flattened into the enclosing
//! group.

use tracing::trace;

use crate::{
    node::{Conjunction, Node, TermForm},
    scanner::Scanner,
    stopwords::StopWords,
};

/// Characters that never appear in bare words.
const PUNCTUATION: &str = "~\"`!@#$%^&*()-+=[]{}\\|;:,.<>?/";

/// Returns true for characters in [`PUNCTUATION`].
fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(ch)
}

/// Nesting depth past which `(` and `<` are ignored like other punctuation.
pub(crate) const MAX_GROUP_DEPTH: usize = 64;

/// Returns true for characters that hide group delimiters during block extraction.
fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}

/// Operator words recognised between terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `NEAR`
    Near,
    /// `NOT`
    Not,
}

impl Keyword {
    /// Matches a word against the operator keywords, ignoring case.
    fn from_word(word: &str) -> Option<Self> {
        [
            ("and", Self::And),
            ("or", Self::Or),
            ("near", Self::Near),
            ("not", Self::Not),
        ]
        .into_iter()
        .find(|(name, _)| word.eq_ignore_ascii_case(name))
        .map(|(_, keyword)| keyword)
    }
}

/// Modifiers collected for the next term.
#[derive(Debug, Clone, Copy)]
struct Modifiers {
    /// Conjunction joining the next term to the tree.
    conjunction: Conjunction,
    /// Whether the next term is excluded.
    exclude: bool,
    /// Match form of the next term.
    form: TermForm,
}

impl Modifiers {
    /// Modifiers at the start of a term cycle.
    fn new(conjunction: Conjunction) -> Self {
        Self {
            conjunction,
            exclude: false,
            form: TermForm::Inflectional,
        }
    }
}

/// Builds raw expression trees from query text.
pub(crate) struct Parser<'a> {
    /// Terms dropped while building terminals.
    stop_words: &'a StopWords,
}

impl<'a> Parser<'a> {
    /// Creates a parser filtering terms through `stop_words`.
    pub(crate) fn new(stop_words: &'a StopWords) -> Self {
        Self { stop_words }
    }

    /// Parses `text`, joining adjacent terms with `default_conjunction`.
    ///
    /// Returns `None` if no term survives.
    pub(crate) fn parse_node(&self, text: &str, default_conjunction: Conjunction) -> Option<Node> {
        self.parse_group(text, default_conjunction, 0)
    }

    /// Parses the text of a group nested `depth` levels deep.
    fn parse_group(
        &self,
        text: &str,
        default_conjunction: Conjunction,
        depth: usize,
    ) -> Option<Node> {
        let mut scanner = Scanner::new(text);
        let mut root = None;
        let mut modifiers = Modifiers::new(default_conjunction);

        loop {
            scanner.skip_whitespace();
            if scanner.at_end() {
                break;
            }

            match scanner.peek() {
                ch if !is_punctuation(ch) => {
                    let start = scanner.position();
                    scanner.skip_while(|c| !is_punctuation(c) && !c.is_whitespace());
                    if scanner.peek() == '*' {
                        scanner.advance();
                        modifiers.form = TermForm::Literal;
                    }
                    let word = scanner.extract(start, scanner.position());
                    match Keyword::from_word(&word) {
                        Some(Keyword::And) => modifiers.conjunction = Conjunction::And,
                        Some(Keyword::Or) => modifiers.conjunction = Conjunction::Or,
                        Some(Keyword::Near) => modifiers.conjunction = Conjunction::Near,
                        Some(Keyword::Not) => modifiers.exclude = true,
                        None => {
                            root = self.append_term(root, &word, modifiers);
                            modifiers = Modifiers::new(default_conjunction);
                        }
                    }
                    // The word scan already stopped on the next character.
                    continue;
                }
                '"' => {
                    let term = extract_quote(&mut scanner);
                    modifiers.form = TermForm::Literal;
                    root = self.append_term(root, term.trim(), modifiers);
                    modifiers = Modifiers::new(default_conjunction);
                }
                '(' if depth < MAX_GROUP_DEPTH => {
                    let block = extract_block(&mut scanner, '(', ')');
                    let node = self
                        .parse_group(&block, default_conjunction, depth + 1)
                        .map(|node| node.with_grouped(true));
                    root = Node::append(root, node, modifiers.conjunction);
                    modifiers = Modifiers::new(default_conjunction);
                }
                '<' if depth < MAX_GROUP_DEPTH => {
                    let block = extract_block(&mut scanner, '<', '>');
                    let node = self
                        .parse_group(&block, Conjunction::Near, depth + 1)
                        .map(|node| node.with_grouped(false));
                    root = Node::append(root, node, modifiers.conjunction);
                    modifiers = Modifiers::new(default_conjunction);
                }
                '-' => modifiers.exclude = true,
                '+' => modifiers.form = TermForm::Literal,
                '~' => modifiers.form = TermForm::Thesaurus,
                _ => {}
            }

            scanner.advance();
        }

        root
    }

    /// Appends a terminal for `term` unless it is empty or a stop word.
    fn append_term(&self, root: Option<Node>, term: &str, modifiers: Modifiers) -> Option<Node> {
        if term.is_empty() {
            return root;
        }
        if self.stop_words.contains(term) {
            trace!(term, "dropping stop word");
            return root;
        }

        let node = Node::terminal(term, modifiers.form).with_exclude(modifiers.exclude);
        Node::append(root, Some(node), modifiers.conjunction)
    }
}

/// Extracts a quoted term.
///
/// Expects the cursor on the opening `"`. Returns the text up to the matching closing quote
/// and leaves the cursor on it, or at the end of the text if the quote is unterminated.
fn extract_quote(scanner: &mut Scanner) -> String {
    scanner.advance();
    scanner.take_while(|ch| ch != '"')
}

/// Extracts the contents of a balanced block.
///
/// Expects the cursor on `open`. Returns the text between `open` and the `close` at the same
/// nesting depth and leaves the cursor on `close`, or at the end of the text if unmatched.
/// Quoted text is skipped as a unit, so delimiters inside quotes do not affect the depth.
pub(crate) fn extract_block(scanner: &mut Scanner, open: char, close: char) -> String {
    scanner.advance();
    let start = scanner.position();
    let mut depth = 1usize;

    while !scanner.at_end() {
        let ch = scanner.peek();
        if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                break;
            }
        } else if is_quote(ch) {
            scanner.advance();
            scanner.skip_to(ch);
        }
        scanner.advance();
    }

    scanner.extract(start, scanner.position())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<Node> {
        Parser::new(&StopWords::standard()).parse_node(text, Conjunction::And)
    }

    fn parse_unfiltered(text: &str) -> Option<Node> {
        Parser::new(&StopWords::empty()).parse_node(text, Conjunction::And)
    }

    fn word(s: &str) -> Node {
        Node::terminal(s, TermForm::Inflectional)
    }

    fn literal(s: &str) -> Node {
        Node::terminal(s, TermForm::Literal)
    }

    fn and(left: Node, right: Node) -> Node {
        Node::internal(left, right, Conjunction::And)
    }

    fn block(text: &str, open: char, close: char) -> (String, usize) {
        let mut scanner = Scanner::new(text);
        let inner = extract_block(&mut scanner, open, close);
        (inner, scanner.position())
    }

    #[test]
    fn empty_query() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   \t "), None);
    }

    #[test]
    fn single_word() {
        assert_eq!(parse("rust"), Some(word("rust")));
    }

    #[test]
    fn adjacent_words_use_default_conjunction() {
        assert_eq!(
            parse("rust async await"),
            Some(and(and(word("rust"), word("async")), word("await")))
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(
            parse("rust Or golang"),
            Some(Node::internal(word("rust"), word("golang"), Conjunction::Or))
        );
        assert_eq!(
            parse("rust NEAR golang"),
            Some(Node::internal(word("rust"), word("golang"), Conjunction::Near))
        );
        assert_eq!(
            parse("rust nOt golang"),
            Some(and(word("rust"), word("golang").with_exclude(true)))
        );
    }

    #[test]
    fn explicit_and() {
        assert_eq!(parse("rust AND golang"), Some(and(word("rust"), word("golang"))));
    }

    #[test]
    fn keyword_modifiers_reset_after_term() {
        // OR applies to golang only; python is joined by the default conjunction.
        assert_eq!(
            parse("rust or golang python"),
            Some(and(
                Node::internal(word("rust"), word("golang"), Conjunction::Or),
                word("python")
            ))
        );
    }

    #[test]
    fn quoted_terms_are_literal() {
        assert_eq!(parse("\"error handling\""), Some(literal("error handling")));
    }

    #[test]
    fn single_quotes_are_word_characters() {
        assert_eq!(
            parse("'error handling'"),
            Some(and(word("'error"), word("handling'")))
        );
        assert_eq!(
            parse("'say \"hi\" now'"),
            Some(and(and(word("'say"), literal("hi")), word("now'")))
        );
    }

    #[test]
    fn quoted_term_is_trimmed() {
        assert_eq!(parse("\"  spaced  \""), Some(literal("spaced")));
    }

    #[test]
    fn empty_quotes_are_dropped() {
        assert_eq!(parse("\"\" rust \"   \""), Some(word("rust")));
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        assert_eq!(parse("rust \"error handling"), Some(and(word("rust"), literal("error handling"))));
    }

    #[test]
    fn apostrophe_inside_word_is_kept() {
        assert_eq!(parse("don't"), Some(word("don't")));
    }

    #[test]
    fn wildcard_forces_literal() {
        assert_eq!(parse("data*"), Some(literal("data*")));
        assert_eq!(parse("~data*"), Some(literal("data*")));
    }

    #[test]
    fn prefix_modifiers() {
        assert_eq!(parse("+rust"), Some(literal("rust")));
        assert_eq!(parse("~rust"), Some(Node::terminal("rust", TermForm::Thesaurus)));
        assert_eq!(parse("-rust"), Some(word("rust").with_exclude(true)));
        assert_eq!(parse("-+rust"), Some(literal("rust").with_exclude(true)));
    }

    #[test]
    fn exclude_does_not_reset_conjunction() {
        assert_eq!(
            parse("rust or -golang"),
            Some(Node::internal(
                word("rust"),
                word("golang").with_exclude(true),
                Conjunction::Or
            ))
        );
    }

    #[test]
    fn unknown_punctuation_is_ignored() {
        assert_eq!(parse("rust, golang!"), Some(and(word("rust"), word("golang"))));
        assert_eq!(parse("#$%^&"), None);
    }

    #[test]
    fn punctuation_splits_words() {
        assert_eq!(parse("foo.bar"), Some(and(word("foo"), word("bar"))));
    }

    #[test]
    fn stop_words_are_dropped() {
        assert_eq!(parse("the rust"), Some(word("rust")));
        assert_eq!(parse("the of a"), None);
    }

    #[test]
    fn quoted_stop_words_are_dropped() {
        assert_eq!(parse("\"the\""), None);
        assert_eq!(parse_unfiltered("\"the\""), Some(literal("the")));
    }

    #[test]
    fn stop_word_still_resets_modifiers() {
        // `-the` is dropped, and the exclusion does not leak onto rust.
        assert_eq!(parse("-the rust"), Some(word("rust")));
    }

    #[test]
    fn parenthesized_group() {
        assert_eq!(
            parse("(rust or golang) async"),
            Some(and(
                Node::internal(word("rust"), word("golang"), Conjunction::Or).with_grouped(true),
                word("async")
            ))
        );
    }

    #[test]
    fn group_inherits_default_conjunction() {
        let tree = Parser::new(&StopWords::empty()).parse_node("x (a b)", Conjunction::Or);
        assert_eq!(
            tree,
            Some(Node::internal(
                word("x"),
                Node::internal(word("a"), word("b"), Conjunction::Or).with_grouped(true),
                Conjunction::Or
            ))
        );
    }

    #[test]
    fn angle_group_defaults_to_near() {
        assert_eq!(
            parse("<+abc +def>"),
            Some(Node::internal(literal("abc"), literal("def"), Conjunction::Near))
        );
    }

    #[test]
    fn angle_group_clears_inner_grouping() {
        // The inner group inherits NEAR from the angle brackets.
        assert_eq!(
            parse("<(abc def)>"),
            Some(Node::internal(word("abc"), word("def"), Conjunction::Near))
        );
    }

    #[test]
    fn empty_group_is_dropped() {
        assert_eq!(parse("rust () <>"), Some(word("rust")));
    }

    #[test]
    fn group_joined_by_explicit_conjunction() {
        assert_eq!(
            parse("rust or (golang)"),
            Some(Node::internal(
                word("rust"),
                word("golang").with_grouped(true),
                Conjunction::Or
            ))
        );
    }

    #[test]
    fn block_extraction_nests() {
        assert_eq!(block("(a (b) c) d", '(', ')'), (String::from("a (b) c"), 8));
    }

    #[test]
    fn block_extraction_skips_quotes() {
        assert_eq!(block("(a \"b)c\" d)", '(', ')').0, "a \"b)c\" d");
        assert_eq!(block("<a 'b>c' d>", '<', '>').0, "a 'b>c' d");
    }

    #[test]
    fn block_extraction_unmatched() {
        let (inner, position) = block("(a (b c", '(', ')');
        assert_eq!(inner, "a (b c");
        assert_eq!(position, 7);
    }

    #[test]
    fn unclosed_group_runs_to_end() {
        assert_eq!(
            parse("rust (golang python"),
            Some(and(
                word("rust"),
                and(word("golang"), word("python")).with_grouped(true)
            ))
        );
    }

    #[test]
    fn groups_past_depth_limit_are_flattened() {
        let levels = MAX_GROUP_DEPTH + 3;
        let query = format!("{}a b{}", "(".repeat(levels), ")".repeat(levels));
        let mut expected = and(word("a"), word("b"));
        for _ in 0..MAX_GROUP_DEPTH {
            expected = expected.with_grouped(true);
        }
        // Each group holds a single subtree, so the grouping flag is all that nesting leaves.
        assert_eq!(parse_unfiltered(&query), Some(expected));
    }

    #[test]
    fn deep_angle_nesting_is_bounded() {
        let query = format!("{}+x +y{}", "<".repeat(10_000), ">".repeat(10_000));
        assert_eq!(
            parse_unfiltered(&query),
            Some(Node::internal(literal("x"), literal("y"), Conjunction::Near))
        );
    }

    #[test]
    fn stray_closing_delimiters_are_ignored() {
        assert_eq!(parse("rust) >golang"), Some(and(word("rust"), word("golang"))));
    }
}
