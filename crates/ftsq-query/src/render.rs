//! Rendering expression trees as full-text boolean expressions.
//!
//! The output follows the `CONTAINS` grammar used by SQL Server style full-text engines:
//!
//! ```text
//! FORMSOF(INFLECTIONAL, word)      inflectional term
//! FORMSOF(THESAURUS, word)         thesaurus term
//! "word"                           literal term
//! NOT <term>                       negated term
//! left AND|OR|NEAR right           joined subexpressions
//! (...)                            grouped subexpression
//! ```

use serde::{Deserialize, Serialize};

use crate::node::{Conjunction, Node, NodeKind, TermForm};

/// Keyword spellings of the target grammar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Grammar {
    /// Keyword for [`Conjunction::And`].
    pub and: String,
    /// Keyword for [`Conjunction::Or`].
    pub or: String,
    /// Keyword for [`Conjunction::Near`].
    pub near: String,
    /// Negation prefix.
    pub not: String,
    /// Function wrapping inflectional and thesaurus terms.
    pub forms_of: String,
    /// Generation type for [`TermForm::Inflectional`].
    pub inflectional: String,
    /// Generation type for [`TermForm::Thesaurus`].
    pub thesaurus: String,
}

impl Default for Grammar {
    fn default() -> Self {
        Self {
            and: String::from("AND"),
            or: String::from("OR"),
            near: String::from("NEAR"),
            not: String::from("NOT"),
            forms_of: String::from("FORMSOF"),
            inflectional: String::from("INFLECTIONAL"),
            thesaurus: String::from("THESAURUS"),
        }
    }
}

impl Grammar {
    /// Returns the keyword for a conjunction.
    pub fn conjunction(&self, conjunction: Conjunction) -> &str {
        match conjunction {
            Conjunction::And => &self.and,
            Conjunction::Or => &self.or,
            Conjunction::Near => &self.near,
        }
    }
}

impl Node {
    /// Renders the node with the given keyword spellings.
    pub fn render(&self, grammar: &Grammar) -> String {
        let mut out = String::new();
        self.render_into(grammar, &mut out);
        out
    }

    /// Renders the node with the default keyword spellings.
    pub fn to_query_string(&self) -> String {
        self.render(&Grammar::default())
    }

    /// Appends the rendered node to `out`.
    ///
    /// Walks the tree with an explicit stack, since trees grow one level per term.
    fn render_into(&self, grammar: &Grammar, out: &mut String) {
        let mut pending = vec![Step::Node(self)];
        while let Some(step) = pending.pop() {
            match step {
                Step::Text(text) => out.push_str(text),
                Step::Keyword(keyword) => {
                    out.push(' ');
                    out.push_str(keyword);
                    out.push(' ');
                }
                Step::Node(node) => match &node.kind {
                    NodeKind::Terminal { term, form } => {
                        render_terminal(term, *form, node.exclude, grammar, out);
                    }
                    NodeKind::Internal {
                        left,
                        right,
                        conjunction,
                    } => {
                        if node.grouped {
                            out.push('(');
                            pending.push(Step::Text(")"));
                        }
                        pending.push(Step::Node(right));
                        pending.push(Step::Keyword(grammar.conjunction(*conjunction)));
                        pending.push(Step::Node(left));
                    }
                },
            }
        }
    }
}

/// Pending output for [`Node::render_into`].
enum Step<'a> {
    /// A subtree still to be rendered.
    Node(&'a Node),
    /// A conjunction keyword, padded with spaces.
    Keyword(&'a str),
    /// Literal text.
    Text(&'a str),
}

/// Appends a single term.
fn render_terminal(
    term: &str,
    form: TermForm,
    exclude: bool,
    grammar: &Grammar,
    out: &mut String,
) {
    if exclude {
        out.push_str(&grammar.not);
        out.push(' ');
    }
    let rendered = match form {
        TermForm::Inflectional => {
            format!("{}({}, {term})", grammar.forms_of, grammar.inflectional)
        }
        TermForm::Thesaurus => format!("{}({}, {term})", grammar.forms_of, grammar.thesaurus),
        TermForm::Literal => format!("\"{term}\""),
    };
    out.push_str(&rendered);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(s: &str) -> Node {
        Node::terminal(s, TermForm::Literal)
    }

    #[test]
    fn terminal_forms() {
        assert_eq!(
            Node::terminal("abc", TermForm::Inflectional).to_query_string(),
            "FORMSOF(INFLECTIONAL, abc)"
        );
        assert_eq!(
            Node::terminal("abc", TermForm::Thesaurus).to_query_string(),
            "FORMSOF(THESAURUS, abc)"
        );
        assert_eq!(literal("abc").to_query_string(), "\"abc\"");
        assert_eq!(literal("abc*").to_query_string(), "\"abc*\"");
    }

    #[test]
    fn excluded_terminal() {
        assert_eq!(
            literal("abc").with_exclude(true).to_query_string(),
            "NOT \"abc\""
        );
    }

    #[test]
    fn grouped_terminal_has_no_parentheses() {
        assert_eq!(literal("abc").with_grouped(true).to_query_string(), "\"abc\"");
    }

    #[test]
    fn internal_nodes() {
        let near = Node::internal(literal("a"), literal("b"), Conjunction::Near);
        assert_eq!(near.to_query_string(), "\"a\" NEAR \"b\"");

        let grouped = Node::internal(literal("a"), literal("b"), Conjunction::Or).with_grouped(true);
        let tree = Node::internal(grouped, literal("c").with_exclude(true), Conjunction::And);
        assert_eq!(tree.to_query_string(), "(\"a\" OR \"b\") AND NOT \"c\"");
    }

    #[test]
    fn nested_groups() {
        let inner = Node::internal(literal("b"), literal("c"), Conjunction::Or).with_grouped(true);
        let tree = Node::internal(literal("a"), inner, Conjunction::And).with_grouped(true);
        let tree = Node::internal(tree, literal("d"), Conjunction::Near);
        assert_eq!(
            tree.to_query_string(),
            "(\"a\" AND (\"b\" OR \"c\")) NEAR \"d\""
        );
    }

    #[test]
    fn long_chain_renders_without_recursion() {
        let mut root = literal("w");
        for _ in 1..100_000 {
            root = Node::internal(root, literal("w"), Conjunction::Or);
        }
        let rendered = root.to_query_string();
        assert_eq!(rendered.matches(" OR ").count(), 99_999);
        assert!(rendered.starts_with("\"w\" OR \"w\""));
    }

    #[test]
    fn custom_grammar() {
        let grammar = Grammar {
            and: String::from("&"),
            not: String::from("!"),
            forms_of: String::from("FORMS"),
            ..Grammar::default()
        };
        let tree = Node::internal(
            Node::terminal("a", TermForm::Inflectional),
            literal("b").with_exclude(true),
            Conjunction::And,
        );
        assert_eq!(tree.render(&grammar), "FORMS(INFLECTIONAL, a) & ! \"b\"");
    }

    #[test]
    fn grammar_partial_deserialize() {
        let grammar: Grammar = serde_json::from_str(r#"{"near": "~"}"#).unwrap();
        assert_eq!(grammar.near, "~");
        assert_eq!(grammar.and, "AND");
    }
}
