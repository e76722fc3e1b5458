//! Expression tree.
//!
//! Queries parse into a binary tree of [`Node`]s. Leaves are search terms; interior nodes join
//! two subexpressions under a [`Conjunction`]. Every node carries an exclusion flag (logical
//! NOT) and a grouping flag (rendered inside parentheses).

use std::{fmt, mem};

use serde::Serialize;

/// How a term is matched by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TermForm {
    /// Match any inflected form of the word.
    #[default]
    Inflectional,
    /// Match synonyms of the word.
    Thesaurus,
    /// Match the text exactly (also used for prefix wildcards).
    Literal,
}

/// Operator joining two subexpressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Conjunction {
    /// Both sides must match.
    #[default]
    And,
    /// Either side may match.
    Or,
    /// Both sides must match close to each other.
    Near,
}

/// A node in the expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// The expression is negated.
    pub exclude: bool,
    /// The expression is rendered inside parentheses.
    pub grouped: bool,
    /// Variant-specific data.
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// The two node variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// A single search term.
    Terminal {
        /// The term text, possibly ending in a `*` wildcard.
        term: String,
        /// How the term is matched.
        form: TermForm,
    },
    /// Two subexpressions joined by a conjunction.
    Internal {
        /// Left operand.
        left: Box<Node>,
        /// Right operand.
        right: Box<Node>,
        /// Operator joining the operands.
        conjunction: Conjunction,
    },
}

impl Node {
    /// Creates a terminal node.
    pub fn terminal(term: impl Into<String>, form: TermForm) -> Self {
        Self {
            exclude: false,
            grouped: false,
            kind: NodeKind::Terminal {
                term: term.into(),
                form,
            },
        }
    }

    /// Creates an internal node joining `left` and `right`.
    pub fn internal(left: Self, right: Self, conjunction: Conjunction) -> Self {
        Self {
            exclude: false,
            grouped: false,
            kind: NodeKind::Internal {
                left: Box::new(left),
                right: Box::new(right),
                conjunction,
            },
        }
    }

    /// Sets the exclusion flag.
    pub fn with_exclude(mut self, exclude: bool) -> Self {
        self.exclude = exclude;
        self
    }

    /// Sets the grouping flag.
    pub fn with_grouped(mut self, grouped: bool) -> Self {
        self.grouped = grouped;
        self
    }

    /// Appends `node` to the tree rooted at `root`.
    ///
    /// The result is a new internal node with the existing tree on the left, so trees lean left
    /// in parse order. An absent `node` leaves the tree unchanged.
    pub fn append(root: Option<Self>, node: Option<Self>, conjunction: Conjunction) -> Option<Self> {
        match (root, node) {
            (root, None) => root,
            (None, Some(node)) => Some(node),
            (Some(root), Some(node)) => Some(Self::internal(root, node, conjunction)),
        }
    }

    /// Returns true for terminals.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal { .. })
    }

    /// Returns true for terminals matched exactly.
    pub fn is_literal_terminal(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Terminal {
                form: TermForm::Literal,
                ..
            }
        )
    }

    /// Returns the term text of a terminal.
    pub fn term(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Terminal { term, .. } => Some(term),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Returns the conjunction of an internal node.
    pub fn conjunction(&self) -> Option<Conjunction> {
        match &self.kind {
            NodeKind::Terminal { .. } => None,
            NodeKind::Internal { conjunction, .. } => Some(*conjunction),
        }
    }

    /// Collects every terminal in left-to-right order.
    pub fn terminals(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match &node.kind {
                NodeKind::Terminal { .. } => out.push(node),
                NodeKind::Internal { left, right, .. } => {
                    pending.push(right);
                    pending.push(left);
                }
            }
        }
        out
    }

    /// Moves the variant data out, leaving an empty terminal behind.
    pub(crate) fn take_kind(&mut self) -> NodeKind {
        mem::replace(
            &mut self.kind,
            NodeKind::Terminal {
                term: String::new(),
                form: TermForm::default(),
            },
        )
    }
}

// Trees lean left and grow one level per term, so teardown must not recurse.
impl Drop for Node {
    fn drop(&mut self) {
        let NodeKind::Internal { left, right, .. } = self.take_kind() else {
            return;
        };
        let mut pending = vec![left, right];
        while let Some(mut node) = pending.pop() {
            if let NodeKind::Internal { left, right, .. } = node.take_kind() {
                pending.push(left);
                pending.push(right);
            }
        }
    }
}

impl fmt::Display for Node {
    /// Prints an indented tree, one node per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![(self, 0usize)];
        while let Some((node, indent)) = pending.pop() {
            let prefix = "  ".repeat(indent);
            let mut flags = String::new();
            if node.exclude {
                flags.push_str(" NOT");
            }
            if node.grouped {
                flags.push_str(" grouped");
            }
            match &node.kind {
                NodeKind::Terminal { term, form } => {
                    writeln!(f, "{prefix}Terminal({form:?}, {term:?}){flags}")?;
                }
                NodeKind::Internal {
                    left,
                    right,
                    conjunction,
                } => {
                    writeln!(f, "{prefix}Internal({conjunction:?}){flags}")?;
                    pending.push((right, indent + 1));
                    pending.push((left, indent + 1));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Node {
        Node::terminal(s, TermForm::Inflectional)
    }

    #[test]
    fn append_to_empty_tree() {
        let root = Node::append(None, Some(word("a")), Conjunction::Or);
        assert_eq!(root, Some(word("a")));
    }

    #[test]
    fn append_nothing_keeps_tree() {
        assert_eq!(Node::append(None, None, Conjunction::And), None);
        let root = Node::append(Some(word("a")), None, Conjunction::And);
        assert_eq!(root, Some(word("a")));
    }

    #[test]
    fn append_leans_left() {
        let root = Node::append(None, Some(word("a")), Conjunction::And);
        let root = Node::append(root, Some(word("b")), Conjunction::And);
        let root = Node::append(root, Some(word("c")), Conjunction::Or).unwrap();

        assert_eq!(
            root,
            Node::internal(
                Node::internal(word("a"), word("b"), Conjunction::And),
                word("c"),
                Conjunction::Or
            )
        );
        let terms: Vec<_> = root.terminals().iter().filter_map(|n| n.term()).collect();
        assert_eq!(terms, vec!["a", "b", "c"]);
    }

    #[test]
    fn literal_terminal_detection() {
        assert!(Node::terminal("a", TermForm::Literal).is_literal_terminal());
        assert!(!word("a").is_literal_terminal());
        let pair = Node::internal(
            Node::terminal("a", TermForm::Literal),
            Node::terminal("b", TermForm::Literal),
            Conjunction::Near,
        );
        assert!(!pair.is_literal_terminal());
        assert!(!pair.is_terminal());
        assert_eq!(pair.conjunction(), Some(Conjunction::Near));
    }

    #[test]
    fn deep_tree_walks_and_drops_without_recursion() {
        let mut root = None;
        for i in 0..100_000 {
            root = Node::append(root, Some(word(&format!("w{i}"))), Conjunction::And);
        }
        let root = root.unwrap();

        let terminals = root.terminals();
        assert_eq!(terminals.len(), 100_000);
        assert_eq!(terminals[0].term(), Some("w0"));
        assert_eq!(terminals[99_999].term(), Some("w99999"));
        assert_eq!(root.to_string().lines().count(), 199_999);
        drop(root);
    }

    #[test]
    fn display_tree() {
        let tree = Node::internal(
            word("a"),
            Node::terminal("b", TermForm::Literal).with_exclude(true),
            Conjunction::And,
        )
        .with_grouped(true);

        assert_eq!(
            tree.to_string(),
            "Internal(And) grouped\n  Terminal(Inflectional, \"a\")\n  Terminal(Literal, \"b\") NOT\n"
        );
    }
}
