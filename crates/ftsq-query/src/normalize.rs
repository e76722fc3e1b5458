//! Expression tree repair.
//!
//! The parser accepts anything, but the target grammar does not. This pass rewrites a raw tree
//! bottom-up until every node is renderable:
//!
//! - `NEAR` only joins two literal terms; anything else is demoted to `AND`.
//! - `OR` operands may not be negated; negated or missing operands are discarded.
//! - A node with one surviving child collapses to that child.
//! - Negated operands are moved to the right (`a AND NOT b`, never `NOT b AND a`).
//! - A negation cannot stand alone: a negated root or group is discarded.

use tracing::trace;

use crate::node::{Conjunction, Node, NodeKind};

/// Repairs a raw expression tree. Returns `None` if nothing renderable remains.
///
/// Trees grow one level per term, so the walk keeps its own stack instead of recursing.
pub fn normalize(root: Option<Node>) -> Option<Node> {
    let mut tasks = vec![Task::Visit {
        node: root?,
        is_root: true,
    }];
    let mut repaired: Vec<Option<Node>> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit { mut node, is_root } => match node.take_kind() {
                NodeKind::Internal {
                    left,
                    right,
                    conjunction,
                } => {
                    tasks.push(Task::Join {
                        conjunction,
                        grouped: node.grouped,
                        is_root,
                    });
                    tasks.push(Task::Visit {
                        node: *right,
                        is_root: false,
                    });
                    tasks.push(Task::Visit {
                        node: *left,
                        is_root: false,
                    });
                }
                kind => {
                    node.kind = kind;
                    repaired.push(drop_standalone_negation(Some(node), is_root));
                }
            },
            Task::Join {
                conjunction,
                grouped,
                is_root,
            } => {
                let right = repaired.pop().flatten();
                let left = repaired.pop().flatten();
                let node = join(left, right, conjunction, grouped);
                repaired.push(drop_standalone_negation(node, is_root));
            }
        }
    }

    repaired.pop().flatten()
}

/// Pending work for [`normalize`].
enum Task {
    /// Repair a subtree.
    Visit {
        /// The subtree.
        node: Node,
        /// Whether the subtree is the whole tree.
        is_root: bool,
    },
    /// Rebuild an internal node from its two repaired children, which are on top of the stack.
    Join {
        /// Conjunction of the original node.
        conjunction: Conjunction,
        /// Grouping flag of the original node.
        grouped: bool,
        /// Whether the node is the root of the whole tree.
        is_root: bool,
    },
}

/// A negation cannot stand alone as the root or as a group.
fn drop_standalone_negation(node: Option<Node>, is_root: bool) -> Option<Node> {
    let node = node?;
    if node.exclude && (node.grouped || is_root) {
        trace!(grouped = node.grouped, is_root, "dropping standalone negation");
        return None;
    }
    Some(node)
}

/// Rebuilds an internal node from its repaired children.
fn join(
    mut left: Option<Node>,
    mut right: Option<Node>,
    mut conjunction: Conjunction,
    grouped: bool,
) -> Option<Node> {
    match conjunction {
        Conjunction::Near => {
            if !is_near_operand(left.as_ref()) || !is_near_operand(right.as_ref()) {
                trace!("demoting NEAR to AND");
                conjunction = Conjunction::And;
            }
        }
        Conjunction::Or => {
            if !is_or_operand(left.as_ref()) {
                trace!("discarding left OR operand");
                left = None;
            }
            if !is_or_operand(right.as_ref()) {
                trace!("discarding right OR operand");
                right = None;
            }
        }
        Conjunction::And => {}
    }

    match (left, right) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(only),
        (Some(left), Some(right)) => {
            let exclude = left.exclude && right.exclude;
            let (left, right) = if !exclude && left.exclude {
                trace!("moving negated operand to the right");
                (right, left)
            } else {
                (left, right)
            };
            Some(Node {
                exclude,
                grouped,
                kind: NodeKind::Internal {
                    left: Box::new(left),
                    right: Box::new(right),
                    conjunction,
                },
            })
        }
    }
}

/// `NEAR` joins literal terms only.
fn is_near_operand(node: Option<&Node>) -> bool {
    node.is_some_and(Node::is_literal_terminal)
}

/// `OR` operands must exist and must not be negated.
fn is_or_operand(node: Option<&Node>) -> bool {
    node.is_some_and(|node| !node.exclude)
}
