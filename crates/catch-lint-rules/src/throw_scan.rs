//! Scoped search for the throw statement inside a catch clause.
//!
//! The search is depth-first, pre-order and left to right. A node whose
//! kind is in the skip set is not entered at all, which is how parameter
//! declarations (of the clause itself and of nested clauses) stay out of
//! scope while nested catch bodies are still searched. The first throw
//! reached wins: for siblings `[A, B]` where `A` hides a throw somewhere
//! below it and `B` is itself a throw, the one under `A` is returned.

use crate::error::CatchError;
use catch_lint_core::{Node, NodeKind};
use tracing::warn;

/// Deepest level below the scope root the search descends to.
pub const MAX_SCAN_DEPTH: usize = 256;

/// Shape of a throw found in a catch clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowPattern {
    /// `throw new T(..);`
    FreshThrow,
    /// `throw e;`
    Rethrow,
}

/// Finds the first throw statement under `scope`, never entering nodes
/// whose kind is in `skip`.
#[must_use]
pub fn find_throw<'a>(scope: &'a Node, skip: &[NodeKind]) -> Option<&'a Node> {
    search(scope, skip, 0)
}

fn search<'a>(parent: &'a Node, skip: &[NodeKind], depth: usize) -> Option<&'a Node> {
    if depth >= MAX_SCAN_DEPTH {
        warn!(
            "Throw search stopped at depth {} under {} at {}:{}",
            depth,
            parent.kind(),
            parent.span().line,
            parent.span().column
        );
        return None;
    }

    let mut cursor = parent.first_child();
    while let Some(child) = cursor {
        let node = child.node();
        if !skip.contains(&node.kind()) {
            if node.kind() == NodeKind::ThrowStatement {
                return Some(node);
            }
            if let Some(found) = search(node, skip, depth + 1) {
                return Some(found);
            }
        }
        cursor = child.next_sibling();
    }

    None
}

/// Classifies a throw statement by the shape of its operand.
///
/// # Errors
///
/// Returns [`CatchError::UnsupportedThrowOperand`] for anything other than
/// a wrapped `new` expression or a wrapped plain identifier.
pub fn classify(throw: &Node) -> Result<ThrowPattern, CatchError> {
    let operand = throw.first_child().map(|c| c.node());

    let inner = match operand {
        Some(wrapper) if wrapper.kind() == NodeKind::ExpressionWrapper => {
            wrapper.first_child().map(|c| c.kind())
        }
        other => {
            return Err(CatchError::UnsupportedThrowOperand {
                found: other.map(Node::kind),
            })
        }
    };

    match inner {
        Some(NodeKind::NewExpression) => Ok(ThrowPattern::FreshThrow),
        Some(NodeKind::Identifier) => Ok(ThrowPattern::Rethrow),
        found => Err(CatchError::UnsupportedThrowOperand { found }),
    }
}
