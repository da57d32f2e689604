//! Non-fatal conditions raised while inspecting a single catch clause.

use catch_lint_core::NodeKind;

/// Local problems with one catch clause subtree.
///
/// None of these abort analysis: the rule logs them and moves on to the
/// next clause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatchError {
    /// The caught type subtree lacks the structure needed to spell a name.
    #[error("malformed caught type: {reason}")]
    MalformedType {
        /// What was missing.
        reason: &'static str,
    },

    /// The throw operand has a shape other than `new T(..)` or a plain name.
    #[error("unsupported throw operand: {}", describe(.found))]
    UnsupportedThrowOperand {
        /// Kind of the node found where the operand was expected.
        found: Option<NodeKind>,
    },
}

fn describe(kind: &Option<NodeKind>) -> String {
    kind.map_or_else(|| "nothing".to_string(), |k| k.to_string())
}
