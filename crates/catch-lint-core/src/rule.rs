//! Rule trait and the node dispatch contract.

use crate::context::FileContext;
use crate::tree::{Node, NodeKind};
use crate::types::{Severity, Violation};

/// A lint rule invoked on the syntax tree nodes it declares interest in.
///
/// The walker calls [`Rule::visit_node`] exactly once for every node whose
/// kind appears in [`Rule::relevant_kinds`], in document order, during a
/// single pass over the tree. Implementations hold only immutable
/// configuration, so one instance can serve many trees.
///
/// # Example
///
/// ```ignore
/// use catch_lint_core::{FileContext, Node, NodeKind, Rule, Violation};
///
/// pub struct NoEmptyBlocks;
///
/// impl Rule for NoEmptyBlocks {
///     fn name(&self) -> &'static str { "no-empty-blocks" }
///     fn code(&self) -> &'static str { "IC100" }
///     fn relevant_kinds(&self) -> &'static [NodeKind] { &[NodeKind::Block] }
///
///     fn visit_node(&self, ctx: &FileContext, node: &Node, sink: &mut Vec<Violation>) {
///         // inspect `node`, push violations into `sink`
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "illegal-catch").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "IC001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Node kinds this rule wants to be invoked on.
    fn relevant_kinds(&self) -> &'static [NodeKind];

    /// Inspects one relevant node, pushing any violations into `sink`.
    fn visit_node(&self, ctx: &FileContext, node: &Node, sink: &mut Vec<Violation>);

    /// Runs this rule alone over a whole tree.
    fn check(&self, ctx: &FileContext, root: &Node) -> Vec<Violation>
    where
        Self: Sized,
    {
        let mut sink = Vec::new();
        dispatch(ctx, root, &[self as &dyn Rule], &mut sink);
        sink
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Walks `root` in document order and hands each node to every rule that
/// declared its kind.
pub fn dispatch(ctx: &FileContext, root: &Node, rules: &[&dyn Rule], sink: &mut Vec<Violation>) {
    for node in root.descendants() {
        for rule in rules {
            if rule.relevant_kinds().contains(&node.kind()) {
                rule.visit_node(ctx, node, sink);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;
    use std::path::Path;

    struct ThrowCounter;

    impl Rule for ThrowCounter {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn relevant_kinds(&self) -> &'static [NodeKind] {
            &[NodeKind::ThrowStatement]
        }

        fn visit_node(&self, ctx: &FileContext, node: &Node, sink: &mut Vec<Violation>) {
            sink.push(Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::from_span(ctx.relative_path.clone(), node.span()),
                "throw",
            ));
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = ThrowCounter;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert_eq!(rule.description(), "");
    }

    #[test]
    fn dispatch_visits_relevant_nodes_in_document_order() {
        let root = Node::new(NodeKind::Block).with_children([
            Node::new(NodeKind::Block)
                .with_child(Node::new(NodeKind::ThrowStatement).at(2, 5)),
            Node::new(NodeKind::ThrowStatement).at(4, 1),
            Node::ident("x").at(5, 1),
        ]);
        let ctx = FileContext::new(Path::new("T.tree.json"), Path::new(""));

        let violations = ThrowCounter.check(&ctx, &root);
        let lines: Vec<usize> = violations.iter().map(|v| v.location.line).collect();
        assert_eq!(lines, vec![2, 4]);
    }
}
