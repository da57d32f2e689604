//! Tree builders shared by unit tests.

use catch_lint_core::{FileContext, Node, NodeKind};
use std::path::Path;

pub(crate) fn ctx() -> FileContext<'static> {
    FileContext::new(Path::new("Input.tree.json"), Path::new(""))
}

/// Builds a type reference the way a parser nests qualified names:
/// `a.b.C` becomes `Qualifier(Qualifier(a, b), C)`.
pub(crate) fn type_ref(name: &str) -> Node {
    let mut segments = name.split('.').map(Node::ident);
    let first = segments.next().unwrap_or_else(|| Node::ident(""));
    let spelled = segments.fold(first, |left, right| {
        Node::new(NodeKind::Qualifier)
            .with_text(".")
            .with_children([left, right])
    });
    Node::new(NodeKind::TypeReference).with_child(spelled)
}

pub(crate) fn param(type_node: Node, name: &str) -> Node {
    Node::new(NodeKind::ParameterDeclaration).with_children([type_node, Node::ident(name)])
}

pub(crate) fn block(statements: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::Block).with_children(statements)
}

pub(crate) fn catch_clause(type_name: &str, body: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::CatchClause)
        .with_text("catch")
        .at(1, 1)
        .with_children([param(type_ref(type_name), "e"), block(body)])
}

pub(crate) fn throw_of(operand: Node) -> Node {
    Node::new(NodeKind::ThrowStatement)
        .with_text("throw")
        .with_child(Node::new(NodeKind::ExpressionWrapper).with_child(operand))
}

pub(crate) fn rethrow(name: &str) -> Node {
    throw_of(Node::ident(name))
}

pub(crate) fn fresh_throw(type_name: &str) -> Node {
    throw_of(
        Node::new(NodeKind::NewExpression)
            .with_text("new")
            .with_children([Node::ident(type_name), Node::new(NodeKind::Other)]),
    )
}

pub(crate) fn call(name: &str) -> Node {
    Node::new(NodeKind::ExpressionWrapper).with_child(
        Node::new(NodeKind::MethodCall).with_children([Node::ident(name), Node::new(NodeKind::Other)]),
    )
}
