//! Syntax tree model that rules operate over.
//!
//! Trees are produced by an external parser and handed to the analyzer
//! either in-process (built with [`Node::new`] and friends) or as JSON.
//! A node owns its children in source order; sibling navigation is a thin
//! view over the parent's child slice, so there is no separate pointer
//! structure that could disagree with [`Node::child_count`].

use serde::{Deserialize, Serialize};

/// Deepest node nesting accepted by [`Node::from_json`].
///
/// Each node takes two JSON levels (the object and its `children` array),
/// so the accepted document nesting is twice this.
pub const MAX_TREE_DEPTH: usize = 512;

/// Kind tag of a syntax tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root of a single source file.
    CompilationUnit,
    /// Brace-delimited statement list.
    Block,
    /// `try { ... } catch ... finally ...`
    TryStatement,
    /// `catch (Type name) { ... }`
    CatchClause,
    /// Parameter binding, including the exception parameter of a catch clause.
    ParameterDeclaration,
    /// A written type, possibly qualified.
    TypeReference,
    /// Alternatives of a multi-catch (`A | B`).
    UnionType,
    /// The `.` joining two segments of a qualified name.
    Qualifier,
    /// A plain name.
    Identifier,
    /// `throw <expr>;`
    ThrowStatement,
    /// `new Type(...)`
    NewExpression,
    /// Expression holder wrapping the operand of a statement.
    ExpressionWrapper,
    /// `receiver.method(...)`
    MethodCall,
    /// Any kind the rules do not care about.
    #[serde(other)]
    Other,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CompilationUnit => "compilation_unit",
            Self::Block => "block",
            Self::TryStatement => "try_statement",
            Self::CatchClause => "catch_clause",
            Self::ParameterDeclaration => "parameter_declaration",
            Self::TypeReference => "type_reference",
            Self::UnionType => "union_type",
            Self::Qualifier => "qualifier",
            Self::Identifier => "identifier",
            Self::ThrowStatement => "throw_statement",
            Self::NewExpression => "new_expression",
            Self::ExpressionWrapper => "expression_wrapper",
            Self::MethodCall => "method_call",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Source position of a node (both 1-indexed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Line number.
    pub line: usize,
    /// Column number.
    pub column: usize,
}

impl Span {
    /// Creates a span at the given line and column.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A syntax tree element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    kind: NodeKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    text: String,
    #[serde(default)]
    span: Span,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    /// Creates a childless node of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: String::new(),
            span: Span::default(),
            children: Vec::new(),
        }
    }

    /// Shorthand for an [`NodeKind::Identifier`] carrying `name`.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Identifier).with_text(name)
    }

    /// Sets the literal token text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the source position.
    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.span = Span::new(line, column);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children in order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Parses a tree from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid serialized tree, or if
    /// it nests deeper than [`MAX_TREE_DEPTH`] nodes.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        let nesting = json_nesting(input);
        if nesting > 2 * MAX_TREE_DEPTH {
            return Err(serde::de::Error::custom(format!(
                "tree nests {} levels deep, limit is {MAX_TREE_DEPTH} nodes",
                nesting.div_ceil(2)
            )));
        }

        // serde_json's own limit (128 levels) is far below real trees.
        let mut de = serde_json::Deserializer::from_str(input);
        de.disable_recursion_limit();
        let node = Self::deserialize(&mut de)?;
        de.end()?;
        Ok(node)
    }

    /// Returns the kind of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the literal token text (empty for structural nodes).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the source position.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the children in source order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns a cursor at the first child, if any.
    #[must_use]
    pub fn first_child(&self) -> Option<Sibling<'_>> {
        Sibling::at(&self.children, 0)
    }

    /// Returns the first direct child of the given kind.
    #[must_use]
    pub fn find_first_child(&self, kind: NodeKind) -> Option<&Node> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Iterates over this node and all of its descendants in document
    /// (pre-order) order.
    ///
    /// Uses an explicit worklist, so arbitrarily deep trees do not grow
    /// the call stack.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Cursor over one child of a node, giving `next_sibling` navigation.
#[derive(Debug, Clone, Copy)]
pub struct Sibling<'a> {
    siblings: &'a [Node],
    index: usize,
}

impl<'a> Sibling<'a> {
    fn at(siblings: &'a [Node], index: usize) -> Option<Self> {
        (index < siblings.len()).then_some(Self { siblings, index })
    }

    /// Returns the node under the cursor.
    #[must_use]
    pub fn node(&self) -> &'a Node {
        &self.siblings[self.index]
    }

    /// Moves to the following sibling, if any.
    #[must_use]
    pub fn next_sibling(&self) -> Option<Self> {
        Self::at(self.siblings, self.index + 1)
    }
}

impl std::ops::Deref for Sibling<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        self.node()
    }
}

/// Pre-order iterator returned by [`Node::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Deepest `{`/`[` nesting of a JSON document, ignoring string contents.
fn json_nesting(input: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in input.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}
