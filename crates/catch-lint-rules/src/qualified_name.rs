//! Reconstructs the spelled name of a type reference.
//!
//! Resolution is purely syntactic: `Exception` stays `Exception` and
//! `java.lang.Exception` stays `java.lang.Exception`. Imports and aliases
//! are never consulted.

use crate::error::CatchError;
use catch_lint_core::{Node, NodeKind};

/// Separator between segments of a qualified name.
pub const SEPARATOR: &str = ".";

/// A type name exactly as written in source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    /// Splits a dotted spelling into a name.
    #[must_use]
    pub fn parse(spelled: &str) -> Self {
        Self {
            segments: spelled.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Returns the last segment (`Exception` for `java.lang.Exception`).
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Returns true if the name has more than one segment.
    #[must_use]
    pub fn is_qualified(&self) -> bool {
        self.segments.len() > 1
    }

    /// Returns the segments in source order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join(SEPARATOR))
    }
}

/// Resolves a `TypeReference` node to the name it spells.
///
/// Identifier descendants are collected left to right, which also walks
/// through nested qualifier nodes in source order.
///
/// # Errors
///
/// Returns [`CatchError::MalformedType`] if the subtree holds no
/// identifier.
pub fn resolve(type_ref: &Node) -> Result<QualifiedName, CatchError> {
    let segments: Vec<String> = type_ref
        .descendants()
        .filter(|n| n.kind() == NodeKind::Identifier)
        .map(|n| n.text().trim().to_string())
        .collect();

    if segments.is_empty() || segments.iter().any(String::is_empty) {
        return Err(CatchError::MalformedType {
            reason: "type reference has no usable identifier",
        });
    }

    Ok(QualifiedName { segments })
}
