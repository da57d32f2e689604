//! # catch-lint-rules
//!
//! Built-in lint rules for catch-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | IC001 | `illegal-catch` | Forbids catching overly broad exception types |
//!
//! ## Usage
//!
//! ```ignore
//! use catch_lint_core::Analyzer;
//! use catch_lint_rules::IllegalCatch;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./trees")
//!     .rule(IllegalCatch::new().permit_rethrow(true))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod illegal_catch;
mod illegal_names;
mod qualified_name;
mod registry;
mod throw_scan;

#[cfg(test)]
mod test_support;

pub use error::CatchError;
pub use illegal_catch::{IllegalCatch, IllegalCatchConfig, CODE, MESSAGE_KEY, NAME};
pub use illegal_names::{IllegalNames, DEFAULT_ILLEGAL_NAMES};
pub use qualified_name::{resolve as resolve_type_name, QualifiedName};
pub use registry::{all_rules, rules_by_name, rules_from_config};
pub use throw_scan::{classify as classify_throw, find_throw, ThrowPattern, MAX_SCAN_DEPTH};

/// Re-export core types for convenience.
pub use catch_lint_core::{Rule, Severity, Violation};
