//! # catch-lint-core
//!
//! Core framework for linting exception handling over parsed syntax trees.
//!
//! This crate provides the foundational types for building tree rules.
//! It includes:
//!
//! - [`Node`] and [`NodeKind`], the syntax tree model rules operate over
//! - [`Rule`] trait and the per-node dispatch contract
//! - [`Analyzer`] for orchestrating lint execution over serialized trees
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use catch_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./trees")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod tree;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, TREE_FILE_SUFFIX};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use rule::{dispatch, Rule, RuleBox};
pub use tree::{Descendants, Node, NodeKind, Sibling, Span, MAX_TREE_DEPTH};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
