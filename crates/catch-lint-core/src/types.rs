//! Core types for lint violations and results.

use crate::tree::Span;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Path of the analyzed compilation unit, relative to the project root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Location {
    /// Creates a location from a tree node span.
    #[must_use]
    pub fn from_span(file: PathBuf, span: Span) -> Self {
        Self::new(file, span.line, span.column)
    }

    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self { file, line, column }
    }
}

/// A suggested fix for a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "IC001").
    pub code: String,
    /// Rule name (e.g., "illegal-catch").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Primary location of the violation.
    pub location: Location,
    /// Message key understood by reporting sinks (e.g., "illegal.catch").
    pub key: String,
    /// Arguments substituted into the keyed message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            key: String::new(),
            args: Vec::new(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attaches the message key and its arguments.
    #[must_use]
    pub fn with_key<I, S>(mut self, key: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key = key.into();
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(output, "  = help: {}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v.suggestion.as_ref().map(|s| s.message.clone()),
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of trees checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let errors = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count();
        let warnings = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
            .count();
        let infos = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Info)
            .count();
        (errors, warnings, infos)
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.files_checked += other.files_checked;
    }
}
