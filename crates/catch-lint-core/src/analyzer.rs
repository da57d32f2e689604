//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::FileContext;
use crate::rule::{dispatch, Rule, RuleBox};
use crate::tree::Node;
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// File name suffix of serialized syntax trees.
pub const TREE_FILE_SUFFIX: &str = ".tree.json";

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A tree file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path to the unreadable file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Error deserializing a syntax tree file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on tree files that cannot be read or parsed
    /// (default: false, such files are logged and skipped).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.analyzer.exclude.clone());
        }

        if exclude_patterns.is_empty() {
            exclude_patterns.extend(["**/target/**".to_string(), "**/build/**".to_string()]);
        }

        Ok(Analyzer {
            root,
            rules: self.rules,
            exclude_patterns,
            config: self.config.unwrap_or_default(),
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Config,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all tree files under the root and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, or if a tree cannot be
    /// loaded and `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} tree files to analyze", files.len());

        for file_path in &files {
            match self.analyze_file(file_path) {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(e @ (AnalyzerError::Read { .. } | AnalyzerError::Parse { .. })) => {
                    if self.fail_on_parse_error {
                        return Err(e);
                    }
                    warn!("Skipping tree: {}", e);
                }
                Err(e) => return Err(e),
            }
        }

        // Stable sort keeps document order for violations sharing a position.
        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Runs every enabled rule over one tree in a single document-order pass.
    #[must_use]
    pub fn check_tree(&self, ctx: &FileContext, root: &Node) -> Vec<Violation> {
        let rules: Vec<&dyn Rule> = self
            .rules
            .iter()
            .filter(|rule| {
                let enabled = self.config.is_rule_enabled(rule.name());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .map(|rule| &**rule)
            .collect();

        let mut violations = Vec::new();
        dispatch(ctx, root, &rules, &mut violations);
        self.apply_severity_override(violations)
    }

    /// Loads and checks a single tree file.
    fn analyze_file(&self, path: &Path) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = Node::from_json(&content).map_err(|e| AnalyzerError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let ctx = FileContext::new(path, &self.root);
        Ok(self.check_tree(&ctx, &tree))
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(&self, mut violations: Vec<Violation>) -> Vec<Violation> {
        for v in &mut violations {
            if let Some(severity) = self.config.rule_severity(&v.rule) {
                v.severity = severity;
            }
        }
        violations
    }

    /// Discovers all serialized tree files to analyze.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let root = glob::Pattern::escape(&self.root.to_string_lossy());
        let pattern = format!("{root}/**/*{TREE_FILE_SUFFIX}");
        let excludes = self
            .exclude_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        let mut files = Vec::new();

        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| AnalyzerError::Io(e.into_error()))?;

            if self.should_exclude(&path, &excludes) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path);
        }

        Ok(files)
    }

    /// Checks a path against the exclude globs, relative to the root.
    ///
    /// Directories above the root never take part, so a root that itself
    /// lives under `build/` is still analyzed.
    fn should_exclude(&self, path: &Path, excludes: &[glob::Pattern]) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        excludes.iter().any(|pattern| pattern.matches_path(relative))
    }
}
