//! Check command implementation.

use anyhow::{Context, Result};
use catch_lint_core::{Analyzer, Config, LintResult};
use catch_lint_rules::{rules_by_name, rules_from_config};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Options of the check command beyond path and format.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Comma-separated rule names or codes to run.
    pub rules_filter: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Fail on unreadable tree files.
    pub strict: bool,
}

/// Runs the check command.
pub fn run(
    path: Option<&Path>,
    format: OutputFormat,
    options: CheckOptions,
    source: &ConfigSource,
) -> Result<()> {
    let result = execute(path, options, source)?;

    super::output::print(&result, format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads configuration, builds the analyzer and analyzes `path`.
///
/// Without a path the `[analyzer] root` of the configuration is used.
pub fn execute(
    path: Option<&Path>,
    options: CheckOptions,
    source: &ConfigSource,
) -> Result<LintResult> {
    let config = load_config(source)?;

    let rules = if let Some(filter) = &options.rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        rules_by_name(&rule_names, &config)
    } else {
        rules_from_config(&config)
    };

    let mut builder = Analyzer::builder()
        .config(config)
        .excludes(options.exclude)
        .fail_on_parse_error(options.strict);

    if let Some(path) = path {
        builder = builder.root(path);
    }

    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {:?} with {} rules",
        analyzer.root(),
        analyzer.rule_count()
    );

    analyzer.analyze().context("Analysis failed")
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TREE: &str = r#"{"kind":"compilation_unit","children":[
        {"kind":"catch_clause","span":{"line":4,"column":11},"children":[
            {"kind":"parameter_declaration","children":[
                {"kind":"type_reference","children":[{"kind":"identifier","text":"Exception"}]},
                {"kind":"identifier","text":"e"}
            ]},
            {"kind":"block","children":[
                {"kind":"throw_statement","children":[
                    {"kind":"expression_wrapper","children":[{"kind":"identifier","text":"e"}]}
                ]}
            ]}
        ]}
    ]}"#;

    #[test]
    fn execute_with_defaults_reports_catch() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Main.tree.json"), TREE).unwrap();

        let result =
            execute(Some(tmp.path()), CheckOptions::default(), &ConfigSource::Default).unwrap();
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].args, vec!["Exception".to_string()]);
    }

    #[test]
    fn execute_honors_project_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Main.tree.json"), TREE).unwrap();
        let config_path = tmp.path().join("catch-lint.toml");
        fs::write(&config_path, "[rules.illegal-catch]\npermit_rethrow = true\n").unwrap();

        let result = execute(
            Some(tmp.path()),
            CheckOptions::default(),
            &ConfigSource::Project(config_path),
        )
        .unwrap();
        assert!(result.violations.is_empty());
    }

    #[test]
    fn execute_with_unknown_rule_filter_runs_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Main.tree.json"), TREE).unwrap();

        let options = CheckOptions {
            rules_filter: Some("no-such-rule".to_string()),
            ..CheckOptions::default()
        };
        let result = execute(Some(tmp.path()), options, &ConfigSource::Default).unwrap();
        assert!(result.violations.is_empty());
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let source = ConfigSource::Explicit(tmp.path().join("missing.toml"));
        assert!(execute(Some(tmp.path()), CheckOptions::default(), &source).is_err());
    }

    #[test]
    fn config_root_used_without_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let trees = tmp.path().join("generated");
        fs::create_dir_all(&trees).unwrap();
        fs::write(trees.join("Main.tree.json"), TREE).unwrap();
        let config_path = tmp.path().join("catch-lint.toml");
        fs::write(
            &config_path,
            format!("[analyzer]\nroot = '{}'\n", trees.display()),
        )
        .unwrap();

        let result = execute(
            None,
            CheckOptions::default(),
            &ConfigSource::Project(config_path),
        )
        .unwrap();
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.violations.len(), 1);
    }

    #[test]
    fn explicit_path_overrides_config_root() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Main.tree.json"), TREE).unwrap();
        let config_path = tmp.path().join("catch-lint.toml");
        fs::write(&config_path, "[analyzer]\nroot = '/nonexistent/trees'\n").unwrap();

        let result = execute(
            Some(tmp.path()),
            CheckOptions::default(),
            &ConfigSource::Project(config_path),
        )
        .unwrap();
        assert_eq!(result.files_checked, 1);
    }
}
