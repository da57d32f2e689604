//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_FILE_NAME: &str = "catch-lint.toml";

const DEFAULT_CONFIG: &str = r#"# catch-lint configuration

[analyzer]
# Root directory holding *.tree.json files (default: current directory)
# root = "./trees"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/build/**",
]

[rules.illegal-catch]
enabled = true
# severity = "warning"  # Override default severity

# Spellings that must not be caught. Replaces the defaults when set.
# illegal_names = [
#     "Exception", "Error", "RuntimeException", "Throwable",
#     "java.lang.Exception", "java.lang.Error",
#     "java.lang.RuntimeException", "java.lang.Throwable",
# ]

# Allow a broad catch whose body throws a newly constructed exception
permit_fresh_throw = false

# Allow a broad catch whose body rethrows an existing exception
permit_rethrow = false
"#;

/// Runs the init command, writing the config into `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;

    println!("Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to configure rules");
    println!("  2. Run: catch-lint check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catch_lint_core::Config;
    use tempfile::TempDir;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).expect("template should parse");
        assert!(config.is_rule_enabled("illegal-catch"));
        let table = config.rule_config("illegal-catch").unwrap();
        assert!(!table.get_bool("permit_rethrow", true));
        assert!(!table.has_option("illegal_names"));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        run(tmp.path(), false).unwrap();
        assert!(run(tmp.path(), false).is_err());
        assert!(run(tmp.path(), true).is_ok());
    }
}
