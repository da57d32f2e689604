//! Configuration types for catch-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for catch-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Gets the option table for a rule, if configured.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec!["**/target/**".to_string(), "**/build/**".to_string()],
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Returns true if the option is present.
    #[must_use]
    pub fn has_option(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Gets an option value as a specific type.
    #[must_use]
    pub fn get_option<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.options
            .get(key)
            .and_then(|v| v.clone().try_into().ok())
    }

    /// Gets an option as a specific type, rejecting a value of another type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if the option is present but
    /// does not deserialize as `T`.
    pub fn try_option<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, ConfigError> {
        self.options
            .get(key)
            .map(|v| {
                v.clone()
                    .try_into()
                    .map_err(|e: toml::de::Error| ConfigError::InvalidOption {
                        key: key.to_string(),
                        message: e.to_string(),
                    })
            })
            .transpose()
    }

    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A rule option holds a value of the wrong type.
    #[error("Invalid value for option `{key}`: {message}")]
    InvalidOption {
        /// Option name.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analyzer.root, PathBuf::from("."));
        assert!(config.rules.is_empty());
        assert!(config.is_rule_enabled("illegal-catch"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
root = "./trees"
exclude = ["**/generated/**"]

[rules.illegal-catch]
enabled = true
severity = "warning"
illegal_names = ["Exception", "java.lang.Exception"]
permit_rethrow = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./trees"));
        assert!(config.is_rule_enabled("illegal-catch"));
        assert_eq!(
            config.rule_severity("illegal-catch"),
            Some(crate::Severity::Warning)
        );

        let rule_config = config.rule_config("illegal-catch").unwrap();
        assert!(rule_config.get_bool("permit_rethrow", false));
        assert!(!rule_config.get_bool("permit_fresh_throw", false));
        assert!(rule_config.has_option("illegal_names"));
        let names: Option<Vec<String>> = rule_config.get_option("illegal_names");
        assert_eq!(names.map(|n| n.len()), Some(2));
    }

    #[test]
    fn test_disabled_rule() {
        let config = Config::parse("[rules.illegal-catch]\nenabled = false\n").unwrap();
        assert!(!config.is_rule_enabled("illegal-catch"));
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("[rules\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn try_option_rejects_wrong_type() {
        let config = Config::parse(
            "[rules.illegal-catch]\nillegal_names = \"Exception\"\npermit_rethrow = true\n",
        )
        .unwrap();
        let rule_config = config.rule_config("illegal-catch").unwrap();

        let names = rule_config.try_option::<Vec<String>>("illegal_names");
        assert!(matches!(names, Err(ConfigError::InvalidOption { ref key, .. }) if key == "illegal_names"));
        assert_eq!(rule_config.try_option::<bool>("permit_rethrow").unwrap(), Some(true));
        assert_eq!(rule_config.try_option::<bool>("permit_fresh_throw").unwrap(), None);
    }
}
