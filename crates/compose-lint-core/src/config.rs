//! `compose-lint.toml` configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::resolver::MapSource;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to start from (`recommended` or `all`).
    #[serde(default)]
    pub preset: Option<String>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule switches and severities, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,

    /// Rule options by their camelCase names (`contentEmitters = ["MyCard"]`).
    #[serde(default)]
    pub compose: toml::Table,
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

    /// Explicit on/off switch for a rule, if the file sets one.
    #[must_use]
    pub fn rule_enabled(&self, rule_name: &str) -> Option<bool> {
        self.rules.get(rule_name).and_then(|c| c.enabled)
    }

    /// Checks if a rule is enabled, defaulting to on.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rule_enabled(rule_name).unwrap_or(true)
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// The `[compose]` table as an option source.
    #[must_use]
    pub fn options(&self) -> MapSource {
        MapSource::from_toml(&self.compose)
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

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Whether to read `compose_*` keys from `.editorconfig`.
    #[serde(default = "default_true")]
    pub editorconfig: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec!["**/build/**".to_string(), "**/.gradle/**".to_string()],
            respect_gitignore: true,
            editorconfig: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ConfigResolver;
    use crate::Severity;

    #[test]
    fn default_config_enables_everything() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.analyzer.editorconfig);
        assert!(config.rules.is_empty());
        assert!(config.is_rule_enabled("modifier-missing"));
    }

    #[test]
    fn parses_rules_and_compose_options() {
        let toml = r#"
preset = "all"

[analyzer]
root = "./app/src"
exclude = ["**/generated/**"]

[rules.material2]
enabled = true
severity = "warning"

[rules.parameter-naming]
enabled = false

[compose]
contentEmitters = ["MyCard", "MyButton"]
allowedStateHolderNames = ".*Presenter"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.preset.as_deref(), Some("all"));
        assert_eq!(config.analyzer.root, PathBuf::from("./app/src"));
        assert_eq!(config.rule_enabled("material2"), Some(true));
        assert_eq!(config.rule_severity("material2"), Some(Severity::Warning));
        assert!(!config.is_rule_enabled("parameter-naming"));
        assert_eq!(config.rule_enabled("modifier-missing"), None);

        let options = config.options();
        let resolver = ConfigResolver::new(&options);
        assert_eq!(resolver.get_list("contentEmitters", &[]), vec!["MyCard", "MyButton"]);
        assert_eq!(resolver.get_string("allowedStateHolderNames", ""), ".*Presenter");
    }

    #[test]
    fn rejects_invalid_toml() {
        let err = Config::parse("preset = [").expect_err("invalid");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
