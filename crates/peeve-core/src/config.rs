//! Per-run configuration: rule sections with exclusion lists and constants.
//!
//! Configuration is immutable for the duration of one analysis run. Every
//! field of a rule section is optional; an absent list means no
//! restriction. Sections are typed, so a malformed value (a non-numeric
//! `max_line_length`, a boolean in a `constants` list) is rejected when the
//! configuration is loaded, before any rule executes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Default filesystem root: the current directory.
fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Top-level configuration for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Filesystem root handed to collaborators that read the project from
    /// disk, such as the style counter. Defaults to the current directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Per-rule sections keyed by rule identifier.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            rules: HashMap::new(),
        }
    }
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
    /// Returns an error if the TOML is invalid or a rule section carries a
    /// value of the wrong shape.
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

    /// The configuration section for a rule, if one was provided.
    #[must_use]
    pub fn rule(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Symbol names the rule must never flag.
    #[serde(default)]
    pub excluded_names: Vec<String>,

    /// Logical path patterns the rule must never flag.
    #[serde(default)]
    pub excluded_paths: Vec<String>,

    /// Literal values permitted by rules that restrict constants.
    #[serde(default)]
    pub constants: Vec<ConstantValue>,

    /// Cap on collaborator-reported violation counts.
    #[serde(default)]
    pub max_violations: Option<usize>,

    /// Line length handed to the style counter.
    #[serde(default)]
    pub max_line_length: Option<usize>,
}

impl RuleConfig {
    /// True when `name` appears in the excluded-names list.
    #[must_use]
    pub fn is_name_excluded(&self, name: &str) -> bool {
        self.excluded_names.iter().any(|n| n == name)
    }

    /// True when `path` matches any excluded-paths entry.
    #[must_use]
    pub fn is_path_excluded(&self, path: &str) -> bool {
        crate::paths::matches_any(path, &self.excluded_paths)
    }
}

/// A literal value permitted by a constants allow-list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstantValue {
    /// A numeric literal.
    Number(f64),
    /// A string literal.
    Text(String),
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
