//! Registry and pipeline for running rules against a parsed project.

use crate::config::{Config, ConfigError, RuleConfig};
use crate::project::Project;
use crate::rule::{Rule, RuleBox, RuleContext, RuleError};
use crate::types::Finding;

use thiserror::Error;
use tracing::{debug, info};

/// Errors that can abort an analysis run.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Configuration failed to load.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A rule's external collaborator failed mid-run.
    #[error("Rule '{rule}' failed: {source}")]
    Rule {
        /// Identifier of the failing rule.
        rule: String,
        /// The underlying rule error.
        #[source]
        source: RuleError,
    },
}

/// Builder for configuring a [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    rules: Vec<RuleBox>,
}

impl RegistryBuilder {
    /// Creates a new builder with no rules registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule. Registration order is finding order.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Registers every rule in `rules`, preserving order.
    #[must_use]
    pub fn rule_boxes(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Builds the registry.
    #[must_use]
    pub fn build(self) -> Registry {
        Registry { rules: self.rules }
    }
}

/// An ordered set of registered rules and the pipeline that runs them.
///
/// The registry only dispatches: each rule walks the project itself, and
/// rules are mutually independent. Execution order affects only the order
/// findings appear in the aggregate output, never which violations are
/// found.
pub struct Registry {
    rules: Vec<RuleBox>,
}

impl Registry {
    /// Creates a new builder for configuring a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Identifiers of the registered rules, in registration order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name())
    }

    /// Runs every enabled rule against `project` and aggregates findings.
    ///
    /// Rules that pass are omitted from the result. The run is
    /// single-threaded and findings keep registration order, so repeated
    /// runs over the same inputs are bit-identical.
    ///
    /// # Errors
    ///
    /// Returns an error when a rule's external collaborator fails. The run
    /// aborts at the first failure; no partial findings are returned.
    pub fn run(&self, project: &Project, config: &Config) -> Result<Vec<Finding>, RegistryError> {
        info!(
            "Starting analysis run: {} rules over {} files",
            self.rules.len(),
            project.len()
        );

        let default_settings = RuleConfig::default();
        let mut findings = Vec::new();

        for rule in &self.rules {
            if !config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let settings = config.rule(rule.name()).unwrap_or(&default_settings);
            let ctx = RuleContext {
                project,
                settings,
                root: &config.root,
            };

            match rule.check(&ctx) {
                Ok(Some(violation)) => {
                    debug!("Rule {} reported {}", rule.name(), violation.code);
                    findings.push(Finding {
                        rule: rule.name().to_string(),
                        violation,
                    });
                }
                Ok(None) => {}
                Err(source) => {
                    return Err(RegistryError::Rule {
                        rule: rule.name().to_string(),
                        source,
                    });
                }
            }
        }

        info!("Analysis run complete: {} findings", findings.len());
        Ok(findings)
    }
}
