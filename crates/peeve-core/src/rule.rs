//! Rule contract: the uniform signature every validator implements.

use crate::config::RuleConfig;
use crate::project::Project;
use crate::types::Violation;
use std::path::Path;

/// Everything a rule may consult during one invocation.
///
/// The registry resolves each rule's own configuration section by rule
/// identifier before dispatch; a rule never sees another rule's settings.
/// Rules that need less simply ignore the unused fields.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The project under analysis.
    pub project: &'a Project,
    /// This rule's own configuration section.
    pub settings: &'a RuleConfig,
    /// Filesystem root for collaborators that read the project from disk.
    pub root: &'a Path,
}

/// Errors a rule can surface.
///
/// Rules built purely on tree queries never fail; this covers rules that
/// delegate to an external collaborator.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The style counter failed while reading the project.
    #[error("style counter failed: {0}")]
    StyleCount(#[from] std::io::Error),
}

/// A validator checking one anti-pattern across a parsed project.
///
/// # Contract
///
/// - Read-only over the project: no tree or file is ever mutated.
/// - Files are scanned in project order and nodes in pre-order; the rule
///   returns on the first match it finds and scans no further. One
///   representative offender per run keeps output deterministic and the
///   per-run cost bounded.
/// - Exclusion lists from the rule's settings are applied before flagging,
///   never after.
/// - `Ok(None)` means no occurrence was found across the whole project
///   under the current configuration.
///
/// # Example
///
/// ```ignore
/// use peeve_core::{Rule, RuleContext, RuleError, Violation, ViolationCode};
///
/// pub struct NoEmptyModules;
///
/// impl Rule for NoEmptyModules {
///     fn name(&self) -> &'static str { "no-empty-modules" }
///
///     fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
///         Ok(ctx.project.first_match(|file, node| { /* ... */ None }))
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case identifier of this rule, which is also its
    /// configuration key (e.g., "no-broad-except").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Scans the project and reports the first offender, if any.
    ///
    /// # Errors
    ///
    /// Fails only when an external collaborator the rule delegates to
    /// fails; the registry aborts the run and propagates the error.
    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
