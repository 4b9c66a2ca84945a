//! Rule against mutable collection literals as parameter defaults.
//!
//! # Rationale
//!
//! A default value is evaluated once, when the function is defined; a list
//! or dict default is therefore shared across every call that omits the
//! argument. The rule evaluates each function definition once, not each
//! call site.

use peeve_core::predicates::has_mutable_defaults;
use peeve_core::{Rule, RuleContext, RuleError, Violation, ViolationCode};

/// Rule name for no-mutable-default-arguments.
pub const NAME: &str = "no-mutable-default-arguments";

/// Flags function definitions with a list or dict literal default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMutableDefaultArguments;

impl NoMutableDefaultArguments {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoMutableDefaultArguments {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags mutable collection literals used as parameter defaults"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        Ok(ctx.project.first_match(|file, node| {
            has_mutable_defaults(node).then(|| {
                Violation::located(ViolationCode::MutableDefaultArguments, &file.name, node.line)
            })
        }))
    }
}
