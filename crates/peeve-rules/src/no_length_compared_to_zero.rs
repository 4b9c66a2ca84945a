//! Rule against emptiness checks spelled as a length comparison.
//!
//! Collections are truthy by emptiness; `len(items) == 0` and its
//! variants restate what the collection already says.

use peeve_core::predicates::is_len_compared_to_zero;
use peeve_core::{Rule, RuleContext, RuleError, Violation, ViolationCode};

/// Rule name for no-length-compared-to-zero.
pub const NAME: &str = "no-length-compared-to-zero";

/// Flags comparisons of a length call against zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLengthComparedToZero;

impl NoLengthComparedToZero {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoLengthComparedToZero {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags emptiness checks written as a length comparison against zero"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        Ok(ctx.project.first_match(|file, node| {
            is_len_compared_to_zero(node).then(|| {
                Violation::located(ViolationCode::LengthComparedToZero, &file.name, node.line)
            })
        }))
    }
}
