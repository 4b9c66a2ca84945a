//! Rule against spelling out the default zero start of a `range` call.
//!
//! # Rationale
//!
//! `range(0, n)` iterates the same values as `range(n)`; the explicit zero
//! start is noise. The flagged shape is a call to `range` with exactly two
//! positional arguments whose first is the literal 0.

use peeve_core::predicates::is_call_with_zero_start;
use peeve_core::{Rule, RuleContext, RuleError, Violation, ViolationCode};

/// Rule name for no-range-from-zero.
pub const NAME: &str = "no-range-from-zero";

/// Flags `range` calls with an explicit zero start.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRangeFromZero;

impl NoRangeFromZero {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoRangeFromZero {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags range calls that spell out the default zero start"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        Ok(ctx.project.first_match(|file, node| {
            is_call_with_zero_start(node, "range").then(|| {
                Violation::located(ViolationCode::ManualZeroInRange, &file.name, node.line)
            })
        }))
    }
}
