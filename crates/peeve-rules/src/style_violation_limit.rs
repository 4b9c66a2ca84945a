//! Rule capping the violation count reported by the external style counter.
//!
//! # Rationale
//!
//! Formatting conventions are checked by a dedicated counter outside the
//! engine; this rule only consumes its numeric contract and flags when the
//! count exceeds the configured budget. The counter reads the project from
//! disk, so this is the one rule whose check can block on I/O or fail.
//!
//! # Configuration
//!
//! - `max_violations`: permitted number of style violations (default 0).
//! - `max_line_length`: line length handed to the counter (default 79).
//! - `excluded_paths`: paths the counter skips entirely.

use peeve_core::{Rule, RuleContext, RuleError, StyleCounter, Violation, ViolationCode};

/// Rule name for style-violation-limit.
pub const NAME: &str = "style-violation-limit";

/// Line length used when the configuration does not set one.
const DEFAULT_MAX_LINE_LENGTH: usize = 79;

/// Flags projects whose style-violation count exceeds the configured
/// budget.
pub struct StyleViolationLimit {
    counter: Box<dyn StyleCounter>,
}

impl StyleViolationLimit {
    /// Creates the rule around the external counter it delegates to.
    #[must_use]
    pub fn new(counter: Box<dyn StyleCounter>) -> Self {
        Self { counter }
    }
}

impl Rule for StyleViolationLimit {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags projects exceeding the permitted style-violation count"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        let max_violations = ctx.settings.max_violations.unwrap_or(0);
        let max_line_length = ctx
            .settings
            .max_line_length
            .unwrap_or(DEFAULT_MAX_LINE_LENGTH);

        let count = self.counter.count_violations(
            ctx.root,
            max_line_length,
            &ctx.settings.excluded_paths,
        )?;

        if count > max_violations {
            Ok(Some(Violation::new(
                ViolationCode::StyleViolations,
                format!("{count} style violations"),
            )))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peeve_core::{Project, RuleConfig};
    use std::path::Path;

    struct FixedCounter(usize);

    impl StyleCounter for FixedCounter {
        fn count_violations(
            &self,
            _root: &Path,
            _max_line_length: usize,
            _excluded_paths: &[String],
        ) -> std::io::Result<usize> {
            Ok(self.0)
        }
    }

    struct FailingCounter;

    impl StyleCounter for FailingCounter {
        fn count_violations(
            &self,
            _root: &Path,
            _max_line_length: usize,
            _excluded_paths: &[String],
        ) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "project root missing",
            ))
        }
    }

    fn check(counter: Box<dyn StyleCounter>, settings: &RuleConfig) -> Result<Option<Violation>, RuleError> {
        let project = Project::default();
        let ctx = RuleContext {
            project: &project,
            settings,
            root: Path::new("."),
        };
        StyleViolationLimit::new(counter).check(&ctx)
    }

    #[test]
    fn flags_count_above_budget() {
        let violation = check(Box::new(FixedCounter(4)), &RuleConfig::default())
            .expect("check")
            .expect("violation");
        assert_eq!(violation.code, ViolationCode::StyleViolations);
        assert_eq!(violation.detail, "4 style violations");
    }

    #[test]
    fn passes_count_within_budget() {
        let settings = RuleConfig {
            max_violations: Some(5),
            ..RuleConfig::default()
        };
        assert!(check(Box::new(FixedCounter(5)), &settings)
            .expect("check")
            .is_none());
    }

    #[test]
    fn zero_count_passes_the_default_budget() {
        assert!(check(Box::new(FixedCounter(0)), &RuleConfig::default())
            .expect("check")
            .is_none());
    }

    #[test]
    fn counter_failure_propagates() {
        let err = check(Box::new(FailingCounter), &RuleConfig::default())
            .expect_err("check should fail");
        assert!(matches!(err, RuleError::StyleCount(_)));
    }
}
