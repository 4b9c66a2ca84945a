//! Rule against magic literal constants in call arguments.
//!
//! # Rationale
//!
//! A bare `sleep(30)` or `retry(3, "payments")` hides meaning that a named
//! constant would carry. Values the project considers self-explanatory go
//! in the allow-list.
//!
//! # Configuration
//!
//! - `constants`: literal numeric and string values that are permitted as
//!   call arguments.

use peeve_core::paths::is_test_path;
use peeve_core::predicates::call_has_unlisted_constant;
use peeve_core::{Rule, RuleContext, RuleError, Violation, ViolationCode};

/// Rule name for no-magic-constants.
pub const NAME: &str = "no-magic-constants";

/// Flags calls carrying a literal constant outside the allow-list.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMagicConstants;

impl NoMagicConstants {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoMagicConstants {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags literal constants in call arguments outside the allow-list"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        Ok(ctx.project.first_match(|file, node| {
            // tests can have constants in asserts
            if is_test_path(&file.path) {
                return None;
            }
            call_has_unlisted_constant(node, &ctx.settings.constants)
                .then(|| Violation::located(ViolationCode::MagicNumbers, &file.name, node.line))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peeve_core::{ConstantValue, Node, ParsedFile, Project, RuleConfig};
    use std::path::Path;

    fn sleep_call(line: usize) -> Node {
        Node::call(line, Node::name(line, "sleep"), vec![Node::num(line, 30.0)])
    }

    fn check(project: &Project, settings: &RuleConfig) -> Option<Violation> {
        let ctx = RuleContext {
            project,
            settings,
            root: Path::new("."),
        };
        NoMagicConstants::new().check(&ctx).expect("check")
    }

    #[test]
    fn flags_unlisted_numeric_argument() {
        let project = Project::new(vec![ParsedFile::new(
            "worker.py",
            "src/worker.py",
            Node::module(vec![sleep_call(12)]),
        )]);
        let violation = check(&project, &RuleConfig::default()).expect("violation");
        assert_eq!(violation.code, ViolationCode::MagicNumbers);
        assert_eq!(violation.detail, "worker.py:12");
    }

    #[test]
    fn allow_list_suppresses_the_flag() {
        let project = Project::new(vec![ParsedFile::new(
            "worker.py",
            "src/worker.py",
            Node::module(vec![sleep_call(12)]),
        )]);
        let settings = RuleConfig {
            constants: vec![ConstantValue::Number(30.0)],
            ..RuleConfig::default()
        };
        assert!(check(&project, &settings).is_none());
    }

    #[test]
    fn test_paths_are_never_flagged() {
        let project = Project::new(vec![ParsedFile::new(
            "test_worker.py",
            "tests/test_worker.py",
            Node::module(vec![sleep_call(12)]),
        )]);
        assert!(check(&project, &RuleConfig::default()).is_none());
    }

    #[test]
    fn test_path_exclusion_beats_the_allow_list() {
        // A constant under tests/ stays unflagged even with an empty
        // allow-list and more offenders later in project order.
        let project = Project::new(vec![
            ParsedFile::new(
                "test_worker.py",
                "tests/test_worker.py",
                Node::module(vec![sleep_call(2)]),
            ),
            ParsedFile::new(
                "worker.py",
                "src/worker.py",
                Node::module(vec![sleep_call(40)]),
            ),
        ]);
        let violation = check(&project, &RuleConfig::default()).expect("violation");
        assert_eq!(violation.detail, "worker.py:40");
    }
}
