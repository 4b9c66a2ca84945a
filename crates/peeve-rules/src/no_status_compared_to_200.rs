//! Rule against validating a response by comparing its status to 200.
//!
//! HTTP clients expose a success predicate; comparing the raw status code
//! to the literal 200 also misreads the other 2xx responses.

use peeve_core::predicates::is_status_compared_to_200;
use peeve_core::{Rule, RuleContext, RuleError, Violation, ViolationCode};

/// Rule name for no-status-compared-to-200.
pub const NAME: &str = "no-status-compared-to-200";

/// Flags comparisons of a status-code expression against the literal 200.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStatusComparedTo200;

impl NoStatusComparedTo200 {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoStatusComparedTo200 {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags response validation by comparison to the literal 200"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        Ok(ctx.project.first_match(|file, node| {
            is_status_compared_to_200(node).then(|| {
                Violation::located(
                    ViolationCode::CompareResponseStatusTo200,
                    &file.name,
                    node.line,
                )
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peeve_core::{CompareOp, Node, ParsedFile, Project, RuleConfig};
    use std::path::Path;

    fn check(tree: Node) -> Option<Violation> {
        let project = Project::new(vec![ParsedFile::new("fetch.py", "src/fetch.py", tree)]);
        let settings = RuleConfig::default();
        let ctx = RuleContext {
            project: &project,
            settings: &settings,
            root: Path::new("."),
        };
        NoStatusComparedTo200::new().check(&ctx).expect("check")
    }

    #[test]
    fn flags_status_attribute_compared_to_200() {
        let violation = check(Node::module(vec![Node::compare(
            5,
            CompareOp::Eq,
            Node::attribute(5, Node::name(5, "response"), "status_code"),
            Node::num(5, 200.0),
        )]))
        .expect("violation");
        assert_eq!(violation.code, ViolationCode::CompareResponseStatusTo200);
        assert_eq!(violation.detail, "fetch.py:5");
    }

    #[test]
    fn passes_on_other_status_values() {
        assert!(check(Node::module(vec![Node::compare(
            5,
            CompareOp::Eq,
            Node::attribute(5, Node::name(5, "response"), "status_code"),
            Node::num(5, 404.0),
        )]))
        .is_none());
    }
}
