//! Rule against concatenating two string literals with `+`.
//!
//! Adjacent literals read better written as one literal; the check is
//! purely syntactic, so string-typed names are left alone. The detail
//! format is `"<file>: <line>"` with a space, which the reporting layer
//! relies on.

use peeve_core::predicates::is_string_literal_sum;
use peeve_core::{Rule, RuleContext, RuleError, Violation, ViolationCode};

/// Rule name for no-string-literal-sums.
pub const NAME: &str = "no-string-literal-sums";

/// Flags `+` expressions over two string literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStringLiteralSums;

impl NoStringLiteralSums {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoStringLiteralSums {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags concatenation of two string literals"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        Ok(ctx.project.first_match(|file, node| {
            is_string_literal_sum(node).then(|| {
                Violation::new(
                    ViolationCode::HasStringSum,
                    format!("{}: {}", file.name, node.line),
                )
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peeve_core::{BinOp, Node, ParsedFile, Project, RuleConfig};
    use std::path::Path;

    fn check(tree: Node) -> Option<Violation> {
        let project = Project::new(vec![ParsedFile::new("banner.py", "src/banner.py", tree)]);
        let settings = RuleConfig::default();
        let ctx = RuleContext {
            project: &project,
            settings: &settings,
            root: Path::new("."),
        };
        NoStringLiteralSums::new().check(&ctx).expect("check")
    }

    #[test]
    fn flags_literal_sum_with_spaced_detail() {
        let violation = check(Node::module(vec![Node::binary(
            2,
            BinOp::Add,
            Node::string(2, "a"),
            Node::string(2, "b"),
        )]))
        .expect("violation");
        assert_eq!(violation.code, ViolationCode::HasStringSum);
        assert_eq!(violation.detail, "banner.py: 2");
    }

    #[test]
    fn passes_when_one_operand_is_a_name() {
        assert!(check(Node::module(vec![Node::binary(
            2,
            BinOp::Add,
            Node::string(2, "a"),
            Node::name(2, "suffix"),
        )]))
        .is_none());
    }
}
