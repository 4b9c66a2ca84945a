//! Rule against binding a lambda to a name.

use peeve_core::{NodeKind, Rule, RuleContext, RuleError, Violation, ViolationCode};

/// Rule name for no-named-lambda.
pub const NAME: &str = "no-named-lambda";

/// Flags assignments whose value is a lambda; a named function is a
/// function definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNamedLambda;

impl NoNamedLambda {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoNamedLambda {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags lambdas bound to a variable"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        Ok(ctx.project.first_match(|file, node| {
            let NodeKind::Assign { value, .. } = &node.kind else {
                return None;
            };
            matches!(value.kind, NodeKind::Lambda { .. })
                .then(|| Violation::located(ViolationCode::NamedLambda, &file.name, node.line))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peeve_core::{Node, ParsedFile, Project, RuleConfig};
    use std::path::Path;

    fn check(tree: Node) -> Option<Violation> {
        let project = Project::new(vec![ParsedFile::new("util.py", "src/util.py", tree)]);
        let settings = RuleConfig::default();
        let ctx = RuleContext {
            project: &project,
            settings: &settings,
            root: Path::new("."),
        };
        NoNamedLambda::new().check(&ctx).expect("check")
    }

    #[test]
    fn flags_lambda_assignment() {
        let violation = check(Node::module(vec![Node::assign(
            6,
            Node::name(6, "double"),
            Node::lambda(6, Node::name(6, "x")),
        )]))
        .expect("violation");
        assert_eq!(violation.code, ViolationCode::NamedLambda);
        assert_eq!(violation.detail, "util.py:6");
    }

    #[test]
    fn passes_on_plain_assignment() {
        assert!(check(Node::module(vec![Node::assign(
            6,
            Node::name(6, "double"),
            Node::num(6, 2.0),
        )]))
        .is_none());
    }

    #[test]
    fn passes_on_lambda_passed_as_argument() {
        assert!(check(Node::module(vec![Node::call(
            6,
            Node::name(6, "sorted"),
            vec![Node::name(6, "items"), Node::lambda(6, Node::name(6, "x"))],
        )]))
        .is_none());
    }
}
