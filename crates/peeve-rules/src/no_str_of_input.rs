//! Rule against string-converting the result of an input call.
//!
//! The input builtin already returns a string; wrapping it in `str(...)`
//! is a no-op.

use peeve_core::predicates::is_str_of_input;
use peeve_core::{Rule, RuleContext, RuleError, Violation, ViolationCode};

/// Rule name for no-str-of-input.
pub const NAME: &str = "no-str-of-input";

/// Flags redundant string conversions of an input-call result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStrOfInput;

impl NoStrOfInput {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoStrOfInput {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags redundant string conversion of an input-call result"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        Ok(ctx.project.first_match(|file, node| {
            is_str_of_input(node).then(|| {
                Violation::located(
                    ViolationCode::StrConversionOfInputResult,
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
    use peeve_core::{Node, ParsedFile, Project, RuleConfig};
    use std::path::Path;

    fn check(tree: Node) -> Option<Violation> {
        let project = Project::new(vec![ParsedFile::new("prompt.py", "src/prompt.py", tree)]);
        let settings = RuleConfig::default();
        let ctx = RuleContext {
            project: &project,
            settings: &settings,
            root: Path::new("."),
        };
        NoStrOfInput::new().check(&ctx).expect("check")
    }

    #[test]
    fn flags_str_wrapping_input() {
        let violation = check(Node::module(vec![Node::call(
            4,
            Node::name(4, "str"),
            vec![Node::call(
                4,
                Node::name(4, "input"),
                vec![Node::string(4, "name: ")],
            )],
        )]))
        .expect("violation");
        assert_eq!(violation.code, ViolationCode::StrConversionOfInputResult);
        assert_eq!(violation.detail, "prompt.py:4");
    }

    #[test]
    fn passes_on_str_of_number() {
        assert!(check(Node::module(vec![Node::call(
            4,
            Node::name(4, "str"),
            vec![Node::num(4, 42.0)],
        )]))
        .is_none());
    }

    #[test]
    fn passes_on_bare_input() {
        assert!(check(Node::module(vec![Node::call(
            4,
            Node::name(4, "input"),
            vec![],
        )]))
        .is_none());
    }
}
