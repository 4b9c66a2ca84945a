//! Rule against URL string literals carrying inline query parameters.
//!
//! Query arguments belong in a params mapping handed to the HTTP client,
//! not spliced into the URL text.

use peeve_core::predicates::is_url_with_params;
use peeve_core::{NodeKind, Rule, RuleContext, RuleError, Violation, ViolationCode};

/// Rule name for no-hardcoded-url-params.
pub const NAME: &str = "no-hardcoded-url-params";

/// Flags URL string literals with a hardcoded query string.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHardcodedUrlParams;

impl NoHardcodedUrlParams {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoHardcodedUrlParams {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags URL string literals with hardcoded query parameters"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        Ok(ctx.project.first_match(|file, node| {
            let NodeKind::Str { value } = &node.kind else {
                return None;
            };
            is_url_with_params(value)
                .then(|| Violation::located(ViolationCode::HardcodedGetParams, &file.name, node.line))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peeve_core::{Node, ParsedFile, Project, RuleConfig};
    use std::path::Path;

    fn check(tree: Node) -> Option<Violation> {
        let project = Project::new(vec![ParsedFile::new("client.py", "src/client.py", tree)]);
        let settings = RuleConfig::default();
        let ctx = RuleContext {
            project: &project,
            settings: &settings,
            root: Path::new("."),
        };
        NoHardcodedUrlParams::new().check(&ctx).expect("check")
    }

    #[test]
    fn flags_url_with_query_string() {
        let violation = check(Node::module(vec![Node::string(
            9,
            "https://api.example.com/items?page=2",
        )]))
        .expect("violation");
        assert_eq!(violation.code, ViolationCode::HardcodedGetParams);
        assert_eq!(violation.detail, "client.py:9");
    }

    #[test]
    fn passes_on_bare_url() {
        assert!(
            check(Node::module(vec![Node::string(9, "https://api.example.com/items")])).is_none()
        );
    }

    #[test]
    fn passes_on_prose_with_question_mark() {
        assert!(check(Node::module(vec![Node::string(9, "ready? y=yes n=no")])).is_none());
    }
}
