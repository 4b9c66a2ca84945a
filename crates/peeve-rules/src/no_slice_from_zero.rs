//! Rule against slices spelling out the default zero lower bound.

use peeve_core::predicates::is_slice_from_zero;
use peeve_core::{Rule, RuleContext, RuleError, Violation, ViolationCode};

/// Rule name for no-slice-from-zero.
pub const NAME: &str = "no-slice-from-zero";

/// Flags slices with an explicit zero lower bound; the detail names the
/// offending file.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSliceFromZero;

impl NoSliceFromZero {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoSliceFromZero {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags slices that spell out the default zero lower bound"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        Ok(ctx.project.first_match(|file, node| {
            is_slice_from_zero(node)
                .then(|| Violation::new(ViolationCode::SliceStartsFromZero, file.name.clone()))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peeve_core::{Node, ParsedFile, Project, RuleConfig};
    use std::path::Path;

    fn check(tree: Node) -> Option<Violation> {
        let project = Project::new(vec![ParsedFile::new("text.py", "src/text.py", tree)]);
        let settings = RuleConfig::default();
        let ctx = RuleContext {
            project: &project,
            settings: &settings,
            root: Path::new("."),
        };
        NoSliceFromZero::new().check(&ctx).expect("check")
    }

    #[test]
    fn flags_zero_lower_bound_with_file_detail() {
        let violation = check(Node::module(vec![Node::subscript(
            2,
            Node::name(2, "line"),
            Some(Node::num(2, 0.0)),
        )]))
        .expect("violation");
        assert_eq!(violation.code, ViolationCode::SliceStartsFromZero);
        assert_eq!(violation.detail, "text.py");
    }

    #[test]
    fn passes_on_other_bounds() {
        assert!(check(Node::module(vec![
            Node::subscript(2, Node::name(2, "line"), Some(Node::num(2, 1.0))),
            Node::subscript(3, Node::name(3, "line"), None),
        ]))
        .is_none());
    }
}
