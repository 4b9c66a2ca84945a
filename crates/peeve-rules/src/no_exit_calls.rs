//! Rule against process-termination calls inside functions.
//!
//! # Rationale
//!
//! A library function that terminates the process takes the decision away
//! from its caller. Termination belongs at the entry point, which is why
//! the rule supports a name whitelist.
//!
//! # Configuration
//!
//! - `excluded_names`: function names that may terminate the process
//!   (typically the entry point).

use peeve_core::predicates::has_termination_calls;
use peeve_core::{NodeKind, Rule, RuleContext, RuleError, Violation, ViolationCode};

/// Rule name for no-exit-calls.
pub const NAME: &str = "no-exit-calls";

/// Flags functions whose body reaches a process-termination call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExitCalls;

impl NoExitCalls {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoExitCalls {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags functions that terminate the process"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        Ok(ctx.project.first_match(|_file, node| {
            let NodeKind::FunctionDef { name, .. } = &node.kind else {
                return None;
            };
            if ctx.settings.is_name_excluded(name) {
                return None;
            }
            has_termination_calls(node)
                .then(|| Violation::new(ViolationCode::HasExitCallsInFunction, name.clone()))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peeve_core::{Node, ParsedFile, Project, RuleConfig};
    use std::path::Path;

    fn exiting_function(line: usize, name: &str) -> Node {
        Node::function_def(
            line,
            name,
            vec![],
            vec![Node::call(
                line + 1,
                Node::name(line + 1, "exit"),
                vec![Node::num(line + 1, 1.0)],
            )],
        )
    }

    fn check(tree: Node, settings: &RuleConfig) -> Option<Violation> {
        let project = Project::new(vec![ParsedFile::new("cli.py", "src/cli.py", tree)]);
        let ctx = RuleContext {
            project: &project,
            settings,
            root: Path::new("."),
        };
        NoExitCalls::new().check(&ctx).expect("check")
    }

    #[test]
    fn flags_function_with_exit_call_by_name() {
        let violation = check(
            Node::module(vec![exiting_function(3, "shutdown")]),
            &RuleConfig::default(),
        )
        .expect("violation");
        assert_eq!(violation.code, ViolationCode::HasExitCallsInFunction);
        assert_eq!(violation.detail, "shutdown");
    }

    #[test]
    fn whitelisted_function_is_never_flagged() {
        let settings = RuleConfig {
            excluded_names: vec!["main".to_string()],
            ..RuleConfig::default()
        };
        assert!(check(Node::module(vec![exiting_function(3, "main")]), &settings).is_none());
    }

    #[test]
    fn whitelist_skips_to_next_offender() {
        let settings = RuleConfig {
            excluded_names: vec!["main".to_string()],
            ..RuleConfig::default()
        };
        let violation = check(
            Node::module(vec![
                exiting_function(3, "main"),
                exiting_function(9, "helper"),
            ]),
            &settings,
        )
        .expect("violation");
        assert_eq!(violation.detail, "helper");
    }

    #[test]
    fn passes_on_clean_function() {
        let clean = Node::function_def(
            3,
            "report",
            vec![],
            vec![Node::call(4, Node::name(4, "print"), vec![])],
        );
        assert!(check(Node::module(vec![clean]), &RuleConfig::default()).is_none());
    }
}
