//! Rule against catch-everything exception handlers.
//!
//! # Rationale
//!
//! A handler with no caught type swallows every failure, including the
//! ones the author never thought about. Naming the root `Exception` type
//! is the same mistake spelled differently. Both shapes are flagged; a
//! bare handler reports an empty detail, a root-type handler reports an
//! explanatory message.

use peeve_core::{NodeKind, Rule, RuleContext, RuleError, Violation, ViolationCode};

/// Rule name for no-broad-except.
pub const NAME: &str = "no-broad-except";

/// The root exception type that catches everything when named.
const BROAD_EXCEPTION_TYPE: &str = "Exception";

/// Flags exception handlers that catch everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBroadExcept;

impl NoBroadExcept {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoBroadExcept {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags exception handlers that catch everything"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Option<Violation>, RuleError> {
        Ok(ctx.project.first_match(|_file, node| {
            let NodeKind::ExceptHandler { exception_type, .. } = &node.kind else {
                return None;
            };
            match exception_type {
                None => Some(Violation::new(ViolationCode::BroadExcept, "")),
                Some(caught) => match &caught.kind {
                    NodeKind::Name { id } if id == BROAD_EXCEPTION_TYPE => {
                        Some(Violation::new(
                            ViolationCode::BroadExcept,
                            format!(
                                "{BROAD_EXCEPTION_TYPE} class is too broad; use a more specific exception type"
                            ),
                        ))
                    }
                    _ => None,
                },
            }
        }))
    }
}
