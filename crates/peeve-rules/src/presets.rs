//! Rule-set presets.

use crate::{
    NoBroadExcept, NoExitCalls, NoHardcodedUrlParams, NoLengthComparedToZero, NoMagicConstants,
    NoMutableDefaultArguments, NoNamedLambda, NoRangeFromZero, NoSliceFromZero, NoStatusComparedTo200,
    NoStrOfInput, NoStringLiteralSums,
};
use peeve_core::RuleBox;

/// Returns every tree-query rule, in a stable order.
///
/// [`StyleViolationLimit`](crate::StyleViolationLimit) is not included: it
/// cannot be constructed without its external counter, so the embedder
/// registers it explicitly.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoRangeFromZero::new()),
        Box::new(NoBroadExcept::new()),
        Box::new(NoNamedLambda::new()),
        Box::new(NoHardcodedUrlParams::new()),
        Box::new(NoLengthComparedToZero::new()),
        Box::new(NoExitCalls::new()),
        Box::new(NoStatusComparedTo200::new()),
        Box::new(NoMutableDefaultArguments::new()),
        Box::new(NoSliceFromZero::new()),
        Box::new(NoStrOfInput::new()),
        Box::new(NoStringLiteralSums::new()),
        Box::new(NoMagicConstants::new()),
    ]
}

/// Returns the recommended subset: the rules that rarely need a per-project
/// allow-list before they are useful.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoRangeFromZero::new()),
        Box::new(NoBroadExcept::new()),
        Box::new(NoNamedLambda::new()),
        Box::new(NoLengthComparedToZero::new()),
        Box::new(NoStatusComparedTo200::new()),
        Box::new(NoMutableDefaultArguments::new()),
        Box::new(NoStrOfInput::new()),
        Box::new(NoStringLiteralSums::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_have_unique_names() {
        let rules = all_rules();
        let mut names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), rules.len());
    }

    #[test]
    fn recommended_is_a_subset_of_all() {
        let all: Vec<&str> = all_rules().iter().map(|r| r.name()).collect();
        for rule in recommended_rules() {
            assert!(all.contains(&rule.name()));
        }
    }
}
