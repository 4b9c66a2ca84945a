//! Violation codes and the structured findings rules return.

use serde::{Deserialize, Serialize};

/// The closed set of violation kinds rules can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// The style counter reported more violations than permitted.
    StyleViolations,
    /// A range-style call spelling out the default zero start.
    ManualZeroInRange,
    /// An exception handler that catches everything.
    BroadExcept,
    /// A lambda bound to a name instead of a function definition.
    NamedLambda,
    /// A URL string literal with hardcoded query parameters.
    HardcodedGetParams,
    /// An emptiness check spelled as a length comparison against zero.
    LengthComparedToZero,
    /// A function containing a process-termination call.
    HasExitCallsInFunction,
    /// A response status compared against the literal 200.
    #[serde(rename = "compare_response_status_to_200")]
    CompareResponseStatusTo200,
    /// A mutable collection literal used as a parameter default.
    MutableDefaultArguments,
    /// A slice spelling out the default zero lower bound.
    SliceStartsFromZero,
    /// A redundant string conversion of an input-call result.
    StrConversionOfInputResult,
    /// A concatenation of two string literals.
    HasStringSum,
    /// A call with a literal constant outside the allow-list.
    MagicNumbers,
}

impl ViolationCode {
    /// The wire identifier of this code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StyleViolations => "style_violations",
            Self::ManualZeroInRange => "manual_zero_in_range",
            Self::BroadExcept => "broad_except",
            Self::NamedLambda => "named_lambda",
            Self::HardcodedGetParams => "hardcoded_get_params",
            Self::LengthComparedToZero => "length_compared_to_zero",
            Self::HasExitCallsInFunction => "has_exit_calls_in_function",
            Self::CompareResponseStatusTo200 => "compare_response_status_to_200",
            Self::MutableDefaultArguments => "mutable_default_arguments",
            Self::SliceStartsFromZero => "slice_starts_from_zero",
            Self::StrConversionOfInputResult => "str_conversion_of_input_result",
            Self::HasStringSum => "has_string_sum",
            Self::MagicNumbers => "magic_numbers",
        }
    }
}

impl std::fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured report that one anti-pattern was found.
///
/// A rule produces at most one of these per run: the first occurrence in
/// project order and traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Which anti-pattern was found.
    pub code: ViolationCode,
    /// Rule-defined payload: empty, a bare identifier, a location string,
    /// or a longer message. The engine does not enforce a shape.
    pub detail: String,
}

impl Violation {
    /// Creates a violation.
    #[must_use]
    pub fn new(code: ViolationCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }

    /// A violation whose detail is the conventional `file:line` location.
    #[must_use]
    pub fn located(code: ViolationCode, file: &str, line: usize) -> Self {
        Self::new(code, format!("{file}:{line}"))
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} ({})", self.code, self.detail)
        }
    }
}

/// One aggregated result: which rule fired and what it reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the rule that produced the violation.
    pub rule: String,
    /// The violation itself.
    #[serde(flatten)]
    pub violation: Violation,
}
