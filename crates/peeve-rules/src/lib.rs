//! # peeve-rules
//!
//! Built-in anti-pattern rules for peeve.
//!
//! Each rule is an interchangeable plug-in over the engine's tree-query
//! primitives: it scans the parsed project in file order and traversal
//! order, applies its exclusion lists, and reports the first offender.
//!
//! ## Available Rules
//!
//! | Name | Code | Description |
//! |------|------|-------------|
//! | `style-violation-limit` | `style_violations` | Caps the external style counter's violation count |
//! | `no-range-from-zero` | `manual_zero_in_range` | Flags `range` calls with an explicit zero start |
//! | `no-broad-except` | `broad_except` | Flags exception handlers that catch everything |
//! | `no-named-lambda` | `named_lambda` | Flags lambdas bound to a variable |
//! | `no-hardcoded-url-params` | `hardcoded_get_params` | Flags URL literals with inline query parameters |
//! | `no-length-compared-to-zero` | `length_compared_to_zero` | Flags emptiness checks via length comparison |
//! | `no-exit-calls` | `has_exit_calls_in_function` | Flags functions that terminate the process |
//! | `no-status-compared-to-200` | `compare_response_status_to_200` | Flags status comparison to the literal 200 |
//! | `no-mutable-default-arguments` | `mutable_default_arguments` | Flags mutable parameter defaults |
//! | `no-slice-from-zero` | `slice_starts_from_zero` | Flags slices with an explicit zero lower bound |
//! | `no-str-of-input` | `str_conversion_of_input_result` | Flags redundant string conversion of input |
//! | `no-string-literal-sums` | `has_string_sum` | Flags concatenation of two string literals |
//! | `no-magic-constants` | `magic_numbers` | Flags literal call arguments outside the allow-list |
//!
//! ## Usage
//!
//! ```ignore
//! use peeve_core::Registry;
//! use peeve_rules::{all_rules, StyleViolationLimit};
//!
//! let registry = Registry::builder()
//!     .rule_boxes(all_rules())
//!     .rule(StyleViolationLimit::new(counter))
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod no_broad_except;
mod no_exit_calls;
mod no_hardcoded_url_params;
mod no_length_compared_to_zero;
mod no_magic_constants;
mod no_mutable_default_arguments;
mod no_named_lambda;
mod no_range_from_zero;
mod no_slice_from_zero;
mod no_status_compared_to_200;
mod no_str_of_input;
mod no_string_literal_sums;
mod presets;
mod style_violation_limit;

pub use no_broad_except::NoBroadExcept;
pub use no_exit_calls::NoExitCalls;
pub use no_hardcoded_url_params::NoHardcodedUrlParams;
pub use no_length_compared_to_zero::NoLengthComparedToZero;
pub use no_magic_constants::NoMagicConstants;
pub use no_mutable_default_arguments::NoMutableDefaultArguments;
pub use no_named_lambda::NoNamedLambda;
pub use no_range_from_zero::NoRangeFromZero;
pub use no_slice_from_zero::NoSliceFromZero;
pub use no_status_compared_to_200::NoStatusComparedTo200;
pub use no_str_of_input::NoStrOfInput;
pub use no_string_literal_sums::NoStringLiteralSums;
pub use presets::{all_rules, recommended_rules};
pub use style_violation_limit::StyleViolationLimit;

/// Re-export core types for convenience.
pub use peeve_core::{Rule, Violation, ViolationCode};
