//! Shape predicates over syntax nodes.
//!
//! Each predicate is a pure function from a node to a boolean or an
//! extracted value, with no I/O. An unrecognized or mismatched shape is a
//! non-match, never an error: nodes are only constructed fully formed, and
//! exhaustive matching covers every other shape with `false`.

use crate::config::ConstantValue;
use crate::query::preorder;
use crate::tree::{BinOp, Node, NodeKind};

/// Call names that terminate the process.
const TERMINATION_NAMES: &[&str] = &["exit", "quit"];

/// The identifier the length builtin is called by.
const LENGTH_BUILTIN: &str = "len";

/// The member name status-value expressions are read from.
const STATUS_MEMBER: &str = "status_code";

/// The callee name a call resolves to when the callee is a bare identifier.
#[must_use]
pub fn callee_name(node: &Node) -> Option<&str> {
    match &node.kind {
        NodeKind::Call { func, .. } => match &func.kind {
            NodeKind::Name { id } => Some(id),
            _ => None,
        },
        _ => None,
    }
}

/// True for a numeric literal equal to `expected`.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn is_number(node: &Node, expected: f64) -> bool {
    matches!(node.kind, NodeKind::Num { value } if value == expected)
}

/// True for a call to `name` with exactly two arguments whose first is the
/// literal 0.
#[must_use]
pub fn is_call_with_zero_start(node: &Node, name: &str) -> bool {
    let NodeKind::Call { func, args } = &node.kind else {
        return false;
    };
    matches!(&func.kind, NodeKind::Name { id } if id == name)
        && args.len() == 2
        && is_number(&args[0], 0.0)
}

/// True for a comparison of a length-builtin call against the literal 0.
#[must_use]
pub fn is_len_compared_to_zero(node: &Node) -> bool {
    let NodeKind::Compare { left, right, .. } = &node.kind else {
        return false;
    };
    is_len_call(left) && is_number(right, 0.0)
}

fn is_len_call(node: &Node) -> bool {
    match &node.kind {
        NodeKind::Call { func, args } => {
            matches!(&func.kind, NodeKind::Name { id } if id == LENGTH_BUILTIN) && args.len() == 1
        }
        _ => false,
    }
}

/// True for a comparison of a status-value expression against the literal
/// 200, in either operand order.
#[must_use]
pub fn is_status_compared_to_200(node: &Node) -> bool {
    let NodeKind::Compare { left, right, .. } = &node.kind else {
        return false;
    };
    (mentions_status_code(left) && is_number(right, 200.0))
        || (mentions_status_code(right) && is_number(left, 200.0))
}

fn mentions_status_code(node: &Node) -> bool {
    match &node.kind {
        NodeKind::Name { id } => id == STATUS_MEMBER,
        NodeKind::Attribute { attr, .. } => attr == STATUS_MEMBER,
        _ => false,
    }
}

/// True for a function definition with a list or dict literal among its
/// parameter defaults. Evaluated on the definition, not per call.
#[must_use]
pub fn has_mutable_defaults(node: &Node) -> bool {
    let NodeKind::FunctionDef { params, .. } = &node.kind else {
        return false;
    };
    params
        .iter()
        .filter_map(|p| p.default.as_ref())
        .any(|d| matches!(d.kind, NodeKind::List { .. } | NodeKind::Dict { .. }))
}

/// True for a function definition whose body, searched recursively,
/// contains a process-termination call.
#[must_use]
pub fn has_termination_calls(node: &Node) -> bool {
    if !matches!(node.kind, NodeKind::FunctionDef { .. }) {
        return false;
    }
    preorder(node).any(is_termination_call)
}

fn is_termination_call(node: &Node) -> bool {
    let NodeKind::Call { func, .. } = &node.kind else {
        return false;
    };
    match &func.kind {
        NodeKind::Name { id } => TERMINATION_NAMES.contains(&id.as_str()),
        NodeKind::Attribute { attr, .. } => attr == "exit",
        _ => false,
    }
}

/// True for a `+` whose operands are both string literals.
///
/// Purely syntactic: operands that are merely string-typed at runtime do
/// not match.
#[must_use]
pub fn is_string_literal_sum(node: &Node) -> bool {
    let NodeKind::BinaryOp {
        op: BinOp::Add,
        left,
        right,
    } = &node.kind
    else {
        return false;
    };
    matches!(left.kind, NodeKind::Str { .. }) && matches!(right.kind, NodeKind::Str { .. })
}

/// True for a subscript whose slice lower bound is the literal 0.
#[must_use]
pub fn is_slice_from_zero(node: &Node) -> bool {
    matches!(&node.kind, NodeKind::Subscript { lower: Some(l), .. } if is_number(l, 0.0))
}

/// True for a single-argument string-conversion call whose argument is
/// itself a call to the input builtin.
#[must_use]
pub fn is_str_of_input(node: &Node) -> bool {
    let NodeKind::Call { func, args } = &node.kind else {
        return false;
    };
    matches!(&func.kind, NodeKind::Name { id } if id == "str")
        && args.len() == 1
        && callee_name(&args[0]) == Some("input")
}

/// True when any argument of a call is a numeric or string literal not
/// present in `allowed`.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn call_has_unlisted_constant(node: &Node, allowed: &[ConstantValue]) -> bool {
    let NodeKind::Call { args, .. } = &node.kind else {
        return false;
    };
    args.iter().any(|arg| match &arg.kind {
        NodeKind::Num { value } => !allowed
            .iter()
            .any(|c| matches!(c, ConstantValue::Number(n) if n == value)),
        NodeKind::Str { value } => !allowed
            .iter()
            .any(|c| matches!(c, ConstantValue::Text(t) if t == value)),
        _ => false,
    })
}

/// True for a string that is a URL carrying an inline query string.
#[must_use]
pub fn is_url_with_params(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    match text.split_once('?') {
        Some((base, query)) => !base.is_empty() && query.contains('='),
        None => false,
    }
}
