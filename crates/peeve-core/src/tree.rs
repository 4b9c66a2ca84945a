//! Syntax tree model for parsed source files.
//!
//! Nodes are produced fully formed by an external parser and are immutable
//! afterwards; rules and queries only ever borrow them. Every node carries
//! the 1-based source line it starts on, which is what violation details
//! report.

use serde::{Deserialize, Serialize};

/// One node of a parsed syntax tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// 1-based source line this node starts on.
    pub line: usize,
    /// The node shape and its kind-specific fields.
    pub kind: NodeKind,
}

/// A function parameter with an optional default-value expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Default-value expression, if the parameter declares one.
    pub default: Option<Node>,
}

impl Param {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, default: Option<Node>) -> Self {
        Self {
            name: name.into(),
            default,
        }
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtE,
    /// `>`
    Gt,
    /// `>=`
    GtE,
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

/// The shape of a syntax node.
///
/// Predicates match exhaustively over this enum, which turns "unsupported
/// shape" into a no-match branch instead of a runtime lookup failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root container of a parsed file's statements.
    Module {
        /// Top-level statements in source order.
        body: Vec<Node>,
    },
    /// A named function definition.
    FunctionDef {
        /// Function name.
        name: String,
        /// Parameters in declaration order.
        params: Vec<Param>,
        /// Body statements in source order.
        body: Vec<Node>,
    },
    /// An anonymous function expression.
    Lambda {
        /// The body expression.
        body: Box<Node>,
    },
    /// A call expression.
    Call {
        /// The callee expression.
        func: Box<Node>,
        /// Positional arguments in source order.
        args: Vec<Node>,
    },
    /// A comparison between two operands.
    Compare {
        /// The comparison operator.
        op: CompareOp,
        /// Left operand.
        left: Box<Node>,
        /// Right operand.
        right: Box<Node>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op: BinOp,
        /// Left operand.
        left: Box<Node>,
        /// Right operand.
        right: Box<Node>,
    },
    /// An assignment of a value to a target.
    Assign {
        /// Assignment target.
        target: Box<Node>,
        /// Assigned value.
        value: Box<Node>,
    },
    /// One handler arm of a try/except-style construct.
    ExceptHandler {
        /// The caught exception type; `None` catches everything.
        exception_type: Option<Box<Node>>,
        /// Handler body statements in source order.
        body: Vec<Node>,
    },
    /// An index or slice expression.
    Subscript {
        /// The subscripted expression.
        value: Box<Node>,
        /// Slice lower bound, if the slice spells one out.
        lower: Option<Box<Node>>,
    },
    /// A dotted member access such as `response.status_code`.
    Attribute {
        /// The expression the member is read from.
        value: Box<Node>,
        /// Member name.
        attr: String,
    },
    /// A bare identifier reference.
    Name {
        /// Identifier text.
        id: String,
    },
    /// A string literal.
    Str {
        /// Literal value.
        value: String,
    },
    /// A numeric literal.
    Num {
        /// Literal value.
        value: f64,
    },
    /// A list literal.
    List {
        /// Elements in source order.
        elts: Vec<Node>,
    },
    /// A dict literal.
    Dict {
        /// Key/value pairs in source order.
        entries: Vec<(Node, Node)>,
    },
}

impl Node {
    /// Creates a node at the given source line.
    #[must_use]
    pub fn new(line: usize, kind: NodeKind) -> Self {
        Self { line, kind }
    }

    /// Creates the root module of a parsed file.
    #[must_use]
    pub fn module(body: Vec<Node>) -> Self {
        Self::new(1, NodeKind::Module { body })
    }

    /// Creates a bare identifier reference.
    #[must_use]
    pub fn name(line: usize, id: impl Into<String>) -> Self {
        Self::new(line, NodeKind::Name { id: id.into() })
    }

    /// Creates a numeric literal.
    #[must_use]
    pub fn num(line: usize, value: f64) -> Self {
        Self::new(line, NodeKind::Num { value })
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(line: usize, value: impl Into<String>) -> Self {
        Self::new(
            line,
            NodeKind::Str {
                value: value.into(),
            },
        )
    }

    /// Creates a list literal.
    #[must_use]
    pub fn list(line: usize, elts: Vec<Node>) -> Self {
        Self::new(line, NodeKind::List { elts })
    }

    /// Creates a dict literal.
    #[must_use]
    pub fn dict(line: usize, entries: Vec<(Node, Node)>) -> Self {
        Self::new(line, NodeKind::Dict { entries })
    }

    /// Creates a call expression.
    #[must_use]
    pub fn call(line: usize, func: Node, args: Vec<Node>) -> Self {
        Self::new(
            line,
            NodeKind::Call {
                func: Box::new(func),
                args,
            },
        )
    }

    /// Creates a dotted member access.
    #[must_use]
    pub fn attribute(line: usize, value: Node, attr: impl Into<String>) -> Self {
        Self::new(
            line,
            NodeKind::Attribute {
                value: Box::new(value),
                attr: attr.into(),
            },
        )
    }

    /// Creates a comparison.
    #[must_use]
    pub fn compare(line: usize, op: CompareOp, left: Node, right: Node) -> Self {
        Self::new(
            line,
            NodeKind::Compare {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        )
    }

    /// Creates a binary arithmetic operation.
    #[must_use]
    pub fn binary(line: usize, op: BinOp, left: Node, right: Node) -> Self {
        Self::new(
            line,
            NodeKind::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        )
    }

    /// Creates an assignment.
    #[must_use]
    pub fn assign(line: usize, target: Node, value: Node) -> Self {
        Self::new(
            line,
            NodeKind::Assign {
                target: Box::new(target),
                value: Box::new(value),
            },
        )
    }

    /// Creates an index or slice expression.
    #[must_use]
    pub fn subscript(line: usize, value: Node, lower: Option<Node>) -> Self {
        Self::new(
            line,
            NodeKind::Subscript {
                value: Box::new(value),
                lower: lower.map(Box::new),
            },
        )
    }

    /// Creates an anonymous function expression.
    #[must_use]
    pub fn lambda(line: usize, body: Node) -> Self {
        Self::new(
            line,
            NodeKind::Lambda {
                body: Box::new(body),
            },
        )
    }

    /// Creates a named function definition.
    #[must_use]
    pub fn function_def(
        line: usize,
        name: impl Into<String>,
        params: Vec<Param>,
        body: Vec<Node>,
    ) -> Self {
        Self::new(
            line,
            NodeKind::FunctionDef {
                name: name.into(),
                params,
                body,
            },
        )
    }

    /// Creates an exception handler arm.
    #[must_use]
    pub fn except_handler(line: usize, exception_type: Option<Node>, body: Vec<Node>) -> Self {
        Self::new(
            line,
            NodeKind::ExceptHandler {
                exception_type: exception_type.map(Box::new),
                body,
            },
        )
    }

    /// Child nodes in source order.
    ///
    /// Parameter defaults precede a function's body because they appear in
    /// the signature.
    #[must_use]
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Module { body } => body.iter().collect(),
            NodeKind::FunctionDef { params, body, .. } => params
                .iter()
                .filter_map(|p| p.default.as_ref())
                .chain(body.iter())
                .collect(),
            NodeKind::Lambda { body } => vec![body.as_ref()],
            NodeKind::Call { func, args } => std::iter::once(&**func).chain(args.iter()).collect(),
            NodeKind::Compare { left, right, .. } | NodeKind::BinaryOp { left, right, .. } => {
                vec![left.as_ref(), right.as_ref()]
            }
            NodeKind::Assign { target, value } => vec![target.as_ref(), value.as_ref()],
            NodeKind::ExceptHandler {
                exception_type,
                body,
            } => exception_type
                .iter()
                .map(|t| &**t)
                .chain(body.iter())
                .collect(),
            NodeKind::Subscript { value, lower } => std::iter::once(&**value)
                .chain(lower.iter().map(|l| &**l))
                .collect(),
            NodeKind::Attribute { value, .. } => vec![value.as_ref()],
            NodeKind::List { elts } => elts.iter().collect(),
            NodeKind::Dict { entries } => entries.iter().flat_map(|(k, v)| [k, v]).collect(),
            NodeKind::Name { .. } | NodeKind::Str { .. } | NodeKind::Num { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_children_are_callee_then_args() {
        let call = Node::call(
            3,
            Node::name(3, "range"),
            vec![Node::num(3, 0.0), Node::num(3, 10.0)],
        );
        let lines: Vec<&str> = call
            .children()
            .iter()
            .map(|c| match &c.kind {
                NodeKind::Name { id } => id.as_str(),
                NodeKind::Num { .. } => "num",
                _ => "other",
            })
            .collect();
        assert_eq!(lines, vec!["range", "num", "num"]);
    }

    #[test]
    fn function_def_children_include_defaults_before_body() {
        let def = Node::function_def(
            1,
            "greet",
            vec![
                Param::new("name", None),
                Param::new("tags", Some(Node::list(1, vec![]))),
            ],
            vec![Node::call(2, Node::name(2, "print"), vec![])],
        );
        let children = def.children();
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0].kind, NodeKind::List { .. }));
        assert!(matches!(children[1].kind, NodeKind::Call { .. }));
    }

    #[test]
    fn leaves_have_no_children() {
        assert!(Node::name(1, "x").children().is_empty());
        assert!(Node::num(1, 2.0).children().is_empty());
        assert!(Node::string(1, "s").children().is_empty());
    }
}
