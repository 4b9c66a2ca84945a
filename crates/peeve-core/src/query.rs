//! Generic tree traversal and kind-filtered queries.
//!
//! Traversal is deterministic pre-order: a parent is yielded before its
//! children, and children come in source order. "First match" over this
//! sequence is therefore the earliest occurrence in the file's text.
//! Traversal borrows the tree and has no side effects, so restarting it is
//! always safe.

use crate::tree::{Node, NodeKind};

/// Iterator over every node of a tree, parent first.
#[derive(Debug)]
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let mut children = node.children();
        children.reverse();
        self.stack.extend(children);
        Some(node)
    }
}

/// Walks a tree in pre-order, starting at `root`.
#[must_use]
pub fn preorder(root: &Node) -> Preorder<'_> {
    Preorder { stack: vec![root] }
}

/// All call nodes of a tree, in traversal order.
pub fn calls(root: &Node) -> impl Iterator<Item = &Node> {
    preorder(root).filter(|n| matches!(n.kind, NodeKind::Call { .. }))
}

/// All comparison nodes of a tree, in traversal order.
pub fn compares(root: &Node) -> impl Iterator<Item = &Node> {
    preorder(root).filter(|n| matches!(n.kind, NodeKind::Compare { .. }))
}

/// All function definitions of a tree, in traversal order.
pub fn function_defs(root: &Node) -> impl Iterator<Item = &Node> {
    preorder(root).filter(|n| matches!(n.kind, NodeKind::FunctionDef { .. }))
}

/// All assignment nodes of a tree, in traversal order.
pub fn assigns(root: &Node) -> impl Iterator<Item = &Node> {
    preorder(root).filter(|n| matches!(n.kind, NodeKind::Assign { .. }))
}

/// All exception handler arms of a tree, in traversal order.
pub fn except_handlers(root: &Node) -> impl Iterator<Item = &Node> {
    preorder(root).filter(|n| matches!(n.kind, NodeKind::ExceptHandler { .. }))
}

/// All binary operations of a tree, in traversal order.
pub fn binary_ops(root: &Node) -> impl Iterator<Item = &Node> {
    preorder(root).filter(|n| matches!(n.kind, NodeKind::BinaryOp { .. }))
}

/// All string literals of a tree, in traversal order.
pub fn string_literals(root: &Node) -> impl Iterator<Item = &Node> {
    preorder(root).filter(|n| matches!(n.kind, NodeKind::Str { .. }))
}

/// All subscript nodes of a tree, in traversal order.
pub fn subscripts(root: &Node) -> impl Iterator<Item = &Node> {
    preorder(root).filter(|n| matches!(n.kind, NodeKind::Subscript { .. }))
}
