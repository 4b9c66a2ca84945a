//! The parsed project under analysis.

use crate::query::preorder;
use crate::tree::Node;
use serde::{Deserialize, Serialize};

/// One parsed source file.
///
/// Created once by the external discovery+parse step per discovered file
/// and immutable thereafter. The file owns its tree exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFile {
    /// Display identifier used in violation details.
    pub name: String,
    /// Logical path used for exclusion matching, with `/` separators.
    pub path: String,
    /// Root of the parsed syntax tree.
    pub tree: Node,
}

impl ParsedFile {
    /// Creates a parsed file.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>, tree: Node) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            tree,
        }
    }
}

/// An ordered collection of parsed files.
///
/// Insertion order is discovery order and is preserved: which occurrence a
/// rule reports depends on it. The project exposes no mutation operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    files: Vec<ParsedFile>,
}

impl Project {
    /// Creates a project from files in discovery order.
    #[must_use]
    pub fn new(files: Vec<ParsedFile>) -> Self {
        Self { files }
    }

    /// All parsed files, in discovery order.
    pub fn files(&self) -> impl Iterator<Item = &ParsedFile> {
        self.files.iter()
    }

    /// Files whose logical path contains `fragment`, in discovery order.
    pub fn files_under<'a>(&'a self, fragment: &'a str) -> impl Iterator<Item = &'a ParsedFile> {
        self.files.iter().filter(move |f| f.path.contains(fragment))
    }

    /// Number of parsed files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when the project has no parsed files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The first value produced by `f` over all (file, node) pairs.
    ///
    /// Files are visited in discovery order and nodes in pre-order, so the
    /// result is the earliest occurrence in the project: an earlier file
    /// takes precedence even when its matching line number is larger. The
    /// search short-circuits at the first `Some`.
    pub fn first_match<'a, T>(
        &'a self,
        mut f: impl FnMut(&'a ParsedFile, &'a Node) -> Option<T>,
    ) -> Option<T> {
        self.files
            .iter()
            .find_map(|file| preorder(&file.tree).find_map(|node| f(file, node)))
    }
}
