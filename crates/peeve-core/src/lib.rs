//! # peeve-core
//!
//! Engine for rule-based static analysis over pre-parsed source trees.
//!
//! The engine consumes a [`Project`] of parsed files and a [`Config`], runs
//! the registered rules, and produces a list of [`Finding`]s. It provides:
//!
//! - [`Node`] / [`NodeKind`] — the syntax tree model
//! - [`query`] and [`predicates`] — the traversal primitives and shape
//!   predicates rules are built from
//! - [`Rule`] — the contract every validator implements
//! - [`Registry`] — the pipeline that dispatches rules and aggregates
//!   findings
//! - [`StyleCounter`] — the contract of the external style counter
//!
//! File discovery, parsing, and report formatting live outside the engine:
//! it consumes pre-parsed trees and produces structured findings, nothing
//! more.
//!
//! ## Example
//!
//! ```ignore
//! use peeve_core::{Config, Project, Registry};
//!
//! let registry = Registry::builder().rule(MyRule).build();
//! let findings = registry.run(&project, &Config::default())?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod project;
mod registry;
mod rule;
mod style;
mod tree;
mod types;

pub mod paths;
pub mod predicates;
pub mod query;

pub use config::{Config, ConfigError, ConstantValue, RuleConfig};
pub use project::{ParsedFile, Project};
pub use registry::{Registry, RegistryBuilder, RegistryError};
pub use rule::{Rule, RuleBox, RuleContext, RuleError};
pub use style::StyleCounter;
pub use tree::{BinOp, CompareOp, Node, NodeKind, Param};
pub use types::{Finding, Violation, ViolationCode};
