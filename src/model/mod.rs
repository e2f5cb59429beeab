//! Derived symbol model for PDDL files.
//!
//! Built by walking the syntax tree once per parse:
//! - [`Variable`]/[`Parameter`]/[`Term`] - predicate and function signatures
//! - [`TypeObjectMap`] - object ⇄ type bindings for constants and objects
//! - [`TypeInheritanceGraph`] - the `:types` child→parent graph
//! - [`DomainModel`] / [`ProblemModel`] - read-mostly per-file symbol tables
//!
//! Model extraction is best-effort and never fails: a missing or malformed
//! section yields an empty collection, so editor features keep working on
//! broken documents. Reference finding deliberately scans raw text with
//! regular expressions instead of tree queries; that path stays usable
//! while the user is mid-edit and the tree is partial.

mod domain;
mod graph;
mod problem;
mod references;
mod section;
mod type_map;
mod variable;

pub use domain::{Action, DomainModel, SymbolInfo, VariableKind};
pub use graph::TypeInheritanceGraph;
pub use problem::ProblemModel;
pub use section::{TypedGroup, parse_typed_list, parse_variable_declarations};
pub use type_map::TypeObjectMap;
pub use variable::{
    BindingError, ObjectInstance, Parameter, Term, Variable, parse_parameters,
};

/// The implicit root of every PDDL type hierarchy.
pub const OBJECT_TYPE: &str = "object";
