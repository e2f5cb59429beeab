//! Syntax tree for PDDL.
//!
//! The tree is lossless: every token of the input, including whitespace and
//! comments, is a node, and the concatenated text of the root reproduces
//! the input exactly. The builder recovers from unbalanced brackets instead
//! of failing, so a document mid-edit still yields a usable tree.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! Builder → arena tree (flat node array, integer parent/child indices)
//!     ↓
//! SyntaxNode cursor → navigation and query API
//!     ↓
//! Domain/Problem models → symbol tables
//! ```
//!
//! Nodes are mutated only while the single builder pass that owns them is
//! running; once built, a tree is immutable and safe to query from any
//! number of readers.

mod node;
mod tree;

pub use node::{MissingNodeError, SyntaxNode};
pub use tree::{NodeId, SyntaxTree};
