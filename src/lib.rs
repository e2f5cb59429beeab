//! # pddl-base
//!
//! Core library for PDDL tokenization, syntax trees, and symbol resolution.
//!
//! This crate is the language-intelligence core behind editor features for
//! PDDL (Planning Domain Definition Language): hover, completion, rename,
//! find-references, and diagnostics all sit on top of the query surface
//! exposed here. The crate consumes plain text and produces a lossless
//! syntax tree plus derived symbol tables; it never touches an editor API,
//! the file system, or an external planner.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ground  → lifted-to-grounded variable enumeration
//!   ↓
//! model   → domain/problem models, variables, type graph, references
//!   ↓
//! syntax  → arena syntax tree, builder, node query API
//!   ↓
//! parser  → logos tokenizer for the PDDL token stream
//!   ↓
//! base    → primitives (Position, Span, LineIndex)
//! ```
//!
//! Everything is synchronous and side-effect free: re-parsing a document
//! builds a fresh tree each time, and a built tree is never mutated, so
//! concurrent reads need no coordination.

/// Foundation types: Position, Span, LineIndex
pub mod base;

/// Tokenizer: logos lexer producing the flat PDDL token stream
pub mod parser;

/// Syntax: arena syntax tree, bracket-recovery builder, node query API
pub mod syntax;

/// Model: variables, typed lists, type inheritance, domain/problem models
pub mod model;

/// Grounding: expanding lifted variables over object/type bindings
pub mod ground;

// Re-export foundation types
pub use base::{LineIndex, Position, Span};
pub use parser::{Token, TokenKind, tokenize};
pub use syntax::{SyntaxNode, SyntaxTree};
