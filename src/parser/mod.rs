//! Tokenizer for PDDL source text.
//!
//! This module provides:
//! - **logos** for fast, non-failing lexing (all trivia preserved)
//! - a fusion pass that classifies `(` + adjacent operator as a single
//!   [`TokenKind::OpenBracketOperator`] token (e.g. `(:action`, `(and`,
//!   `(at start`)
//!
//! The tokenizer never fails: malformed input (stray `)`, lone `?`) simply
//! yields tokens that downstream layers handle permissively, so a document
//! mid-edit still tokenizes. Bracket matching is not resolved here; that is
//! the tree builder's job.

mod lexer;
mod token;

pub use lexer::{Lexer, tokenize};
pub use token::{Token, TokenKind};
