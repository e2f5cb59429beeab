//! Foundation types for the PDDL toolchain.
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`Position`], [`Span`] - Line/column positions for symbols and ranges
//! - [`LineIndex`] - Byte offset ⇄ line/column conversion
//!
//! This module has NO dependencies on other pddl modules.

mod line_index;
mod position;

pub use line_index::LineIndex;
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
