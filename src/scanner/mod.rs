//! Balanced multi-line statement scanning.
//!
//! A statement starts on a given line and keeps absorbing following lines
//! while braces or parens are unbalanced, or while the caller's terminator
//! rejects the accumulated text. This is a textual heuristic, not a lexer:
//! delimiters inside string literals and comments are counted, and a
//! surplus of closers (negative depth) is treated the same as balanced.
//! Callers must tolerate the occasional misplaced boundary.

mod statement;
mod types;

pub use statement::{line_sequence, scan, scan_with, terminator, Statements};
pub use types::{Balance, Chunk, Delimiters, Statement};
