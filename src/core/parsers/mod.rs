//! Parser adapters for the supported source kinds.
//!
//! Each adapter turns raw file text into the AST of an external parser crate
//! and reports failures through the shared [`ParseError`] type.
//!
//! - `script`: JavaScript source files (uses swc)
//! - `template`: Jinja/Nunjucks-style templates (uses minijinja's parser)

use std::fmt;

pub mod script;
pub mod template;

/// Uniform parse failure surfaced by every adapter.
///
/// `line` and `column` are 1-based and point at the offending token when the
/// underlying parser reports a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(f, "{} ({}:{})", self.message, line, column),
            (Some(line), None) => write!(f, "{} (line {})", self.message, line),
            _ => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}
