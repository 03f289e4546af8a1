//! Source code location types shared by extraction and reporting.

/// A position in a source file (1-based line and column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// A source location together with the text of the line it points at.
///
/// The line text is captured at extraction time so the reporter can show a
/// cargo-style excerpt without re-reading the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    pub source_line: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
        }
    }

    /// Build a context by looking up `line` (1-based) in `source`.
    pub fn from_source(file_path: &str, source: &str, line: usize, col: usize) -> Self {
        Self::new(
            SourceLocation::new(file_path, line, col),
            line_at(source, line).unwrap_or_default(),
        )
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// Returns the text of the 1-based `line` in `source`, without its line ending.
pub fn line_at(source: &str, line: usize) -> Option<&str> {
    line.checked_sub(1).and_then(|idx| source.lines().nth(idx))
}

/// Convert a byte offset into a 1-based (line, column) pair.
///
/// Columns count characters, not bytes. Offsets past the end clamp to the end.
pub fn offset_to_line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}
