//! Extracted message types.

use std::fmt;

/// Where a message was found: a file path and a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub filepath: String,
    pub lineno: usize,
}

impl Location {
    pub fn new(filepath: impl Into<String>, lineno: usize) -> Self {
        Self {
            filepath: filepath.into(),
            lineno,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filepath, self.lineno)
    }
}

/// A translatable message extracted from one or more marker calls.
///
/// `msgid` holds the literal text exactly as written in the source (escapes
/// already decoded by the parser, no catalog escaping applied yet).
/// `msgid_plural` is only present for plural marker calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRecord {
    pub msgid: String,
    pub msgid_plural: Option<String>,
    pub locations: Vec<Location>,
}

impl StringRecord {
    pub fn singular(msgid: impl Into<String>, location: Location) -> Self {
        Self {
            msgid: msgid.into(),
            msgid_plural: None,
            locations: vec![location],
        }
    }

    pub fn plural(
        msgid: impl Into<String>,
        msgid_plural: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            msgid: msgid.into(),
            msgid_plural: Some(msgid_plural.into()),
            locations: vec![location],
        }
    }

    pub fn is_plural(&self) -> bool {
        self.msgid_plural.is_some()
    }
}
