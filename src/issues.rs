//! Diagnostic types produced while building a catalog.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it. Issues never abort a run: a parse error empties one file's
//! contribution, an invalid call drops one call, and a plural conflict is
//! only a warning. Configuration problems are `anyhow` errors instead.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::core::{Location, SourceContext, SourceKind};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
///
/// `Error` is fatal for the thing it is attached to (a call or a whole file)
/// and makes the command exit with status 1. `Warning` is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ParseError,
    InvalidCall,
    PluralConflict,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ParseError => write!(f, "parse-error"),
            Rule::InvalidCall => write!(f, "invalid-call"),
            Rule::PluralConflict => write!(f, "plural-conflict"),
        }
    }
}

// ============================================================
// Invalid Call Reason
// ============================================================

/// Why a marker call was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidCallReason {
    /// Singular marker without arguments: `gettext()`
    EmptyCall,
    /// Plural marker with fewer arguments than its kind requires.
    IncompletePlural { kind: SourceKind },
    /// A message slot holds something other than a string literal: `gettext(name)`
    NonLiteral,
    /// Marker name passed the filter but matches no known marker.
    UnknownMarker { name: String },
}

impl fmt::Display for InvalidCallReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidCallReason::EmptyCall => write!(f, "Empty gettext call"),
            InvalidCallReason::IncompletePlural {
                kind: SourceKind::Template,
            } => write!(f, "Incomplete plural gettext call"),
            InvalidCallReason::IncompletePlural {
                kind: SourceKind::Script,
            } => write!(f, "Incomplete ngettext call"),
            InvalidCallReason::NonLiteral => write!(f, "Cannot localize non-literal"),
            InvalidCallReason::UnknownMarker { .. } => write!(f, "Unknown type of localization"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// File could not be read or parsed. The file contributes no messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    /// Position of the offending token, when the parser reports one.
    pub context: Option<SourceContext>,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

impl fmt::Display for ParseErrorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(ctx) => write!(
                f,
                "Error while parsing {}:{}:{}\n{}",
                self.file_path,
                ctx.line(),
                ctx.col(),
                self.error
            ),
            None => write!(f, "Error while parsing {}\n{}", self.file_path, self.error),
        }
    }
}

/// Marker call with a bad shape. The call contributes no message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCallIssue {
    pub context: SourceContext,
    pub reason: InvalidCallReason,
}

impl InvalidCallIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::InvalidCall
    }
}

impl fmt::Display for InvalidCallIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.reason,
            self.context.file_path(),
            self.context.line()
        )
    }
}

/// Two calls share a msgid but disagree on the plural form.
///
/// The first plural seen is kept in the catalog; this records the call that lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralConflictIssue {
    pub location: Location,
    pub msgid: String,
    pub kept: Option<String>,
    pub conflicting: Option<String>,
}

impl PluralConflictIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::PluralConflict
    }
}

impl fmt::Display for PluralConflictIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Conflicting plural form for \"{}\" at {}",
            self.msgid, self.location
        )
    }
}

fn describe_plural(plural: &Option<String>) -> String {
    match plural {
        Some(text) => format!("\"{}\"", text),
        None => "(none)".to_string(),
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A diagnostic found while building a catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ParseError(ParseErrorIssue),
    InvalidCall(InvalidCallIssue),
    PluralConflict(PluralConflictIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::ParseError(_) => ParseErrorIssue::severity(),
            Issue::InvalidCall(_) => InvalidCallIssue::severity(),
            Issue::PluralConflict(_) => PluralConflictIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::ParseError(_) => ParseErrorIssue::rule(),
            Issue::InvalidCall(_) => InvalidCallIssue::rule(),
            Issue::PluralConflict(_) => PluralConflictIssue::rule(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::ParseError(issue) => issue.fmt(f),
            Issue::InvalidCall(issue) => issue.fmt(f),
            Issue::PluralConflict(issue) => issue.fmt(f),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File and line only (no column, no excerpt).
    Line { path: &'a str, line: usize },
    /// File-level only (unreadable files, parse errors without a position).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards calls on `Issue`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        match &self.context {
            Some(ctx) => ReportLocation::Source(ctx),
            None => ReportLocation::File {
                path: &self.file_path,
            },
        }
    }

    fn message(&self) -> String {
        format!("Error while parsing {}", self.file_path)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.error.clone())
    }
}

impl Report for InvalidCallIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        match &self.reason {
            InvalidCallReason::UnknownMarker { name } => Some(format!("marker: {}", name)),
            _ => None,
        }
    }
}

impl Report for PluralConflictIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Line {
            path: &self.location.filepath,
            line: self.location.lineno,
        }
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "kept plural {}, ignored plural {}",
            describe_plural(&self.kept),
            describe_plural(&self.conflicting)
        ))
    }
}
