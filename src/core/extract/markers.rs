//! Marker call validation and normalization.
//!
//! A marker call flags a string literal for translation. Each source kind has
//! a singular and a plural marker with its own arity convention:
//!
//! | kind     | singular  | plural     | plural minimum arguments      |
//! |----------|-----------|------------|-------------------------------|
//! | template | `_`       | `_plural`  | 3 (singular, plural, count)   |
//! | script   | `gettext` | `ngettext` | 2 (singular, plural)          |

use super::call_site::{Argument, CallSite};
use crate::core::{Location, SourceContext, StringRecord};
use crate::issues::{InvalidCallIssue, InvalidCallReason};

/// The two supported source kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Template,
    Script,
}

impl SourceKind {
    pub fn markers(self) -> &'static MarkerSet {
        match self {
            SourceKind::Template => &TEMPLATE_MARKERS,
            SourceKind::Script => &SCRIPT_MARKERS,
        }
    }
}

/// Marker names and arity rules for one source kind.
#[derive(Debug)]
pub struct MarkerSet {
    pub kind: SourceKind,
    pub singular: &'static str,
    pub plural: &'static str,
    pub plural_min_args: usize,
}

pub static TEMPLATE_MARKERS: MarkerSet = MarkerSet {
    kind: SourceKind::Template,
    singular: "_",
    plural: "_plural",
    plural_min_args: 3,
};

pub static SCRIPT_MARKERS: MarkerSet = MarkerSet {
    kind: SourceKind::Script,
    singular: "gettext",
    plural: "ngettext",
    plural_min_args: 2,
};

/// Outcome of validating a single located call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// Not a marker call.
    Ignored,
    Record(StringRecord),
    Invalid(InvalidCallReason),
}

impl MarkerSet {
    pub fn is_marker(&self, name: &str) -> bool {
        name == self.singular || name == self.plural
    }

    /// Validate one call and turn it into a record.
    pub fn normalize(&self, call: &CallSite, file_path: &str) -> CallOutcome {
        let Some(name) = call.callee.as_deref().filter(|name| self.is_marker(name)) else {
            return CallOutcome::Ignored;
        };
        let location = Location::new(file_path, call.line);

        match name {
            n if n == self.singular => {
                let Some(first) = call.args.first() else {
                    return CallOutcome::Invalid(InvalidCallReason::EmptyCall);
                };
                match first.as_literal() {
                    Some(msgid) => CallOutcome::Record(StringRecord::singular(msgid, location)),
                    None => CallOutcome::Invalid(InvalidCallReason::NonLiteral),
                }
            }
            n if n == self.plural => {
                if call.args.len() < self.plural_min_args {
                    return CallOutcome::Invalid(InvalidCallReason::IncompletePlural {
                        kind: self.kind,
                    });
                }
                match (
                    call.args.first().and_then(Argument::as_literal),
                    call.args.get(1).and_then(Argument::as_literal),
                ) {
                    (Some(msgid), Some(msgid_plural)) => {
                        CallOutcome::Record(StringRecord::plural(msgid, msgid_plural, location))
                    }
                    _ => CallOutcome::Invalid(InvalidCallReason::NonLiteral),
                }
            }
            other => CallOutcome::Invalid(InvalidCallReason::UnknownMarker {
                name: other.to_string(),
            }),
        }
    }

    /// Validate every call of a file, splitting results into records and issues.
    ///
    /// Invalid calls are dropped from the records; extraction of the remaining
    /// calls continues.
    pub fn collect(
        &self,
        calls: &[CallSite],
        file_path: &str,
        source: &str,
    ) -> (Vec<StringRecord>, Vec<InvalidCallIssue>) {
        let mut records = Vec::new();
        let mut issues = Vec::new();

        for call in calls {
            match self.normalize(call, file_path) {
                CallOutcome::Ignored => {}
                CallOutcome::Record(record) => records.push(record),
                CallOutcome::Invalid(reason) => issues.push(InvalidCallIssue {
                    context: SourceContext::from_source(file_path, source, call.line, call.col),
                    reason,
                }),
            }
        }

        (records, issues)
    }
}
