//! Per-file extraction.
//!
//! Each source kind runs the same three steps: parse the file, locate every
//! call in document order, then validate and normalize marker calls into
//! [`StringRecord`]s. The kind is chosen from the file extension through
//! [`ExtensionMap`], and dispatch happens on the [`Extractor`] enum.

pub mod call_site;
pub mod markers;
pub mod script;
pub mod template;

use std::path::Path;

use anyhow::{Result, bail};
use enum_dispatch::enum_dispatch;

pub use call_site::{Argument, CallSite};
pub use markers::{CallOutcome, MarkerSet, SCRIPT_MARKERS, SourceKind, TEMPLATE_MARKERS};
pub use script::ScriptExtractor;
pub use template::TemplateExtractor;

use crate::core::{SourceContext, StringRecord, parsers::ParseError};
use crate::issues::{InvalidCallIssue, Issue, ParseErrorIssue};

/// Records and diagnostics produced by one file.
#[derive(Debug, Default)]
pub struct FileExtraction {
    pub records: Vec<StringRecord>,
    pub issues: Vec<Issue>,
}

impl FileExtraction {
    pub fn new(records: Vec<StringRecord>, issues: Vec<InvalidCallIssue>) -> Self {
        Self {
            records,
            issues: issues.into_iter().map(Issue::InvalidCall).collect(),
        }
    }

    /// The file could not be parsed: no records, one parse error.
    pub fn parse_failure(file_path: &str, source: &str, err: ParseError) -> Self {
        let context = err.line.map(|line| {
            SourceContext::from_source(file_path, source, line, err.column.unwrap_or(1))
        });
        Self {
            records: Vec::new(),
            issues: vec![Issue::ParseError(ParseErrorIssue {
                file_path: file_path.to_string(),
                context,
                error: err.message,
            })],
        }
    }

    /// The file could not be read: no records, one file-level error.
    pub fn read_failure(file_path: &str, err: &std::io::Error) -> Self {
        Self {
            records: Vec::new(),
            issues: vec![Issue::ParseError(ParseErrorIssue {
                file_path: file_path.to_string(),
                context: None,
                error: format!("Failed to read file: {}", err),
            })],
        }
    }
}

/// Capability shared by every source kind.
#[enum_dispatch]
pub trait Extract {
    /// Extract all marker calls from `source`, the contents of `file_path`.
    fn extract(&self, file_path: &str, source: &str) -> FileExtraction;
}

/// Tagged dispatch over the supported source kinds.
#[enum_dispatch(Extract)]
#[derive(Debug, Clone, Copy)]
pub enum Extractor {
    Template(TemplateExtractor),
    Script(ScriptExtractor),
}

impl Extractor {
    pub fn for_kind(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Template => TemplateExtractor.into(),
            SourceKind::Script => ScriptExtractor.into(),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Extractor::Template(_) => SourceKind::Template,
            Extractor::Script(_) => SourceKind::Script,
        }
    }
}

pub const DEFAULT_TEMPLATE_EXTENSIONS: &[&str] = &["html", "njk", "jinja", "jinja2"];
pub const DEFAULT_SCRIPT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];

/// Maps file extensions (without the leading dot) to source kinds.
#[derive(Debug, Clone)]
pub struct ExtensionMap {
    template: Vec<String>,
    script: Vec<String>,
}

impl Default for ExtensionMap {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_EXTENSIONS, DEFAULT_SCRIPT_EXTENSIONS)
    }
}

impl ExtensionMap {
    pub fn new<T: AsRef<str>, S: AsRef<str>>(template: &[T], script: &[S]) -> Self {
        Self {
            template: template.iter().map(|e| normalize_extension(e.as_ref())).collect(),
            script: script.iter().map(|e| normalize_extension(e.as_ref())).collect(),
        }
    }

    pub fn kind_for(&self, path: &Path) -> Option<SourceKind> {
        let ext = path.extension()?.to_str()?;
        if self.template.iter().any(|e| e == ext) {
            Some(SourceKind::Template)
        } else if self.script.iter().any(|e| e == ext) {
            Some(SourceKind::Script)
        } else {
            None
        }
    }

    pub fn is_supported(&self, path: &Path) -> bool {
        self.kind_for(path).is_some()
    }

    /// Pick the extractor for `file_path`.
    ///
    /// An unsupported extension is a configuration error for the whole run.
    pub fn extractor_for(&self, file_path: &str) -> Result<Extractor> {
        let path = Path::new(file_path);
        match self.kind_for(path) {
            Some(kind) => Ok(Extractor::for_kind(kind)),
            None => {
                let extension = path
                    .extension()
                    .map(|e| format!(".{}", e.to_string_lossy()))
                    .unwrap_or_default();
                bail!(
                    "No extraction method defined for extension {} ({})",
                    extension,
                    file_path
                )
            }
        }
    }
}

/// Strip a leading dot so both `"js"` and `".js"` are accepted.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}
