//! Per-target orchestration.
//!
//! Every file is checked for a supported extension before anything is read,
//! so an unsupported file aborts the run without partial output. Files are
//! then read and extracted in parallel; results keep the input order because
//! the parallel map is indexed. Merging and deduplication run sequentially.

use std::{fs, path::Path};

use anyhow::Result;
use rayon::prelude::*;

use super::{
    StringRecord,
    dedupe::dedupe_records,
    extract::{ExtensionMap, Extract, Extractor, FileExtraction},
};
use crate::issues::{Issue, Severity};

/// One file scheduled for extraction.
#[derive(Debug, Clone)]
pub struct FileJob {
    /// Path as shown in catalog references and diagnostics.
    pub file_path: String,
    pub extractor: Extractor,
}

/// Pick an extractor for every file, failing on the first unsupported one.
pub fn plan_files(files: &[String], extensions: &ExtensionMap) -> Result<Vec<FileJob>> {
    files
        .iter()
        .map(|file_path| -> Result<FileJob> {
            Ok(FileJob {
                file_path: file_path.clone(),
                extractor: extensions.extractor_for(file_path)?,
            })
        })
        .collect()
}

/// Deduplicated records for one output target plus every diagnostic raised
/// while building them.
#[derive(Debug, Default)]
pub struct CatalogData {
    pub records: Vec<StringRecord>,
    pub issues: Vec<Issue>,
    pub file_count: usize,
}

impl CatalogData {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == severity)
            .count()
    }
}

/// Read and extract every job, resolving paths against `base_dir`.
///
/// A file that cannot be read contributes a file-level error and no records;
/// the other files are unaffected.
pub fn build_catalog(base_dir: &Path, jobs: &[FileJob]) -> CatalogData {
    let per_file: Vec<FileExtraction> = jobs
        .par_iter()
        .map(|job| match fs::read_to_string(base_dir.join(&job.file_path)) {
            Ok(source) => job.extractor.extract(&job.file_path, &source),
            Err(err) => FileExtraction::read_failure(&job.file_path, &err),
        })
        .collect();

    merge(per_file)
}

/// Concatenate per-file results in order, then deduplicate.
///
/// Plural conflicts found during deduplication are appended after the
/// per-file diagnostics.
pub fn merge(per_file: Vec<FileExtraction>) -> CatalogData {
    let file_count = per_file.len();
    let mut records = Vec::new();
    let mut issues = Vec::new();

    for extraction in per_file {
        records.extend(extraction.records);
        issues.extend(extraction.issues);
    }

    let deduped = dedupe_records(records);
    issues.extend(deduped.conflicts.into_iter().map(Issue::PluralConflict));

    CatalogData {
        records: deduped.records,
        issues,
        file_count,
    }
}
