use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use super::extract::ExtensionMap;

/// Check if a source contains glob wildcards (*, ? or [).
/// Sources without wildcards are treated as literal file or directory paths.
fn is_glob_pattern(source: &str) -> bool {
    source.contains('*') || source.contains('?') || source.contains('[')
}

/// Result of expanding sources.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files relative to the base directory, in source order without duplicates.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Expand `sources` into an ordered list of files.
///
/// - A literal file path is kept as-is, whatever its extension.
/// - A directory is walked recursively in file-name order; only files with a
///   supported extension are kept.
/// - A glob pattern keeps every matched file and walks matched directories.
///
/// `ignores` apply to files found by walking or globbing, never to files named
/// explicitly. A literal path that does not exist is an error.
pub fn scan_sources(
    base_dir: &Path,
    sources: &[String],
    ignores: &[String],
    extensions: &ExtensionMap,
    verbose: bool,
) -> Result<ScanResult> {
    let ignore_patterns = ignores
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut scanner = Scanner {
        base_dir,
        ignore_patterns,
        extensions,
        verbose,
        seen: HashSet::new(),
        result: ScanResult::default(),
    };

    for source in sources {
        if is_glob_pattern(source) {
            scanner.expand_glob(source)?;
        } else {
            let path = base_dir.join(source);
            if path.is_dir() {
                scanner.walk(&path);
            } else if path.is_file() {
                scanner.push(&path);
            } else {
                bail!("Source path does not exist: {}", path.display());
            }
        }
    }

    Ok(scanner.result)
}

struct Scanner<'a> {
    base_dir: &'a Path,
    ignore_patterns: Vec<Pattern>,
    extensions: &'a ExtensionMap,
    verbose: bool,
    seen: HashSet<String>,
    result: ScanResult,
}

impl Scanner<'_> {
    fn expand_glob(&mut self, source: &str) -> Result<()> {
        let full_pattern = self.base_dir.join(source);
        let pattern_str = full_pattern.to_string_lossy();
        let entries = glob(&pattern_str)
            .with_context(|| format!("Invalid glob pattern in sources: \"{}\"", source))?;

        let mut matched = 0;
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    self.skip(&e);
                    continue;
                }
            };
            matched += 1;
            if path.is_dir() {
                self.walk(&path);
            } else if !self.is_ignored(&path) {
                self.push(&path);
            }
        }

        if matched == 0 && self.verbose {
            eprintln!(
                "{} Pattern matched no files: {}",
                "warning:".bold().yellow(),
                source
            );
        }
        Ok(())
    }

    fn walk(&mut self, dir: &Path) {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    self.skip(&e);
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file()
                && self.extensions.is_supported(path)
                && !self.is_ignored(path)
            {
                self.push(path);
            }
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let relative = display_path(self.base_dir, path);
        self.ignore_patterns.iter().any(|p| p.matches(&relative))
    }

    fn push(&mut self, path: &Path) {
        let relative = display_path(self.base_dir, path);
        if self.seen.insert(relative.clone()) {
            self.result.files.push(relative);
        }
    }

    fn skip(&mut self, err: &dyn std::fmt::Display) {
        self.result.skipped_count += 1;
        if self.verbose {
            eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), err);
        }
    }
}

/// Path of `path` relative to `base_dir`, with `.` components dropped.
///
/// Paths outside `base_dir` are returned whole.
pub fn display_path(base_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base_dir).unwrap_or(path);
    let cleaned: PathBuf = relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    cleaned.to_string_lossy().into_owned()
}
