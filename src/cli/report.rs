//! Report formatting and printing utilities.
//!
//! Diagnostics are printed cargo-style to stderr so that `extract --stdout`
//! leaves stdout to the catalog. Kept apart from the core so potgen can be
//! used as a library.

use std::{
    cmp::Ordering,
    io::{self, Write},
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stderr.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stderr().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

pub fn print(result: &CommandResult) {
    report(&result.issues);

    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, result),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_extract(summary: &ExtractSummary, result: &CommandResult) {
    for target in &summary.targets {
        let line = format!(
            "{} {} from {} {}",
            pluralize(target.message_count, "message", "messages"),
            if target.written { "written" } else { "extracted" },
            target.file_count,
            if target.file_count == 1 { "file" } else { "files" },
        );
        let (mark, line) = if result.error_count == 0 {
            (SUCCESS_MARK.green(), line.green())
        } else {
            (FAILURE_MARK.red(), line.normal())
        };

        if target.written {
            println!("{} {} {} {}", mark, line, "->".dimmed(), target.output);
        } else {
            // stdout holds the catalog itself
            eprintln!("{} {}", mark, line);
        }
    }
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        Some(error) => eprintln!("{} {}", "error:".bold().red(), error),
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        ),
    }
}

fn pluralize(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match &loc {
        ReportLocation::Source(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
            print_excerpt(
                writer,
                &ctx.source_line,
                ctx.line(),
                ctx.col(),
                severity,
                max_line_width,
            );
        }
        ReportLocation::Line { path, line } => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), path, line);
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        for (i, detail) in details.lines().enumerate() {
            let label = if i == 0 { "note:" } else { "     " };
            let _ = writeln!(
                writer,
                "{:>width$} {} {} {}",
                "",
                "=".blue(),
                label.bold(),
                detail,
                width = max_line_width
            );
        }
    }

    let _ = writeln!(writer);
}

fn print_excerpt<W: Write>(
    writer: &mut W,
    source_line: &str,
    line: usize,
    col: usize,
    severity: Severity,
    max_line_width: usize,
) {
    let caret_char = match severity {
        Severity::Error => "^".red(),
        Severity::Warning => "^".yellow(),
    };

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    // col is 1-based and counts characters
    let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret_char,
        width = max_line_width,
        padding = caret_padding
    );
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 { "problem" } else { "problems" },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn location_key<'a>(loc: &ReportLocation<'a>) -> (&'a str, usize, usize) {
    match *loc {
        ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
        ReportLocation::Line { path, line } => (path, line, 0),
        ReportLocation::File { path } => (path, 0, 0),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::Line { .. } | ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

/// Order issues by file, then line, then column.
pub fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    let (a_path, a_line, a_col) = location_key(&a.location());
    let (b_path, b_line, b_col) = location_key(&b.location());

    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a_col.cmp(&b_col))
}
