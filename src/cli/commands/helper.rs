use super::{CommandResult, CommandSummary};
use crate::cli::report::compare_issues;
use crate::issues::{Issue, Severity};

pub fn finish(summary: CommandSummary, mut issues: Vec<Issue>) -> CommandResult {
    issues.sort_by(compare_issues);

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        issues,
        parse_error_count,
    }
}
