use super::CommandResult;
use crate::{
    core::CheckContext,
    issues::{Issue, Severity},
    rules::check_i18n_issues,
};

/// Run the rule over every scanned template, parse failures included.
pub fn analyze(ctx: &CheckContext) -> CommandResult {
    let mut issues = check_i18n_issues(ctx);
    issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));
    finish(issues, ctx.files.len())
}

pub fn finish(mut issues: Vec<Issue>, files_checked: usize) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    CommandResult {
        issues,
        error_count,
        warning_count,
        parse_error_count,
        files_checked,
    }
}
