//! Report formatting and printing utilities.
//!
//! Text output follows the cargo diagnostic layout; JSON output is a single
//! document on stdout for editors and CI.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::commands::CommandResult;
use crate::issues::{Fix, Issue, Report, ReportLocation, Severity, Suggestion};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Issues are expected to be sorted already (see `helper::finish`).
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

/// Print a success message when no issues are found.
pub fn print_success(files: usize) {
    print_success_to(files, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} template {} - no issues found",
            files,
            if files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print the result of `check` in text form.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    if result.issues.is_empty() {
        print_success_to(result.files_checked, writer);
    } else {
        report_to(&result.issues, writer);
        let fixable = result.fixable_count();
        if fixable > 0 {
            let _ = writeln!(
                writer,
                "{} {} issue(s) can be fixed with {}",
                "help:".bold().cyan(),
                fixable,
                "i18n-lint fix --apply".cyan()
            );
        }
    }
}

// ============================================================
// JSON output
// ============================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    files_checked: usize,
    error_count: usize,
    warning_count: usize,
    issues: Vec<JsonIssue<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonIssue<'a> {
    rule: String,
    severity: Severity,
    message: String,
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fix: Option<&'a Fix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a Suggestion>,
}

impl<'a> JsonIssue<'a> {
    fn new(issue: &'a Issue) -> Self {
        let (file, line, column, end_line, end_column) = match issue.location() {
            ReportLocation::Source(ctx) => (
                ctx.file_path(),
                Some(ctx.line()),
                Some(ctx.col()),
                Some(ctx.end.line),
                Some(ctx.end.col),
            ),
            ReportLocation::File { path } => (path, None, None, None, None),
        };
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity(),
            message: issue.message(),
            file,
            line,
            column,
            end_line,
            end_column,
            attribute: issue.attribute(),
            fix: issue.fix(),
            suggestion: issue.suggestion(),
        }
    }
}

/// Print the result of `check` as JSON.
pub fn print_json(result: &CommandResult) -> Result<()> {
    print_json_to(result, &mut io::stdout().lock())
}

pub fn print_json_to<W: Write>(result: &CommandResult, writer: &mut W) -> Result<()> {
    let report = JsonReport {
        files_checked: result.files_checked,
        error_count: result.error_count,
        warning_count: result.warning_count,
        issues: result.issues.iter().map(JsonIssue::new).collect(),
    };
    serde_json::to_writer_pretty(&mut *writer, &report).context("Failed to serialize report")?;
    writeln!(writer).context("Failed to write report")?;
    Ok(())
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
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

    match issue.location() {
        ReportLocation::Source(ctx) => {
            let line = ctx.line();
            let col = ctx.col();
            let source_line = &ctx.source_line;

            // Clickable location: --> path:line:col
            let _ = writeln!(
                writer,
                "{:>width$}{} {}:{}:{}",
                "",
                "-->".blue(),
                ctx.file_path(),
                line,
                col,
                width = max_line_width
            );
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

            // Underline the opening tag when it fits on the line
            let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            let caret_len = if ctx.end.line == line && ctx.end.col > col {
                let tag: String = source_line
                    .chars()
                    .skip(col - 1)
                    .take(ctx.end.col - col)
                    .collect();
                UnicodeWidthStr::width(tag.as_str()).max(1)
            } else {
                1
            };
            let carets = "^".repeat(caret_len);
            let carets = match severity {
                Severity::Error => carets.red(),
                Severity::Warning => carets.yellow(),
            };
            let _ = writeln!(
                writer,
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                carets,
                width = max_line_width,
                padding = caret_padding
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(
                writer,
                "{:>width$}{} {}",
                "",
                "-->".blue(),
                path,
                width = max_line_width
            );
        }
    }

    if let Some(fix) = issue.fix() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} insert `{}`",
            "",
            "=".blue(),
            "fix:".bold().green(),
            fix.edit.new_text.trim_start(),
            width = max_line_width
        );
    }

    if let Some(suggestion) = issue.suggestion() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "help:".bold().cyan(),
            suggestion.label,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
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
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
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

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        cli::commands::helper::finish,
        core::parsers::parse_template_source,
        issues::ParseErrorIssue,
        rules::{RuleSettings, check_template},
    };

    fn result_for(source: &str) -> CommandResult {
        let parsed = parse_template_source(source.to_string(), "src/app.html").unwrap();
        finish(check_template(&parsed, &RuleSettings::default()), 1)
    }

    fn render(result: &CommandResult) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        print_to(result, &mut output);
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_report_empty() {
        let mut output = Vec::new();
        report_to(&[], &mut output);
        assert!(output.is_empty());
    }

    #[test]
    fn test_print_success() {
        let output = render(&result_for("<p i18n=\"@@hello\">Hello</p>"));
        assert!(output.contains("Checked 1 template file - no issues found"));
    }

    #[test]
    fn test_report_text_layout() {
        let output = render(&result_for(r#"<div title="Hello">Hi</div>"#));

        insta::assert_snapshot!(output, @r#"
        error: Attribute "title" has no i18n attribute  i18n-missing-attribute
         --> src/app.html:1:1
          |
        1 | <div title="Hello">Hi</div>
          | ^^^^^^^^^^^^^^^^^^^
          = fix: insert `i18n-title`
          = help: Add the attribute name "title" to the "ignoreAttributes" option

        error: Each element containing text node should have an i18n attribute  i18n-missing-text
         --> src/app.html:1:1
          |
        1 | <div title="Hello">Hi</div>
          | ^^^^^^^^^^^^^^^^^^^
          = fix: insert `i18n`

        ✘ 2 problems (2 errors, 0 warnings)
        help: 2 issue(s) can be fixed with i18n-lint fix --apply
        "#);
    }

    #[test]
    fn test_report_warning_without_fix() {
        let output = render(&result_for(r#"<h1 i18n>Title</h1>"#));

        assert!(output.contains("warning: Missing custom message identifier  i18n-missing-id"));
        assert!(output.contains("src/app.html:1:1"));
        assert!(!output.contains("= fix:"));
        assert!(output.contains("1 problems (0 errors, 1 warning)"));
        assert!(!output.contains("can be fixed"));
    }

    #[test]
    fn test_report_parse_error() {
        let result = finish(
            vec![Issue::ParseError(ParseErrorIssue {
                file_path: "src/broken.html".to_string(),
                error: "unclosed element <div> opened at 1:1".to_string(),
            })],
            1,
        );
        let output = render(&result);

        assert!(output.contains("error: unclosed element <div> opened at 1:1  parse-error"));
        assert!(output.contains("--> src/broken.html"));
        assert!(!output.contains("|"));
    }

    #[test]
    fn test_report_unicode_source_line() {
        let output = render(&result_for("<p>你好</p><span title=\"标题\"></span>"));
        let lines: Vec<&str> = output.lines().collect();
        let location = lines.iter().position(|l| l.ends_with("1:10")).unwrap();

        // Two double-width characters precede `<span`
        let caret_line = lines[location + 3];
        assert_eq!(caret_line.find('^'), Some("  | ".len() + 11));
    }

    #[test]
    fn test_json_report() {
        let result = result_for(r#"<img alt="Logo" i18n-title title="x">"#);
        let mut output = Vec::new();
        print_json_to(&result, &mut output).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(json["filesChecked"], 1);
        assert_eq!(json["errorCount"], 1);
        assert_eq!(json["warningCount"], 1);

        let issues = json["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0]["rule"], "i18n-missing-attribute");
        assert_eq!(issues[0]["severity"], "error");
        assert_eq!(issues[0]["attribute"], "alt");
        assert_eq!(issues[0]["line"], 1);
        assert_eq!(issues[0]["column"], 1);
        assert_eq!(issues[0]["fix"]["edit"]["start"], 4);
        assert_eq!(issues[0]["fix"]["edit"]["newText"], " i18n-alt");
        assert_eq!(issues[0]["suggestion"]["kind"], "i18n-suggest-ignore");
        assert!(issues[0]["suggestion"]["fix"].is_null());

        assert_eq!(issues[1]["rule"], "i18n-missing-id-on-attribute");
        assert_eq!(issues[1]["severity"], "warning");
        assert!(issues[1].get("fix").is_none());
    }
}
