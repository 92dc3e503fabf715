//! Fix command - insert missing i18n markers.
//!
//! Applies the autofix of every fixable issue: ` i18n` on elements with
//! untranslated text and ` i18n-<attr>` for human-readable attributes.
//! Missing message ids cannot be generated and are left for the user;
//! "ignore this attribute" suggestions are never applied.
//!
//! Use `--apply` to actually modify files (default is dry-run mode).

use std::collections::BTreeSet;

use anyhow::Result;
use colored::Colorize;

use super::super::{
    actions::{Action, ActionStats, ApplyFixes},
    args::FixCommand,
    exit_status::ExitStatus,
    report,
};
use super::helper::analyze;
use crate::{core::CheckContext, issues::Issue};

pub fn fix(cmd: FixCommand) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    let apply = cmd.apply;
    let result = analyze(&ctx);

    let fixable: Vec<Issue> = result
        .issues
        .iter()
        .filter(|issue| issue.has_fix())
        .cloned()
        .collect();
    let manual_count = result.issues.len() - fixable.len() - result.parse_error_count;

    if result.issues.is_empty() {
        report::print_success(result.files_checked);
        return Ok(ExitStatus::Success);
    }

    if fixable.is_empty() {
        println!("No automatic fixes available.");
    } else if apply {
        let stats: ActionStats = ApplyFixes::run(&fixable)?;
        println!(
            "{} {} fix(es) in {} file(s).",
            "Applied".green().bold(),
            stats.changes_applied,
            stats.files_modified
        );
    } else {
        ApplyFixes::preview(&fixable);
        let file_count = fixable
            .iter()
            .map(Issue::file_path)
            .collect::<BTreeSet<_>>()
            .len();
        println!(
            "{} {} fix(es) in {} file(s).",
            "Would apply".yellow().bold(),
            fixable.len(),
            file_count
        );
        println!("Run with {} to apply these fixes.", "--apply".cyan());
    }

    if manual_count > 0 {
        println!(
            "Note: {} issue(s) need manual attention (run {} for details).",
            manual_count,
            "i18n-lint check".cyan()
        );
    }

    if result.parse_error_count > 0 {
        eprintln!(
            "{} {} file(s) could not be parsed (run {} for details)",
            "warning:".bold().yellow(),
            result.parse_error_count,
            "i18n-lint check".cyan()
        );
        return Ok(ExitStatus::Error);
    }

    // A dry run with pending fixes signals that there is work to do
    if !apply && !fixable.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
