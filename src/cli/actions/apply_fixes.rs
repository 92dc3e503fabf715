//! ApplyFixes action.
//!
//! Inserts the autofix text of every fixable issue. Used by the
//! `i18n-lint fix` command. Suggestions are never applied.

use super::operation::Operation;
use super::traits::Action;
use crate::issues::{Issue, Report, ReportLocation};

/// Action to apply issue autofixes.
pub struct ApplyFixes;

impl Action<Issue> for ApplyFixes {
    fn to_operations(issues: &[Issue]) -> Vec<Operation> {
        issues
            .iter()
            .filter_map(|issue| {
                let fix = issue.fix()?;
                let ReportLocation::Source(context) = issue.location() else {
                    return None;
                };
                Some(Operation::InsertText {
                    context: context.clone(),
                    offset: fix.edit.start,
                    text: fix.edit.new_text.clone(),
                })
            })
            .collect()
    }
}
