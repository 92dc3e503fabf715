//! Action trait definition.
//!
//! Actions convert Issues into Operations. Each Action can be implemented
//! for multiple Issue types, providing type-safe handling.

use anyhow::Result;
use std::collections::BTreeMap;

use super::operation::Operation;

/// Statistics from running an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionStats {
    /// Number of operations processed.
    pub processed: usize,
    /// Number of operations skipped (duplicate edits).
    pub skipped: usize,
    /// Number of changes actually applied to files.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

/// Action trait - converts Issues into Operations and executes them.
///
/// # Example
///
/// ```ignore
/// // In command code:
/// if apply {
///     ApplyFixes::run(&issues)?;
/// } else {
///     ApplyFixes::preview(&issues);
/// }
/// ```
pub trait Action<I> {
    /// Convert issues to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(issues: &[I]) -> Vec<Operation>;

    /// Execute the action (modify files).
    fn run(issues: &[I]) -> Result<ActionStats> {
        let ops = Self::to_operations(issues);
        execute_operations(&ops)
    }

    /// Preview the action (dry-run mode).
    fn preview(issues: &[I]) {
        let ops = Self::to_operations(issues);
        Operation::preview_all(&ops);
    }
}

pub(crate) fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut stats = ActionStats::default();

    let mut ops_by_file: BTreeMap<&str, Vec<Operation>> = BTreeMap::new();
    for op in ops {
        ops_by_file.entry(op.file_path()).or_default().push(op.clone());
    }

    for (file_path, file_ops) in ops_by_file {
        let applied = Operation::apply_to_file(file_path, &file_ops)?;
        stats.processed += file_ops.len();
        stats.skipped += file_ops.len() - applied;
        if applied > 0 {
            stats.changes_applied += applied;
            stats.files_modified += 1;
        }
    }

    Ok(stats)
}
