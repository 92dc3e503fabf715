use crate::issues::Issue;

/// Result of analysing the scanned templates.
#[derive(Debug)]
pub struct CommandResult {
    /// All issues found, sorted by file, position and rule.
    pub issues: Vec<Issue>,
    pub error_count: usize,
    pub warning_count: usize,
    /// Number of templates that failed to read or parse.
    pub parse_error_count: usize,
    /// Number of template files that were scanned.
    pub files_checked: usize,
}

impl CommandResult {
    pub fn fixable_count(&self) -> usize {
        self.issues.iter().filter(|i| i.has_fix()).count()
    }
}
