use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Template files, sorted for deterministic reporting.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Collect template files under `base_dir`.
///
/// `includes` entries are directories, explicit files, or glob patterns
/// matching directories; an empty list scans `base_dir` itself. Explicit
/// files are taken as-is, everything found by walking must carry one of
/// `extensions`.
pub fn scan_files(
    base_dir: &Path,
    includes: &[String],
    ignore_patterns: &[String],
    extensions: &[String],
) -> ScanResult {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => warn!(pattern = %p, error = %e, "invalid ignore pattern"),
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let is_ignored = |path: &Path| {
        let path_str = path.to_string_lossy();
        literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
            || glob_patterns.iter().any(|p| p.matches(&path_str))
    };

    let roots: Vec<PathBuf> = if includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                let full_pattern = base_dir.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten().filter(|e| e.is_dir())),
                    Err(e) => warn!(pattern = %inc, error = %e, "invalid include pattern"),
                }
            } else {
                let path = base_dir.join(inc);
                if path.exists() {
                    paths.push(path);
                } else {
                    warn!(path = %path.display(), "include path does not exist");
                }
            }
        }
        paths
    };

    for root in roots {
        if root.is_file() {
            if !is_ignored(&root) {
                files.insert(root.to_string_lossy().into_owned());
            }
            continue;
        }

        for entry in WalkDir::new(&root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    warn!(error = %e, "cannot access path");
                    continue;
                }
            };
            let path = entry.path();
            if is_ignored(path) {
                continue;
            }
            if path.is_file() && has_extension(path, extensions) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    debug!(count = files.len(), skipped = skipped_count, "scanned template files");
    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
