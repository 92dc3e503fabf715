use std::{
    cell::OnceCell,
    collections::{BTreeMap, BTreeSet},
    path::PathBuf,
};

use anyhow::{Context as _, Result};
use colored::Colorize;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        file_scanner::scan_files,
        parsers::{ParsedTemplate, parse_template_source},
    },
    issues::ParseErrorIssue,
    rules::RuleSettings,
};

/// Per-run analysis state.
///
/// Holds the merged configuration, the scanned template files and the
/// resolved rule settings. Parsing happens lazily on first access so that
/// commands which never look at templates (`init`, `--help`) stay cheap.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--no-check-id`, positional paths)
/// 2. `.i18nlintrc.json`
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory the config was searched from and includes resolve against.
    pub root_dir: PathBuf,

    /// Template files to analyze.
    pub files: BTreeSet<String>,

    /// Rule options and ignore set, resolved once.
    pub settings: RuleSettings,

    /// Parsed tree for each template, keyed by file path.
    parsed_templates: OnceCell<BTreeMap<String, ParsedTemplate>>,

    /// Templates that could not be read or parsed.
    /// Populated alongside `parsed_templates`.
    parse_errors: OnceCell<Vec<ParseErrorIssue>>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is unreadable or invalid.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = PathBuf::from(".");

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            debug!("no config file found, using defaults");
        }

        let mut config = config_result.config;
        common_args.apply_overrides(&mut config);
        config
            .validate()
            .context("Invalid configuration after applying command line overrides")?;

        let scan_result = scan_files(
            &root_dir,
            &config.includes,
            &config.ignores,
            &config.extensions,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if common_args.verbose {
                    ""
                } else {
                    " (use -v for details)"
                }
            );
        }

        let settings = RuleSettings::new(config.rule.clone());

        Ok(Self::from_parts(config, root_dir, scan_result.files, settings))
    }

    /// Assemble a context from already-resolved pieces.
    pub fn from_parts(
        config: Config,
        root_dir: PathBuf,
        files: BTreeSet<String>,
        settings: RuleSettings,
    ) -> Self {
        Self {
            config,
            root_dir,
            files,
            settings,
            parsed_templates: OnceCell::new(),
            parse_errors: OnceCell::new(),
        }
    }

    /// Get the parsed tree of every template (lazy initialization).
    ///
    /// Files are read and parsed in parallel. Failures are collected
    /// separately and can be retrieved via `parse_errors()`.
    pub fn parsed_templates(&self) -> &BTreeMap<String, ParsedTemplate> {
        self.parsed_templates.get_or_init(|| {
            let parse_results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let parse_result = std::fs::read_to_string(file_path)
                        .with_context(|| format!("Failed to read file: {}", file_path))
                        .and_then(|code| parse_template_source(code, file_path));
                    (file_path.clone(), parse_result)
                })
                .collect();

            let mut parsed = BTreeMap::new();
            let mut errors = Vec::new();

            for (file_path, result) in parse_results {
                match result {
                    Ok(p) => {
                        parsed.insert(file_path, p);
                    }
                    Err(e) => {
                        warn!(file = %file_path, error = %format!("{:#}", e), "skipping template");
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: format!("{:#}", e),
                        });
                    }
                }
            }

            debug!(parsed = parsed.len(), failed = errors.len(), "parsed templates");
            let _ = self.parse_errors.set(errors);
            parsed
        })
    }

    /// Get templates that failed to read or parse.
    pub fn parse_errors(&self) -> &Vec<ParseErrorIssue> {
        self.parsed_templates();
        self.parse_errors.get_or_init(Vec::new)
    }
}
