//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report i18n coverage issues in templates
//! - `fix`: Apply autofixes (dry-run unless `--apply`)
//! - `init`: Write a default `.i18nlintrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Fix(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `check` and `fix`.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Files or directories to check (overrides `includes` from config)
    pub paths: Vec<PathBuf>,

    /// Do not report markers without a custom message id
    #[arg(long)]
    pub no_check_id: bool,

    /// Do not report elements with untranslated text
    #[arg(long)]
    pub no_check_text: bool,

    /// Do not report attributes without an i18n marker
    #[arg(long)]
    pub no_check_attributes: bool,

    /// Attribute name to ignore, in addition to config (repeatable)
    #[arg(long = "ignore-attribute", value_name = "NAME")]
    pub ignore_attributes: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Apply command line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if !self.paths.is_empty() {
            config.includes = self
                .paths
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
        }
        if self.no_check_id {
            config.rule.check_id = false;
        }
        if self.no_check_text {
            config.rule.check_text = false;
        }
        if self.no_check_attributes {
            config.rule.check_attributes = false;
        }
        config
            .rule
            .ignore_attributes
            .extend(self.ignore_attributes.iter().cloned());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, cargo-style output
    Text,
    /// Machine-readable JSON on stdout
    Json,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually modify files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check templates for missing i18n markers and message ids
    Check(CheckCommand),
    /// Insert missing i18n markers using the autofixes from `check`
    Fix(FixCommand),
    /// Initialize a new .i18nlintrc.json configuration file
    Init,
}
