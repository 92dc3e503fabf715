//! i18n coverage rule for Angular-style templates.
//!
//! Flags nodes and attributes that are missing i18n markers, and markers
//! that are missing a custom message id:
//!
//! - `i18n-missing-id`: node marker without `@@id`
//! - `i18n-missing-id-on-attribute`: `i18n-<attr>` marker without `@@id`
//! - `i18n-missing-text`: node with direct text children and no marker (autofix)
//! - `i18n-missing-attribute`: human-readable attribute with no marker
//!   (autofix, plus a suggestion to ignore the attribute)

mod attributes;
mod element;
mod exemption;
mod ignore_set;
mod locator;
mod visitor;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use exemption::is_exempt;
pub use ignore_set::{DEFAULT_IGNORED_ATTRIBUTES, IgnoreSet};
pub use locator::{NodeLocation, locate};
pub use visitor::I18nChecker;

use crate::{
    core::{CheckContext, SourceContext, SpanConverter, TemplateNode, Visit, parsers::ParsedTemplate},
    issues::Issue,
};

/// User-facing rule options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleOptions {
    #[serde(default = "default_true")]
    pub check_id: bool,
    #[serde(default = "default_true")]
    pub check_text: bool,
    #[serde(default = "default_true")]
    pub check_attributes: bool,
    #[serde(default)]
    pub ignore_attributes: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            check_id: true,
            check_text: true,
            check_attributes: true,
            ignore_attributes: Vec::new(),
        }
    }
}

/// Options plus the resolved ignore set, built once and shared read-only
/// across files.
#[derive(Debug, Clone)]
pub struct RuleSettings {
    pub options: RuleOptions,
    pub ignore_set: IgnoreSet,
}

impl RuleSettings {
    pub fn new(options: RuleOptions) -> Self {
        let ignore_set = IgnoreSet::resolve(&options.ignore_attributes);
        Self {
            options,
            ignore_set,
        }
    }
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self::new(RuleOptions::default())
    }
}

/// Per-node input shared by the attribute and element inspectors.
pub struct NodeCheck<'a> {
    pub context: &'a SourceContext,
    pub insertion_offset: usize,
    pub settings: &'a RuleSettings,
}

/// Check one parsed template.
pub fn check_template(parsed: &ParsedTemplate, settings: &RuleSettings) -> Vec<Issue> {
    let index = parsed.line_index();
    check_nodes(&parsed.file_path, &parsed.nodes, &index, settings)
}

/// Check a node list with any span converter. Issues come back in
/// visitation order.
pub fn check_nodes<C: SpanConverter + ?Sized>(
    file_path: &str,
    nodes: &[TemplateNode],
    converter: &C,
    settings: &RuleSettings,
) -> Vec<Issue> {
    let mut checker = I18nChecker::new(file_path, converter, settings);
    checker.visit_nodes(nodes);
    debug!(file = file_path, issues = checker.issues.len(), "checked template");
    checker.issues
}

/// Check every parsed template in the context, one file per rayon task.
pub fn check_i18n_issues(ctx: &CheckContext) -> Vec<Issue> {
    let settings = &ctx.settings;
    ctx.parsed_templates()
        .par_iter()
        .flat_map_iter(|(_, parsed)| check_template(parsed, settings))
        .collect()
}
