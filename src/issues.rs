//! Issue types for i18n coverage results.
//!
//! Each issue is self-contained with everything needed by:
//! - Reporter: to display the issue (text or JSON)
//! - Action: to apply its autofix

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::SourceContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Message kind of each issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingAttribute,
    MissingIdOnAttribute,
    MissingId,
    MissingText,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingAttribute => write!(f, "i18n-missing-attribute"),
            Rule::MissingIdOnAttribute => write!(f, "i18n-missing-id-on-attribute"),
            Rule::MissingId => write!(f, "i18n-missing-id"),
            Rule::MissingText => write!(f, "i18n-missing-text"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

/// Message kind of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// Add the attribute to the `ignoreAttributes` option.
    IgnoreAttribute,
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionKind::IgnoreAttribute => write!(f, "i18n-suggest-ignore"),
        }
    }
}

impl Serialize for SuggestionKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================
// Fixes and Suggestions
// ============================================================

/// A single text replacement. Zero-width ranges are insertions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    /// Start byte offset.
    pub start: usize,
    /// End byte offset.
    pub end: usize,
    pub new_text: String,
}

impl TextEdit {
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            start: offset,
            end: offset,
            new_text: text.into(),
        }
    }

    pub fn is_insertion(&self) -> bool {
        self.start == self.end
    }
}

/// Machine-applicable edit attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub edit: TextEdit,
}

impl Fix {
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            edit: TextEdit::insert(offset, text),
        }
    }
}

/// User-triggered alternative action.
///
/// Unlike [`Fix`], a suggestion always has a label and may carry no edit
/// at all; `fix: None` is a no-op that only surfaces the hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub label: String,
    pub fix: Option<Fix>,
}

impl Suggestion {
    pub fn ignore_attribute(attribute: &str) -> Self {
        Self {
            kind: SuggestionKind::IgnoreAttribute,
            label: format!(
                "Add the attribute name \"{}\" to the \"ignoreAttributes\" option",
                attribute
            ),
            fix: None,
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Attribute with a human-readable value and no `i18n-<name>` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAttributeIssue {
    pub context: SourceContext,
    pub attribute: String,
    /// Inserts ` i18n-<attribute>` after the tag name.
    pub fix: Fix,
    pub suggestion: Suggestion,
}

impl MissingAttributeIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingAttribute
    }
}

/// Attribute marker without a custom message id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingIdOnAttributeIssue {
    pub context: SourceContext,
    pub attribute: String,
}

impl MissingIdOnAttributeIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingIdOnAttribute
    }
}

/// Element marker without a custom message id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingIdIssue {
    pub context: SourceContext,
    /// Tag name, empty for anonymous structural nodes.
    pub tag: String,
}

impl MissingIdIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingId
    }
}

/// Element with translatable children and no i18n marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTextIssue {
    pub context: SourceContext,
    pub tag: String,
    /// Inserts ` i18n` after the tag name.
    pub fix: Fix,
}

impl MissingTextIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingText
    }
}

/// Template could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An i18n coverage issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingAttribute(MissingAttributeIssue),
    MissingIdOnAttribute(MissingIdOnAttributeIssue),
    MissingId(MissingIdIssue),
    MissingText(MissingTextIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    pub fn has_fix(&self) -> bool {
        self.fix().is_some()
    }
}

// ============================================================
// Report Trait
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Template location with source line context.
    Source(&'a SourceContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Message text from the catalog, with data interpolated.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Offending attribute name, if the issue is about an attribute.
    fn attribute(&self) -> Option<&str> {
        None
    }

    fn fix(&self) -> Option<&Fix> {
        None
    }

    fn suggestion(&self) -> Option<&Suggestion> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingAttributeIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("Attribute \"{}\" has no i18n attribute", self.attribute)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn attribute(&self) -> Option<&str> {
        Some(&self.attribute)
    }

    fn fix(&self) -> Option<&Fix> {
        Some(&self.fix)
    }

    fn suggestion(&self) -> Option<&Suggestion> {
        Some(&self.suggestion)
    }
}

impl Report for MissingIdOnAttributeIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "Missing custom message identifier on attribute \"{}\"",
            self.attribute
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn attribute(&self) -> Option<&str> {
        Some(&self.attribute)
    }
}

impl Report for MissingIdIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        "Missing custom message identifier".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for MissingTextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        "Each element containing text node should have an i18n attribute".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn fix(&self) -> Option<&Fix> {
        Some(&self.fix)
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    fn sort_position(&self) -> (usize, usize) {
        match self.location() {
            ReportLocation::Source(ctx) => (ctx.line(), ctx.col()),
            ReportLocation::File { .. } => (0, 0),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.sort_position().cmp(&other.sort_position()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
