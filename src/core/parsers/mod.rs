//! File parsers for template sources.
//!
//! - `template`: HTML template parser producing the rule-facing AST

pub mod template;

pub use template::{ParsedTemplate, parse_template, parse_template_source};
