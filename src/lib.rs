//! i18n-lint - i18n coverage checker for Angular templates
//!
//! Flags template markup that is missing i18n markers or stable message
//! ids, and offers autofixes that insert the missing markers.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, fix actions)
//! - `config`: Configuration file loading and parsing
//! - `core`: Template AST, parser, source positions and run context
//! - `issues`: Issue type definitions and reporting
//! - `rules`: The i18n coverage rule

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
