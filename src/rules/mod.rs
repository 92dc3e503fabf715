//! Rule implementations.
//!
//! ## Module Structure
//!
//! - `i18n`: i18n coverage of template elements and attributes

pub mod i18n;

pub use i18n::{RuleOptions, RuleSettings, check_i18n_issues, check_template};
