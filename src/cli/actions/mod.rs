//! Actions for processing i18n issues.
//!
//! Actions convert Issues into Operations and execute them.
//!
//! ## Architecture
//!
//! ```text
//! Issue (problem detected, may carry a Fix)
//!     ↓
//! Action (Issue → Operation conversion)
//!     ↓
//! Operation (low-level file edit)
//!     ↓
//! execute (file modification)
//! ```
//!
//! ## Actions
//!
//! - [`ApplyFixes`]: Insert the autofix text of each fixable issue (fix)

mod apply_fixes;
mod operation;
mod traits;

pub use apply_fixes::ApplyFixes;
pub use operation::Operation;
pub use traits::{Action, ActionStats};
