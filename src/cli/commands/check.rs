//! Check command - report i18n coverage issues.

use anyhow::Result;

use super::super::{
    args::{CheckCommand, OutputFormat},
    exit_status::ExitStatus,
    report,
};
use super::helper::analyze;
use crate::core::CheckContext;

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    let result = analyze(&ctx);

    match cmd.format {
        OutputFormat::Text => report::print(&result),
        OutputFormat::Json => report::print_json(&result)?,
    }

    Ok(ExitStatus::from_error_count(result.error_count))
}
