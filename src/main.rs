use std::process::ExitCode;

use clap::Parser;
use i18n_lint::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match i18n_lint::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Diagnostics go to stderr. `RUST_LOG` wins; otherwise `-v` enables
/// debug output for this crate and everything else stays off.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "i18n_lint=debug" } else { "off" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
