pub mod handlers;

use crate::presentation::cli::Cli;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = handlers::handle_concat(cli);
    if let Some(msg) = outcome.message() {
        eprintln!("{msg}");
    }
    ExitCode::from(outcome.code())
}

// stdout carries segment bytes, so diagnostics always go to stderr
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
