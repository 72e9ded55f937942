mod cli;
mod commands;
mod error;
mod output;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shellysync_core::Reconciler;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        // Failed means the diagnostics already went to stderr.
        if !matches!(err, CliError::Failed) {
            eprintln!("error: {err}");
        }
        std::process::exit(err.exit_code());
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let recon = Reconciler::new().with_timeout(Duration::from_secs(cli.global.timeout));

    tracing::debug!(command = ?cli.command, "dispatching command");
    commands::dispatch(cli.command, &recon, &cli.global).await
}
