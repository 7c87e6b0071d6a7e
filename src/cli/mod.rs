//! CLI module: argument parsing and command dispatch.

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Command};
pub use errors::CliError;

/// Parse arguments, initialize logging, and dispatch to the command.
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    commands::dispatch(cli).await
}
