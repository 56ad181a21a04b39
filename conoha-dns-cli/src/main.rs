//! `conoha-dns` entry point
//!
//! Parses arguments, loads `~/.conoha-env`, reads settings once and runs a
//! single command on a current-thread runtime.

mod args;
mod commands;
mod config;
mod render;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use args::Cli;
use config::{Settings, default_env_file, load_env_file};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(verbose),
        )
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // clap exits with status 2 on argument errors
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let env_file = default_env_file();
    if let Some(path) = env_file.as_deref() {
        load_env_file(path);
    }

    let settings = match Settings::from_env(env_file) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Configuration error: {e}");
            eprintln!("{}", commands::describe_error(&e.into()));
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("API endpoint: {}", settings.provider.api_base_url);

    match commands::run(&cli.command, cli.format, &settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if commands::is_expected(&e) {
                tracing::warn!("Command failed: {e}");
            } else {
                tracing::error!("Command failed: {e:#}");
            }
            eprintln!("{}", commands::describe_error(&e));
            ExitCode::FAILURE
        }
    }
}
