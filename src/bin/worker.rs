//! Restart-policy demo worker.
//!
//! Exit codes: 0 after SIGTERM/SIGINT, 1 once `MAX_COUNT` iterations are
//! exceeded, 2 on configuration errors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use flaky_rng::config::load_config;
use flaky_rng::lifecycle::Shutdown;
use flaky_rng::observability::logging;
use flaky_rng::worker::Worker;

#[derive(Parser)]
#[command(name = "worker")]
#[command(about = "Simulated batch worker that fails after a fixed number of iterations", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    logging::init_logging(&config.observability);

    let shutdown = Shutdown::new();
    let signals = shutdown.trigger_on_signal();

    let worker = Worker::from_config(&config.worker);
    let result = worker.run(shutdown.listener()).await;
    signals.abort();

    match result {
        Ok(completed) => {
            tracing::info!(completed, "Worker exited cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Worker failed");
            ExitCode::FAILURE
        }
    }
}
