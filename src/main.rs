//! Failure-injecting random number service.
//!
//! Serves `GET /rng` until its success budget (`BREAK_APP_COUNTER`, default 5)
//! is spent, then fails every value request. `GET /health` reports 500 from
//! that point on so the orchestrator restarts the container.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use flaky_rng::config::load_config;
use flaky_rng::lifecycle::startup;
use flaky_rng::observability::logging;
use flaky_rng::service::{self, FailureInjectingService};

#[derive(Parser)]
#[command(name = "flaky-rng")]
#[command(about = "Random number service that degrades after a fixed number of answers", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.service.bind_address,
        failure_threshold = config.service.failure_threshold.get(),
        "flaky-rng v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let rng_service = Arc::new(FailureInjectingService::new(config.service.failure_threshold));
    let app = service::router(rng_service);

    startup::serve("rng-service", &config.service.bind_address, app, &config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
