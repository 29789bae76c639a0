//! Greeter: fetches a number from the flaky service and greets with it.
//!
//! Upstream trouble never breaks the greeting; `GET /` always answers 200 and
//! `GET /health` always reports the greeter itself as alive.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use flaky_rng::client::{self, ResilientClient};
use flaky_rng::config::load_config;
use flaky_rng::lifecycle::startup;
use flaky_rng::observability::logging;

#[derive(Parser)]
#[command(name = "greeter")]
#[command(about = "Greets with a number fetched from the flaky-rng service", long_about = None)]
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

    let resilient = ResilientClient::from_config(&config.client)?;
    tracing::info!(
        bind_address = %config.client.bind_address,
        upstream = %resilient.rng_url(),
        request_timeout_ms = config.client.request_timeout_ms,
        "greeter v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let app = client::router(Arc::new(resilient));
    startup::serve("greeter", &config.client.bind_address, app, &config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
