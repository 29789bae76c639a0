use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use url::Url;

use flaky_rng::client::{render_greeting, ResilientClient};
use flaky_rng::health::probe_health;

#[derive(Parser)]
#[command(name = "rngctl")]
#[command(about = "Probe and query flaky-rng components", long_about = None)]
struct Cli {
    /// Timeout for the single request issued, in milliseconds.
    #[arg(short, long, default_value_t = 2000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe a component's /health endpoint; exit 0 when up, 1 otherwise
    Health {
        #[arg(short, long, default_value = "http://localhost:5000")]
        url: String,
    },
    /// Fetch one number through the resilient client and print the greeting
    Fetch {
        #[arg(short, long, default_value = "localhost:5000")]
        address: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let timeout = Duration::from_millis(cli.timeout_ms);

    match cli.command {
        Commands::Health { url } => {
            let base = Url::parse(&url)?;
            let client = reqwest::Client::builder().no_proxy().build()?;
            let status = probe_health(&client, &base, timeout).await;
            println!("{}", status);
            Ok(if status.is_up() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Fetch { address } => {
            let client = ResilientClient::new(&address, timeout, timeout)?;
            let outcome = client.fetch_number().await?;
            println!("{}", render_greeting(&outcome));
            Ok(ExitCode::SUCCESS)
        }
    }
}
