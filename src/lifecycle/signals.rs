//! OS signal handling.
//!
//! SIGTERM (container stop) and SIGINT (Ctrl+C) both request a graceful
//! shutdown. Uses Tokio's signal handling, so it is async-safe.

use std::fmt;
use std::io;

/// Signal that asked the process to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationSignal::Interrupt => f.write_str("SIGINT"),
            TerminationSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Wait for the first termination signal.
#[cfg(unix)]
pub async fn termination_signal() -> io::Result<TerminationSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            Ok(TerminationSignal::Interrupt)
        }
        _ = terminate.recv() => Ok(TerminationSignal::Terminate),
    }
}

#[cfg(not(unix))]
pub async fn termination_signal() -> io::Result<TerminationSignal> {
    tokio::signal::ctrl_c().await?;
    Ok(TerminationSignal::Interrupt)
}
