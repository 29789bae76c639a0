//! One-shot health probing.
//!
//! # Responsibilities
//! - Issue a single GET against a component's `/health` endpoint
//! - Bound the probe with a timeout
//! - Collapse every outcome into Up or Down
//!
//! The restart decision belongs to whoever runs the probe (Docker
//! `HEALTHCHECK`, a kubelet, an operator with `rngctl`).

use std::time::Duration;

use tokio::time;
use url::Url;

use crate::health::HealthStatus;

/// Health endpoint under `base`. A base with a path prefix must end in `/`
/// for the prefix to be kept, as with any relative URL reference.
pub fn health_url(base: &Url) -> Result<Url, url::ParseError> {
    base.join("health")
}

/// Probe `<base>/health` once.
pub async fn probe_health(client: &reqwest::Client, base: &Url, timeout: Duration) -> HealthStatus {
    let url = match health_url(base) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(base = %base, error = %e, "Failed to build health check URL");
            return HealthStatus::Down;
        }
    };

    let request = client
        .get(url.clone())
        .header("user-agent", "flaky-rng-health-check")
        .send();

    match time::timeout(timeout, request).await {
        Ok(Ok(response)) => {
            let status = response.status();
            if status.is_success() {
                tracing::debug!(url = %url, status = %status, "Health check passed");
                HealthStatus::Up
            } else {
                tracing::warn!(url = %url, status = %status, "Health check failed: non-success status");
                HealthStatus::Down
            }
        }
        Ok(Err(e)) => {
            tracing::warn!(url = %url, error = %e, "Health check failed: connection error");
            HealthStatus::Down
        }
        Err(_) => {
            tracing::warn!(url = %url, timeout = ?timeout, "Health check failed: timeout");
            HealthStatus::Down
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(base: &str) -> String {
        health_url(&Url::parse(base).unwrap()).unwrap().to_string()
    }

    #[test]
    fn test_health_url_keeps_path_prefix() {
        assert_eq!(joined("http://127.0.0.1:5000"), "http://127.0.0.1:5000/health");
        assert_eq!(joined("http://127.0.0.1:5000/"), "http://127.0.0.1:5000/health");
        assert_eq!(joined("http://host/svc/"), "http://host/svc/health");
    }
}
