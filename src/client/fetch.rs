//! Single-shot fetches against the number service.
//!
//! # Responsibilities
//! - Issue one `GET /rng` per call, bounded by connect and request timeouts
//! - Fold transport failures and non-2xx answers into a [`ClientOutcome`]
//!
//! # Design Decisions
//! - No retries: restart and retry policy belong to the orchestrator
//! - Only request-construction faults escape as errors

use std::time::{Duration, Instant};

use serde::Deserialize;
use url::Url;

use crate::client::error::ClientError;
use crate::client::outcome::{ClientOutcome, TransportFailure};
use crate::config::ClientConfig;
use crate::observability::metrics;

#[derive(Deserialize)]
struct NumberPayload {
    number: serde_json::Number,
}

impl NumberPayload {
    /// Integer value of `number`. Floats count only when they have no fractional part.
    fn as_integer(&self) -> Option<i64> {
        if let Some(n) = self.number.as_i64() {
            return Some(n);
        }
        let f = self.number.as_f64()?;
        let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
        (f.fract() == 0.0 && in_range).then_some(f as i64)
    }
}

/// Caller of the number service that never fails because the service does.
#[derive(Debug, Clone)]
pub struct ResilientClient {
    http: reqwest::Client,
    rng_url: Url,
}

impl ResilientClient {
    /// Create a client for the service at `address` (`host:port`).
    pub fn new(
        address: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .no_proxy()
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            rng_url: rng_url(address)?,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.upstream_address,
            Duration::from_millis(config.connect_timeout_ms),
            Duration::from_millis(config.request_timeout_ms),
        )
    }

    /// Endpoint this client fetches from.
    pub fn rng_url(&self) -> &Url {
        &self.rng_url
    }

    /// Fetch a number from the configured upstream.
    pub async fn fetch_number(&self) -> Result<ClientOutcome, ClientError> {
        self.fetch_from(&self.rng_url).await
    }

    /// Fetch a number from another instance, reusing this client's timeouts.
    pub async fn fetch_number_at(&self, address: &str) -> Result<ClientOutcome, ClientError> {
        let url = rng_url(address)?;
        self.fetch_from(&url).await
    }

    async fn fetch_from(&self, url: &Url) -> Result<ClientOutcome, ClientError> {
        let start = Instant::now();

        let outcome = match self.http.get(url.clone()).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    match response.json::<NumberPayload>().await {
                        Ok(payload) => match payload.as_integer() {
                            Some(n) => ClientOutcome::NumericValue(n),
                            None => {
                                tracing::warn!(url = %url, number = %payload.number, "Upstream number is not an integer");
                                ClientOutcome::Unavailable(TransportFailure::MalformedResponse)
                            }
                        },
                        Err(e) => unavailable(url, e)?,
                    }
                } else {
                    tracing::warn!(url = %url, status = %status, "Upstream returned non-success status");
                    ClientOutcome::StatusError(status.as_u16())
                }
            }
            Err(e) => unavailable(url, e)?,
        };

        tracing::debug!(url = %url, outcome = ?outcome, elapsed = ?start.elapsed(), "Fetch finished");
        metrics::record_client_fetch(outcome.kind(), start);
        Ok(outcome)
    }
}

fn unavailable(url: &Url, err: reqwest::Error) -> Result<ClientOutcome, ClientError> {
    match TransportFailure::classify(&err) {
        Some(failure) => {
            tracing::warn!(url = %url, cause = %failure, error = %err, "Upstream unavailable");
            Ok(ClientOutcome::Unavailable(failure))
        }
        None => Err(ClientError::Request(err)),
    }
}

fn rng_url(address: &str) -> Result<Url, ClientError> {
    Url::parse(&format!("http://{}/rng", address)).map_err(|source| ClientError::InvalidAddress {
        address: address.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_url() {
        let client = ResilientClient::new(
            "rnd-api:5000",
            Duration::from_millis(100),
            Duration::from_millis(100),
        )
        .unwrap();
        assert_eq!(client.rng_url().as_str(), "http://rnd-api:5000/rng");
    }

    #[test]
    fn test_invalid_address() {
        let err = ResilientClient::new("bad host:5000", Duration::from_secs(1), Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidAddress { .. }));
    }

    fn payload(json: &str) -> NumberPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_payload_integer_forms() {
        assert_eq!(payload(r#"{"number":7}"#).as_integer(), Some(7));
        assert_eq!(payload(r#"{"number":-3}"#).as_integer(), Some(-3));
        assert_eq!(payload(r#"{"number":7.0}"#).as_integer(), Some(7));
        assert_eq!(payload(r#"{"number":-2.0}"#).as_integer(), Some(-2));
        assert_eq!(payload(r#"{"number":7.5}"#).as_integer(), None);
        assert_eq!(payload(r#"{"number":1e300}"#).as_integer(), None);
    }

    #[test]
    fn test_payload_rejects_non_numbers() {
        assert!(serde_json::from_str::<NumberPayload>(r#"{"number":"7"}"#).is_err());
        assert!(serde_json::from_str::<NumberPayload>(r#"{"value":7}"#).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ResilientClient::new(
            &addr.to_string(),
            Duration::from_millis(500),
            Duration::from_secs(1),
        )
        .unwrap();
        let outcome = client.fetch_number().await.unwrap();
        assert!(matches!(outcome, ClientOutcome::Unavailable(_)), "got {:?}", outcome);
    }
}
