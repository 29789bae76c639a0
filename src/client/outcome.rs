//! Typed results of a single upstream fetch.

use std::error::Error as StdError;
use std::fmt;
use std::io;

/// Result of asking the number service for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientOutcome {
    /// Upstream answered 2xx with a number.
    NumericValue(i64),
    /// Upstream was reachable but answered with a non-success status.
    StatusError(u16),
    /// Upstream could not be reached or its answer could not be read.
    Unavailable(TransportFailure),
}

impl ClientOutcome {
    /// Label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientOutcome::NumericValue(_) => "number",
            ClientOutcome::StatusError(_) => "status_error",
            ClientOutcome::Unavailable(_) => "unavailable",
        }
    }

    /// Phrase shown to users when there is no number.
    pub fn fallback_text(&self) -> Option<&'static str> {
        match self {
            ClientOutcome::NumericValue(_) => None,
            ClientOutcome::StatusError(_) => Some("Status error!"),
            ClientOutcome::Unavailable(_) => Some("Service unavailable!"),
        }
    }
}

/// Recoverable network-layer failures. Anything else is a programming fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    ConnectionRefused,
    Timeout,
    Dns,
    /// Other connection-level I/O failure (reset, aborted, unreachable).
    Connect,
    /// Response arrived but the body was not the expected payload.
    MalformedResponse,
}

impl TransportFailure {
    /// Map a `reqwest` error onto the closed set of recoverable failures.
    ///
    /// Returns `None` for errors that are not caused by the network, such as
    /// a request that could not be built.
    pub fn classify(err: &reqwest::Error) -> Option<Self> {
        if err.is_builder() {
            return None;
        }
        if err.is_timeout() {
            return Some(TransportFailure::Timeout);
        }
        if err.is_decode() || err.is_body() || err.is_redirect() {
            return Some(TransportFailure::MalformedResponse);
        }
        if err.is_connect() {
            if has_io_kind(err, io::ErrorKind::ConnectionRefused) {
                return Some(TransportFailure::ConnectionRefused);
            }
            if is_dns_failure(err) {
                return Some(TransportFailure::Dns);
            }
            return Some(TransportFailure::Connect);
        }
        if err.is_request() {
            return Some(TransportFailure::Connect);
        }
        None
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TransportFailure::ConnectionRefused => "connection refused",
            TransportFailure::Timeout => "timed out",
            TransportFailure::Dns => "name resolution failed",
            TransportFailure::Connect => "connection failed",
            TransportFailure::MalformedResponse => "malformed response",
        };
        f.write_str(text)
    }
}

fn sources(err: &reqwest::Error) -> impl Iterator<Item = &(dyn StdError + 'static)> {
    std::iter::successors(err.source(), |&e| e.source())
}

fn has_io_kind(err: &reqwest::Error, kind: io::ErrorKind) -> bool {
    sources(err)
        .filter_map(|e| e.downcast_ref::<io::Error>())
        .any(|e| e.kind() == kind)
}

// hyper-util reports resolver failures as a ConnectError whose message starts with "dns error".
fn is_dns_failure(err: &reqwest::Error) -> bool {
    sources(err).any(|e| {
        let text = e.to_string();
        text.contains("dns error") || text.contains("failed to lookup address")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_fallbacks() {
        assert_eq!(ClientOutcome::NumericValue(3).kind(), "number");
        assert_eq!(ClientOutcome::NumericValue(3).fallback_text(), None);
        assert_eq!(
            ClientOutcome::StatusError(500).fallback_text(),
            Some("Status error!")
        );
        assert_eq!(
            ClientOutcome::Unavailable(TransportFailure::Timeout).fallback_text(),
            Some("Service unavailable!")
        );
    }

    #[tokio::test]
    async fn test_classify_refused_connection() {
        // Grab a free port, then release it so nothing listens there.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap()
            .get(format!("http://{}/rng", addr))
            .send()
            .await
            .unwrap_err();

        assert_eq!(
            TransportFailure::classify(&err),
            Some(TransportFailure::ConnectionRefused)
        );
    }

    #[tokio::test]
    async fn test_classify_unresolvable_host() {
        let err = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap()
            .get("http://no-such-host.invalid:5000/rng")
            .send()
            .await
            .unwrap_err();

        assert_eq!(TransportFailure::classify(&err), Some(TransportFailure::Dns));
    }

    #[tokio::test]
    async fn test_classify_builder_error_is_not_transport() {
        let err = reqwest::Client::new()
            .get("not a url")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_builder());
        assert_eq!(TransportFailure::classify(&err), None);
    }
}
