//! Configuration schema definitions.
//!
//! This module defines the configuration shared by the service, the greeter
//! client and the worker. All types derive Serde traits for deserialization
//! from config files, and every field has a default so an empty file is valid.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Failure-injecting number service settings.
    pub service: ServiceConfig,

    /// Greeter (resilient client) settings.
    pub client: ClientConfig,

    /// Restart-policy worker settings.
    pub worker: WorkerConfig,

    /// Inbound request timeouts.
    pub timeouts: TimeoutConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Values served by a fresh instance before it turns unhealthy.
pub const DEFAULT_FAILURE_THRESHOLD: NonZeroU64 = match NonZeroU64::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Number service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,

    /// Number of values served before the instance is exhausted.
    pub failure_threshold: NonZeroU64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
        }
    }
}

/// Greeter configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Bind address for the greeter's own endpoints.
    pub bind_address: String,

    /// Upstream number service as `host:port`.
    pub upstream_address: String,

    /// Connection establishment timeout in milliseconds.
    pub connect_timeout_ms: u64,

    /// Total upstream request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            upstream_address: "localhost:5000".to_string(),
            connect_timeout_ms: 1_000,
            request_timeout_ms: 3_000,
        }
    }
}

/// Worker configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Iteration budget; the worker fails once its counter reaches this value.
    pub max_count: u64,

    /// Delay between iterations in milliseconds.
    pub tick_ms: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            max_count: 60,
            tick_ms: 1_000,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time to produce a response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    pub json_logs: bool,

    /// Prometheus exporter bind address. Metrics are disabled when unset.
    pub metrics_address: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_address: None,
        }
    }
}
