//! Configuration validation.
//!
//! Serde handles syntax (including the non-zero failure threshold); this
//! module checks value ranges and addresses.
//! Every problem is reported, not just the first one.

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `client.upstream_address`.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a fully-assembled configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_socket_addr(&mut errors, "service.bind_address", &config.service.bind_address);
    check_socket_addr(&mut errors, "client.bind_address", &config.client.bind_address);

    if !is_authority(&config.client.upstream_address) {
        errors.push(ValidationError::new(
            "client.upstream_address",
            format!("'{}' is not a host:port pair", config.client.upstream_address),
        ));
    }
    if config.client.connect_timeout_ms == 0 {
        errors.push(ValidationError::new("client.connect_timeout_ms", "must be greater than zero"));
    }
    if config.client.request_timeout_ms == 0 {
        errors.push(ValidationError::new("client.request_timeout_ms", "must be greater than zero"));
    }

    if config.worker.max_count == 0 {
        errors.push(ValidationError::new("worker.max_count", "must be greater than zero"));
    }
    if config.worker.tick_ms == 0 {
        errors.push(ValidationError::new("worker.tick_ms", "must be greater than zero"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than zero"));
    }

    if let Some(addr) = &config.observability.metrics_address {
        check_socket_addr(&mut errors, "observability.metrics_address", addr);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_socket_addr(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            field,
            format!("'{}' is not a valid socket address", value),
        ));
    }
}

/// `host:port` with a non-empty host and a numeric port, no scheme or path.
fn is_authority(value: &str) -> bool {
    match value.rsplit_once(':') {
        Some((host, port)) => {
            !host.is_empty() && !host.contains('/') && port.parse::<u16>().is_ok()
        }
        None => false,
    }
}
