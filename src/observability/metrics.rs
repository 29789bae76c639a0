//! Metrics collection and exposition.
//!
//! # Metrics
//! - `rng_values_produced_total` (counter): values served
//! - `rng_exhausted_total` (counter): requests refused after the budget ran out
//! - `rng_success_count` (gauge): current value of the success counter
//! - `rng_health_checks_total` (counter): probes by reported status
//! - `client_fetch_total` (counter): upstream fetches by outcome
//! - `client_fetch_duration_seconds` (histogram): upstream fetch latency
//! - `worker_ticks_total` (counter): worker iterations completed
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::health::HealthStatus;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_value_produced(success_count: u64) {
    metrics::counter!("rng_values_produced_total").increment(1);
    metrics::gauge!("rng_success_count").set(success_count as f64);
}

pub fn record_exhausted() {
    metrics::counter!("rng_exhausted_total").increment(1);
}

pub fn record_health_check(status: HealthStatus) {
    metrics::counter!("rng_health_checks_total", "status" => status.as_str()).increment(1);
}

pub fn record_client_fetch(outcome: &'static str, start: Instant) {
    metrics::counter!("client_fetch_total", "outcome" => outcome).increment(1);
    metrics::histogram!("client_fetch_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_worker_tick() {
    metrics::counter!("worker_ticks_total").increment(1);
}
