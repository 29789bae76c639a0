//! Liveness status reported by health endpoints.
//!
//! # States
//! - Up: the instance can still do useful work (HTTP 200)
//! - Down: the instance should be restarted or replaced (HTTP 500)
//!
//! There is deliberately no third "degraded" state.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Health as seen by an external monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Up,
    Down,
}

impl HealthStatus {
    /// Derive health from a spent budget.
    pub fn from_budget(spent: u64, budget: u64) -> Self {
        if spent < budget {
            HealthStatus::Up
        } else {
            HealthStatus::Down
        }
    }

    pub fn is_up(self) -> bool {
        self == HealthStatus::Up
    }

    /// Label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Up => "up",
            HealthStatus::Down => "down",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize)]
struct HealthReport {
    status: &'static str,
}

impl IntoResponse for HealthStatus {
    fn into_response(self) -> Response {
        match self {
            HealthStatus::Up => Json(HealthReport { status: self.as_str() }).into_response(),
            HealthStatus::Down => (StatusCode::INTERNAL_SERVER_ERROR, "Error").into_response(),
        }
    }
}
