//! Failure-injecting number service, resilient greeter client and
//! restart-policy worker, for exercising container health checks.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────┐  GET /rng   ┌──────────────────────────┐
//!   │   greeter    │────────────▶│       number service     │
//!   │  (client)    │◀────────────│  FailureInjectingService │
//!   │ GET /        │ 200 | 500   │  GET /rng   GET /health  │
//!   │ GET /health  │             └────────────▲─────────────┘
//!   └──────▲───────┘                          │ polls /health
//!          │ polls /health           ┌────────┴─────────┐
//!          └─────────────────────────│  orchestrator    │  (external;
//!                                    │  restart policy  │   rngctl health
//!                                    └──────────────────┘   can stand in)
//! ```
//!
//! Cross-cutting: `config` (TOML + env), `observability` (tracing, metrics),
//! `http` (request IDs, timeouts), `lifecycle` (signals, graceful shutdown).

pub mod client;
pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod service;
pub mod worker;

pub use client::{ClientOutcome, ResilientClient};
pub use config::AppConfig;
pub use health::HealthStatus;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use service::FailureInjectingService;
