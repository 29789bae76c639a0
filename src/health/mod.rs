//! Health reporting subsystem.
//!
//! # Data Flow
//! ```text
//! Service side (status.rs):
//!     success budget → HealthStatus (Up | Down) → GET /health (200 | 500)
//!
//! Observer side (probe.rs):
//!     GET <base>/health with timeout → HealthStatus
//!     → exit code / restart decision (external)
//! ```
//!
//! # Design Decisions
//! - Health is derived on every probe, never stored
//! - Probing never mutates business state
//! - Exactly two outcomes, no "degraded" middle ground

pub mod probe;
pub mod status;

pub use probe::probe_health;
pub use status::HealthStatus;
