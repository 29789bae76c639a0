//! Resilient client ("greeter") for the number service.
//!
//! # Data Flow
//! ```text
//! GET /       → handlers.rs
//!             → fetch.rs (one GET /rng, bounded by timeouts)
//!             → outcome.rs (NumericValue | StatusError | Unavailable)
//!             → greeting.rs → 200 text
//! GET /health → 200 "Status OK." (never calls upstream)
//! ```
//!
//! # Design Decisions
//! - Upstream failures are values, not errors
//! - Transport errors are classified into a closed set; the rest propagate

pub mod error;
pub mod fetch;
pub mod greeting;
pub mod handlers;
pub mod outcome;

pub use error::ClientError;
pub use fetch::ResilientClient;
pub use greeting::render_greeting;
pub use handlers::router;
pub use outcome::{ClientOutcome, TransportFailure};
