//! Failure-injecting number service.
//!
//! # Data Flow
//! ```text
//! GET /rng    → handlers.rs → state.rs (claim budget, draw value) → 200 {"number": n}
//!                                      (budget spent)              → 500 Error getting value
//! GET /health → handlers.rs → state.rs (read counter)              → 200 {"status":"up"} | 500
//! ```
//!
//! # Design Decisions
//! - The counter lives inside one `FailureInjectingService`, shared with
//!   handlers through axum state, never as a module-level global
//! - Exhaustion is permanent; recovery means restarting the process

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ServiceError;
pub use handlers::{router, NumberResponse};
pub use state::{BudgetState, FailureInjectingService, VALUE_RANGE};
