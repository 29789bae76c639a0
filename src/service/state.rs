//! Failure-injecting number source.
//!
//! # State Transitions
//! ```text
//! Healthy (success_count < threshold)
//!     → Exhausted: right after the threshold-th successful value
//! Exhausted is terminal for the process lifetime.
//! ```
//!
//! # Design Decisions
//! - One atomic counter per instance, claimed with compare-and-swap so
//!   concurrent callers never increment from the same stale read
//! - Health reads the counter without claiming anything

use std::num::NonZeroU64;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use crate::health::HealthStatus;
use crate::observability::metrics;
use crate::service::error::ServiceError;

/// Values are drawn uniformly from this closed range.
pub const VALUE_RANGE: RangeInclusive<u32> = 0..=20;

/// Lifecycle stage of a [`FailureInjectingService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetState {
    Healthy,
    Exhausted,
}

/// Random number service with a bounded success budget.
#[derive(Debug)]
pub struct FailureInjectingService {
    /// Values successfully produced since construction.
    success_count: AtomicU64,
    failure_threshold: NonZeroU64,
}

impl FailureInjectingService {
    pub fn new(failure_threshold: NonZeroU64) -> Self {
        Self {
            success_count: AtomicU64::new(0),
            failure_threshold,
        }
    }

    pub fn success_count(&self) -> u64 {
        self.success_count.load(Ordering::Acquire)
    }

    pub fn failure_threshold(&self) -> u64 {
        self.failure_threshold.get()
    }

    pub fn state(&self) -> BudgetState {
        if self.success_count() < self.failure_threshold() {
            BudgetState::Healthy
        } else {
            BudgetState::Exhausted
        }
    }

    /// Current health. Never touches the counter.
    pub fn health(&self) -> HealthStatus {
        HealthStatus::from_budget(self.success_count(), self.failure_threshold())
    }

    /// Produce a value in [`VALUE_RANGE`], spending one unit of budget.
    pub fn produce_value(&self) -> Result<u32, ServiceError> {
        self.produce_value_with(&mut rand::thread_rng())
    }

    /// Same as [`produce_value`](Self::produce_value) with a caller-supplied RNG.
    pub fn produce_value_with<R: Rng>(&self, rng: &mut R) -> Result<u32, ServiceError> {
        let threshold = self.failure_threshold();

        let mut current = self.success_count.load(Ordering::Acquire);
        loop {
            if current >= threshold {
                metrics::record_exhausted();
                return Err(ServiceError::Exhausted {
                    produced: current,
                    threshold,
                });
            }
            match self.success_count.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }

        let produced = current + 1;
        let value = rng.gen_range(VALUE_RANGE);
        metrics::record_value_produced(produced);

        if produced == threshold {
            tracing::warn!(
                produced,
                threshold,
                "Success budget spent, instance is now exhausted"
            );
        }

        Ok(value)
    }
}
