//! Restart-policy worker.
//!
//! Simulates a batch process with a fixed iteration budget so container
//! restart policies can be observed:
//! - budget exceeded → [`WorkerError::BudgetExceeded`] → non-zero exit
//! - SIGTERM/SIGINT   → clean stop → exit 0

use std::time::Duration;

use crate::config::WorkerConfig;
use crate::lifecycle::ShutdownListener;
use crate::observability::metrics;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkerError {
    #[error("iteration budget exceeded: counter reached {count} of {max}")]
    BudgetExceeded { count: u64, max: u64 },
}

/// Periodic worker with a bounded iteration budget.
#[derive(Debug, Clone)]
pub struct Worker {
    max_count: u64,
    tick: Duration,
}

impl Worker {
    pub fn new(max_count: u64, tick: Duration) -> Self {
        Self { max_count, tick }
    }

    pub fn from_config(config: &WorkerConfig) -> Self {
        Self::new(config.max_count, Duration::from_millis(config.tick_ms))
    }

    /// Work until the budget runs out or shutdown is requested.
    ///
    /// Returns the number of completed iterations on a clean stop.
    pub async fn run(&self, mut shutdown: ShutdownListener) -> Result<u64, WorkerError> {
        tracing::info!(max_count = self.max_count, tick = ?self.tick, "Starting processing");

        let mut counter: u64 = 1;
        loop {
            tokio::select! {
                _ = tokio::time::sleep(self.tick) => {}
                _ = shutdown.wait() => {
                    let completed = counter - 1;
                    tracing::info!(completed, "Worker stopped");
                    return Ok(completed);
                }
            }

            tracing::info!("{}/{} - Working!", counter, self.max_count);
            metrics::record_worker_tick();

            counter += 1;
            if counter >= self.max_count {
                return Err(WorkerError::BudgetExceeded {
                    count: counter,
                    max: self.max_count,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;

    #[tokio::test]
    async fn test_budget_exceeded() {
        let shutdown = Shutdown::new();
        let worker = Worker::new(3, Duration::from_millis(1));

        let err = worker.run(shutdown.listener()).await.unwrap_err();
        assert_eq!(err, WorkerError::BudgetExceeded { count: 3, max: 3 });
    }

    #[tokio::test]
    async fn test_budget_of_one_fails_after_first_iteration() {
        let shutdown = Shutdown::new();
        let worker = Worker::new(1, Duration::from_millis(1));

        let err = worker.run(shutdown.listener()).await.unwrap_err();
        assert_eq!(err, WorkerError::BudgetExceeded { count: 2, max: 1 });
    }

    #[tokio::test]
    async fn test_shutdown_stops_cleanly() {
        let shutdown = Shutdown::new();
        let worker = Worker::new(1_000, Duration::from_millis(5));
        let listener = shutdown.listener();

        let handle = tokio::spawn(async move { worker.run(listener).await });
        tokio::time::sleep(Duration::from_millis(30)).await;
        shutdown.trigger();

        let completed = handle.await.unwrap().unwrap();
        assert!(completed < 1_000);
    }

    #[tokio::test]
    async fn test_already_triggered_shutdown() {
        let shutdown = Shutdown::new();
        shutdown.trigger();

        let worker = Worker::new(5, Duration::from_secs(60));
        assert_eq!(worker.run(shutdown.listener()).await, Ok(0));
    }
}
