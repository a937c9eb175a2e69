//! Rate-limited request queue shared by all outbound API calls.

use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;

use tokio::sync::{Mutex, Semaphore};
use tokio::time::{sleep, Instant};

/// Default maximum number of concurrently executing calls.
pub const DEFAULT_MAX_CONCURRENT: usize = 5;
/// Default maximum number of call starts per window.
pub const DEFAULT_MAX_STARTS: usize = 5;
/// Default rolling window length.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(1000);

/// Admission gate for outbound API calls.
///
/// Bounds both the number of concurrently executing calls and the number of
/// call starts within a rolling time window. Excess submissions queue in
/// FIFO order until capacity frees. A scheduled call's failure passes
/// through unchanged; the limiter never retries.
///
/// One limiter can be shared by several [`crate::PoeWatch`] clients through
/// [`crate::Options::limiter`] so the combined traffic stays within the
/// remote API's limits.
pub struct RequestLimiter {
    semaphore: Semaphore,
    starts: Mutex<VecDeque<Instant>>,
    max_starts: usize,
    window: Duration,
}

impl RequestLimiter {
    /// Creates a limiter admitting at most `max_concurrent` executing calls
    /// and at most `max_starts` call starts per rolling `window`.
    ///
    /// Limits below 1 are clamped to 1.
    pub fn new(max_concurrent: usize, max_starts: usize, window: Duration) -> Self {
        Self {
            semaphore: Semaphore::new(max_concurrent.max(1)),
            starts: Mutex::new(VecDeque::with_capacity(max_starts.max(1))),
            max_starts: max_starts.max(1),
            window,
        }
    }

    /// Runs `call` once both a concurrency slot and a window slot are free.
    pub async fn schedule<F, T>(&self, call: F) -> T
    where
        F: Future<Output = T>,
    {
        // Both the semaphore and the mutex queue waiters in FIFO order, so
        // calls are admitted in submission order.
        let _permit = self.semaphore.acquire().await.unwrap();
        self.wait_for_start_slot().await;
        call.await
    }

    async fn wait_for_start_slot(&self) {
        let mut starts = self.starts.lock().await;
        loop {
            let now = Instant::now();
            while let Some(&oldest) = starts.front() {
                if now.duration_since(oldest) >= self.window {
                    starts.pop_front();
                } else {
                    break;
                }
            }

            if starts.len() < self.max_starts {
                starts.push_back(now);
                return;
            }

            // Window is full: sleep until the oldest start ages out. The
            // lock stays held across the sleep so later submissions cannot
            // overtake this one.
            let oldest = match starts.front() {
                Some(&instant) => instant,
                None => continue,
            };
            sleep(self.window - now.duration_since(oldest)).await;
        }
    }
}

impl Default for RequestLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONCURRENT, DEFAULT_MAX_STARTS, DEFAULT_WINDOW)
    }
}

#[cfg(test)]
#[path = "limiter_tests.rs"]
mod tests;
