//! Call-rate pacing and throttle recovery
//!
//! The remote API enforces a per-minute call budget and answers HTTP 429
//! when it is exceeded. This module provides the two suspension points the
//! crawler uses:
//! - `acquire` paces outgoing calls so the long-run rate stays within budget
//! - `penalize` pauses for a fixed cooldown after the remote has already
//!   rejected a call, before that call is replayed

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Paces external calls to a fixed calls-per-minute budget
///
/// After N consecutive `acquire` calls the elapsed wall time is at least
/// `(N-1) * 60/budget` seconds. `acquire` never fails; it only delays.
///
/// The pacing state sits behind a mutex so one limiter instance can be
/// shared across concurrently running branches: the budget is a global
/// resource, not a per-branch one.
pub struct RateLimiter {
    /// Minimum spacing between two granted calls
    interval: Duration,

    /// Pause applied after a remote throttling signal
    cooldown: Duration,

    /// Earliest instant at which the next call may go out
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Creates a limiter for the given calls-per-minute budget
    ///
    /// # Arguments
    ///
    /// * `calls_per_minute` - The external call budget, must be > 0
    /// * `cooldown` - How long to pause when the remote signals throttling
    pub fn new(calls_per_minute: u32, cooldown: Duration) -> Self {
        Self {
            interval: Duration::from_secs_f64(60.0 / calls_per_minute as f64),
            cooldown,
            next_slot: Mutex::new(None),
        }
    }

    /// Waits until the next call is allowed under the rate budget
    pub async fn acquire(&self) {
        let wake = {
            let mut slot = self.next_slot.lock().await;
            let now = Instant::now();
            let wake = match *slot {
                Some(at) if at > now => at,
                _ => now,
            };
            *slot = Some(wake + self.interval);
            wake
        };

        tokio::time::sleep_until(wake).await;
    }

    /// Pauses for the configured cooldown after a throttling rejection
    ///
    /// The caller replays the identical query once this returns.
    pub async fn penalize(&self) {
        tracing::warn!("Remote throttled us, cooling down for {:?}", self.cooldown);
        tokio::time::sleep(self.cooldown).await;
    }

    /// Returns the spacing enforced between consecutive calls
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_acquire_paces_consecutive_calls() {
        // 120 calls/minute -> 500ms between calls
        let limiter = RateLimiter::new(120, Duration::from_secs(60));
        let start = Instant::now();

        for _ in 0..4 {
            limiter.acquire().await;
        }

        // 4 acquires must span at least 3 intervals
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_acquire_is_immediate() {
        let limiter = RateLimiter::new(60, Duration::from_secs(60));
        let start = Instant::now();

        limiter.acquire().await;

        assert!(start.elapsed() < Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_penalize_waits_full_cooldown() {
        let limiter = RateLimiter::new(60, Duration::from_secs(60));
        let start = Instant::now();

        limiter.penalize().await;

        assert!(start.elapsed() >= Duration::from_secs(60));
    }

    #[test]
    fn test_interval_from_budget() {
        let limiter = RateLimiter::new(100, Duration::from_secs(60));
        assert_eq!(limiter.interval(), Duration::from_millis(600));

        let limiter = RateLimiter::new(50, Duration::from_secs(60));
        assert_eq!(limiter.interval(), Duration::from_millis(1200));
    }
}
