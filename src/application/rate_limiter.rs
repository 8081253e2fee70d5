/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client side throttling of REST requests.
//!
//! A `governor` token bucket replenishes `max_requests` cells per
//! `period_seconds` and holds at most `burst_size` of them.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

const FALLBACK_BURST: NonZeroU32 = NonZeroU32::MIN.saturating_add(9);

/// Token bucket shared by every request of a transport
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a limiter from configuration
    ///
    /// # Example
    ///
    /// ```
    /// use v20_client::application::config::RateLimiterConfig;
    /// use v20_client::application::rate_limiter::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(&RateLimiterConfig {
    ///     max_requests: 100,
    ///     period_seconds: 1,
    ///     burst_size: 10,
    /// });
    /// assert!(limiter.check());
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let burst = NonZeroU32::new(config.burst_size).unwrap_or(FALLBACK_BURST);
        let period = Duration::from_secs(config.period_seconds.max(1));
        let per_cell = period / config.max_requests.max(1);

        let quota = Quota::with_period(per_cell)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until the bucket holds a cell, then takes it
    pub async fn wait(&self) {
        while self.limiter.check().is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Takes a cell if one is available right now
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
