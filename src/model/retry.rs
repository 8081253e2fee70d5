/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRY_COUNT, DEFAULT_RETRY_DELAY_SECS};
use crate::utils::config::get_env_or_none;
use std::time::Duration;

/// How the default transport retries requests answered with HTTP 429
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries (`Some(0)` disables retrying, `None` retries forever)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds between retries (`None` uses the default)
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Reads `MAX_RETRY_COUNT` and `RETRY_DELAY_SECS`, falling back to the defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retries forever with the default delay
    #[must_use]
    pub fn infinite() -> Self {
        Self {
            max_retry_count: None,
            retry_delay_secs: None,
        }
    }

    /// Never retries
    #[must_use]
    pub fn disabled() -> Self {
        Self::with_max_retries(0)
    }

    /// At most `max_retries` retries with the default delay
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: None,
        }
    }

    /// At most `max_retries` retries, `delay_secs` apart
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Whether another retry is allowed after `attempts` retries
    #[must_use]
    pub fn allows(&self, attempts: u32) -> bool {
        self.max_retry_count.is_none_or(|max| attempts < max)
    }

    /// Delay between retries
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retry_count: Some(
                get_env_or_none("MAX_RETRY_COUNT").unwrap_or(DEFAULT_MAX_RETRY_COUNT),
            ),
            retry_delay_secs: get_env_or_none("RETRY_DELAY_SECS"),
        }
    }
}
