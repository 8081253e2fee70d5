/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_MAX_RECORD_BYTES, DEFAULT_REST_TIMEOUT_SECS, DEFAULT_REST_URL, DEFAULT_STREAM_URL,
};
use crate::model::stream::MalformedRecordPolicy;
use crate::presentation::primitives::AcceptDatetimeFormat;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

const DEFAULT_ACCESS_TOKEN: &str = "default_access_token";
const DEFAULT_ACCOUNT_ID: &str = "default_account_id";

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Credentials of the v20 API
pub struct Credentials {
    /// Personal access token, sent as a bearer token
    pub access_token: String,
    /// Account used by the account scoped helpers
    pub account_id: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration of the client
pub struct Config {
    /// Credentials
    pub credentials: Credentials,
    /// REST and streaming endpoints
    pub rest_api: RestApiConfig,
    /// Rate limiter of REST requests
    pub rate_limiter: RateLimiterConfig,
    /// Stream parser settings
    pub stream: StreamConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration of the REST and streaming endpoints
pub struct RestApiConfig {
    /// Base URL of the REST API
    pub base_url: String,
    /// Base URL of the streaming API
    pub stream_url: String,
    /// Timeout in seconds of non-streaming requests
    pub timeout: u64,
    /// Format of the timestamps the API sends back
    pub datetime_format: AcceptDatetimeFormat,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration of the stream frame parser
pub struct StreamConfig {
    /// What to do with a record that is not valid JSON
    pub malformed_records: MalformedRecordPolicy,
    /// Largest record the parser will buffer
    pub max_record_bytes: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            malformed_records: MalformedRecordPolicy::default(),
            max_record_bytes: DEFAULT_MAX_RECORD_BYTES,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment, loading `.env` first
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let access_token = get_env_or_default("V20_ACCESS_TOKEN", String::from(DEFAULT_ACCESS_TOKEN));
        let account_id = get_env_or_default("V20_ACCOUNT_ID", String::from(DEFAULT_ACCOUNT_ID));

        if access_token == DEFAULT_ACCESS_TOKEN {
            error!("V20_ACCESS_TOKEN not found in environment variables or .env file");
        }
        if account_id == DEFAULT_ACCOUNT_ID {
            error!("V20_ACCOUNT_ID not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                access_token,
                account_id,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("V20_REST_URL", String::from(DEFAULT_REST_URL)),
                stream_url: get_env_or_default("V20_STREAM_URL", String::from(DEFAULT_STREAM_URL)),
                timeout: get_env_or_default("V20_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
                datetime_format: get_env_or_default(
                    "V20_DATETIME_FORMAT",
                    AcceptDatetimeFormat::default(),
                ),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("V20_RATE_LIMIT_MAX_REQUESTS", 100),
                period_seconds: get_env_or_default("V20_RATE_LIMIT_PERIOD_SECONDS", 1),
                burst_size: get_env_or_default("V20_RATE_LIMIT_BURST_SIZE", 20),
            },
            stream: StreamConfig {
                malformed_records: get_env_or_default(
                    "V20_STREAM_MALFORMED",
                    MalformedRecordPolicy::default(),
                ),
                max_record_bytes: get_env_or_default(
                    "V20_STREAM_MAX_RECORD_BYTES",
                    DEFAULT_MAX_RECORD_BYTES,
                ),
            },
        }
    }

    /// Configuration pointing at explicit endpoints, for tests and custom deployments
    pub fn with_urls(mut self, base_url: impl Into<String>, stream_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self.rest_api.stream_url = stream_url.into();
        self
    }

    /// Whether real credentials were found
    pub fn has_credentials(&self) -> bool {
        self.credentials.access_token != DEFAULT_ACCESS_TOKEN
    }
}
