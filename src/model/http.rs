/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::QueryPairs;
use crate::model::retry::RetryConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

/// One request to the API, relative to the REST or streaming base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Expanded path, e.g. `/v3/accounts/001/orders`
    pub path: String,
    /// Query string pairs
    pub query: QueryPairs,
    /// JSON body
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Request without query or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryPairs::new(),
            body: None,
        }
    }

    /// `GET` request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST` request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// `PUT` request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// `PATCH` request
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Sets the query pairs
    pub fn with_query(mut self, query: QueryPairs) -> Self {
        self.query = query;
        self
    }

    /// Serializes `body` as the JSON body
    pub fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Status, content type and text of a response
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// `Content-Type` header, if any
    pub content_type: Option<String>,
    /// Body text; empty for a stream that was consumed chunk by chunk
    pub body: String,
}

impl RawResponse {
    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Callback receiving the raw chunks of a streaming response
pub type ChunkHandler<'a> = dyn FnMut(&[u8]) -> Result<(), AppError> + Send + 'a;

/// Sends requests to the API.
///
/// The service layer only depends on this trait, so tests and custom
/// deployments can supply their own implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request and returns the whole response
    async fn request(&self, request: ApiRequest) -> Result<RawResponse, AppError>;

    /// Opens a streaming request and hands every chunk to `on_chunk` until the
    /// stream ends or the callback fails.
    ///
    /// A non-2xx response is returned with its body and `on_chunk` is not called.
    async fn stream(
        &self,
        request: ApiRequest,
        on_chunk: &mut ChunkHandler<'_>,
    ) -> Result<RawResponse, AppError>;
}

/// Default [`Transport`] backed by reqwest, with rate limiting and 429 retries
pub struct HttpClient {
    http_client: Client,
    stream_client: Client,
    config: Arc<Config>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    retry_config: RetryConfig,
}

impl HttpClient {
    /// Creates a transport from configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        // no overall timeout, a stream stays open for as long as the caller reads it
        let stream_client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter)));

        Ok(Self {
            http_client,
            stream_client,
            config,
            rate_limiter,
            retry_config: RetryConfig::default(),
        })
    }

    /// Replaces the retry policy
    #[must_use]
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Authorization",
                format!("Bearer {}", self.config.credentials.access_token),
            ),
            ("Content-Type", "application/json".to_string()),
            (
                "Accept-Datetime-Format",
                self.config.rest_api.datetime_format.as_str().to_string(),
            ),
        ]
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn content_type(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

#[async_trait]
impl Transport for HttpClient {
    async fn request(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
        let url = join_url(&self.config.rest_api.base_url, &request.path);
        let response = make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            request.method,
            &url,
            &self.headers(),
            &request.query,
            &request.body,
            &self.retry_config,
        )
        .await?;

        let status = response.status().as_u16();
        let content_type = content_type(&response);
        let body = response.text().await?;
        if status >= 400 {
            error!("request {} failed with status {}: {}", url, status, body);
        }
        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }

    async fn stream(
        &self,
        request: ApiRequest,
        on_chunk: &mut ChunkHandler<'_>,
    ) -> Result<RawResponse, AppError> {
        let url = join_url(&self.config.rest_api.stream_url, &request.path);
        let mut response = make_http_request(
            &self.stream_client,
            self.rate_limiter.clone(),
            request.method,
            &url,
            &self.headers(),
            &request.query,
            &request.body,
            &self.retry_config,
        )
        .await?;

        let status = response.status().as_u16();
        let content_type = content_type(&response);
        if !response.status().is_success() {
            let body = response.text().await?;
            error!("stream {} refused with status {}: {}", url, status, body);
            return Ok(RawResponse {
                status,
                content_type,
                body,
            });
        }

        debug!("stream {} opened", url);
        while let Some(chunk) = response.chunk().await? {
            on_chunk(&chunk)?;
        }
        debug!("stream {} closed by the server", url);

        Ok(RawResponse {
            status,
            content_type,
            body: String::new(),
        })
    }
}

/// Makes an HTTP request with rate limiting, retrying while the API answers 429.
///
/// Every other status is handed back to the caller, so that the endpoint's
/// envelope can decode it.
///
/// # Example
///
/// ```ignore
/// let response = make_http_request(
///     &client,
///     rate_limiter.clone(),
///     Method::GET,
///     "https://api-fxpractice.oanda.com/v3/accounts",
///     &[("Authorization", "Bearer token".to_string())],
///     &Vec::new(),
///     &None,
///     &RetryConfig::with_max_retries_and_delay(3, 1),
/// ).await?;
/// ```
#[allow(clippy::too_many_arguments)]
pub async fn make_http_request(
    client: &Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    method: Method,
    url: &str,
    headers: &[(&str, String)],
    query: &QueryPairs,
    body: &Option<Value>,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let mut retry_count = 0;

    loop {
        {
            let limiter = rate_limiter.read().await;
            limiter.wait().await;
        }

        debug!("{} {}", method, url);

        let mut request = client.request(method.clone(), url);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status != StatusCode::TOO_MANY_REQUESTS {
            return Ok(response);
        }

        if !retry_config.allows(retry_count) {
            error!(
                "Rate limit exceeded after {} retries on {} {}",
                retry_count, method, url
            );
            return Err(AppError::RateLimitExceeded);
        }
        retry_count += 1;

        let delay = retry_config.delay();
        warn!(
            "Rate limit exceeded (attempt {}), waiting {:?} before retry",
            retry_count, delay
        );
        tokio::time::sleep(delay).await;
    }
}
