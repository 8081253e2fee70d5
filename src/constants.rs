/// Base URL of the practice REST environment
pub const DEFAULT_REST_URL: &str = "https://api-fxpractice.oanda.com";
/// Base URL of the practice streaming environment
pub const DEFAULT_STREAM_URL: &str = "https://stream-fxpractice.oanda.com";
/// Timeout in seconds for non-streaming requests
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("v20-client/", env!("CARGO_PKG_VERSION"));
/// Discriminator value carried by heartbeat records on every stream
pub const HEARTBEAT_TYPE: &str = "HEARTBEAT";
/// Discriminator value carried by price records on the pricing stream
pub const PRICE_TYPE: &str = "PRICE";
/// Largest partial stream record the frame parser will buffer (1 MiB)
pub const DEFAULT_MAX_RECORD_BYTES: usize = 1024 * 1024;
/// Maximum page size accepted by the transaction list endpoint
pub const MAX_TRANSACTION_PAGE_SIZE: u32 = 1000;
/// Maximum number of candles accepted by the candles endpoint
pub const MAX_CANDLE_COUNT: u32 = 5000;
/// Default delay in seconds between retries on HTTP 429
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 1;
/// Top level keys extracted for any status not listed by an endpoint
pub const ERROR_FIELDS: &[&str] = &["errorCode", "errorMessage"];
/// Default number of retries on HTTP 429
pub const DEFAULT_MAX_RETRY_COUNT: u32 = 3;
