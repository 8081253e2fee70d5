/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # v20 Client Prelude
//!
//! The types and traits most programs need, in one import.
//!
//! ## Usage
//!
//! ```rust
//! use v20_client::prelude::*;
//!
//! let order = OrderRequest::market("EUR_USD", "100");
//! assert_eq!(order.kind(), OrderType::Market);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration of the client
pub use crate::application::config::{
    Config, Credentials, RateLimiterConfig, RestApiConfig, StreamConfig,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, V20Result};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// High level client
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::{
    RecordHandler, account::AccountService, instrument::InstrumentService, order::OrderService,
    position::PositionService, pricing::PricingService, trade::TradeService,
    transaction::TransactionService,
};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Transport seam and the default HTTP transport
pub use crate::model::http::{ApiRequest, HttpClient, RawResponse, Transport};

/// Retry policy of the default transport
pub use crate::model::retry::RetryConfig;

/// Rate limiter shared by the requests of a transport
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

/// Request bodies and queries
pub use crate::model::requests::{
    CandlesQuery, ClosePositionRequest, CloseTradeRequest, ConfigureAccountRequest,
    DependentOrderChange, OrderClientExtensionsRequest, OrderListQuery, PricingQuery,
    SetDependentOrdersRequest, TradeClientExtensionsRequest, TradeListQuery,
    TransactionListQuery, TransactionRangeQuery,
};

/// Envelope mapping
pub use crate::model::envelope::{ApiErrorBody, ApiResponse, Envelope, map_response};

/// Response envelopes
pub use crate::model::responses::*;

// ============================================================================
// STREAMS
// ============================================================================

/// Stream parsing
pub use crate::model::stream::{
    MalformedRecordPolicy, PricingStreamRecord, StreamParser, StreamRecord, StreamStats,
    TransactionStreamRecord,
};

// ============================================================================
// ENTITIES
// ============================================================================

/// Name and summary templates of every entity
pub use crate::presentation::definition::{Definition, FieldDefault};

/// Account models
pub use crate::presentation::account::{Account, AccountProperties, AccountSummary};

/// Instrument models
pub use crate::presentation::instrument::{
    Candlestick, CandlestickData, CandlestickGranularity, Instrument, InstrumentType,
    PriceComponents,
};

/// Order models
pub use crate::presentation::order::{Order, OrderRequest};

/// Order details shared by orders and transactions
pub use crate::presentation::details::{
    ClientExtensions, StopLossDetails, TakeProfitDetails, TrailingStopLossDetails,
};

/// Position models
pub use crate::presentation::position::{Position, PositionDirection, PositionSide};

/// Pricing models
pub use crate::presentation::pricing::{ClientPrice, PriceBucket, PriceStatus, PricingHeartbeat};

/// Wire primitives
pub use crate::presentation::primitives::{
    AcceptDatetimeFormat, OrderPositionFill, OrderState, OrderTriggerCondition, OrderType,
    TimeInForce, TradeState,
};

/// Trade models
pub use crate::presentation::trade::{Trade, TradeSummary};

/// Transaction models
pub use crate::presentation::transaction::{Transaction, TransactionHeartbeat, TransactionType};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Client extension ids
pub use crate::utils::id::{client_specifier, generate_client_id};

/// Wire time helpers
pub use crate::utils::time::{format_time, parse_time};

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
