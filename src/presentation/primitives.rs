/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of a transaction, unique within an account
pub type TransactionID = String;
/// Identifier of an order
pub type OrderID = String;
/// Identifier of a trade
pub type TradeID = String;
/// Identifier of an account, e.g. `101-004-1234567-001`
pub type AccountID = String;
/// Instrument name, e.g. `EUR_USD`
pub type InstrumentName = String;
/// Timestamp as sent by the API, RFC3339 or UNIX depending on `Accept-Datetime-Format`
pub type WireTime = String;
/// Decimal number carried as a string to keep full precision
pub type DecimalNumber = String;
/// Price value carried as a string to keep full precision
pub type PriceValue = String;
/// Amount in the account's home currency, carried as a string
pub type AccountUnits = String;
/// ISO 4217 currency code
pub type Currency = String;
/// Client-provided identifier (client extensions)
pub type ClientID = String;
/// Order identifier or `@clientID`
pub type OrderSpecifier = String;
/// Trade identifier or `@clientID`
pub type TradeSpecifier = String;
/// Reason string carried by reject transactions
pub type RejectReason = String;

/// How long an order remains in effect
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TimeInForce {
    /// Good until cancelled
    #[default]
    #[serde(rename = "GTC")]
    Gtc,
    /// Good until the `gtdTime`
    #[serde(rename = "GTD")]
    Gtd,
    /// Good for the trading day
    #[serde(rename = "GFD")]
    Gfd,
    /// Filled entirely or killed
    #[serde(rename = "FOK")]
    Fok,
    /// Filled immediately (possibly partially) or cancelled
    #[serde(rename = "IOC")]
    Ioc,
}

impl TimeInForce {
    /// Default time in force of market orders
    #[must_use]
    pub fn fok() -> Self {
        TimeInForce::Fok
    }

    /// Default time in force of pending and dependent orders
    #[must_use]
    pub fn gtc() -> Self {
        TimeInForce::Gtc
    }
}

/// How a filled order affects existing positions
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderPositionFill {
    /// Only open new positions
    OpenOnly,
    /// Reduce existing positions first, then open
    ReduceFirst,
    /// Only reduce existing positions
    ReduceOnly,
    /// Use the account's default behaviour
    #[default]
    Default,
}

/// Which price component triggers a pending order
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderTriggerCondition {
    /// Ask for long orders, bid for short orders
    #[default]
    Default,
    /// Bid for long orders, ask for short orders
    Inverse,
    /// Always the bid
    Bid,
    /// Always the ask
    Ask,
    /// Always the mid price
    Mid,
}

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Waiting for its trigger condition
    Pending,
    /// Filled
    Filled,
    /// Triggered
    Triggered,
    /// Cancelled
    Cancelled,
}

/// Order discriminator
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order
    Market,
    /// Limit order
    Limit,
    /// Stop order
    Stop,
    /// Market-if-touched order
    MarketIfTouched,
    /// Take profit order
    TakeProfit,
    /// Stop loss order
    StopLoss,
    /// Trailing stop loss order
    TrailingStopLoss,
    /// Fixed price order
    FixedPrice,
}

impl OrderType {
    /// Every order type, in declaration order
    pub const ALL: [OrderType; 8] = [
        OrderType::Market,
        OrderType::Limit,
        OrderType::Stop,
        OrderType::MarketIfTouched,
        OrderType::TakeProfit,
        OrderType::StopLoss,
        OrderType::TrailingStopLoss,
        OrderType::FixedPrice,
    ];

    /// Wire tag of this order type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::Stop => "STOP",
            OrderType::MarketIfTouched => "MARKET_IF_TOUCHED",
            OrderType::TakeProfit => "TAKE_PROFIT",
            OrderType::StopLoss => "STOP_LOSS",
            OrderType::TrailingStopLoss => "TRAILING_STOP_LOSS",
            OrderType::FixedPrice => "FIXED_PRICE",
        }
    }

    /// Looks an order type up by its wire tag
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    pub(crate) fn market() -> Self {
        OrderType::Market
    }

    pub(crate) fn limit() -> Self {
        OrderType::Limit
    }

    pub(crate) fn stop() -> Self {
        OrderType::Stop
    }

    pub(crate) fn market_if_touched() -> Self {
        OrderType::MarketIfTouched
    }

    pub(crate) fn take_profit() -> Self {
        OrderType::TakeProfit
    }

    pub(crate) fn stop_loss() -> Self {
        OrderType::StopLoss
    }

    pub(crate) fn trailing_stop_loss() -> Self {
        OrderType::TrailingStopLoss
    }
}

/// Lifecycle state of a trade
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeState {
    /// Open
    Open,
    /// Closed
    Closed,
    /// Will be closed as soon as the instrument is tradeable again
    CloseWhenTradeable,
}

/// Format of the timestamps the API sends back
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum AcceptDatetimeFormat {
    /// `2016-06-22T18:41:29.285982286Z`
    #[default]
    #[serde(rename = "RFC3339")]
    Rfc3339,
    /// `1466620889.285982286`
    #[serde(rename = "UNIX")]
    Unix,
}

impl AcceptDatetimeFormat {
    /// Header value for `Accept-Datetime-Format`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AcceptDatetimeFormat::Rfc3339 => "RFC3339",
            AcceptDatetimeFormat::Unix => "UNIX",
        }
    }
}

impl FromStr for AcceptDatetimeFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RFC3339" => Ok(AcceptDatetimeFormat::Rfc3339),
            "UNIX" => Ok(AcceptDatetimeFormat::Unix),
            other => Err(AppError::InvalidInput(format!(
                "unknown datetime format {other}"
            ))),
        }
    }
}
