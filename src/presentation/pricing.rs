/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{HEARTBEAT_TYPE, PRICE_TYPE};
use crate::impl_definition;
use crate::presentation::definition::FieldDefault;
use crate::presentation::primitives::{DecimalNumber, InstrumentName, PriceValue, WireTime};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Tradeability of an instrument's price
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PriceStatus {
    /// Tradeable
    Tradeable,
    /// Not tradeable
    NonTradeable,
    /// Price is invalid
    Invalid,
}

/// One level of the order book
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct PriceBucket {
    /// Price of the level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Liquidity available at the level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<i64>,
}

/// Factors converting quote currency amounts into the home currency
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct QuoteHomeConversionFactors {
    /// Factor for positive amounts
    #[serde(rename = "positiveUnits", skip_serializing_if = "Option::is_none")]
    pub positive_units: Option<DecimalNumber>,
    /// Factor for negative amounts
    #[serde(rename = "negativeUnits", skip_serializing_if = "Option::is_none")]
    pub negative_units: Option<DecimalNumber>,
}

/// Units available in one direction
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct UnitsAvailableDetails {
    /// Units available for a long order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<DecimalNumber>,
    /// Units available for a short order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<DecimalNumber>,
}

/// Units available per position fill behaviour
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct UnitsAvailable {
    /// Units available with the default position fill
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default: Option<UnitsAvailableDetails>,
    /// Units available when reducing first
    #[serde(rename = "reduceFirst", skip_serializing_if = "Option::is_none")]
    pub reduce_first: Option<UnitsAvailableDetails>,
    /// Units available when only reducing
    #[serde(rename = "reduceOnly", skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<UnitsAvailableDetails>,
    /// Units available when only opening
    #[serde(rename = "openOnly", skip_serializing_if = "Option::is_none")]
    pub open_only: Option<UnitsAvailableDetails>,
}

fn price_type() -> String {
    PRICE_TYPE.to_string()
}

fn heartbeat_type() -> String {
    HEARTBEAT_TYPE.to_string()
}

/// Bid/ask price of an instrument as seen by the account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ClientPrice {
    /// Always `PRICE`
    #[serde(rename = "type", default = "price_type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WireTime>,
    /// Deprecated by the API in favour of `tradeable`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PriceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tradeable: Option<bool>,
    /// Bid levels, best first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bids: Option<Vec<PriceBucket>>,
    /// Ask levels, best first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asks: Option<Vec<PriceBucket>>,
    #[serde(rename = "closeoutBid", skip_serializing_if = "Option::is_none")]
    pub closeout_bid: Option<PriceValue>,
    #[serde(rename = "closeoutAsk", skip_serializing_if = "Option::is_none")]
    pub closeout_ask: Option<PriceValue>,
    #[serde(
        rename = "quoteHomeConversionFactors",
        skip_serializing_if = "Option::is_none"
    )]
    pub quote_home_conversion_factors: Option<QuoteHomeConversionFactors>,
    #[serde(rename = "unitsAvailable", skip_serializing_if = "Option::is_none")]
    pub units_available: Option<UnitsAvailable>,
}

impl Default for ClientPrice {
    fn default() -> Self {
        Self {
            kind: price_type(),
            instrument: None,
            time: None,
            status: None,
            tradeable: None,
            bids: None,
            asks: None,
            closeout_bid: None,
            closeout_ask: None,
            quote_home_conversion_factors: None,
            units_available: None,
        }
    }
}

impl ClientPrice {
    /// Best bid price, if any
    pub fn best_bid(&self) -> Option<&str> {
        self.bids.as_ref()?.first()?.price.as_deref()
    }

    /// Best ask price, if any
    pub fn best_ask(&self) -> Option<&str> {
        self.asks.as_ref()?.first()?.price.as_deref()
    }

    /// Mid of the best bid and ask, when both parse as numbers
    pub fn mid(&self) -> Option<f64> {
        let bid: f64 = self.best_bid()?.parse().ok()?;
        let ask: f64 = self.best_ask()?.parse().ok()?;
        Some((bid + ask) / 2.0)
    }
}

impl_definition!(
    ClientPrice,
    "Price {instrument}",
    "{instrument} {time}",
    &[FieldDefault::new("type", PRICE_TYPE)]
);

/// Liveness record of the pricing stream
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PricingHeartbeat {
    /// Always `HEARTBEAT`
    #[serde(rename = "type", default = "heartbeat_type")]
    pub kind: String,
    /// Server time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WireTime>,
}

impl Default for PricingHeartbeat {
    fn default() -> Self {
        Self {
            kind: heartbeat_type(),
            time: None,
        }
    }
}

impl_definition!(
    PricingHeartbeat,
    "Pricing Heartbeat",
    "Pricing Heartbeat {time}",
    &[FieldDefault::new("type", HEARTBEAT_TYPE)]
);
