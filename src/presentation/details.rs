/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Nested value types shared by transactions, orders, order requests and trades.
//!
//! The `*Params` structs hold the parameters of one order family. They are
//! embedded (flattened) in the order, the transaction that created it, its
//! reject transaction, and the request body that asks for it.

use crate::impl_definition;
use crate::presentation::definition::{
    DEPENDENT_ORDER_DEFAULTS, ENTRY_ORDER_DEFAULTS, FIXED_PRICE_ORDER_DEFAULTS,
    MARKET_ORDER_DEFAULTS, ON_FILL_DEFAULTS,
};
use crate::presentation::primitives::{
    AccountUnits, ClientID, DecimalNumber, InstrumentName, OrderPositionFill,
    OrderTriggerCondition, PriceValue, TimeInForce, TradeID, TransactionID, WireTime,
};
use crate::utils::id::generate_client_id;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Client-provided metadata attached to an order or trade
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientExtensions {
    /// Client id, usable as `@id` specifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ClientID>,
    /// Free form tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Free form comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ClientExtensions {
    /// Client extensions with a freshly generated id
    #[must_use]
    pub fn generated() -> Self {
        Self {
            id: Some(generate_client_id()),
            ..Default::default()
        }
    }

    /// Sets the id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl_definition!(ClientExtensions, "Client Extensions {id}", "{id}: {tag} ({comment})");

/// Take profit to create when an order fills
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TakeProfitDetails {
    /// Trigger price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Time in force
    #[serde(rename = "timeInForce", default = "TimeInForce::gtc")]
    pub time_in_force: TimeInForce,
    /// Expiry for GTD
    #[serde(rename = "gtdTime", skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<WireTime>,
    /// Client extensions of the created order
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

impl TakeProfitDetails {
    /// Take profit at a price, good until cancelled
    pub fn at_price(price: impl Into<String>) -> Self {
        Self {
            price: Some(price.into()),
            time_in_force: TimeInForce::Gtc,
            gtd_time: None,
            client_extensions: None,
        }
    }
}

impl_definition!(
    TakeProfitDetails,
    "Take Profit Details",
    "Take Profit @ {price} ({timeInForce})",
    ON_FILL_DEFAULTS
);

/// Stop loss to create when an order fills
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct StopLossDetails {
    /// Trigger price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Distance from the fill price, alternative to `price`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    /// Time in force
    #[serde(rename = "timeInForce", default = "TimeInForce::gtc")]
    pub time_in_force: TimeInForce,
    /// Expiry for GTD
    #[serde(rename = "gtdTime", skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<WireTime>,
    /// Client extensions of the created order
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// Whether the stop loss is guaranteed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guaranteed: Option<bool>,
}

impl StopLossDetails {
    /// Stop loss at a price, good until cancelled
    pub fn at_price(price: impl Into<String>) -> Self {
        Self {
            price: Some(price.into()),
            distance: None,
            time_in_force: TimeInForce::Gtc,
            gtd_time: None,
            client_extensions: None,
            guaranteed: None,
        }
    }

    /// Stop loss at a distance from the fill price, good until cancelled
    pub fn at_distance(distance: impl Into<String>) -> Self {
        Self {
            price: None,
            distance: Some(distance.into()),
            time_in_force: TimeInForce::Gtc,
            gtd_time: None,
            client_extensions: None,
            guaranteed: None,
        }
    }
}

impl_definition!(
    StopLossDetails,
    "Stop Loss Details",
    "Stop Loss @ {price}{distance} ({timeInForce})",
    ON_FILL_DEFAULTS
);

/// Trailing stop loss to create when an order fills
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TrailingStopLossDetails {
    /// Trailing distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    /// Time in force
    #[serde(rename = "timeInForce", default = "TimeInForce::gtc")]
    pub time_in_force: TimeInForce,
    /// Expiry for GTD
    #[serde(rename = "gtdTime", skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<WireTime>,
    /// Client extensions of the created order
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

impl TrailingStopLossDetails {
    /// Trailing stop loss at a distance, good until cancelled
    pub fn at_distance(distance: impl Into<String>) -> Self {
        Self {
            distance: Some(distance.into()),
            time_in_force: TimeInForce::Gtc,
            gtd_time: None,
            client_extensions: None,
        }
    }
}

impl_definition!(
    TrailingStopLossDetails,
    "Trailing Stop Loss Details",
    "Trailing Stop Loss {distance} ({timeInForce})",
    ON_FILL_DEFAULTS
);

/// A trade opened by an order fill
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TradeOpen {
    /// Trade id
    #[serde(rename = "tradeID", skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeID>,
    /// Units opened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    /// Average open price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Fee for a guaranteed stop loss
    #[serde(rename = "guaranteedExecutionFee", skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_fee: Option<AccountUnits>,
    /// Client extensions of the trade
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// Half spread cost of the open
    #[serde(rename = "halfSpreadCost", skip_serializing_if = "Option::is_none")]
    pub half_spread_cost: Option<AccountUnits>,
    /// Margin required when the trade opened
    #[serde(rename = "initialMarginRequired", skip_serializing_if = "Option::is_none")]
    pub initial_margin_required: Option<AccountUnits>,
}

impl_definition!(TradeOpen, "Trade Open {tradeID}", "Open trade {tradeID}: {units} @ {price}");

/// A trade closed or reduced by an order fill
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TradeReduce {
    /// Trade id
    #[serde(rename = "tradeID", skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeID>,
    /// Units closed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    /// Average close price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Realized profit/loss of the reduction
    #[serde(rename = "realizedPL", skip_serializing_if = "Option::is_none")]
    pub realized_pl: Option<AccountUnits>,
    /// Financing paid/collected on the reduction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    /// Fee for a guaranteed stop loss
    #[serde(rename = "guaranteedExecutionFee", skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_fee: Option<AccountUnits>,
    /// Half spread cost of the reduction
    #[serde(rename = "halfSpreadCost", skip_serializing_if = "Option::is_none")]
    pub half_spread_cost: Option<AccountUnits>,
}

impl_definition!(
    TradeReduce,
    "Trade Reduce {tradeID}",
    "Reduce trade {tradeID}: {units} @ {price}, PL {realizedPL}"
);

/// Trade to close with a market order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketOrderTradeClose {
    /// Trade id
    #[serde(rename = "tradeID", skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeID>,
    /// Client trade id
    #[serde(rename = "clientTradeID", skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientID>,
    /// Units to close, or `ALL`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// Position side to close out with a market order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketOrderPositionCloseout {
    /// Instrument of the position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Units to close, or `ALL`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// Margin closeout that produced a market order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketOrderMarginCloseout {
    /// Closeout reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Delayed trade close that produced a market order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketOrderDelayedTradeClose {
    /// Trade id
    #[serde(rename = "tradeID", skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeID>,
    /// Client trade id
    #[serde(rename = "clientTradeID", skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientID>,
    /// Transaction that delayed the close
    #[serde(rename = "sourceTransactionID", skip_serializing_if = "Option::is_none")]
    pub source_transaction_id: Option<TransactionID>,
}

/// Financing charged on one open trade
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OpenTradeFinancing {
    /// Trade id
    #[serde(rename = "tradeID", skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeID>,
    /// Financing amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
}

/// Financing charged on one position
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct PositionFinancing {
    /// Instrument of the position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Financing amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    /// Per trade breakdown
    #[serde(rename = "openTradeFinancings", skip_serializing_if = "Option::is_none")]
    pub open_trade_financings: Option<Vec<OpenTradeFinancing>>,
}

impl_definition!(
    PositionFinancing,
    "Position Financing {instrument}",
    "{instrument} financing {financing}"
);

/// Parameters of a market order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarketOrderParams {
    /// Instrument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Units; positive buys, negative sells
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    /// Time in force
    #[serde(rename = "timeInForce", default = "TimeInForce::fok")]
    pub time_in_force: TimeInForce,
    /// Worst acceptable price
    #[serde(rename = "priceBound", skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    /// Position fill behaviour
    #[serde(rename = "positionFill", default)]
    pub position_fill: OrderPositionFill,
    /// Trade closed by this order
    #[serde(rename = "tradeClose", skip_serializing_if = "Option::is_none")]
    pub trade_close: Option<MarketOrderTradeClose>,
    /// Long position closed by this order
    #[serde(rename = "longPositionCloseout", skip_serializing_if = "Option::is_none")]
    pub long_position_closeout: Option<MarketOrderPositionCloseout>,
    /// Short position closed by this order
    #[serde(rename = "shortPositionCloseout", skip_serializing_if = "Option::is_none")]
    pub short_position_closeout: Option<MarketOrderPositionCloseout>,
    /// Margin closeout that produced this order
    #[serde(rename = "marginCloseout", skip_serializing_if = "Option::is_none")]
    pub margin_closeout: Option<MarketOrderMarginCloseout>,
    /// Delayed trade close that produced this order
    #[serde(rename = "delayedTradeClose", skip_serializing_if = "Option::is_none")]
    pub delayed_trade_close: Option<MarketOrderDelayedTradeClose>,
    /// Client extensions of the order
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// Take profit created on fill
    #[serde(rename = "takeProfitOnFill", skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    /// Stop loss created on fill
    #[serde(rename = "stopLossOnFill", skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    /// Trailing stop loss created on fill
    #[serde(rename = "trailingStopLossOnFill", skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    /// Client extensions of the opened trade
    #[serde(rename = "tradeClientExtensions", skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

impl Default for MarketOrderParams {
    fn default() -> Self {
        Self {
            instrument: None,
            units: None,
            time_in_force: TimeInForce::Fok,
            price_bound: None,
            position_fill: OrderPositionFill::Default,
            trade_close: None,
            long_position_closeout: None,
            short_position_closeout: None,
            margin_closeout: None,
            delayed_trade_close: None,
            client_extensions: None,
            take_profit_on_fill: None,
            stop_loss_on_fill: None,
            trailing_stop_loss_on_fill: None,
            trade_client_extensions: None,
        }
    }
}

impl_definition!(
    MarketOrderParams,
    "Market Order",
    "{units} units of {instrument}",
    MARKET_ORDER_DEFAULTS
);

/// Parameters of a fixed price order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct FixedPriceOrderParams {
    /// Instrument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Units; positive buys, negative sells
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    /// Fill price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Position fill behaviour
    #[serde(rename = "positionFill", default)]
    pub position_fill: OrderPositionFill,
    /// State of the resulting trade
    #[serde(rename = "tradeState", skip_serializing_if = "Option::is_none")]
    pub trade_state: Option<String>,
    /// Client extensions of the order
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// Take profit created on fill
    #[serde(rename = "takeProfitOnFill", skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    /// Stop loss created on fill
    #[serde(rename = "stopLossOnFill", skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    /// Trailing stop loss created on fill
    #[serde(rename = "trailingStopLossOnFill", skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    /// Client extensions of the opened trade
    #[serde(rename = "tradeClientExtensions", skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

impl_definition!(
    FixedPriceOrderParams,
    "Fixed Price Order",
    "{units} units of {instrument} @ {price}",
    FIXED_PRICE_ORDER_DEFAULTS
);

/// Parameters of a limit, stop or market-if-touched order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct EntryOrderParams {
    /// Instrument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Units; positive buys, negative sells
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    /// Trigger price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Worst acceptable fill price (stop and market-if-touched only)
    #[serde(rename = "priceBound", skip_serializing_if = "Option::is_none")]
    pub price_bound: Option<PriceValue>,
    /// Time in force
    #[serde(rename = "timeInForce", default)]
    pub time_in_force: TimeInForce,
    /// Expiry for GTD
    #[serde(rename = "gtdTime", skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<WireTime>,
    /// Position fill behaviour
    #[serde(rename = "positionFill", default)]
    pub position_fill: OrderPositionFill,
    /// Price component that triggers the order
    #[serde(rename = "triggerCondition", default)]
    pub trigger_condition: OrderTriggerCondition,
    /// Client extensions of the order
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// Take profit created on fill
    #[serde(rename = "takeProfitOnFill", skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<TakeProfitDetails>,
    /// Stop loss created on fill
    #[serde(rename = "stopLossOnFill", skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
    /// Trailing stop loss created on fill
    #[serde(rename = "trailingStopLossOnFill", skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    /// Client extensions of the opened trade
    #[serde(rename = "tradeClientExtensions", skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

impl_definition!(
    EntryOrderParams,
    "Entry Order",
    "{units} units of {instrument} @ {price}",
    ENTRY_ORDER_DEFAULTS
);

/// Parameters of a take profit, stop loss or trailing stop loss order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct DependentOrderParams {
    /// Trade the order protects
    #[serde(rename = "tradeID", skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeID>,
    /// Client id of the protected trade
    #[serde(rename = "clientTradeID", skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientID>,
    /// Trigger price (take profit and stop loss)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    /// Distance (stop loss and trailing stop loss)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<DecimalNumber>,
    /// Time in force
    #[serde(rename = "timeInForce", default)]
    pub time_in_force: TimeInForce,
    /// Expiry for GTD
    #[serde(rename = "gtdTime", skip_serializing_if = "Option::is_none")]
    pub gtd_time: Option<WireTime>,
    /// Price component that triggers the order
    #[serde(rename = "triggerCondition", default)]
    pub trigger_condition: OrderTriggerCondition,
    /// Guaranteed stop loss flag (stop loss only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guaranteed: Option<bool>,
    /// Premium charged if a guaranteed stop loss fills
    #[serde(rename = "guaranteedExecutionPremium", skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_premium: Option<DecimalNumber>,
    /// Client extensions of the order
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

impl_definition!(
    DependentOrderParams,
    "Dependent Order",
    "for trade {tradeID} @ {price}{distance}",
    DEPENDENT_ORDER_DEFAULTS
);
