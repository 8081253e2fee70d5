/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::impl_definition;
use crate::presentation::details::ClientExtensions;
use crate::presentation::order::{StopLossOrder, TakeProfitOrder, TrailingStopLossOrder};
use crate::presentation::primitives::{
    AccountUnits, DecimalNumber, InstrumentName, OrderID, PriceValue, TradeID, TradeState,
    TransactionID, WireTime,
};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Fields shared by [`Trade`] and [`TradeSummary`]
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TradeHeader {
    /// Trade identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TradeID>,
    /// Instrument traded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Average open price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(rename = "openTime", skip_serializing_if = "Option::is_none")]
    pub open_time: Option<WireTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TradeState>,
    #[serde(rename = "initialUnits", skip_serializing_if = "Option::is_none")]
    pub initial_units: Option<DecimalNumber>,
    #[serde(rename = "initialMarginRequired", skip_serializing_if = "Option::is_none")]
    pub initial_margin_required: Option<AccountUnits>,
    /// Units still open; sign gives the direction
    #[serde(rename = "currentUnits", skip_serializing_if = "Option::is_none")]
    pub current_units: Option<DecimalNumber>,
    #[serde(rename = "realizedPL", skip_serializing_if = "Option::is_none")]
    pub realized_pl: Option<AccountUnits>,
    #[serde(rename = "unrealizedPL", skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "marginUsed", skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<AccountUnits>,
    #[serde(rename = "averageClosePrice", skip_serializing_if = "Option::is_none")]
    pub average_close_price: Option<PriceValue>,
    #[serde(rename = "closingTransactionIDs", skip_serializing_if = "Option::is_none")]
    pub closing_transaction_ids: Option<Vec<TransactionID>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    #[serde(rename = "closeTime", skip_serializing_if = "Option::is_none")]
    pub close_time: Option<WireTime>,
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

/// A trade with its dependent orders
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Trade {
    /// Fields common to full trades and summaries
    #[serde(flatten)]
    pub header: TradeHeader,
    /// Take profit order attached to the trade
    #[serde(rename = "takeProfitOrder", skip_serializing_if = "Option::is_none")]
    pub take_profit_order: Option<TakeProfitOrder>,
    /// Stop loss order attached to the trade
    #[serde(rename = "stopLossOrder", skip_serializing_if = "Option::is_none")]
    pub stop_loss_order: Option<StopLossOrder>,
    /// Trailing stop loss order attached to the trade
    #[serde(rename = "trailingStopLossOrder", skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_order: Option<TrailingStopLossOrder>,
}

impl Trade {
    /// Whether the trade is still open
    pub fn is_open(&self) -> bool {
        self.header.state == Some(TradeState::Open)
    }
}

impl_definition!(
    Trade,
    "Trade {id}",
    "{currentUnits} ({initialUnits}) of {instrument} @ {price}"
);

/// A trade with only the ids of its dependent orders
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TradeSummary {
    /// Fields common to full trades and summaries
    #[serde(flatten)]
    pub header: TradeHeader,
    /// Id of the attached take profit order
    #[serde(rename = "takeProfitOrderID", skip_serializing_if = "Option::is_none")]
    pub take_profit_order_id: Option<OrderID>,
    /// Id of the attached stop loss order
    #[serde(rename = "stopLossOrderID", skip_serializing_if = "Option::is_none")]
    pub stop_loss_order_id: Option<OrderID>,
    /// Id of the attached trailing stop loss order
    #[serde(rename = "trailingStopLossOrderID", skip_serializing_if = "Option::is_none")]
    pub trailing_stop_loss_order_id: Option<OrderID>,
}

impl_definition!(
    TradeSummary,
    "Trade {id}",
    "{currentUnits} ({initialUnits}) of {instrument} @ {price}"
);

/// Price dependent state of a trade
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CalculatedTradeState {
    /// Trade identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TradeID>,
    /// Unrealized profit/loss of the trade
    #[serde(rename = "unrealizedPL", skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<AccountUnits>,
    /// Margin currently used by the trade
    #[serde(rename = "marginUsed", skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<AccountUnits>,
}
