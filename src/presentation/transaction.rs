/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Account transactions.
//!
//! Every transaction kind is its own struct embedding a [`TransactionHeader`].
//! [`Transaction`] ties them together as a tagged enum decoded through a
//! [`Registry`]; tags with no variant decode to [`Transaction::Unknown`].

use crate::impl_definition;
use crate::model::registry::{Registry, tagged_value};
use crate::presentation::definition::{
    DEPENDENT_ORDER_DEFAULTS, Definition, ENTRY_ORDER_DEFAULTS, FIXED_PRICE_ORDER_DEFAULTS,
    FieldDefault, MARKET_ORDER_DEFAULTS,
};
use crate::presentation::details::{
    ClientExtensions, DependentOrderParams, EntryOrderParams, FixedPriceOrderParams,
    MarketOrderParams, PositionFinancing, TradeOpen, TradeReduce,
};
use crate::presentation::pricing::ClientPrice;
use crate::presentation::primitives::{
    AccountID, AccountUnits, ClientID, Currency, DecimalNumber, InstrumentName, OrderID,
    PriceValue, RejectReason, TradeID, TransactionID, WireTime,
};
use crate::constants::HEARTBEAT_TYPE;
use once_cell::sync::Lazy;
use pretty_simple_display::DisplaySimple;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Fields common to every transaction
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TransactionHeader {
    /// Transaction id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TransactionID>,
    /// Time the transaction was executed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WireTime>,
    /// User that initiated the transaction
    #[serde(rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Account the transaction belongs to
    #[serde(rename = "accountID", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountID>,
    /// Id of the first transaction of the batch
    #[serde(rename = "batchID", skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<TransactionID>,
    /// Request that produced the transaction
    #[serde(rename = "requestID", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Common fields only, used for tags without a dedicated variant
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct BaseTransaction {
    /// Common fields
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Tag as received, if any
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl BaseTransaction {
    /// Extracts the common fields from any JSON value, skipping fields of the wrong type
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(String::from);
        Self {
            header: TransactionHeader {
                id: text("id"),
                time: text("time"),
                user_id: value.get("userID").and_then(Value::as_i64),
                account_id: text("accountID"),
                batch_id: text("batchID"),
                request_id: text("requestID"),
            },
            kind: text("type"),
        }
    }
}

impl_definition!(BaseTransaction, "Transaction {id}", "Transaction {id} ({type})");

/// Account creation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Division the account belongs to
    #[serde(rename = "divisionID", skip_serializing_if = "Option::is_none")]
    pub division_id: Option<i64>,
    /// Site the account belongs to
    #[serde(rename = "siteID", skip_serializing_if = "Option::is_none")]
    pub site_id: Option<i64>,
    /// User that created the account
    #[serde(rename = "accountUserID", skip_serializing_if = "Option::is_none")]
    pub account_user_id: Option<i64>,
    /// Number of the account within its division
    #[serde(rename = "accountNumber", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<i64>,
    /// Home currency of the account
    #[serde(rename = "homeCurrency", skip_serializing_if = "Option::is_none")]
    pub home_currency: Option<Currency>,
}

impl_definition!(
    CreateTransaction,
    "Create Account {accountID}",
    "Create Account {accountID} in {homeCurrency}"
);

/// Account closed
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CloseTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
}

impl_definition!(CloseTransaction, "Close Account {accountID}", "Close Account {accountID}");

/// Account reopened
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ReopenTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
}

impl_definition!(ReopenTransaction, "Reopen Account {accountID}", "Reopen Account {accountID}");

/// Account alias or margin rate changed
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientConfigureTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Client-assigned account alias
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Requested margin rate
    #[serde(rename = "marginRate", skip_serializing_if = "Option::is_none")]
    pub margin_rate: Option<DecimalNumber>,
}

impl_definition!(
    ClientConfigureTransaction,
    "Client Configure {id}",
    "Client Configure: alias {alias}, margin rate {marginRate}"
);

/// Rejected alias or margin rate change
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientConfigureRejectTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Client-assigned account alias
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Requested margin rate
    #[serde(rename = "marginRate", skip_serializing_if = "Option::is_none")]
    pub margin_rate: Option<DecimalNumber>,
    /// Why the request was rejected
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<RejectReason>,
}

impl_definition!(
    ClientConfigureRejectTransaction,
    "Client Configure Reject {id}",
    "Client Configure Reject: {rejectReason}"
);

/// Funds deposited or withdrawn
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TransferFundsTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Amount moved, in the account currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<AccountUnits>,
    /// Why funds were moved
    #[serde(rename = "fundingReason", skip_serializing_if = "Option::is_none")]
    pub funding_reason: Option<String>,
    /// Free-form comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Account balance after the transaction
    #[serde(rename = "accountBalance", skip_serializing_if = "Option::is_none")]
    pub account_balance: Option<AccountUnits>,
}

impl_definition!(
    TransferFundsTransaction,
    "Transfer Funds {id}",
    "Account Transfer of {amount}"
);

/// Rejected funds transfer
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TransferFundsRejectTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Amount moved, in the account currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<AccountUnits>,
    /// Why funds were moved
    #[serde(rename = "fundingReason", skip_serializing_if = "Option::is_none")]
    pub funding_reason: Option<String>,
    /// Free-form comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Why the request was rejected
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<RejectReason>,
}

impl_definition!(
    TransferFundsRejectTransaction,
    "Transfer Funds Reject {id}",
    "Account Reject Transfer of {amount}: {rejectReason}"
);

/// Market order accepted
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketOrderTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Market order parameters
    #[serde(flatten)]
    pub params: MarketOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl_definition!(
    MarketOrderTransaction,
    "Market Order {id}",
    "Create Market Order {id} ({reason}): {units} of {instrument}",
    MARKET_ORDER_DEFAULTS
);

/// Rejected market order request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketOrderRejectTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Market order parameters
    #[serde(flatten)]
    pub params: MarketOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Why the request was rejected
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<RejectReason>,
}

impl_definition!(
    MarketOrderRejectTransaction,
    "Market Order Reject {id}",
    "Reject Market Order ({reason}): {units} of {instrument}, {rejectReason}",
    MARKET_ORDER_DEFAULTS
);

/// Order filled at a price fixed by the broker
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct FixedPriceOrderTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Fixed price order parameters
    #[serde(flatten)]
    pub params: FixedPriceOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl_definition!(
    FixedPriceOrderTransaction,
    "Fixed Price Order {id}",
    "Create Fixed Price Order {id} ({reason}): {units} of {instrument} @ {price}",
    FIXED_PRICE_ORDER_DEFAULTS
);

/// Pending entry order created or replaced
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct LimitOrderTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Entry order parameters
    #[serde(flatten)]
    pub params: EntryOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Order this one replaces
    #[serde(rename = "replacesOrderID", skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderID>,
    /// Transaction that cancelled the order
    #[serde(rename = "cancellingTransactionID", skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionID>,
}

impl_definition!(
    LimitOrderTransaction,
    "Limit Order {id}",
    "Create Limit Order {id} ({reason}): {units} of {instrument} @ {price}",
    ENTRY_ORDER_DEFAULTS
);

/// Rejected limit order request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct LimitOrderRejectTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Entry order parameters
    #[serde(flatten)]
    pub params: EntryOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Order the rejected request would have replaced
    #[serde(rename = "intendedReplacesOrderID", skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderID>,
    /// Why the request was rejected
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<RejectReason>,
}

impl_definition!(
    LimitOrderRejectTransaction,
    "Limit Order Reject {id}",
    "Reject Limit Order ({reason}): {units} of {instrument} @ {price}, {rejectReason}",
    ENTRY_ORDER_DEFAULTS
);

/// A stop order was created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct StopOrderTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Entry order parameters
    #[serde(flatten)]
    pub params: EntryOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Order this one replaces
    #[serde(rename = "replacesOrderID", skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderID>,
    /// Transaction that cancelled the order
    #[serde(rename = "cancellingTransactionID", skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionID>,
}

impl_definition!(
    StopOrderTransaction,
    "Stop Order {id}",
    "Create Stop Order {id} ({reason}): {units} of {instrument} @ {price}",
    ENTRY_ORDER_DEFAULTS
);

/// Rejected stop order request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct StopOrderRejectTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Entry order parameters
    #[serde(flatten)]
    pub params: EntryOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Order the rejected request would have replaced
    #[serde(rename = "intendedReplacesOrderID", skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderID>,
    /// Why the request was rejected
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<RejectReason>,
}

impl_definition!(
    StopOrderRejectTransaction,
    "Stop Order Reject {id}",
    "Reject Stop Order ({reason}): {units} of {instrument} @ {price}, {rejectReason}",
    ENTRY_ORDER_DEFAULTS
);

/// A market-if-touched order was created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketIfTouchedOrderTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Entry order parameters
    #[serde(flatten)]
    pub params: EntryOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Order this one replaces
    #[serde(rename = "replacesOrderID", skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderID>,
    /// Transaction that cancelled the order
    #[serde(rename = "cancellingTransactionID", skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionID>,
}

impl_definition!(
    MarketIfTouchedOrderTransaction,
    "MIT Order {id}",
    "Create MIT Order {id} ({reason}): {units} of {instrument} @ {price}",
    ENTRY_ORDER_DEFAULTS
);

/// Rejected market-if-touched order request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketIfTouchedOrderRejectTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Entry order parameters
    #[serde(flatten)]
    pub params: EntryOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Order the rejected request would have replaced
    #[serde(rename = "intendedReplacesOrderID", skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderID>,
    /// Why the request was rejected
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<RejectReason>,
}

impl_definition!(
    MarketIfTouchedOrderRejectTransaction,
    "MIT Order Reject {id}",
    "Reject MIT Order ({reason}): {units} of {instrument} @ {price}, {rejectReason}",
    ENTRY_ORDER_DEFAULTS
);

/// Dependent order created or replaced on a trade
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TakeProfitOrderTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Trade, price and distance of the dependent order
    #[serde(flatten)]
    pub params: DependentOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Fill that opened the trade this order depends on
    #[serde(rename = "orderFillTransactionID", skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionID>,
    /// Order this one replaces
    #[serde(rename = "replacesOrderID", skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderID>,
    /// Transaction that cancelled the order
    #[serde(rename = "cancellingTransactionID", skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionID>,
}

impl_definition!(
    TakeProfitOrderTransaction,
    "Take Profit Order {id}",
    "Create Take Profit Order {id} ({reason}): Close Trade {tradeID} @ {price}",
    DEPENDENT_ORDER_DEFAULTS
);

/// Rejected take profit order request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TakeProfitOrderRejectTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Trade, price and distance of the dependent order
    #[serde(flatten)]
    pub params: DependentOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Fill that opened the trade this order depends on
    #[serde(rename = "orderFillTransactionID", skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionID>,
    /// Order the rejected request would have replaced
    #[serde(rename = "intendedReplacesOrderID", skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderID>,
    /// Why the request was rejected
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<RejectReason>,
}

impl_definition!(
    TakeProfitOrderRejectTransaction,
    "Take Profit Order Reject {id}",
    "Reject Take Profit Order ({reason}): Close Trade {tradeID} @ {price}, {rejectReason}",
    DEPENDENT_ORDER_DEFAULTS
);

/// A stop loss order was created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct StopLossOrderTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Trade, price and distance of the dependent order
    #[serde(flatten)]
    pub params: DependentOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Fill that opened the trade this order depends on
    #[serde(rename = "orderFillTransactionID", skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionID>,
    /// Order this one replaces
    #[serde(rename = "replacesOrderID", skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderID>,
    /// Transaction that cancelled the order
    #[serde(rename = "cancellingTransactionID", skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionID>,
}

impl_definition!(
    StopLossOrderTransaction,
    "Stop Loss Order {id}",
    "Create Stop Loss Order {id} ({reason}): Close Trade {tradeID} @ {price}{distance}",
    DEPENDENT_ORDER_DEFAULTS
);

/// Rejected stop loss order request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct StopLossOrderRejectTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Trade, price and distance of the dependent order
    #[serde(flatten)]
    pub params: DependentOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Fill that opened the trade this order depends on
    #[serde(rename = "orderFillTransactionID", skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionID>,
    /// Order the rejected request would have replaced
    #[serde(rename = "intendedReplacesOrderID", skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderID>,
    /// Why the request was rejected
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<RejectReason>,
}

impl_definition!(
    StopLossOrderRejectTransaction,
    "Stop Loss Order Reject {id}",
    "Reject Stop Loss Order ({reason}): Close Trade {tradeID} @ {price}{distance}, {rejectReason}",
    DEPENDENT_ORDER_DEFAULTS
);

/// A trailing stop loss order was created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TrailingStopLossOrderTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Trade, price and distance of the dependent order
    #[serde(flatten)]
    pub params: DependentOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Fill that opened the trade this order depends on
    #[serde(rename = "orderFillTransactionID", skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionID>,
    /// Order this one replaces
    #[serde(rename = "replacesOrderID", skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderID>,
    /// Transaction that cancelled the order
    #[serde(rename = "cancellingTransactionID", skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionID>,
}

impl_definition!(
    TrailingStopLossOrderTransaction,
    "Trailing Stop Loss Order {id}",
    "Create Trailing Stop Loss Order {id} ({reason}): Close Trade {tradeID} @ {distance}",
    DEPENDENT_ORDER_DEFAULTS
);

/// Rejected trailing stop loss order request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TrailingStopLossOrderRejectTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Trade, price and distance of the dependent order
    #[serde(flatten)]
    pub params: DependentOrderParams,
    /// Why the order was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Fill that opened the trade this order depends on
    #[serde(rename = "orderFillTransactionID", skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction_id: Option<TransactionID>,
    /// Order the rejected request would have replaced
    #[serde(rename = "intendedReplacesOrderID", skip_serializing_if = "Option::is_none")]
    pub intended_replaces_order_id: Option<OrderID>,
    /// Why the request was rejected
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<RejectReason>,
}

impl_definition!(
    TrailingStopLossOrderRejectTransaction,
    "Trailing Stop Loss Order Reject {id}",
    "Reject Trailing Stop Loss Order ({reason}): Close Trade {tradeID} @ {distance}, {rejectReason}",
    DEPENDENT_ORDER_DEFAULTS
);

/// An order was filled, opening and/or closing trades
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderFillTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Order this transaction refers to
    #[serde(rename = "orderID", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderID>,
    /// Client id of the order
    #[serde(rename = "clientOrderID", skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<ClientID>,
    /// Instrument filled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Units filled; negative for a sell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    /// Quote to home conversion applied to gains
    #[serde(
        rename = "gainQuoteHomeConversionFactor",
        skip_serializing_if = "Option::is_none"
    )]
    pub gain_quote_home_conversion_factor: Option<DecimalNumber>,
    /// Quote to home conversion applied to losses
    #[serde(
        rename = "lossQuoteHomeConversionFactor",
        skip_serializing_if = "Option::is_none"
    )]
    pub loss_quote_home_conversion_factor: Option<DecimalNumber>,
    /// Average fill price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(rename = "fullVWAP", skip_serializing_if = "Option::is_none")]
    pub full_vwap: Option<PriceValue>,
    /// Price in effect when the order filled
    #[serde(rename = "fullPrice", skip_serializing_if = "Option::is_none")]
    pub full_price: Option<ClientPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Realized profit/loss of the fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl: Option<AccountUnits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<AccountUnits>,
    #[serde(rename = "guaranteedExecutionFee", skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_fee: Option<AccountUnits>,
    #[serde(rename = "accountBalance", skip_serializing_if = "Option::is_none")]
    pub account_balance: Option<AccountUnits>,
    #[serde(rename = "tradeOpened", skip_serializing_if = "Option::is_none")]
    pub trade_opened: Option<TradeOpen>,
    /// Trades closed by the fill, in the order the API listed them
    #[serde(rename = "tradesClosed", skip_serializing_if = "Option::is_none")]
    pub trades_closed: Option<Vec<TradeReduce>>,
    #[serde(rename = "tradeReduced", skip_serializing_if = "Option::is_none")]
    pub trade_reduced: Option<TradeReduce>,
    #[serde(rename = "halfSpreadCost", skip_serializing_if = "Option::is_none")]
    pub half_spread_cost: Option<AccountUnits>,
}

impl_definition!(
    OrderFillTransaction,
    "Order Fill {id}",
    "Fill Order {orderID} ({reason}): {units} of {instrument} @ {price}"
);

/// An order was cancelled
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderCancelTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Order this transaction refers to
    #[serde(rename = "orderID", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderID>,
    /// Client id of the order
    #[serde(rename = "clientOrderID", skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<ClientID>,
    /// Why the order was cancelled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Order that replaced the cancelled one
    #[serde(rename = "replacedByOrderID", skip_serializing_if = "Option::is_none")]
    pub replaced_by_order_id: Option<OrderID>,
}

impl_definition!(
    OrderCancelTransaction,
    "Order Cancel {id}",
    "Cancel Order {orderID} ({reason})"
);

/// Rejected order cancellation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderCancelRejectTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Order this transaction refers to
    #[serde(rename = "orderID", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderID>,
    /// Client id of the order
    #[serde(rename = "clientOrderID", skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<ClientID>,
    /// Why the request was rejected
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<RejectReason>,
}

impl_definition!(
    OrderCancelRejectTransaction,
    "Order Cancel Reject {id}",
    "Order Cancel Reject {orderID}: {rejectReason}"
);

/// Client extensions of an order (and of the trade it will open) modified
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderClientExtensionsModifyTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Order this transaction refers to
    #[serde(rename = "orderID", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderID>,
    /// Client id of the order
    #[serde(rename = "clientOrderID", skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<ClientID>,
    /// New client extensions of the order
    #[serde(rename = "clientExtensionsModify", skip_serializing_if = "Option::is_none")]
    pub client_extensions_modify: Option<ClientExtensions>,
    /// New client extensions of the trade
    #[serde(
        rename = "tradeClientExtensionsModify",
        skip_serializing_if = "Option::is_none"
    )]
    pub trade_client_extensions_modify: Option<ClientExtensions>,
}

impl_definition!(
    OrderClientExtensionsModifyTransaction,
    "Order Client Extensions Modify {id}",
    "Modify Order {orderID} Client Extensions"
);

/// Rejected change to an order's client extensions
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderClientExtensionsModifyRejectTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Order this transaction refers to
    #[serde(rename = "orderID", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderID>,
    /// Client id of the order
    #[serde(rename = "clientOrderID", skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<ClientID>,
    /// New client extensions of the order
    #[serde(rename = "clientExtensionsModify", skip_serializing_if = "Option::is_none")]
    pub client_extensions_modify: Option<ClientExtensions>,
    /// New client extensions of the trade
    #[serde(
        rename = "tradeClientExtensionsModify",
        skip_serializing_if = "Option::is_none"
    )]
    pub trade_client_extensions_modify: Option<ClientExtensions>,
    /// Why the request was rejected
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<RejectReason>,
}

impl_definition!(
    OrderClientExtensionsModifyRejectTransaction,
    "Order Client Extensions Modify Reject {id}",
    "Reject Modify Order {orderID} Client Extensions: {rejectReason}"
);

/// Client extensions of a trade modified
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TradeClientExtensionsModifyTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Trade this transaction refers to
    #[serde(rename = "tradeID", skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeID>,
    /// Client id of the trade
    #[serde(rename = "clientTradeID", skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientID>,
    /// New client extensions of the trade
    #[serde(
        rename = "tradeClientExtensionsModify",
        skip_serializing_if = "Option::is_none"
    )]
    pub trade_client_extensions_modify: Option<ClientExtensions>,
}

impl_definition!(
    TradeClientExtensionsModifyTransaction,
    "Trade Client Extensions Modify {id}",
    "Modify Trade {tradeID} Client Extensions"
);

/// Rejected change to a trade's client extensions
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TradeClientExtensionsModifyRejectTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Trade this transaction refers to
    #[serde(rename = "tradeID", skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<TradeID>,
    /// Client id of the trade
    #[serde(rename = "clientTradeID", skip_serializing_if = "Option::is_none")]
    pub client_trade_id: Option<ClientID>,
    /// New client extensions of the trade
    #[serde(
        rename = "tradeClientExtensionsModify",
        skip_serializing_if = "Option::is_none"
    )]
    pub trade_client_extensions_modify: Option<ClientExtensions>,
    /// Why the request was rejected
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<RejectReason>,
}

impl_definition!(
    TradeClientExtensionsModifyRejectTransaction,
    "Trade Client Extensions Modify Reject {id}",
    "Reject Modify Trade {tradeID} Client Extensions: {rejectReason}"
);

/// The account entered a margin call
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarginCallEnterTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
}

impl_definition!(MarginCallEnterTransaction, "Margin Call Enter {id}", "Margin Call Enter");

/// A margin call was extended
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarginCallExtendTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Number of the extension within the current margin call
    #[serde(rename = "extensionNumber", skip_serializing_if = "Option::is_none")]
    pub extension_number: Option<i64>,
}

impl_definition!(
    MarginCallExtendTransaction,
    "Margin Call Extend {id}",
    "Margin Call Enter (extension {extensionNumber})"
);

/// The account left its margin call
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarginCallExitTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
}

impl_definition!(MarginCallExitTransaction, "Margin Call Exit {id}", "Margin Call Exit");

/// Trades whose close was delayed because their instrument was not tradeable
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct DelayedTradeClosureTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Why the closure was delayed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Trades whose closure was delayed
    #[serde(rename = "tradeIDs", skip_serializing_if = "Option::is_none")]
    pub trade_ids: Option<Vec<TradeID>>,
}

impl_definition!(
    DelayedTradeClosureTransaction,
    "Delayed Trade Closure {id}",
    "Delayed Trade Closure ({reason})"
);

/// Daily financing debited or credited
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct DailyFinancingTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
    /// Financing paid (negative) or collected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    /// Account balance after the transaction
    #[serde(rename = "accountBalance", skip_serializing_if = "Option::is_none")]
    pub account_balance: Option<AccountUnits>,
    /// How financing is charged to the account
    #[serde(rename = "accountFinancingMode", skip_serializing_if = "Option::is_none")]
    pub account_financing_mode: Option<String>,
    /// Per position breakdown, in the order the API listed them
    #[serde(rename = "positionFinancings", skip_serializing_if = "Option::is_none")]
    pub position_financings: Option<Vec<PositionFinancing>>,
}

impl_definition!(
    DailyFinancingTransaction,
    "Daily Financing {id}",
    "Daily Account Financing ({financing})"
);

/// The resettable profit/loss of the account was reset
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ResetResettablePLTransaction {
    /// Fields common to every transaction
    #[serde(flatten)]
    pub header: TransactionHeader,
}

impl_definition!(
    ResetResettablePLTransaction,
    "Reset Resettable PL {id}",
    "PL Reset"
);

macro_rules! transaction_variants {
    ($($variant:ident($ty:ty) => $tag:literal),+ $(,)?) => {
        /// A transaction of any kind
        #[derive(Debug, Clone, DisplaySimple, PartialEq)]
        pub enum Transaction {
            $(
                #[doc = concat!("`", $tag, "`")]
                $variant($ty),
            )+
            /// A tag with no dedicated variant, or a variant that failed to decode
            Unknown(BaseTransaction),
        }

        /// Transaction discriminator
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TransactionType {
            $(
                #[doc = concat!("`", $tag, "`")]
                $variant,
            )+
        }

        impl TransactionType {
            /// Every transaction type, in declaration order
            pub const ALL: &'static [TransactionType] = &[$(TransactionType::$variant,)+];

            /// Wire tag of this transaction type
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(TransactionType::$variant => $tag,)+
                }
            }
        }

        impl Transaction {
            /// Type of the variant, `None` for [`Transaction::Unknown`]
            pub fn kind(&self) -> Option<TransactionType> {
                match self {
                    $(Transaction::$variant(_) => Some(TransactionType::$variant),)+
                    Transaction::Unknown(_) => None,
                }
            }

            /// Common fields
            pub fn header(&self) -> &TransactionHeader {
                match self {
                    $(Transaction::$variant(t) => &t.header,)+
                    Transaction::Unknown(t) => &t.header,
                }
            }

            /// Rendered name template of the variant
            pub fn title(&self) -> String {
                match self {
                    $(Transaction::$variant(t) => t.title(),)+
                    Transaction::Unknown(t) => t.title(),
                }
            }

            /// Rendered summary template of the variant
            pub fn summary(&self) -> String {
                match self {
                    $(Transaction::$variant(t) => t.summary(),)+
                    Transaction::Unknown(t) => t.summary(),
                }
            }

            /// Fields the variant defaults when absent
            pub fn defaults(&self) -> &'static [FieldDefault] {
                match self {
                    $(Transaction::$variant(_) => <$ty as Definition>::DEFAULTS,)+
                    Transaction::Unknown(_) => <BaseTransaction as Definition>::DEFAULTS,
                }
            }

            /// JSON form, with the `type` tag of the variant
            pub fn to_value(&self) -> Result<Value, serde_json::Error> {
                match self {
                    $(Transaction::$variant(t) => Ok(tagged_value($tag, serde_json::to_value(t)?)),)+
                    Transaction::Unknown(t) => serde_json::to_value(t),
                }
            }
        }

        static TRANSACTION_REGISTRY: Lazy<Registry<Transaction>> = Lazy::new(|| {
            Registry::new("transaction", |value| {
                Transaction::Unknown(BaseTransaction::from_value(value))
            })
            $(.register($tag, |value| <$ty>::deserialize(value).map(Transaction::$variant)))+
        });
    };
}

transaction_variants! {
    Create(CreateTransaction) => "CREATE",
    Close(CloseTransaction) => "CLOSE",
    Reopen(ReopenTransaction) => "REOPEN",
    ClientConfigure(ClientConfigureTransaction) => "CLIENT_CONFIGURE",
    ClientConfigureReject(ClientConfigureRejectTransaction) => "CLIENT_CONFIGURE_REJECT",
    TransferFunds(TransferFundsTransaction) => "TRANSFER_FUNDS",
    TransferFundsReject(TransferFundsRejectTransaction) => "TRANSFER_FUNDS_REJECT",
    MarketOrder(MarketOrderTransaction) => "MARKET_ORDER",
    MarketOrderReject(MarketOrderRejectTransaction) => "MARKET_ORDER_REJECT",
    FixedPriceOrder(FixedPriceOrderTransaction) => "FIXED_PRICE_ORDER",
    LimitOrder(LimitOrderTransaction) => "LIMIT_ORDER",
    LimitOrderReject(LimitOrderRejectTransaction) => "LIMIT_ORDER_REJECT",
    StopOrder(StopOrderTransaction) => "STOP_ORDER",
    StopOrderReject(StopOrderRejectTransaction) => "STOP_ORDER_REJECT",
    MarketIfTouchedOrder(MarketIfTouchedOrderTransaction) => "MARKET_IF_TOUCHED_ORDER",
    MarketIfTouchedOrderReject(MarketIfTouchedOrderRejectTransaction) => "MARKET_IF_TOUCHED_ORDER_REJECT",
    TakeProfitOrder(TakeProfitOrderTransaction) => "TAKE_PROFIT_ORDER",
    TakeProfitOrderReject(TakeProfitOrderRejectTransaction) => "TAKE_PROFIT_ORDER_REJECT",
    StopLossOrder(StopLossOrderTransaction) => "STOP_LOSS_ORDER",
    StopLossOrderReject(StopLossOrderRejectTransaction) => "STOP_LOSS_ORDER_REJECT",
    TrailingStopLossOrder(TrailingStopLossOrderTransaction) => "TRAILING_STOP_LOSS_ORDER",
    TrailingStopLossOrderReject(TrailingStopLossOrderRejectTransaction) => "TRAILING_STOP_LOSS_ORDER_REJECT",
    OrderFill(OrderFillTransaction) => "ORDER_FILL",
    OrderCancel(OrderCancelTransaction) => "ORDER_CANCEL",
    OrderCancelReject(OrderCancelRejectTransaction) => "ORDER_CANCEL_REJECT",
    OrderClientExtensionsModify(OrderClientExtensionsModifyTransaction) => "ORDER_CLIENT_EXTENSIONS_MODIFY",
    OrderClientExtensionsModifyReject(OrderClientExtensionsModifyRejectTransaction) => "ORDER_CLIENT_EXTENSIONS_MODIFY_REJECT",
    TradeClientExtensionsModify(TradeClientExtensionsModifyTransaction) => "TRADE_CLIENT_EXTENSIONS_MODIFY",
    TradeClientExtensionsModifyReject(TradeClientExtensionsModifyRejectTransaction) => "TRADE_CLIENT_EXTENSIONS_MODIFY_REJECT",
    MarginCallEnter(MarginCallEnterTransaction) => "MARGIN_CALL_ENTER",
    MarginCallExtend(MarginCallExtendTransaction) => "MARGIN_CALL_EXTEND",
    MarginCallExit(MarginCallExitTransaction) => "MARGIN_CALL_EXIT",
    DelayedTradeClosure(DelayedTradeClosureTransaction) => "DELAYED_TRADE_CLOSURE",
    DailyFinancing(DailyFinancingTransaction) => "DAILY_FINANCING",
    ResetResettablePL(ResetResettablePLTransaction) => "RESET_RESETTABLE_PL",
}

impl TransactionType {
    /// Looks a transaction type up by its wire tag
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransactionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        TransactionType::from_tag(&tag)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown transaction type {tag}")))
    }
}

impl Transaction {
    /// Decodes any JSON value; never fails
    pub fn from_value(value: &Value) -> Self {
        TRANSACTION_REGISTRY.decode(value)
    }

    /// Wire tag; the received tag for [`Transaction::Unknown`]
    pub fn type_tag(&self) -> Option<&str> {
        match self {
            Transaction::Unknown(t) => t.kind.as_deref(),
            other => other.kind().map(TransactionType::as_str),
        }
    }

    /// Transaction id
    pub fn id(&self) -> Option<&str> {
        self.header().id.as_deref()
    }

    /// Whether this is one of the `*_REJECT` kinds
    pub fn is_reject(&self) -> bool {
        self.type_tag().is_some_and(|tag| tag.ends_with("_REJECT"))
    }
}

impl Serialize for Transaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Transaction::from_value(&value))
    }
}

impl From<&Value> for Transaction {
    fn from(value: &Value) -> Self {
        Transaction::from_value(value)
    }
}

fn heartbeat_type() -> String {
    HEARTBEAT_TYPE.to_string()
}

/// Liveness record of the transaction stream
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TransactionHeartbeat {
    /// Always `HEARTBEAT`
    #[serde(rename = "type", default = "heartbeat_type")]
    pub kind: String,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Server time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WireTime>,
}

impl Default for TransactionHeartbeat {
    fn default() -> Self {
        Self {
            kind: heartbeat_type(),
            last_transaction_id: None,
            time: None,
        }
    }
}

impl_definition!(
    TransactionHeartbeat,
    "Transaction Heartbeat",
    "Transaction Heartbeat {time} (last {lastTransactionID})",
    &[FieldDefault::new("type", HEARTBEAT_TYPE)]
);
