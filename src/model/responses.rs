/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Response envelopes, one per endpoint, with their status tables.

use crate::model::envelope::{ApiErrorBody, impl_envelope};
use crate::presentation::account::{Account, AccountProperties, AccountSummary};
use crate::presentation::instrument::{Candlestick, CandlestickGranularity, Instrument};
use crate::presentation::order::Order;
use crate::presentation::position::Position;
use crate::presentation::pricing::ClientPrice;
use crate::presentation::primitives::{InstrumentName, TransactionID, WireTime};
use crate::presentation::trade::Trade;
use crate::presentation::transaction::Transaction;
use pretty_simple_display::DisplaySimple;
use prettytable::{Cell, Row, Table, format};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `GET /v3/accounts`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct AccountsResponse {
    /// Accounts the token may access
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<AccountProperties>>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(AccountsResponse, "accounts.list", [200 => ["accounts"]]);

/// `GET /v3/accounts/{accountID}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct AccountResponse {
    /// The account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(AccountResponse, "accounts.get", [200 => ["account", "lastTransactionID"]]);

/// `GET /v3/accounts/{accountID}/summary`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct AccountSummaryResponse {
    /// Summary of the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountSummary>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(
    AccountSummaryResponse,
    "accounts.summary",
    [200 => ["account", "lastTransactionID"]]
);

/// `GET /v3/accounts/{accountID}/instruments`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct AccountInstrumentsResponse {
    /// Tradeable instruments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruments: Option<Vec<Instrument>>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(
    AccountInstrumentsResponse,
    "accounts.instruments",
    [200 => ["instruments", "lastTransactionID"]]
);

/// `PATCH /v3/accounts/{accountID}/configuration`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ConfigureAccountResponse {
    /// Client configure transaction
    #[serde(rename = "clientConfigureTransaction", skip_serializing_if = "Option::is_none")]
    pub client_configure_transaction: Option<Transaction>,
    /// Client configure reject transaction
    #[serde(
        rename = "clientConfigureRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_configure_reject_transaction: Option<Transaction>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(ConfigureAccountResponse, "accounts.configure", [
    200 => ["clientConfigureTransaction", "lastTransactionID"],
    400 => ["clientConfigureRejectTransaction", "lastTransactionID", "errorCode", "errorMessage"],
    403 => ["clientConfigureRejectTransaction", "lastTransactionID", "errorCode", "errorMessage"],
]);

/// `GET /v3/instruments/{instrument}/candles`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CandlesResponse {
    /// Instrument of the candles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Candle granularity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<CandlestickGranularity>,
    /// Candles, oldest first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candles: Option<Vec<Candlestick>>,
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(
    CandlesResponse,
    "instrument.candles",
    [200 => ["instrument", "granularity", "candles"]]
);

/// `POST /v3/accounts/{accountID}/orders`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateOrderResponse {
    /// Order create transaction
    #[serde(rename = "orderCreateTransaction", skip_serializing_if = "Option::is_none")]
    pub order_create_transaction: Option<Transaction>,
    /// Order fill transaction
    #[serde(rename = "orderFillTransaction", skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction: Option<Transaction>,
    /// Order cancel transaction
    #[serde(rename = "orderCancelTransaction", skip_serializing_if = "Option::is_none")]
    pub order_cancel_transaction: Option<Transaction>,
    /// Order reissue transaction
    #[serde(rename = "orderReissueTransaction", skip_serializing_if = "Option::is_none")]
    pub order_reissue_transaction: Option<Transaction>,
    /// Order reissue reject transaction
    #[serde(
        rename = "orderReissueRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_reissue_reject_transaction: Option<Transaction>,
    /// Order reject transaction
    #[serde(rename = "orderRejectTransaction", skip_serializing_if = "Option::is_none")]
    pub order_reject_transaction: Option<Transaction>,
    /// Every transaction created by the request
    #[serde(rename = "relatedTransactionIDs", skip_serializing_if = "Option::is_none")]
    pub related_transaction_ids: Option<Vec<TransactionID>>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(CreateOrderResponse, "order.create", [
    201 => [
        "orderCreateTransaction", "orderFillTransaction", "orderCancelTransaction",
        "orderReissueTransaction", "orderReissueRejectTransaction",
        "relatedTransactionIDs", "lastTransactionID",
    ],
    400 => [
        "orderRejectTransaction", "relatedTransactionIDs", "lastTransactionID",
        "errorCode", "errorMessage",
    ],
    404 => [
        "orderRejectTransaction", "relatedTransactionIDs", "lastTransactionID",
        "errorCode", "errorMessage",
    ],
]);

/// `GET /v3/accounts/{accountID}/orders` and `/pendingOrders`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrdersResponse {
    /// Matching orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(OrdersResponse, "order.list", [200 => ["orders", "lastTransactionID"]]);

/// `GET /v3/accounts/{accountID}/orders/{orderSpecifier}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderResponse {
    /// The order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(OrderResponse, "order.get", [200 => ["order", "lastTransactionID"]]);

/// `PUT /v3/accounts/{accountID}/orders/{orderSpecifier}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ReplaceOrderResponse {
    /// Order cancel transaction
    #[serde(rename = "orderCancelTransaction", skip_serializing_if = "Option::is_none")]
    pub order_cancel_transaction: Option<Transaction>,
    /// Order create transaction
    #[serde(rename = "orderCreateTransaction", skip_serializing_if = "Option::is_none")]
    pub order_create_transaction: Option<Transaction>,
    /// Order fill transaction
    #[serde(rename = "orderFillTransaction", skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction: Option<Transaction>,
    /// Order reissue transaction
    #[serde(rename = "orderReissueTransaction", skip_serializing_if = "Option::is_none")]
    pub order_reissue_transaction: Option<Transaction>,
    /// Order reissue reject transaction
    #[serde(
        rename = "orderReissueRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_reissue_reject_transaction: Option<Transaction>,
    /// Replacing order cancel transaction
    #[serde(
        rename = "replacingOrderCancelTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub replacing_order_cancel_transaction: Option<Transaction>,
    /// Order reject transaction
    #[serde(rename = "orderRejectTransaction", skip_serializing_if = "Option::is_none")]
    pub order_reject_transaction: Option<Transaction>,
    /// Order cancel reject transaction
    #[serde(
        rename = "orderCancelRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_cancel_reject_transaction: Option<Transaction>,
    /// Every transaction created by the request
    #[serde(rename = "relatedTransactionIDs", skip_serializing_if = "Option::is_none")]
    pub related_transaction_ids: Option<Vec<TransactionID>>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(ReplaceOrderResponse, "order.replace", [
    201 => [
        "orderCancelTransaction", "orderCreateTransaction", "orderFillTransaction",
        "orderReissueTransaction", "orderReissueRejectTransaction",
        "replacingOrderCancelTransaction", "relatedTransactionIDs", "lastTransactionID",
    ],
    400 => [
        "orderRejectTransaction", "relatedTransactionIDs", "lastTransactionID",
        "errorCode", "errorMessage",
    ],
    404 => [
        "orderCancelRejectTransaction", "relatedTransactionIDs", "lastTransactionID",
        "errorCode", "errorMessage",
    ],
]);

/// `PUT /v3/accounts/{accountID}/orders/{orderSpecifier}/cancel`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CancelOrderResponse {
    /// Order cancel transaction
    #[serde(rename = "orderCancelTransaction", skip_serializing_if = "Option::is_none")]
    pub order_cancel_transaction: Option<Transaction>,
    /// Order cancel reject transaction
    #[serde(
        rename = "orderCancelRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_cancel_reject_transaction: Option<Transaction>,
    /// Every transaction created by the request
    #[serde(rename = "relatedTransactionIDs", skip_serializing_if = "Option::is_none")]
    pub related_transaction_ids: Option<Vec<TransactionID>>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(CancelOrderResponse, "order.cancel", [
    200 => ["orderCancelTransaction", "relatedTransactionIDs", "lastTransactionID"],
    404 => [
        "orderCancelRejectTransaction", "relatedTransactionIDs", "lastTransactionID",
        "errorCode", "errorMessage",
    ],
]);

/// `PUT /v3/accounts/{accountID}/orders/{orderSpecifier}/clientExtensions`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderClientExtensionsResponse {
    /// Order client extensions modify transaction
    #[serde(
        rename = "orderClientExtensionsModifyTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_client_extensions_modify_transaction: Option<Transaction>,
    /// Order client extensions modify reject transaction
    #[serde(
        rename = "orderClientExtensionsModifyRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_client_extensions_modify_reject_transaction: Option<Transaction>,
    /// Every transaction created by the request
    #[serde(rename = "relatedTransactionIDs", skip_serializing_if = "Option::is_none")]
    pub related_transaction_ids: Option<Vec<TransactionID>>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(OrderClientExtensionsResponse, "order.setClientExtensions", [
    200 => [
        "orderClientExtensionsModifyTransaction", "relatedTransactionIDs", "lastTransactionID",
    ],
    400 => [
        "orderClientExtensionsModifyRejectTransaction", "relatedTransactionIDs",
        "lastTransactionID", "errorCode", "errorMessage",
    ],
    404 => [
        "orderClientExtensionsModifyRejectTransaction", "relatedTransactionIDs",
        "lastTransactionID", "errorCode", "errorMessage",
    ],
]);

/// `GET /v3/accounts/{accountID}/trades` and `/openTrades`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TradesResponse {
    /// Matching trades
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trades: Option<Vec<Trade>>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(TradesResponse, "trade.list", [200 => ["trades", "lastTransactionID"]]);

fn cell(value: Option<&str>) -> Cell {
    Cell::new(value.unwrap_or("-"))
}

impl fmt::Display for TradesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(Row::new(vec![
            Cell::new("ID"),
            Cell::new("INSTRUMENT"),
            Cell::new("UNITS"),
            Cell::new("PRICE"),
            Cell::new("UNREALIZED PL"),
            Cell::new("OPENED"),
        ]));

        for trade in self.trades.iter().flatten() {
            let header = &trade.header;
            let opened = header
                .open_time
                .as_deref()
                .map(|t| t.split('T').next().unwrap_or(t));
            table.add_row(Row::new(vec![
                cell(header.id.as_deref()),
                cell(header.instrument.as_deref()),
                cell(header.current_units.as_deref()),
                cell(header.price.as_deref()),
                cell(header.unrealized_pl.as_deref()),
                cell(opened),
            ]));
        }
        write!(f, "{table}")
    }
}

/// `GET /v3/accounts/{accountID}/trades/{tradeSpecifier}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TradeResponse {
    /// The trade
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade: Option<Trade>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(TradeResponse, "trade.get", [200 => ["trade", "lastTransactionID"]]);

/// `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/close`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CloseTradeResponse {
    /// Order create transaction
    #[serde(rename = "orderCreateTransaction", skip_serializing_if = "Option::is_none")]
    pub order_create_transaction: Option<Transaction>,
    /// Order fill transaction
    #[serde(rename = "orderFillTransaction", skip_serializing_if = "Option::is_none")]
    pub order_fill_transaction: Option<Transaction>,
    /// Order cancel transaction
    #[serde(rename = "orderCancelTransaction", skip_serializing_if = "Option::is_none")]
    pub order_cancel_transaction: Option<Transaction>,
    /// Order reject transaction
    #[serde(rename = "orderRejectTransaction", skip_serializing_if = "Option::is_none")]
    pub order_reject_transaction: Option<Transaction>,
    /// Every transaction created by the request
    #[serde(rename = "relatedTransactionIDs", skip_serializing_if = "Option::is_none")]
    pub related_transaction_ids: Option<Vec<TransactionID>>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(CloseTradeResponse, "trade.close", [
    200 => [
        "orderCreateTransaction", "orderFillTransaction", "orderCancelTransaction",
        "relatedTransactionIDs", "lastTransactionID",
    ],
    400 => ["orderRejectTransaction", "errorCode", "errorMessage"],
    404 => [
        "orderRejectTransaction", "relatedTransactionIDs", "lastTransactionID",
        "errorCode", "errorMessage",
    ],
]);

/// `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/clientExtensions`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TradeClientExtensionsResponse {
    /// Trade client extensions modify transaction
    #[serde(
        rename = "tradeClientExtensionsModifyTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub trade_client_extensions_modify_transaction: Option<Transaction>,
    /// Trade client extensions modify reject transaction
    #[serde(
        rename = "tradeClientExtensionsModifyRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub trade_client_extensions_modify_reject_transaction: Option<Transaction>,
    /// Every transaction created by the request
    #[serde(rename = "relatedTransactionIDs", skip_serializing_if = "Option::is_none")]
    pub related_transaction_ids: Option<Vec<TransactionID>>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(TradeClientExtensionsResponse, "trade.setClientExtensions", [
    200 => [
        "tradeClientExtensionsModifyTransaction", "relatedTransactionIDs", "lastTransactionID",
    ],
    400 => [
        "tradeClientExtensionsModifyRejectTransaction", "relatedTransactionIDs",
        "lastTransactionID", "errorCode", "errorMessage",
    ],
    404 => [
        "tradeClientExtensionsModifyRejectTransaction", "relatedTransactionIDs",
        "lastTransactionID", "errorCode", "errorMessage",
    ],
]);

/// `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/orders`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TradeDependentOrdersResponse {
    /// Take profit order cancel transaction
    #[serde(
        rename = "takeProfitOrderCancelTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub take_profit_order_cancel_transaction: Option<Transaction>,
    /// Take profit order transaction
    #[serde(rename = "takeProfitOrderTransaction", skip_serializing_if = "Option::is_none")]
    pub take_profit_order_transaction: Option<Transaction>,
    /// Take profit order fill transaction
    #[serde(
        rename = "takeProfitOrderFillTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub take_profit_order_fill_transaction: Option<Transaction>,
    /// Cancellation of the take profit order just created
    #[serde(
        rename = "takeProfitOrderCreatedCancelTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub take_profit_order_created_cancel_transaction: Option<Transaction>,
    /// Stop loss order cancel transaction
    #[serde(
        rename = "stopLossOrderCancelTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_loss_order_cancel_transaction: Option<Transaction>,
    /// Stop loss order transaction
    #[serde(rename = "stopLossOrderTransaction", skip_serializing_if = "Option::is_none")]
    pub stop_loss_order_transaction: Option<Transaction>,
    /// Stop loss order fill transaction
    #[serde(
        rename = "stopLossOrderFillTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_loss_order_fill_transaction: Option<Transaction>,
    /// Cancellation of the stop loss order just created
    #[serde(
        rename = "stopLossOrderCreatedCancelTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_loss_order_created_cancel_transaction: Option<Transaction>,
    /// Trailing stop loss order cancel transaction
    #[serde(
        rename = "trailingStopLossOrderCancelTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub trailing_stop_loss_order_cancel_transaction: Option<Transaction>,
    /// Trailing stop loss order transaction
    #[serde(
        rename = "trailingStopLossOrderTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub trailing_stop_loss_order_transaction: Option<Transaction>,
    /// Take profit order cancel reject transaction
    #[serde(
        rename = "takeProfitOrderCancelRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub take_profit_order_cancel_reject_transaction: Option<Transaction>,
    /// Take profit order reject transaction
    #[serde(
        rename = "takeProfitOrderRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub take_profit_order_reject_transaction: Option<Transaction>,
    /// Stop loss order cancel reject transaction
    #[serde(
        rename = "stopLossOrderCancelRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_loss_order_cancel_reject_transaction: Option<Transaction>,
    /// Stop loss order reject transaction
    #[serde(
        rename = "stopLossOrderRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_loss_order_reject_transaction: Option<Transaction>,
    /// Trailing stop loss order cancel reject transaction
    #[serde(
        rename = "trailingStopLossOrderCancelRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub trailing_stop_loss_order_cancel_reject_transaction: Option<Transaction>,
    /// Trailing stop loss order reject transaction
    #[serde(
        rename = "trailingStopLossOrderRejectTransaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub trailing_stop_loss_order_reject_transaction: Option<Transaction>,
    /// Every transaction created by the request
    #[serde(rename = "relatedTransactionIDs", skip_serializing_if = "Option::is_none")]
    pub related_transaction_ids: Option<Vec<TransactionID>>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(TradeDependentOrdersResponse, "trade.setDependentOrders", [
    200 => [
        "takeProfitOrderCancelTransaction", "takeProfitOrderTransaction",
        "takeProfitOrderFillTransaction", "takeProfitOrderCreatedCancelTransaction",
        "stopLossOrderCancelTransaction", "stopLossOrderTransaction",
        "stopLossOrderFillTransaction", "stopLossOrderCreatedCancelTransaction",
        "trailingStopLossOrderCancelTransaction", "trailingStopLossOrderTransaction",
        "relatedTransactionIDs", "lastTransactionID",
    ],
    400 => [
        "takeProfitOrderCancelRejectTransaction", "takeProfitOrderRejectTransaction",
        "stopLossOrderCancelRejectTransaction", "stopLossOrderRejectTransaction",
        "trailingStopLossOrderCancelRejectTransaction", "trailingStopLossOrderRejectTransaction",
        "relatedTransactionIDs", "lastTransactionID", "errorCode", "errorMessage",
    ],
]);

/// `GET /v3/accounts/{accountID}/positions` and `/openPositions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PositionsResponse {
    /// Matching positions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<Position>>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(PositionsResponse, "position.list", [200 => ["positions", "lastTransactionID"]]);

impl fmt::Display for PositionsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(Row::new(vec![
            Cell::new("INSTRUMENT"),
            Cell::new("LONG"),
            Cell::new("SHORT"),
            Cell::new("PL"),
            Cell::new("UNREALIZED PL"),
            Cell::new("MARGIN USED"),
        ]));

        let mut positions: Vec<&Position> = self.positions.iter().flatten().collect();
        positions.sort_by(|a, b| a.instrument.cmp(&b.instrument));

        for position in positions {
            table.add_row(Row::new(vec![
                cell(position.instrument.as_deref()),
                cell(position.long.as_ref().and_then(|s| s.units.as_deref())),
                cell(position.short.as_ref().and_then(|s| s.units.as_deref())),
                cell(position.pl.as_deref()),
                cell(position.unrealized_pl.as_deref()),
                cell(position.margin_used.as_deref()),
            ]));
        }
        write!(f, "{table}")
    }
}

/// `GET /v3/accounts/{accountID}/positions/{instrument}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct PositionResponse {
    /// The position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(PositionResponse, "position.get", [200 => ["position", "lastTransactionID"]]);

/// `PUT /v3/accounts/{accountID}/positions/{instrument}/close`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ClosePositionResponse {
    /// Long order create transaction
    #[serde(rename = "longOrderCreateTransaction", skip_serializing_if = "Option::is_none")]
    pub long_order_create_transaction: Option<Transaction>,
    /// Long order fill transaction
    #[serde(rename = "longOrderFillTransaction", skip_serializing_if = "Option::is_none")]
    pub long_order_fill_transaction: Option<Transaction>,
    /// Long order cancel transaction
    #[serde(rename = "longOrderCancelTransaction", skip_serializing_if = "Option::is_none")]
    pub long_order_cancel_transaction: Option<Transaction>,
    /// Short order create transaction
    #[serde(rename = "shortOrderCreateTransaction", skip_serializing_if = "Option::is_none")]
    pub short_order_create_transaction: Option<Transaction>,
    /// Short order fill transaction
    #[serde(rename = "shortOrderFillTransaction", skip_serializing_if = "Option::is_none")]
    pub short_order_fill_transaction: Option<Transaction>,
    /// Short order cancel transaction
    #[serde(rename = "shortOrderCancelTransaction", skip_serializing_if = "Option::is_none")]
    pub short_order_cancel_transaction: Option<Transaction>,
    /// Long order reject transaction
    #[serde(rename = "longOrderRejectTransaction", skip_serializing_if = "Option::is_none")]
    pub long_order_reject_transaction: Option<Transaction>,
    /// Short order reject transaction
    #[serde(rename = "shortOrderRejectTransaction", skip_serializing_if = "Option::is_none")]
    pub short_order_reject_transaction: Option<Transaction>,
    /// Every transaction created by the request
    #[serde(rename = "relatedTransactionIDs", skip_serializing_if = "Option::is_none")]
    pub related_transaction_ids: Option<Vec<TransactionID>>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(ClosePositionResponse, "position.close", [
    200 => [
        "longOrderCreateTransaction", "longOrderFillTransaction", "longOrderCancelTransaction",
        "shortOrderCreateTransaction", "shortOrderFillTransaction", "shortOrderCancelTransaction",
        "relatedTransactionIDs", "lastTransactionID",
    ],
    400 => [
        "longOrderRejectTransaction", "shortOrderRejectTransaction", "relatedTransactionIDs",
        "lastTransactionID", "errorCode", "errorMessage",
    ],
    404 => [
        "longOrderRejectTransaction", "shortOrderRejectTransaction", "relatedTransactionIDs",
        "lastTransactionID", "errorCode", "errorMessage",
    ],
]);

/// `GET /v3/accounts/{accountID}/pricing`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PricesResponse {
    /// Current prices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<ClientPrice>>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(PricesResponse, "pricing.get", [200 => ["prices"]]);

impl fmt::Display for PricesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(Row::new(vec![
            Cell::new("INSTRUMENT"),
            Cell::new("BID"),
            Cell::new("ASK"),
            Cell::new("TRADEABLE"),
            Cell::new("TIME"),
        ]));

        for price in self.prices.iter().flatten() {
            let tradeable = price.tradeable.map(|t| t.to_string());
            table.add_row(Row::new(vec![
                cell(price.instrument.as_deref()),
                cell(price.best_bid()),
                cell(price.best_ask()),
                cell(tradeable.as_deref()),
                cell(price.time.as_deref()),
            ]));
        }
        write!(f, "{table}")
    }
}

/// `GET /v3/accounts/{accountID}/transactions`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TransactionPagesResponse {
    /// Start of the covered range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<WireTime>,
    /// End of the covered range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<WireTime>,
    /// Transactions per page
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Type filter applied, as sent back by the API
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_filter: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// URLs of the pages, each usable with the id range endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<String>>,
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(TransactionPagesResponse, "transaction.list", [
    200 => ["from", "to", "pageSize", "type", "count", "pages", "lastTransactionID"],
]);

/// `GET /v3/accounts/{accountID}/transactions/{transactionID}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TransactionResponse {
    /// The transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(TransactionResponse, "transaction.get", [
    200 => ["transaction", "lastTransactionID"],
]);

/// `GET /v3/accounts/{accountID}/transactions/idrange` and `/sinceid`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TransactionsResponse {
    /// Transactions, in id order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(TransactionsResponse, "transaction.range", [
    200 => ["transactions", "lastTransactionID"],
]);

/// Outcome of a streaming endpoint: the error shape when the stream is refused
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct StreamResponse {
    /// Error fields, present on failure
    #[serde(flatten)]
    pub error: ApiErrorBody,
}

impl_envelope!(StreamResponse, "stream", []);
