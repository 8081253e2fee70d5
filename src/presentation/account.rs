/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::impl_definition;
use crate::presentation::order::Order;
use crate::presentation::position::Position;
use crate::presentation::primitives::{
    AccountID, AccountUnits, Currency, DecimalNumber, TransactionID, WireTime,
};
use crate::presentation::trade::TradeSummary;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Account id and the tags attached to it
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct AccountProperties {
    /// Account identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AccountID>,
    /// Master account id, for sub accounts
    #[serde(rename = "mt4AccountID", skip_serializing_if = "Option::is_none")]
    pub mt4_account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl_definition!(AccountProperties, "Account {id}", "{id}");

/// Account state without its trades, positions and orders
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct AccountSummary {
    /// Account identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AccountID>,
    /// Client-assigned account alias
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Home currency of the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Current balance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<AccountUnits>,
    /// User that created the account
    #[serde(rename = "createdByUserID", skip_serializing_if = "Option::is_none")]
    pub created_by_user_id: Option<i64>,
    /// When the account was created
    #[serde(rename = "createdTime", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<WireTime>,
    /// Total realized profit/loss over the account lifetime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl: Option<AccountUnits>,
    /// Profit/loss since the last reset
    #[serde(rename = "resettablePL", skip_serializing_if = "Option::is_none")]
    pub resettable_pl: Option<AccountUnits>,
    /// When the resettable profit/loss was last reset
    #[serde(rename = "resettablePLTime", skip_serializing_if = "Option::is_none")]
    pub resettable_pl_time: Option<WireTime>,
    /// Total financing paid or collected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    /// Total commission paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<AccountUnits>,
    /// Client-provided margin rate override
    #[serde(rename = "marginRate", skip_serializing_if = "Option::is_none")]
    pub margin_rate: Option<DecimalNumber>,
    /// When the account entered a margin call
    #[serde(rename = "marginCallEnterTime", skip_serializing_if = "Option::is_none")]
    pub margin_call_enter_time: Option<WireTime>,
    /// Number of times the margin call was extended
    #[serde(rename = "marginCallExtensionCount", skip_serializing_if = "Option::is_none")]
    pub margin_call_extension_count: Option<i64>,
    /// When the margin call was last extended
    #[serde(rename = "lastMarginCallExtensionTime", skip_serializing_if = "Option::is_none")]
    pub last_margin_call_extension_time: Option<WireTime>,
    /// Number of open trades
    #[serde(rename = "openTradeCount", skip_serializing_if = "Option::is_none")]
    pub open_trade_count: Option<i64>,
    /// Number of open positions
    #[serde(rename = "openPositionCount", skip_serializing_if = "Option::is_none")]
    pub open_position_count: Option<i64>,
    /// Number of pending orders
    #[serde(rename = "pendingOrderCount", skip_serializing_if = "Option::is_none")]
    pub pending_order_count: Option<i64>,
    /// Whether long and short positions may coexist
    #[serde(rename = "hedgingEnabled", skip_serializing_if = "Option::is_none")]
    pub hedging_enabled: Option<bool>,
    /// Unrealized profit/loss of all open trades
    #[serde(rename = "unrealizedPL", skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<AccountUnits>,
    /// Net asset value
    #[serde(rename = "NAV", skip_serializing_if = "Option::is_none")]
    pub nav: Option<AccountUnits>,
    /// Margin currently used
    #[serde(rename = "marginUsed", skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<AccountUnits>,
    /// Margin still available
    #[serde(rename = "marginAvailable", skip_serializing_if = "Option::is_none")]
    pub margin_available: Option<AccountUnits>,
    /// Value of all open positions
    #[serde(rename = "positionValue", skip_serializing_if = "Option::is_none")]
    pub position_value: Option<AccountUnits>,
    /// Unrealized profit/loss used for margin closeout
    #[serde(rename = "marginCloseoutUnrealizedPL", skip_serializing_if = "Option::is_none")]
    pub margin_closeout_unrealized_pl: Option<AccountUnits>,
    /// Net asset value used for margin closeout
    #[serde(rename = "marginCloseoutNAV", skip_serializing_if = "Option::is_none")]
    pub margin_closeout_nav: Option<AccountUnits>,
    /// Margin used for margin closeout
    #[serde(rename = "marginCloseoutMarginUsed", skip_serializing_if = "Option::is_none")]
    pub margin_closeout_margin_used: Option<AccountUnits>,
    /// Margin closeout percentage, 1.0 triggers closeout
    #[serde(rename = "marginCloseoutPercent", skip_serializing_if = "Option::is_none")]
    pub margin_closeout_percent: Option<DecimalNumber>,
    /// Amount that can be withdrawn
    #[serde(rename = "withdrawalLimit", skip_serializing_if = "Option::is_none")]
    pub withdrawal_limit: Option<AccountUnits>,
    /// Margin used for margin call
    #[serde(rename = "marginCallMarginUsed", skip_serializing_if = "Option::is_none")]
    pub margin_call_margin_used: Option<AccountUnits>,
    /// Margin call percentage, 1.0 triggers a call
    #[serde(rename = "marginCallPercent", skip_serializing_if = "Option::is_none")]
    pub margin_call_percent: Option<DecimalNumber>,
    /// Last transaction created for the account
    #[serde(rename = "lastTransactionID", skip_serializing_if = "Option::is_none")]
    pub last_transaction_id: Option<TransactionID>,
}

impl_definition!(
    AccountSummary,
    "Account {id}",
    "{alias} ({id}): {balance} {currency}, NAV {NAV}"
);

/// Full account state
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Account {
    /// Account balances and counters
    #[serde(flatten)]
    pub summary: AccountSummary,
    /// Open trades
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trades: Option<Vec<TradeSummary>>,
    /// Positions, open or previously held
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<Position>>,
    /// Pending orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,
}

impl Account {
    /// Pending orders of the account
    pub fn pending_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().flatten().filter(|order| order.is_pending())
    }
}

impl_definition!(
    Account,
    "Account {id}",
    "{alias} ({id}): {balance} {currency}, NAV {NAV}"
);
