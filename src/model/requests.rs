/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{MAX_CANDLE_COUNT, MAX_TRANSACTION_PAGE_SIZE};
use crate::error::AppError;
use crate::presentation::details::{
    ClientExtensions, StopLossDetails, TakeProfitDetails, TrailingStopLossDetails,
};
use crate::presentation::instrument::{CandlestickGranularity, PriceComponents};
use crate::presentation::order::OrderRequest;
use crate::presentation::primitives::{
    DecimalNumber, InstrumentName, OrderState, TradeState, TransactionID, WireTime,
};
use crate::presentation::transaction::TransactionType;
use pretty_simple_display::DisplaySimple;
use serde::Serialize;

/// Query string pairs, in the order they are sent
pub type QueryPairs = Vec<(String, String)>;

fn push<T: ToString>(query: &mut QueryPairs, key: &str, value: Option<T>) {
    if let Some(value) = value {
        query.push((key.to_string(), value.to_string()));
    }
}

fn push_list(query: &mut QueryPairs, key: &str, values: &[String]) {
    if !values.is_empty() {
        query.push((key.to_string(), values.join(",")));
    }
}

/// Body of `order.create` and `order.replace`
#[derive(Debug, Clone, DisplaySimple, Serialize, PartialEq)]
pub struct CreateOrderBody {
    /// Order to create
    pub order: OrderRequest,
}

impl CreateOrderBody {
    /// Wraps a request, validating it first
    pub fn new(order: OrderRequest) -> Result<Self, AppError> {
        order.validate()?;
        Ok(Self { order })
    }
}

/// Body of `accounts.configure`
#[derive(Debug, Clone, DisplaySimple, Serialize, PartialEq, Default)]
pub struct ConfigureAccountRequest {
    /// Client-defined alias of the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Margin rate override
    #[serde(rename = "marginRate", skip_serializing_if = "Option::is_none")]
    pub margin_rate: Option<DecimalNumber>,
}

impl ConfigureAccountRequest {
    /// Sets the alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the margin rate
    pub fn with_margin_rate(mut self, margin_rate: impl Into<String>) -> Self {
        self.margin_rate = Some(margin_rate.into());
        self
    }

    /// At least one field must be set
    pub fn validate(&self) -> Result<(), AppError> {
        if self.alias.is_none() && self.margin_rate.is_none() {
            return Err(AppError::InvalidInput(
                "account configuration needs an alias or a margin rate".to_string(),
            ));
        }
        Ok(())
    }
}

/// Body of `trade.close`
#[derive(Debug, Clone, DisplaySimple, Serialize, PartialEq)]
pub struct CloseTradeRequest {
    /// Units to close, or `ALL`
    pub units: String,
}

impl CloseTradeRequest {
    /// Closes the whole trade
    pub fn all() -> Self {
        Self {
            units: "ALL".to_string(),
        }
    }

    /// Closes part of the trade
    pub fn partial(units: impl Into<String>) -> Self {
        Self {
            units: units.into(),
        }
    }
}

impl Default for CloseTradeRequest {
    fn default() -> Self {
        Self::all()
    }
}

/// Body of `position.close`; each side takes `ALL`, `NONE` or a unit count
#[derive(Debug, Clone, DisplaySimple, Serialize, PartialEq, Default)]
pub struct ClosePositionRequest {
    /// Long units to close, `ALL` or `NONE`
    #[serde(rename = "longUnits", skip_serializing_if = "Option::is_none")]
    pub long_units: Option<String>,
    /// Client extensions for the long closing order
    #[serde(rename = "longClientExtensions", skip_serializing_if = "Option::is_none")]
    pub long_client_extensions: Option<ClientExtensions>,
    /// Short units to close, `ALL` or `NONE`
    #[serde(rename = "shortUnits", skip_serializing_if = "Option::is_none")]
    pub short_units: Option<String>,
    /// Client extensions for the short closing order
    #[serde(rename = "shortClientExtensions", skip_serializing_if = "Option::is_none")]
    pub short_client_extensions: Option<ClientExtensions>,
}

impl ClosePositionRequest {
    /// Closes the long side entirely
    pub fn long_all() -> Self {
        Self {
            long_units: Some("ALL".to_string()),
            ..Default::default()
        }
    }

    /// Closes the short side entirely
    pub fn short_all() -> Self {
        Self {
            short_units: Some("ALL".to_string()),
            ..Default::default()
        }
    }

    /// Closes both sides entirely
    pub fn both() -> Self {
        Self {
            long_units: Some("ALL".to_string()),
            short_units: Some("ALL".to_string()),
            ..Default::default()
        }
    }

    /// At least one side must be given
    pub fn validate(&self) -> Result<(), AppError> {
        if self.long_units.is_none() && self.short_units.is_none() {
            return Err(AppError::InvalidInput(
                "closing a position needs longUnits or shortUnits".to_string(),
            ));
        }
        Ok(())
    }
}

/// Body of `order.setClientExtensions`
#[derive(Debug, Clone, DisplaySimple, Serialize, PartialEq, Default)]
pub struct OrderClientExtensionsRequest {
    /// New client extensions of the order
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// Extensions given to the trade the order opens
    #[serde(rename = "tradeClientExtensions", skip_serializing_if = "Option::is_none")]
    pub trade_client_extensions: Option<ClientExtensions>,
}

/// Body of `trade.setClientExtensions`
#[derive(Debug, Clone, DisplaySimple, Serialize, PartialEq, Default)]
pub struct TradeClientExtensionsRequest {
    /// New client extensions of the trade
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
}

/// Change to one dependent order of a trade.
///
/// A cancel is sent as `null`; [`DependentOrderChange::Keep`] omits the key.
#[derive(Debug, Clone, PartialEq)]
pub enum DependentOrderChange<T> {
    /// Do not touch the dependent order
    Keep,
    /// Create or replace the dependent order
    Set(T),
    /// Cancel the dependent order
    Cancel,
}

impl<T> Default for DependentOrderChange<T> {
    fn default() -> Self {
        DependentOrderChange::Keep
    }
}

impl<T> DependentOrderChange<T> {
    fn is_keep(&self) -> bool {
        matches!(self, DependentOrderChange::Keep)
    }
}

impl<T: Serialize> Serialize for DependentOrderChange<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DependentOrderChange::Set(details) => details.serialize(serializer),
            DependentOrderChange::Keep | DependentOrderChange::Cancel => {
                serializer.serialize_none()
            }
        }
    }
}

/// Body of `trade.setDependentOrders`
#[derive(Debug, Clone, DisplaySimple, Serialize, PartialEq, Default)]
pub struct SetDependentOrdersRequest {
    /// Take profit change
    #[serde(rename = "takeProfit", skip_serializing_if = "DependentOrderChange::is_keep")]
    pub take_profit: DependentOrderChange<TakeProfitDetails>,
    /// Stop loss change
    #[serde(rename = "stopLoss", skip_serializing_if = "DependentOrderChange::is_keep")]
    pub stop_loss: DependentOrderChange<StopLossDetails>,
    /// Trailing stop loss change
    #[serde(
        rename = "trailingStopLoss",
        skip_serializing_if = "DependentOrderChange::is_keep"
    )]
    pub trailing_stop_loss: DependentOrderChange<TrailingStopLossDetails>,
}

impl SetDependentOrdersRequest {
    /// Sets the take profit
    pub fn with_take_profit(mut self, details: TakeProfitDetails) -> Self {
        self.take_profit = DependentOrderChange::Set(details);
        self
    }

    /// Sets the stop loss
    pub fn with_stop_loss(mut self, details: StopLossDetails) -> Self {
        self.stop_loss = DependentOrderChange::Set(details);
        self
    }

    /// Sets the trailing stop loss
    pub fn with_trailing_stop_loss(mut self, details: TrailingStopLossDetails) -> Self {
        self.trailing_stop_loss = DependentOrderChange::Set(details);
        self
    }

    /// Cancels the take profit
    pub fn cancel_take_profit(mut self) -> Self {
        self.take_profit = DependentOrderChange::Cancel;
        self
    }

    /// Cancels the stop loss
    pub fn cancel_stop_loss(mut self) -> Self {
        self.stop_loss = DependentOrderChange::Cancel;
        self
    }

    /// Cancels the trailing stop loss
    pub fn cancel_trailing_stop_loss(mut self) -> Self {
        self.trailing_stop_loss = DependentOrderChange::Cancel;
        self
    }
}

/// Query of `instrument.candles`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandlesQuery {
    /// Price components, `M` when not set
    pub price: PriceComponents,
    /// Granularity, `S5` when not set
    pub granularity: CandlestickGranularity,
    pub count: Option<u32>,
    pub from: Option<WireTime>,
    pub to: Option<WireTime>,
    /// Whether candles open at the previous close
    pub smooth: Option<bool>,
    pub include_first: Option<bool>,
    /// Hour of day used for daily alignment
    pub daily_alignment: Option<u8>,
    pub alignment_timezone: Option<String>,
    pub weekly_alignment: Option<String>,
}

impl CandlesQuery {
    /// Latest `count` candles of a granularity
    pub fn latest(granularity: CandlestickGranularity, count: u32) -> Self {
        Self {
            granularity,
            count: Some(count),
            ..Default::default()
        }
    }

    /// Candles of a time range
    pub fn range(
        granularity: CandlestickGranularity,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            granularity,
            from: Some(from.into()),
            to: Some(to.into()),
            ..Default::default()
        }
    }

    /// Sets the price components
    pub fn with_price(mut self, price: PriceComponents) -> Self {
        self.price = price;
        self
    }

    /// Checks the combination of range parameters
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(count) = self.count {
            if count == 0 || count > MAX_CANDLE_COUNT {
                return Err(AppError::InvalidInput(format!(
                    "candle count must be between 1 and {MAX_CANDLE_COUNT}, got {count}"
                )));
            }
            if self.from.is_some() && self.to.is_some() {
                return Err(AppError::InvalidInput(
                    "candle count cannot be combined with both from and to".to_string(),
                ));
            }
        }
        if self.daily_alignment.is_some_and(|h| h > 23) {
            return Err(AppError::InvalidInput(
                "daily alignment must be an hour between 0 and 23".to_string(),
            ));
        }
        Ok(())
    }

    /// Query pairs
    pub fn to_query(&self) -> QueryPairs {
        let mut query = vec![
            ("price".to_string(), self.price.as_str().to_string()),
            ("granularity".to_string(), self.granularity.as_str().to_string()),
        ];
        push(&mut query, "count", self.count);
        push(&mut query, "from", self.from.as_deref());
        push(&mut query, "to", self.to.as_deref());
        push(&mut query, "smooth", self.smooth);
        push(&mut query, "includeFirst", self.include_first);
        push(&mut query, "dailyAlignment", self.daily_alignment);
        push(&mut query, "alignmentTimezone", self.alignment_timezone.as_deref());
        push(&mut query, "weeklyAlignment", self.weekly_alignment.as_deref());
        query
    }
}

/// Filter of `order.list`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderListQuery {
    /// Only these order ids
    pub ids: Vec<String>,
    /// Only orders in this state
    pub state: Option<OrderState>,
    /// Only orders for this instrument
    pub instrument: Option<InstrumentName>,
    /// Maximum number of orders
    pub count: Option<u32>,
    /// Only orders with an id lower than this one
    pub before_id: Option<String>,
}

impl OrderListQuery {
    /// Query pairs
    pub fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push_list(&mut query, "ids", &self.ids);
        push(&mut query, "state", self.state.map(order_state_tag));
        push(&mut query, "instrument", self.instrument.as_deref());
        push(&mut query, "count", self.count);
        push(&mut query, "beforeID", self.before_id.as_deref());
        query
    }
}

fn order_state_tag(state: OrderState) -> &'static str {
    match state {
        OrderState::Pending => "PENDING",
        OrderState::Filled => "FILLED",
        OrderState::Triggered => "TRIGGERED",
        OrderState::Cancelled => "CANCELLED",
    }
}

/// Filter of `trade.list`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TradeListQuery {
    /// Only these trade ids
    pub ids: Vec<String>,
    /// Only trades in this state
    pub state: Option<TradeState>,
    /// Only trades for this instrument
    pub instrument: Option<InstrumentName>,
    /// Maximum number of trades
    pub count: Option<u32>,
    /// Only trades with an id lower than this one
    pub before_id: Option<String>,
}

impl TradeListQuery {
    /// Query pairs
    pub fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push_list(&mut query, "ids", &self.ids);
        push(&mut query, "state", self.state.map(trade_state_tag));
        push(&mut query, "instrument", self.instrument.as_deref());
        push(&mut query, "count", self.count);
        push(&mut query, "beforeID", self.before_id.as_deref());
        query
    }
}

fn trade_state_tag(state: TradeState) -> &'static str {
    match state {
        TradeState::Open => "OPEN",
        TradeState::Closed => "CLOSED",
        TradeState::CloseWhenTradeable => "CLOSE_WHEN_TRADEABLE",
    }
}

/// Query of `transaction.list`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionListQuery {
    /// Start of the time range
    pub from: Option<WireTime>,
    /// End of the time range
    pub to: Option<WireTime>,
    /// Transactions per page
    pub page_size: Option<u32>,
    /// Transaction types to keep; empty keeps all
    pub types: Vec<TransactionType>,
}

impl TransactionListQuery {
    /// Checks the page size
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(size) = self.page_size
            && (size == 0 || size > MAX_TRANSACTION_PAGE_SIZE)
        {
            return Err(AppError::InvalidInput(format!(
                "page size must be between 1 and {MAX_TRANSACTION_PAGE_SIZE}, got {size}"
            )));
        }
        Ok(())
    }

    /// Query pairs
    pub fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push(&mut query, "from", self.from.as_deref());
        push(&mut query, "to", self.to.as_deref());
        push(&mut query, "pageSize", self.page_size);
        let types: Vec<String> = self.types.iter().map(|t| t.as_str().to_string()).collect();
        push_list(&mut query, "type", &types);
        query
    }
}

/// Query of `transaction.range`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionRangeQuery {
    /// First transaction id, inclusive
    pub from: TransactionID,
    /// Last transaction id, inclusive
    pub to: TransactionID,
    /// Only these transaction types
    pub types: Vec<TransactionType>,
}

impl TransactionRangeQuery {
    /// Inclusive id range
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            types: Vec::new(),
        }
    }

    /// Query pairs
    pub fn to_query(&self) -> QueryPairs {
        let mut query = vec![
            ("from".to_string(), self.from.clone()),
            ("to".to_string(), self.to.clone()),
        ];
        let types: Vec<String> = self.types.iter().map(|t| t.as_str().to_string()).collect();
        push_list(&mut query, "type", &types);
        query
    }
}

/// Query of `pricing.get` and `pricing.stream`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PricingQuery {
    /// Instruments to price
    pub instruments: Vec<InstrumentName>,
    /// Only prices newer than this time
    pub since: Option<WireTime>,
    pub include_units_available: Option<bool>,
    pub include_home_conversions: Option<bool>,
    /// Stream only: send the current price first
    pub snapshot: Option<bool>,
}

impl PricingQuery {
    /// Prices of the given instruments
    pub fn new<I, S>(instruments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            instruments: instruments.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// At least one instrument is required
    pub fn validate(&self) -> Result<(), AppError> {
        if self.instruments.is_empty() {
            return Err(AppError::InvalidInput(
                "pricing needs at least one instrument".to_string(),
            ));
        }
        Ok(())
    }

    /// Query pairs of the polling endpoint
    pub fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push_list(&mut query, "instruments", &self.instruments);
        push(&mut query, "since", self.since.as_deref());
        push(&mut query, "includeUnitsAvailable", self.include_units_available);
        push(&mut query, "includeHomeConversions", self.include_home_conversions);
        query
    }

    /// Query pairs of the streaming endpoint
    pub fn to_stream_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push_list(&mut query, "instruments", &self.instruments);
        push(&mut query, "snapshot", self.snapshot);
        query
    }
}
