/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Orders as reported by the API, and the bodies used to create or replace them.

use crate::error::AppError;
use crate::impl_definition;
use crate::model::registry::{Registry, tagged_value};
use crate::presentation::definition::{
    DEPENDENT_ORDER_DEFAULTS, Definition, ENTRY_ORDER_DEFAULTS, FIXED_PRICE_ORDER_DEFAULTS,
    FieldDefault, MARKET_ORDER_DEFAULTS,
};
use crate::presentation::details::{
    ClientExtensions, DependentOrderParams, EntryOrderParams, FixedPriceOrderParams,
    MarketOrderParams, StopLossDetails, TakeProfitDetails, TrailingStopLossDetails,
};
use crate::presentation::primitives::{
    OrderID, OrderPositionFill, OrderState, OrderType, PriceValue, TimeInForce, TradeID,
    TransactionID, WireTime,
};
use once_cell::sync::Lazy;
use pretty_simple_display::DisplaySimple;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields common to every order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderHeader {
    /// Order id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderID>,
    /// Creation time
    #[serde(rename = "createTime", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<WireTime>,
    /// Current state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,
}

/// What happened to an order after it was created
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderLifecycle {
    /// Transaction that filled the order
    #[serde(rename = "fillingTransactionID", skip_serializing_if = "Option::is_none")]
    pub filling_transaction_id: Option<TransactionID>,
    /// When the order filled
    #[serde(rename = "filledTime", skip_serializing_if = "Option::is_none")]
    pub filled_time: Option<WireTime>,
    /// Trade opened by the fill
    #[serde(rename = "tradeOpenedID", skip_serializing_if = "Option::is_none")]
    pub trade_opened_id: Option<TradeID>,
    /// Trade reduced by the fill
    #[serde(rename = "tradeReducedID", skip_serializing_if = "Option::is_none")]
    pub trade_reduced_id: Option<TradeID>,
    /// Trades closed by the fill
    #[serde(rename = "tradeClosedIDs", skip_serializing_if = "Option::is_none")]
    pub trade_closed_ids: Option<Vec<TradeID>>,
    /// Transaction that cancelled the order
    #[serde(rename = "cancellingTransactionID", skip_serializing_if = "Option::is_none")]
    pub cancelling_transaction_id: Option<TransactionID>,
    /// When the order was cancelled
    #[serde(rename = "cancelledTime", skip_serializing_if = "Option::is_none")]
    pub cancelled_time: Option<WireTime>,
    /// Order this one replaces
    #[serde(rename = "replacesOrderID", skip_serializing_if = "Option::is_none")]
    pub replaces_order_id: Option<OrderID>,
    /// Order that replaced this one
    #[serde(rename = "replacedByOrderID", skip_serializing_if = "Option::is_none")]
    pub replaced_by_order_id: Option<OrderID>,
}

/// Common order fields only, used for tags without a dedicated variant
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct BaseOrder {
    /// Fields common to every order
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Client extensions of the order
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    pub client_extensions: Option<ClientExtensions>,
    /// Tag as received, if any
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl BaseOrder {
    /// Extracts the common fields from any JSON value, skipping fields of the wrong type
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(String::from);
        Self {
            header: OrderHeader {
                id: text("id"),
                create_time: text("createTime"),
                state: value
                    .get("state")
                    .and_then(|state| OrderState::deserialize(state).ok()),
            },
            client_extensions: value
                .get("clientExtensions")
                .and_then(|ext| ClientExtensions::deserialize(ext).ok()),
            kind: text("type"),
        }
    }
}

impl_definition!(BaseOrder, "Order {id}", "Order {id} ({type}) {state}");

/// Market order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketOrder {
    /// Fields common to every order
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Market order parameters
    #[serde(flatten)]
    pub params: MarketOrderParams,
    /// Fill, cancel and replace history
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

impl_definition!(
    MarketOrder,
    "Market Order {id}",
    "{units} units of {instrument}",
    MARKET_ORDER_DEFAULTS
);

/// Fixed price order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct FixedPriceOrder {
    /// Fields common to every order
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Fixed price order parameters
    #[serde(flatten)]
    pub params: FixedPriceOrderParams,
    /// Fill, cancel and replace history
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

impl_definition!(
    FixedPriceOrder,
    "Fixed Price Order {id}",
    "{units} units of {instrument} @ {price}",
    FIXED_PRICE_ORDER_DEFAULTS
);

/// Limit order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct LimitOrder {
    /// Fields common to every order
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Entry order parameters
    #[serde(flatten)]
    pub params: EntryOrderParams,
    /// Fill, cancel and replace history
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

impl_definition!(
    LimitOrder,
    "Limit Order {id}",
    "{units} units of {instrument} @ {price}",
    ENTRY_ORDER_DEFAULTS
);

/// Stop order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct StopOrder {
    /// Fields common to every order
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Entry order parameters
    #[serde(flatten)]
    pub params: EntryOrderParams,
    /// Fill, cancel and replace history
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

impl_definition!(
    StopOrder,
    "Stop Order {id}",
    "{units} units of {instrument} @ {price}",
    ENTRY_ORDER_DEFAULTS
);

/// Market-if-touched order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketIfTouchedOrder {
    /// Fields common to every order
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Entry order parameters
    #[serde(flatten)]
    pub params: EntryOrderParams,
    /// Price when the order was created
    #[serde(rename = "initialMarketPrice", skip_serializing_if = "Option::is_none")]
    pub initial_market_price: Option<PriceValue>,
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

impl_definition!(
    MarketIfTouchedOrder,
    "MIT Order {id}",
    "{units} units of {instrument} @ {price}",
    ENTRY_ORDER_DEFAULTS
);

/// Take profit order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TakeProfitOrder {
    /// Fields common to every order
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Trade, price and distance of the dependent order
    #[serde(flatten)]
    pub params: DependentOrderParams,
    /// Fill, cancel and replace history
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

impl_definition!(
    TakeProfitOrder,
    "Take Profit {id}",
    "Take Profit for Trade {tradeID} @ {price}",
    DEPENDENT_ORDER_DEFAULTS
);

/// Stop loss order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct StopLossOrder {
    /// Fields common to every order
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Trade, price and distance of the dependent order
    #[serde(flatten)]
    pub params: DependentOrderParams,
    /// Fill, cancel and replace history
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

impl_definition!(
    StopLossOrder,
    "Stop Loss {id}",
    "Stop Loss for Trade {tradeID} @ {price}{distance}",
    DEPENDENT_ORDER_DEFAULTS
);

/// Trailing stop loss order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TrailingStopLossOrder {
    /// Fields common to every order
    #[serde(flatten)]
    pub header: OrderHeader,
    /// Trade, price and distance of the dependent order
    #[serde(flatten)]
    pub params: DependentOrderParams,
    /// Current trigger price, moved as the market moves
    #[serde(rename = "trailingStopValue", skip_serializing_if = "Option::is_none")]
    pub trailing_stop_value: Option<PriceValue>,
    #[serde(flatten)]
    pub lifecycle: OrderLifecycle,
}

impl_definition!(
    TrailingStopLossOrder,
    "Trailing Stop Loss {id}",
    "Trailing Stop Loss for Trade {tradeID} @ {distance} (now {trailingStopValue})",
    DEPENDENT_ORDER_DEFAULTS
);

macro_rules! order_variants {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// An order of any kind
        #[derive(Debug, Clone, DisplaySimple, PartialEq)]
        pub enum Order {
            $($variant($ty),)+
            /// A tag with no dedicated variant, or a variant that failed to decode
            Unknown(BaseOrder),
        }

        impl Order {
            /// Type of the variant, `None` for [`Order::Unknown`]
            pub fn kind(&self) -> Option<OrderType> {
                match self {
                    $(Order::$variant(_) => Some(OrderType::$variant),)+
                    Order::Unknown(_) => None,
                }
            }

            /// Common fields
            pub fn header(&self) -> &OrderHeader {
                match self {
                    $(Order::$variant(o) => &o.header,)+
                    Order::Unknown(o) => &o.header,
                }
            }

            /// Rendered name template of the variant
            pub fn title(&self) -> String {
                match self {
                    $(Order::$variant(o) => o.title(),)+
                    Order::Unknown(o) => o.title(),
                }
            }

            /// Rendered summary template of the variant
            pub fn summary(&self) -> String {
                match self {
                    $(Order::$variant(o) => o.summary(),)+
                    Order::Unknown(o) => o.summary(),
                }
            }

            /// Fields the variant defaults when absent
            pub fn defaults(&self) -> &'static [FieldDefault] {
                match self {
                    $(Order::$variant(_) => <$ty as Definition>::DEFAULTS,)+
                    Order::Unknown(_) => <BaseOrder as Definition>::DEFAULTS,
                }
            }

            /// JSON form, with the `type` tag of the variant
            pub fn to_value(&self) -> Result<Value, serde_json::Error> {
                match self {
                    $(Order::$variant(o) => Ok(tagged_value(
                        OrderType::$variant.as_str(),
                        serde_json::to_value(o)?,
                    )),)+
                    Order::Unknown(o) => serde_json::to_value(o),
                }
            }
        }

        static ORDER_REGISTRY: Lazy<Registry<Order>> = Lazy::new(|| {
            Registry::new("order", |value| Order::Unknown(BaseOrder::from_value(value)))
            $(.register(OrderType::$variant.as_str(), |value| {
                <$ty>::deserialize(value).map(Order::$variant)
            }))+
        });
    };
}

order_variants! {
    Market(MarketOrder),
    Limit(LimitOrder),
    Stop(StopOrder),
    MarketIfTouched(MarketIfTouchedOrder),
    TakeProfit(TakeProfitOrder),
    StopLoss(StopLossOrder),
    TrailingStopLoss(TrailingStopLossOrder),
    FixedPrice(FixedPriceOrder),
}

impl Order {
    /// Decodes any JSON value; never fails
    pub fn from_value(value: &Value) -> Self {
        ORDER_REGISTRY.decode(value)
    }

    /// Order id
    pub fn id(&self) -> Option<&str> {
        self.header().id.as_deref()
    }

    /// Current state
    pub fn state(&self) -> Option<OrderState> {
        self.header().state
    }

    /// Whether the order is still waiting for its trigger
    pub fn is_pending(&self) -> bool {
        self.state() == Some(OrderState::Pending)
    }
}

impl Serialize for Order {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Order {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Order::from_value(&value))
    }
}

/// Body of an order create or replace request
#[derive(Debug, Clone, DisplaySimple, Serialize, PartialEq)]
#[serde(untagged)]
pub enum OrderRequest {
    /// Market order request
    Market(MarketOrderRequest),
    /// Limit order request
    Limit(EntryOrderRequest),
    /// Stop order request
    Stop(EntryOrderRequest),
    /// Market-if-touched order request
    MarketIfTouched(EntryOrderRequest),
    /// Take profit order request
    TakeProfit(DependentOrderRequest),
    /// Stop loss order request
    StopLoss(DependentOrderRequest),
    /// Trailing stop loss order request
    TrailingStopLoss(DependentOrderRequest),
}

/// Market order request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarketOrderRequest {
    /// Always `MARKET`
    #[serde(rename = "type", default = "OrderType::market")]
    pub kind: OrderType,
    #[serde(flatten)]
    pub params: MarketOrderParams,
}

/// Limit, stop or market-if-touched order request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct EntryOrderRequest {
    /// `LIMIT`, `STOP` or `MARKET_IF_TOUCHED`
    #[serde(rename = "type", default = "OrderType::limit")]
    pub kind: OrderType,
    #[serde(flatten)]
    pub params: EntryOrderParams,
}

/// Take profit, stop loss or trailing stop loss order request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct DependentOrderRequest {
    /// `TAKE_PROFIT`, `STOP_LOSS` or `TRAILING_STOP_LOSS`
    #[serde(rename = "type", default = "OrderType::take_profit")]
    pub kind: OrderType,
    #[serde(flatten)]
    pub params: DependentOrderParams,
}

impl_definition!(
    MarketOrderRequest,
    "Market Order Request",
    "{type} {units} units of {instrument}",
    MARKET_ORDER_DEFAULTS
);

impl_definition!(
    EntryOrderRequest,
    "Entry Order Request",
    "{type} {units} units of {instrument} @ {price}",
    ENTRY_ORDER_DEFAULTS
);

impl_definition!(
    DependentOrderRequest,
    "Dependent Order Request",
    "{type} for trade {tradeID} @ {price}{distance}",
    DEPENDENT_ORDER_DEFAULTS
);

impl OrderRequest {
    /// Market order for `units` of `instrument`; negative units sell
    pub fn market(instrument: impl Into<String>, units: impl Into<String>) -> Self {
        OrderRequest::Market(MarketOrderRequest {
            kind: OrderType::market(),
            params: MarketOrderParams {
                instrument: Some(instrument.into()),
                units: Some(units.into()),
                ..Default::default()
            },
        })
    }

    fn entry(kind: OrderType, instrument: String, units: String, price: String) -> EntryOrderRequest {
        EntryOrderRequest {
            kind,
            params: EntryOrderParams {
                instrument: Some(instrument),
                units: Some(units),
                price: Some(price),
                ..Default::default()
            },
        }
    }

    /// Limit order, good until cancelled
    pub fn limit(
        instrument: impl Into<String>,
        units: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        OrderRequest::Limit(Self::entry(
            OrderType::limit(),
            instrument.into(),
            units.into(),
            price.into(),
        ))
    }

    /// Stop order, good until cancelled
    pub fn stop(
        instrument: impl Into<String>,
        units: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        OrderRequest::Stop(Self::entry(
            OrderType::stop(),
            instrument.into(),
            units.into(),
            price.into(),
        ))
    }

    /// Market-if-touched order, good until cancelled
    pub fn market_if_touched(
        instrument: impl Into<String>,
        units: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        OrderRequest::MarketIfTouched(Self::entry(
            OrderType::market_if_touched(),
            instrument.into(),
            units.into(),
            price.into(),
        ))
    }

    /// Take profit on an open trade
    pub fn take_profit(trade_id: impl Into<String>, price: impl Into<String>) -> Self {
        OrderRequest::TakeProfit(DependentOrderRequest {
            kind: OrderType::take_profit(),
            params: DependentOrderParams {
                trade_id: Some(trade_id.into()),
                price: Some(price.into()),
                ..Default::default()
            },
        })
    }

    /// Stop loss on an open trade
    pub fn stop_loss(trade_id: impl Into<String>, price: impl Into<String>) -> Self {
        OrderRequest::StopLoss(DependentOrderRequest {
            kind: OrderType::stop_loss(),
            params: DependentOrderParams {
                trade_id: Some(trade_id.into()),
                price: Some(price.into()),
                ..Default::default()
            },
        })
    }

    /// Trailing stop loss on an open trade
    pub fn trailing_stop_loss(trade_id: impl Into<String>, distance: impl Into<String>) -> Self {
        OrderRequest::TrailingStopLoss(DependentOrderRequest {
            kind: OrderType::trailing_stop_loss(),
            params: DependentOrderParams {
                trade_id: Some(trade_id.into()),
                distance: Some(distance.into()),
                ..Default::default()
            },
        })
    }

    /// Order type of the request
    pub fn kind(&self) -> OrderType {
        match self {
            OrderRequest::Market(r) => r.kind,
            OrderRequest::Limit(r) | OrderRequest::Stop(r) | OrderRequest::MarketIfTouched(r) => {
                r.kind
            }
            OrderRequest::TakeProfit(r)
            | OrderRequest::StopLoss(r)
            | OrderRequest::TrailingStopLoss(r) => r.kind,
        }
    }

    /// Fields defaulted by the request type
    pub fn defaults(&self) -> &'static [FieldDefault] {
        match self {
            OrderRequest::Market(_) => MARKET_ORDER_DEFAULTS,
            OrderRequest::Limit(_) | OrderRequest::Stop(_) | OrderRequest::MarketIfTouched(_) => {
                ENTRY_ORDER_DEFAULTS
            }
            _ => DEPENDENT_ORDER_DEFAULTS,
        }
    }

    /// Rendered summary of the request
    pub fn summary(&self) -> String {
        match self {
            OrderRequest::Market(r) => r.summary(),
            OrderRequest::Limit(r) | OrderRequest::Stop(r) | OrderRequest::MarketIfTouched(r) => {
                r.summary()
            }
            OrderRequest::TakeProfit(r)
            | OrderRequest::StopLoss(r)
            | OrderRequest::TrailingStopLoss(r) => r.summary(),
        }
    }

    /// Sets the worst acceptable price (market, stop and market-if-touched)
    pub fn with_price_bound(mut self, bound: impl Into<String>) -> Self {
        match &mut self {
            OrderRequest::Market(r) => r.params.price_bound = Some(bound.into()),
            OrderRequest::Stop(r) | OrderRequest::MarketIfTouched(r) => {
                r.params.price_bound = Some(bound.into())
            }
            _ => {}
        }
        self
    }

    /// Sets the time in force, with an expiry when it is GTD
    pub fn with_time_in_force(
        mut self,
        time_in_force: TimeInForce,
        gtd_time: Option<WireTime>,
    ) -> Self {
        match &mut self {
            OrderRequest::Market(r) => r.params.time_in_force = time_in_force,
            OrderRequest::Limit(r) | OrderRequest::Stop(r) | OrderRequest::MarketIfTouched(r) => {
                r.params.time_in_force = time_in_force;
                r.params.gtd_time = gtd_time;
            }
            OrderRequest::TakeProfit(r)
            | OrderRequest::StopLoss(r)
            | OrderRequest::TrailingStopLoss(r) => {
                r.params.time_in_force = time_in_force;
                r.params.gtd_time = gtd_time;
            }
        }
        self
    }

    /// Sets the position fill behaviour (market and entry orders)
    pub fn with_position_fill(
        mut self,
        position_fill: OrderPositionFill,
    ) -> Self {
        match &mut self {
            OrderRequest::Market(r) => r.params.position_fill = position_fill,
            OrderRequest::Limit(r) | OrderRequest::Stop(r) | OrderRequest::MarketIfTouched(r) => {
                r.params.position_fill = position_fill
            }
            _ => {}
        }
        self
    }

    /// Sets the client extensions of the order
    pub fn with_client_extensions(mut self, extensions: ClientExtensions) -> Self {
        match &mut self {
            OrderRequest::Market(r) => r.params.client_extensions = Some(extensions),
            OrderRequest::Limit(r) | OrderRequest::Stop(r) | OrderRequest::MarketIfTouched(r) => {
                r.params.client_extensions = Some(extensions)
            }
            OrderRequest::TakeProfit(r)
            | OrderRequest::StopLoss(r)
            | OrderRequest::TrailingStopLoss(r) => r.params.client_extensions = Some(extensions),
        }
        self
    }

    /// Attaches a take profit created when the order fills (market and entry orders)
    pub fn with_take_profit(mut self, details: TakeProfitDetails) -> Self {
        match &mut self {
            OrderRequest::Market(r) => r.params.take_profit_on_fill = Some(details),
            OrderRequest::Limit(r) | OrderRequest::Stop(r) | OrderRequest::MarketIfTouched(r) => {
                r.params.take_profit_on_fill = Some(details)
            }
            _ => {}
        }
        self
    }

    /// Attaches a stop loss created when the order fills (market and entry orders)
    pub fn with_stop_loss(mut self, details: StopLossDetails) -> Self {
        match &mut self {
            OrderRequest::Market(r) => r.params.stop_loss_on_fill = Some(details),
            OrderRequest::Limit(r) | OrderRequest::Stop(r) | OrderRequest::MarketIfTouched(r) => {
                r.params.stop_loss_on_fill = Some(details)
            }
            _ => {}
        }
        self
    }

    /// Attaches a trailing stop loss created when the order fills (market and entry orders)
    pub fn with_trailing_stop_loss(mut self, details: TrailingStopLossDetails) -> Self {
        match &mut self {
            OrderRequest::Market(r) => r.params.trailing_stop_loss_on_fill = Some(details),
            OrderRequest::Limit(r) | OrderRequest::Stop(r) | OrderRequest::MarketIfTouched(r) => {
                r.params.trailing_stop_loss_on_fill = Some(details)
            }
            _ => {}
        }
        self
    }

    /// Sets the client extensions of the trade the order opens (market and entry orders)
    pub fn with_trade_client_extensions(mut self, extensions: ClientExtensions) -> Self {
        match &mut self {
            OrderRequest::Market(r) => r.params.trade_client_extensions = Some(extensions),
            OrderRequest::Limit(r) | OrderRequest::Stop(r) | OrderRequest::MarketIfTouched(r) => {
                r.params.trade_client_extensions = Some(extensions)
            }
            _ => {}
        }
        self
    }

    /// Checks the fields the API requires before sending
    pub fn validate(&self) -> Result<(), AppError> {
        let missing = |field: &str| {
            Err(AppError::InvalidInput(format!(
                "{} order request without {field}",
                self.kind().as_str()
            )))
        };
        match self {
            OrderRequest::Market(r) => {
                if r.params.instrument.is_none() {
                    return missing("instrument");
                }
                if r.params.units.is_none() {
                    return missing("units");
                }
            }
            OrderRequest::Limit(r) | OrderRequest::Stop(r) | OrderRequest::MarketIfTouched(r) => {
                if r.params.instrument.is_none() {
                    return missing("instrument");
                }
                if r.params.units.is_none() {
                    return missing("units");
                }
                if r.params.price.is_none() {
                    return missing("price");
                }
            }
            OrderRequest::TakeProfit(r) | OrderRequest::StopLoss(r) => {
                if r.params.trade_id.is_none() && r.params.client_trade_id.is_none() {
                    return missing("tradeID");
                }
                if r.params.price.is_none() && r.params.distance.is_none() {
                    return missing("price");
                }
            }
            OrderRequest::TrailingStopLoss(r) => {
                if r.params.trade_id.is_none() && r.params.client_trade_id.is_none() {
                    return missing("tradeID");
                }
                if r.params.distance.is_none() {
                    return missing("distance");
                }
            }
        }
        Ok(())
    }
}
