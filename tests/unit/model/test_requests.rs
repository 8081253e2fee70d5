use assert_json_diff::assert_json_eq;
use serde_json::json;
use v20_client::error::AppError;
use v20_client::model::requests::{
    CandlesQuery, ClosePositionRequest, CloseTradeRequest, ConfigureAccountRequest,
    CreateOrderBody, DependentOrderChange, OrderClientExtensionsRequest, OrderListQuery,
    PricingQuery, SetDependentOrdersRequest, TradeClientExtensionsRequest, TradeListQuery,
    TransactionRangeQuery,
};
use v20_client::presentation::details::{
    ClientExtensions, StopLossDetails, TakeProfitDetails, TrailingStopLossDetails,
};
use v20_client::presentation::instrument::{CandlestickGranularity, PriceComponents};
use v20_client::presentation::order::OrderRequest;
use v20_client::presentation::primitives::{OrderState, TradeState};
use v20_client::presentation::transaction::TransactionType;

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_create_order_body_wraps_the_order() {
    let body = CreateOrderBody::new(OrderRequest::market("EUR_USD", "-25")).unwrap();
    assert_json_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({
            "order": {
                "type": "MARKET",
                "instrument": "EUR_USD",
                "units": "-25",
                "timeInForce": "FOK",
                "positionFill": "DEFAULT"
            }
        })
    );
}

#[test]
fn test_create_order_body_rejects_incomplete_order() {
    let OrderRequest::Market(mut market) = OrderRequest::market("EUR_USD", "1") else {
        panic!("expected a market request");
    };
    market.params.units = None;
    let err = CreateOrderBody::new(OrderRequest::Market(market)).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_configure_account() {
    assert!(ConfigureAccountRequest::default().validate().is_err());

    let request = ConfigureAccountRequest::default()
        .with_alias("Hedging")
        .with_margin_rate("0.05");
    assert!(request.validate().is_ok());
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"alias": "Hedging", "marginRate": "0.05"})
    );
}

#[test]
fn test_close_trade_units() {
    assert_eq!(
        serde_json::to_value(CloseTradeRequest::default()).unwrap(),
        json!({"units": "ALL"})
    );
    assert_eq!(
        serde_json::to_value(CloseTradeRequest::partial("250")).unwrap(),
        json!({"units": "250"})
    );
}

#[test]
fn test_close_both_position_sides() {
    let mut request = ClosePositionRequest::both();
    request.short_client_extensions = Some(ClientExtensions::default().with_tag("hedge"));
    assert!(request.validate().is_ok());
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "longUnits": "ALL",
            "shortUnits": "ALL",
            "shortClientExtensions": {"tag": "hedge"}
        })
    );
    assert_eq!(
        serde_json::to_value(ClosePositionRequest::short_all()).unwrap(),
        json!({"shortUnits": "ALL"})
    );
}

#[test]
fn test_client_extensions_requests() {
    let order = OrderClientExtensionsRequest {
        client_extensions: Some(ClientExtensions::default().with_id("abc")),
        trade_client_extensions: None,
    };
    assert_eq!(
        serde_json::to_value(&order).unwrap(),
        json!({"clientExtensions": {"id": "abc"}})
    );
    assert_eq!(
        serde_json::to_value(TradeClientExtensionsRequest::default()).unwrap(),
        json!({})
    );
}

#[test]
fn test_dependent_orders_all_three_fields() {
    let request = SetDependentOrdersRequest::default()
        .with_stop_loss(StopLossDetails::at_distance("0.005"))
        .with_trailing_stop_loss(TrailingStopLossDetails::at_distance("0.01"))
        .cancel_take_profit();

    assert_eq!(request.take_profit, DependentOrderChange::Cancel);
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["takeProfit"], json!(null));
    assert_eq!(value["stopLoss"]["distance"], "0.005");
    assert_eq!(value["trailingStopLoss"]["distance"], "0.01");

    let untouched = SetDependentOrdersRequest::default();
    assert_eq!(serde_json::to_value(&untouched).unwrap(), json!({}));

    let replaced = untouched
        .with_take_profit(TakeProfitDetails::at_price("1.3"))
        .cancel_trailing_stop_loss();
    assert_eq!(
        serde_json::to_value(&replaced).unwrap(),
        json!({"takeProfit": {"price": "1.3", "timeInForce": "GTC"}, "trailingStopLoss": null})
    );
}

#[test]
fn test_candles_query_full() {
    let mut query = CandlesQuery::latest(CandlestickGranularity::H4, 50)
        .with_price("BA".parse::<PriceComponents>().unwrap());
    query.smooth = Some(true);
    query.daily_alignment = Some(17);
    query.alignment_timezone = Some("America/New_York".to_string());
    query.weekly_alignment = Some("Friday".to_string());

    assert!(query.validate().is_ok());
    assert_eq!(
        query.to_query(),
        pairs(&[
            ("price", "BA"),
            ("granularity", "H4"),
            ("count", "50"),
            ("smooth", "true"),
            ("dailyAlignment", "17"),
            ("alignmentTimezone", "America/New_York"),
            ("weeklyAlignment", "Friday"),
        ])
    );

    query.daily_alignment = Some(24);
    assert!(query.validate().is_err());
}

#[test]
fn test_candles_range_query() {
    let query = CandlesQuery::range(
        CandlestickGranularity::D,
        "2024-01-01T00:00:00Z",
        "2024-02-01T00:00:00Z",
    )
    .with_price(PriceComponents::all());
    assert_eq!(
        query.to_query(),
        pairs(&[
            ("price", "BAM"),
            ("granularity", "D"),
            ("from", "2024-01-01T00:00:00Z"),
            ("to", "2024-02-01T00:00:00Z"),
        ])
    );
}

#[test]
fn test_order_and_trade_list_queries() {
    let orders = OrderListQuery {
        ids: vec!["4".to_string(), "9".to_string()],
        state: Some(OrderState::Cancelled),
        count: Some(20),
        ..Default::default()
    };
    assert_eq!(
        orders.to_query(),
        pairs(&[("ids", "4,9"), ("state", "CANCELLED"), ("count", "20")])
    );

    let trades = TradeListQuery {
        state: Some(TradeState::CloseWhenTradeable),
        instrument: Some("EUR_USD".to_string()),
        before_id: Some("100".to_string()),
        ..Default::default()
    };
    assert_eq!(
        trades.to_query(),
        pairs(&[
            ("state", "CLOSE_WHEN_TRADEABLE"),
            ("instrument", "EUR_USD"),
            ("beforeID", "100"),
        ])
    );
    assert!(TradeListQuery::default().to_query().is_empty());
}

#[test]
fn test_transaction_range_query() {
    let mut query = TransactionRangeQuery::new("10", "20");
    assert_eq!(query.to_query(), pairs(&[("from", "10"), ("to", "20")]));

    query.types = vec![TransactionType::DailyFinancing];
    assert_eq!(
        query.to_query(),
        pairs(&[("from", "10"), ("to", "20"), ("type", "DAILY_FINANCING")])
    );
}

#[test]
fn test_pricing_stream_query() {
    let mut query = PricingQuery::new(vec!["EUR_USD".to_string()]);
    query.snapshot = Some(false);
    query.include_units_available = Some(true);

    assert_eq!(
        query.to_stream_query(),
        pairs(&[("instruments", "EUR_USD"), ("snapshot", "false")])
    );
    assert_eq!(
        query.to_query(),
        pairs(&[("instruments", "EUR_USD"), ("includeUnitsAvailable", "true")])
    );
}
