use serde_json::json;
use v20_client::presentation::definition::Definition;
use v20_client::presentation::position::{Position, PositionDirection};
use v20_client::presentation::primitives::TradeState;
use v20_client::presentation::trade::{Trade, TradeSummary};

#[test]
fn test_closed_trade() {
    let trade: Trade = serde_json::from_value(json!({
        "id": "40",
        "instrument": "EUR_USD",
        "price": "1.08500",
        "openTime": "2024-02-01T09:00:00.000000000Z",
        "state": "CLOSED",
        "initialUnits": "1000",
        "currentUnits": "0",
        "realizedPL": "12.3400",
        "averageClosePrice": "1.08620",
        "closingTransactionIDs": ["52", "55"],
        "closeTime": "2024-02-02T09:00:00.000000000Z"
    }))
    .unwrap();

    assert!(!trade.is_open());
    assert_eq!(trade.header.state, Some(TradeState::Closed));
    assert_eq!(
        trade.header.closing_transaction_ids,
        Some(vec!["52".to_string(), "55".to_string()])
    );
    assert!(trade.take_profit_order.is_none());
    assert_eq!(trade.title(), "Trade 40");
}

#[test]
fn test_trade_dependent_orders_get_their_defaults() {
    let trade: Trade = serde_json::from_value(json!({
        "id": "41",
        "state": "OPEN",
        "takeProfitOrder": {"id": "42", "type": "TAKE_PROFIT", "tradeID": "41", "price": "1.2"},
        "trailingStopLossOrder": {"id": "43", "type": "TRAILING_STOP_LOSS", "tradeID": "41", "distance": "0.01"}
    }))
    .unwrap();

    assert!(trade.is_open());
    let value = serde_json::to_value(&trade).unwrap();
    assert_eq!(value["takeProfitOrder"]["timeInForce"], "GTC");
    assert_eq!(value["takeProfitOrder"]["triggerCondition"], "DEFAULT");
    assert_eq!(value["trailingStopLossOrder"]["distance"], "0.01");
}

#[test]
fn test_trade_summary_carries_order_ids() {
    let summary: TradeSummary = serde_json::from_value(json!({
        "id": "41",
        "instrument": "GBP_USD",
        "price": "1.27",
        "initialUnits": "-200",
        "currentUnits": "-200",
        "takeProfitOrderID": "42",
        "stopLossOrderID": "44"
    }))
    .unwrap();

    assert_eq!(summary.take_profit_order_id.as_deref(), Some("42"));
    assert_eq!(summary.stop_loss_order_id.as_deref(), Some("44"));
    assert!(summary.trailing_stop_loss_order_id.is_none());
    assert_eq!(summary.summary(), "-200 (-200) of GBP_USD @ 1.27");
}

#[test]
fn test_hedged_position() {
    let position: Position = serde_json::from_value(json!({
        "instrument": "EUR_USD",
        "pl": "-3.2",
        "unrealizedPL": "1.5",
        "long": {"units": "300", "averagePrice": "1.081", "tradeIDs": ["1", "4"]},
        "short": {"units": "-100", "averagePrice": "1.085", "tradeIDs": ["7"]}
    }))
    .unwrap();

    let long = position.long.as_ref().unwrap();
    let short = position.short.as_ref().unwrap();
    assert_eq!(long.direction(), PositionDirection::Long);
    assert_eq!(short.direction(), PositionDirection::Short);
    assert_eq!(position.net_units(), Some(200.0));
    assert_eq!(position.summary(), "EUR_USD, -3.2 PL 1.5 UPL");
}

#[test]
fn test_flat_side_is_not_open() {
    let position: Position = serde_json::from_value(json!({
        "instrument": "USD_CAD",
        "long": {"units": "0"},
        "short": {"units": "0"}
    }))
    .unwrap();

    assert!(!position.long.as_ref().unwrap().is_open());
    assert_eq!(
        position.short.as_ref().unwrap().direction(),
        PositionDirection::Flat
    );
    assert_eq!(position.net_units(), Some(0.0));
}

#[test]
fn test_net_units_with_unparsable_side() {
    let position: Position = serde_json::from_value(json!({
        "long": {"units": "many"}
    }))
    .unwrap();
    assert_eq!(position.net_units(), None);
}
