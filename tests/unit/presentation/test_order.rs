use assert_json_diff::assert_json_eq;
use serde_json::json;
use v20_client::error::AppError;
use v20_client::presentation::details::{ClientExtensions, StopLossDetails, TakeProfitDetails};
use v20_client::presentation::order::{Order, OrderRequest};
use v20_client::presentation::primitives::{OrderState, OrderType, TimeInForce};

#[test]
fn test_every_order_type_decodes_to_its_variant() {
    for kind in OrderType::ALL {
        let order = Order::from_value(&json!({"id": "5", "type": kind.as_str()}));
        assert_eq!(order.kind(), Some(kind), "type {}", kind.as_str());
        assert_eq!(order.id(), Some("5"));
    }
}

#[test]
fn test_pending_limit_order() {
    let order = Order::from_value(&json!({
        "id": "21",
        "createTime": "2024-03-01T10:00:00.000000000Z",
        "state": "PENDING",
        "type": "LIMIT",
        "instrument": "USD_JPY",
        "units": "1000",
        "price": "145.000"
    }));

    assert!(order.is_pending());
    assert_eq!(order.state(), Some(OrderState::Pending));
    assert_json_eq!(
        order.to_value().unwrap(),
        json!({
            "id": "21",
            "createTime": "2024-03-01T10:00:00.000000000Z",
            "state": "PENDING",
            "type": "LIMIT",
            "instrument": "USD_JPY",
            "units": "1000",
            "price": "145.000",
            "timeInForce": "GTC",
            "positionFill": "DEFAULT",
            "triggerCondition": "DEFAULT"
        })
    );
    assert_eq!(order.title(), "Limit Order 21");
}

#[test]
fn test_filled_order_keeps_lifecycle() {
    let order = Order::from_value(&json!({
        "id": "30",
        "state": "FILLED",
        "type": "MARKET",
        "fillingTransactionID": "31",
        "tradeClosedIDs": ["12", "9"]
    }));

    let Order::Market(market) = &order else {
        panic!("expected a market order, got {order:?}");
    };
    assert!(!order.is_pending());
    assert_eq!(market.lifecycle.filling_transaction_id.as_deref(), Some("31"));
    assert_eq!(
        market.lifecycle.trade_closed_ids,
        Some(vec!["12".to_string(), "9".to_string()])
    );
}

#[test]
fn test_unknown_order_type_keeps_common_fields() {
    let orders: Vec<Order> = serde_json::from_value(json!([
        {"id": "1", "type": "GUARANTEED_STOP_LOSS", "state": "PENDING", "price": "1.0"},
        {"id": "2", "type": "STOP_LOSS", "tradeID": "1", "price": "1.05"}
    ]))
    .unwrap();

    assert_eq!(orders[0].kind(), None);
    assert!(orders[0].is_pending());
    assert_eq!(
        orders[0].to_value().unwrap(),
        json!({"id": "1", "type": "GUARANTEED_STOP_LOSS", "state": "PENDING"})
    );
    assert_eq!(orders[1].kind(), Some(OrderType::StopLoss));
}

#[test]
fn test_limit_request_with_attached_orders() {
    let request = OrderRequest::limit("EUR_USD", "-500", "1.1200")
        .with_take_profit(TakeProfitDetails::at_price("1.1000"))
        .with_stop_loss(StopLossDetails::at_distance("0.0050"))
        .with_client_extensions(ClientExtensions::default().with_id("my-order"));

    assert_eq!(request.kind(), OrderType::Limit);
    assert!(request.validate().is_ok());
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "type": "LIMIT",
            "instrument": "EUR_USD",
            "units": "-500",
            "price": "1.1200",
            "timeInForce": "GTC",
            "positionFill": "DEFAULT",
            "triggerCondition": "DEFAULT",
            "clientExtensions": {"id": "my-order"},
            "takeProfitOnFill": {"price": "1.1000", "timeInForce": "GTC"},
            "stopLossOnFill": {"distance": "0.0050", "timeInForce": "GTC"}
        })
    );
}

#[test]
fn test_gtd_time_in_force_carries_expiry() {
    let request = OrderRequest::stop("GBP_USD", "100", "1.3000").with_time_in_force(
        TimeInForce::Gtd,
        Some("2024-06-01T00:00:00.000000000Z".to_string()),
    );
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["type"], "STOP");
    assert_eq!(value["timeInForce"], "GTD");
    assert_eq!(value["gtdTime"], "2024-06-01T00:00:00.000000000Z");
}

#[test]
fn test_price_bound_ignored_on_limit_orders() {
    let limit = OrderRequest::limit("EUR_USD", "1", "1.1").with_price_bound("1.2");
    assert!(serde_json::to_value(&limit).unwrap().get("priceBound").is_none());

    let market = OrderRequest::market("EUR_USD", "1").with_price_bound("1.2");
    assert_eq!(serde_json::to_value(&market).unwrap()["priceBound"], "1.2");
}

#[test]
fn test_dependent_requests() {
    let tp = OrderRequest::take_profit("77", "1.2500");
    assert_eq!(
        serde_json::to_value(&tp).unwrap(),
        json!({
            "type": "TAKE_PROFIT",
            "tradeID": "77",
            "price": "1.2500",
            "timeInForce": "GTC",
            "triggerCondition": "DEFAULT"
        })
    );
    assert!(tp.validate().is_ok());

    let tsl = OrderRequest::trailing_stop_loss("77", "0.0020");
    assert_eq!(tsl.kind(), OrderType::TrailingStopLoss);
    assert_eq!(serde_json::to_value(&tsl).unwrap()["distance"], "0.0020");
    assert!(tsl.validate().is_ok());
}

#[test]
fn test_validate_names_the_missing_field() {
    let Err(AppError::InvalidInput(message)) = OrderRequest::Limit(
        match OrderRequest::limit("EUR_USD", "10", "1.0") {
            OrderRequest::Limit(mut entry) => {
                entry.params.price = None;
                entry
            }
            other => panic!("expected a limit request, got {other:?}"),
        },
    )
    .validate() else {
        panic!("expected an invalid input error");
    };
    assert!(message.contains("LIMIT"));
    assert!(message.contains("price"));
}

#[test]
fn test_out_of_range_state_keeps_the_limit_order() {
    let order = Order::from_value(&json!({
        "id": "1",
        "type": "LIMIT",
        "state": "SOMETHING",
        "instrument": "EUR_USD",
        "price": "1.1"
    }));

    assert_eq!(order.kind(), Some(OrderType::Limit));
    assert_eq!(order.state(), None);
    assert_json_eq!(
        order.to_value().unwrap(),
        json!({
            "id": "1",
            "type": "LIMIT",
            "instrument": "EUR_USD",
            "price": "1.1",
            "timeInForce": "GTC",
            "positionFill": "DEFAULT",
            "triggerCondition": "DEFAULT"
        })
    );
}

#[test]
fn test_bad_time_in_force_falls_back_to_default() {
    let order = Order::from_value(&json!({
        "id": "4",
        "type": "STOP",
        "instrument": "EUR_USD",
        "price": "1.2",
        "timeInForce": "FOREVER"
    }));
    assert_eq!(order.kind(), Some(OrderType::Stop));
    assert_eq!(order.to_value().unwrap()["timeInForce"], "GTC");
    assert_eq!(order.to_value().unwrap()["instrument"], "EUR_USD");
}
