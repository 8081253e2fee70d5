use serde_json::json;
use v20_client::presentation::definition::Definition;
use v20_client::presentation::pricing::{ClientPrice, PriceStatus, PricingHeartbeat};

fn price() -> ClientPrice {
    serde_json::from_value(json!({
        "type": "PRICE",
        "instrument": "EUR_USD",
        "time": "2024-05-01T12:00:00.000000000Z",
        "status": "tradeable",
        "tradeable": true,
        "bids": [
            {"price": "1.07010", "liquidity": 1000000},
            {"price": "1.07005", "liquidity": 5000000}
        ],
        "asks": [
            {"price": "1.07030", "liquidity": 1000000},
            {"price": "1.07035", "liquidity": 5000000}
        ],
        "closeoutBid": "1.07005",
        "closeoutAsk": "1.07035",
        "unitsAvailable": {
            "default": {"long": "2500000", "short": "2500000"}
        }
    }))
    .unwrap()
}

#[test]
fn test_best_bid_and_ask() {
    let price = price();
    assert_eq!(price.best_bid(), Some("1.07010"));
    assert_eq!(price.best_ask(), Some("1.07030"));
    let mid = price.mid().unwrap();
    assert!((mid - 1.0702).abs() < 1e-9);
}

#[test]
fn test_price_fields() {
    let price = price();
    assert_eq!(price.kind, "PRICE");
    assert_eq!(price.status, Some(PriceStatus::Tradeable));
    assert_eq!(price.tradeable, Some(true));
    assert_eq!(
        price
            .units_available
            .as_ref()
            .and_then(|u| u.default.as_ref())
            .and_then(|d| d.long.as_deref()),
        Some("2500000")
    );
    assert_eq!(price.title(), "Price EUR_USD");
}

#[test]
fn test_price_without_buckets() {
    let price: ClientPrice =
        serde_json::from_value(json!({"instrument": "XAU_USD", "tradeable": false})).unwrap();
    assert_eq!(price.kind, "PRICE");
    assert!(price.best_bid().is_none());
    assert!(price.mid().is_none());
}

#[test]
fn test_non_numeric_price_has_no_mid() {
    let price: ClientPrice = serde_json::from_value(json!({
        "bids": [{"price": "n/a"}],
        "asks": [{"price": "1.0"}]
    }))
    .unwrap();
    assert!(price.mid().is_none());
}

#[test]
fn test_price_status_names() {
    let status: PriceStatus = serde_json::from_value(json!("non-tradeable")).unwrap();
    assert_eq!(status, PriceStatus::NonTradeable);
    assert_eq!(serde_json::to_value(PriceStatus::Invalid).unwrap(), json!("invalid"));
}

#[test]
fn test_pricing_heartbeat() {
    let heartbeat: PricingHeartbeat =
        serde_json::from_value(json!({"type": "HEARTBEAT", "time": "2024-05-01T12:00:05.000000000Z"}))
            .unwrap();
    assert_eq!(heartbeat.kind, "HEARTBEAT");
    assert_eq!(
        heartbeat.summary(),
        "Pricing Heartbeat 2024-05-01T12:00:05.000000000Z"
    );
    assert_eq!(PricingHeartbeat::default().kind, "HEARTBEAT");
}
