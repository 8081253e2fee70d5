use reqwest::StatusCode;
use serde_json::json;
use v20_client::error::AppError;
use v20_client::model::envelope::{ApiResponse, Envelope, map_response};
use v20_client::model::responses::*;
use v20_client::presentation::transaction::{Transaction, TransactionType};

const JSON: Option<&str> = Some("application/json");

fn create_order_body() -> String {
    json!({
        "orderCreateTransaction": {"id": "101", "type": "MARKET_ORDER", "instrument": "EUR_USD", "units": "10"},
        "orderFillTransaction": {"id": "102", "type": "ORDER_FILL", "orderID": "101"},
        "orderRejectTransaction": {"id": "103", "type": "MARKET_ORDER_REJECT"},
        "relatedTransactionIDs": ["101", "102"],
        "lastTransactionID": "102",
        "errorCode": "IGNORED",
        "errorMessage": "ignored on success"
    })
    .to_string()
}

#[test]
fn test_create_order_201_keeps_success_keys() {
    let response: ApiResponse<CreateOrderResponse> =
        map_response(201, JSON, &create_order_body());

    assert!(response.is_success());
    let body = &response.body;
    assert_eq!(
        body.order_create_transaction.as_ref().and_then(Transaction::kind),
        Some(TransactionType::MarketOrder)
    );
    assert_eq!(
        body.order_fill_transaction.as_ref().and_then(Transaction::id),
        Some("102")
    );
    assert!(body.order_reject_transaction.is_none());
    assert!(body.error.is_empty());
    assert_eq!(
        body.related_transaction_ids,
        Some(vec!["101".to_string(), "102".to_string()])
    );
    assert_eq!(body.last_transaction_id.as_deref(), Some("102"));
}

#[test]
fn test_create_order_400_keeps_reject_keys() {
    let response: ApiResponse<CreateOrderResponse> =
        map_response(400, JSON, &create_order_body());

    let body = &response.body;
    assert!(body.order_create_transaction.is_none());
    assert!(body.order_fill_transaction.is_none());
    assert!(
        body.order_reject_transaction
            .as_ref()
            .is_some_and(Transaction::is_reject)
    );
    assert_eq!(body.error.error_code.as_deref(), Some("IGNORED"));

    match response.into_result() {
        Err(AppError::Api {
            status,
            error_code,
            error_message,
        }) => {
            assert_eq!(status, 400);
            assert_eq!(error_code.as_deref(), Some("IGNORED"));
            assert_eq!(error_message.as_deref(), Some("ignored on success"));
        }
        other => panic!("expected an api error, got {other:?}"),
    }
}

#[test]
fn test_create_order_unlisted_status_keeps_error_keys_only() {
    let response: ApiResponse<CreateOrderResponse> =
        map_response(503, JSON, &create_order_body());

    let expected = CreateOrderResponse {
        error: response.body.error.clone(),
        ..Default::default()
    };
    assert_eq!(response.body, expected);
    assert_eq!(
        response.error().error_message.as_deref(),
        Some("ignored on success")
    );
    assert_eq!(response.raw_body, create_order_body());
}

#[test]
fn test_unauthorized_maps_to_its_own_error() {
    let response: ApiResponse<AccountsResponse> = map_response(
        401,
        JSON,
        r#"{"errorMessage":"Insufficient authorization to perform request."}"#,
    );
    assert!(matches!(response.into_result(), Err(AppError::Unauthorized)));
}

#[test]
fn test_error_status_without_error_fields() {
    let response: ApiResponse<AccountsResponse> = map_response(500, JSON, "");
    assert!(matches!(
        response.into_result(),
        Err(AppError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR))
    ));
}

#[test]
fn test_non_json_error_body_is_kept_raw() {
    let response: ApiResponse<OrdersResponse> =
        map_response(502, Some("text/html"), "<html>bad gateway</html>");
    assert_eq!(response.body, OrdersResponse::default());
    assert_eq!(response.raw_body, "<html>bad gateway</html>");
    assert_eq!(response.content_type.as_deref(), Some("text/html"));
}

#[test]
fn test_configure_account_reject_statuses() {
    let raw = json!({
        "clientConfigureTransaction": {"id": "5", "type": "CLIENT_CONFIGURE"},
        "clientConfigureRejectTransaction": {"id": "6", "type": "CLIENT_CONFIGURE_REJECT", "rejectReason": "ALIAS_INVALID"},
        "lastTransactionID": "6",
        "errorMessage": "bad alias"
    })
    .to_string();

    for status in [400, 403] {
        let response: ApiResponse<ConfigureAccountResponse> = map_response(status, JSON, &raw);
        assert!(response.body.client_configure_transaction.is_none());
        assert!(response.body.client_configure_reject_transaction.is_some());
    }
    let ok: ApiResponse<ConfigureAccountResponse> = map_response(200, JSON, &raw);
    assert!(ok.body.client_configure_transaction.is_some());
    assert!(ok.body.client_configure_reject_transaction.is_none());
}

#[test]
fn test_transaction_pages_type_filter() {
    let response: ApiResponse<TransactionPagesResponse> = map_response(
        200,
        JSON,
        r#"{
            "from": "2024-01-01T00:00:00.000000000Z",
            "to": "2024-01-31T00:00:00.000000000Z",
            "pageSize": 100,
            "type": ["ORDER", "FUNDING"],
            "count": 120,
            "pages": ["https://api/v3/accounts/001/transactions/idrange?from=1&to=100",
                      "https://api/v3/accounts/001/transactions/idrange?from=101&to=120"],
            "lastTransactionID": "120"
        }"#,
    );
    let body = response.into_result().unwrap();
    assert_eq!(
        body.type_filter,
        Some(vec!["ORDER".to_string(), "FUNDING".to_string()])
    );
    assert_eq!(body.count, Some(120));
    assert_eq!(body.pages.map(|p| p.len()), Some(2));
}

#[test]
fn test_transactions_range_decodes_each_variant() {
    let response: ApiResponse<TransactionsResponse> = map_response(
        200,
        JSON,
        r#"{"transactions":[
            {"id":"1","type":"CREATE"},
            {"id":"2","type":"MARGIN_CALL_ENTER"},
            {"id":"3","type":"NEVER_SEEN"}
        ],"lastTransactionID":"3"}"#,
    );
    let kinds: Vec<Option<TransactionType>> = response
        .body
        .transactions
        .iter()
        .flatten()
        .map(Transaction::kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            Some(TransactionType::Create),
            Some(TransactionType::MarginCallEnter),
            None
        ]
    );
}

#[test]
fn test_endpoint_names() {
    assert_eq!(CreateOrderResponse::ENDPOINT, "order.create");
    assert_eq!(TradeDependentOrdersResponse::ENDPOINT, "trade.setDependentOrders");
    assert_eq!(StreamResponse::ENDPOINT, "stream");
    assert_eq!(
        CreateOrderResponse::fields_for(418),
        &["errorCode", "errorMessage"]
    );
}

#[test]
fn test_trades_table() {
    let response: ApiResponse<TradesResponse> = map_response(
        200,
        JSON,
        r#"{"trades":[{"id":"8","instrument":"EUR_USD","currentUnits":"100","price":"1.1","openTime":"2024-03-04T05:06:07.000000000Z"}]}"#,
    );
    let table = response.body.to_string();
    assert!(table.contains("INSTRUMENT"));
    assert!(table.contains("EUR_USD"));
    assert!(table.contains("2024-03-04"));
    assert!(!table.contains("05:06:07"));
}

#[test]
fn test_positions_table_sorted_by_instrument() {
    let response: ApiResponse<PositionsResponse> = map_response(
        200,
        JSON,
        r#"{"positions":[
            {"instrument":"USD_JPY","long":{"units":"10"}},
            {"instrument":"AUD_USD","short":{"units":"-5"}}
        ]}"#,
    );
    let table = response.body.to_string();
    let aud = table.find("AUD_USD").unwrap();
    let jpy = table.find("USD_JPY").unwrap();
    assert!(aud < jpy);
    assert!(table.contains("-5"));
}

#[test]
fn test_prices_table_marks_missing_values() {
    let response: ApiResponse<PricesResponse> = map_response(
        200,
        JSON,
        r#"{"prices":[{"type":"PRICE","instrument":"XAU_USD","tradeable":false}]}"#,
    );
    let table = response.body.to_string();
    assert!(table.contains("XAU_USD"));
    assert!(table.contains("false"));
    assert!(table.contains(" - "));
}
