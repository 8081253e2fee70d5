use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use std::sync::Mutex;
use v20_client::application::client::Client;
use v20_client::application::config::{
    Config, Credentials, RateLimiterConfig, RestApiConfig, StreamConfig,
};
use v20_client::application::interfaces::account::AccountService;
use v20_client::application::interfaces::instrument::InstrumentService;
use v20_client::application::interfaces::order::OrderService;
use v20_client::application::interfaces::position::PositionService;
use v20_client::application::interfaces::pricing::PricingService;
use v20_client::application::interfaces::trade::TradeService;
use v20_client::application::interfaces::transaction::TransactionService;
use v20_client::error::AppError;
use v20_client::model::http::{ApiRequest, ChunkHandler, RawResponse, Transport};
use v20_client::model::requests::{
    CandlesQuery, ClosePositionRequest, CloseTradeRequest, ConfigureAccountRequest,
    OrderListQuery, PricingQuery, SetDependentOrdersRequest, TransactionListQuery,
    TransactionRangeQuery,
};
use v20_client::model::stream::{MalformedRecordPolicy, PricingStreamRecord, TransactionStreamRecord};
use v20_client::presentation::details::StopLossDetails;
use v20_client::presentation::instrument::CandlestickGranularity;
use v20_client::presentation::order::OrderRequest;
use v20_client::presentation::primitives::{AcceptDatetimeFormat, OrderState};
use v20_client::presentation::transaction::TransactionType;

/// Records every request and answers with a canned response
struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    response: RawResponse,
    chunks: Vec<&'static str>,
}

impl MockTransport {
    fn answering(status: u16, body: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: RawResponse {
                status,
                content_type: Some("application/json".to_string()),
                body: body.to_string(),
            },
            chunks: Vec::new(),
        }
    }

    fn streaming(chunks: Vec<&'static str>) -> Self {
        Self {
            chunks,
            ..Self::answering(200, "")
        }
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn last(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }

    async fn stream(
        &self,
        request: ApiRequest,
        on_chunk: &mut ChunkHandler<'_>,
    ) -> Result<RawResponse, AppError> {
        self.requests.lock().unwrap().push(request);
        if !self.response.is_success() {
            return Ok(self.response.clone());
        }
        for chunk in &self.chunks {
            on_chunk(chunk.as_bytes())?;
        }
        Ok(RawResponse {
            status: 200,
            content_type: Some("application/octet-stream".to_string()),
            body: String::new(),
        })
    }
}

fn create_test_config(policy: MalformedRecordPolicy) -> Config {
    Config {
        credentials: Credentials {
            access_token: "test-token".to_string(),
            account_id: "001".to_string(),
        },
        rest_api: RestApiConfig {
            base_url: "http://rest.invalid".to_string(),
            stream_url: "http://stream.invalid".to_string(),
            timeout: 5,
            datetime_format: AcceptDatetimeFormat::Rfc3339,
        },
        rate_limiter: RateLimiterConfig {
            max_requests: 100,
            period_seconds: 1,
            burst_size: 10,
        },
        stream: StreamConfig {
            malformed_records: policy,
            max_record_bytes: 4096,
        },
    }
}

fn client(transport: MockTransport) -> Client<MockTransport> {
    Client::with_transport(transport, create_test_config(MalformedRecordPolicy::Skip))
}

fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_create_order_posts_wrapped_order() {
    let client = client(MockTransport::answering(
        201,
        r#"{"orderCreateTransaction":{"id":"5","type":"MARKET_ORDER"},"lastTransactionID":"5"}"#,
    ));

    let response = client
        .create_order(client.account_id(), &OrderRequest::market("EUR_USD", "100"))
        .await
        .unwrap();

    let request = client.transport().last();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/v3/accounts/001/orders");
    assert_eq!(
        request.body,
        Some(json!({
            "order": {
                "type": "MARKET",
                "instrument": "EUR_USD",
                "units": "100",
                "timeInForce": "FOK",
                "positionFill": "DEFAULT"
            }
        }))
    );
    assert_eq!(response.status, 201);
    let body = response.into_result().unwrap();
    assert_eq!(body.last_transaction_id.as_deref(), Some("5"));
    assert_eq!(
        body.order_create_transaction.and_then(|tx| tx.kind()),
        Some(TransactionType::MarketOrder)
    );
}

#[tokio::test]
async fn test_invalid_order_is_not_sent() {
    let client = client(MockTransport::answering(201, "{}"));
    let OrderRequest::Limit(mut limit) = OrderRequest::limit("EUR_USD", "10", "1.1") else {
        panic!("expected a limit request");
    };
    limit.params.instrument = None;

    let err = client
        .create_order("001", &OrderRequest::Limit(limit))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_order_paths_accept_client_specifiers() {
    let client = client(MockTransport::answering(200, "{}"));

    client.get_order("001", "@my-order").await.unwrap();
    assert_eq!(client.transport().last().path, "/v3/accounts/001/orders/@my-order");

    client.cancel_order("001", "42").await.unwrap();
    let cancel = client.transport().last();
    assert_eq!(cancel.method, Method::PUT);
    assert_eq!(cancel.path, "/v3/accounts/001/orders/42/cancel");
    assert!(cancel.body.is_none());

    client
        .replace_order("001", "42", &OrderRequest::stop("EUR_USD", "5", "1.2"))
        .await
        .unwrap();
    let replace = client.transport().last();
    assert_eq!(replace.method, Method::PUT);
    assert_eq!(replace.path, "/v3/accounts/001/orders/42");
    assert_eq!(replace.body.unwrap()["order"]["type"], "STOP");
}

#[tokio::test]
async fn test_path_parameters_are_checked() {
    let client = client(MockTransport::answering(200, "{}"));
    assert!(client.get_account("").await.is_err());
    assert!(client.get_trade("001", "a/b").await.is_err());
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_list_queries() {
    let client = client(MockTransport::answering(200, r#"{"orders":[]}"#));

    let orders = OrderListQuery {
        state: Some(OrderState::Pending),
        count: Some(10),
        ..Default::default()
    };
    let response = client.list_orders("001", &orders).await.unwrap();
    assert_eq!(response.body.orders, Some(vec![]));
    let request = client.transport().last();
    assert_eq!(request.path, "/v3/accounts/001/orders");
    assert_eq!(request.query, query(&[("state", "PENDING"), ("count", "10")]));

    client.list_pending_orders("001").await.unwrap();
    assert_eq!(client.transport().last().path, "/v3/accounts/001/pendingOrders");

    client.list_open_trades("001").await.unwrap();
    assert_eq!(client.transport().last().path, "/v3/accounts/001/openTrades");

    client.list_open_positions("001").await.unwrap();
    assert_eq!(client.transport().last().path, "/v3/accounts/001/openPositions");
}

#[tokio::test]
async fn test_account_endpoints() {
    let client = client(MockTransport::answering(200, "{}"));

    client.list_accounts().await.unwrap();
    assert_eq!(client.transport().last().path, "/v3/accounts");

    client.get_account_summary("001").await.unwrap();
    assert_eq!(client.transport().last().path, "/v3/accounts/001/summary");

    client
        .get_account_instruments("001", &["EUR_USD".to_string(), "USD_JPY".to_string()])
        .await
        .unwrap();
    let instruments = client.transport().last();
    assert_eq!(instruments.path, "/v3/accounts/001/instruments");
    assert_eq!(instruments.query, query(&[("instruments", "EUR_USD,USD_JPY")]));

    client
        .configure_account("001", &ConfigureAccountRequest::default().with_alias("Main"))
        .await
        .unwrap();
    let configure = client.transport().last();
    assert_eq!(configure.method, Method::PATCH);
    assert_eq!(configure.path, "/v3/accounts/001/configuration");
    assert_eq!(configure.body, Some(json!({"alias": "Main"})));

    assert!(
        client
            .configure_account("001", &ConfigureAccountRequest::default())
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_get_candles() {
    let client = client(MockTransport::answering(
        200,
        r#"{"instrument":"EUR_USD","granularity":"M5","candles":[{"time":"t","mid":{"o":"1","h":"2","l":"0.5","c":"1.5"},"complete":true}]}"#,
    ));

    let response = client
        .get_candles("EUR_USD", &CandlesQuery::latest(CandlestickGranularity::M5, 1))
        .await
        .unwrap();

    let request = client.transport().last();
    assert_eq!(request.path, "/v3/instruments/EUR_USD/candles");
    assert_eq!(
        request.query,
        query(&[("price", "M"), ("granularity", "M5"), ("count", "1")])
    );
    let body = response.into_result().unwrap();
    assert_eq!(body.candles.map(|c| c.len()), Some(1));

    let err = client
        .get_candles("EUR_USD", &CandlesQuery::latest(CandlestickGranularity::M5, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_trade_mutations() {
    let client = client(MockTransport::answering(200, "{}"));

    client
        .close_trade("001", "@tp-1", &CloseTradeRequest::default())
        .await
        .unwrap();
    let close = client.transport().last();
    assert_eq!(close.path, "/v3/accounts/001/trades/@tp-1/close");
    assert_eq!(close.body, Some(json!({"units": "ALL"})));

    let orders = SetDependentOrdersRequest::default()
        .with_stop_loss(StopLossDetails::at_price("1.05"))
        .cancel_take_profit();
    client
        .set_trade_dependent_orders("001", "9", &orders)
        .await
        .unwrap();
    let dependent = client.transport().last();
    assert_eq!(dependent.path, "/v3/accounts/001/trades/9/orders");
    assert_eq!(
        dependent.body,
        Some(json!({
            "takeProfit": null,
            "stopLoss": {"price": "1.05", "timeInForce": "GTC"}
        }))
    );
}

#[tokio::test]
async fn test_close_position() {
    let client = client(MockTransport::answering(200, "{}"));

    client
        .close_position("001", "EUR_USD", &ClosePositionRequest::long_all())
        .await
        .unwrap();
    let request = client.transport().last();
    assert_eq!(request.path, "/v3/accounts/001/positions/EUR_USD/close");
    assert_eq!(request.body, Some(json!({"longUnits": "ALL"})));

    let err = client
        .close_position("001", "EUR_USD", &ClosePositionRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(client.transport().requests().len(), 1);
}

#[tokio::test]
async fn test_transaction_queries() {
    let client = client(MockTransport::answering(200, r#"{"transactions":[]}"#));

    client.get_transactions_since("001", "77").await.unwrap();
    let since = client.transport().last();
    assert_eq!(since.path, "/v3/accounts/001/transactions/sinceid");
    assert_eq!(since.query, query(&[("id", "77")]));

    client
        .get_transaction_range("001", &TransactionRangeQuery::new("1", "9"))
        .await
        .unwrap();
    let range = client.transport().last();
    assert_eq!(range.path, "/v3/accounts/001/transactions/idrange");
    assert_eq!(range.query, query(&[("from", "1"), ("to", "9")]));

    client.get_transaction("001", "3").await.unwrap();
    assert_eq!(client.transport().last().path, "/v3/accounts/001/transactions/3");

    let too_big = TransactionListQuery {
        page_size: Some(5000),
        ..Default::default()
    };
    assert!(client.list_transactions("001", &too_big).await.is_err());
    assert_eq!(client.transport().requests().len(), 3);
}

#[tokio::test]
async fn test_error_status_comes_back_as_envelope() {
    let client = client(MockTransport::answering(
        404,
        r#"{"errorCode":"NO_SUCH_TRADE","errorMessage":"The Trade specified does not exist"}"#,
    ));

    let response = client.get_trade("001", "999").await.unwrap();
    assert_eq!(response.status, 404);
    assert!(response.body.trade.is_none());
    assert_eq!(response.error().error_code.as_deref(), Some("NO_SUCH_TRADE"));
    assert!(matches!(
        response.into_result(),
        Err(AppError::Api { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_stream_transactions_delivers_records_in_order() {
    let client = client(MockTransport::streaming(vec![
        "{\"type\":\"HEARTBEAT\",\"lastTransactionID\":\"4\"}\n{\"id\":\"5\",\"ty",
        "pe\":\"ORDER_FILL\"}\n",
        "{\"id\":\"6\",\"type\":\"DAILY_FINANCING\"}",
    ]));

    let mut seen = Vec::new();
    let response = client
        .stream_transactions("001", &mut |record: TransactionStreamRecord| {
            seen.push(record);
            Ok(())
        })
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(
        client.transport().last().path,
        "/v3/accounts/001/transactions/stream"
    );
    assert_eq!(seen.len(), 3);
    assert!(matches!(seen[0], TransactionStreamRecord::Heartbeat(_)));
    let kinds: Vec<Option<TransactionType>> = seen[1..]
        .iter()
        .map(|record| match record {
            TransactionStreamRecord::Transaction(tx) => tx.kind(),
            TransactionStreamRecord::Heartbeat(_) => None,
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            Some(TransactionType::OrderFill),
            Some(TransactionType::DailyFinancing)
        ]
    );
}

#[tokio::test]
async fn test_stream_prices_sends_stream_query() {
    let client = client(MockTransport::streaming(vec![
        "{\"type\":\"PRICE\",\"instrument\":\"EUR_USD\"}\n",
    ]));

    let mut query_builder = PricingQuery::new(["EUR_USD"]);
    query_builder.snapshot = Some(true);
    let mut prices = 0;
    client
        .stream_prices("001", &query_builder, &mut |record: PricingStreamRecord| {
            if matches!(record, PricingStreamRecord::Price(_)) {
                prices += 1;
            }
            Ok(())
        })
        .await
        .unwrap();

    let request = client.transport().last();
    assert_eq!(request.path, "/v3/accounts/001/pricing/stream");
    assert_eq!(
        request.query,
        query(&[("instruments", "EUR_USD"), ("snapshot", "true")])
    );
    assert_eq!(prices, 1);
}

#[tokio::test]
async fn test_refused_stream_maps_to_envelope() {
    let client = client(MockTransport::answering(
        401,
        r#"{"errorMessage":"Insufficient authorization to perform request."}"#,
    ));

    let mut calls = 0;
    let response = client
        .stream_transactions("001", &mut |_: TransactionStreamRecord| {
            calls += 1;
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(calls, 0);
    assert_eq!(response.status, 401);
    assert!(matches!(response.into_result(), Err(AppError::Unauthorized)));
}

#[tokio::test]
async fn test_malformed_record_policy_from_config() {
    let transport = MockTransport::streaming(vec!["{\"type\":\"HEARTBEAT\"}\nnot json\n"]);
    let client = Client::with_transport(
        transport,
        create_test_config(MalformedRecordPolicy::Abort),
    );

    let err = client
        .stream_transactions("001", &mut |_: TransactionStreamRecord| Ok(()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MalformedRecord { index: 1, .. }));
}

#[tokio::test]
async fn test_stream_prices_needs_instruments() {
    let client = client(MockTransport::streaming(vec![]));
    let err = client
        .stream_prices("001", &PricingQuery::default(), &mut |_: PricingStreamRecord| {
            Ok(())
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(client.transport().requests().is_empty());
}

#[test]
fn test_client_from_blocking_code() {
    let client = client(MockTransport::answering(
        200,
        r#"{"accounts":[{"id":"001","tags":[]}]}"#,
    ));
    assert_eq!(client.account_id(), "001");

    let response = tokio_test::assert_ok!(tokio_test::block_on(client.list_accounts()));
    assert!(response.is_success());
    assert_eq!(response.body.accounts.map(|a| a.len()), Some(1));
    assert_eq!(client.transport().last().path, "/v3/accounts");
}

#[test]
fn test_encoded_specifier_reaches_transport() {
    let client = client(MockTransport::answering(200, "{}"));
    tokio_test::assert_ok!(tokio_test::block_on(client.get_trade("001", "@t#1")));
    assert_eq!(client.transport().last().path, "/v3/accounts/001/trades/@t%231");
}
