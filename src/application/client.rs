/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::RecordHandler;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::instrument::InstrumentService;
use crate::application::interfaces::order::OrderService;
use crate::application::interfaces::position::PositionService;
use crate::application::interfaces::pricing::PricingService;
use crate::application::interfaces::trade::TradeService;
use crate::application::interfaces::transaction::TransactionService;
use crate::error::AppError;
use crate::model::envelope::{ApiResponse, Envelope, map_response};
use crate::model::http::{ApiRequest, HttpClient, Transport};
use crate::model::requests::{
    CandlesQuery, ClosePositionRequest, CloseTradeRequest, ConfigureAccountRequest,
    CreateOrderBody, OrderClientExtensionsRequest, OrderListQuery, PricingQuery, QueryPairs,
    SetDependentOrdersRequest, TradeClientExtensionsRequest, TradeListQuery,
    TransactionListQuery, TransactionRangeQuery,
};
use crate::model::responses::{
    AccountInstrumentsResponse, AccountResponse, AccountSummaryResponse, AccountsResponse,
    CancelOrderResponse, CandlesResponse, ClosePositionResponse, CloseTradeResponse,
    ConfigureAccountResponse, CreateOrderResponse, OrderClientExtensionsResponse, OrderResponse,
    OrdersResponse, PositionResponse, PositionsResponse, PricesResponse, ReplaceOrderResponse,
    StreamResponse, TradeClientExtensionsResponse, TradeDependentOrdersResponse, TradeResponse,
    TradesResponse, TransactionPagesResponse, TransactionResponse, TransactionsResponse,
};
use crate::model::stream::{
    PricingStreamRecord, StreamParser, StreamRecord, TransactionStreamRecord,
};
use crate::presentation::order::OrderRequest;
use crate::utils::template::expand_path;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

const ACCOUNTS: &str = "/v3/accounts";
const ACCOUNT: &str = "/v3/accounts/{accountID}";
const ACCOUNT_SUMMARY: &str = "/v3/accounts/{accountID}/summary";
const ACCOUNT_INSTRUMENTS: &str = "/v3/accounts/{accountID}/instruments";
const ACCOUNT_CONFIGURATION: &str = "/v3/accounts/{accountID}/configuration";
const CANDLES: &str = "/v3/instruments/{instrument}/candles";
const ORDERS: &str = "/v3/accounts/{accountID}/orders";
const PENDING_ORDERS: &str = "/v3/accounts/{accountID}/pendingOrders";
const ORDER: &str = "/v3/accounts/{accountID}/orders/{orderSpecifier}";
const ORDER_CANCEL: &str = "/v3/accounts/{accountID}/orders/{orderSpecifier}/cancel";
const ORDER_CLIENT_EXTENSIONS: &str =
    "/v3/accounts/{accountID}/orders/{orderSpecifier}/clientExtensions";
const TRADES: &str = "/v3/accounts/{accountID}/trades";
const OPEN_TRADES: &str = "/v3/accounts/{accountID}/openTrades";
const TRADE: &str = "/v3/accounts/{accountID}/trades/{tradeSpecifier}";
const TRADE_CLOSE: &str = "/v3/accounts/{accountID}/trades/{tradeSpecifier}/close";
const TRADE_CLIENT_EXTENSIONS: &str =
    "/v3/accounts/{accountID}/trades/{tradeSpecifier}/clientExtensions";
const TRADE_ORDERS: &str = "/v3/accounts/{accountID}/trades/{tradeSpecifier}/orders";
const POSITIONS: &str = "/v3/accounts/{accountID}/positions";
const OPEN_POSITIONS: &str = "/v3/accounts/{accountID}/openPositions";
const POSITION: &str = "/v3/accounts/{accountID}/positions/{instrument}";
const POSITION_CLOSE: &str = "/v3/accounts/{accountID}/positions/{instrument}/close";
const PRICING: &str = "/v3/accounts/{accountID}/pricing";
const PRICING_STREAM: &str = "/v3/accounts/{accountID}/pricing/stream";
const TRANSACTIONS: &str = "/v3/accounts/{accountID}/transactions";
const TRANSACTION: &str = "/v3/accounts/{accountID}/transactions/{transactionID}";
const TRANSACTION_RANGE: &str = "/v3/accounts/{accountID}/transactions/idrange";
const TRANSACTIONS_SINCE: &str = "/v3/accounts/{accountID}/transactions/sinceid";
const TRANSACTION_STREAM: &str = "/v3/accounts/{accountID}/transactions/stream";

/// Typed client implementing every service over a [`Transport`]
pub struct Client<T: Transport = HttpClient> {
    transport: Arc<T>,
    config: Arc<Config>,
}

impl Client<HttpClient> {
    /// Client over the default reqwest transport
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = HttpClient::new(config.clone())?;
        Ok(Self::with_transport(transport, config))
    }

    /// Client configured from the environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }
}

impl<T: Transport> Client<T> {
    /// Client over a custom transport
    pub fn with_transport(transport: T, config: Config) -> Self {
        Self {
            transport: Arc::new(transport),
            config: Arc::new(config),
        }
    }

    /// Configured account id
    pub fn account_id(&self) -> &str {
        &self.config.credentials.account_id
    }

    /// Transport in use
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<E: Envelope>(&self, request: ApiRequest) -> Result<ApiResponse<E>, AppError> {
        debug!("{} {} {}", E::ENDPOINT, request.method, request.path);
        let raw = self.transport.request(request).await?;
        let response = map_response::<E>(raw.status, raw.content_type.as_deref(), &raw.body);
        debug!("{} answered {}", E::ENDPOINT, response.status);
        Ok(response)
    }

    async fn stream_records<R>(
        &self,
        request: ApiRequest,
        on_record: &mut RecordHandler<'_, R>,
    ) -> Result<ApiResponse<StreamResponse>, AppError>
    where
        R: StreamRecord + Send,
    {
        let mut parser: StreamParser<R> = StreamParser::new(
            self.config.stream.malformed_records,
            self.config.stream.max_record_bytes,
        );

        let raw = {
            let mut on_chunk = |chunk: &[u8]| parser.feed(chunk, &mut *on_record);
            self.transport.stream(request, &mut on_chunk).await?
        };
        if raw.is_success() {
            parser.finish(&mut *on_record)?;
        }

        let stats = parser.stats();
        info!(
            "{} stream ended: {} records, {} heartbeats, {} skipped",
            R::STREAM,
            stats.records,
            stats.heartbeats,
            stats.skipped
        );
        Ok(map_response(
            raw.status,
            raw.content_type.as_deref(),
            &raw.body,
        ))
    }
}

fn account_path(template: &str, account_id: &str) -> Result<String, AppError> {
    expand_path(template, &[("accountID", account_id)])
}

#[async_trait]
impl<T: Transport> AccountService for Client<T> {
    async fn list_accounts(&self) -> Result<ApiResponse<AccountsResponse>, AppError> {
        info!("Listing accounts");
        self.call(ApiRequest::get(ACCOUNTS)).await
    }

    async fn get_account(&self, account_id: &str) -> Result<ApiResponse<AccountResponse>, AppError> {
        info!("Getting account {}", account_id);
        let path = account_path(ACCOUNT, account_id)?;
        self.call(ApiRequest::get(path)).await
    }

    async fn get_account_summary(
        &self,
        account_id: &str,
    ) -> Result<ApiResponse<AccountSummaryResponse>, AppError> {
        info!("Getting account summary {}", account_id);
        let path = account_path(ACCOUNT_SUMMARY, account_id)?;
        self.call(ApiRequest::get(path)).await
    }

    async fn get_account_instruments(
        &self,
        account_id: &str,
        instruments: &[String],
    ) -> Result<ApiResponse<AccountInstrumentsResponse>, AppError> {
        info!("Getting instruments of account {}", account_id);
        let path = account_path(ACCOUNT_INSTRUMENTS, account_id)?;
        let mut query = QueryPairs::new();
        if !instruments.is_empty() {
            query.push(("instruments".to_string(), instruments.join(",")));
        }
        self.call(ApiRequest::get(path).with_query(query)).await
    }

    async fn configure_account(
        &self,
        account_id: &str,
        request: &ConfigureAccountRequest,
    ) -> Result<ApiResponse<ConfigureAccountResponse>, AppError> {
        request.validate()?;
        info!("Configuring account {}", account_id);
        let path = account_path(ACCOUNT_CONFIGURATION, account_id)?;
        self.call(ApiRequest::patch(path).with_body(request)?).await
    }
}

#[async_trait]
impl<T: Transport> InstrumentService for Client<T> {
    async fn get_candles(
        &self,
        instrument: &str,
        query: &CandlesQuery,
    ) -> Result<ApiResponse<CandlesResponse>, AppError> {
        query.validate()?;
        info!(
            "Getting {} candles of {}",
            query.granularity.as_str(),
            instrument
        );
        let path = expand_path(CANDLES, &[("instrument", instrument)])?;
        self.call(ApiRequest::get(path).with_query(query.to_query()))
            .await
    }
}

#[async_trait]
impl<T: Transport> OrderService for Client<T> {
    async fn create_order(
        &self,
        account_id: &str,
        order: &OrderRequest,
    ) -> Result<ApiResponse<CreateOrderResponse>, AppError> {
        let body = CreateOrderBody::new(order.clone())?;
        info!("Creating order: {}", order.summary());
        let path = account_path(ORDERS, account_id)?;
        self.call(ApiRequest::post(path).with_body(&body)?).await
    }

    async fn list_orders(
        &self,
        account_id: &str,
        query: &OrderListQuery,
    ) -> Result<ApiResponse<OrdersResponse>, AppError> {
        info!("Listing orders of account {}", account_id);
        let path = account_path(ORDERS, account_id)?;
        self.call(ApiRequest::get(path).with_query(query.to_query()))
            .await
    }

    async fn list_pending_orders(
        &self,
        account_id: &str,
    ) -> Result<ApiResponse<OrdersResponse>, AppError> {
        info!("Listing pending orders of account {}", account_id);
        let path = account_path(PENDING_ORDERS, account_id)?;
        self.call(ApiRequest::get(path)).await
    }

    async fn get_order(
        &self,
        account_id: &str,
        order_specifier: &str,
    ) -> Result<ApiResponse<OrderResponse>, AppError> {
        info!("Getting order {}", order_specifier);
        let path = expand_path(
            ORDER,
            &[("accountID", account_id), ("orderSpecifier", order_specifier)],
        )?;
        self.call(ApiRequest::get(path)).await
    }

    async fn replace_order(
        &self,
        account_id: &str,
        order_specifier: &str,
        order: &OrderRequest,
    ) -> Result<ApiResponse<ReplaceOrderResponse>, AppError> {
        let body = CreateOrderBody::new(order.clone())?;
        info!("Replacing order {}: {}", order_specifier, order.summary());
        let path = expand_path(
            ORDER,
            &[("accountID", account_id), ("orderSpecifier", order_specifier)],
        )?;
        self.call(ApiRequest::put(path).with_body(&body)?).await
    }

    async fn cancel_order(
        &self,
        account_id: &str,
        order_specifier: &str,
    ) -> Result<ApiResponse<CancelOrderResponse>, AppError> {
        info!("Cancelling order {}", order_specifier);
        let path = expand_path(
            ORDER_CANCEL,
            &[("accountID", account_id), ("orderSpecifier", order_specifier)],
        )?;
        self.call(ApiRequest::put(path)).await
    }

    async fn set_order_client_extensions(
        &self,
        account_id: &str,
        order_specifier: &str,
        request: &OrderClientExtensionsRequest,
    ) -> Result<ApiResponse<OrderClientExtensionsResponse>, AppError> {
        info!("Updating client extensions of order {}", order_specifier);
        let path = expand_path(
            ORDER_CLIENT_EXTENSIONS,
            &[("accountID", account_id), ("orderSpecifier", order_specifier)],
        )?;
        self.call(ApiRequest::put(path).with_body(request)?).await
    }
}

#[async_trait]
impl<T: Transport> TradeService for Client<T> {
    async fn list_trades(
        &self,
        account_id: &str,
        query: &TradeListQuery,
    ) -> Result<ApiResponse<TradesResponse>, AppError> {
        info!("Listing trades of account {}", account_id);
        let path = account_path(TRADES, account_id)?;
        self.call(ApiRequest::get(path).with_query(query.to_query()))
            .await
    }

    async fn list_open_trades(
        &self,
        account_id: &str,
    ) -> Result<ApiResponse<TradesResponse>, AppError> {
        info!("Listing open trades of account {}", account_id);
        let path = account_path(OPEN_TRADES, account_id)?;
        self.call(ApiRequest::get(path)).await
    }

    async fn get_trade(
        &self,
        account_id: &str,
        trade_specifier: &str,
    ) -> Result<ApiResponse<TradeResponse>, AppError> {
        info!("Getting trade {}", trade_specifier);
        let path = expand_path(
            TRADE,
            &[("accountID", account_id), ("tradeSpecifier", trade_specifier)],
        )?;
        self.call(ApiRequest::get(path)).await
    }

    async fn close_trade(
        &self,
        account_id: &str,
        trade_specifier: &str,
        request: &CloseTradeRequest,
    ) -> Result<ApiResponse<CloseTradeResponse>, AppError> {
        info!("Closing {} units of trade {}", request.units, trade_specifier);
        let path = expand_path(
            TRADE_CLOSE,
            &[("accountID", account_id), ("tradeSpecifier", trade_specifier)],
        )?;
        self.call(ApiRequest::put(path).with_body(request)?).await
    }

    async fn set_trade_client_extensions(
        &self,
        account_id: &str,
        trade_specifier: &str,
        request: &TradeClientExtensionsRequest,
    ) -> Result<ApiResponse<TradeClientExtensionsResponse>, AppError> {
        info!("Updating client extensions of trade {}", trade_specifier);
        let path = expand_path(
            TRADE_CLIENT_EXTENSIONS,
            &[("accountID", account_id), ("tradeSpecifier", trade_specifier)],
        )?;
        self.call(ApiRequest::put(path).with_body(request)?).await
    }

    async fn set_trade_dependent_orders(
        &self,
        account_id: &str,
        trade_specifier: &str,
        request: &SetDependentOrdersRequest,
    ) -> Result<ApiResponse<TradeDependentOrdersResponse>, AppError> {
        info!("Updating dependent orders of trade {}", trade_specifier);
        let path = expand_path(
            TRADE_ORDERS,
            &[("accountID", account_id), ("tradeSpecifier", trade_specifier)],
        )?;
        self.call(ApiRequest::put(path).with_body(request)?).await
    }
}

#[async_trait]
impl<T: Transport> PositionService for Client<T> {
    async fn list_positions(
        &self,
        account_id: &str,
    ) -> Result<ApiResponse<PositionsResponse>, AppError> {
        info!("Listing positions of account {}", account_id);
        let path = account_path(POSITIONS, account_id)?;
        self.call(ApiRequest::get(path)).await
    }

    async fn list_open_positions(
        &self,
        account_id: &str,
    ) -> Result<ApiResponse<PositionsResponse>, AppError> {
        info!("Listing open positions of account {}", account_id);
        let path = account_path(OPEN_POSITIONS, account_id)?;
        self.call(ApiRequest::get(path)).await
    }

    async fn get_position(
        &self,
        account_id: &str,
        instrument: &str,
    ) -> Result<ApiResponse<PositionResponse>, AppError> {
        info!("Getting position of {}", instrument);
        let path = expand_path(
            POSITION,
            &[("accountID", account_id), ("instrument", instrument)],
        )?;
        self.call(ApiRequest::get(path)).await
    }

    async fn close_position(
        &self,
        account_id: &str,
        instrument: &str,
        request: &ClosePositionRequest,
    ) -> Result<ApiResponse<ClosePositionResponse>, AppError> {
        request.validate()?;
        info!("Closing position of {}", instrument);
        let path = expand_path(
            POSITION_CLOSE,
            &[("accountID", account_id), ("instrument", instrument)],
        )?;
        self.call(ApiRequest::put(path).with_body(request)?).await
    }
}

#[async_trait]
impl<T: Transport> PricingService for Client<T> {
    async fn get_prices(
        &self,
        account_id: &str,
        query: &PricingQuery,
    ) -> Result<ApiResponse<PricesResponse>, AppError> {
        query.validate()?;
        info!("Getting prices of {}", query.instruments.join(","));
        let path = account_path(PRICING, account_id)?;
        self.call(ApiRequest::get(path).with_query(query.to_query()))
            .await
    }

    async fn stream_prices(
        &self,
        account_id: &str,
        query: &PricingQuery,
        on_record: &mut RecordHandler<'_, PricingStreamRecord>,
    ) -> Result<ApiResponse<StreamResponse>, AppError> {
        query.validate()?;
        info!("Streaming prices of {}", query.instruments.join(","));
        let path = account_path(PRICING_STREAM, account_id)?;
        let request = ApiRequest::get(path).with_query(query.to_stream_query());
        self.stream_records(request, on_record).await
    }
}

#[async_trait]
impl<T: Transport> TransactionService for Client<T> {
    async fn list_transactions(
        &self,
        account_id: &str,
        query: &TransactionListQuery,
    ) -> Result<ApiResponse<TransactionPagesResponse>, AppError> {
        query.validate()?;
        info!("Listing transactions of account {}", account_id);
        let path = account_path(TRANSACTIONS, account_id)?;
        self.call(ApiRequest::get(path).with_query(query.to_query()))
            .await
    }

    async fn get_transaction(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<ApiResponse<TransactionResponse>, AppError> {
        info!("Getting transaction {}", transaction_id);
        let path = expand_path(
            TRANSACTION,
            &[("accountID", account_id), ("transactionID", transaction_id)],
        )?;
        self.call(ApiRequest::get(path)).await
    }

    async fn get_transaction_range(
        &self,
        account_id: &str,
        query: &TransactionRangeQuery,
    ) -> Result<ApiResponse<TransactionsResponse>, AppError> {
        info!("Getting transactions {} to {}", query.from, query.to);
        let path = account_path(TRANSACTION_RANGE, account_id)?;
        self.call(ApiRequest::get(path).with_query(query.to_query()))
            .await
    }

    async fn get_transactions_since(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<ApiResponse<TransactionsResponse>, AppError> {
        info!("Getting transactions since {}", transaction_id);
        let path = account_path(TRANSACTIONS_SINCE, account_id)?;
        let query = vec![("id".to_string(), transaction_id.to_string())];
        self.call(ApiRequest::get(path).with_query(query)).await
    }

    async fn stream_transactions(
        &self,
        account_id: &str,
        on_record: &mut RecordHandler<'_, TransactionStreamRecord>,
    ) -> Result<ApiResponse<StreamResponse>, AppError> {
        info!("Streaming transactions of account {}", account_id);
        let path = account_path(TRANSACTION_STREAM, account_id)?;
        self.stream_records(ApiRequest::get(path), on_record).await
    }
}
