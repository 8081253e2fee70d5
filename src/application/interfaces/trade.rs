use crate::error::AppError;
use crate::model::envelope::ApiResponse;
use crate::model::requests::{
    CloseTradeRequest, SetDependentOrdersRequest, TradeClientExtensionsRequest, TradeListQuery,
};
use crate::model::responses::{
    CloseTradeResponse, TradeClientExtensionsResponse, TradeDependentOrdersResponse,
    TradeResponse, TradesResponse,
};
use async_trait::async_trait;

#[async_trait]
/// Open and closed trades
///
/// `trade_specifier` is either a trade id or `@` followed by the client trade id.
pub trait TradeService: Send + Sync {
    /// Lists trades matching a filter
    async fn list_trades(
        &self,
        account_id: &str,
        query: &TradeListQuery,
    ) -> Result<ApiResponse<TradesResponse>, AppError>;

    /// Lists open trades
    async fn list_open_trades(
        &self,
        account_id: &str,
    ) -> Result<ApiResponse<TradesResponse>, AppError>;

    /// Details of one trade
    async fn get_trade(
        &self,
        account_id: &str,
        trade_specifier: &str,
    ) -> Result<ApiResponse<TradeResponse>, AppError>;

    /// Closes a trade fully or partially
    async fn close_trade(
        &self,
        account_id: &str,
        trade_specifier: &str,
        request: &CloseTradeRequest,
    ) -> Result<ApiResponse<CloseTradeResponse>, AppError>;

    /// Updates the client extensions of a trade
    async fn set_trade_client_extensions(
        &self,
        account_id: &str,
        trade_specifier: &str,
        request: &TradeClientExtensionsRequest,
    ) -> Result<ApiResponse<TradeClientExtensionsResponse>, AppError>;

    /// Creates, replaces or cancels the take profit, stop loss and trailing stop loss of a trade
    async fn set_trade_dependent_orders(
        &self,
        account_id: &str,
        trade_specifier: &str,
        request: &SetDependentOrdersRequest,
    ) -> Result<ApiResponse<TradeDependentOrdersResponse>, AppError>;
}
