use crate::error::AppError;
use crate::model::envelope::ApiResponse;
use crate::model::requests::{OrderClientExtensionsRequest, OrderListQuery};
use crate::model::responses::{
    CancelOrderResponse, CreateOrderResponse, OrderClientExtensionsResponse, OrderResponse,
    OrdersResponse, ReplaceOrderResponse,
};
use crate::presentation::order::OrderRequest;
use async_trait::async_trait;

#[async_trait]
/// Service for creating, replacing and cancelling orders
///
/// `order_specifier` is either an order id or `@` followed by the client order id.
pub trait OrderService: Send + Sync {
    /// Creates an order
    async fn create_order(
        &self,
        account_id: &str,
        order: &OrderRequest,
    ) -> Result<ApiResponse<CreateOrderResponse>, AppError>;

    /// Lists orders matching a filter
    async fn list_orders(
        &self,
        account_id: &str,
        query: &OrderListQuery,
    ) -> Result<ApiResponse<OrdersResponse>, AppError>;

    /// Lists pending orders
    async fn list_pending_orders(
        &self,
        account_id: &str,
    ) -> Result<ApiResponse<OrdersResponse>, AppError>;

    /// Details of one order
    async fn get_order(
        &self,
        account_id: &str,
        order_specifier: &str,
    ) -> Result<ApiResponse<OrderResponse>, AppError>;

    /// Cancels an order and creates its replacement
    async fn replace_order(
        &self,
        account_id: &str,
        order_specifier: &str,
        order: &OrderRequest,
    ) -> Result<ApiResponse<ReplaceOrderResponse>, AppError>;

    /// Cancels a pending order
    async fn cancel_order(
        &self,
        account_id: &str,
        order_specifier: &str,
    ) -> Result<ApiResponse<CancelOrderResponse>, AppError>;

    /// Updates the client extensions of an order and of the trade it opens
    async fn set_order_client_extensions(
        &self,
        account_id: &str,
        order_specifier: &str,
        request: &OrderClientExtensionsRequest,
    ) -> Result<ApiResponse<OrderClientExtensionsResponse>, AppError>;
}
