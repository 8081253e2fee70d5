use crate::application::interfaces::RecordHandler;
use crate::error::AppError;
use crate::model::envelope::ApiResponse;
use crate::model::requests::{TransactionListQuery, TransactionRangeQuery};
use crate::model::responses::{
    StreamResponse, TransactionPagesResponse, TransactionResponse, TransactionsResponse,
};
use crate::model::stream::TransactionStreamRecord;
use async_trait::async_trait;

#[async_trait]
/// Account transaction history
pub trait TransactionService: Send + Sync {
    /// Pages of transactions in a time range
    async fn list_transactions(
        &self,
        account_id: &str,
        query: &TransactionListQuery,
    ) -> Result<ApiResponse<TransactionPagesResponse>, AppError>;

    /// One transaction
    async fn get_transaction(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<ApiResponse<TransactionResponse>, AppError>;

    /// Transactions in an inclusive id range
    async fn get_transaction_range(
        &self,
        account_id: &str,
        query: &TransactionRangeQuery,
    ) -> Result<ApiResponse<TransactionsResponse>, AppError>;

    /// Transactions after an id
    async fn get_transactions_since(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<ApiResponse<TransactionsResponse>, AppError>;

    /// Streams transactions and heartbeats to `on_record` until the server
    /// closes the stream, the callback fails or the future is dropped.
    async fn stream_transactions(
        &self,
        account_id: &str,
        on_record: &mut RecordHandler<'_, TransactionStreamRecord>,
    ) -> Result<ApiResponse<StreamResponse>, AppError>;
}
