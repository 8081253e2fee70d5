use crate::error::AppError;
use crate::model::envelope::ApiResponse;
use crate::model::requests::ConfigureAccountRequest;
use crate::model::responses::{
    AccountInstrumentsResponse, AccountResponse, AccountSummaryResponse, AccountsResponse,
    ConfigureAccountResponse,
};
use async_trait::async_trait;

#[async_trait]
/// Accounts the token can access and their configuration
///
/// Account scoped operations take the account id explicitly; the `Client`
/// also offers the configured account through `Client::account_id`.
pub trait AccountService: Send + Sync {
    /// Lists the accounts authorized for the token
    async fn list_accounts(&self) -> Result<ApiResponse<AccountsResponse>, AppError>;

    /// Full details of an account, including open trades, positions and pending orders
    async fn get_account(&self, account_id: &str) -> Result<ApiResponse<AccountResponse>, AppError>;

    /// Summary of an account
    async fn get_account_summary(
        &self,
        account_id: &str,
    ) -> Result<ApiResponse<AccountSummaryResponse>, AppError>;

    /// Tradeable instruments of an account, optionally restricted to `instruments`
    async fn get_account_instruments(
        &self,
        account_id: &str,
        instruments: &[String],
    ) -> Result<ApiResponse<AccountInstrumentsResponse>, AppError>;

    /// Sets the client-configurable parts of an account
    async fn configure_account(
        &self,
        account_id: &str,
        request: &ConfigureAccountRequest,
    ) -> Result<ApiResponse<ConfigureAccountResponse>, AppError>;
}
