use crate::error::AppError;
use crate::model::envelope::ApiResponse;
use crate::model::requests::ClosePositionRequest;
use crate::model::responses::{ClosePositionResponse, PositionResponse, PositionsResponse};
use async_trait::async_trait;

#[async_trait]
/// Positions, one per instrument
pub trait PositionService: Send + Sync {
    /// Every position the account ever held
    async fn list_positions(
        &self,
        account_id: &str,
    ) -> Result<ApiResponse<PositionsResponse>, AppError>;

    /// Positions with open trades
    async fn list_open_positions(
        &self,
        account_id: &str,
    ) -> Result<ApiResponse<PositionsResponse>, AppError>;

    /// Position of one instrument
    async fn get_position(
        &self,
        account_id: &str,
        instrument: &str,
    ) -> Result<ApiResponse<PositionResponse>, AppError>;

    /// Closes the long and/or short side of a position
    async fn close_position(
        &self,
        account_id: &str,
        instrument: &str,
        request: &ClosePositionRequest,
    ) -> Result<ApiResponse<ClosePositionResponse>, AppError>;
}
