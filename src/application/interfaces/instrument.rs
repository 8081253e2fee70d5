use crate::error::AppError;
use crate::model::envelope::ApiResponse;
use crate::model::requests::CandlesQuery;
use crate::model::responses::CandlesResponse;
use async_trait::async_trait;

#[async_trait]
/// Instrument data
pub trait InstrumentService: Send + Sync {
    /// Candlesticks of an instrument
    async fn get_candles(
        &self,
        instrument: &str,
        query: &CandlesQuery,
    ) -> Result<ApiResponse<CandlesResponse>, AppError>;
}
