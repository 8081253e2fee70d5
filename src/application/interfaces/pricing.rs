use crate::application::interfaces::RecordHandler;
use crate::error::AppError;
use crate::model::envelope::ApiResponse;
use crate::model::requests::PricingQuery;
use crate::model::responses::{PricesResponse, StreamResponse};
use crate::model::stream::PricingStreamRecord;
use async_trait::async_trait;

#[async_trait]
/// Current prices, polled or streamed
pub trait PricingService: Send + Sync {
    /// Current prices of the queried instruments
    async fn get_prices(
        &self,
        account_id: &str,
        query: &PricingQuery,
    ) -> Result<ApiResponse<PricesResponse>, AppError>;

    /// Streams prices and heartbeats to `on_record` until the server closes the
    /// stream, the callback fails or the future is dropped.
    ///
    /// A refused stream comes back as a non-2xx response.
    async fn stream_prices(
        &self,
        account_id: &str,
        query: &PricingQuery,
        on_record: &mut RecordHandler<'_, PricingStreamRecord>,
    ) -> Result<ApiResponse<StreamResponse>, AppError>;
}
