use crate::error::AppError;

/// Account service interface
pub mod account;
/// Instrument service interface
pub mod instrument;
/// Order service interface
pub mod order;
/// Position service interface
pub mod position;
/// Pricing service interface
pub mod pricing;
/// Trade service interface
pub mod trade;
/// Transaction service interface
pub mod transaction;

/// Callback receiving the records of a stream, in arrival order
pub type RecordHandler<'a, R> = dyn FnMut(R) -> Result<(), AppError> + Send + 'a;
