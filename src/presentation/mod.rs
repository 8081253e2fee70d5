/// Account models
pub mod account;
/// Entity metadata: name and summary templates, default tables
pub mod definition;
/// Nested value types and order parameter groups
pub mod details;
/// Instrument and candlestick models
pub mod instrument;
/// Orders and order requests
pub mod order;
/// Position models
pub mod position;
/// Prices and pricing heartbeats
pub mod pricing;
/// Primitive wire types and enumerations
pub mod primitives;
/// Trade models
pub mod trade;
/// Transactions and transaction heartbeats
pub mod transaction;
