/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Status-code driven response envelopes
pub mod envelope;
/// Transport trait and the default HTTP transport with rate limiting and retry
pub mod http;
/// Tag-keyed decoding of polymorphic entities
pub mod registry;
/// Request bodies and query strings
pub mod requests;
/// Response envelopes, one per endpoint
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
/// Newline-delimited JSON stream parsing
pub mod stream;
