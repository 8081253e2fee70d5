/// Typed client implementing every service
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits, one per endpoint family
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
