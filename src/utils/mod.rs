/// Module containing environment variable helpers used by the configuration
pub mod config;
/// Module containing utilities for generating client extension identifiers
pub mod id;
/// Module containing logging utilities
pub mod logger;
/// Module containing the `{placeholder}` template engine used for paths and summaries
pub mod template;
/// Module containing helpers for the two wire datetime formats
pub mod time;

pub use config::*;
pub use id::*;
pub use logger::*;
pub use template::*;
pub use time::*;
