/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # v20 Client
//!
//! A typed Rust client for the v20 REST and streaming trading API: accounts,
//! instruments, orders, trades, positions, pricing and transactions.
//!
//! The crate is organised in layers:
//!
//! - [`presentation`]: the entity families exchanged with the API. Polymorphic
//!   entities ([`presentation::transaction::Transaction`],
//!   [`presentation::order::Order`]) are tagged enums decoded through a
//!   total, table-driven registry.
//! - [`model`]: the wire plumbing. Request bodies, per-endpoint response
//!   envelopes with their status-code tables, the streaming frame parser and
//!   the [`model::http::Transport`] seam with its default reqwest implementation.
//! - [`application`]: configuration, rate limiting, the service traits and the
//!   [`application::client::Client`] that implements them.
//!
//! ## Example
//!
//! ```ignore
//! use v20_client::prelude::*;
//!
//! setup_logger();
//! let client = Client::new(Config::new())?;
//! let response = client.list_open_positions(&client.account_id()).await?;
//! for position in response.body.positions.unwrap_or_default() {
//!     println!("{}", position.summary());
//! }
//! ```

/// Configuration, rate limiting, service traits and the high level client
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Transport, requests, response envelopes, registries and stream parsing
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Entity families exchanged with the API
pub mod presentation;
/// Helpers: env config, logging, templates, ids, time
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
