//! # Bitstamp Client
//!
//! An async Rust client library for the Bitstamp exchange HTTP trading API.
//!
//! ## Features
//!
//! - HMAC-SHA256 request signing with strictly increasing nonces
//! - Raw accessors that pass exchange JSON through untouched
//! - Convenience operations normalized into a single [`ResultEnvelope`]
//! - Single-attempt dispatch with an explicit retry-advised error, so callers
//!   own the retry policy
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitstamp_api_client::rest::BitstampRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BitstampRestClient::new()?;
//!     let ticker = client.get_ticker().await?;
//!     println!("Ticker: {:?}", ticker);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BitstampError, TransientFailure, TransientKind};
pub use types::{ResultEnvelope, Side, SortOrder, TransactionTime};

/// Result type alias using BitstampError
pub type Result<T> = std::result::Result<T, BitstampError>;
