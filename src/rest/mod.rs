//! Bitstamp REST API client.
//!
//! Provides the request dispatcher ([`BitstampRestClient`]), the raw endpoint
//! accessors, and the normalized convenience operations built on them.
//!
//! # Trait-based API
//!
//! The [`BitstampClient`] trait abstracts the normalized operations, enabling
//! mock implementations for testing and decorators.
//!
//! ```rust,ignore
//! use bitstamp_api_client::rest::{BitstampClient, BitstampRestClient};
//!
//! async fn use_client<C: BitstampClient>(client: &C) -> Result<(), bitstamp_api_client::BitstampError> {
//!     let ticker = client.get_ticker().await?;
//!     println!("Ticker: {:?}", ticker);
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod request;
mod retry;
mod traits;

pub use client::{
    BitstampRestClient, BitstampRestClientBuilder, DEFAULT_TIMEOUT, DEFAULT_TRANSIENT_BACKOFF,
};
pub use endpoints::*;
pub use request::{
    AUTH_FIELDS, Method, PreparedRequest, Request, build_get_url, build_post_body, endpoint_url,
};
pub use retry::retry_transient;
pub use traits::BitstampClient;
