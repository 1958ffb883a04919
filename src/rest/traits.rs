//! Trait definition for the normalized Bitstamp operations.
//!
//! Strategy code that only needs the `{result, data}` surface can depend on
//! [`BitstampClient`] instead of the concrete HTTP client, which makes it easy
//! to substitute a mock or a decorator.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitstamp_api_client::rest::BitstampClient;
//!
//! async fn spread<C: BitstampClient>(client: &C) -> Result<(), bitstamp_api_client::BitstampError> {
//!     if let Some(t) = client.get_ticker().await?.data() {
//!         println!("spread: {}", t.sell - t.buy);
//!     }
//!     Ok(())
//! }
//! ```

use std::future::Future;

use rust_decimal::Decimal;

use crate::error::BitstampError;
use crate::rest::BitstampRestClient;
use crate::rest::private::{AccountInfo, CancelledOrder};
use crate::rest::public::{CurrencyInfo, Ticker, TickerSummary};
use crate::types::{ResultEnvelope, Side};

/// Normalized Bitstamp operations.
///
/// Every method reports exchange-side failures as [`ResultEnvelope::Error`]
/// and transport failures as [`BitstampError::Transient`].
pub trait BitstampClient: Send + Sync {
    /// Get the account summary.
    fn get_info(
        &self,
    ) -> impl Future<Output = Result<ResultEnvelope<AccountInfo>, BitstampError>> + Send;

    /// Get the current ticker.
    fn get_ticker(
        &self,
    ) -> impl Future<Output = Result<ResultEnvelope<TickerSummary>, BitstampError>> + Send;

    /// Get the account currency metadata.
    fn get_currency(&self) -> ResultEnvelope<CurrencyInfo>;

    /// Get open orders.
    fn get_orders(&self) -> impl Future<Output = Result<ResultEnvelope, BitstampError>> + Send;

    /// Quote a prospective order.
    fn order_quote(&self, side: Side, amount: Decimal) -> Result<ResultEnvelope, BitstampError>;

    /// Place a limit order.
    fn place_order(
        &self,
        side: Side,
        amount: Decimal,
        price: Option<Decimal>,
        ticker: Option<&Ticker>,
    ) -> impl Future<Output = Result<ResultEnvelope, BitstampError>> + Send;

    /// Cancel an order by id.
    fn cancel_order(
        &self,
        order_id: &str,
    ) -> impl Future<Output = Result<ResultEnvelope<CancelledOrder>, BitstampError>> + Send;
}

impl BitstampClient for BitstampRestClient {
    async fn get_info(&self) -> Result<ResultEnvelope<AccountInfo>, BitstampError> {
        BitstampRestClient::get_info(self).await
    }

    async fn get_ticker(&self) -> Result<ResultEnvelope<TickerSummary>, BitstampError> {
        BitstampRestClient::get_ticker(self).await
    }

    fn get_currency(&self) -> ResultEnvelope<CurrencyInfo> {
        BitstampRestClient::get_currency(self)
    }

    async fn get_orders(&self) -> Result<ResultEnvelope, BitstampError> {
        BitstampRestClient::get_orders(self).await
    }

    fn order_quote(&self, side: Side, amount: Decimal) -> Result<ResultEnvelope, BitstampError> {
        BitstampRestClient::order_quote(self, side, amount)
    }

    async fn place_order(
        &self,
        side: Side,
        amount: Decimal,
        price: Option<Decimal>,
        ticker: Option<&Ticker>,
    ) -> Result<ResultEnvelope, BitstampError> {
        BitstampRestClient::place_order(self, side, amount, price, ticker).await
    }

    async fn cancel_order(
        &self,
        order_id: &str,
    ) -> Result<ResultEnvelope<CancelledOrder>, BitstampError> {
        BitstampRestClient::cancel_order(self, order_id).await
    }
}
