//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::BitstampError;
use crate::rest::BitstampRestClient;
use crate::rest::endpoints::public;
use crate::types::ResultEnvelope;
use crate::types::envelope::{decode, wrap_with};

#[derive(serde::Serialize)]
struct Empty {}

impl BitstampRestClient {
    /// Get the current ticker, normalized.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitstamp_api_client::rest::BitstampRestClient;
    /// use bitstamp_api_client::types::ResultEnvelope;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BitstampRestClient::new()?;
    ///     match client.get_ticker().await? {
    ///         ResultEnvelope::Success(t) => println!("last {} bid {} ask {}", t.last, t.buy, t.sell),
    ///         ResultEnvelope::Error(e) => println!("exchange error: {}", e),
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_ticker(&self) -> Result<ResultEnvelope<TickerSummary>, BitstampError> {
        let raw = self.get_bitstamp_ticker().await?;
        wrap_with(raw, |raw| {
            let ticker: Ticker = decode(raw)?;
            Ok(TickerSummary::from(&ticker))
        })
    }

    /// Get the current ticker exactly as the exchange sent it.
    pub async fn get_bitstamp_ticker(&self) -> Result<Value, BitstampError> {
        self.public_get(public::TICKER, &Empty {}).await
    }

    /// Get the account currency metadata.
    ///
    /// This is static and makes no network call.
    pub fn get_currency(&self) -> ResultEnvelope<CurrencyInfo> {
        ResultEnvelope::Success(CurrencyInfo::usd())
    }

    /// Get the order book.
    ///
    /// The payload is passed through untouched.
    pub async fn get_order_book(&self, request: &OrderBookRequest) -> Result<Value, BitstampError> {
        self.public_get(public::ORDER_BOOK, request).await
    }

    /// Get recent public transactions, newest first.
    pub async fn get_transactions(
        &self,
        request: &TransactionsRequest,
    ) -> Result<Value, BitstampError> {
        self.public_get(public::TRANSACTIONS, request).await
    }

    /// Get the current EUR/USD conversion rate.
    pub async fn get_eur_usd(&self) -> Result<Value, BitstampError> {
        self.public_get(public::EUR_USD, &Empty {}).await
    }
}
