//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Methods returning a [`ResultEnvelope`] are normalized; methods returning a
//! bare [`Value`] pass the exchange body through, native error shape included.

mod types;

pub use types::*;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::BitstampError;
use crate::rest::BitstampRestClient;
use crate::rest::endpoints::private;
use crate::rest::public::Ticker;
use crate::types::envelope::{decode, wrap, wrap_with};
use crate::types::{ResultEnvelope, Side};

#[derive(serde::Serialize)]
struct Empty {}

impl BitstampRestClient {
    // ========== Normalized operations ==========

    /// Get the account summary: fee and BTC/USD wallet balances.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitstamp_api_client::rest::BitstampRestClient;
    /// use bitstamp_api_client::auth::EnvCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(EnvCredentials::from_env()?);
    ///     let client = BitstampRestClient::builder().credentials(credentials).build()?;
    ///
    ///     if let Some(info) = client.get_info().await?.data() {
    ///         for (currency, wallet) in &info.wallets {
    ///             println!("{}: {}", currency, wallet.balance);
    ///         }
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_info(&self) -> Result<ResultEnvelope<AccountInfo>, BitstampError> {
        let raw = self.get_balance().await?;
        wrap_with(raw, |raw| Ok(AccountInfo::from(decode::<Balance>(raw)?)))
    }

    /// Get open orders, normalized.
    pub async fn get_orders(&self) -> Result<ResultEnvelope, BitstampError> {
        Ok(wrap(self.get_open_orders().await?))
    }

    /// Quote a prospective order.
    ///
    /// Bitstamp has no quote endpoint, so this always fails.
    pub fn order_quote(&self, _side: Side, _amount: Decimal) -> Result<ResultEnvelope, BitstampError> {
        Err(BitstampError::NotImplemented("order quote"))
    }

    /// Place a limit order.
    ///
    /// Without an explicit `price`, the order is priced at the current best
    /// bid (for [`Side::Bid`]) or ask (for [`Side::Ask`]), taken from `ticker`
    /// when given and fetched otherwise. On success the envelope carries the
    /// new order id.
    pub async fn place_order(
        &self,
        side: Side,
        amount: Decimal,
        price: Option<Decimal>,
        ticker: Option<&Ticker>,
    ) -> Result<ResultEnvelope, BitstampError> {
        if amount <= Decimal::ZERO {
            return Err(BitstampError::Config(format!(
                "Order amount must be positive, got {amount}"
            )));
        }

        let price = match (price, ticker) {
            (Some(price), _) => price,
            (None, Some(ticker)) => ticker.price_for(side),
            (None, None) => {
                let raw = self.get_bitstamp_ticker().await?;
                match wrap_with(raw, decode::<Ticker>)? {
                    ResultEnvelope::Success(ticker) => ticker.price_for(side),
                    ResultEnvelope::Error(message) => return Ok(ResultEnvelope::Error(message)),
                }
            }
        };

        tracing::debug!(%side, %amount, %price, "Placing order");
        let raw = self
            .private_post(side.verb(), &OrderRequest { amount, price })
            .await?;

        wrap_with(raw, |raw| {
            raw.get("id").cloned().ok_or_else(|| {
                BitstampError::InvalidResponse(format!("Order response missing 'id': {}", raw))
            })
        })
    }

    /// Place a bid order. See [`place_order`](Self::place_order).
    pub async fn order_buy(
        &self,
        amount: Decimal,
        price: Option<Decimal>,
        ticker: Option<&Ticker>,
    ) -> Result<ResultEnvelope, BitstampError> {
        self.place_order(Side::Bid, amount, price, ticker).await
    }

    /// Place an ask order. See [`place_order`](Self::place_order).
    pub async fn order_sell(
        &self,
        amount: Decimal,
        price: Option<Decimal>,
        ticker: Option<&Ticker>,
    ) -> Result<ResultEnvelope, BitstampError> {
        self.place_order(Side::Ask, amount, price, ticker).await
    }

    /// Cancel an order by id.
    ///
    /// An empty id fails before any network call.
    pub async fn cancel_order(
        &self,
        order_id: &str,
    ) -> Result<ResultEnvelope<CancelledOrder>, BitstampError> {
        if order_id.is_empty() {
            return Err(BitstampError::Config("Missing order id to cancel".to_string()));
        }

        let raw = self
            .private_post(private::CANCEL_ORDER, &CancelOrderRequest { id: order_id })
            .await?;

        wrap_with(raw, |_| {
            Ok(CancelledOrder {
                oid: order_id.to_string(),
            })
        })
    }

    // ========== Account ==========

    /// Get account balances and fee.
    pub async fn get_balance(&self) -> Result<Value, BitstampError> {
        self.private_post(private::BALANCE, &Empty {}).await
    }

    /// Get account transaction history.
    pub async fn get_user_transactions(
        &self,
        request: &UserTransactionsRequest,
    ) -> Result<Value, BitstampError> {
        self.private_post(private::USER_TRANSACTIONS, request).await
    }

    /// Get open orders.
    pub async fn get_open_orders(&self) -> Result<Value, BitstampError> {
        self.private_post(private::OPEN_ORDERS, &Empty {}).await
    }

    // ========== Funding ==========

    /// Get pending withdrawal requests.
    pub async fn get_withdrawal_requests(&self) -> Result<Value, BitstampError> {
        self.private_post(private::WITHDRAWAL_REQUESTS, &Empty {})
            .await
    }

    /// Withdraw bitcoin to an address.
    ///
    /// A zero amount or empty address fails before any network call.
    pub async fn bitcoin_withdrawal(
        &self,
        request: &BitcoinWithdrawalRequest,
    ) -> Result<Value, BitstampError> {
        request.validate()?;
        self.private_post(private::BITCOIN_WITHDRAWAL, request).await
    }

    /// Get the bitcoin deposit address.
    pub async fn get_bitcoin_deposit_address(&self) -> Result<Value, BitstampError> {
        self.private_post(private::BITCOIN_DEPOSIT_ADDRESS, &Empty {})
            .await
    }

    /// Get unconfirmed bitcoin deposits.
    pub async fn get_unconfirmed_deposits(&self) -> Result<Value, BitstampError> {
        self.private_post(private::UNCONFIRMED_BTC, &Empty {}).await
    }

    /// Withdraw through the Ripple gateway.
    ///
    /// A zero amount, empty address or empty currency fails before any
    /// network call.
    pub async fn ripple_withdrawal(
        &self,
        request: &RippleWithdrawalRequest,
    ) -> Result<Value, BitstampError> {
        request.validate()?;
        self.private_post(private::RIPPLE_WITHDRAWAL, request).await
    }

    /// Get the Ripple deposit address.
    pub async fn get_ripple_address(&self) -> Result<Value, BitstampError> {
        self.private_post(private::RIPPLE_ADDRESS, &Empty {}).await
    }
}
