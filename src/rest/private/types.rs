//! Types for private REST API endpoints.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BitstampError;
use crate::types::SortOrder;

/// Account balance as returned by the `balance` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balance {
    /// Total BTC.
    pub btc_balance: Decimal,
    /// Total USD.
    pub usd_balance: Decimal,
    /// Trading fee in percent.
    pub fee: Decimal,
    /// BTC not held by open orders.
    #[serde(default)]
    pub btc_available: Option<Decimal>,
    /// USD not held by open orders.
    #[serde(default)]
    pub usd_available: Option<Decimal>,
    /// BTC held by open orders.
    #[serde(default)]
    pub btc_reserved: Option<Decimal>,
    /// USD held by open orders.
    #[serde(default)]
    pub usd_reserved: Option<Decimal>,
}

/// Balance of one wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Total balance.
    pub balance: Decimal,
}

/// Normalized account summary returned by
/// [`get_info`](crate::rest::BitstampRestClient::get_info).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Login name. Bitstamp does not expose one, so this is always `N/A`.
    pub login: String,
    /// Trading fee in percent.
    pub trade_fee: Decimal,
    /// Wallets keyed by currency code (`BTC`, `USD`).
    pub wallets: BTreeMap<String, Wallet>,
}

impl From<Balance> for AccountInfo {
    fn from(balance: Balance) -> Self {
        let wallets = BTreeMap::from([
            (
                "BTC".to_string(),
                Wallet {
                    balance: balance.btc_balance,
                },
            ),
            (
                "USD".to_string(),
                Wallet {
                    balance: balance.usd_balance,
                },
            ),
        ]);

        Self {
            login: "N/A".to_string(),
            trade_fee: balance.fee,
            wallets,
        }
    }
}

/// Request parameters for a buy or sell limit order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Amount of BTC.
    pub amount: Decimal,
    /// Limit price in USD.
    pub price: Decimal,
}

/// Request parameters for cancelling an order.
#[derive(Debug, Clone, Serialize)]
pub struct CancelOrderRequest<'a> {
    /// Order id.
    pub id: &'a str,
}

/// Success payload of [`cancel_order`](crate::rest::BitstampRestClient::cancel_order).
///
/// The exchange does not return an identifier on cancel, so this echoes the
/// id that was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelledOrder {
    /// The cancelled order id.
    pub oid: String,
}

/// Request parameters for the account transaction history.
#[derive(Debug, Clone, Serialize)]
pub struct UserTransactionsRequest {
    /// Number of transactions to skip.
    pub offset: u64,
    /// Maximum number of transactions to return.
    pub limit: u64,
    /// Sort direction.
    pub sort: SortOrder,
}

impl Default for UserTransactionsRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 100,
            sort: SortOrder::Desc,
        }
    }
}

/// Request parameters for a bitcoin withdrawal.
#[derive(Debug, Clone, Serialize)]
pub struct BitcoinWithdrawalRequest {
    /// Amount of BTC.
    pub amount: Decimal,
    /// Destination bitcoin address.
    pub address: String,
}

impl BitcoinWithdrawalRequest {
    /// Create a new withdrawal request.
    pub fn new(amount: Decimal, address: impl Into<String>) -> Self {
        Self {
            amount,
            address: address.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), BitstampError> {
        if self.amount <= Decimal::ZERO || self.address.is_empty() {
            return Err(BitstampError::Config(
                "Missing bitcoin withdrawal amount or address".to_string(),
            ));
        }
        Ok(())
    }
}

/// Request parameters for a withdrawal through the Ripple gateway.
#[derive(Debug, Clone, Serialize)]
pub struct RippleWithdrawalRequest {
    /// Amount to withdraw.
    pub amount: Decimal,
    /// Destination Ripple address.
    pub address: String,
    /// Currency code.
    pub currency: String,
}

impl RippleWithdrawalRequest {
    /// Create a new withdrawal request.
    pub fn new(amount: Decimal, address: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount,
            address: address.into(),
            currency: currency.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), BitstampError> {
        if self.amount <= Decimal::ZERO || self.address.is_empty() || self.currency.is_empty() {
            return Err(BitstampError::Config(
                "Missing ripple withdrawal amount, address, or currency".to_string(),
            ));
        }
        Ok(())
    }
}
