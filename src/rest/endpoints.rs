//! Bitstamp HTTP API endpoint constants.
//!
//! Paths are relative to the base URL and carry no slashes; the dispatcher
//! appends the trailing `/` the exchange expects.

/// Base URL for the Bitstamp HTTP API.
pub const BITSTAMP_BASE_URL: &str = "https://www.bitstamp.net/api/";

/// Public endpoints (GET, no authentication).
pub mod public {
    /// Current ticker.
    pub const TICKER: &str = "ticker";
    /// Order book bids and asks.
    pub const ORDER_BOOK: &str = "order_book";
    /// Recent public transactions.
    pub const TRANSACTIONS: &str = "transactions";
    /// EUR/USD conversion rate.
    pub const EUR_USD: &str = "eur_usd";
}

/// Private endpoints (signed POST).
pub mod private {
    // Account endpoints
    /// Account balances and fee.
    pub const BALANCE: &str = "balance";
    /// Account transaction history.
    pub const USER_TRANSACTIONS: &str = "user_transactions";
    /// Open orders.
    pub const OPEN_ORDERS: &str = "open_orders";

    // Trading endpoints
    /// Place a buy limit order.
    pub const BUY: &str = "buy";
    /// Place a sell limit order.
    pub const SELL: &str = "sell";
    /// Cancel an order.
    pub const CANCEL_ORDER: &str = "cancel_order";

    // Funding endpoints
    /// Pending withdrawal requests.
    pub const WITHDRAWAL_REQUESTS: &str = "withdrawal_requests";
    /// Withdraw bitcoin to an address.
    pub const BITCOIN_WITHDRAWAL: &str = "bitcoin_withdrawal";
    /// Bitcoin deposit address.
    pub const BITCOIN_DEPOSIT_ADDRESS: &str = "bitcoin_deposit_address";
    /// Unconfirmed bitcoin deposits.
    pub const UNCONFIRMED_BTC: &str = "unconfirmed_btc";
    /// Withdraw through the Ripple gateway.
    pub const RIPPLE_WITHDRAWAL: &str = "ripple_withdrawal";
    /// Ripple deposit address.
    pub const RIPPLE_ADDRESS: &str = "ripple_address";
}
