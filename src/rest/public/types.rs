//! Types for public REST API endpoints.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::TransactionTime;

/// Ticker as returned by the `ticker` endpoint.
///
/// Bitstamp sends every figure as a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Last trade price.
    pub last: Decimal,
    /// Highest price over the last 24 hours.
    pub high: Decimal,
    /// Lowest price over the last 24 hours.
    pub low: Decimal,
    /// Volume over the last 24 hours.
    pub volume: Decimal,
    /// Highest buy order.
    pub bid: Decimal,
    /// Lowest sell order.
    pub ask: Decimal,
    /// Volume weighted average price over the last 24 hours.
    #[serde(default)]
    pub vwap: Option<Decimal>,
    /// First price of the day.
    #[serde(default)]
    pub open: Option<Decimal>,
    /// Unix timestamp of the snapshot.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Ticker {
    /// The price a new order on `side` would be placed at.
    pub fn price_for(&self, side: crate::types::Side) -> Decimal {
        match side {
            crate::types::Side::Bid => self.bid,
            crate::types::Side::Ask => self.ask,
        }
    }
}

/// Normalized ticker returned by [`get_ticker`](crate::rest::BitstampRestClient::get_ticker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSummary {
    /// Last trade price.
    pub last: Decimal,
    /// 24h high.
    pub high: Decimal,
    /// 24h low.
    pub low: Decimal,
    /// Midpoint of high and low, rounded to two places.
    pub avg: Decimal,
    /// Best bid.
    pub buy: Decimal,
    /// Best ask.
    pub sell: Decimal,
    /// 24h volume.
    pub vol: Decimal,
}

impl From<&Ticker> for TickerSummary {
    fn from(ticker: &Ticker) -> Self {
        let avg = ((ticker.high + ticker.low) / Decimal::TWO)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        Self {
            last: ticker.last,
            high: ticker.high,
            low: ticker.low,
            avg,
            buy: ticker.bid,
            sell: ticker.ask,
            vol: ticker.volume,
        }
    }
}

/// Currency metadata served by [`get_currency`](crate::rest::BitstampRestClient::get_currency).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    /// ISO code.
    pub currency: String,
    /// Display name.
    pub name: String,
    /// Symbol.
    pub symbol: String,
    /// Whether the symbol goes before or after the amount.
    pub symbol_position: String,
    /// Precision of stored amounts.
    pub decimals: u32,
    /// Precision of displayed amounts.
    pub display_decimals: u32,
    /// Whether this is a virtual currency.
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
}

impl CurrencyInfo {
    /// The account currency Bitstamp trades bitcoin against.
    pub fn usd() -> Self {
        Self {
            currency: "USD".to_string(),
            name: "Dollar".to_string(),
            symbol: "$".to_string(),
            symbol_position: "before".to_string(),
            decimals: 5,
            display_decimals: 2,
            is_virtual: false,
        }
    }
}

/// Request parameters for the order book.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBookRequest {
    /// Group orders with the same price (`1`) or list them individually (`0`).
    pub group: u8,
}

impl Default for OrderBookRequest {
    fn default() -> Self {
        Self { group: 1 }
    }
}

/// Request parameters for recent public transactions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionsRequest {
    /// Look-back window.
    pub time: TransactionTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn ticker() -> Ticker {
        serde_json::from_value(serde_json::json!({
            "last": "101.50",
            "high": "105.00",
            "low": "98.25",
            "volume": "1234.5",
            "bid": "101.00",
            "ask": "101.75",
            "timestamp": "1700000000"
        }))
        .unwrap()
    }

    #[test]
    fn test_ticker_summary() {
        let summary = TickerSummary::from(&ticker());
        assert_eq!(summary.avg.to_string(), "101.63");
        assert_eq!(summary.buy.to_string(), "101.00");
        assert_eq!(summary.sell.to_string(), "101.75");
        assert_eq!(summary.vol.to_string(), "1234.5");
    }

    #[test]
    fn test_price_for_side() {
        let ticker = ticker();
        assert_eq!(ticker.price_for(Side::Bid).to_string(), "101.00");
        assert_eq!(ticker.price_for(Side::Ask).to_string(), "101.75");
    }

    #[test]
    fn test_request_encoding() {
        assert_eq!(
            serde_urlencoded::to_string(OrderBookRequest::default()).unwrap(),
            "group=1"
        );
        assert_eq!(
            serde_urlencoded::to_string(TransactionsRequest::default()).unwrap(),
            "time=hour"
        );
    }
}
