//! Example: Fetching public market data from Bitstamp.
//!
//! Run with: cargo run --example public_data

use bitstamp_api_client::rest::BitstampRestClient;
use bitstamp_api_client::rest::public::{OrderBookRequest, TransactionsRequest};
use bitstamp_api_client::types::{ResultEnvelope, TransactionTime};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Public endpoints need no credentials
    let client = BitstampRestClient::new()?;

    println!("=== Ticker (normalized) ===");
    match client.get_ticker().await? {
        ResultEnvelope::Success(t) => {
            println!("Last: {}", t.last);
            println!("High: {} Low: {} Avg: {}", t.high, t.low, t.avg);
            println!("Buy: {} Sell: {}", t.buy, t.sell);
            println!("Volume: {}", t.vol);
        }
        ResultEnvelope::Error(e) => println!("Exchange error: {}", e),
    }

    println!("\n=== Currency ===");
    if let Some(currency) = client.get_currency().data() {
        println!("{} ({}), {} decimals", currency.name, currency.symbol, currency.decimals);
    }

    println!("\n=== Order Book ===");
    let book = client.get_order_book(&OrderBookRequest::default()).await?;
    for side in ["bids", "asks"] {
        if let Some(levels) = book[side].as_array() {
            println!("{}:", side);
            for level in levels.iter().take(3) {
                println!("  {} @ {}", level[1], level[0]);
            }
        }
    }

    println!("\n=== Transactions (last minute) ===");
    let request = TransactionsRequest {
        time: TransactionTime::Minute,
    };
    let transactions = client.get_transactions(&request).await?;
    if let Some(trades) = transactions.as_array() {
        for trade in trades.iter().take(5) {
            println!("  {} @ {} (tid {})", trade["amount"], trade["price"], trade["tid"]);
        }
    }

    println!("\n=== EUR/USD ===");
    let rate = client.get_eur_usd().await?;
    println!("Buy: {} Sell: {}", rate["buy"], rate["sell"]);

    println!("\nDone!");
    Ok(())
}
