//! Example: Account and order management with retries on transient failures.
//!
//! Requires BITSTAMP_API_KEY, BITSTAMP_API_SECRET and BITSTAMP_CLIENT_ID.
//!
//! Run with: cargo run --example private_trading

use std::sync::Arc;

use bitstamp_api_client::auth::EnvCredentials;
use bitstamp_api_client::rest::{BitstampRestClient, retry_transient};
use bitstamp_api_client::types::Side;
use reqwest_retry::policies::ExponentialBackoff;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = Arc::new(EnvCredentials::from_env()?);
    let client = BitstampRestClient::builder()
        .credentials(credentials)
        .build()?;
    let policy = ExponentialBackoff::builder().build_with_max_retries(3);

    println!("=== Account ===");
    let info = retry_transient(&policy, || client.get_info()).await?;
    match info.into_result() {
        Ok(info) => {
            println!("Fee: {}%", info.trade_fee);
            for (currency, wallet) in &info.wallets {
                println!("  {}: {}", currency, wallet.balance);
            }
        }
        Err(e) => println!("Exchange error: {}", e),
    }

    println!("\n=== Open Orders ===");
    let orders = retry_transient(&policy, || client.get_orders()).await?;
    println!("{:?}", orders.data());

    // A far-from-market bid so it rests on the book
    println!("\n=== Place and Cancel ===");
    let amount = Decimal::new(1, 3);
    let price = Decimal::new(1000, 0);
    let placed = client
        .place_order(Side::Bid, amount, Some(price), None)
        .await?;
    match placed.data() {
        Some(id) => {
            let id = id.as_str().map(str::to_string).unwrap_or_else(|| id.to_string());
            println!("Placed order {}", id);
            let cancelled = client.cancel_order(&id).await?;
            println!("Cancelled: {:?}", cancelled);
        }
        None => println!("Order rejected: {:?}", placed.error()),
    }

    println!("\nDone!");
    Ok(())
}
