//! Example: authenticated trading operations
//!
//! Checks balances and places a small limit order.
//!
//! Run with: cargo run --example rest_trading
//!
//! NOTE: Set EXX_ACCESS_KEY and EXX_SECRET_KEY environment variables first.

use exx_rest::{Credentials, ExxRestClient, OrderRequest};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let creds = match Credentials::from_env() {
        Ok(creds) => creds,
        Err(e) => {
            println!("Credentials not configured: {}", e);
            println!("Set EXX_ACCESS_KEY and EXX_SECRET_KEY to run this example.");
            return Ok(());
        }
    };

    let client = ExxRestClient::with_credentials(creds);

    println!("Fetching account balances...");
    match client.get_balance().await {
        Ok(balance) => {
            for (currency, total) in balance.non_zero().iter().take(10) {
                println!("  {}: {}", currency, total);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }

    println!("Placing limit buy order...");
    let order = OrderRequest::buy("ensa_eth", dec!(1.0), dec!(0.0001));
    match client.place_order(&order).await {
        Ok(response) => {
            println!("  Code: {:?}", response.code);
            println!("  Message: {:?}", response.message);
            if let Some(id) = response.order_id() {
                println!("  Order ID: {}", id);

                println!("Cancelling order {}...", id);
                match client.cancel_order("ensa_eth", &id).await {
                    Ok(cancel) => println!("  Code: {:?}", cancel.code),
                    Err(e) => println!("  Error: {}", e),
                }
            }
        }
        Err(e) => println!("  Error: {}", e),
    }

    Ok(())
}
