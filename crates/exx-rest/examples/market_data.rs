//! Example: public market data
//!
//! Fetches markets, a ticker and the orderbook for one pair.
//!
//! Run with: cargo run --example market_data

use exx_rest::ExxRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = ExxRestClient::new();
    let pair = "ensa_eth";

    println!("Fetching markets...");
    match client.get_markets().await {
        Ok(markets) => {
            println!("  {} pairs listed", markets.len());
            if let Some(market) = markets.get(pair) {
                println!(
                    "  {}: min amount {:?}, open: {:?}",
                    pair, market.min_amount, market.is_open
                );
            }
        }
        Err(e) => println!("  Error: {}", e),
    }

    println!("Fetching {} ticker...", pair);
    match client.get_ticker(pair).await {
        Ok(response) => {
            let ticker = &response.ticker;
            println!("  Last: {:?}", ticker.last);
            println!("  Bid:  {:?}", ticker.buy);
            println!("  Ask:  {:?}", ticker.sell);
            if let Some(mid) = ticker.mid_price() {
                println!("  Mid:  {}", mid);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }

    println!("Fetching {} depth...", pair);
    match client.get_depth(pair).await {
        Ok(depth) => {
            println!("  {} asks, {} bids", depth.asks.len(), depth.bids.len());
            if let Some(spread) = depth.spread() {
                println!("  Spread: {}", spread);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }

    Ok(())
}
