//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::error::{RestError, RestResult};
use crate::transport;
use crate::types::{DepthData, MarketsResponse, TickerResponse, TickersResponse, TradeRecord};
use reqwest::Client;
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Get listing information for all trading pairs
    #[instrument(skip(self))]
    pub async fn get_markets(&self) -> RestResult<MarketsResponse> {
        let url = format!("{}/markets", self.base_url);
        debug!("Fetching markets");

        transport::get_json(self.client, &url).await
    }

    /// Get ticker information for all trading pairs
    #[instrument(skip(self))]
    pub async fn get_tickers(&self) -> RestResult<TickersResponse> {
        let url = format!("{}/tickers", self.base_url);
        debug!("Fetching tickers");

        transport::get_json(self.client, &url).await
    }

    /// Get ticker information for a trading pair
    ///
    /// # Arguments
    /// * `currency` - Trading pair (e.g., "ensa_eth")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, currency: &str) -> RestResult<TickerResponse> {
        let url = format!("{}/ticker?{}", self.base_url, pair_query(currency)?);
        debug!("Fetching ticker for {}", currency);

        transport::get_json(self.client, &url).await
    }

    /// Get orderbook depth for a trading pair
    ///
    /// # Arguments
    /// * `currency` - Trading pair (e.g., "ensa_eth")
    #[instrument(skip(self))]
    pub async fn get_depth(&self, currency: &str) -> RestResult<DepthData> {
        let url = format!("{}/depth?{}", self.base_url, pair_query(currency)?);
        debug!("Fetching depth for {}", currency);

        transport::get_json(self.client, &url).await
    }

    /// Get recent trades for a trading pair
    ///
    /// # Arguments
    /// * `currency` - Trading pair (e.g., "ensa_eth")
    #[instrument(skip(self))]
    pub async fn get_trades(&self, currency: &str) -> RestResult<Vec<TradeRecord>> {
        let url = format!("{}/trades?{}", self.base_url, pair_query(currency)?);
        debug!("Fetching trades for {}", currency);

        transport::get_json(self.client, &url).await
    }
}

/// Encode the single `currency` query parameter
fn pair_query(currency: &str) -> RestResult<String> {
    serde_urlencoded::to_string([("currency", currency)])
        .map_err(|e| RestError::InvalidParameter(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_query_encoding() {
        assert_eq!(pair_query("ensa_eth").unwrap(), "currency=ensa_eth");
    }

    #[test]
    fn test_pair_query_escapes_reserved_chars() {
        assert_eq!(pair_query("a&b").unwrap(), "currency=a%26b");
    }
}
