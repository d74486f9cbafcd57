//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::types::{
    BalanceResponse, CancelOrderResponse, DepthData, MarketsResponse, OrderInfo, OrderRequest,
    OrderResponse, TickerResponse, TickersResponse, TradeRecord, WithdrawAddressResponse,
    WithdrawRecordResponse, WithdrawResponse,
};
use exx_auth::Credentials;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Public market data base URL
const PUBLIC_API_URL: &str = "https://api.exxvip.com/data/v1";

/// Signed trade API base URL
const TRADE_API_URL: &str = "https://trade.exx.com";

/// EXX REST API client
///
/// Provides access to both public and private endpoints.
///
/// # Example
///
/// ```no_run
/// use exx_rest::{Credentials, ExxRestClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = ExxRestClient::new();
///     let ticker = client.get_ticker("ensa_eth").await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = ExxRestClient::with_credentials(creds);
///     let balance = auth_client.get_balance().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ExxRestClient {
    http_client: Client,
    credentials: Option<Credentials>,
    public_url: String,
    trade_url: String,
}

impl ExxRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("exx-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        info!("Created EXX REST client");

        Self {
            http_client,
            credentials: config.credentials,
            public_url: config.public_url,
            trade_url: config.trade_url,
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http_client, &self.public_url)
    }

    /// Get listing information for all trading pairs
    pub async fn get_markets(&self) -> RestResult<MarketsResponse> {
        self.market().get_markets().await
    }

    /// Get ticker information for all trading pairs
    pub async fn get_tickers(&self) -> RestResult<TickersResponse> {
        self.market().get_tickers().await
    }

    /// Get ticker information for a trading pair
    ///
    /// # Arguments
    /// * `currency` - Trading pair (e.g., "ensa_eth")
    pub async fn get_ticker(&self, currency: &str) -> RestResult<TickerResponse> {
        self.market().get_ticker(currency).await
    }

    /// Get orderbook depth for a trading pair
    pub async fn get_depth(&self, currency: &str) -> RestResult<DepthData> {
        self.market().get_depth(currency).await
    }

    /// Get recent trades for a trading pair
    pub async fn get_trades(&self, currency: &str) -> RestResult<Vec<TradeRecord>> {
        self.market().get_trades(currency).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(AccountEndpoints::new(&self.http_client, creds, &self.trade_url))
    }

    /// Get account balances for all currencies
    pub async fn get_balance(&self) -> RestResult<BalanceResponse> {
        self.account()?.get_balance().await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(TradingEndpoints::new(&self.http_client, creds, &self.trade_url))
    }

    /// Place a limit order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<OrderResponse> {
        self.trading()?.place_order(order).await
    }

    /// Cancel an order by ID
    pub async fn cancel_order(
        &self,
        currency: &str,
        order_id: &str,
    ) -> RestResult<CancelOrderResponse> {
        self.trading()?.cancel_order(currency, order_id).await
    }

    /// Query an order by ID
    pub async fn get_order(&self, currency: &str, order_id: &str) -> RestResult<OrderInfo> {
        self.trading()?.get_order(currency, order_id).await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(FundingEndpoints::new(&self.http_client, creds, &self.trade_url))
    }

    /// Request a withdrawal
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: &str,
        receive_addr: &str,
        safe_pwd: &str,
    ) -> RestResult<WithdrawResponse> {
        self.funding()?
            .withdraw(currency, amount, receive_addr, safe_pwd)
            .await
    }

    /// Get withdrawal history
    pub async fn get_withdraw_record(
        &self,
        currency: &str,
        page_index: Option<u32>,
    ) -> RestResult<WithdrawRecordResponse> {
        self.funding()?.get_withdraw_record(currency, page_index).await
    }

    /// Get the registered withdrawal address for a currency
    pub async fn get_withdraw_address(
        &self,
        currency: &str,
    ) -> RestResult<WithdrawAddressResponse> {
        self.funding()?.get_withdraw_address(currency).await
    }
}

impl Default for ExxRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExxRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExxRestClient")
            .field("has_credentials", &self.has_credentials())
            .field("public_url", &self.public_url)
            .field("trade_url", &self.trade_url)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Base URL for public market data
    pub public_url: String,
    /// Base URL for the signed trade API
    pub trade_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            public_url: PUBLIC_API_URL.to_string(),
            trade_url: TRADE_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the public market data base URL
    pub fn with_public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = url.into();
        self
    }

    /// Override the trade API base URL
    pub fn with_trade_url(mut self, url: impl Into<String>) -> Self {
        self.trade_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = ExxRestClient::new();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_user_agent("test-agent")
            .with_trade_url("http://localhost:8080");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(config.trade_url, "http://localhost:8080");
        assert_eq!(config.public_url, PUBLIC_API_URL);
    }

    #[test]
    fn test_auth_required_error() {
        let client = ExxRestClient::new();
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
        assert!(matches!(client.funding(), Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_credentials_enable_private_endpoints() {
        let creds = Credentials::new("test-key", "test-secret").unwrap();
        let client = ExxRestClient::with_credentials(creds);

        assert!(client.has_credentials());
        assert!(client.account().is_ok());
    }
}
