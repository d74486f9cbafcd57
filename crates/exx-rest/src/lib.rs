//! REST API client for the EXX cryptocurrency exchange
//!
//! This crate provides a REST API client for trading on EXX, including
//! market data, account balances, order execution and withdrawals.
//!
//! # Features
//!
//! - **Market Data**: Markets, tickers, orderbook depth, recent trades
//! - **Account**: Per-currency balances
//! - **Trading**: Place, cancel, and query orders
//! - **Funding**: Withdrawals, withdrawal history and addresses
//!
//! # Authentication
//!
//! Private endpoints require API credentials. EXX signs requests in the
//! query string: the parameters (with `accesskey` and a millisecond
//! `nonce`) are sorted by key, URL-encoded and signed with HMAC-SHA512;
//! the hex digest travels as the `signature` parameter.
//!
//! # Example
//!
//! ```no_run
//! use exx_rest::{Credentials, ExxRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = ExxRestClient::new();
//!     let ticker = client.get_ticker("ensa_eth").await?;
//!     println!("ENSA/ETH: {:?}", ticker.ticker.last);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = ExxRestClient::with_credentials(creds);
//!     let balance = auth_client.get_balance().await?;
//!     println!("Balances: {:?}", balance.non_zero());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Every call returns a [`RestResult`]: transport failures, undecodable
//! bodies and signing misconfiguration are distinct [`RestError`] variants.
//! Business status codes inside a decoded response (the exchange's `code`
//! field) are surfaced on the response types and left to the caller.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

mod transport;

// Re-export main types
pub use client::{ClientConfig, ExxRestClient};
pub use error::{RestError, RestResult};

// Re-export auth types so callers don't need a direct exx-auth dependency
pub use exx_auth::{AuthError, Credentials, RequestSigner};

// Re-export endpoint-specific types
pub use types::{
    // Market data
    DepthData, MarketInfo, MarketsResponse, TickerData, TickerResponse, TickersResponse,
    TradeRecord,
    // Account
    BalanceResponse, FundInfo,
    // Trading
    CancelOrderResponse, OrderInfo, OrderRequest, OrderResponse, OrderSide,
    // Funding
    WithdrawAddressResponse, WithdrawRecordResponse, WithdrawResponse,
};
