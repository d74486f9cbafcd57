//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::transport;
use crate::types::{CancelOrderResponse, OrderInfo, OrderRequest, OrderResponse};
use exx_auth::{Credentials, RequestSigner};
use reqwest::Client;
use tracing::{debug, instrument};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a Client,
    credentials: &'a Credentials,
    base_url: &'a str,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a Client, credentials: &'a Credentials, base_url: &'a str) -> Self {
        Self {
            client,
            credentials,
            base_url,
        }
    }

    /// Make a signed GET request
    async fn get_signed<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> RestResult<T> {
        let signer = RequestSigner::new(self.credentials);
        let query = signer.signed_query(params)?;
        let url = format!("{}{}?{}", self.base_url, path, query);

        debug!("Making signed request to {}", path);

        transport::get_json(self.client, &url).await
    }

    /// Place a limit order
    ///
    /// # Arguments
    /// * `order` - Order request with pair, side, amount and price
    ///
    /// # Returns
    /// The exchange's acknowledgement with the assigned order ID
    #[instrument(skip(self, order), fields(currency = %order.currency, side = %order.side))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<OrderResponse> {
        let side = order.side.to_string();
        let amount = order.amount.to_string();
        let price = order.price.to_string();

        let params = [
            ("currency", order.currency.as_str()),
            ("type", side.as_str()),
            ("amount", amount.as_str()),
            ("price", price.as_str()),
        ];

        debug!(
            "Placing {} order for {} {} at {}",
            order.side, order.amount, order.currency, order.price
        );

        self.get_signed("/api/order", &params).await
    }

    /// Cancel an order
    ///
    /// # Arguments
    /// * `currency` - Trading pair the order was placed on
    /// * `order_id` - ID of the order to cancel
    #[instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        currency: &str,
        order_id: &str,
    ) -> RestResult<CancelOrderResponse> {
        let params = [("currency", currency), ("id", order_id)];
        debug!("Cancelling order {}", order_id);

        self.get_signed("/api/cancel", &params).await
    }

    /// Query an order
    ///
    /// # Arguments
    /// * `currency` - Trading pair the order was placed on
    /// * `order_id` - ID of the order to query
    #[instrument(skip(self))]
    pub async fn get_order(&self, currency: &str, order_id: &str) -> RestResult<OrderInfo> {
        let params = [("currency", currency), ("id", order_id)];
        debug!("Querying order {}", order_id);

        self.get_signed("/api/getorder", &params).await
    }
}
