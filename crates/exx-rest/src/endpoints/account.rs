//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::transport;
use crate::types::BalanceResponse;
use exx_auth::{Credentials, RequestSigner};
use reqwest::Client;
use tracing::{debug, instrument};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a Client,
    credentials: &'a Credentials,
    base_url: &'a str,
}

impl<'a> AccountEndpoints<'a> {
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

    /// Get account balances for all currencies
    #[instrument(skip(self))]
    pub async fn get_balance(&self) -> RestResult<BalanceResponse> {
        self.get_signed("/api/getBalance", &[]).await
    }
}
