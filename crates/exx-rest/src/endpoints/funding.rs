//! Funding endpoints for withdrawals
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::transport;
use crate::types::{WithdrawAddressResponse, WithdrawRecordResponse, WithdrawResponse};
use exx_auth::{Credentials, RequestSigner};
use reqwest::Client;
use tracing::{debug, instrument};

/// Funding endpoints for withdrawals
pub struct FundingEndpoints<'a> {
    client: &'a Client,
    credentials: &'a Credentials,
    base_url: &'a str,
}

impl<'a> FundingEndpoints<'a> {
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

    /// Request a withdrawal
    ///
    /// # Arguments
    /// * `currency` - Currency to withdraw (e.g., "eth")
    /// * `amount` - Amount to withdraw
    /// * `receive_addr` - Destination address
    /// * `safe_pwd` - Account funds password
    #[instrument(skip(self, safe_pwd))]
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: &str,
        receive_addr: &str,
        safe_pwd: &str,
    ) -> RestResult<WithdrawResponse> {
        let params = [
            ("currency", currency),
            ("amount", amount),
            ("receiveAddr", receive_addr),
            ("safePwd", safe_pwd),
        ];

        debug!("Withdrawing {} {} to {}", amount, currency, receive_addr);

        self.get_signed("/api/withdraw", &params).await
    }

    /// Get withdrawal history
    ///
    /// # Arguments
    /// * `currency` - Currency to list withdrawals for
    /// * `page_index` - Result page, starting at 1 (the default)
    #[instrument(skip(self))]
    pub async fn get_withdraw_record(
        &self,
        currency: &str,
        page_index: Option<u32>,
    ) -> RestResult<WithdrawRecordResponse> {
        let page = page_index.unwrap_or(1).to_string();
        let params = [("currency", currency), ("pageIndex", page.as_str())];

        debug!("Fetching withdrawal record page {} for {}", page, currency);

        self.get_signed("/api/getWithdrawRecord", &params).await
    }

    /// Get the registered withdrawal address for a currency
    ///
    /// # Arguments
    /// * `currency` - Currency to look up
    #[instrument(skip(self))]
    pub async fn get_withdraw_address(
        &self,
        currency: &str,
    ) -> RestResult<WithdrawAddressResponse> {
        let params = [("currency", currency)];
        debug!("Fetching withdrawal address for {}", currency);

        self.get_signed("/api/getWithdrawAddress", &params).await
    }
}
