//! Account module endpoints.
//!
//! This module implements API endpoints for account operations.

use crate::account::models::AccountBalanceResponse;
use crate::client::JengaClient;
use crate::errors::Result;
use crate::helpers;


const GET_ACCOUNT_BALANCE: &str = "/v3-apis/account-api/v3.0/accounts/balances";


impl JengaClient {

    /// Get Account Balance.
    ///
    /// **Endpoint:** `GET /v3-apis/account-api/v3.0/accounts/balances/{countryCode}/{merchantCode}`
    ///
    /// Signed over `country_code` followed by the session's merchant code.
    ///
    /// # Returns
    /// Result with response data or error
    pub async fn get_account_balance(&self, country_code: &str) -> Result<AccountBalanceResponse> {
        let merchant_code = self.credentials().merchant_code();
        let params = [country_code, merchant_code];
        let resp = self
            .authenticated_get(GET_ACCOUNT_BALANCE, &params, &params, "account balance")
            .await?;
        helpers::decode_body("account balance", &resp)
    }
}
