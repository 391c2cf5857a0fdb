//! Merchant authentication: credentials in, bearer token out.

use reqwest::Client;
use tracing::info;

use crate::auth::models::{AuthenticateRequest, Credentials, Token};
use crate::errors::Result;
use crate::helpers;
use crate::validation::Validate;


const AUTHENTICATE_MERCHANT: &str = "/authentication/api/v3/authenticate/merchant";


/// Exchange merchant credentials for a fresh bearer token.
///
/// **Endpoint:** `POST /authentication/api/v3/authenticate/merchant`
///
/// The API key goes in the `Api-Key` header; the body carries only the
/// merchant code and consumer secret. One request, no retry.
///
/// # Errors
/// - [`JengaError::Validation`](crate::JengaError::Validation) if the credentials or the issued token have empty fields
/// - [`JengaError::Request`](crate::JengaError::Request) if the request itself fails
/// - [`JengaError::RemoteApi`](crate::JengaError::RemoteApi) on a non-2xx response
/// - [`JengaError::ResponseDecode`](crate::JengaError::ResponseDecode) if a body has the wrong shape or a token field is absent
pub async fn authenticate(
    http_client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<Token> {
    credentials.validate()?;

    let body = AuthenticateRequest::from(credentials);
    let resp = helpers::unauthenticated_post(
        http_client,
        base_url,
        AUTHENTICATE_MERCHANT,
        &[("Api-Key", credentials.api_key())],
        &body,
        "authentication",
    )
    .await?;

    let token: Token = helpers::decode_body("authentication", &resp)?;
    token.validate()?;
    info!(
        merchant_code = credentials.merchant_code(),
        token_type = %token.token_type,
        expires_in = %token.expires_in,
        "issued bearer token"
    );
    Ok(token)
}
