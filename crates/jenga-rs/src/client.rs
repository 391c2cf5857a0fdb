use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::auth::{authenticate, Credentials, RequestSigner, Token};
use crate::errors::{JengaError, Result};
use crate::helpers;
use crate::validation::Validate;


/// Jenga UAT (sandbox) host
const JENGA_SANDBOX_API: &str = "https://uat.finserve.africa";


/// Where a session sends its requests.
///
/// Passed to every session explicitly so sandbox and production sessions can
/// live side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JengaConfig {
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client. `None` means no timeout.
    pub timeout: Option<Duration>,
}


impl JengaConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }


    /// The Jenga UAT environment.
    pub fn sandbox() -> Self {
        Self::new(JENGA_SANDBOX_API)
    }


    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }


    fn http_client(&self) -> Result<Client> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(|source| JengaError::Request {
            operation: "client setup",
            source,
        })
    }
}


impl Default for JengaConfig {
    fn default() -> Self {
        Self::sandbox()
    }
}


/// Header values for a signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// `Authorization` header, `Bearer <accessToken>`.
    pub authorization: String,
    /// `Signature` header, base64 RSA-SHA256.
    pub signature: String,
}


/// An authenticated Jenga session.
///
/// Holds validated credentials, a validated bearer token and the signer built
/// from the merchant's private key. A `JengaClient` can only be obtained
/// through constructors that check all three, so every signed request it
/// issues has a complete token and credentials behind it.
///
/// # Example
/// ```no_run
/// use jenga_rs::{Credentials, JengaClient, JengaConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let creds = Credentials::from_env()?;
/// let client = JengaClient::new(JengaConfig::sandbox(), creds).await?;
///
/// let balance = client.get_account_balance("KE").await?;
/// println!("{balance}");
/// # Ok(())
/// # }
/// ```
pub struct JengaClient {
    pub(crate) http_client: Client,
    pub(crate) base_url: String,
    credentials: Credentials,
    token: Token,
    signer: RequestSigner,
}


impl JengaClient {
    /// Validate `credentials`, load the private key and authenticate.
    ///
    /// Fails with [`JengaError::Validation`] if the credentials or the issued
    /// token have empty fields; nothing is retried.
    pub async fn new(config: JengaConfig, credentials: Credentials) -> Result<JengaClient> {
        credentials.validate()?;
        let signer = RequestSigner::from_file(credentials.private_key_file_path())?;
        let http_client = config.http_client()?;

        let token = authenticate(&http_client, &config.base_url, &credentials).await?;
        token.validate()?;

        info!(merchant_code = credentials.merchant_code(), base_url = %config.base_url, "jenga session ready");
        Ok(JengaClient {
            http_client,
            base_url: config.base_url,
            credentials,
            token,
            signer,
        })
    }


    /// Build a session around a token obtained earlier.
    ///
    /// Performs the same checks as [`JengaClient::new`] without the network
    /// round trip.
    pub fn from_token(config: JengaConfig, credentials: Credentials, token: Token) -> Result<JengaClient> {
        credentials.validate()?;
        token.validate()?;
        let signer = RequestSigner::from_file(credentials.private_key_file_path())?;
        let http_client = config.http_client()?;
        Ok(JengaClient {
            http_client,
            base_url: config.base_url,
            credentials,
            token,
            signer,
        })
    }


    /// Run a fresh credential exchange and replace the current token.
    ///
    /// The old token is kept if the exchange or validation fails.
    pub async fn reauthenticate(&mut self) -> Result<()> {
        let token = authenticate(&self.http_client, &self.base_url, &self.credentials).await?;
        token.validate()?;
        self.token = token;
        Ok(())
    }


    pub fn token(&self) -> &Token {
        &self.token
    }


    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }


    pub fn base_url(&self) -> &str {
        &self.base_url
    }


    /// Signature over `params`, concatenated in the order given.
    pub fn sign<S: AsRef<str>>(&self, params: &[S]) -> Result<String> {
        self.signer.sign(params)
    }


    /// `Authorization` and `Signature` header values for a request whose
    /// signature covers `params`.
    pub fn signed_headers<S: AsRef<str>>(&self, params: &[S]) -> Result<SignedHeaders> {
        Ok(SignedHeaders {
            authorization: self.token.bearer(),
            signature: self.sign(params)?,
        })
    }


    /// Wrapper for signed GET requests
    ///
    /// `segments` are appended to `path` percent-encoded, so a value can't
    /// change which resource is requested. The signature covers the raw
    /// `signed_params`.
    pub async fn authenticated_get<S: AsRef<str>>(
        &self,
        path: &str,
        segments: &[&str],
        signed_params: &[S],
        operation: &'static str,
    ) -> Result<String> {
        let url = helpers::endpoint_url(&self.base_url, path, segments)?;
        let headers = SignedHeaders {
            authorization: self.token.bearer(),
            signature: self.signer.sign_for(operation, signed_params)?,
        };
        helpers::authenticated_get(
            &self.http_client,
            &headers.authorization,
            &headers.signature,
            url,
            operation,
        )
        .await
    }
}


impl std::fmt::Debug for JengaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JengaClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}
