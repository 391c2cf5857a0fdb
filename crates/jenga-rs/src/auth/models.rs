//! Auth module models.
//!
//! Merchant credentials, the bearer token they are exchanged for, and the
//! request body of that exchange.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::validation::{require_str, Validate};


/// Merchant credentials for the Jenga API.
///
/// The consumer secret and API key are held as [`SecretString`] so they never
/// show up in `Debug` output or logs.
#[derive(Clone)]
pub struct Credentials {
    merchant_code: String,
    consumer_secret: SecretString,
    api_key: SecretString,
    private_key_file_path: PathBuf,
}


impl Credentials {
    /// Create credentials directly from values.
    ///
    /// No checks happen here; [`Validate::validate`] or session construction
    /// reports empty fields.
    ///
    /// # Example
    /// ```
    /// use jenga_rs::Credentials;
    ///
    /// let creds = Credentials::new("0011547896523", "secret", "api-key", "keys/privatekey.pem");
    /// assert_eq!(creds.merchant_code(), "0011547896523");
    /// ```
    pub fn new(
        merchant_code: impl Into<String>,
        consumer_secret: impl Into<String>,
        api_key: impl Into<String>,
        private_key_file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            merchant_code: merchant_code.into(),
            consumer_secret: SecretString::from(consumer_secret.into()),
            api_key: SecretString::from(api_key.into()),
            private_key_file_path: private_key_file_path.into(),
        }
    }


    /// Merchant code (safe to log).
    pub fn merchant_code(&self) -> &str {
        &self.merchant_code
    }


    /// Consumer secret. Only for building the authentication body.
    pub fn consumer_secret(&self) -> &str {
        self.consumer_secret.expose_secret()
    }


    /// API key. Only for the `Api-Key` header.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }


    /// Path to the PEM encoded private key used for request signatures.
    pub fn private_key_file_path(&self) -> &Path {
        &self.private_key_file_path
    }
}


impl Validate for Credentials {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require_str(&mut missing, "merchantCode", &self.merchant_code);
        require_str(&mut missing, "consumerSecret", self.consumer_secret());
        require_str(&mut missing, "apiKey", self.api_key());
        if self.private_key_file_path.as_os_str().is_empty() {
            missing.push("privateKeyFilePath");
        }
        missing
    }
}


impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("merchant_code", &self.merchant_code)
            .field("consumer_secret", &"[REDACTED]")
            .field("api_key", &"[REDACTED]")
            .field("private_key_file_path", &self.private_key_file_path)
            .finish()
    }
}


/// Body of the merchant authentication request.
///
/// The API key travels as a header, so it is not part of this struct.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthenticateRequest<'a> {
    pub merchant_code: &'a str,
    pub consumer_secret: &'a str,
}


impl<'a> From<&'a Credentials> for AuthenticateRequest<'a> {
    fn from(creds: &'a Credentials) -> Self {
        Self {
            merchant_code: creds.merchant_code(),
            consumer_secret: creds.consumer_secret(),
        }
    }
}


/// Bearer token issued by the authentication endpoint.
///
/// Every field must be present on the wire. Present but empty values (and
/// timestamps at or before the Unix epoch) are caught by [`Validate`].
/// `expires_in` is an absolute timestamp, not a duration.
#[derive(Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub issued_at: DateTime<Utc>,
    pub expires_in: DateTime<Utc>,
}


impl Token {
    /// Whether the token has expired as of `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_in
    }


    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }


    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}


// Anything at or before the Unix epoch is the API's zero timestamp rather
// than a real issuance time.
fn is_zero_time(ts: &DateTime<Utc>) -> bool {
    ts.timestamp() <= 0
}


impl Validate for Token {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require_str(&mut missing, "accessToken", &self.access_token);
        require_str(&mut missing, "refreshToken", &self.refresh_token);
        require_str(&mut missing, "tokenType", &self.token_type);
        if is_zero_time(&self.issued_at) {
            missing.push("issuedAt");
        }
        if is_zero_time(&self.expires_in) {
            missing.push("expiresIn");
        }
        missing
    }
}


impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("issued_at", &self.issued_at)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
