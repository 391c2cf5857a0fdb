//! Error types for the Jenga client.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;


/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JengaError>;


/// Everything that can go wrong between loading a key and reading a response.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JengaError {
    /// The private key file could not be read.
    #[error("could not read private key file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request never produced a response (connect, timeout, body read).
    #[error("{operation} request failed: {source}")]
    Request {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The base URL and path did not form a valid URL.
    #[error("invalid request url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// No PEM block was found in the key file.
    #[error("no PEM encoded key found in {}", .path.display())]
    KeyFormat { path: PathBuf },

    /// A PEM block was found but its payload is not a usable RSA private key.
    #[error("could not parse private key in {}: {reason}", .path.display())]
    KeyParse { path: PathBuf, reason: String },

    /// The RSA signing primitive rejected the key or digest.
    #[error("{operation} signature failed: {source}")]
    Signing {
        operation: &'static str,
        #[source]
        source: rsa::Error,
    },

    /// A response body did not match the shape we expected.
    #[error("{operation} response body could not be decoded: {source}. Response: {body}")]
    ResponseDecode {
        operation: &'static str,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The remote API answered with a well formed error body.
    #[error("jenga api call failed [status-code: {code}] - {message} ({http_status})")]
    RemoteApi {
        http_status: u16,
        code: i64,
        message: String,
    },

    /// One or more required fields were empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A configuration variable was missing or empty.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}


impl JengaError {
    /// True when the remote API rejected the bearer token or credentials.
    ///
    /// Callers typically respond by calling
    /// [`JengaClient::reauthenticate`](crate::JengaClient::reauthenticate).
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            JengaError::RemoteApi { http_status: 401 | 403, .. }
        )
    }
}
