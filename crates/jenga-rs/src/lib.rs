//! Jenga Rust SDK
//!
//! Client for the Jenga merchant API (Equity Bank / Finserve). Handles the two
//! things every Jenga call depends on: exchanging merchant credentials for a
//! bearer token, and signing each request with the merchant's RSA private key.
//!
//! # Quick Start
//!
//! ```no_run
//! use jenga_rs::{Credentials, JengaClient, JengaConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Load merchant credentials
//! let creds = Credentials::new("0011547896523", "consumer-secret", "api-key", "privatekey.pem");
//!
//! // 2. Validate, load the key and authenticate in one step
//! let client = JengaClient::new(JengaConfig::sandbox(), creds).await?;
//!
//! // 3. Call signed endpoints
//! let balance = client.get_account_balance("KE").await?;
//! println!("{balance}");
//! # Ok(())
//! # }
//! ```
//!
//! # Main Components
//!
//! - [`JengaClient`] - Authenticated session with endpoint methods
//! - [`Credentials`] / [`Token`] - Merchant credentials and the bearer token they buy
//! - [`auth::sign`] / [`RequestSigner`] - RSA-SHA256 `Signature` header values
//! - [`auth::load_private_key`] - PEM key loading
//! - [`Validate`] - Required-field checks shared by credentials and tokens


// Core modules
pub mod auth;           // Credentials, tokens, key loading and signing
pub mod client;         // Session facade and configuration
pub mod errors;         // Error types
pub mod validation;     // Required-field checks
pub(crate) mod helpers; // Internal HTTP helpers


// API endpoint modules
pub mod account;        // Account balances


// Re-exports for convenient access
pub use auth::{Credentials, EnvKeys, RequestSigner, Token};
pub use client::{JengaClient, JengaConfig, SignedHeaders};
pub use errors::{JengaError, Result};
pub use validation::{Validate, ValidationError};
