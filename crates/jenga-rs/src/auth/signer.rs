//! RSA-SHA256 request signatures.
//!
//! Jenga verifies a `Signature` header computed over the plain concatenation
//! of endpoint specific parameters, e.g. `countryCode + merchantCode` for the
//! balance endpoint. There is no delimiter between parameters, so the order
//! passed in is exactly the order signed.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::thread_rng;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha256};

use crate::auth::key_loader::load_private_key;
use crate::errors::{JengaError, Result};


/// Operation name reported when signing outside a specific endpoint call.
const DEFAULT_OPERATION: &str = "request";


/// Sign `params` with `key` and return the base64 signature.
///
/// The digest is SHA-256 over the concatenated UTF-8 bytes, signed with
/// RSASSA-PKCS1-v1_5. The rng only blinds the private key operation; the
/// signature itself is deterministic for a given key and input.
///
/// # Errors
/// [`JengaError::Signing`](crate::JengaError::Signing) if the key is too
/// small for a SHA-256 PKCS#1 v1.5 signature or the primitive fails.
pub fn sign<S: AsRef<str>>(params: &[S], key: &RsaPrivateKey) -> Result<String> {
    sign_for(DEFAULT_OPERATION, params, key)
}


/// [`sign`], with `operation` recorded on a [`JengaError::Signing`] failure.
pub(crate) fn sign_for<S: AsRef<str>>(
    operation: &'static str,
    params: &[S],
    key: &RsaPrivateKey,
) -> Result<String> {
    let message: String = params.iter().map(AsRef::as_ref).collect();
    let digest = Sha256::digest(message.as_bytes());

    let mut rng = thread_rng();
    let signature = key
        .sign_with_rng(&mut rng, Pkcs1v15Sign::new::<Sha256>(), &digest)
        .map_err(|source| JengaError::Signing { operation, source })?;

    Ok(BASE64.encode(signature))
}


/// Owns a parsed private key for the lifetime of a session.
///
/// Signing only reads the key, so a `&RequestSigner` can be shared across
/// concurrent requests.
#[derive(Clone)]
pub struct RequestSigner {
    key: RsaPrivateKey,
}


impl RequestSigner {
    pub fn new(key: RsaPrivateKey) -> Self {
        Self { key }
    }


    /// Load the key once from `path`; see [`load_private_key`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(load_private_key(path)?))
    }


    /// Signature over `params` in the given order.
    pub fn sign<S: AsRef<str>>(&self, params: &[S]) -> Result<String> {
        sign(params, &self.key)
    }


    pub(crate) fn sign_for<S: AsRef<str>>(&self, operation: &'static str, params: &[S]) -> Result<String> {
        sign_for(operation, params, &self.key)
    }
}


impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
