use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rsa::{pkcs1::DecodeRsaPrivateKey, pkcs8::DecodePrivateKey, RsaPrivateKey};
use tracing::debug;

use crate::errors::{JengaError, Result};


const PEM_BEGIN: &str = "-----BEGIN ";
const PEM_END: &str = "-----END ";
const PEM_DASHES: &str = "-----";
const PKCS8_LABEL: &str = "PRIVATE KEY";


/// Load an RSA private key from a PEM file.
///
/// Jenga issues PKCS#1 keys (`BEGIN RSA PRIVATE KEY`). A PKCS#8 block
/// (`BEGIN PRIVATE KEY`) is accepted as well; any other label is parsed as
/// PKCS#1 and fails there if it isn't one. Line width and line endings of the
/// base64 body don't matter.
///
/// # Errors
/// - [`JengaError::Io`] if the file can't be read
/// - [`JengaError::KeyFormat`] if there is no PEM block in it
/// - [`JengaError::KeyParse`] if the block payload is not a valid RSA key
pub fn load_private_key(path: impl AsRef<Path>) -> Result<RsaPrivateKey> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|source| JengaError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let block = find_pem_block(&raw).ok_or_else(|| JengaError::KeyFormat {
        path: path.to_path_buf(),
    })?;
    let key_parse = |reason: String| JengaError::KeyParse {
        path: path.to_path_buf(),
        reason,
    };

    let der = BASE64
        .decode(&block.body)
        .map_err(|e| key_parse(format!("invalid base64 in PEM body: {e}")))?;
    let key = if block.label == PKCS8_LABEL {
        RsaPrivateKey::from_pkcs8_der(&der).map_err(|e| key_parse(e.to_string()))?
    } else {
        RsaPrivateKey::from_pkcs1_der(&der).map_err(|e| key_parse(e.to_string()))?
    };

    debug!(path = %path.display(), label = %block.label, "loaded private key");
    Ok(key)
}


/// Label and whitespace-free base64 body of a PEM block.
#[derive(Debug, PartialEq, Eq)]
struct PemBlock {
    label: String,
    body: Vec<u8>,
}


/// Find the first complete `BEGIN ... END` block, ignoring any text around it.
fn find_pem_block(raw: &[u8]) -> Option<PemBlock> {
    let begin = find(raw, PEM_BEGIN.as_bytes())? + PEM_BEGIN.len();
    let label_len = find(&raw[begin..], PEM_DASHES.as_bytes())?;
    let label = &raw[begin..begin + label_len];
    if label.contains(&b'\n') {
        return None;
    }

    let body_start = begin + label_len + PEM_DASHES.len();
    let body_len = find(&raw[body_start..], PEM_END.as_bytes())?;
    let end_label = body_start + body_len + PEM_END.len();
    find(&raw[end_label..], PEM_DASHES.as_bytes())?;

    let body = raw[body_start..body_start + body_len]
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    Some(PemBlock {
        label: String::from_utf8_lossy(label).trim().to_string(),
        body,
    })
}


fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
