/// Helper functions for building requests and turning responses into results
use crate::errors::{JengaError, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;


/// Error body returned by Jenga on any non-2xx response.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}


/// Join the base url and an endpoint path.
pub(crate) fn build_url(base_url: &str, path: &str) -> Result<Url> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);
    Url::parse(&url).map_err(|source| JengaError::InvalidUrl { url, source })
}


/// Join the base url and an endpoint path, then append `segments` as
/// percent-encoded path segments.
pub(crate) fn endpoint_url(base_url: &str, path: &str, segments: &[&str]) -> Result<Url> {
    let mut url = build_url(base_url, path)?;
    url.path_segments_mut()
        .map_err(|()| JengaError::InvalidUrl {
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}


/// Map a response status and body to `Ok(())` or the matching error.
///
/// Non-2xx bodies are expected to look like `{status, code, message}`;
/// anything else is reported as a decode failure.
pub(crate) fn check_status(operation: &'static str, status: StatusCode, body: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    let parsed: ErrorBody = serde_json::from_str(body).map_err(|source| {
        JengaError::ResponseDecode {
            operation,
            body: body.to_string(),
            source,
        }
    })?;
    warn!(operation, http_status = status.as_u16(), code = parsed.code, "jenga api call failed");
    Err(JengaError::RemoteApi {
        http_status: status.as_u16(),
        code: parsed.code,
        message: parsed.message,
    })
}


/// Deserialize a successful response body.
pub(crate) fn decode_body<T: DeserializeOwned>(operation: &'static str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| JengaError::ResponseDecode {
        operation,
        body: body.to_string(),
        source,
    })
}


/// POST a JSON body with extra headers, no bearer token.
pub(crate) async fn unauthenticated_post<T>(
    http_client: &Client,
    base_url: &str,
    path: &str,
    headers: &[(&str, &str)],
    json_body: &T,
    operation: &'static str,
) -> Result<String>
where
    T: serde::Serialize + ?Sized,
{
    let url = build_url(base_url, path)?;
    debug!(url = %url, operation, "POST request");
    let mut request = http_client.post(url).json(json_body);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    let resp = request
        .send()
        .await
        .map_err(|source| JengaError::Request { operation, source })?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|source| JengaError::Request { operation, source })?;
    check_status(operation, status, &body)?;
    Ok(body)
}


/// GET with the bearer token and signature headers already computed.
pub(crate) async fn authenticated_get(
    http_client: &Client,
    authorization: &str,
    signature: &str,
    url: Url,
    operation: &'static str,
) -> Result<String> {
    debug!(url = %url, operation, "GET request");
    // Both headers are checked on every signed endpoint
    let resp = http_client
        .get(url)
        .header("Authorization", authorization)
        .header("Signature", signature)
        .send()
        .await
        .map_err(|source| JengaError::Request { operation, source })?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|source| JengaError::Request { operation, source })?;
    check_status(operation, status, &body)?;
    Ok(body)
}
