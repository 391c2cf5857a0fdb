use crate::common::{
    body, closed_port_url, header, private_key_path, request_line, serve,
    INVALID_CREDENTIALS_JSON, TOKEN_JSON,
};
use jenga_rs::auth::authenticate;
use jenga_rs::{Credentials, JengaError, Validate};
use reqwest::Client;


fn credentials() -> Credentials {
    Credentials::new("M1", "S1", "K1", private_key_path())
}


#[tokio::test]
async fn test_authenticate_success() {
    let (base_url, server) = serve(vec![(200, TOKEN_JSON.to_string())]).await;

    let token = authenticate(&Client::new(), &base_url, &credentials())
        .await
        .expect("authentication should succeed");
    assert_eq!(token.access_token, "eyJhbGciOiJSUzI1NiJ9.access");
    assert_eq!(token.token_type, "Bearer");
    assert!(token.validate().is_ok());

    let requests = server.await.unwrap();
    let request = &requests[0];
    assert_eq!(
        request_line(request),
        "POST /authentication/api/v3/authenticate/merchant HTTP/1.1"
    );
    assert_eq!(header(request, "Api-Key").as_deref(), Some("K1"));
    assert_eq!(header(request, "Content-Type").as_deref(), Some("application/json"));

    let sent: serde_json::Value = serde_json::from_str(body(request)).unwrap();
    assert_eq!(sent, serde_json::json!({"merchantCode": "M1", "consumerSecret": "S1"}));
}


#[tokio::test]
async fn test_authenticate_invalid_credentials() {
    let (base_url, server) = serve(vec![(401, INVALID_CREDENTIALS_JSON.to_string())]).await;

    let err = authenticate(&Client::new(), &base_url, &credentials())
        .await
        .unwrap_err();
    match &err {
        JengaError::RemoteApi { http_status, code, message } => {
            assert_eq!(*http_status, 401);
            assert_eq!(*code, 401);
            assert_eq!(message, "invalid credentials");
        }
        other => panic!("expected RemoteApi, got {other:?}"),
    }
    assert!(err.is_auth_failure());
    server.await.unwrap();
}


#[tokio::test]
async fn test_authenticate_malformed_success_body() {
    let (base_url, server) = serve(vec![(200, "[1, 2, 3]".to_string())]).await;

    let err = authenticate(&Client::new(), &base_url, &credentials())
        .await
        .unwrap_err();
    assert!(
        matches!(err, JengaError::ResponseDecode { operation: "authentication", .. }),
        "expected ResponseDecode, got {err:?}"
    );
    server.await.unwrap();
}


#[tokio::test]
async fn test_authenticate_unparseable_error_body() {
    let (base_url, server) = serve(vec![(503, "<html>unavailable</html>".to_string())]).await;

    let err = authenticate(&Client::new(), &base_url, &credentials())
        .await
        .unwrap_err();
    assert!(matches!(err, JengaError::ResponseDecode { .. }), "got {err:?}");
    server.await.unwrap();
}


#[tokio::test]
async fn test_authenticate_partial_token_is_decode_error() {
    let partial = r#"{"accessToken":"a","tokenType":"Bearer","issuedAt":"2026-10-16T08:00:00Z"}"#;
    let (base_url, server) = serve(vec![
        (200, partial.to_string()),
        (200, r#"{"unexpected":"shape"}"#.to_string()),
    ])
    .await;

    for _ in 0..2 {
        let err = authenticate(&Client::new(), &base_url, &credentials())
            .await
            .unwrap_err();
        assert!(
            matches!(err, JengaError::ResponseDecode { operation: "authentication", .. }),
            "expected ResponseDecode, got {err:?}"
        );
    }
    server.await.unwrap();
}


#[tokio::test]
async fn test_authenticate_empty_token_fields_fail_validation() {
    let empty = TOKEN_JSON
        .replace("eyJhbGciOiJSUzI1NiJ9.refresh", "")
        .replace("2026-10-16T09:00:00Z", "1970-01-01T00:00:00Z");
    let (base_url, server) = serve(vec![(200, empty)]).await;

    let err = authenticate(&Client::new(), &base_url, &credentials())
        .await
        .unwrap_err();
    match err {
        JengaError::Validation(e) => {
            assert_eq!(e.to_string(), "refreshToken is required, expiresIn is required");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
    server.await.unwrap();
}


#[tokio::test]
async fn test_authenticate_rejects_invalid_credentials_before_sending() {
    // Nothing listens here; validation must fail first.
    let base_url = closed_port_url().await;
    let creds = Credentials::new("", "", "K1", private_key_path());

    let err = authenticate(&Client::new(), &base_url, &creds).await.unwrap_err();
    match err {
        JengaError::Validation(e) => {
            assert_eq!(e.to_string(), "merchantCode is required, consumerSecret is required");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}


#[tokio::test]
async fn test_authenticate_connection_refused() {
    let base_url = closed_port_url().await;

    let err = authenticate(&Client::new(), &base_url, &credentials())
        .await
        .unwrap_err();
    assert!(
        matches!(err, JengaError::Request { operation: "authentication", .. }),
        "expected Request, got {err:?}"
    );
}
