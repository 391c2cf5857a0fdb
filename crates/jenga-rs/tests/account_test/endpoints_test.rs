use crate::common::{header, private_key_path, request_line, serve, INVALID_CREDENTIALS_JSON, TOKEN_JSON};
use jenga_rs::{Credentials, JengaClient, JengaConfig, JengaError, Token};


const BALANCE_JSON: &str = r#"{
    "currency": "KES",
    "balances": [
        {"amount": "997382.57", "type": "Current"},
        {"amount": "997382.57", "type": "Available"}
    ]
}"#;


fn session(base_url: &str) -> JengaClient {
    let token: Token = serde_json::from_str(TOKEN_JSON).unwrap();
    let creds = Credentials::new("0011547896523", "S1", "K1", private_key_path());
    JengaClient::from_token(JengaConfig::new(base_url), creds, token)
        .expect("session from stored token")
}


#[tokio::test]
async fn test_get_account_balance() {
    let (base_url, server) = serve(vec![(200, BALANCE_JSON.to_string())]).await;
    let client = session(&base_url);

    let balance = client.get_account_balance("KE").await.expect("balance");
    assert_eq!(balance.currency, "KES");
    assert_eq!(balance.balances.len(), 2);
    assert_eq!(balance.balances[0].amount, "997382.57");

    let requests = server.await.unwrap();
    let request = &requests[0];
    assert_eq!(
        request_line(request),
        "GET /v3-apis/account-api/v3.0/accounts/balances/KE/0011547896523 HTTP/1.1"
    );
    assert_eq!(
        header(request, "Authorization").as_deref(),
        Some("Bearer eyJhbGciOiJSUzI1NiJ9.access")
    );
    let expected_signature = client.sign(&["KE", "0011547896523"]).unwrap();
    assert_eq!(header(request, "Signature"), Some(expected_signature));
}


#[tokio::test]
async fn test_get_account_balance_remote_error() {
    let (base_url, server) = serve(vec![(401, INVALID_CREDENTIALS_JSON.to_string())]).await;
    let client = session(&base_url);

    let err = client.get_account_balance("KE").await.unwrap_err();
    assert!(err.is_auth_failure(), "got {err:?}");
    server.await.unwrap();
}


#[tokio::test]
async fn test_get_account_balance_bad_body() {
    let (base_url, server) = serve(vec![(200, r#"{"currency": 12}"#.to_string())]).await;
    let client = session(&base_url);

    let err = client.get_account_balance("KE").await.unwrap_err();
    assert!(
        matches!(err, JengaError::ResponseDecode { operation: "account balance", .. }),
        "got {err:?}"
    );
    server.await.unwrap();
}


#[tokio::test]
async fn test_get_account_balance_encodes_path_segments() {
    let (base_url, server) = serve(vec![(200, BALANCE_JSON.to_string())]).await;
    let client = session(&base_url);

    client.get_account_balance("K/E?x#y").await.expect("balance");

    let requests = server.await.unwrap();
    let request = &requests[0];
    assert_eq!(
        request_line(request),
        "GET /v3-apis/account-api/v3.0/accounts/balances/K%2FE%3Fx%23y/0011547896523 HTTP/1.1"
    );
    let expected_signature = client.sign(&["K/E?x#y", "0011547896523"]).unwrap();
    assert_eq!(header(request, "Signature"), Some(expected_signature));
}
