//! Tests for the auth module

use super::*;
use crate::config::{ClientConfig, Credentials};
use crate::error::Error;
use crate::http::HttpClient;
use base64::Engine;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authenticator_for(server: &MockServer, key: &str, secret: &str) -> Authenticator {
    let config = ClientConfig::builder().base_url(server.uri()).build();
    let http = HttpClient::with_config(config).unwrap();
    Authenticator::new(Credentials::new(key, secret), http)
}

#[test]
fn test_encode_credentials() {
    let encoded = encode_credentials("user", "pass");
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "user:pass");
}

#[test]
fn test_encode_credentials_escapes_reserved_characters() {
    let encoded = encode_credentials("key with space", "s:e/c&r=t");
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .unwrap();
    assert_eq!(
        String::from_utf8(decoded).unwrap(),
        "key+with+space:s%3Ae%2Fc%26r%3Dt"
    );
}

#[tokio::test]
async fn test_authenticate_client_credentials() {
    let mock_server = MockServer::start().await;
    let expected_basic = format!("Basic {}", encode_credentials("my-key", "my-secret"));

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(header("Authorization", expected_basic.as_str()))
        .and(header(
            "Content-Type",
            "application/x-www-form-urlencoded;charset=UTF-8",
        ))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token_type": "bearer",
            "access_token": "AAAA-token"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = authenticator_for(&mock_server, "my-key", "my-secret");
    let token = auth.authenticate().await.unwrap();
    assert_eq!(token.as_str(), "AAAA-token");
}

#[tokio::test]
async fn test_authenticate_without_token_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"access_token": "only-token"})),
        )
        .mount(&mock_server)
        .await;

    let auth = authenticator_for(&mock_server, "k", "s");
    assert_eq!(auth.authenticate().await.unwrap().as_str(), "only-token");
}

#[tokio::test]
async fn test_authenticate_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let auth = authenticator_for(&mock_server, "bad", "creds");
    let err = auth.authenticate().await.unwrap_err();
    assert!(matches!(err, Error::OAuth2 { .. }));
    assert!(err.to_string().contains("403"));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_authenticate_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let auth = authenticator_for(&mock_server, "k", "s");
    let err = auth.authenticate().await.unwrap_err();
    assert!(err.to_string().contains("Malformed token response"));
}

#[tokio::test]
async fn test_authenticate_missing_access_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token_type": "bearer"})),
        )
        .mount(&mock_server)
        .await;

    let auth = authenticator_for(&mock_server, "k", "s");
    let err = auth.authenticate().await.unwrap_err();
    assert!(err.to_string().contains("no access_token"));
}

#[tokio::test]
async fn test_authenticate_wrong_token_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token_type": "mac",
            "access_token": "abc"
        })))
        .mount(&mock_server)
        .await;

    let auth = authenticator_for(&mock_server, "k", "s");
    let err = auth.authenticate().await.unwrap_err();
    assert!(err.to_string().contains("Unexpected token type"));
}
