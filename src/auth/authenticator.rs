//! Authenticator implementation
//!
//! Exchanges application credentials for a bearer token.

use super::types::{BearerToken, TokenResponse};
use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::{debug, info};

const GRANT_BODY: &str = "grant_type=client_credentials";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Obtains a bearer token with the client-credentials grant
pub struct Authenticator {
    credentials: Credentials,
    http_client: HttpClient,
}

impl Authenticator {
    /// Create an authenticator that posts to the client's configured token URL
    pub fn new(credentials: Credentials, http_client: HttpClient) -> Self {
        Self {
            credentials,
            http_client,
        }
    }

    /// Exchange the credentials for a bearer token.
    ///
    /// Transport failures, non-success statuses and bodies without an
    /// `access_token` are all errors; nothing is retried.
    pub async fn authenticate(&self) -> Result<BearerToken> {
        let token_url = &self.http_client.config().token_url;
        let encoded = encode_credentials(
            &self.credentials.consumer_key,
            &self.credentials.consumer_secret,
        );

        debug!(url = %token_url, "Requesting bearer token");
        let response = self
            .http_client
            .post_with_config(
                token_url,
                RequestConfig::new()
                    .header("Authorization", format!("Basic {encoded}"))
                    .header("Content-Type", FORM_CONTENT_TYPE)
                    .body(GRANT_BODY),
            )
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::oauth2(format!(
                "Token request failed with status {status}: {body}"
            )));
        }

        let body = response.text().await.map_err(Error::Http)?;
        let token_response: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| Error::oauth2(format!("Malformed token response: {e}")))?;

        if let Some(token_type) = &token_response.token_type {
            if !token_type.eq_ignore_ascii_case("bearer") {
                return Err(Error::oauth2(format!(
                    "Unexpected token type: {token_type}"
                )));
            }
        }

        match token_response.access_token {
            Some(token) if !token.is_empty() => {
                info!("Obtained application bearer token");
                Ok(BearerToken::new(token))
            }
            _ => Err(Error::oauth2("Token response has no access_token")),
        }
    }
}

/// Encode a key/secret pair for the `Basic` authorization header:
/// `base64(urlencode(key) ":" urlencode(secret))`
pub fn encode_credentials(consumer_key: &str, consumer_secret: &str) -> String {
    let key: String = url::form_urlencoded::byte_serialize(consumer_key.as_bytes()).collect();
    let secret: String =
        url::form_urlencoded::byte_serialize(consumer_secret.as_bytes()).collect();
    STANDARD.encode(format!("{key}:{secret}"))
}
