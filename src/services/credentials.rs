// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer-token resolution for the product feed.
//!
//! A pre-supplied developer token is used as-is. Otherwise one OAuth
//! client-credentials exchange is made per resolution; the token is not
//! cached beyond the page view that asked for it.

use crate::error::AppError;
use crate::services::http::FeedHttpClient;
use reqwest::header::ACCEPT;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, non-empty bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token, rejecting empty or whitespace-only values.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into().trim().to_string();
        (!token.is_empty()).then_some(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Client-credentials grant request body.
#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
}

/// Token endpoint response. Only `access_token` is used.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Resolves the bearer token used by the product feed.
#[derive(Clone)]
pub struct CredentialProvider {
    http: FeedHttpClient,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl CredentialProvider {
    /// `http` should be built with a single attempt: the exchange is never retried.
    pub fn new(
        http: FeedHttpClient,
        token_url: String,
        client_id: String,
        client_secret: String,
    ) -> Self {
        Self {
            http,
            token_url,
            client_id,
            client_secret,
        }
    }

    /// Return `pre_supplied` if non-empty, else exchange client credentials.
    pub async fn resolve_token(&self, pre_supplied: &str) -> Result<Credential, AppError> {
        if let Some(token) = Credential::new(pre_supplied) {
            tracing::debug!("Using pre-supplied access token");
            return Ok(token);
        }

        tracing::info!("Requesting access token via client credentials");

        let body = TokenRequest {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            grant_type: "client_credentials",
        };

        let request = self
            .http
            .request(Method::POST, &self.token_url)
            .header(ACCEPT, "application/json")
            .json(&body);

        let response = self
            .http
            .send(request)
            .await
            .map_err(|e| AppError::AuthFailure(format!("Token request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Token exchange failed");
            return Err(AppError::AuthFailure(format!(
                "Token exchange failed with status {}",
                status
            )));
        }

        let parsed: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::AuthFailure(format!("Failed to parse token response: {}", e)))?;

        parsed
            .access_token
            .and_then(Credential::new)
            .ok_or_else(|| AppError::AuthFailure("Token response has no access_token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(token_url: String) -> CredentialProvider {
        let http = FeedHttpClient::builder()
            .timeout(Duration::from_secs(2))
            .max_attempts(1)
            .build()
            .unwrap();
        CredentialProvider::new(http, token_url, "id".to_string(), "secret".to_string())
    }

    #[test]
    fn test_credential_rejects_blank() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   ").is_none());
        assert_eq!(Credential::new(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let token = Credential::new("super-secret").unwrap();
        assert!(!format!("{:?}", token).contains("super-secret"));
    }

    #[tokio::test]
    async fn test_pre_supplied_token_skips_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let token = provider(format!("{}/v2/oauth/token", server.uri()))
            .resolve_token("dev-token")
            .await
            .unwrap();
        assert_eq!(token.as_str(), "dev-token");
    }

    #[tokio::test]
    async fn test_client_credentials_exchange() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/oauth/token"))
            .and(header("accept", "application/json"))
            .and(body_json(serde_json::json!({
                "client_id": "id",
                "client_secret": "secret",
                "grant_type": "client_credentials"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"access_token": "fresh-token"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let token = provider(format!("{}/v2/oauth/token", server.uri()))
            .resolve_token("")
            .await
            .unwrap();
        assert_eq!(token.as_str(), "fresh-token");
    }

    #[tokio::test]
    async fn test_non_success_is_auth_failure_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let result = provider(format!("{}/v2/oauth/token", server.uri()))
            .resolve_token("")
            .await;
        assert!(matches!(result, Err(AppError::AuthFailure(_))));
    }

    #[tokio::test]
    async fn test_missing_access_token_is_auth_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"token_type": "x"})),
            )
            .mount(&server)
            .await;

        let result = provider(format!("{}/v2/oauth/token", server.uri()))
            .resolve_token("")
            .await;
        assert!(matches!(result, Err(AppError::AuthFailure(_))));
    }
}
