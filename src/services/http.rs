// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Outbound HTTP client shared by the feed clients.
//!
//! Every request carries a timeout. Feed requests get one bounded retry on
//! connect/timeout errors and 5xx responses; the OAuth token exchange is
//! built with a single attempt.

use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;

/// Errors raised before a response is available.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request body cannot be cloned for retry")]
    NotCloneable,
}

/// HTTP client with timeout and bounded retry.
#[derive(Clone)]
pub struct FeedHttpClient {
    client: Client,
    max_attempts: usize,
    backoff: Duration,
}

impl FeedHttpClient {
    pub fn builder() -> FeedHttpClientBuilder {
        FeedHttpClientBuilder::default()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Execute `builder`, retrying transient failures up to the attempt limit.
    ///
    /// Non-5xx responses are returned as-is; status handling is the caller's.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, HttpError> {
        let mut attempt = 1;
        loop {
            let request = builder.try_clone().ok_or(HttpError::NotCloneable)?;
            let last_attempt = attempt >= self.max_attempts;

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    tracing::debug!(attempt, %status, url = %response.url(), "Received HTTP response");

                    if status.is_server_error() && !last_attempt {
                        tracing::warn!(attempt, %status, "Server error, retrying once");
                        self.wait().await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(response);
                }
                Err(err) => {
                    tracing::debug!(attempt, error = %err, "HTTP request failed");

                    if !last_attempt && is_transient(&err) {
                        self.wait().await;
                        attempt += 1;
                        continue;
                    }
                    return Err(HttpError::Transport(err));
                }
            }
        }
    }

    async fn wait(&self) {
        if !self.backoff.is_zero() {
            tokio::time::sleep(self.backoff).await;
        }
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

/// Builder for [`FeedHttpClient`].
#[derive(Debug)]
pub struct FeedHttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    backoff: Duration,
}

impl Default for FeedHttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_attempts: 2,
            backoff: Duration::from_millis(250),
        }
    }
}

impl FeedHttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total number of attempts (initial try + retries).
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn build(self) -> Result<FeedHttpClient, HttpError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("newtab-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(FeedHttpClient {
            client,
            max_attempts: self.max_attempts,
            backoff: self.backoff,
        })
    }
}
