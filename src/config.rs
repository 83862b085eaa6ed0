// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Feed credentials are read once at startup and handed to each feed client
//! at construction. Nothing secret is compiled into the binary.

use chrono::NaiveDate;
use std::env;
use std::time::Duration;

/// Default Product Hunt OAuth token endpoint.
pub const PRODUCT_HUNT_TOKEN_URL: &str = "https://api.producthunt.com/v2/oauth/token";
/// Default Product Hunt GraphQL endpoint.
pub const PRODUCT_HUNT_API_URL: &str = "https://api.producthunt.com/v2/api/graphql";
/// Default Airtable REST endpoint.
pub const AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Server ---
    /// Server port
    pub port: u16,
    /// Extra origin allowed by CORS (e.g. the browser extension's origin)
    pub allowed_origin: String,
    /// Per-request timeout for feed fetches
    pub fetch_timeout: Duration,

    // --- Product feed ---
    pub product_hunt_client_id: String,
    /// OAuth client secret
    pub product_hunt_client_secret: String,
    /// Pre-issued developer token; when set the OAuth exchange is skipped
    pub product_hunt_access_token: String,
    pub product_hunt_token_url: String,
    pub product_hunt_api_url: String,

    // --- Calendar feed ---
    /// Full URL of the calendar webhook's day view
    pub calendar_feed_url: String,

    // --- Fitness feed ---
    pub airtable_api_url: String,
    /// Airtable personal access token
    pub airtable_api_key: String,
    pub airtable_base_id: String,
    pub airtable_table: String,
    pub airtable_view: String,

    // --- Countup ---
    /// Birthday for the age countup; the widget is hidden when unset
    pub birthday: Option<NaiveDate>,
}

impl Config {
    /// Config for tests only. Every remote URL points at an unroutable host
    /// and is expected to be overridden with a mock server address.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            allowed_origin: "chrome-extension://test".to_string(),
            fetch_timeout: Duration::from_secs(2),
            product_hunt_client_id: "test_client_id".to_string(),
            product_hunt_client_secret: "test_secret".to_string(),
            product_hunt_access_token: String::new(),
            product_hunt_token_url: "http://127.0.0.1:9/v2/oauth/token".to_string(),
            product_hunt_api_url: "http://127.0.0.1:9/v2/api/graphql".to_string(),
            calendar_feed_url: "http://127.0.0.1:9/day".to_string(),
            airtable_api_url: "http://127.0.0.1:9/v0".to_string(),
            airtable_api_key: "test_airtable_key".to_string(),
            airtable_base_id: "appTest".to_string(),
            airtable_table: "Pushups".to_string(),
            airtable_view: "Grid view".to_string(),
            birthday: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured for local use.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let product_hunt_client_id = env_or_default("PRODUCT_HUNT_CLIENT_ID", "");
        let product_hunt_client_secret = env::var("PRODUCT_HUNT_CLIENT_SECRET")
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        let product_hunt_access_token = env::var("PRODUCT_HUNT_ACCESS_TOKEN")
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        if product_hunt_access_token.is_empty()
            && (product_hunt_client_id.is_empty() || product_hunt_client_secret.is_empty())
        {
            return Err(ConfigError::Missing(
                "PRODUCT_HUNT_ACCESS_TOKEN or PRODUCT_HUNT_CLIENT_ID/PRODUCT_HUNT_CLIENT_SECRET",
            ));
        }

        let fetch_timeout_secs: u64 = env_or_default("FETCH_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|_| ConfigError::Invalid("FETCH_TIMEOUT_SECS"))?;

        let birthday = match env::var("BIRTHDAY") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| ConfigError::Invalid("BIRTHDAY"))?,
            ),
            _ => None,
        };

        Ok(Self {
            port: env_or_default("PORT", "8080").parse().unwrap_or(8080),
            allowed_origin: env_or_default("ALLOWED_ORIGIN", ""),
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),

            product_hunt_client_id,
            product_hunt_client_secret,
            product_hunt_access_token,
            product_hunt_token_url: env_or_default("PRODUCT_HUNT_TOKEN_URL", PRODUCT_HUNT_TOKEN_URL),
            product_hunt_api_url: env_or_default("PRODUCT_HUNT_API_URL", PRODUCT_HUNT_API_URL),

            calendar_feed_url: env::var("CALENDAR_FEED_URL")
                .map_err(|_| ConfigError::Missing("CALENDAR_FEED_URL"))?,

            airtable_api_url: env_or_default("AIRTABLE_API_URL", AIRTABLE_API_URL),
            airtable_api_key: env::var("AIRTABLE_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("AIRTABLE_API_KEY"))?,
            airtable_base_id: env::var("AIRTABLE_BASE_ID")
                .map_err(|_| ConfigError::Missing("AIRTABLE_BASE_ID"))?,
            airtable_table: env_or_default("AIRTABLE_TABLE", "Pushups"),
            airtable_view: env_or_default("AIRTABLE_VIEW", "Grid view"),

            birthday,
        })
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
