// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Newtab-Dashboard Server
//!
//! Serves a browser new-tab page that aggregates a product feed, a calendar
//! feed and a fitness feed into independent widgets.

use newtab_dashboard::{config::Config, page::PageComposer, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Newtab-Dashboard");

    // Feed clients, built once and shared by every page view
    let composer = PageComposer::from_config(&config)?;
    tracing::info!(
        timeout_secs = config.fetch_timeout.as_secs(),
        countup = config.birthday.is_some(),
        "Feed clients initialized"
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        composer,
    });

    // Build router
    let app = newtab_dashboard::routes::create_router(state);

    // Start server
    let addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("newtab_dashboard=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
