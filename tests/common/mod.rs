// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, Local, TimeZone};
use newtab_dashboard::config::Config;
use newtab_dashboard::page::PageComposer;
use newtab_dashboard::routes::create_router;
use newtab_dashboard::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

/// Config with every feed pointed at `server`.
#[allow(dead_code)]
pub fn config_for(server: &MockServer) -> Config {
    let uri = server.uri();
    let mut config = Config::test_default();
    config.fetch_timeout = Duration::from_secs(2);
    config.product_hunt_token_url = format!("{}/v2/oauth/token", uri);
    config.product_hunt_api_url = format!("{}/v2/api/graphql", uri);
    config.calendar_feed_url = format!("{}/day", uri);
    config.airtable_api_url = format!("{}/v0", uri);
    config
}

/// Composer wired to `server`.
#[allow(dead_code)]
pub fn composer_for(config: &Config) -> PageComposer {
    PageComposer::from_config(config).expect("Failed to build feed clients")
}

/// Create a test app around `config`.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(config: Config) -> (axum::Router, Arc<AppState>) {
    let composer = composer_for(&config);
    let state = Arc::new(AppState { config, composer });
    (create_router(state.clone()), state)
}

/// Noon on Wednesday 2024-01-03, local time.
#[allow(dead_code)]
pub fn wednesday_noon() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap()
}

/// GraphQL body for a list of `(name, website)` posts.
#[allow(dead_code)]
pub fn posts_body(posts: &[(&str, &str)]) -> Value {
    let edges: Vec<Value> = posts
        .iter()
        .enumerate()
        .map(|(i, (name, website))| {
            json!({
                "node": {
                    "id": (i + 1).to_string(),
                    "name": name,
                    "tagline": name.to_lowercase(),
                    "slug": name.to_lowercase(),
                    "thumbnail": { "url": format!("u{}", i + 1) },
                    "website": website,
                    "votesCount": 5
                }
            })
        })
        .collect();
    json!({ "data": { "posts": { "edges": edges } } })
}

/// Calendar webhook body with a single record.
#[allow(dead_code)]
pub fn standup_body() -> Value {
    json!({
        "records": [{
            "id": "rec1",
            "fields": {
                "Name": "Standup",
                "endTime": "2024-01-01T10:00:00Z",
                "duration": 0.5,
                "Status": "Done"
            }
        }]
    })
}

/// Airtable page of `(amount, weekday)` rows.
#[allow(dead_code)]
pub fn pushup_page(rows: &[(i64, i64)], offset: Option<&str>) -> Value {
    let records: Vec<Value> = rows
        .iter()
        .enumerate()
        .map(|(i, (amount, weekday))| {
            json!({
                "id": format!("rec{}", i),
                "createdTime": "2024-01-01T00:00:00.000Z",
                "fields": { "Amount": amount, "Weekday": weekday }
            })
        })
        .collect();

    match offset {
        Some(offset) => json!({ "records": records, "offset": offset }),
        None => json!({ "records": records }),
    }
}
