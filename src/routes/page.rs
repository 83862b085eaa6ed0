// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The new-tab page and its static assets.

use crate::AppState;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use std::sync::Arc;

const NEWTAB_JS: &str = include_str!("../../assets/newtab.js");
const NEWTAB_CSS: &str = include_str!("../../assets/newtab.css");

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(new_tab))
        .route("/full", get(full_page))
        .route("/assets/newtab.js", get(script))
        .route("/assets/newtab.css", get(stylesheet))
}

/// Serve the page shell at once; each feed widget loads independently.
async fn new_tab(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = state.composer.shell(chrono::Local::now()).await;
    Html(page.to_html())
}

/// Render every widget on the server before responding.
///
/// The page lives only for this request; dropping it detaches every widget,
/// so a client that disconnects mid-fetch leaves nothing behind.
async fn full_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = state.composer.mount(chrono::Local::now()).await;
    Html(page.to_html())
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        NEWTAB_JS,
    )
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        NEWTAB_CSS,
    )
}
