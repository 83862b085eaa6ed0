// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON view of individual widgets.

use crate::error::Result;
use crate::widgets::{WidgetKind, WidgetState};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/widgets/{name}", get(get_widget))
}

/// One widget after its lifecycle has settled.
#[derive(Serialize)]
pub struct WidgetResponse {
    pub name: String,
    #[serde(flatten)]
    pub state: WidgetState,
}

/// Mount a single widget and return its state.
///
/// Feed failures are reported in the body as a `failed` state, not as an
/// HTTP error, matching how the page shows them.
async fn get_widget(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<WidgetResponse>> {
    let kind: WidgetKind = name.parse()?;
    let widget = state
        .composer
        .mount_widget(kind, chrono::Local::now())
        .await?;

    Ok(Json(WidgetResponse {
        name: widget.name().to_string(),
        state: widget.state().clone(),
    }))
}
