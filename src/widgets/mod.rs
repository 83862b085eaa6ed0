// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Widgets and their fetch-then-render lifecycle.
//!
//! Each widget is a small state machine:
//!
//! ```text
//! Idle -> Fetching -> Rendered(view)
//!                  \-> Failed(reason)
//! ```
//!
//! A widget renders at most once. Its view belongs to a page; once the page
//! is torn down (its cancellation token fires) any late fetch result is
//! dropped without touching the view.

pub mod calendar;
pub mod countup;
pub mod fitness;
pub mod html;
pub mod product;

use crate::error::AppError;
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use tokio_util::sync::CancellationToken;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// The widgets a page can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "assets/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Product,
    Calendar,
    Fitness,
    /// Computed locally from the configured birthday
    Countup,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Product => "product",
            WidgetKind::Calendar => "calendar",
            WidgetKind::Fitness => "fitness",
            WidgetKind::Countup => "countup",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            WidgetKind::Product => "Product",
            WidgetKind::Calendar => "Calendar",
            WidgetKind::Fitness => "Fitness",
            WidgetKind::Countup => "Countup",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = AppError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "product" => Ok(WidgetKind::Product),
            "calendar" => Ok(WidgetKind::Calendar),
            "fitness" => Ok(WidgetKind::Fitness),
            "countup" => Ok(WidgetKind::Countup),
            _ => Err(AppError::NotFound(format!("Widget {}", name))),
        }
    }
}

/// What a widget puts on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "assets/generated/")
)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum WidgetView {
    /// Markup inserted directly into the widget's container
    Html(String),
    /// Data handed to a client-side component (calendar, chart)
    Json(serde_json::Value),
}

/// Lifecycle state of one widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "assets/generated/")
)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WidgetState {
    Idle,
    Fetching,
    Rendered { view: WidgetView },
    Failed { error: String },
}

/// One widget on one page view.
#[derive(Debug)]
pub struct Widget {
    kind: WidgetKind,
    state: WidgetState,
    /// Fires when the owning page is torn down
    detached: CancellationToken,
}

impl Widget {
    pub fn new(kind: WidgetKind, detached: CancellationToken) -> Self {
        Self {
            kind,
            state: WidgetState::Idle,
            detached,
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn is_detached(&self) -> bool {
        self.detached.is_cancelled()
    }

    /// Drive the widget from `Idle` to a terminal state.
    ///
    /// Fetch and render errors are recovered locally into `Failed`. An `Err`
    /// is returned only for guard violations: a second run, or a view that
    /// was detached before the fetch resolved. Neither touches the state.
    pub async fn run<T, Fut, R>(&mut self, fetch: Fut, render: R) -> Result<(), AppError>
    where
        Fut: Future<Output = Result<T, AppError>>,
        R: FnOnce(T) -> Result<WidgetView, AppError>,
    {
        if self.state != WidgetState::Idle {
            return Err(AppError::RenderGuardViolation(format!(
                "{} widget already mounted",
                self.kind
            )));
        }
        self.state = WidgetState::Fetching;

        let detached = self.detached.clone();
        let outcome = tokio::select! {
            _ = detached.cancelled() => None,
            result = fetch => Some(result),
        };

        let outcome = match outcome {
            Some(result) if !self.is_detached() => result,
            _ => {
                tracing::debug!(widget = %self.kind, "View detached, dropping fetch result");
                return Err(AppError::RenderGuardViolation(format!(
                    "{} widget view is detached",
                    self.kind
                )));
            }
        };

        match outcome.and_then(render) {
            Ok(view) => {
                tracing::debug!(widget = %self.kind, "Widget rendered");
                self.state = WidgetState::Rendered { view };
            }
            Err(err) => {
                tracing::warn!(widget = %self.kind, error = %err, "Widget failed, showing placeholder");
                self.state = WidgetState::Failed {
                    error: err.to_string(),
                };
            }
        }
        Ok(())
    }

    /// Markup for this widget's region of the page.
    pub fn to_html(&self) -> String {
        match &self.state {
            WidgetState::Rendered {
                view: WidgetView::Html(markup),
            } => markup.clone(),
            WidgetState::Rendered {
                view: WidgetView::Json(value),
            } => format!(
                r#"<script type="application/json" id="{name}-data">{json}</script><div id="{name}-mount"></div>"#,
                name = self.kind,
                json = html::escape_script_json(&value.to_string()),
            ),
            WidgetState::Failed { .. } => format!(
                r#"<div class="widget-empty">{} is unavailable right now.</div>"#,
                self.kind.title()
            ),
            // The browser fills pending widgets in from /api/widgets/{name}
            WidgetState::Idle | WidgetState::Fetching => format!(
                r#"<div class="widget-empty widget-pending" data-widget="{}">Loading&hellip;</div>"#,
                self.kind
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feed;
    use std::time::Duration;

    fn ok_view() -> Result<WidgetView, AppError> {
        Ok(WidgetView::Html("<p>hi</p>".to_string()))
    }

    #[tokio::test]
    async fn test_successful_run_renders() {
        let mut widget = Widget::new(WidgetKind::Product, CancellationToken::new());
        widget
            .run(async { Ok::<_, AppError>(()) }, |_| ok_view())
            .await
            .unwrap();

        assert_eq!(
            widget.state(),
            &WidgetState::Rendered {
                view: WidgetView::Html("<p>hi</p>".to_string())
            }
        );
        assert_eq!(widget.to_html(), "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_fetch_failure_becomes_placeholder() {
        let mut widget = Widget::new(WidgetKind::Calendar, CancellationToken::new());
        widget
            .run(
                async { Err::<(), _>(AppError::fetch(Feed::Calendar, "HTTP 500")) },
                |_| ok_view(),
            )
            .await
            .unwrap();

        assert!(matches!(widget.state(), WidgetState::Failed { error } if error.contains("HTTP 500")));
        assert!(widget.to_html().contains("widget-empty"));
        assert!(widget.to_html().contains("Calendar is unavailable"));
    }

    #[tokio::test]
    async fn test_second_run_is_refused() {
        let mut widget = Widget::new(WidgetKind::Product, CancellationToken::new());
        widget.run(async { Ok::<_, AppError>(()) }, |_| ok_view()).await.unwrap();

        let second = widget
            .run(async { Ok::<_, AppError>(()) }, |_| {
                Ok(WidgetView::Html("<p>again</p>".to_string()))
            })
            .await;

        assert!(matches!(second, Err(AppError::RenderGuardViolation(_))));
        assert_eq!(widget.to_html(), "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_detached_view_is_not_written() {
        let token = CancellationToken::new();
        let mut widget = Widget::new(WidgetKind::Fitness, token.clone());

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let result = widget
            .run(
                async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Ok::<_, AppError>(())
                },
                |_| ok_view(),
            )
            .await;

        assert!(matches!(result, Err(AppError::RenderGuardViolation(_))));
        assert!(widget.is_detached());
        assert!(!matches!(widget.state(), WidgetState::Rendered { .. }));
    }

    #[tokio::test]
    async fn test_json_view_embedded_as_script() {
        let mut widget = Widget::new(WidgetKind::Calendar, CancellationToken::new());
        widget
            .run(async { Ok::<_, AppError>(()) }, |_| {
                Ok(WidgetView::Json(serde_json::json!([{"title": "</script>"}])))
            })
            .await
            .unwrap();

        let html = widget.to_html();
        assert!(html.starts_with(r#"<script type="application/json" id="calendar-data">"#));
        assert!(html.contains(r#"<\/script>"#));
        assert!(html.ends_with(r#"<div id="calendar-mount"></div>"#));
    }

    #[test]
    fn test_state_serialization() {
        let state = WidgetState::Rendered {
            view: WidgetView::Html("x".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({"state": "rendered", "view": {"kind": "html", "body": "x"}})
        );
        assert_eq!(
            serde_json::to_value(WidgetState::Idle).unwrap(),
            serde_json::json!({"state": "idle"})
        );
    }

    #[test]
    fn test_pending_widget_names_itself() {
        let widget = Widget::new(WidgetKind::Fitness, CancellationToken::new());
        assert_eq!(
            widget.to_html(),
            r#"<div class="widget-empty widget-pending" data-widget="fitness">Loading&hellip;</div>"#
        );
    }

    #[test]
    fn test_kind_parsing() {
        for kind in [
            WidgetKind::Product,
            WidgetKind::Calendar,
            WidgetKind::Fitness,
            WidgetKind::Countup,
        ] {
            assert_eq!(kind.as_str().parse::<WidgetKind>().unwrap(), kind);
        }
        assert!(matches!(
            "weather".parse::<WidgetKind>(),
            Err(AppError::NotFound(_))
        ));
    }
}
