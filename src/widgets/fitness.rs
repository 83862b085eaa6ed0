// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness widget: weekly totals as a single bar series.

use super::WidgetView;
use crate::models::WeekdayAggregate;

const CHART_WIDTH: u32 = 480;
const CHART_HEIGHT: u32 = 360;
const CHART_TITLE: &str = "Weekly Pushup Count";

/// X-axis order is the aggregate's rotated order, not calendar order.
pub fn render(aggregate: &WeekdayAggregate) -> WidgetView {
    WidgetView::Json(serde_json::json!({
        "data": [{
            "type": "bar",
            "x": aggregate.labels(),
            "y": aggregate.totals(),
        }],
        "layout": {
            "width": CHART_WIDTH,
            "height": CHART_HEIGHT,
            "title": CHART_TITLE,
        }
    }))
}
