// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar widget: the event list handed to the calendar component as-is.

use super::WidgetView;
use crate::error::AppError;
use crate::models::CalendarEvent;

pub fn render(events: &[CalendarEvent]) -> Result<WidgetView, AppError> {
    let value = serde_json::to_value(events).map_err(anyhow::Error::from)?;
    Ok(WidgetView::Json(value))
}
