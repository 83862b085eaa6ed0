// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar event in the shape the calendar UI component consumes.

use crate::time_utils::format_utc_millis;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

const DONE_BACKGROUND: &str = "#FBBC04";
const DONE_BORDER: &str = "#FDDE82";
const PENDING_BACKGROUND: &str = "#4285F4";

/// Task status as far as colouring is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Done,
    Other,
}

impl EventStatus {
    /// Anything other than exactly `"Done"` (including no status) is `Other`.
    pub fn from_status(status: Option<&str>) -> Self {
        match status {
            Some("Done") => EventStatus::Done,
            _ => EventStatus::Other,
        }
    }

    pub fn background_color(&self) -> &'static str {
        match self {
            EventStatus::Done => DONE_BACKGROUND,
            EventStatus::Other => PENDING_BACKGROUND,
        }
    }

    pub fn border_color(&self) -> &'static str {
        match self {
            EventStatus::Done => DONE_BORDER,
            EventStatus::Other => "",
        }
    }
}

/// One timed block on today's calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    /// `end - duration`, `YYYY-MM-DDTHH:MM:SS.sssZ`
    pub start: String,
    pub end: String,
    pub background_color: String,
    pub border_color: String,
}

impl CalendarEvent {
    /// Build an event that ends at `end` and lasted `duration_hours`.
    ///
    /// Returns `None` when the duration cannot be represented.
    pub fn ending_at(
        title: String,
        end: DateTime<Utc>,
        duration_hours: f64,
        status: EventStatus,
    ) -> Option<Self> {
        let millis = (duration_hours * 3_600_000.0).round();
        if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
            return None;
        }
        let start = end.checked_sub_signed(Duration::try_milliseconds(millis as i64)?)?;

        Some(Self {
            title,
            start: format_utc_millis(start),
            end: format_utc_millis(end),
            background_color: status.background_color().to_string(),
            border_color: status.border_color().to_string(),
        })
    }
}
