// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar webhook client for today's tasks.

use crate::error::AppError;
use crate::models::{CalendarEvent, EventStatus, Feed};
use crate::services::http::FeedHttpClient;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;

/// Client for the calendar webhook's day view.
#[derive(Clone)]
pub struct CalendarClient {
    http: FeedHttpClient,
    feed_url: String,
}

impl CalendarClient {
    pub fn new(http: FeedHttpClient, feed_url: String) -> Self {
        Self { http, feed_url }
    }

    /// Fetch today's records and convert them to calendar events.
    ///
    /// The endpoint is unauthenticated.
    pub async fn fetch_day(&self) -> Result<Vec<CalendarEvent>, AppError> {
        let request = self.http.request(Method::GET, &self.feed_url);

        let response = self
            .http
            .send(request)
            .await
            .map_err(|e| AppError::fetch(Feed::Calendar, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(status = %status, "Calendar feed request failed");
            return Err(AppError::fetch(Feed::Calendar, format!("HTTP {}", status)));
        }

        let parsed: DayResponse = response
            .json()
            .await
            .map_err(|e| AppError::fetch(Feed::Calendar, format!("JSON parse error: {}", e)))?;

        let events = to_events(parsed)?;
        tracing::info!(count = events.len(), "Fetched calendar events");
        Ok(events)
    }
}

/// Convert raw day records; any malformed record fails the whole feed.
fn to_events(day: DayResponse) -> Result<Vec<CalendarEvent>, AppError> {
    day.records
        .into_iter()
        .map(|record| {
            let fields = record.fields;
            let end = DateTime::parse_from_rfc3339(&fields.end_time)
                .map_err(|e| {
                    AppError::fetch(
                        Feed::Calendar,
                        format!("Invalid endTime {:?}: {}", fields.end_time, e),
                    )
                })?
                .with_timezone(&Utc);

            let status = EventStatus::from_status(fields.status.as_deref());
            let title = fields.name;
            CalendarEvent::ending_at(title.clone(), end, fields.duration, status).ok_or_else(
                || {
                    AppError::fetch(
                        Feed::Calendar,
                        format!("Invalid duration {} for {:?}", fields.duration, title),
                    )
                },
            )
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct DayResponse {
    #[serde(default)]
    records: Vec<DayRecord>,
}

#[derive(Debug, Deserialize)]
struct DayRecord {
    fields: DayFields,
}

/// Record fields as stored by the task base behind the webhook.
#[derive(Debug, Deserialize)]
struct DayFields {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "endTime")]
    end_time: String,
    /// Hours, possibly fractional
    duration: f64,
    #[serde(rename = "Status")]
    status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(records: serde_json::Value) -> DayResponse {
        serde_json::from_value(serde_json::json!({ "records": records })).unwrap()
    }

    #[test]
    fn test_standup_record() {
        let events = to_events(day(serde_json::json!([{
            "fields": {
                "Name": "Standup",
                "endTime": "2024-01-01T10:00:00Z",
                "duration": 0.5,
                "Status": "Done"
            }
        }])))
        .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Standup");
        assert_eq!(events[0].start, "2024-01-01T09:30:00.000Z");
        assert_eq!(events[0].end, "2024-01-01T10:00:00.000Z");
        assert_eq!(events[0].background_color, "#FBBC04");
        assert_eq!(events[0].border_color, "#FDDE82");
    }

    #[test]
    fn test_offset_end_time_normalized_to_utc() {
        let events = to_events(day(serde_json::json!([{
            "fields": {
                "Name": "Review",
                "endTime": "2024-01-01T12:00:00-05:00",
                "duration": 1,
                "Status": "In Progress"
            }
        }])))
        .unwrap();

        assert_eq!(events[0].start, "2024-01-01T16:00:00.000Z");
        assert_eq!(events[0].end, "2024-01-01T17:00:00.000Z");
        assert_eq!(events[0].background_color, "#4285F4");
        assert_eq!(events[0].border_color, "");
    }

    #[test]
    fn test_bad_end_time_fails_feed() {
        let result = to_events(day(serde_json::json!([{
            "fields": { "Name": "Broken", "endTime": "tomorrow", "duration": 1 }
        }])));
        assert!(matches!(
            result,
            Err(AppError::FetchFailure {
                feed: Feed::Calendar,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_records_is_empty() {
        let parsed: DayResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(to_events(parsed).unwrap().is_empty());
    }
}
