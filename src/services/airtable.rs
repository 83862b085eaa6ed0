// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Airtable client for the pushup log.
//!
//! Handles:
//! - Cursor pagination via the `offset` token
//! - Folding each page into a [`WeekdayAggregate`] before requesting the next

use crate::error::AppError;
use crate::models::{Feed, PushupRecord, WeekdayAggregate};
use crate::services::http::FeedHttpClient;
use chrono::Weekday;
use reqwest::Method;
use serde::Deserialize;

/// Records requested per listing.
pub const MAX_RECORDS: u32 = 10;

/// Upper bound on pages followed before the cursor is treated as runaway.
const MAX_PAGES: usize = 100;

/// Airtable API client scoped to one table and view.
#[derive(Clone)]
pub struct AirtableClient {
    http: FeedHttpClient,
    api_url: String,
    api_key: String,
    base_id: String,
    table: String,
    view: String,
}

impl AirtableClient {
    pub fn new(
        http: FeedHttpClient,
        api_url: String,
        api_key: String,
        base_id: String,
        table: String,
        view: String,
    ) -> Self {
        Self {
            http,
            api_url,
            api_key,
            base_id,
            table,
            view,
        }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.api_url.trim_end_matches('/'),
            self.base_id,
            urlencoding::encode(&self.table)
        )
    }

    /// Fetch one page of records, continuing from `offset` if given.
    pub async fn list_page(&self, offset: Option<&str>) -> Result<RecordPage, AppError> {
        let mut query = vec![
            ("maxRecords", MAX_RECORDS.to_string()),
            ("view", self.view.clone()),
        ];
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }

        let request = self
            .http
            .request(Method::GET, &self.table_url())
            .bearer_auth(&self.api_key)
            .query(&query);

        let response = self
            .http
            .send(request)
            .await
            .map_err(|e| AppError::fetch(Feed::Fitness, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Airtable list request failed");
            return Err(AppError::fetch(Feed::Fitness, format!("HTTP {}", status)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::fetch(Feed::Fitness, format!("JSON parse error: {}", e)))
    }

    /// Sum pushups per weekday over every page, buckets ordered from the day
    /// after `today`.
    ///
    /// The aggregate is only returned once the last page has been folded in.
    pub async fn fetch_weekday_totals(&self, today: Weekday) -> Result<WeekdayAggregate, AppError> {
        let mut aggregate = WeekdayAggregate::starting_after(today);
        let mut offset: Option<String> = None;

        for page_number in 1..=MAX_PAGES {
            let page = self.list_page(offset.as_deref()).await?;
            tracing::debug!(
                page = page_number,
                records = page.records.len(),
                "Folding Airtable page"
            );

            for record in &page.records {
                aggregate.add(&record.fields.to_record());
            }

            match page.offset {
                Some(next) if !next.is_empty() => offset = Some(next),
                _ => {
                    tracing::info!(
                        pages = page_number,
                        total = aggregate.total(),
                        "Fetched pushup totals"
                    );
                    return Ok(aggregate);
                }
            }
        }

        Err(AppError::fetch(
            Feed::Fitness,
            format!("Pagination exceeded {} pages", MAX_PAGES),
        ))
    }
}

/// One page of a table listing.
#[derive(Debug, Deserialize)]
pub struct RecordPage {
    #[serde(default)]
    pub records: Vec<PushupRow>,
    /// Cursor for the next page; absent on the last page
    pub offset: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PushupRow {
    #[serde(default)]
    pub id: String,
    pub fields: PushupFields,
}

#[derive(Debug, Deserialize)]
pub struct PushupFields {
    #[serde(rename = "Amount", default)]
    pub amount: f64,
    /// 1 = Monday .. 7 = Sunday; a missing value lands in its own bucket
    #[serde(rename = "Weekday", default)]
    pub weekday: i64,
}

impl PushupFields {
    pub fn to_record(&self) -> PushupRecord {
        PushupRecord {
            amount: self.amount,
            weekday: self.weekday,
        }
    }
}
