// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly pushup totals bucketed by day of week.
//!
//! Buckets are ordered starting at tomorrow's weekday so the bar chart reads
//! as "the last seven days" ending with today on the right.

use chrono::Weekday;
use serde::Serialize;

/// Weekday labels, Monday first. Airtable's `Weekday` field is 1-indexed into this.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One row of the pushup table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushupRecord {
    /// May be fractional; Airtable number fields are not constrained to integers
    pub amount: f64,
    /// 1 = Monday .. 7 = Sunday
    pub weekday: i64,
}

impl PushupRecord {
    /// Chart label for this record's weekday.
    ///
    /// Out-of-range weekdays get a `Day {n}` label of their own instead of
    /// being folded into a real day.
    pub fn label(&self) -> String {
        usize::try_from(self.weekday)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| WEEKDAY_LABELS.get(idx))
            .map(|label| label.to_string())
            .unwrap_or_else(|| format!("Day {}", self.weekday))
    }
}

/// Per-weekday totals as two parallel sequences (labels, totals).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayAggregate {
    labels: Vec<String>,
    totals: Vec<f64>,
}

impl WeekdayAggregate {
    /// Seven empty buckets rotated to start the day after `today`.
    pub fn starting_after(today: Weekday) -> Self {
        let first = today.succ().num_days_from_monday() as usize;
        let labels = (0..7)
            .map(|i| WEEKDAY_LABELS[(first + i) % 7].to_string())
            .collect();

        Self {
            labels,
            totals: vec![0.0; 7],
        }
    }

    /// Fold one record into its bucket, appending a bucket if its label is new.
    pub fn add(&mut self, record: &PushupRecord) {
        let label = record.label();
        match self.labels.iter().position(|l| *l == label) {
            Some(idx) => self.totals[idx] += record.amount,
            None => {
                self.labels.push(label);
                self.totals.push(record.amount);
            }
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn totals(&self) -> &[f64] {
        &self.totals
    }

    /// Sum across every bucket.
    pub fn total(&self) -> f64 {
        self.totals.iter().sum()
    }
}
