// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Normalized feed records.

pub mod calendar;
pub mod countup;
pub mod fitness;
pub mod product;

pub use calendar::{CalendarEvent, EventStatus};
pub use countup::AgeCountup;
pub use fitness::{PushupRecord, WeekdayAggregate};
pub use product::Product;

use serde::Serialize;
use std::fmt;

/// One external data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feed {
    Product,
    Calendar,
    Fitness,
}

impl Feed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feed::Product => "product",
            Feed::Calendar => "calendar",
            Feed::Fitness => "fitness",
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
