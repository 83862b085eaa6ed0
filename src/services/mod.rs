// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - credential resolution and feed clients.

pub mod airtable;
pub mod calendar;
pub mod credentials;
pub mod http;
pub mod product_hunt;

pub use airtable::AirtableClient;
pub use calendar::CalendarClient;
pub use credentials::{Credential, CredentialProvider};
pub use http::FeedHttpClient;
pub use product_hunt::ProductHuntClient;
