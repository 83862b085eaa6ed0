// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Newtab-Dashboard: a browser new-tab page built from three personal feeds.
//!
//! This crate serves the page: today's featured Product Hunt posts, the
//! day's calendar from a webhook service, and a weekly pushup chart from
//! Airtable, each rendered as an independent widget.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod page;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod widgets;

use config::Config;
use page::PageComposer;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub composer: PageComposer,
}
