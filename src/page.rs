// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page composition: mounts every widget for one page view.

use crate::config::Config;
use crate::error::AppError;
use crate::models::AgeCountup;
use crate::services::{
    AirtableClient, CalendarClient, CredentialProvider, FeedHttpClient, ProductHuntClient,
};
use crate::widgets::{self, Widget, WidgetKind};
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use tokio_util::sync::CancellationToken;

/// Holds the feed clients and builds pages from them.
#[derive(Clone)]
pub struct PageComposer {
    credentials: CredentialProvider,
    pre_supplied_token: String,
    product_hunt: ProductHuntClient,
    calendar: CalendarClient,
    airtable: AirtableClient,
    birthday: Option<NaiveDate>,
}

impl PageComposer {
    /// Build the feed clients from configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let feed_http = FeedHttpClient::builder()
            .timeout(config.fetch_timeout)
            .build()
            .map_err(anyhow::Error::from)?;
        let token_http = FeedHttpClient::builder()
            .timeout(config.fetch_timeout)
            .max_attempts(1)
            .build()
            .map_err(anyhow::Error::from)?;

        Ok(Self {
            credentials: CredentialProvider::new(
                token_http,
                config.product_hunt_token_url.clone(),
                config.product_hunt_client_id.clone(),
                config.product_hunt_client_secret.clone(),
            ),
            pre_supplied_token: config.product_hunt_access_token.clone(),
            product_hunt: ProductHuntClient::new(
                feed_http.clone(),
                config.product_hunt_api_url.clone(),
            ),
            calendar: CalendarClient::new(feed_http.clone(), config.calendar_feed_url.clone()),
            airtable: AirtableClient::new(
                feed_http,
                config.airtable_api_url.clone(),
                config.airtable_api_key.clone(),
                config.airtable_base_id.clone(),
                config.airtable_table.clone(),
                config.airtable_view.clone(),
            ),
            birthday: config.birthday,
        })
    }

    /// Page shell as of `now`, returned without touching any feed.
    ///
    /// Feed widgets stay pending and the browser fills each one in from
    /// `/api/widgets/{name}` on its own, so a slow feed holds back nothing
    /// but itself. The countup needs no network and is rendered here.
    pub async fn shell(&self, now: DateTime<Local>) -> Page {
        let mut page = Page::pending(CancellationToken::new(), self.birthday.is_some());
        if let Some(countup) = page.countup.as_mut() {
            if let Err(err) = self.run_widget(countup, now).await {
                tracing::debug!(error = %err, "Countup did not render");
            }
        }
        page
    }

    /// Mount a page as of `now` and wait for every widget to settle.
    pub async fn mount(&self, now: DateTime<Local>) -> Page {
        self.mount_with_cancel(now, CancellationToken::new()).await
    }

    /// Mount a page whose views detach when `cancel` fires.
    ///
    /// Widgets fetch concurrently; each one's render waits only on its own
    /// fetch. A failure in one widget leaves the others untouched.
    pub async fn mount_with_cancel(&self, now: DateTime<Local>, cancel: CancellationToken) -> Page {
        let mut page = Page::pending(cancel, self.birthday.is_some());
        let Page {
            product,
            calendar,
            fitness,
            countup,
            ..
        } = &mut page;

        let countup_run = async move {
            match countup {
                Some(widget) => self.run_widget(widget, now).await,
                None => Ok(()),
            }
        };

        let results = tokio::join!(
            self.run_widget(product, now),
            self.run_widget(calendar, now),
            self.run_widget(fitness, now),
            countup_run,
        );
        for result in [results.0, results.1, results.2, results.3] {
            if let Err(err) = result {
                tracing::debug!(error = %err, "Widget lifecycle ended without rendering");
            }
        }

        page
    }

    /// Mount a single widget outside of a full page.
    ///
    /// Returns `NotFound` for the countup widget when no birthday is
    /// configured.
    pub async fn mount_widget(
        &self,
        kind: WidgetKind,
        now: DateTime<Local>,
    ) -> Result<Widget, AppError> {
        if kind == WidgetKind::Countup && self.birthday.is_none() {
            return Err(AppError::NotFound("Widget countup".to_string()));
        }

        let mut widget = Widget::new(kind, CancellationToken::new());
        self.run_widget(&mut widget, now).await?;
        Ok(widget)
    }

    /// Run the fetch-then-render lifecycle matching the widget's kind.
    async fn run_widget(&self, widget: &mut Widget, now: DateTime<Local>) -> Result<(), AppError> {
        match widget.kind() {
            WidgetKind::Product => {
                widget
                    .run(
                        async {
                            let token = self
                                .credentials
                                .resolve_token(&self.pre_supplied_token)
                                .await?;
                            self.product_hunt.fetch_featured(&token).await
                        },
                        |products| Ok(widgets::product::render(&products)),
                    )
                    .await
            }
            WidgetKind::Calendar => {
                widget
                    .run(self.calendar.fetch_day(), |events| {
                        widgets::calendar::render(&events)
                    })
                    .await
            }
            WidgetKind::Fitness => {
                widget
                    .run(
                        self.airtable.fetch_weekday_totals(now.weekday()),
                        |aggregate| Ok(widgets::fitness::render(&aggregate)),
                    )
                    .await
            }
            WidgetKind::Countup => {
                let birthday = self.birthday;
                let now_utc = now.with_timezone(&Utc);
                widget
                    .run(
                        async move {
                            birthday
                                .map(|b| AgeCountup::at(b, now_utc))
                                .ok_or_else(|| AppError::NotFound("Birthday".to_string()))
                        },
                        |age| Ok(widgets::countup::render(&age)),
                    )
                    .await
            }
        }
    }
}

/// One page view and its widgets.
#[derive(Debug)]
pub struct Page {
    cancel: CancellationToken,
    pub product: Widget,
    pub calendar: Widget,
    pub fitness: Widget,
    /// Present only when a birthday is configured
    pub countup: Option<Widget>,
}

impl Page {
    /// A page whose widgets are all idle.
    fn pending(cancel: CancellationToken, with_countup: bool) -> Self {
        Self {
            product: Widget::new(WidgetKind::Product, cancel.child_token()),
            calendar: Widget::new(WidgetKind::Calendar, cancel.child_token()),
            fitness: Widget::new(WidgetKind::Fitness, cancel.child_token()),
            countup: with_countup
                .then(|| Widget::new(WidgetKind::Countup, cancel.child_token())),
            cancel,
        }
    }

    pub fn widget(&self, kind: WidgetKind) -> Option<&Widget> {
        match kind {
            WidgetKind::Product => Some(&self.product),
            WidgetKind::Calendar => Some(&self.calendar),
            WidgetKind::Fitness => Some(&self.fitness),
            WidgetKind::Countup => self.countup.as_ref(),
        }
    }

    /// Detach every view; late results are dropped from here on.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    /// Assemble the full new-tab document.
    pub fn to_html(&self) -> String {
        let countup = self
            .countup
            .as_ref()
            .map(Widget::to_html)
            .unwrap_or_default();

        format!(
            include_str!("../assets/newtab.html"),
            product = self.product.to_html(),
            fitness = self.fitness.to_html(),
            countup = countup,
            calendar = self.calendar.to_html(),
        )
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
