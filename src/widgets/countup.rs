// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Age countup block.
//!
//! The server fills in the age at render time; `newtab.js` keeps it counting
//! from `data-born-ms` while the tab has focus.

use super::html::escape;
use super::WidgetView;
use crate::models::AgeCountup;

pub fn render(age: &AgeCountup) -> WidgetView {
    WidgetView::Html(format!(
        concat!(
            r#"<div id="countup" data-born-ms="{}">"#,
            r#"<div class="countup_time">"#,
            r#"<div class="countup_title">AGE:</div>"#,
            r#"<div class="countup_major_minor">"#,
            r#"<div class="countup_major">{}</div>"#,
            r#"<div class="countup_minor">{}</div>"#,
            "</div></div></div>"
        ),
        age.born_ms,
        escape(&age.major),
        escape(&age.minor),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_birth_instant_rendered_for_ticking() {
        let birthday = NaiveDate::from_ymd_opt(2001, 1, 12).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();

        let WidgetView::Html(html) = render(&AgeCountup::at(birthday, now)) else {
            panic!("countup renders markup");
        };
        assert!(html.starts_with(r#"<div id="countup" data-born-ms="979257600000">"#));
        assert!(html.contains(r#"<div class="countup_major">22</div>"#));
        assert!(html.ends_with("</div></div></div>"));
    }
}
