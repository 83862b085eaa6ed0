// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Product widget: one linked block per featured post.

use super::html::escape;
use super::WidgetView;
use crate::models::Product;

/// Render posts in the order received.
pub fn render(products: &[Product]) -> WidgetView {
    let blocks: String = products.iter().map(render_block).collect();
    WidgetView::Html(blocks)
}

fn render_block(product: &Product) -> String {
    format!(
        concat!(
            r#"<div class="product">"#,
            r#"<a href="{link}"><img src="{thumbnail}" alt="{name}"></a>"#,
            r#"<div class="name">{name}</div>"#,
            r#"<p class="tagline">{tagline}</p>"#,
            "</div>"
        ),
        link = escape(&product.link_url),
        thumbnail = escape(&product.thumbnail_url),
        name = escape(&product.name),
        tagline = escape(&product.tagline),
    )
}
