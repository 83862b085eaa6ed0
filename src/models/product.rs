// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Product Hunt post, normalized for the product widget.

use serde::Serialize;

/// Base URL for a post's Product Hunt page, used when a post has no website.
pub const POST_PAGE_BASE: &str = "https://www.producthunt.com/posts/";

/// A featured product post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Product Hunt post ID
    pub id: String,
    pub name: String,
    /// One-line pitch shown under the name
    pub tagline: String,
    /// URL slug on producthunt.com
    pub slug: String,
    /// Thumbnail image URL (empty when the post has none)
    pub thumbnail_url: String,
    /// Where the block links to
    pub link_url: String,
    pub vote_count: u32,
}

impl Product {
    /// Pick the link target: the product's own website, else its Product Hunt page.
    pub fn link_for(website: Option<&str>, slug: &str) -> String {
        match website.map(str::trim) {
            Some(site) if !site.is_empty() => site.to_string(),
            _ => format!("{}{}", POST_PAGE_BASE, slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_prefers_website() {
        assert_eq!(Product::link_for(Some("http://a"), "a"), "http://a");
    }

    #[test]
    fn test_link_falls_back_to_post_page() {
        assert_eq!(
            Product::link_for(None, "widget-pro"),
            "https://www.producthunt.com/posts/widget-pro"
        );
        assert_eq!(
            Product::link_for(Some("  "), "widget-pro"),
            "https://www.producthunt.com/posts/widget-pro"
        );
    }
}
