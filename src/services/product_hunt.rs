// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Product Hunt GraphQL client for today's featured posts.

use crate::error::AppError;
use crate::models::{Feed, Product};
use crate::services::credentials::Credential;
use crate::services::http::FeedHttpClient;
use reqwest::header::ACCEPT;
use reqwest::Method;
use serde::Deserialize;

/// The ten most recent featured posts.
const FEATURED_QUERY: &str = "query {posts(first: 10, featured:true) {edges { node { id, name, tagline, slug, thumbnail { url }, website, votesCount } } } } ";

/// Product Hunt API client.
#[derive(Clone)]
pub struct ProductHuntClient {
    http: FeedHttpClient,
    api_url: String,
}

impl ProductHuntClient {
    pub fn new(http: FeedHttpClient, api_url: String) -> Self {
        Self { http, api_url }
    }

    /// Fetch featured posts in API response order.
    pub async fn fetch_featured(&self, token: &Credential) -> Result<Vec<Product>, AppError> {
        let request = self
            .http
            .request(Method::POST, &self.api_url)
            .header(ACCEPT, "application/json")
            .bearer_auth(token.as_str())
            .json(&serde_json::json!({ "query": FEATURED_QUERY }));

        let response = self
            .http
            .send(request)
            .await
            .map_err(|e| AppError::fetch(Feed::Product, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Product Hunt query failed");
            return Err(AppError::fetch(Feed::Product, format!("HTTP {}", status)));
        }

        let parsed: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| AppError::fetch(Feed::Product, format!("JSON parse error: {}", e)))?;

        let products: Vec<Product> = parsed
            .data
            .posts
            .edges
            .into_iter()
            .map(|edge| edge.node.into())
            .collect();

        tracing::info!(count = products.len(), "Fetched featured products");
        Ok(products)
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: PostsData,
}

#[derive(Debug, Deserialize)]
struct PostsData {
    posts: PostConnection,
}

#[derive(Debug, Deserialize)]
struct PostConnection {
    edges: Vec<PostEdge>,
}

#[derive(Debug, Deserialize)]
struct PostEdge {
    node: PostNode,
}

/// A post node as returned by the GraphQL API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostNode {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    tagline: String,
    #[serde(default)]
    slug: String,
    thumbnail: Option<Thumbnail>,
    website: Option<String>,
    #[serde(default)]
    votes_count: u32,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: Option<String>,
}

impl From<PostNode> for Product {
    fn from(node: PostNode) -> Self {
        let link_url = Product::link_for(node.website.as_deref(), &node.slug);
        Product {
            id: node.id,
            name: node.name,
            tagline: node.tagline,
            thumbnail_url: node.thumbnail.and_then(|t| t.url).unwrap_or_default(),
            link_url,
            slug: node.slug,
            vote_count: node.votes_count,
        }
    }
}
