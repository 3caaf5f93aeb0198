//! NewsAPI integration module.
//!
//! This module fetches the current technology headlines from the NewsAPI
//! `top-headlines` endpoint using Bearer Token authentication.

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::oauth::build_bearer_auth_header;
use crate::publisher::HeadlineSource;
use crate::twitter::sanitize_for_logging;
use crate::{BoxError, USER_AGENT};

/// Number of articles requested per run.
pub const PAGE_SIZE: u32 = 5;

#[derive(Debug, Deserialize)]
struct TopHeadlinesResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    title: Option<String>,
}

/// Client for the NewsAPI `top-headlines` endpoint.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    base_url: String,
    api_token: String,
}

impl NewsClient {
    /// Creates a client for the given API host (e.g. `https://newsapi.org`).
    ///
    /// NewsAPI rejects requests without a `User-Agent`, so the client always sends one.
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self, BoxError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
        })
    }

    /// Fetches up to five US technology headlines.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<String>)`: The non-empty article titles on HTTP 200, or an empty list if
    ///   the API answered with any other status
    /// - `Err(BoxError)`: If the request could not be sent or the body was not valid JSON
    pub async fn fetch_tech_headlines(&self) -> Result<Vec<String>, BoxError> {
        let url = format!("{}/v2/top-headlines", self.base_url);
        info!("Fetching technology headlines from {}", url);

        let page_size = PAGE_SIZE.to_string();
        let response = self
            .http
            .get(&url)
            .header("Authorization", build_bearer_auth_header(&self.api_token))
            .query(&[
                ("category", "technology"),
                ("country", "us"),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            error!("Failed to fetch news: {}", status.as_u16());
            debug!(
                "News API error response: {}",
                sanitize_for_logging(&error_text, 200)
            );
            return Ok(Vec::new());
        }

        let body: TopHeadlinesResponse = response.json().await?;
        let headlines: Vec<String> = body
            .articles
            .into_iter()
            .filter_map(|article| article.title)
            .map(|title| flatten_line_breaks(&title))
            .filter(|title| !title.trim().is_empty())
            .collect();

        info!("Fetched {} headlines", headlines.len());
        Ok(headlines)
    }
}

/// Replaces line breaks with spaces so a headline stays on one line of the
/// posted tweets record.
fn flatten_line_breaks(title: &str) -> String {
    title.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

#[async_trait]
impl HeadlineSource for NewsClient {
    async fn fetch_headlines(&self) -> Result<Vec<String>, BoxError> {
        self.fetch_tech_headlines().await
    }
}
