//! Tweet operations for Twitter API.
//!
//! This module posts tweets through the Twitter API v2 `POST /2/tweets`
//! endpoint using OAuth 1.0a User Context authentication.

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde_json::json;

use crate::oauth::{build_oauth1_header, OAuth1Credentials};
use crate::publisher::TweetPublisher;
use crate::{BoxError, USER_AGENT};

use super::api::{extract_error_message, sanitize_for_logging, PublishError};

/// Client for posting tweets as the authenticated user.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: Client,
    base_url: String,
    credentials: OAuth1Credentials,
}

impl TwitterClient {
    /// Creates a client for the given API host (e.g. `https://api.x.com`).
    pub fn new(
        base_url: impl Into<String>,
        credentials: OAuth1Credentials,
    ) -> Result<Self, BoxError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Posts a tweet to Twitter/X using the API v2 endpoint.
    ///
    /// # Parameters
    ///
    /// - `text`: The text content of the tweet to post
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The id of the created tweet, or the raw response body if it
    ///   carries no id
    /// - `Err(PublishError)`: If signing fails, the request cannot be sent, or the API
    ///   answers with a non-success status
    ///
    /// # Errors
    ///
    /// A 429 response (or any error mentioning a rate limit) yields an error for which
    /// [`PublishError::is_rate_limited`] is true.
    pub async fn post_tweet(&self, text: &str) -> Result<String, PublishError> {
        info!(
            "Starting tweet post operation for text: '{}'",
            sanitize_for_logging(text, 280)
        );

        let url = format!("{}/2/tweets", self.base_url);
        let payload = json!({ "text": text });

        debug!("Building OAuth 1.0a User Context authorization header");
        let auth_header = build_oauth1_header(&self.credentials, "POST", &url, &[])
            .map_err(|e| PublishError::Other(e.to_string()))?;

        info!("Sending POST request to Twitter API v2");
        debug!("Request URL: {}", url);
        debug!("Request headers: Authorization: OAuth [REDACTED], Content-Type: application/json");

        let response = self
            .http
            .post(&url)
            .header("Authorization", auth_header)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        info!("Received response with status: {} for operation: post_tweet", status);
        let response_text = response.text().await?;

        if status.is_success() {
            let tweet_id = serde_json::from_str::<serde_json::Value>(&response_text)
                .ok()
                .and_then(|v| v.get("data")?.get("id")?.as_str().map(str::to_string));

            return match tweet_id {
                Some(id) => {
                    info!("Tweet posted successfully with id {}", id);
                    Ok(id)
                }
                None => {
                    info!("Tweet posted successfully");
                    debug!(
                        "Response without tweet id: {}",
                        sanitize_for_logging(&response_text, 200)
                    );
                    Ok(response_text)
                }
            };
        }

        error!("Operation 'post_tweet' failed - Status: {}", status);
        debug!(
            "Error response for 'post_tweet': {}",
            sanitize_for_logging(&response_text, 200)
        );
        Err(PublishError::Api {
            status,
            message: extract_error_message(&response_text),
        })
    }
}

#[async_trait]
impl TweetPublisher for TwitterClient {
    async fn publish(&self, text: &str) -> Result<(), PublishError> {
        self.post_tweet(text).await.map(|_| ())
    }
}
