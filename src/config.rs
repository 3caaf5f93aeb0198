//! Configuration module for the technews bot.
//!
//! This module contains configuration structures and environment variable handling
//! for the Twitter/X and NewsAPI integrations.

use log::{debug, error, info, warn};
use std::env;

use crate::oauth::OAuth1Credentials;
use crate::BoxError;

/// Default location of the posted tweets record, relative to the working directory.
pub const DEFAULT_POSTED_TWEETS_FILE: &str = "posted_tweets.txt";
/// Default NewsAPI host.
pub const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org";
/// Default Twitter/X API host.
pub const DEFAULT_TWITTER_API_BASE_URL: &str = "https://api.x.com";

/// Credentials required to run the bot.
///
/// The Twitter/X write endpoint is called with OAuth 1.0a User Context, which needs the
/// consumer key pair and the access token pair. The bearer token is kept for parity with
/// the developer portal's credential set even though posting does not use it.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Consumer key (`TWITTER_API_KEY`)
    pub api_key: String,
    /// Consumer secret (`TWITTER_API_KEY_SECRET`)
    pub api_key_secret: String,
    /// App-only bearer token (`TWITTER_BEARER_TOKEN`)
    pub bearer_token: String,
    /// User access token (`TWITTER_ACCESS_TOKEN`)
    pub access_token: String,
    /// User access token secret (`TWITTER_ACCESS_TOKEN_SECRET`)
    pub access_token_secret: String,
    /// NewsAPI key (`NEWS_API_TOKEN`)
    pub news_api_token: String,
}

/// Masks a secret for logging, keeping at most the first and last 8 characters.
pub(crate) fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let len = chars.len();
    let prefix: String = chars.iter().take(8).collect();

    if len > 16 {
        let suffix: String = chars[len - 8..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        format!("{}...", prefix)
    }
}

/// Reads one required, non-empty variable and logs its masked value.
fn require_var(name: &str) -> Result<String, BoxError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            info!(
                "Found {} environment variable with length: {}",
                name,
                value.len()
            );
            debug!("{} (masked): {}", name, mask_secret(&value));
            Ok(value)
        }
        Ok(_) => {
            error!("{} environment variable is empty", name);
            Err(format!("{} cannot be empty", name).into())
        }
        Err(e) => {
            error!("Failed to load {} from environment: {}", name, e);
            Err(format!("Missing {} environment variable: {}", name, e).into())
        }
    }
}

impl BotConfig {
    /// Creates a new `BotConfig` by loading credentials from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `TWITTER_API_KEY`, `TWITTER_API_KEY_SECRET`: consumer key pair
    /// - `TWITTER_BEARER_TOKEN`: app-only bearer token
    /// - `TWITTER_ACCESS_TOKEN`, `TWITTER_ACCESS_TOKEN_SECRET`: user access token pair
    /// - `NEWS_API_TOKEN`: NewsAPI key
    ///
    /// Every variable is checked before returning, so a single error log lists all
    /// the missing names.
    ///
    /// # Returns
    ///
    /// - `Ok(BotConfig)`: If every required variable is present and non-empty
    /// - `Err(BoxError)`: If any of them is missing or empty
    pub fn from_env() -> Result<Self, BoxError> {
        info!("Loading bot configuration from environment variables");

        let mut missing: Vec<&str> = Vec::new();
        let mut load = |name: &'static str| match require_var(name) {
            Ok(value) => value,
            Err(_) => {
                missing.push(name);
                String::new()
            }
        };

        let config = BotConfig {
            api_key: load("TWITTER_API_KEY"),
            api_key_secret: load("TWITTER_API_KEY_SECRET"),
            bearer_token: load("TWITTER_BEARER_TOKEN"),
            access_token: load("TWITTER_ACCESS_TOKEN"),
            access_token_secret: load("TWITTER_ACCESS_TOKEN_SECRET"),
            news_api_token: load("NEWS_API_TOKEN"),
        };

        if !missing.is_empty() {
            error!("Missing environment variables. Please check the .env file.");
            return Err(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )
            .into());
        }

        if config.access_token.len() < 10 {
            warn!(
                "Access token seems unusually short ({} characters)",
                config.access_token.len()
            );
        }

        info!("Bot configuration loaded successfully");
        Ok(config)
    }

    /// Returns the OAuth 1.0a credentials used for posting tweets.
    pub fn oauth1_credentials(&self) -> OAuth1Credentials {
        OAuth1Credentials {
            consumer_key: self.api_key.clone(),
            consumer_secret: self.api_key_secret.clone(),
            access_token: self.access_token.clone(),
            access_token_secret: self.access_token_secret.clone(),
        }
    }
}

/// Reads an optional variable, falling back to `default` when unset or blank.
fn var_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            info!("Using {} from environment: {}", name, value);
            value
        }
        _ => default.to_string(),
    }
}

/// Gets the posted tweets file path from `POSTED_TWEETS_FILE`, defaulting to
/// `posted_tweets.txt`.
pub fn get_posted_tweets_path() -> String {
    var_or("POSTED_TWEETS_FILE", DEFAULT_POSTED_TWEETS_FILE)
}

/// Gets the NewsAPI base URL from `NEWS_API_BASE_URL`, defaulting to `https://newsapi.org`.
pub fn get_news_api_base_url() -> String {
    var_or("NEWS_API_BASE_URL", DEFAULT_NEWS_API_BASE_URL)
}

/// Gets the Twitter/X API base URL from `TWITTER_API_BASE_URL`, defaulting to
/// `https://api.x.com`.
pub fn get_twitter_api_base_url() -> String {
    var_or("TWITTER_API_BASE_URL", DEFAULT_TWITTER_API_BASE_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("short"), "short...");
        assert_eq!(mask_secret("0123456789ab"), "01234567...");
        assert_eq!(
            mask_secret("0123456789abcdefghij"),
            "01234567...cdefghij"
        );
    }
}
