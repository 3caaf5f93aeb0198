//! # Technews Bot Library
//!
//! A small bot that turns technology headlines from NewsAPI into tweets and posts a
//! bounded number of them per run to Twitter/X using OAuth 1.0a User Context
//! authentication. A flat record file keeps the same tweet text from being posted twice.
//!
//! ## Flow
//!
//! 1. Load the posted tweets record (`posted_tweets.txt` by default)
//! 2. Fetch up to five US technology headlines
//! 3. For each headline, compose a tweet and skip it if it was already posted
//! 4. Publish up to five tweets, pausing an hour after each success and fifteen
//!    minutes after a rate-limit error
//! 5. Rewrite the record
//!
//! ## Configuration
//!
//! The following environment variables are required:
//! - `TWITTER_API_KEY`, `TWITTER_API_KEY_SECRET`
//! - `TWITTER_BEARER_TOKEN`
//! - `TWITTER_ACCESS_TOKEN`, `TWITTER_ACCESS_TOKEN_SECRET`
//! - `NEWS_API_TOKEN`
//!
//! Optional: `POSTED_TWEETS_FILE`, `NEWS_API_BASE_URL`, `TWITTER_API_BASE_URL`.

pub mod composer;
pub mod config;
pub mod dedup;
pub mod news;
pub mod oauth;
pub mod publisher;
pub mod twitter;

/// Boxed error used across the crate's fallible operations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// `User-Agent` sent with every API request.
pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

// Re-export commonly used types and functions
pub use composer::{compose_tweet, compose_tweet_with};
pub use config::{
    get_news_api_base_url, get_posted_tweets_path, get_twitter_api_base_url, BotConfig,
};
pub use dedup::PostedTweets;
pub use news::NewsClient;
pub use oauth::{build_bearer_auth_header, build_oauth1_header, OAuth1Credentials};
pub use publisher::{
    publish_headlines, run_posting_cycle, HeadlineSource, PostingSchedule, RunReport,
    TweetPublisher,
};
pub use twitter::{PublishError, TwitterClient};
