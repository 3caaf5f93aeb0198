//! # Technews Bot
//!
//! Fetches the latest technology headlines, composes tweets from them and posts up to
//! five per run to Twitter/X, skipping any tweet text already recorded in the posted
//! tweets file.
//!
//! ## Environment Variables
//!
//! Required: `TWITTER_API_KEY`, `TWITTER_API_KEY_SECRET`, `TWITTER_BEARER_TOKEN`,
//! `TWITTER_ACCESS_TOKEN`, `TWITTER_ACCESS_TOKEN_SECRET`, `NEWS_API_TOKEN`.
//! A `.env` file in the working directory is loaded first if present.

use env_logger::Env;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use technews_bot::{
    get_news_api_base_url, get_posted_tweets_path, get_twitter_api_base_url, run_posting_cycle,
    BotConfig, NewsClient, PostingSchedule, TwitterClient,
};

/// Main entry point for the technews bot.
///
/// Runs a single posting cycle and exits. Missing credentials end the process with
/// exit code 1 before any request is made; every other failure is logged and the
/// process exits normally.
///
/// # Logging
///
/// Log levels are controlled via the `RUST_LOG` environment variable and default
/// to `info`.
///
/// # Example Usage
///
/// ```bash
/// cargo run
///
/// # Keep the record somewhere else
/// POSTED_TWEETS_FILE=/var/lib/technews/posted_tweets.txt cargo run
///
/// # Run with debug logging
/// RUST_LOG=debug cargo run
/// ```
#[tokio::main]
async fn main() {
    let dotenv_result = dotenvy::dotenv();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Ok(path) = dotenv_result {
        info!("Loaded environment from {}", path.display());
    }

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let clients = NewsClient::new(get_news_api_base_url(), config.news_api_token.clone())
        .and_then(|news| {
            TwitterClient::new(get_twitter_api_base_url(), config.oauth1_credentials())
                .map(|twitter| (news, twitter))
        });
    let (news, twitter) = match clients {
        Ok(clients) => clients,
        Err(e) => {
            error!("Unexpected error: {}", e);
            return;
        }
    };
    let schedule = PostingSchedule::default();
    let mut rng = StdRng::from_entropy();

    match run_posting_cycle(
        &news,
        &twitter,
        get_posted_tweets_path(),
        &schedule,
        &mut rng,
    )
    .await
    {
        Ok(report) => info!("Posted {} new tech tweets", report.posted),
        Err(e) => error!("Unexpected error: {}", e),
    }
}
