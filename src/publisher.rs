//! The posting cycle.
//!
//! One cycle loads the posted tweets record, fetches headlines, composes and
//! publishes tweets up to the daily limit, and writes the record back.

use async_trait::async_trait;
use log::{error, info, warn};
use rand::Rng;
use std::path::Path;
use std::time::Duration;

use crate::composer::compose_tweet_with;
use crate::dedup::PostedTweets;
use crate::twitter::PublishError;
use crate::BoxError;

/// Something that yields the headlines for one run.
#[async_trait]
pub trait HeadlineSource {
    async fn fetch_headlines(&self) -> Result<Vec<String>, BoxError>;
}

/// Something that publishes a composed tweet.
#[async_trait]
pub trait TweetPublisher {
    async fn publish(&self, text: &str) -> Result<(), PublishError>;
}

/// Limits and pauses applied during a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostingSchedule {
    /// Maximum successful posts per run.
    pub daily_limit: usize,
    /// Pause after each successful post.
    pub post_interval: Duration,
    /// Pause after a rate-limited attempt.
    pub rate_limit_pause: Duration,
}

impl Default for PostingSchedule {
    fn default() -> Self {
        Self {
            daily_limit: 5,
            post_interval: Duration::from_secs(60 * 60),
            rate_limit_pause: Duration::from_secs(15 * 60),
        }
    }
}

/// Outcome counts for one cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub headlines_fetched: usize,
    pub posted: usize,
    pub duplicates_skipped: usize,
    pub rate_limited: usize,
    pub failed: usize,
}

/// Publishes tweets for `headlines`, recording each success in `posted_tweets`.
///
/// Stops once `schedule.daily_limit` posts succeed. A composed tweet already in the
/// record is skipped and does not count. A rate-limited attempt waits
/// `schedule.rate_limit_pause` and moves on; any other failure is logged and skipped.
/// Neither kind of failure is recorded.
pub async fn publish_headlines<P, R>(
    headlines: &[String],
    publisher: &P,
    posted_tweets: &mut PostedTweets,
    schedule: &PostingSchedule,
    rng: &mut R,
) -> RunReport
where
    P: TweetPublisher + ?Sized,
    R: Rng + ?Sized,
{
    let mut report = RunReport {
        headlines_fetched: headlines.len(),
        ..RunReport::default()
    };

    for headline in headlines {
        if report.posted >= schedule.daily_limit {
            info!(
                "Daily limit of {} tweets reached, stopping",
                schedule.daily_limit
            );
            break;
        }

        let tweet_text = compose_tweet_with(headline, rng);

        if posted_tweets.contains(&tweet_text) {
            report.duplicates_skipped += 1;
            continue;
        }

        match publisher.publish(&tweet_text).await {
            Ok(()) => {
                info!("Posted a new tech tweet.");
                posted_tweets.insert(tweet_text);
                report.posted += 1;
                tokio::time::sleep(schedule.post_interval).await;
            }
            Err(e) if e.is_rate_limited() => {
                warn!(
                    "Rate limit reached. Pausing for {} minutes.",
                    schedule.rate_limit_pause.as_secs() / 60
                );
                report.rate_limited += 1;
                tokio::time::sleep(schedule.rate_limit_pause).await;
            }
            Err(e) => {
                error!("Error posting to Twitter: {}", e);
                report.failed += 1;
            }
        }
    }

    report
}

/// Runs one full cycle: load record, fetch, publish, save.
///
/// The record is saved whenever the fetch succeeds, even if nothing new was posted.
///
/// # Returns
///
/// - `Ok(RunReport)`: Counts for the cycle
/// - `Err(BoxError)`: If the record cannot be read or written, or the fetch fails
///   below the HTTP status level
pub async fn run_posting_cycle<S, P, R>(
    source: &S,
    publisher: &P,
    posted_tweets_path: impl AsRef<Path>,
    schedule: &PostingSchedule,
    rng: &mut R,
) -> Result<RunReport, BoxError>
where
    S: HeadlineSource + ?Sized,
    P: TweetPublisher + ?Sized,
    R: Rng + ?Sized,
{
    let mut posted_tweets = PostedTweets::load(posted_tweets_path).await?;
    let headlines = source.fetch_headlines().await?;

    let report = publish_headlines(&headlines, publisher, &mut posted_tweets, schedule, rng).await;

    posted_tweets.save().await?;

    info!(
        "Cycle finished: {} headlines, {} posted, {} duplicates, {} rate limited, {} failed",
        report.headlines_fetched,
        report.posted,
        report.duplicates_skipped,
        report.rate_limited,
        report.failed
    );
    Ok(report)
}
