//! Record of previously posted tweets.
//!
//! The record is a plain text file with one composed tweet per line. It is loaded
//! once at the start of a run and fully rewritten at the end.

use log::{debug, info};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::BoxError;

/// The set of tweet texts already published, bound to the file it persists to.
#[derive(Debug, Clone)]
pub struct PostedTweets {
    path: PathBuf,
    tweets: HashSet<String>,
}

impl PostedTweets {
    /// Loads the record at `path`.
    ///
    /// A missing file yields an empty set. Trailing whitespace is stripped from each
    /// line and blank lines are skipped.
    ///
    /// # Returns
    ///
    /// - `Ok(PostedTweets)`: The loaded record
    /// - `Err(BoxError)`: If the file exists but cannot be read
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, BoxError> {
        let path = path.as_ref().to_path_buf();

        let tweets = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => parse_lines(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No posted tweets file at {}, starting empty",
                    path.display()
                );
                HashSet::new()
            }
            Err(e) => {
                return Err(format!(
                    "Failed to read posted tweets file {}: {}",
                    path.display(),
                    e
                )
                .into())
            }
        };

        info!(
            "Loaded {} previously posted tweets from {}",
            tweets.len(),
            path.display()
        );
        Ok(Self { path, tweets })
    }

    /// Overwrites the record file with one line per tweet in the set.
    pub async fn save(&self) -> Result<(), BoxError> {
        let mut contents = String::new();
        for tweet in &self.tweets {
            contents.push_str(tweet);
            contents.push('\n');
        }

        tokio::fs::write(&self.path, contents).await.map_err(|e| {
            format!(
                "Failed to write posted tweets file {}: {}",
                self.path.display(),
                e
            )
        })?;

        info!(
            "Saved {} posted tweets to {}",
            self.tweets.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Whether `tweet` has already been posted.
    pub fn contains(&self, tweet: &str) -> bool {
        self.tweets.contains(tweet)
    }

    /// Records a tweet. Returns `false` if it was already present.
    pub fn insert(&mut self, tweet: impl Into<String>) -> bool {
        let tweet = tweet.into();
        debug!("Recording posted tweet ({} chars)", tweet.chars().count());
        self.tweets.insert(tweet)
    }

    /// Number of recorded tweets.
    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }

    /// All recorded tweets.
    pub fn tweets(&self) -> &HashSet<String> {
        &self.tweets
    }
}

fn parse_lines(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let posted = PostedTweets::load(dir.path().join("posted_tweets.txt"))
            .await
            .unwrap();
        assert!(posted.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posted_tweets.txt");

        let mut posted = PostedTweets::load(&path).await.unwrap();
        for i in 0..10 {
            posted.insert(format!("Have you heard about headline {} Tech keeps surprising us! 🤖", i));
        }
        posted.save().await.unwrap();

        let reloaded = PostedTweets::load(&path).await.unwrap();
        assert_eq!(reloaded.len(), 10);
        assert_eq!(reloaded.tweets(), posted.tweets());
    }

    #[tokio::test]
    async fn test_load_strips_trailing_whitespace_and_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posted_tweets.txt");
        std::fs::write(&path, "first tweet  \r\n\nsecond tweet\t\nfirst tweet\n").unwrap();

        let posted = PostedTweets::load(&path).await.unwrap();
        assert_eq!(posted.len(), 2);
        assert!(posted.contains("first tweet"));
        assert!(posted.contains("second tweet"));
    }

    #[tokio::test]
    async fn test_insert_reports_duplicates() {
        let dir = tempdir().unwrap();
        let mut posted = PostedTweets::load(dir.path().join("p.txt")).await.unwrap();
        assert!(posted.insert("a"));
        assert!(!posted.insert("a"));
        assert_eq!(posted.len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_path_is_an_error() {
        let dir = tempdir().unwrap();
        // A directory cannot be read as a file.
        assert!(PostedTweets::load(dir.path()).await.is_err());
    }
}
