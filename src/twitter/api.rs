//! Core Twitter API utilities.
//!
//! This module contains the publish error type and helpers shared by the
//! Twitter API calls.

use reqwest::StatusCode;
use thiserror::Error;

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_len`: Maximum length in bytes before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.len() > max_len {
        let mut cut = max_len;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... [truncated, {} total bytes]",
            &sanitized[..cut],
            text.len()
        )
    } else {
        sanitized
    }
}

/// Failure while publishing a tweet.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The API answered with a non-success status.
    #[error("Twitter API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
    /// The request never produced a response.
    #[error("Twitter request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Anything else, such as a signing failure or a scripted test error.
    #[error("{0}")]
    Other(String),
}

impl PublishError {
    /// Whether this failure means the account is being rate limited.
    ///
    /// True for HTTP 429 and for any error whose message mentions "rate limit",
    /// case-insensitively.
    pub fn is_rate_limited(&self) -> bool {
        if let PublishError::Api { status, .. } = self {
            if *status == StatusCode::TOO_MANY_REQUESTS {
                return true;
            }
        }
        self.to_string().to_lowercase().contains("rate limit")
    }
}

/// Pulls a human-readable message out of a Twitter API v2 error body.
///
/// v2 errors use `{"title", "detail"}`, v1.1 errors use `{"errors": [{"message"}]}`.
/// Falls back to the sanitized raw body.
pub(crate) fn extract_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = json.get("detail").and_then(|v| v.as_str()) {
            return detail.to_string();
        }
        if let Some(message) = json
            .get("errors")
            .and_then(|v| v.get(0))
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
        {
            return message.to_string();
        }
        if let Some(title) = json.get("title").and_then(|v| v.as_str()) {
            return title.to_string();
        }
    }
    sanitize_for_logging(body, 200)
}
