//! Tweet text composition.
//!
//! Wraps a headline between a randomly chosen opening phrase and a randomly
//! chosen closing phrase.

use rand::seq::SliceRandom;
use rand::Rng;

/// Phrases placed before the headline.
pub const OPENING_PHRASES: [&str; 10] = [
    "Have you heard about",
    "Recently, I came across",
    "Today’s buzz in tech is all about",
    "Can you believe",
    "Breaking news in tech:",
    "Exciting tech updates:",
    "Guess what’s new in technology?",
    "Let’s talk tech—have you seen",
    "Unbelievable progress in tech!",
    "Here's what's making waves in tech:",
];

/// Phrases placed after the headline, each ending in an emoji.
pub const CLOSING_PHRASES: [&str; 5] = [
    "This is quite a breakthrough! 🌟",
    "Amazing strides in technology! 🚀",
    "What an exciting future ahead! 💡",
    "The future feels closer than ever! ⚙️",
    "Tech keeps surprising us! 🤖",
];

/// Composes `"<opening> <headline> <closing>"` using `rng` to pick both phrases.
///
/// The result is not checked against the 280 character tweet limit.
pub fn compose_tweet_with<R: Rng + ?Sized>(headline: &str, rng: &mut R) -> String {
    let opening = OPENING_PHRASES.choose(rng).copied().unwrap_or_default();
    let closing = CLOSING_PHRASES.choose(rng).copied().unwrap_or_default();
    format!("{} {} {}", opening, headline, closing)
}

/// Composes a tweet using the thread-local RNG.
pub fn compose_tweet(headline: &str) -> String {
    compose_tweet_with(headline, &mut rand::thread_rng())
}
