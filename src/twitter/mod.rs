//! Twitter/X API integration module.
//!
//! This module contains the client for posting tweets with OAuth 1.0a User
//! Context authentication and the error type its callers classify.

mod api;
mod tweets;

pub use api::PublishError;
pub use tweets::TwitterClient;

pub(crate) use api::sanitize_for_logging;
