//! Error types for feed access.

use thiserror::Error;

/// Errors that can occur while fetching or extracting a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Connection, DNS, timeout or body read failure.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    /// The body was not valid JSON.
    #[error("failed to decode JSON from {url}: {message}")]
    Decode { url: String, message: String },

    /// No feed is registered under this name.
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// A row feed returned no rows.
    #[error("{feed} feed is empty")]
    EmptyFeed { feed: &'static str },

    /// The latest row of a row feed is too short.
    #[error("{feed} feed row has {found} fields, expected at least {expected}")]
    MalformedRow {
        feed: &'static str,
        expected: usize,
        found: usize,
    },

    /// The payload is not laid out the way the feed's shape requires.
    #[error("{feed} feed payload is not {expected}")]
    UnexpectedShape {
        feed: &'static str,
        expected: &'static str,
    },
}

impl FeedError {
    pub(crate) fn transport(url: &str, err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            err.to_string()
        };
        FeedError::Transport {
            url: url.to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_url() {
        let err = FeedError::HttpStatus {
            url: "http://example.test/kp.json".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "http://example.test/kp.json returned HTTP status 503"
        );
    }

    #[test]
    fn test_malformed_row_message() {
        let err = FeedError::MalformedRow {
            feed: "plasma",
            expected: 4,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "plasma feed row has 2 fields, expected at least 4"
        );
    }
}
