//! Error types for YouTube Data API operations.

use thiserror::Error;

/// Errors raised by the client factory, the channel facade and the search procedure.
#[derive(Debug, Error)]
pub enum YouTubeError {
    /// No API key was configured or supplied.
    #[error("YouTube API key is required. Set api_key in config.jsonc or pass --api-key")]
    MissingApiKey,

    /// The describe-channel call did not return exactly one channel.
    #[error("This channel id is not found: {channel_id} ({total_results} matching results)")]
    ChannelNotFound {
        channel_id: String,
        total_results: u64,
    },

    /// Thumbnail size outside of `default`, `medium`, `high`.
    #[error("Unsupported thumbnail size '{0}' (expected default, medium or high)")]
    InvalidThumbnailSize(String),

    /// The API answered with a non-success status.
    #[error("An HTTP error {status} occurred:\n{body}")]
    Http { status: u16, body: String },

    /// Transport-level failure (connect, timeout, TLS, ...).
    #[error("Request to YouTube API failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body did not match the expected structure.
    #[error("Failed to parse {endpoint} response: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A field that is optional on the wire is required by the operation.
    #[error("Missing field `{0}` in YouTube API response")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, YouTubeError>;
