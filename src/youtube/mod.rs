//! YouTube Data API v3 integration module.
//!
//! Provides the authenticated client, the channel facade and keyword search.

pub mod api;
pub mod channel;
pub mod client;
pub mod error;
pub mod models;
pub mod search;

pub use channel::Channel;
pub use client::YouTubeClient;
pub use error::YouTubeError;
pub use models::ThumbnailSize;
pub use search::search;
