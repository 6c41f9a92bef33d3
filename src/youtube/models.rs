//! YouTube Data API v3 models and data structures.
//!
//! Typed representations of the `channels.list` and `search.list` responses.
//! Fields the operations depend on are required, so a malformed payload fails
//! at deserialization instead of deep inside the caller.

use crate::youtube::error::YouTubeError;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Paged list response wrapper shared by `channels.list` and `search.list`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Response items (omitted by the API when there are none)
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Next page token for pagination
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
    /// Paging information
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

/// Result counts reported by a list call.
#[derive(Debug, Deserialize)]
pub struct PageInfo {
    /// Total number of results matching the request
    #[serde(rename = "totalResults")]
    pub total_results: u64,
}

pub type ChannelListResponse = ApiResponse<ChannelResource>;
pub type SearchListResponse = ApiResponse<ApiSearchItem>;

/// Thumbnail resolutions offered by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailSize {
    #[default]
    Default,
    Medium,
    High,
}

impl ThumbnailSize {
    pub const ALL: [ThumbnailSize; 3] = [Self::Default, Self::Medium, Self::High];

    /// Key of this size inside a `thumbnails` object.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for ThumbnailSize {
    type Err = YouTubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(YouTubeError::InvalidThumbnailSize(other.to_string())),
        }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thumbnail information.
#[derive(Debug, Default, Deserialize)]
pub struct ApiThumbnails {
    /// Default thumbnail
    #[serde(default)]
    pub default: Option<ApiThumbnail>,
    /// Medium thumbnail
    #[serde(default)]
    pub medium: Option<ApiThumbnail>,
    /// High thumbnail
    #[serde(default)]
    pub high: Option<ApiThumbnail>,
}

impl ApiThumbnails {
    pub fn get(&self, size: ThumbnailSize) -> Option<&ApiThumbnail> {
        match size {
            ThumbnailSize::Default => self.default.as_ref(),
            ThumbnailSize::Medium => self.medium.as_ref(),
            ThumbnailSize::High => self.high.as_ref(),
        }
    }
}

/// Single thumbnail.
#[derive(Debug, Deserialize)]
pub struct ApiThumbnail {
    /// Thumbnail URL
    pub url: String,
}

/// A channel resource as returned by `channels.list`.
#[derive(Debug, Deserialize)]
pub struct ChannelResource {
    /// Channel ID
    pub id: String,
    /// Basic details (title, description, thumbnails)
    pub snippet: ChannelSnippet,
    #[serde(rename = "brandingSettings", default)]
    pub branding_settings: Option<BrandingSettings>,
    #[serde(rename = "contentDetails", default)]
    pub content_details: Option<ChannelContentDetails>,
    #[serde(default)]
    pub statistics: Option<ChannelStatistics>,
    #[serde(rename = "topicDetails", default)]
    pub topic_details: Option<TopicDetails>,
}

/// Channel snippet.
#[derive(Debug, Deserialize)]
pub struct ChannelSnippet {
    /// Channel title
    pub title: String,
    /// Channel description
    #[serde(default)]
    pub description: String,
    /// Handle such as `@google`
    #[serde(rename = "customUrl", default)]
    pub custom_url: Option<String>,
    /// Channel creation date
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Channel avatar in several sizes
    pub thumbnails: ApiThumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub struct BrandingSettings {
    #[serde(default)]
    pub channel: Option<ChannelBranding>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChannelBranding {
    /// Space-separated keywords set by the channel owner
    #[serde(default)]
    pub keywords: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists", default)]
    pub related_playlists: Option<RelatedPlaylists>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RelatedPlaylists {
    /// Playlist holding every upload of the channel
    #[serde(default)]
    pub uploads: Option<String>,
}

/// Channel statistics. The API sends counts as decimal strings.
#[derive(Debug, Default, Deserialize)]
pub struct ChannelStatistics {
    #[serde(rename = "viewCount", default)]
    pub view_count: Option<String>,
    #[serde(rename = "subscriberCount", default)]
    pub subscriber_count: Option<String>,
    #[serde(rename = "hiddenSubscriberCount", default)]
    pub hidden_subscriber_count: bool,
    #[serde(rename = "videoCount", default)]
    pub video_count: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopicDetails {
    /// Wikipedia URLs describing the channel's content
    #[serde(rename = "topicCategories", default)]
    pub topic_categories: Vec<String>,
}

/// Item of a `search.list` response.
#[derive(Debug, Deserialize)]
pub struct ApiSearchItem {
    pub id: ResourceId,
    pub snippet: ApiSearchSnippet,
}

/// Identifier of a search result, tagged by its `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind")]
pub enum ResourceId {
    #[serde(rename = "youtube#video")]
    Video {
        #[serde(rename = "videoId")]
        video_id: String,
    },
    #[serde(rename = "youtube#channel")]
    Channel {
        #[serde(rename = "channelId")]
        channel_id: String,
    },
    #[serde(rename = "youtube#playlist")]
    Playlist {
        #[serde(rename = "playlistId")]
        playlist_id: String,
    },
    /// Any kind this client does not categorize
    #[serde(other)]
    Other,
}

impl ResourceId {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Video { video_id } => Some(video_id),
            Self::Channel { channel_id } => Some(channel_id),
            Self::Playlist { playlist_id } => Some(playlist_id),
            Self::Other => None,
        }
    }
}

/// Search result snippet.
#[derive(Debug, Deserialize)]
pub struct ApiSearchSnippet {
    /// Result title
    pub title: String,
    #[serde(default)]
    pub thumbnails: ApiThumbnails,
}

/// A categorized search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub id: ResourceId,
}

impl SearchResult {
    /// Render as `title (id)`.
    ///
    /// # Returns
    /// * `Option<String>` - Rendered line, `None` for uncategorized kinds
    pub fn display_line(&self) -> Option<String> {
        self.id.as_str().map(|id| format!("{} ({})", self.title, id))
    }
}

impl From<ApiSearchItem> for SearchResult {
    fn from(item: ApiSearchItem) -> Self {
        Self {
            title: item.snippet.title,
            id: item.id,
        }
    }
}
