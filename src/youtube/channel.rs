//! Read-only view of a single YouTube channel.

use crate::youtube::api::{ChannelListRequest, SearchRequest, YouTubeApi};
use crate::youtube::error::{Result, YouTubeError};
use crate::youtube::models::{ChannelResource, ThumbnailSize};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Resource parts fetched once when a [`Channel`] is constructed.
pub const CHANNEL_PARTS: &str =
    "id,snippet,brandingSettings,contentDetails,invideoPromotion,statistics,topicDetails";

/// Largest page `search.list` serves.
pub const MAX_PAGE_SIZE: u32 = 50;

/// A channel whose metadata was fetched at construction.
///
/// Borrows the API handle for follow-up calls (video listing).
#[derive(Debug)]
pub struct Channel<'a, A> {
    api: &'a A,
    channel_id: String,
    record: ChannelResource,
}

impl<'a, A: YouTubeApi> Channel<'a, A> {
    /// Fetch the metadata of `channel_id`.
    ///
    /// # Arguments
    /// * `api` - API handle
    /// * `channel_id` - YouTube channel ID (`UC...`)
    ///
    /// # Returns
    /// * `Result<Channel>` - Channel with cached metadata, or
    ///   [`YouTubeError::ChannelNotFound`] unless exactly one channel matched
    pub async fn new(api: &'a A, channel_id: impl Into<String>) -> Result<Self> {
        let channel_id = channel_id.into();
        let request = ChannelListRequest {
            part: CHANNEL_PARTS.to_string(),
            id: channel_id.clone(),
        };
        let response = api.list_channels(&request).await?;

        let total_results = response.page_info.total_results;
        let mut items = response.items;
        if total_results != 1 || items.len() != 1 {
            return Err(YouTubeError::ChannelNotFound {
                channel_id,
                total_results,
            });
        }
        let record = items.remove(0);
        info!(channel_id = %record.id, title = %record.snippet.title, "Loaded channel");

        Ok(Self {
            api,
            channel_id,
            record,
        })
    }

    /// URL of the channel avatar at `size`, from the cached metadata.
    pub fn thumbnail_url(&self, size: ThumbnailSize) -> Result<&str> {
        self.record
            .snippet
            .thumbnails
            .get(size)
            .map(|t| t.url.as_str())
            .ok_or(YouTubeError::MissingField("snippet.thumbnails"))
    }

    /// Medium thumbnail URLs of the channel's videos, newest upload first.
    ///
    /// # Arguments
    /// * `n` - Number of videos wanted
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Thumbnail URLs
    ///
    /// # Details
    /// Pages through `search.list` (`type=video`, `order=date`) asking for
    /// `min(50, n - count)` items per page, where `count` grows by 50 per page
    /// regardless of how many items the page held. The first page is always
    /// requested, and paging continues while `count <= n` and the service
    /// hands out a continuation token. A final page may therefore be requested
    /// once `count == n`, with a page size of zero.
    pub async fn video_thumbnail_urls(&self, n: u32) -> Result<Vec<String>> {
        let mut count: u32 = 0;
        let mut page_token: Option<String> = None;
        let mut urls = Vec::new();

        while count <= n {
            let request = SearchRequest {
                part: "snippet".to_string(),
                channel_id: Some(self.channel_id.clone()),
                max_results: (n - count).min(MAX_PAGE_SIZE),
                page_token: page_token.take(),
                order: Some("date".to_string()),
                resource_type: Some("video".to_string()),
                ..SearchRequest::default()
            };
            let page = self.api.search(&request).await?;
            debug!(
                channel_id = %self.channel_id,
                items = page.items.len(),
                "Fetched channel video page"
            );

            for item in &page.items {
                let thumbnail = item
                    .snippet
                    .thumbnails
                    .medium
                    .as_ref()
                    .ok_or(YouTubeError::MissingField("snippet.thumbnails.medium"))?;
                urls.push(thumbnail.url.clone());
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
            count = count.saturating_add(MAX_PAGE_SIZE);
        }

        Ok(urls)
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn title(&self) -> &str {
        &self.record.snippet.title
    }

    pub fn description(&self) -> &str {
        &self.record.snippet.description
    }

    pub fn custom_url(&self) -> Option<&str> {
        self.record.snippet.custom_url.as_deref()
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.record.snippet.published_at
    }

    pub fn keywords(&self) -> Option<&str> {
        self.record
            .branding_settings
            .as_ref()?
            .channel
            .as_ref()?
            .keywords
            .as_deref()
    }

    /// ID of the playlist holding all uploads.
    pub fn uploads_playlist_id(&self) -> Option<&str> {
        self.record
            .content_details
            .as_ref()?
            .related_playlists
            .as_ref()?
            .uploads
            .as_deref()
    }

    /// Subscriber count, `None` when hidden by the owner or absent.
    pub fn subscriber_count(&self) -> Option<u64> {
        let stats = self.record.statistics.as_ref()?;
        if stats.hidden_subscriber_count {
            return None;
        }
        parse_count(stats.subscriber_count.as_deref())
    }

    pub fn video_count(&self) -> Option<u64> {
        parse_count(self.record.statistics.as_ref()?.video_count.as_deref())
    }

    pub fn view_count(&self) -> Option<u64> {
        parse_count(self.record.statistics.as_ref()?.view_count.as_deref())
    }

    pub fn topic_categories(&self) -> &[String] {
        self.record
            .topic_details
            .as_ref()
            .map(|t| t.topic_categories.as_slice())
            .unwrap_or_default()
    }
}

fn parse_count(value: Option<&str>) -> Option<u64> {
    value?.parse().ok()
}
