//! Keyword search grouped by result kind.

use crate::youtube::api::{SearchRequest, YouTubeApi};
use crate::youtube::error::Result;
use crate::youtube::models::{ResourceId, SearchResult};
use std::fmt;
use tracing::{info, warn};

/// Search results split into videos, channels and playlists.
///
/// Each entry is rendered as `title (id)`, in the order the service returned it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub videos: Vec<String>,
    pub channels: Vec<String>,
    pub playlists: Vec<String>,
}

impl SearchResults {
    /// Partition results by kind, skipping kinds with no category.
    pub fn from_results(results: impl IntoIterator<Item = SearchResult>) -> Self {
        let mut grouped = Self::default();
        for result in results {
            let Some(line) = result.display_line() else {
                warn!(title = %result.title, "Skipping search result of unknown kind");
                continue;
            };
            match result.id {
                ResourceId::Video { .. } => grouped.videos.push(line),
                ResourceId::Channel { .. } => grouped.channels.push(line),
                ResourceId::Playlist { .. } => grouped.playlists.push(line),
                ResourceId::Other => {}
            }
        }
        grouped
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty() && self.channels.is_empty() && self.playlists.is_empty()
    }
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Videos:\n{}\n", self.videos.join("\n"))?;
        writeln!(f, "Channels:\n{}\n", self.channels.join("\n"))?;
        writeln!(f, "Playlists:\n{}", self.playlists.join("\n"))
    }
}

/// Run one bounded keyword search.
///
/// # Arguments
/// * `api` - API handle
/// * `query` - Search term
/// * `max_results` - Page size requested from the service
///
/// # Returns
/// * `Result<SearchResults>` - Grouped results, or the API error unchanged
pub async fn search<A: YouTubeApi>(
    api: &A,
    query: &str,
    max_results: u32,
) -> Result<SearchResults> {
    let request = SearchRequest {
        part: "id,snippet".to_string(),
        q: Some(query.to_string()),
        max_results,
        ..SearchRequest::default()
    };
    let response = api.search(&request).await?;
    info!(query, items = response.items.len(), "Search completed");

    Ok(SearchResults::from_results(
        response.items.into_iter().map(SearchResult::from),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::api::fake::FakeApi;
    use crate::youtube::error::YouTubeError;

    const MIXED_RESULTS: &str = r#"{
        "pageInfo": { "totalResults": 1000, "resultsPerPage": 5 },
        "items": [
            { "id": { "kind": "youtube#playlist", "playlistId": "PL1" }, "snippet": { "title": "Playlist One" } },
            { "id": { "kind": "youtube#video", "videoId": "vid1" }, "snippet": { "title": "First Video" } },
            { "id": { "kind": "youtube#channel", "channelId": "UC1" }, "snippet": { "title": "Some Channel" } },
            { "id": { "kind": "youtube#unknownThing" }, "snippet": { "title": "Ignored" } },
            { "id": { "kind": "youtube#video", "videoId": "vid2" }, "snippet": { "title": "Second Video" } }
        ]
    }"#;

    #[tokio::test]
    async fn test_search_partitions_by_kind() {
        let api = FakeApi::default();
        api.push_search_json(MIXED_RESULTS);

        let results = search(&api, "Google", 25).await.unwrap();
        assert_eq!(
            results.videos,
            vec!["First Video (vid1)".to_string(), "Second Video (vid2)".to_string()]
        );
        assert_eq!(results.channels, vec!["Some Channel (UC1)".to_string()]);
        assert_eq!(results.playlists, vec!["Playlist One (PL1)".to_string()]);
    }

    #[tokio::test]
    async fn test_search_request_parameters() {
        let api = FakeApi::default();
        api.push_search_json(r#"{ "pageInfo": { "totalResults": 0 } }"#);

        let results = search(&api, "rust lang", 7).await.unwrap();
        assert!(results.is_empty());

        let requests = api.search_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].q.as_deref(), Some("rust lang"));
        assert_eq!(requests[0].part, "id,snippet");
        assert_eq!(requests[0].max_results, 7);
        assert!(requests[0].channel_id.is_none());
        assert!(requests[0].page_token.is_none());
    }

    #[tokio::test]
    async fn test_search_http_error_is_reported() {
        let api = FakeApi::default();
        api.push_search_error(YouTubeError::Http {
            status: 403,
            body: "quota exceeded".to_string(),
        });

        let err = search(&api, "Google", 25).await.unwrap_err();
        let report = err.to_string();
        assert!(report.contains("403"));
        assert!(report.contains("quota exceeded"));
        assert_eq!(api.search_requests().len(), 1);
    }

    #[test]
    fn test_display_layout() {
        let results = SearchResults {
            videos: vec!["A (1)".to_string(), "B (2)".to_string()],
            channels: vec!["C (3)".to_string()],
            playlists: vec![],
        };
        assert_eq!(
            results.to_string(),
            "Videos:\nA (1)\nB (2)\n\nChannels:\nC (3)\n\nPlaylists:\n\n"
        );
    }
}
