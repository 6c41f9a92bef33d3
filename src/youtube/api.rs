//! Remote methods used by the channel facade and the search procedure.

use crate::youtube::error::Result;
use crate::youtube::models::{ChannelListResponse, SearchListResponse};
use std::future::Future;

/// Parameters of a `channels.list` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelListRequest {
    /// Comma-separated resource parts
    pub part: String,
    /// Channel ID to describe
    pub id: String,
}

/// Parameters of a `search.list` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchRequest {
    /// Comma-separated resource parts
    pub part: String,
    /// Free-text query
    pub q: Option<String>,
    /// Restrict results to one channel
    pub channel_id: Option<String>,
    /// Page size, 0..=50
    pub max_results: u32,
    /// Continuation token from the previous page
    pub page_token: Option<String>,
    /// Result ordering, e.g. `date`
    pub order: Option<String>,
    /// Resource type filter, e.g. `video`
    pub resource_type: Option<String>,
}

impl SearchRequest {
    /// Query-string pairs, without the API key.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", self.part.clone()),
            ("maxResults", self.max_results.to_string()),
        ];
        let optional = [
            ("q", &self.q),
            ("channelId", &self.channel_id),
            ("pageToken", &self.page_token),
            ("order", &self.order),
            ("type", &self.resource_type),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                params.push((name, value.clone()));
            }
        }
        params
    }
}

/// The subset of the YouTube Data API v3 this crate talks to.
///
/// Implemented over HTTPS by [`crate::youtube::YouTubeClient`].
pub trait YouTubeApi {
    /// `channels.list`
    fn list_channels(
        &self,
        request: &ChannelListRequest,
    ) -> impl Future<Output = Result<ChannelListResponse>> + Send;

    /// `search.list`
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<SearchListResponse>> + Send;
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted in-memory API used by unit tests.

    use super::*;
    use crate::youtube::error::YouTubeError;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct FakeApi {
        channel_replies: Mutex<VecDeque<Result<ChannelListResponse>>>,
        search_replies: Mutex<VecDeque<Result<SearchListResponse>>>,
        pub channel_requests: Mutex<Vec<ChannelListRequest>>,
        pub search_requests: Mutex<Vec<SearchRequest>>,
    }

    impl FakeApi {
        pub fn push_channels_json(&self, json: &str) {
            let parsed = serde_json::from_str(json).expect("valid channel fixture");
            self.channel_replies.lock().unwrap().push_back(Ok(parsed));
        }

        pub fn push_search_json(&self, json: &str) {
            let parsed = serde_json::from_str(json).expect("valid search fixture");
            self.search_replies.lock().unwrap().push_back(Ok(parsed));
        }

        pub fn push_search_error(&self, err: YouTubeError) {
            self.search_replies.lock().unwrap().push_back(Err(err));
        }

        pub fn search_requests(&self) -> Vec<SearchRequest> {
            self.search_requests.lock().unwrap().clone()
        }
    }

    impl YouTubeApi for FakeApi {
        async fn list_channels(&self, request: &ChannelListRequest) -> Result<ChannelListResponse> {
            self.channel_requests.lock().unwrap().push(request.clone());
            self.channel_replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected channels.list call")
        }

        async fn search(&self, request: &SearchRequest) -> Result<SearchListResponse> {
            self.search_requests.lock().unwrap().push(request.clone());
            self.search_replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected search.list call")
        }
    }

    /// A `search.list` page of video results with medium thumbnails.
    pub fn video_page(ids: &[&str], next_page_token: Option<&str>) -> String {
        let items: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": { "kind": "youtube#video", "videoId": id },
                    "snippet": {
                        "title": format!("Video {id}"),
                        "thumbnails": {
                            "medium": {
                                "url": format!("https://i.ytimg.com/vi/{id}/mqdefault.jpg")
                            }
                        }
                    }
                })
            })
            .collect();
        let mut page = serde_json::json!({
            "pageInfo": { "totalResults": 500 },
            "items": items,
        });
        if let Some(token) = next_page_token {
            page["nextPageToken"] = serde_json::Value::from(token);
        }
        page.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_skip_unset_fields() {
        let request = SearchRequest {
            part: "id,snippet".to_string(),
            q: Some("Google".to_string()),
            max_results: 25,
            ..SearchRequest::default()
        };
        assert_eq!(
            request.query_params(),
            vec![
                ("part", "id,snippet".to_string()),
                ("maxResults", "25".to_string()),
                ("q", "Google".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_channel_page() {
        let request = SearchRequest {
            part: "snippet".to_string(),
            channel_id: Some("UC1".to_string()),
            max_results: 50,
            page_token: Some("CDIQAA".to_string()),
            order: Some("date".to_string()),
            resource_type: Some("video".to_string()),
            ..SearchRequest::default()
        };
        let params = request.query_params();
        assert!(params.contains(&("channelId", "UC1".to_string())));
        assert!(params.contains(&("pageToken", "CDIQAA".to_string())));
        assert!(params.contains(&("order", "date".to_string())));
        assert!(params.contains(&("type", "video".to_string())));
        assert!(!params.iter().any(|(name, _)| *name == "q"));
    }
}
