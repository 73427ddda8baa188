//! Typed view of the search response relayed by the backend proxy.

use crate::models::Video;
use crate::search::SearchError;
use crate::utils::format_locale_date;
use serde::Deserialize;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: ItemId,
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Plain(String),
    Resource {
        #[serde(rename = "videoId")]
        video_id: Option<String>,
    },
}

impl ItemId {
    fn as_video_id(&self) -> Option<&str> {
        let id = match self {
            ItemId::Plain(id) => Some(id.as_str()),
            ItemId::Resource { video_id } => video_id.as_deref(),
        };
        id.filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub channel_title: String,
    pub published_at: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize, Default)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    fn best_url(&self) -> String {
        self.medium
            .as_ref()
            .or(self.default.as_ref())
            .or(self.high.as_ref())
            .map(|t| t.url.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

impl SearchItem {
    /// `None` when the item carries no usable video id.
    pub fn into_video(self) -> Option<Video> {
        let id = self.id.as_video_id()?.to_string();
        Some(Video {
            id,
            thumbnail: self.snippet.thumbnails.best_url(),
            title: self.snippet.title,
            channel: self.snippet.channel_title,
            views: NOT_AVAILABLE.to_string(),
            published_at: format_locale_date(&self.snippet.published_at),
            duration: NOT_AVAILABLE.to_string(),
        })
    }
}

pub fn parse_search_response(body: &str) -> Result<Vec<Video>, SearchError> {
    let response: SearchListResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Malformed(e.to_string()))?;

    Ok(response
        .items
        .into_iter()
        .filter_map(|item| {
            let video = item.into_video();
            if video.is_none() {
                log::warn!("Skipping search item without a video id");
            }
            video
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "kind": "youtube#searchListResponse",
        "items": [
            {
                "id": { "kind": "youtube#video", "videoId": "abc123def45" },
                "snippet": {
                    "title": "Cats being cats",
                    "channelTitle": "Cat Channel",
                    "publishedAt": "2024-01-05T12:00:00Z",
                    "thumbnails": {
                        "default": { "url": "https://i.ytimg.com/vi/abc/default.jpg" },
                        "medium": { "url": "https://i.ytimg.com/vi/abc/mqdefault.jpg" }
                    }
                }
            },
            {
                "id": "plainid",
                "snippet": {
                    "title": "Plain id",
                    "channelTitle": "Someone",
                    "publishedAt": "2023-11-23T08:30:00Z",
                    "thumbnails": { "high": { "url": "https://i.ytimg.com/vi/p/hq.jpg" } }
                }
            },
            {
                "id": { "kind": "youtube#channel", "channelId": "UC123" },
                "snippet": {
                    "title": "A channel",
                    "channelTitle": "A channel",
                    "publishedAt": "2023-01-01T00:00:00Z"
                }
            }
        ]
    }"#;

    #[test]
    fn test_maps_items_into_videos() {
        let videos = parse_search_response(BODY).unwrap();

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].id, "abc123def45");
        assert_eq!(videos[0].title, "Cats being cats");
        assert_eq!(videos[0].channel, "Cat Channel");
        assert_eq!(videos[0].thumbnail, "https://i.ytimg.com/vi/abc/mqdefault.jpg");
        assert_eq!(videos[0].published_at, "1/5/2024");
        assert_eq!(videos[0].views, "N/A");
        assert_eq!(videos[0].duration, "N/A");

        assert_eq!(videos[1].id, "plainid");
        assert_eq!(videos[1].thumbnail, "https://i.ytimg.com/vi/p/hq.jpg");
    }

    #[test]
    fn test_empty_item_list_is_success() {
        assert_eq!(parse_search_response(r#"{"items": []}"#), Ok(vec![]));
    }

    #[test]
    fn test_error_body_is_malformed() {
        let result = parse_search_response(r#"{"error": "Failed to fetch videos"}"#);
        assert!(matches!(result, Err(SearchError::Malformed(_))));
    }

    #[test]
    fn test_missing_snippet_field_is_malformed() {
        let body = r#"{"items": [{"id": "x", "snippet": {"title": "t"}}]}"#;
        assert!(matches!(
            parse_search_response(body),
            Err(SearchError::Malformed(_))
        ));
    }
}
