use crate::config::YOUTUBE_SEARCH_URL;
use log::info;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use url::Url;

// Fixed page size requested from the upstream search endpoint.
pub const MAX_RESULTS: u32 = 24;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream responded with status {0}")]
    Status(u16),

    #[error("Upstream body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can run a video search against the upstream API and hand back
/// its raw JSON body.
#[rocket::async_trait]
pub trait SearchUpstream: Send + Sync {
    async fn search(&self, query: &str, api_key: &str) -> Result<Value, UpstreamError>;
}

/// Build the upstream search URL for a query.
///
/// Documentation: https://developers.google.com/youtube/v3/docs/search/list
pub fn build_search_url(base_url: &str, query: &str, api_key: &str) -> Result<Url, UpstreamError> {
    let mut url = Url::parse(base_url)?;
    url.query_pairs_mut()
        .append_pair("part", "snippet")
        .append_pair("q", query)
        .append_pair("type", "video")
        .append_pair("maxResults", &MAX_RESULTS.to_string())
        .append_pair("key", api_key);
    Ok(url)
}

fn decode_body(raw: &str) -> Result<Value, UpstreamError> {
    Ok(serde_json::from_str(raw)?)
}

pub struct YouTubeSearchClient {
    client: Client,
    search_url: String,
}

impl Default for YouTubeSearchClient {
    fn default() -> Self {
        Self::new(YOUTUBE_SEARCH_URL.clone())
    }
}

impl YouTubeSearchClient {
    pub fn new(search_url: String) -> Self {
        YouTubeSearchClient {
            client: Client::new(),
            search_url,
        }
    }
}

#[rocket::async_trait]
impl SearchUpstream for YouTubeSearchClient {
    async fn search(&self, query: &str, api_key: &str) -> Result<Value, UpstreamError> {
        let url = build_search_url(&self.search_url, query, api_key)?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = decode_body(&response.text().await?)?;
        info!(
            "Upstream search for \"{query}\" returned {} items",
            body["items"].as_array().map_or(0, |items| items.len())
        );
        Ok(body)
    }
}
