use crate::env_variable_utils::ENV;
use crate::models::Video;
use crate::search::upstream::parse_search_response;
use crate::search::SearchError;
use gloo_net::http::Request;

pub fn search_url(backend_url: &str, query: &str, api_key: &str) -> String {
    format!(
        "{backend_url}/api/youtube/search?q={}&key={}",
        urlencoding::encode(query),
        urlencoding::encode(api_key)
    )
}

/// Runs one search through the backend proxy.
pub async fn search_videos(query: &str, api_key: &str) -> Result<Vec<Video>, SearchError> {
    let url = search_url(&ENV.backend_url, query, api_key);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| SearchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(SearchError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| SearchError::Network(e.to_string()))?;
    parse_search_response(&body)
}
