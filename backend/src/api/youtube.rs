use crate::models::ErrorResponse;
use crate::AppState;
use log::{error, info};
use rocket::serde::json::Json;
use rocket::{get, State};
use serde_json::Value;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Forwards a search to the upstream API and relays its JSON body unchanged.
#[get("/search?<q>&<key>")]
pub async fn search_videos(
    q: Option<String>,
    key: Option<String>,
    state: &State<AppState>,
) -> Result<Json<Value>, ErrorResponse> {
    let (query, api_key) = match (non_empty(q), non_empty(key)) {
        (Some(query), Some(api_key)) => (query, api_key),
        _ => return Err(ErrorResponse::missing_params()),
    };

    match state.upstream.search(&query, &api_key).await {
        Ok(body) => {
            info!("Proxied search for \"{query}\"");
            Ok(Json(body))
        }
        Err(e) => {
            error!("YouTube API error for \"{query}\": {e}");
            Err(ErrorResponse::upstream_failed())
        }
    }
}
