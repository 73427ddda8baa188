#[macro_use]
extern crate rocket;

mod api;
mod config;
mod models;
mod services;

use crate::config::{create_app_state, create_cors, init_logger, load_environment};
use crate::services::youtube_service::SearchUpstream;
use log::error;
use rocket::{Build, Rocket};

pub struct AppState {
    pub upstream: Box<dyn SearchUpstream>,
}

impl AppState {
    pub fn new<U: SearchUpstream + 'static>(upstream: U) -> Self {
        AppState {
            upstream: Box::new(upstream),
        }
    }
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/api/youtube", routes![api::search_videos])
}

/// Runs the server until shutdown. Launch failures (route collisions, a port
/// already in use) come back as errors so the process exits non-zero.
pub async fn serve(rocket: Rocket<Build>) -> anyhow::Result<()> {
    rocket.launch().await.map_err(|e| {
        let message = format!("Rocket failed to launch: {e}");
        error!("{message}");
        anyhow::anyhow!(message)
    })?;
    Ok(())
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    init_logger();

    let cors = create_cors()?;
    serve(build_rocket(create_app_state()).attach(cors)).await
}
