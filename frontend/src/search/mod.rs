pub mod api;
pub mod components;
pub mod mock;
pub mod upstream;

use thiserror::Error;

/// Why a live search produced no results. Every variant sends the dashboard
/// into demo data instead of surfacing an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Failed to connect to backend: {0}")]
    Network(String),

    #[error("Search failed: HTTP {0}")]
    Status(u16),

    #[error("Unexpected search response: {0}")]
    Malformed(String),
}
