//! Runtime settings injected by `index.html` as `window.ENV_CONFIG`.

use lazy_static::lazy_static;
use web_sys::window;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_APP_NAME: &str = "YouTube Automation";

lazy_static! {
    pub static ref ENV: EnvConfig = EnvConfig::from_lookup(read_window_env);
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    /// Base URL of the search proxy, without a trailing slash.
    pub backend_url: String,
    pub app_name: String,
    pub debug_mode: bool,
}

impl EnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend_url = lookup("BACKEND_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        EnvConfig {
            backend_url,
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            debug_mode: lookup("DEBUG_MODE")
                .and_then(|flag| flag.trim().parse().ok())
                .unwrap_or(false),
        }
    }
}

fn read_window_env(key: &str) -> Option<String> {
    let window = window()?;
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined, using defaults");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;
    if value.is_undefined() {
        log::warn!("Environment variable '{}' is undefined", key);
    }
    value.as_string()
}
