use std::env;

use tracing::info;

/// Runtime configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the listings REST backend, without a trailing slash.
    pub api_base_url: String,
    /// Address the portal binds to.
    pub bind_addr: String,
}

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

impl AppConfig {
    pub fn load() -> Self {
        Self {
            api_base_url: normalize_base_url(&load_var("PORTAL_API_BASE_URL", DEFAULT_API_BASE_URL)),
            bind_addr: load_var("PORTAL_BIND_ADDR", DEFAULT_BIND_ADDR),
        }
    }
}

fn load_var(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
