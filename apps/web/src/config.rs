use anyhow::{Context, Result};

const DEFAULT_MATCH_SERVICE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every setting has a default, so a bare `screener` starts against a local matching service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the resume matching service, without trailing slash.
    pub match_service_url: String,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            match_service_url: normalize_base_url(
                &std::env::var("MATCH_SERVICE_URL")
                    .unwrap_or_else(|_| DEFAULT_MATCH_SERVICE_URL.to_string()),
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
impl Config {
    pub fn for_tests(match_service_url: &str) -> Self {
        Config {
            match_service_url: normalize_base_url(match_service_url),
            port: 0,
            rust_log: "debug".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
