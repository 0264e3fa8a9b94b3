use anyhow::{Context, Result};

/// Application configuration loaded once from environment variables and
/// passed explicitly into `AppState`, never re-read ad hoc elsewhere.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the chat-completion upstream. Optional: when absent the
    /// cover-letter endpoint answers with no letter instead of failing.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            anthropic_api_key: None,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
