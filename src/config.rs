use std::env;
use std::time::Duration;

use crate::services::session_service::SessionSettings;

pub const DEFAULT_QUIZ_SOURCE_URL: &str = "https://api.jsonserve.com/Uw5CrX";

#[derive(Clone, Debug)]
pub struct Config {
    pub quiz_source_url: String,
    pub quiz_file: Option<String>,
    pub reveal_duration_ms: u64,
    pub load_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            quiz_source_url: env::var("QUIZ_SOURCE_URL")
                .unwrap_or_else(|_| DEFAULT_QUIZ_SOURCE_URL.to_string()),
            quiz_file: env::var("QUIZ_FILE").ok().filter(|p| !p.trim().is_empty()),
            reveal_duration_ms: env::var("REVEAL_DURATION_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(1500),
            load_timeout_secs: env::var("LOAD_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Timing knobs handed to the session service. A zero load timeout disables the timeout.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            reveal_duration: Duration::from_millis(self.reveal_duration_ms),
            load_timeout: (self.load_timeout_secs > 0)
                .then(|| Duration::from_secs(self.load_timeout_secs)),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            quiz_source_url: "http://127.0.0.1:9/quiz".to_string(),
            quiz_file: None,
            reveal_duration_ms: 0,
            load_timeout_secs: 1,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
