use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub backend: BackendConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Log file path. When unset the file lives in the user cache dir.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub messages_path: String,
    pub send_path: String,
    pub request_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_owned(),
            messages_path: "/api/messages".to_owned(),
            send_path: "/api/sendMessage".to_owned(),
            request_timeout_ms: 10_000,
        }
    }
}

impl BackendConfig {
    pub fn messages_url(&self) -> String {
        join_url(&self.base_url, &self.messages_path)
    }

    pub fn send_url(&self) -> String {
        join_url(&self.base_url, &self.send_path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub title: String,
    pub footer: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Chat".to_owned(),
            footer: "chatpane".to_owned(),
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls_point_at_api_endpoints() {
        let backend = BackendConfig::default();

        assert_eq!(backend.messages_url(), "http://127.0.0.1:8000/api/messages");
        assert_eq!(backend.send_url(), "http://127.0.0.1:8000/api/sendMessage");
    }

    #[test]
    fn join_url_tolerates_redundant_slashes() {
        let backend = BackendConfig {
            base_url: "http://chat.local/".to_owned(),
            messages_path: "api/messages".to_owned(),
            ..BackendConfig::default()
        };

        assert_eq!(backend.messages_url(), "http://chat.local/api/messages");
    }
}
