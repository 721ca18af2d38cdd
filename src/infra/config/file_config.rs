use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, BackendConfig, LogConfig, UiConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub backend: Option<FileBackendConfig>,
    pub ui: Option<FileUiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(backend) = self.backend {
            backend.merge_into(&mut config.backend);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileBackendConfig {
    pub base_url: Option<String>,
    pub messages_path: Option<String>,
    pub send_path: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

impl FileBackendConfig {
    fn merge_into(self, config: &mut BackendConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        if let Some(messages_path) = self.messages_path {
            config.messages_path = messages_path;
        }

        if let Some(send_path) = self.send_path {
            config.send_path = send_path;
        }

        if let Some(timeout_ms) = self.request_timeout_ms {
            config.request_timeout_ms = timeout_ms;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub title: Option<String>,
    pub footer: Option<String>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(title) = self.title {
            config.title = title;
        }

        if let Some(footer) = self.footer {
            config.footer = footer;
        }
    }
}
