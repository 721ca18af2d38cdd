use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

/// Loads `config.toml` and applies command-line overrides on top.
#[derive(Debug, Clone, Default)]
pub struct FileConfigAdapter {
    path: Option<PathBuf>,
    base_url: Option<String>,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        self.base_url = base_url.map(str::to_owned);
        self
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        let mut config = load(self.path.as_deref())?;

        if let Some(base_url) = &self.base_url {
            config.backend.base_url = base_url.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_override_wins_over_defaults() {
        let adapter = FileConfigAdapter::new(Some(Path::new("./missing-config.toml")))
            .with_base_url(Some("http://override:1234"));

        let config = adapter.load().expect("config must load");

        assert_eq!(config.backend.base_url, "http://override:1234");
        assert_eq!(config.logging, AppConfig::default().logging);
    }
}
