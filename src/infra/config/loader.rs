use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp config should be creatable");
        fs::write(file.path(), contents).expect("must write test config");
        file
    }

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let file = write_config(
            r#"[logging]
level = "debug"

[backend]
base_url = "http://chat.internal:9000"
request_timeout_ms = 2500

[ui]
title = "Support"
"#,
        );

        let config = load(Some(file.path())).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.backend.base_url, "http://chat.internal:9000");
        assert_eq!(config.backend.request_timeout_ms, 2500);
        assert_eq!(config.backend.messages_path, "/api/messages");
        assert_eq!(config.ui.title, "Support");
        assert_eq!(config.ui.footer, AppConfig::default().ui.footer);
    }

    #[test]
    fn reports_parse_error_with_path() {
        let file = write_config("[backend]\nrequest_timeout_ms = \"soon\"\n");

        let error = load(Some(file.path())).expect_err("invalid config must fail");

        match error {
            AppError::ConfigParse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
