//! Optional `copywriter.ron` overrides for the compiled-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use copywriter_engine::WebhookSettings;
use engine_logging::{engine_info, engine_warn, DEFAULT_LOG_FILE};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_FILENAME: &str = "copywriter.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub webhook_url: String,
    pub request_timeout_ms: u64,
    pub max_reply_bytes: u64,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let webhook = WebhookSettings::default();
        Self {
            webhook_url: webhook.url,
            request_timeout_ms: webhook.request_timeout.as_millis() as u64,
            max_reply_bytes: webhook.max_reply_bytes,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn webhook_settings(&self) -> WebhookSettings {
        WebhookSettings {
            url: self.webhook_url.clone(),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_reply_bytes: self.max_reply_bytes,
        }
    }

    pub(crate) fn log_level(&self) -> LevelFilter {
        engine_logging::parse_level(&self.log_level)
    }
}

/// Where the active configuration came from. Logged once the logger is up.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ConfigSource {
    Defaults,
    File(PathBuf),
    Invalid { path: PathBuf, reason: String },
}

impl ConfigSource {
    pub(crate) fn log(&self) {
        match self {
            ConfigSource::Defaults => engine_info!("No {} found; using defaults", CONFIG_FILENAME),
            ConfigSource::File(path) => engine_info!("Loaded configuration from {:?}", path),
            ConfigSource::Invalid { path, reason } => {
                engine_warn!("Ignoring configuration {:?}: {}", path, reason)
            }
        }
    }
}

pub(crate) fn load_config(dir: &Path) -> (AppConfig, ConfigSource) {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return (AppConfig::default(), ConfigSource::Defaults);
        }
        Err(err) => {
            let reason = format!("failed to read: {err}");
            return (AppConfig::default(), ConfigSource::Invalid { path, reason });
        }
    };

    match ron::from_str::<AppConfig>(&content) {
        Ok(config) => (config, ConfigSource::File(path)),
        Err(err) => {
            let reason = format!("failed to parse: {err}");
            (AppConfig::default(), ConfigSource::Invalid { path, reason })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) = load_config(dir.path());

        assert_eq!(config, AppConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(
            config.webhook_settings().request_timeout,
            Duration::from_secs(30)
        );
        assert_eq!(config.webhook_url, copywriter_engine::DEFAULT_WEBHOOK_URL);
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"(webhook_url: "http://example.com/hook", log_level: "debug")"#,
        )
        .unwrap();

        let (config, source) = load_config(dir.path());

        assert_eq!(config.webhook_url, "http://example.com/hook");
        assert_eq!(config.log_level(), LevelFilter::Debug);
        assert_eq!(config.request_timeout_ms, 30_000);
        assert_eq!(source, ConfigSource::File(dir.path().join(CONFIG_FILENAME)));
    }

    #[test]
    fn request_timeout_bounds_the_whole_request() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "(request_timeout_ms: 5000, connect_timeout_ms: 1000)",
        )
        .unwrap();

        let (config, source) = load_config(dir.path());

        // connect_timeout_ms is no longer a setting and is ignored.
        assert_eq!(source, ConfigSource::File(dir.path().join(CONFIG_FILENAME)));
        assert_eq!(
            config.webhook_settings().request_timeout,
            Duration::from_millis(5000)
        );
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "(webhook_url: 42").unwrap();

        let (config, source) = load_config(dir.path());

        assert_eq!(config, AppConfig::default());
        assert!(matches!(source, ConfigSource::Invalid { .. }));
    }
}
