use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jobboard_core::PageSize;
use jobboard_engine::GatewaySettings;
use jobboard_logging::{board_info, board_warn};
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "jobboard.ron";
pub(crate) const API_BASE_ENV: &str = "JOBBOARD_API_BASE";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub api_base: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub page_size: u32,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let gateway = GatewaySettings::default();
        Self {
            api_base: gateway.base_url,
            connect_timeout_secs: gateway.connect_timeout.as_secs(),
            request_timeout_secs: gateway.request_timeout.as_secs(),
            page_size: PageSize::default().get(),
            log_destination: LogDestination::File,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `path`, or `./jobboard.ron` when `None`. A missing default file
    /// yields the defaults; a missing explicit file is an error.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILENAME), false),
        };

        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if !explicit && err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config: AppConfig = ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.clone(),
            message: err.to_string(),
        })?;
        board_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub(crate) fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base) = lookup(API_BASE_ENV).filter(|value| !value.trim().is_empty()) {
            self.api_base = base.trim().to_string();
        }
    }

    pub(crate) fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            base_url: self.api_base.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    pub(crate) fn page_size(&self) -> PageSize {
        PageSize::new(self.page_size).unwrap_or_else(|| {
            board_warn!(
                "Unsupported page_size {} in config; using {}",
                self.page_size,
                PageSize::default().get()
            );
            PageSize::default()
        })
    }
}
