//! Pipeline configuration
//!
//! Configuration is plain data. Values come from defaults, then the
//! environment, then explicit overrides (CLI flags) in that order.

use serde::{Deserialize, Serialize};

use super::{ExtractionMode, ImageFormat, UmlError};

/// Environment variable overriding the rendering server base URL
pub const SERVER_URL_ENV: &str = "UMLIFY_SERVER_URL";

/// Environment variable overriding the rendered image format
pub const IMAGE_FORMAT_ENV: &str = "UMLIFY_IMAGE_FORMAT";

/// Public PlantUML server
pub const DEFAULT_SERVER_URL: &str = "http://www.plantuml.com/plantuml";

/// Where and how diagrams are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL without the format segment
    pub url: String,
    pub format: ImageFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            format: ImageFormat::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(url: impl Into<String>, format: ImageFormat) -> Self {
        Self {
            url: url.into(),
            format,
        }
    }

    /// Defaults overridden by `UMLIFY_SERVER_URL` / `UMLIFY_IMAGE_FORMAT`
    pub fn from_env() -> Result<Self, UmlError> {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            if !url.trim().is_empty() {
                config.url = url.trim().to_string();
            }
        }
        if let Ok(format) = std::env::var(IMAGE_FORMAT_ENV) {
            config.format = format.parse()?;
        }
        Ok(config)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }
}

/// Options for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Mode used when a call names none
    #[serde(default)]
    pub mode: ExtractionMode,
    /// Let the detectors pick the mode per document instead of `mode`
    #[serde(default)]
    pub auto_detect: bool,
    pub server: ServerConfig,
}

impl PipelineConfig {
    pub fn new(mode: ExtractionMode, server: ServerConfig) -> Self {
        Self {
            mode,
            auto_detect: false,
            server,
        }
    }

    pub fn with_auto_detect(mut self) -> Self {
        self.auto_detect = true;
        self
    }
}
