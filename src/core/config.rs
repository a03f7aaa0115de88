//! Client settings for the WebWizard wizard.
//!
//! Settings come from an optional TOML file under the platform config
//! directory, with `WEBWIZARD_*` environment variables taking precedence.
//! This mirrors the form reading its content-length bounds off the input
//! element instead of hard-coding them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::core::error::{Error, Result};
use crate::wizard::BoundsProfile;

/// Default server address the wizard talks to.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:12000";

/// Environment variable overriding the server base URL.
pub const ENV_BASE_URL: &str = "WEBWIZARD_BASE_URL";
/// Environment variable supplying the OpenRouter API token.
pub const ENV_API_TOKEN: &str = "WEBWIZARD_API_TOKEN";
/// Environment variable selecting the content bounds profile.
pub const ENV_CONTENT_BOUNDS: &str = "WEBWIZARD_CONTENT_BOUNDS";

/// Resolved client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the generation server
    pub base_url: Url,
    /// Content length bounds profile the wizard gates step 2 with
    pub content_bounds: BoundsProfile,
    /// OpenRouter API token, if configured ahead of time
    pub api_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            content_bounds: BoundsProfile::Standard,
            api_token: None,
        }
    }
}

impl Settings {
    /// Load settings from the config file (if present) and apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut settings = match Self::config_file_path() {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path)?;
                let parsed: Settings = toml::from_str(&raw)?;
                debug!(path = %path.display(), "Loaded settings file");
                parsed
            }
            _ => Settings::default(),
        };
        settings.apply_env_overrides()?;
        Ok(settings)
    }

    /// Location of the settings file: `<config dir>/webwizard/config.toml`
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("webwizard").join("config.toml"))
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(raw) = std::env::var(ENV_BASE_URL) {
            self.base_url = Url::parse(&raw)
                .map_err(|e| Error::config(format!("Invalid {ENV_BASE_URL} '{raw}': {e}")))?;
        }
        if let Ok(raw) = std::env::var(ENV_CONTENT_BOUNDS) {
            self.content_bounds = raw
                .parse()
                .map_err(|e: String| Error::config(format!("Invalid {ENV_CONTENT_BOUNDS}: {e}")))?;
        }
        if let Ok(token) = std::env::var(ENV_API_TOKEN) {
            self.api_token = Some(token);
        }
        Ok(())
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL must parse")
}
