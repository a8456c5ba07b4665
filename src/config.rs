//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default EmailJS endpoint
pub const DEFAULT_API_URL: &str = "https://api.emailjs.com";

/// Placeholders used when an identifier is configured nowhere
pub const PLACEHOLDER_SERVICE_ID: &str = "your_service_id";
pub const PLACEHOLDER_TEMPLATE_ID: &str = "your_template_id";
pub const PLACEHOLDER_PUBLIC_KEY: &str = "your_public_key";

const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
const ENV_ACCESS_TOKEN: &str = "EMAILJS_ACCESS_TOKEN";
const ENV_API_URL: &str = "EMAILJS_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// EmailJS service identifier
    pub service_id: Option<String>,
    /// EmailJS template identifier
    pub template_id: Option<String>,
    /// EmailJS public key
    pub public_key: Option<String>,
    /// EmailJS private access token
    pub access_token: Option<String>,
    /// API base URL
    pub api_url: Option<String>,
    /// Contact details shown next to the form
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Contact details for the "Let's Connect" panel
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl TuiConfig {
    /// Get the project directories
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "portfolio", "contact-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for rolling log files
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// Resolved settings for the mail client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub access_token: Option<String>,
    pub api_url: String,
}

impl MailerConfig {
    /// Environment first, then the config file, then placeholders
    pub fn resolve<F>(file: &TuiConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |var: &str, from_file: &Option<String>| {
            env(var)
                .filter(|v| !v.is_empty())
                .or_else(|| from_file.clone().filter(|v| !v.is_empty()))
        };

        Self {
            service_id: pick(ENV_SERVICE_ID, &file.service_id)
                .unwrap_or_else(|| PLACEHOLDER_SERVICE_ID.to_string()),
            template_id: pick(ENV_TEMPLATE_ID, &file.template_id)
                .unwrap_or_else(|| PLACEHOLDER_TEMPLATE_ID.to_string()),
            public_key: pick(ENV_PUBLIC_KEY, &file.public_key)
                .unwrap_or_else(|| PLACEHOLDER_PUBLIC_KEY.to_string()),
            access_token: pick(ENV_ACCESS_TOKEN, &file.access_token),
            api_url: pick(ENV_API_URL, &file.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }

    /// Resolve against the process environment
    pub fn from_env(file: &TuiConfig) -> Self {
        Self::resolve(file, |var| std::env::var(var).ok())
    }

    /// True when any identifier still holds its placeholder
    pub fn uses_placeholders(&self) -> bool {
        self.service_id == PLACEHOLDER_SERVICE_ID
            || self.template_id == PLACEHOLDER_TEMPLATE_ID
            || self.public_key == PLACEHOLDER_PUBLIC_KEY
    }
}
