use std::fs;
use std::path::{Path, PathBuf};

use rust_i18n::t;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::network::{ApiConfig, ProxyType};
use crate::constants::{API_TOKEN_ENV, APP_DIR_NAME, DEFAULT_API_BASE_URL, SETTINGS_FILE_NAME};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("{}", t!("settings.error.no_config_dir"))]
    NoConfigDir,

    #[error("{}", t!("settings.error.read_failed", path = .path, details = .details))]
    ReadFailed { path: String, details: String },

    #[error("{}", t!("settings.error.write_failed", path = .path, details = .details))]
    WriteFailed { path: String, details: String },

    #[error("{}", t!("settings.error.parse_failed", details = .0))]
    ParseFailed(String),
}

/// User settings stored as YAML under the user config directory.
///
/// The stored token is optional; [`Settings::resolve_token`] falls back to
/// the process environment, and both sources are consulted fresh on every
/// call so a rotated token needs no invalidation step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_token: Option<String>,
    pub api_base_url: Option<String>,
    pub proxy_type: Option<String>,
    pub proxy_server: Option<String>,
    pub proxy_username: Option<String>,
    pub proxy_password: Option<String>,
}

impl Settings {
    /// Path of the settings file: `<config dir>/askpad/config.yml`
    pub fn config_path() -> Result<PathBuf, SettingsError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Loads the settings from the default location. A missing file is not
    /// an error; it yields the defaults.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SettingsError::ReadFailed {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| SettingsError::ParseFailed(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let write_err = |details: String| SettingsError::WriteFailed {
            path: path.display().to_string(),
            details,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| SettingsError::ParseFailed(e.to_string()))?;
        fs::write(path, content).map_err(|e| write_err(e.to_string()))
    }

    /// Stores `token` in the settings file, keeping the other fields.
    pub fn store_token(token: &str) -> Result<(), SettingsError> {
        let path = Self::config_path()?;
        let mut settings = Self::load_from(&path)?;
        settings.api_token = Some(token.to_string());
        settings.save_to(&path)
    }

    /// Resolves the bearer token: settings file first, then the
    /// `LILYPAD_API_TOKEN` environment variable. Empty values count as
    /// absent.
    pub fn resolve_token(&self) -> Option<String> {
        self.api_token
            .as_ref()
            .filter(|token| !token.is_empty())
            .cloned()
            .or_else(|| {
                std::env::var(API_TOKEN_ENV)
                    .ok()
                    .filter(|token| !token.is_empty())
            })
    }

    /// Maps the stored proxy fields onto a [`ProxyType`].
    pub fn proxy_type(&self) -> ProxyType {
        match self.proxy_type.as_deref() {
            Some("system") => ProxyType::System,
            Some("http") => match self.proxy_server.as_deref() {
                Some(server) if !server.is_empty() => ProxyType::Http(
                    server.to_string(),
                    self.proxy_username.clone(),
                    self.proxy_password.clone(),
                ),
                _ => ProxyType::None,
            },
            _ => ProxyType::None,
        }
    }

    /// Builds the API configuration for one call, resolving the token now.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(
            Some(
                self.api_base_url
                    .clone()
                    .filter(|url| !url.is_empty())
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            ),
            self.resolve_token(),
            self.proxy_type(),
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        let settings = Settings {
            api_token: Some("secret".to_string()),
            api_base_url: Some("http://localhost:8080/v1".to_string()),
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.api_token.as_deref(), Some("secret"));
        assert_eq!(
            loaded.api_base_url.as_deref(),
            Some("http://localhost:8080/v1")
        );
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(&dir.path().join("missing.yml")).unwrap();
        assert!(loaded.api_token.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "api_token: [not, a, string").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(SettingsError::ParseFailed(_))
        ));
    }

    // Single test for all environment interactions: the variable is process
    // global and tests run in parallel.
    #[test]
    fn test_token_precedence() {
        let settings = Settings {
            api_token: Some("from-settings".to_string()),
            ..Settings::default()
        };
        assert_eq!(settings.resolve_token().as_deref(), Some("from-settings"));

        std::env::set_var(API_TOKEN_ENV, "from-env");
        // Settings still win over the environment.
        assert_eq!(settings.resolve_token().as_deref(), Some("from-settings"));

        // An empty stored token falls through to the environment.
        let empty = Settings {
            api_token: Some(String::new()),
            ..Settings::default()
        };
        assert_eq!(empty.resolve_token().as_deref(), Some("from-env"));

        std::env::set_var(API_TOKEN_ENV, "");
        assert_eq!(empty.resolve_token(), None);
        std::env::remove_var(API_TOKEN_ENV);
        assert_eq!(empty.resolve_token(), None);
    }

    #[test]
    fn test_proxy_type_mapping() {
        assert!(matches!(Settings::default().proxy_type(), ProxyType::None));

        let system = Settings {
            proxy_type: Some("system".to_string()),
            ..Settings::default()
        };
        assert!(matches!(system.proxy_type(), ProxyType::System));

        let http = Settings {
            proxy_type: Some("http".to_string()),
            proxy_server: Some("http://127.0.0.1:7890".to_string()),
            ..Settings::default()
        };
        if let ProxyType::Http(server, None, None) = http.proxy_type() {
            assert_eq!(server, "http://127.0.0.1:7890");
        } else {
            panic!("Expected ProxyType::Http");
        }

        // An http proxy without a server is no proxy at all.
        let incomplete = Settings {
            proxy_type: Some("http".to_string()),
            ..Settings::default()
        };
        assert!(matches!(incomplete.proxy_type(), ProxyType::None));
    }

    #[test]
    fn test_api_config_uses_default_base_url() {
        let config = Settings::default().api_config();
        assert_eq!(config.api_url.as_deref(), Some(DEFAULT_API_BASE_URL));

        let overridden = Settings {
            api_base_url: Some("http://localhost:9999".to_string()),
            ..Settings::default()
        };
        assert_eq!(
            overridden.api_config().api_url.as_deref(),
            Some("http://localhost:9999")
        );
    }
}
