//! Assistant configuration.
//!
//! Values are resolved in three layers, later layers winning: built-in
//! defaults, the JSON config file, then environment variables. The default
//! file location follows the XDG Base Directory specification
//! (`$XDG_CONFIG_HOME/planwright/config.json`).

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PlanwrightError, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const ENV_API_KEY: &str = "PLANWRIGHT_API_KEY";
const ENV_API_KEY_FALLBACK: &str = "GEMINI_API_KEY";
const ENV_MODEL: &str = "PLANWRIGHT_MODEL";
const ENV_BASE_URL: &str = "PLANWRIGHT_BASE_URL";

/// Connection settings for the text-generation provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssistantConfig {
    /// No key means the assistant is disabled for the session
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AssistantConfig {
    /// Resolve configuration from `path` (or the XDG default) and the
    /// process environment.
    ///
    /// An explicit `path` that does not exist is an error; a missing default
    /// file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path(),
        };

        let mut config = match file {
            Some(file) if path.is_some() || file.exists() => Self::from_file(&file)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        debug!(
            "Assistant config resolved: model={}, base_url={}, api_key={}",
            config.model,
            config.base_url,
            if config.api_key.is_some() { "set" } else { "unset" }
        );
        Ok(config)
    }

    /// The config file location under `$XDG_CONFIG_HOME`, if it exists.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("planwright").find_config_file("config.json")
    }

    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PlanwrightError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| PlanwrightError::Configuration {
            message: format!("Invalid config file {}: {e}", path.display()),
        })
    }

    /// Overlay environment variables read through `lookup`.
    ///
    /// Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = read(ENV_API_KEY).or_else(|| read(ENV_API_KEY_FALLBACK)) {
            self.api_key = Some(key);
        }
        if let Some(model) = read(ENV_MODEL) {
            self.model = model;
        }
        if let Some(base_url) = read(ENV_BASE_URL) {
            self.base_url = base_url;
        }
    }

    /// The API key, when one is configured and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AssistantConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout_secs, 60);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"model": "gemini-2.5-pro"}}"#).unwrap();

        let config = AssistantConfig::from_file(file.path()).unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = AssistantConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PlanwrightError::Configuration { .. }));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AssistantConfig::load(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, PlanwrightError::FileSystem { .. }));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = AssistantConfig {
            api_key: Some("from-file".to_string()),
            ..Default::default()
        };
        config.apply_env(env(&[
            ("PLANWRIGHT_API_KEY", "from-env"),
            ("PLANWRIGHT_MODEL", "gemini-test"),
        ]));

        assert_eq!(config.api_key(), Some("from-env"));
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_gemini_key_is_fallback_only() {
        let mut config = AssistantConfig::default();
        config.apply_env(env(&[("GEMINI_API_KEY", "fallback")]));
        assert_eq!(config.api_key(), Some("fallback"));

        let mut config = AssistantConfig::default();
        config.apply_env(env(&[
            ("GEMINI_API_KEY", "fallback"),
            ("PLANWRIGHT_API_KEY", "primary"),
        ]));
        assert_eq!(config.api_key(), Some("primary"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let mut config = AssistantConfig::default();
        config.apply_env(env(&[("PLANWRIGHT_API_KEY", "  "), ("PLANWRIGHT_MODEL", "")]));
        assert!(config.api_key().is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
