//! ConfigStore - Settings File and Service Address Resolution
//!
//! The prediction service address is resolved once at startup and handed to
//! the controller as a [`ForecastConfig`]. Later layers win:
//!
//! 1. built-in default (`http://localhost:5000`)
//! 2. `settings.toml` in the config directory
//! 3. `--api-url` on the command line, or `FORECAST_API_URL` when the flag is
//!    absent (clap reads the variable into the same argument)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::SETTINGS_FILE;
use crate::domain::config::ForecastConfig;
use crate::error::Result;
use crate::helpers::{config_dir, is_development};

/// Contents of `settings.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Prediction service address
    pub base_url: Option<String>,
}

/// Path of the settings file
pub fn settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SETTINGS_FILE))
}

/// Load settings from a TOML file; a missing or blank file yields defaults
pub fn load_settings(path: &Path) -> Result<Settings> {
    if is_development() {
        tracing::info!("Settings file: {}", path.display());
    }

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    Ok(toml::from_str(&content)?)
}

/// Pick the service address from the layered sources; blank values are skipped
pub fn resolve_config(file: Option<String>, cli: Option<String>) -> ForecastConfig {
    [cli, file]
        .into_iter()
        .flatten()
        .map(|url| url.trim().to_string())
        .find(|url| !url.is_empty())
        .map(ForecastConfig::new)
        .unwrap_or_default()
}

/// Resolve the configuration from the real settings file and the command line
pub fn load_forecast_config(cli_url: Option<String>) -> Result<ForecastConfig> {
    let settings = match settings_path() {
        Ok(path) => load_settings(&path)?,
        Err(err) => {
            tracing::warn!("No settings directory, using defaults: {}", err);
            Settings::default()
        }
    };

    let config = resolve_config(settings.base_url, cli_url);
    tracing::info!(base_url = %config.base_url, "Prediction service configured");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_BASE_URL;
    use crate::error::Error;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(resolve_config(None, None).base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_layer_precedence() {
        assert_eq!(resolve_config(some("http://file"), None).base_url, "http://file");
        assert_eq!(resolve_config(None, some("http://cli")).base_url, "http://cli");
        assert_eq!(
            resolve_config(some("http://file"), some("http://cli")).base_url,
            "http://cli"
        );
    }

    #[test]
    fn test_blank_values_are_skipped() {
        assert_eq!(
            resolve_config(some("http://file"), some("   ")).base_url,
            "http://file"
        );
    }

    fn temp_file(name: &str, content: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("power-forecast-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join(SETTINGS_FILE);
        match content {
            Some(content) => std::fs::write(&path, content).expect("write"),
            None => {
                let _ = std::fs::remove_file(&path);
            }
        }
        path
    }

    #[test]
    fn test_load_settings_file() {
        let path = temp_file("valid", Some("base_url = \"http://forecast:5000\"\n"));
        assert_eq!(
            load_settings(&path).expect("settings").base_url.as_deref(),
            Some("http://forecast:5000")
        );
    }

    #[test]
    fn test_missing_and_blank_files_give_defaults() {
        let missing = temp_file("missing", None);
        assert_eq!(load_settings(&missing).expect("settings"), Settings::default());

        let blank = temp_file("blank", Some("  \n"));
        assert_eq!(load_settings(&blank).expect("settings"), Settings::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_file("broken", Some("base_url = "));
        assert!(matches!(load_settings(&path), Err(Error::TomlDe { .. })));
    }
}
