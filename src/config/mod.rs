//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::warn;

use crate::auth::{DEFAULT_AUTH_BASE_PATH, DEFAULT_SIGN_IN_PROVIDER};
use crate::resolver::geocode::DEFAULT_GEOCODER_URL;
use crate::resolver::DEFAULT_MOBILE_BREAKPOINT;

/// Environment variable naming the directory that holds `config.*`.
pub const CONFIG_DIR_ENV: &str = "PARAPO_CONFIG_DIR";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderConfig {
    #[serde(default = "default_geocoder_url")]
    pub base_url: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_url(),
        }
    }
}

fn default_geocoder_url() -> String {
    DEFAULT_GEOCODER_URL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_auth_base_path")]
    pub base_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_path: default_auth_base_path(),
        }
    }
}

fn default_provider() -> String {
    DEFAULT_SIGN_IN_PROVIDER.to_string()
}

fn default_auth_base_path() -> String {
    DEFAULT_AUTH_BASE_PATH.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
        }
    }
}

fn default_mobile_breakpoint() -> f64 {
    DEFAULT_MOBILE_BREAKPOINT
}

pub fn get_config_dir() -> PathBuf {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_dir())
}

pub fn load_config_from(config_dir: &Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (PARAPO_GEOCODER__BASE_URL, etc.)
        .add_source(
            ::config::Environment::with_prefix("PARAPO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Install the configuration loaded at startup. Later calls are ignored.
pub fn init(config: Config) {
    if CONFIG.set(config).is_err() {
        warn!("Configuration already initialized, keeping the first one");
    }
}

/// The startup configuration, or defaults when none was installed.
pub fn current() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "PARAPO_GEOCODER__BASE_URL",
            "PARAPO_AUTH__PROVIDER",
            "PARAPO_LAYOUT__MOBILE_BREAKPOINT",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();

        let config = load_config_from(dir.path()).unwrap();

        assert_eq!(config.geocoder.base_url, DEFAULT_GEOCODER_URL);
        assert_eq!(config.auth.provider, "google");
        assert_eq!(config.auth.base_path, "/api/auth");
        assert_eq!(config.layout.mobile_breakpoint, 768.0);
    }

    #[test]
    #[serial]
    fn test_file_values_are_loaded() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            r#"
[geocoder]
base_url = "http://geocoder.local"

[layout]
mobile_breakpoint = 1024.0
"#,
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();

        assert_eq!(config.geocoder.base_url, "http://geocoder.local");
        assert_eq!(config.layout.mobile_breakpoint, 1024.0);
        assert_eq!(config.auth.provider, "google");
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[auth]\nprovider = \"github\"\n",
        )
        .unwrap();
        std::env::set_var("PARAPO_AUTH__PROVIDER", "gitlab");

        let config = load_config_from(dir.path());
        clear_env();

        assert_eq!(config.unwrap().auth.provider, "gitlab");
    }
}
