//! Runtime configuration
//!
//! Values come from the environment, falling back to defaults when a
//! variable is unset or blank.

use std::path::PathBuf;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "DASHBOARD_DATA_DIR";

/// Environment variable naming the authentication host
pub const AUTH_URL_ENV: &str = "DASHBOARD_AUTH_URL";

pub const DEFAULT_DATA_DIR: &str = ".dashboard-data";

pub const DEFAULT_AUTH_URL: &str = "https://apis.ccbp.in";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Directory holding the storage slots
    pub data_dir: PathBuf,
    /// Base URL of the login endpoint host
    pub auth_base_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            auth_base_url: DEFAULT_AUTH_URL.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            data_dir: non_blank(DATA_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            auth_base_url: non_blank(AUTH_URL_ENV).unwrap_or(defaults.auth_base_url),
        }
    }

    /// Override the data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Override the authentication host
    pub fn with_auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = DashboardConfig::from_lookup(|_| None);
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = DashboardConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.auth_base_url, DEFAULT_AUTH_URL);
    }

    #[test]
    fn test_values_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (DATA_DIR_ENV, "/tmp/board"),
            (AUTH_URL_ENV, "http://localhost:9000"),
        ]
        .into_iter()
        .collect();

        let config = DashboardConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/board"));
        assert_eq!(config.auth_base_url, "http://localhost:9000");
    }
}
