use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Failure while loading settings from disk.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed settings: {0}")]
    Malformed(String),
}

/// Where the client runs; decides which base address variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Desktop or test host; `localhost` reaches the API directly.
    Desktop,
    /// Android emulator, where the host's loopback is reachable only via
    /// the `10.0.2.2` alias and TLS to localhost is impractical.
    AndroidEmulator,
}

/// Connection settings for the bookstore API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSettings {
    /// HTTPS base address, including the `/api` prefix.
    pub base_address: String,
    /// Plain-HTTP base address for hosts without a trusted dev certificate.
    pub http_base_address: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_address: "https://localhost:7264/api".to_string(),
            http_base_address: "http://localhost:5244/api".to_string(),
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
            user_agent: concat!("bookstore-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiSettings {
    /// Load settings from a JSON file; absent fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|err| SettingsError::Malformed(err.to_string()))
    }

    /// Base address appropriate for `platform`.
    pub fn base_address_for(&self, platform: Platform) -> String {
        match platform {
            Platform::Desktop => self.base_address.clone(),
            Platform::AndroidEmulator => self
                .http_base_address
                .replace("http://localhost", "http://10.0.2.2"),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_emulator_rewrites_localhost() {
        let settings = ApiSettings::default();
        assert_eq!(
            settings.base_address_for(Platform::AndroidEmulator),
            "http://10.0.2.2:5244/api"
        );
        assert_eq!(
            settings.base_address_for(Platform::Desktop),
            "https://localhost:7264/api"
        );
    }

    #[test]
    fn partial_settings_fall_back_to_defaults() {
        let parsed: ApiSettings =
            serde_json::from_str(r#"{"baseAddress": "https://store.example/api"}"#).unwrap();
        assert_eq!(parsed.base_address, "https://store.example/api");
        assert_eq!(parsed.request_timeout_ms, 30_000);
    }

    #[test]
    fn loads_settings_from_a_json_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"baseAddress": "https://store.example/api", "requestTimeoutMs": 5000}}"#
        )
        .unwrap();

        let settings = ApiSettings::from_json_file(file.path()).unwrap();
        assert_eq!(settings.base_address, "https://store.example/api");
        assert_eq!(settings.request_timeout_ms, 5000);
        // Absent fields keep their defaults.
        assert_eq!(settings.connect_timeout_ms, 10_000);
    }

    #[test]
    fn rejects_a_file_that_is_not_json() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ApiSettings::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Malformed(_)));
    }
}
