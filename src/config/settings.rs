//! Application settings configuration
//!
//! Defines per-provider endpoints, timeouts, and classification thresholds.

use crate::utils::ConfigError;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Environment variable consulted for the Safe Browsing API key
pub const API_KEY_ENV: &str = "PHISHSCAN_SAFEBROWSING_KEY";

/// Reputation (Safe Browsing) settings
#[derive(Debug, Clone, Deserialize)]
pub struct ReputationSettings {
    /// API key from the config file; the environment variable wins when set
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_safebrowsing_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ReputationSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_safebrowsing_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ReputationSettings {
    /// Effective API key: environment variable first, then config file
    pub fn effective_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.api_key.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Domain age (RDAP) settings
#[derive(Debug, Clone, Deserialize)]
pub struct DomainAgeSettings {
    #[serde(default = "default_rdap_endpoint")]
    pub rdap_endpoint: String,
    /// Registrations younger than this many days classify as a warning
    #[serde(default = "default_young_domain_days")]
    pub young_domain_days: i64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DomainAgeSettings {
    fn default() -> Self {
        Self {
            rdap_endpoint: default_rdap_endpoint(),
            young_domain_days: default_young_domain_days(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DomainAgeSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// TLS certificate check settings
#[derive(Debug, Clone, Deserialize)]
pub struct CertificateSettings {
    #[serde(default = "default_https_port")]
    pub port: u16,
    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub handshake_timeout_secs: u64,
}

impl Default for CertificateSettings {
    fn default() -> Self {
        Self {
            port: default_https_port(),
            connect_timeout_secs: default_timeout_secs(),
            handshake_timeout_secs: default_timeout_secs(),
        }
    }
}

impl CertificateSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout_secs)
    }
}

fn default_safebrowsing_endpoint() -> String {
    "https://safebrowsing.googleapis.com/v4/threatMatches:find".to_string()
}

fn default_rdap_endpoint() -> String {
    "https://rdap.org/domain".to_string()
}

fn default_young_domain_days() -> i64 {
    crate::engine::DEFAULT_YOUNG_DOMAIN_DAYS
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_https_port() -> u16 {
    443
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub reputation: ReputationSettings,
    #[serde(default)]
    pub domain_age: DomainAgeSettings,
    #[serde(default)]
    pub certificate: CertificateSettings,
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Override every provider timeout with the given number of seconds
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.reputation.timeout_secs = secs;
        self.domain_age.timeout_secs = secs;
        self.certificate.connect_timeout_secs = secs;
        self.certificate.handshake_timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.domain_age.young_domain_days, 180);
        assert_eq!(settings.certificate.port, 443);
        assert!(settings.reputation.endpoint.contains("threatMatches:find"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [domain_age]
            young_domain_days = 90
            "#,
        )
        .unwrap();
        assert_eq!(settings.domain_age.young_domain_days, 90);
        assert_eq!(settings.domain_age.timeout_secs, 10);
        assert_eq!(settings.certificate.port, 443);
    }

    #[test]
    fn test_with_timeout_overrides_all_providers() {
        let settings = Settings::default().with_timeout(3);
        assert_eq!(settings.reputation.timeout_secs, 3);
        assert_eq!(settings.domain_age.timeout_secs, 3);
        assert_eq!(settings.certificate.connect_timeout_secs, 3);
        assert_eq!(settings.certificate.handshake_timeout_secs, 3);
    }
}
