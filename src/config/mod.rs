//! Configuration module for phishscan
//!
//! Handles loading and managing configuration from TOML files.

pub mod settings;

pub use settings::{
    CertificateSettings, DomainAgeSettings, ReputationSettings, Settings, API_KEY_ENV,
};
