//! Utility modules for phishscan
//!
//! This module contains the error types shared across the application.

pub mod error;

pub use error::{
    CertificateError, ConfigError, DomainAgeError, ReputationError, Result, ScanError,
};
