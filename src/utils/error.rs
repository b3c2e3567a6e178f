//! Custom error types for phishscan
//!
//! This module defines domain-specific error types using `thiserror` for
//! all the different failure modes that can occur while scanning a URL.

use thiserror::Error;

/// Top-level error type for the phishscan application
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Reputation lookup error: {0}")]
    Reputation(#[from] ReputationError),

    #[error("Domain age lookup error: {0}")]
    DomainAge(#[from] DomainAgeError),

    #[error("Certificate error: {0}")]
    Certificate(#[from] CertificateError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reputation provider errors
#[derive(Error, Debug)]
pub enum ReputationError {
    #[error("no Safe Browsing API key configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}")]
    BadStatus { status: u16 },

    #[error("unreadable provider response: {message}")]
    ParseError { message: String },
}

/// Domain age lookup errors
#[derive(Error, Debug)]
pub enum DomainAgeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("registry returned HTTP {status} for {domain}")]
    BadStatus { domain: String, status: u16 },

    #[error("unreadable registry response: {message}")]
    ParseError { message: String },

    #[error("no registration date found for {domain}")]
    NoRegistrationDate { domain: String },

    #[error("unreadable registration date for {domain}: {value}")]
    UnreadableDate { domain: String, value: String },
}

/// Certificate retrieval and parsing errors
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("connection to {host}:{port} failed: {message}")]
    ConnectionFailed {
        host: String,
        port: u16,
        message: String,
    },

    #[error("connection to {host}:{port} timed out")]
    ConnectionTimeout { host: String, port: u16 },

    #[error("TLS handshake with {host} failed: {message}")]
    HandshakeFailed { host: String, message: String },

    #[error("TLS handshake with {host} timed out")]
    HandshakeTimeout { host: String },

    #[error("invalid server name: {host}")]
    InvalidServerName { host: String },

    #[error("no certificate presented by {host}")]
    NoCertificate { host: String },

    #[error("failed to parse certificate: {message}")]
    ParseError { message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Result type alias using ScanError
pub type Result<T> = std::result::Result<T, ScanError>;
