//! Check kinds and raw check results

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// The four independent signals evaluated for a target URL.
///
/// Declaration order is display order; result tables always show the kinds
/// in the order carried by [`CheckKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Format,
    Reputation,
    DomainAge,
    Certificate,
}

impl CheckKind {
    /// All check kinds in display order
    pub const ALL: [CheckKind; 4] = [
        CheckKind::Format,
        CheckKind::Reputation,
        CheckKind::DomainAge,
        CheckKind::Certificate,
    ];

    /// User-facing name of this check
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::Format => "URL format",
            CheckKind::Reputation => "Reputation",
            CheckKind::DomainAge => "Domain age",
            CheckKind::Certificate => "TLS certificate",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A structural red flag found while inspecting a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatFinding {
    EmbeddedCredentials,
    IpAddressHost,
    PunycodeHost,
    ExcessiveSubdomains,
    HighDigitDensity,
    UnusualCharacters,
    InsecureScheme,
    OverlongUrl,
}

impl FormatFinding {
    /// Short phrase used when listing findings in an outcome sentence
    pub fn description(&self) -> &'static str {
        match self {
            FormatFinding::EmbeddedCredentials => "credentials embedded before the host",
            FormatFinding::IpAddressHost => "a raw IP address instead of a hostname",
            FormatFinding::PunycodeHost => "punycode-encoded host labels",
            FormatFinding::ExcessiveSubdomains => "an unusually deep subdomain chain",
            FormatFinding::HighDigitDensity => "a suspicious number of digits in the host",
            FormatFinding::UnusualCharacters => "unusual special characters",
            FormatFinding::InsecureScheme => "an unencrypted http scheme",
            FormatFinding::OverlongUrl => "an unusually long address",
        }
    }
}

/// Structured findings from the format check
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormatFindings {
    pub findings: Vec<FormatFinding>,
}

impl FormatFindings {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Structured verdict from the reputation lookup
#[derive(Debug, Clone, Serialize)]
pub struct ReputationVerdict {
    /// Whether the URL appears on a threat list
    pub listed: bool,
    /// Threat type names reported by the provider, deduplicated
    pub threats: Vec<String>,
}

/// Structured result of the domain age lookup
#[derive(Debug, Clone, Serialize)]
pub struct DomainAgeInfo {
    /// Registered domain the lookup ran against
    pub domain: String,
    /// Registration date as reported by the registry
    pub registered: DateTime<Utc>,
    /// Age of the registration in days
    pub age_days: i64,
}

/// Structured certificate details for the hostname
#[derive(Debug, Clone, Serialize)]
pub struct CertificateReport {
    /// Issuer common name, or the full issuer DN if no CN is present
    pub issuer: String,
    pub expiration_date: DateTime<Utc>,
    pub is_expired: bool,
    /// Days until expiry; negative once expired
    pub expires_in_days: Option<i64>,
    /// Whether the certificate covers the hostname it was fetched for
    pub domain_matches_certificate: bool,
}

/// Provider-specific structured payload carried by a [`CheckResult`]
#[derive(Debug, Clone, Serialize)]
pub enum CheckData {
    Format(FormatFindings),
    Reputation(ReputationVerdict),
    DomainAge(DomainAgeInfo),
    Certificate(CertificateReport),
}

/// Raw outcome of one check against one target.
///
/// `succeeded` is about the provider, not the verdict: it is false only
/// when the check itself could not run to completion (network failure,
/// missing configuration, unparseable input). A check that ran fine and
/// found a problem still reports `succeeded = true`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// URL or hostname the check ran against
    pub target: String,
    pub kind: CheckKind,
    /// Human-readable outcome sentence; describes the error when the
    /// provider failed
    pub outcome: String,
    pub succeeded: bool,
    /// Structured payload; absent when the provider failed
    pub data: Option<CheckData>,
}

impl CheckResult {
    /// Create a result for a check that ran to completion
    pub fn success(
        target: impl Into<String>,
        kind: CheckKind,
        outcome: impl Into<String>,
        data: CheckData,
    ) -> Self {
        Self {
            target: target.into(),
            kind,
            outcome: outcome.into(),
            succeeded: true,
            data: Some(data),
        }
    }

    /// Create a result for a check whose provider failed
    pub fn failure(
        target: impl Into<String>,
        kind: CheckKind,
        outcome: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            kind,
            outcome: outcome.into(),
            succeeded: false,
            data: None,
        }
    }
}
