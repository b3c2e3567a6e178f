//! Per-check classification rules
//!
//! Maps one [`CheckResult`] to one [`Indicator`]. Rules read the structured
//! payload first; outcome-text matching exists only as a last resort for
//! results that carry no payload, since wording changes or localized
//! messages would silently break it.

use crate::models::{CheckData, CheckKind, CheckResult, Indicator};

/// Default threshold below which a domain registration counts as young
pub const DEFAULT_YOUNG_DOMAIN_DAYS: i64 = 180;

/// Danger wording in an unstructured reputation outcome
const REPUTATION_DANGER_MARKERS: &[&str] = &["malicious", "phishing", "listed", "flagged"];
/// Warning wording in an unstructured domain age outcome
const DOMAIN_AGE_WARNING_MARKERS: &[&str] = &["recently", "young"];
/// Error wording in an unstructured certificate outcome reported as successful
const CERTIFICATE_ERROR_MARKERS: &[&str] = &["error", "failed", "unable"];

/// Tunable classification thresholds
#[derive(Debug, Clone, Copy)]
pub struct ClassifyOptions {
    /// Registrations younger than this many days classify as a warning
    pub young_domain_days: i64,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            young_domain_days: DEFAULT_YOUNG_DOMAIN_DAYS,
        }
    }
}

/// Assign an indicator to a single check result.
///
/// Total over all inputs: every combination of kind, success flag, and
/// payload maps to exactly one indicator.
pub fn classify_result(result: &CheckResult, options: &ClassifyOptions) -> Indicator {
    match result.kind {
        CheckKind::Format => classify_format(result),
        CheckKind::Reputation => classify_reputation(result),
        CheckKind::DomainAge => classify_domain_age(result, options),
        CheckKind::Certificate => classify_certificate(result),
    }
}

/// A URL that does not even parse is treated as hostile input, not as a
/// provider outage, so failure here is danger rather than unknown.
fn classify_format(result: &CheckResult) -> Indicator {
    if !result.succeeded {
        return Indicator::Danger;
    }
    match &result.data {
        Some(CheckData::Format(findings)) => {
            if findings.is_clean() {
                Indicator::Safe
            } else {
                Indicator::Warning
            }
        }
        // No payload: the outcome sentence is all we have
        _ => {
            if contains_marker(&result.outcome, &["suspicious", "unusual"]) {
                Indicator::Warning
            } else {
                Indicator::Safe
            }
        }
    }
}

fn classify_reputation(result: &CheckResult) -> Indicator {
    if !result.succeeded {
        return Indicator::Unknown;
    }
    match &result.data {
        Some(CheckData::Reputation(verdict)) => {
            if verdict.listed {
                Indicator::Danger
            } else {
                Indicator::Safe
            }
        }
        _ => {
            if contains_marker(&result.outcome, REPUTATION_DANGER_MARKERS) {
                Indicator::Danger
            } else {
                Indicator::Safe
            }
        }
    }
}

fn classify_domain_age(result: &CheckResult, options: &ClassifyOptions) -> Indicator {
    if !result.succeeded {
        return Indicator::Unknown;
    }
    match &result.data {
        Some(CheckData::DomainAge(info)) => {
            if info.age_days < options.young_domain_days {
                Indicator::Warning
            } else {
                Indicator::Safe
            }
        }
        // Succeeded but no age resolved is still missing information
        _ => {
            if contains_marker(&result.outcome, DOMAIN_AGE_WARNING_MARKERS) {
                Indicator::Warning
            } else {
                Indicator::Unknown
            }
        }
    }
}

/// Ordered decision list; the first matching rule wins. An expired
/// certificate dominates a hostname mismatch, and both dominate the
/// text-marker fallback.
fn classify_certificate(result: &CheckResult) -> Indicator {
    if !result.succeeded {
        // No certificate could be retrieved at all
        return Indicator::Danger;
    }
    if let Some(CheckData::Certificate(cert)) = &result.data {
        if cert.is_expired {
            return Indicator::Danger;
        }
        if !cert.domain_matches_certificate {
            return Indicator::Warning;
        }
        return Indicator::Safe;
    }
    if contains_marker(&result.outcome, CERTIFICATE_ERROR_MARKERS) {
        return Indicator::Danger;
    }
    Indicator::Safe
}

fn contains_marker(text: &str, markers: &[&str]) -> bool {
    let lower = text.to_lowercase();
    markers.iter().any(|marker| lower.contains(marker))
}
