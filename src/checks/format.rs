//! URL format inspection
//!
//! Purely structural heuristics over the URL string; no network access.
//! Each heuristic that fires becomes a [`FormatFinding`], and the outcome
//! sentence lists every finding so the user can see what tripped.

use crate::models::{CheckData, CheckKind, CheckResult, FormatFinding, FormatFindings};
use url::{Host, Url};

/// URL length above which phishing kits tend to hide the real destination
const MAX_URL_LENGTH: usize = 100;
/// Host label count above which the subdomain chain counts as excessive
const MAX_HOST_LABELS: usize = 4;
/// Digits in the host above which the name looks machine-generated
const MAX_HOST_DIGITS: usize = 4;
/// Characters that rarely appear in legitimate URLs
const UNUSUAL_CHARS: &[char] = &['<', '>', '{', '}', '|', '\\', '^', '~', '`'];

/// URL format checker
pub struct FormatChecker;

impl FormatChecker {
    /// Create a new format checker
    pub fn new() -> Self {
        Self
    }

    /// Inspect the URL structure.
    ///
    /// The only failure mode is a URL that does not parse; everything else
    /// is reported as findings on a successful result.
    pub fn check(&self, url: &str) -> CheckResult {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                return CheckResult::failure(
                    url,
                    CheckKind::Format,
                    format!("URL could not be parsed: {}.", e),
                );
            }
        };

        let findings = inspect(&parsed);
        let outcome = if findings.is_empty() {
            "URL structure looks normal.".to_string()
        } else {
            format!(
                "URL contains {}, which can indicate phishing.",
                describe(&findings)
            )
        };

        CheckResult::success(
            url,
            CheckKind::Format,
            outcome,
            CheckData::Format(FormatFindings { findings }),
        )
    }
}

impl Default for FormatChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn inspect(url: &Url) -> Vec<FormatFinding> {
    let mut findings = Vec::new();

    if !url.username().is_empty() || url.password().is_some() {
        findings.push(FormatFinding::EmbeddedCredentials);
    }

    match url.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {
            findings.push(FormatFinding::IpAddressHost);
        }
        Some(Host::Domain(host)) => {
            if host.split('.').any(|label| label.starts_with("xn--")) {
                findings.push(FormatFinding::PunycodeHost);
            }
            if host.split('.').count() > MAX_HOST_LABELS {
                findings.push(FormatFinding::ExcessiveSubdomains);
            }
            if host.chars().filter(|c| c.is_ascii_digit()).count() > MAX_HOST_DIGITS {
                findings.push(FormatFinding::HighDigitDensity);
            }
        }
        None => {}
    }

    if url.as_str().chars().any(|c| UNUSUAL_CHARS.contains(&c)) {
        findings.push(FormatFinding::UnusualCharacters);
    }

    if url.scheme() == "http" {
        findings.push(FormatFinding::InsecureScheme);
    }

    if url.as_str().len() > MAX_URL_LENGTH {
        findings.push(FormatFinding::OverlongUrl);
    }

    findings
}

fn describe(findings: &[FormatFinding]) -> String {
    findings
        .iter()
        .map(|finding| finding.description())
        .collect::<Vec<_>>()
        .join("; ")
}
