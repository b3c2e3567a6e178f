//! Domain registration age lookup
//!
//! Queries an RDAP aggregator for the registered domain and reads the
//! `registration` event. RDAP replaced WHOIS free-text with JSON, which
//! keeps the parsing here to a pair of structs, but registries are still
//! sloppy about event date formats.

use crate::config::settings::DomainAgeSettings;
use crate::models::{CheckData, CheckKind, CheckResult, DomainAgeInfo};
use crate::utils::DomainAgeError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RdapResponse {
    #[serde(default)]
    events: Vec<RdapEvent>,
}

#[derive(Debug, Deserialize)]
struct RdapEvent {
    #[serde(rename = "eventAction")]
    event_action: String,
    #[serde(rename = "eventDate")]
    event_date: Option<String>,
}

/// Domain age checker backed by RDAP
pub struct DomainAgeChecker {
    settings: DomainAgeSettings,
}

impl DomainAgeChecker {
    /// Create a new domain age checker with the given settings
    pub fn new(settings: DomainAgeSettings) -> Self {
        Self { settings }
    }

    /// Determine how long ago the hostname's registered domain was created.
    /// Automatically strips subdomains, so "login.example.com" queries
    /// "example.com".
    pub async fn check(&self, hostname: &str) -> CheckResult {
        let domain = extract_registered_domain(hostname);
        match self.lookup(&domain).await {
            Ok(info) => {
                let outcome = format!(
                    "Domain {} was registered on {} ({} days ago).",
                    info.domain,
                    info.registered.format("%Y-%m-%d"),
                    info.age_days
                );
                CheckResult::success(
                    hostname,
                    CheckKind::DomainAge,
                    outcome,
                    CheckData::DomainAge(info),
                )
            }
            Err(e) => {
                tracing::warn!("domain age lookup for {} failed: {}", domain, e);
                CheckResult::failure(
                    hostname,
                    CheckKind::DomainAge,
                    format!("Domain age lookup failed: {}.", e),
                )
            }
        }
    }

    async fn lookup(&self, domain: &str) -> Result<DomainAgeInfo, DomainAgeError> {
        let client = reqwest::Client::builder()
            .timeout(self.settings.timeout())
            .build()?;

        let url = format!(
            "{}/{}",
            self.settings.rdap_endpoint.trim_end_matches('/'),
            domain
        );
        let response = client
            .get(&url)
            .header("Accept", "application/rdap+json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DomainAgeError::BadStatus {
                domain: domain.to_string(),
                status: response.status().as_u16(),
            });
        }

        let text = response.text().await?;
        tracing::debug!("rdap response for {}: {}", domain, text);

        let body: RdapResponse =
            serde_json::from_str(&text).map_err(|e| DomainAgeError::ParseError {
                message: e.to_string(),
            })?;
        registration_info(&body, domain)
    }
}

/// Pull the registration event out of an RDAP response and compute the age
fn registration_info(
    response: &RdapResponse,
    domain: &str,
) -> Result<DomainAgeInfo, DomainAgeError> {
    let event_date = response
        .events
        .iter()
        .find(|event| event.event_action == "registration")
        .and_then(|event| event.event_date.as_deref())
        .ok_or_else(|| DomainAgeError::NoRegistrationDate {
            domain: domain.to_string(),
        })?;

    let registered = parse_event_date(event_date).ok_or_else(|| DomainAgeError::UnreadableDate {
        domain: domain.to_string(),
        value: event_date.to_string(),
    })?;

    let age_days = Utc::now().signed_duration_since(registered).num_days();

    Ok(DomainAgeInfo {
        domain: domain.to_string(),
        registered,
        age_days,
    })
}

/// RDAP event dates are nominally RFC 3339, with common deviations
fn parse_event_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Extract the registered domain from a full hostname.
/// e.g. "www.example.com" → "example.com", "sub.example.co.uk" → "example.co.uk"
fn extract_registered_domain(hostname: &str) -> String {
    let hostname = hostname.trim().trim_end_matches('.');

    let parts: Vec<&str> = hostname.split('.').collect();
    if parts.len() <= 2 {
        return hostname.to_string();
    }

    // Known two-part TLDs (public suffix approximation)
    let two_part_tlds = [
        "co.uk", "org.uk", "ac.uk", "gov.uk", "co.jp", "ne.jp", "com.au", "net.au", "gov.au",
        "co.nz", "co.za", "com.br", "com.mx", "com.cn", "co.in", "co.kr", "com.tw", "com.sg",
        "com.hk", "co.il", "com.ar", "com.tr", "com.my", "co.id", "com.ua", "com.pl",
    ];

    let lower = hostname.to_lowercase();
    for tld in &two_part_tlds {
        if lower.ends_with(tld) {
            // registered domain = label + two-part TLD → three parts from the end
            if parts.len() >= 3 {
                return parts[parts.len() - 3..].join(".");
            }
            return hostname.to_string();
        }
    }

    // Default: registered domain is the last two labels
    parts[parts.len() - 2..].join(".")
}
