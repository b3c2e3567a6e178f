//! URL reputation lookup
//!
//! Queries the Google Safe Browsing v4 `threatMatches:find` endpoint. The
//! provider answers a match list when the URL is on a threat list and an
//! empty JSON object when it is not, so an empty body parses to a clear
//! verdict rather than an error.

use crate::config::settings::ReputationSettings;
use crate::models::{CheckData, CheckKind, CheckResult, ReputationVerdict};
use crate::utils::ReputationError;
use serde::Deserialize;
use serde_json::json;

/// Client identifier sent with every lookup
const CLIENT_ID: &str = "phishscan";

/// Threat list categories requested from the provider
const THREAT_TYPES: [&str; 4] = [
    "MALWARE",
    "SOCIAL_ENGINEERING",
    "UNWANTED_SOFTWARE",
    "POTENTIALLY_HARMFUL_APPLICATION",
];

#[derive(Debug, Default, Deserialize)]
struct ThreatMatchesResponse {
    #[serde(default)]
    matches: Vec<ThreatMatch>,
}

#[derive(Debug, Deserialize)]
struct ThreatMatch {
    #[serde(rename = "threatType")]
    threat_type: Option<String>,
}

/// Reputation checker backed by Safe Browsing
pub struct ReputationChecker {
    settings: ReputationSettings,
}

impl ReputationChecker {
    /// Create a new reputation checker with the given settings
    pub fn new(settings: ReputationSettings) -> Self {
        Self { settings }
    }

    /// Look the URL up on the configured threat lists.
    ///
    /// Provider failures (no API key, network, bad status) are folded into
    /// the returned result as `succeeded = false` rather than propagated.
    pub async fn check(&self, url: &str) -> CheckResult {
        match self.lookup(url).await {
            Ok(verdict) => {
                let outcome = if verdict.listed {
                    format!(
                        "URL is flagged by Safe Browsing ({}).",
                        verdict.threats.join(", ")
                    )
                } else {
                    "URL is not present on any Safe Browsing threat list.".to_string()
                };
                CheckResult::success(
                    url,
                    CheckKind::Reputation,
                    outcome,
                    CheckData::Reputation(verdict),
                )
            }
            Err(e) => {
                tracing::warn!("reputation lookup for {} failed: {}", url, e);
                CheckResult::failure(
                    url,
                    CheckKind::Reputation,
                    format!("Reputation lookup failed: {}.", e),
                )
            }
        }
    }

    async fn lookup(&self, url: &str) -> Result<ReputationVerdict, ReputationError> {
        let api_key = self
            .settings
            .effective_api_key()
            .ok_or(ReputationError::MissingApiKey)?;

        let client = reqwest::Client::builder()
            .timeout(self.settings.timeout())
            .build()?;

        let body = json!({
            "client": {
                "clientId": CLIENT_ID,
                "clientVersion": env!("CARGO_PKG_VERSION"),
            },
            "threatInfo": {
                "threatTypes": THREAT_TYPES,
                "platformTypes": ["ANY_PLATFORM"],
                "threatEntryTypes": ["URL"],
                "threatEntries": [{ "url": url }],
            },
        });

        let endpoint = format!("{}?key={}", self.settings.endpoint, api_key);
        let response = client.post(&endpoint).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(ReputationError::BadStatus {
                status: response.status().as_u16(),
            });
        }

        let text = response.text().await?;
        tracing::debug!("safe browsing response for {}: {}", url, text);
        parse_threat_matches(&text)
    }
}

/// Parse a `threatMatches:find` response body into a verdict
fn parse_threat_matches(body: &str) -> Result<ReputationVerdict, ReputationError> {
    if body.trim().is_empty() {
        return Ok(ReputationVerdict {
            listed: false,
            threats: vec![],
        });
    }

    let parsed: ThreatMatchesResponse =
        serde_json::from_str(body).map_err(|e| ReputationError::ParseError {
            message: e.to_string(),
        })?;

    let listed = !parsed.matches.is_empty();
    let mut threats: Vec<String> = parsed
        .matches
        .into_iter()
        .filter_map(|m| m.threat_type)
        .collect();
    threats.sort();
    threats.dedup();

    Ok(ReputationVerdict { listed, threats })
}
