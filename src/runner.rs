//! Scan orchestration
//!
//! Normalizes the input URL, dispatches the requested checks concurrently,
//! and hands the finished results to the classification engine. Skipped or
//! failed checks still end up as rows; the only hard error a scan can
//! produce is input that is not a URL at all.

use crate::checks::{CertificateChecker, DomainAgeChecker, FormatChecker, ReputationChecker};
use crate::config::Settings;
use crate::engine::{self, ClassifyOptions};
use crate::models::{CheckResult, ScanReport};
use crate::utils::{Result, ScanError};
use std::future::Future;
use url::Url;

/// Which network checks to run. The format check always runs; a disabled
/// check still produces a "not evaluated" row in the report.
#[derive(Debug, Clone, Copy)]
pub struct ScanPlan {
    pub reputation: bool,
    pub domain_age: bool,
    pub certificate: bool,
}

impl Default for ScanPlan {
    fn default() -> Self {
        Self {
            reputation: true,
            domain_age: true,
            certificate: true,
        }
    }
}

/// Normalize user input into a parseable URL.
///
/// Bare hostnames get an https scheme prepended, matching what a browser
/// address bar would do. Input that still fails to parse, or parses to
/// something without a host, is rejected.
pub fn normalize_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScanError::InvalidUrl("empty input".to_string()));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate)
        .map_err(|e| ScanError::InvalidUrl(format!("{} ({})", trimmed, e)))?;

    if url.host_str().map(str::is_empty).unwrap_or(true) {
        return Err(ScanError::InvalidUrl(format!("{} (no host)", trimmed)));
    }

    Ok(url)
}

/// Run all requested checks for one URL and classify the results
pub async fn scan(input: &str, settings: &Settings, plan: ScanPlan) -> Result<ScanReport> {
    let url = normalize_url(input)?;
    let target = url.as_str().to_string();
    let hostname = url.host_str().unwrap_or_default().to_string();

    tracing::debug!("scanning {} (host {})", target, hostname);

    let format_result = FormatChecker::new().check(&target);

    let reputation = ReputationChecker::new(settings.reputation.clone());
    let domain_age = DomainAgeChecker::new(settings.domain_age.clone());
    let certificate = CertificateChecker::new(settings.certificate.clone());

    let (reputation_result, age_result, certificate_result) = tokio::join!(
        run_if(plan.reputation, reputation.check(&target)),
        run_if(plan.domain_age, domain_age.check(&hostname)),
        run_if(plan.certificate, certificate.check(&hostname)),
    );

    let mut results: Vec<CheckResult> = vec![format_result];
    results.extend(reputation_result);
    results.extend(age_result);
    results.extend(certificate_result);

    let options = ClassifyOptions {
        young_domain_days: settings.domain_age.young_domain_days,
    };
    let classification = engine::classify(&target, &results, &options);

    Ok(ScanReport {
        target,
        hostname,
        overall: classification.overall,
        rows: classification.rows,
        checked_at: chrono::Utc::now(),
    })
}

async fn run_if<F>(enabled: bool, check: F) -> Option<CheckResult>
where
    F: Future<Output = CheckResult>,
{
    if enabled {
        Some(check.await)
    } else {
        None
    }
}
