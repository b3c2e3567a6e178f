use chrono::{Duration, Utc};
use phishscan::engine::{classify, ClassifyOptions};
use phishscan::models::{
    CertificateReport, CheckData, CheckKind, CheckResult, DomainAgeInfo, FormatFindings, Indicator,
    ReputationVerdict,
};

const TARGET: &str = "https://example.com/";

fn clean_format() -> CheckResult {
    CheckResult::success(
        TARGET,
        CheckKind::Format,
        "URL structure looks normal.",
        CheckData::Format(FormatFindings::default()),
    )
}

fn reputation(listed: bool) -> CheckResult {
    CheckResult::success(
        TARGET,
        CheckKind::Reputation,
        if listed {
            "URL is flagged by Safe Browsing (SOCIAL_ENGINEERING)."
        } else {
            "URL is not present on any Safe Browsing threat list."
        },
        CheckData::Reputation(ReputationVerdict {
            listed,
            threats: if listed {
                vec!["SOCIAL_ENGINEERING".to_string()]
            } else {
                vec![]
            },
        }),
    )
}

fn domain_age(age_days: i64) -> CheckResult {
    CheckResult::success(
        "example.com",
        CheckKind::DomainAge,
        "Domain example.com was registered.",
        CheckData::DomainAge(DomainAgeInfo {
            domain: "example.com".to_string(),
            registered: Utc::now() - Duration::days(age_days),
            age_days,
        }),
    )
}

fn certificate(is_expired: bool, matches: bool) -> CheckResult {
    CheckResult::success(
        "example.com",
        CheckKind::Certificate,
        "Certificate retrieved.",
        CheckData::Certificate(CertificateReport {
            issuer: "Example CA".to_string(),
            expiration_date: Utc::now() + Duration::days(90),
            is_expired,
            expires_in_days: Some(if is_expired { -3 } else { 90 }),
            domain_matches_certificate: matches,
        }),
    )
}

// All four checks clean: every row safe, overall safe.
#[test]
fn test_all_clean_scan_is_safe() {
    let results = vec![
        clean_format(),
        reputation(false),
        domain_age(4000),
        certificate(false, true),
    ];
    let classification = classify(TARGET, &results, &ClassifyOptions::default());

    assert_eq!(classification.rows.len(), 4);
    for row in &classification.rows {
        assert_eq!(row.indicator, Indicator::Safe, "row {:?}", row.kind);
    }
    assert_eq!(classification.overall, Indicator::Safe);
}

// A Safe Browsing hit turns the whole scan dangerous no matter how clean
// the rest looks.
#[test]
fn test_listed_url_is_danger_overall() {
    let results = vec![
        clean_format(),
        reputation(true),
        domain_age(4000),
        certificate(false, true),
    ];
    let classification = classify(TARGET, &results, &ClassifyOptions::default());

    assert_eq!(classification.rows[1].indicator, Indicator::Danger);
    assert_eq!(classification.overall, Indicator::Danger);
}

// One provider outage: that row is unknown and the scan can no longer be
// called safe, but it is not escalated to danger either.
#[test]
fn test_provider_outage_degrades_to_unknown() {
    let results = vec![
        clean_format(),
        CheckResult::failure(
            TARGET,
            CheckKind::Reputation,
            "Reputation lookup failed: request timed out.",
        ),
        domain_age(4000),
        certificate(false, true),
    ];
    let classification = classify(TARGET, &results, &ClassifyOptions::default());

    assert_eq!(classification.rows[1].indicator, Indicator::Unknown);
    assert_eq!(classification.overall, Indicator::Unknown);
}

// Danger always beats unknown when both are present.
#[test]
fn test_danger_beats_unknown() {
    let results = vec![
        clean_format(),
        CheckResult::failure(
            TARGET,
            CheckKind::Reputation,
            "Reputation lookup failed: request timed out.",
        ),
        domain_age(4000),
        certificate(true, true),
    ];
    let classification = classify(TARGET, &results, &ClassifyOptions::default());

    assert_eq!(classification.rows[3].indicator, Indicator::Danger);
    assert_eq!(classification.overall, Indicator::Danger);
}

// Young domain plus hostname mismatch: two warnings aggregate to warning,
// not danger.
#[test]
fn test_warnings_do_not_escalate() {
    let results = vec![
        clean_format(),
        reputation(false),
        domain_age(15),
        certificate(false, false),
    ];
    let classification = classify(TARGET, &results, &ClassifyOptions::default());

    assert_eq!(classification.rows[2].indicator, Indicator::Warning);
    assert_eq!(classification.rows[3].indicator, Indicator::Warning);
    assert_eq!(classification.overall, Indicator::Warning);
}

// Certificate that could not be fetched at all classifies as danger.
#[test]
fn test_unreachable_certificate_is_danger() {
    let results = vec![
        clean_format(),
        reputation(false),
        domain_age(4000),
        CheckResult::failure(
            "example.com",
            CheckKind::Certificate,
            "Could not retrieve certificate: connection refused.",
        ),
    ];
    let classification = classify(TARGET, &results, &ClassifyOptions::default());

    assert_eq!(classification.rows[3].indicator, Indicator::Danger);
    assert_eq!(classification.overall, Indicator::Danger);
}

// Kinds with no result at all still get a placeholder row, and the scan
// cannot be called safe.
#[test]
fn test_absent_checks_surface_as_unknown_rows() {
    let results = vec![clean_format(), reputation(false)];
    let classification = classify(TARGET, &results, &ClassifyOptions::default());

    assert_eq!(classification.rows.len(), 4);
    assert_eq!(classification.rows[2].outcome, "Check not evaluated.");
    assert_eq!(classification.rows[2].indicator, Indicator::Unknown);
    assert_eq!(classification.rows[3].outcome, "Check not evaluated.");
    assert_eq!(classification.overall, Indicator::Unknown);
}

// The custom threshold is honored instead of the built-in default.
#[test]
fn test_custom_young_domain_threshold() {
    let options = ClassifyOptions {
        young_domain_days: 30,
    };
    let results = vec![
        clean_format(),
        reputation(false),
        domain_age(60),
        certificate(false, true),
    ];
    let classification = classify(TARGET, &results, &options);

    // 60 days is young under the default 180 but fine under 30
    assert_eq!(classification.rows[2].indicator, Indicator::Safe);
    assert_eq!(classification.overall, Indicator::Safe);
}
