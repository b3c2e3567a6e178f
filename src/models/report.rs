//! Classified rows and the per-target scan report

use super::{CheckKind, Indicator};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One rendered row: a check outcome together with its assigned indicator
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedRow {
    /// URL or hostname the check ran against
    pub target: String,
    pub kind: CheckKind,
    pub outcome: String,
    pub indicator: Indicator,
}

impl ClassifiedRow {
    /// Placeholder row for a check that was never run
    pub fn not_evaluated(target: impl Into<String>, kind: CheckKind) -> Self {
        Self {
            target: target.into(),
            kind,
            outcome: "Check not evaluated.".to_string(),
            indicator: Indicator::Unknown,
        }
    }
}

/// Aggregated report for one scanned URL
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// URL as scanned, after scheme normalization
    pub target: String,
    /// Hostname the certificate and domain age checks ran against
    pub hostname: String,
    /// Most severe indicator across all rows
    pub overall: Indicator,
    /// One row per check kind, in display order
    pub rows: Vec<ClassifiedRow>,
    /// When the scan ran
    pub checked_at: DateTime<Utc>,
}

impl ScanReport {
    /// Whether every row came out safe
    pub fn is_clean(&self) -> bool {
        self.overall == Indicator::Safe
    }
}
