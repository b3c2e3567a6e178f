//! Data models for phishscan
//!
//! This module contains all the data structures used throughout the application.

pub mod check;
pub mod indicator;
pub mod report;

pub use check::{
    CertificateReport, CheckData, CheckKind, CheckResult, DomainAgeInfo, FormatFinding,
    FormatFindings, ReputationVerdict,
};
pub use indicator::Indicator;
pub use report::{ClassifiedRow, ScanReport};
