//! Check modules for phishscan
//!
//! This module contains the four check implementations. Each checker folds
//! its own failures into the `CheckResult` it returns, so running a check
//! never aborts a scan.

pub mod certificate;
pub mod domain_age;
pub mod format;
pub mod reputation;

pub use certificate::CertificateChecker;
pub use domain_age::DomainAgeChecker;
pub use format::FormatChecker;
pub use reputation::ReputationChecker;
