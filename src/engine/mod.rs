//! Verdict engine: classification and aggregation of check results
//!
//! Everything in this module is a pure function over finished
//! [`CheckResult`](crate::models::CheckResult)s. The engine performs no I/O,
//! holds no state, and never fails; providers hand it their results and it
//! hands back indicators.

pub mod aggregator;
pub mod classifier;

pub use aggregator::{classify, Classification};
pub use classifier::{classify_result, ClassifyOptions, DEFAULT_YOUNG_DOMAIN_DAYS};
