//! phishscan library
//!
//! A phishing signal scanner for URLs providing:
//! - Structural URL format heuristics
//! - Safe Browsing reputation lookups
//! - Domain registration age via RDAP
//! - TLS certificate retrieval with permissive verification
//! - Pure classification of check outcomes into severity indicators
//!
//! # Usage
//!
//! ```rust,ignore
//! use phishscan::config::Settings;
//! use phishscan::runner::{self, ScanPlan};
//!
//! #[tokio::main]
//! async fn main() {
//!     let settings = Settings::default();
//!     let report = runner::scan("example.com", &settings, ScanPlan::default())
//!         .await
//!         .unwrap();
//!     println!("{}: {}", report.target, report.overall);
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod models;
pub mod output;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Settings;
pub use models::{CheckKind, CheckResult, Indicator, ScanReport};
pub use utils::{Result, ScanError};
