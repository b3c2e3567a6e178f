//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "phishscan")]
#[command(version)]
#[command(about = "Check a URL for common phishing signals", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// URL to check (shortcut for 'check' command)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Output JSON instead of tables
    #[arg(short, long)]
    pub json: bool,

    /// Minimal output (exit code only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Override every provider timeout, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Load settings from a specific TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the Safe Browsing reputation lookup
    #[arg(long)]
    pub skip_reputation: bool,

    /// Skip the domain age lookup
    #[arg(long)]
    pub skip_age: bool,

    /// Skip the TLS certificate check
    #[arg(long)]
    pub skip_certificate: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a single URL
    Check(CheckArgs),

    /// Check multiple URLs from a file
    Batch(BatchArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// URL to check
    #[arg(required = true)]
    pub url: String,
}

#[derive(Args)]
pub struct BatchArgs {
    /// File containing URLs (one per line, '#' starts a comment)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Number of parallel scans
    #[arg(short, long, default_value = "4")]
    pub parallel: usize,

    /// Only show URLs that did not come out safe
    #[arg(long)]
    pub issues_only: bool,
}
