//! Rich terminal output formatting

use crate::models::{Indicator, ScanReport};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for long-running operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Create a progress bar for batch operations
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("━━━ {} ━━━", title)).cyan().bold());
    println!();
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Style an indicator with its legend icon and color
pub fn paint_indicator(indicator: Indicator) -> String {
    let text = format!("{} {}", indicator.icon(), indicator.label());
    match indicator {
        Indicator::Safe => style(text).green().to_string(),
        Indicator::Warning => style(text).yellow().to_string(),
        Indicator::Danger => style(text).red().bold().to_string(),
        Indicator::Unknown => style(text).dim().to_string(),
    }
}

/// Print the overall verdict line for a scan
pub fn print_overall(report: &ScanReport) {
    println!();
    println!(
        "  {}  {}",
        style(&report.target).bold(),
        paint_indicator(report.overall)
    );
}

/// Print the four-entry indicator legend
pub fn print_legend() {
    print_header("Legend");
    for indicator in Indicator::LEGEND {
        println!("  {}", paint_indicator(indicator));
    }
}

/// Print batch scan summary
pub fn print_batch_summary(
    total: usize,
    safe: usize,
    suspicious: usize,
    dangerous: usize,
    unknown: usize,
    failed: usize,
) {
    print_header("Batch Scan Summary");

    println!("  Total URLs scanned: {}", style(total).bold());
    println!("  Safe: {}", style(safe).green());
    println!("  Potentially suspicious: {}", style(suspicious).yellow());
    println!("  Identified as phishing: {}", style(dangerous).red());
    println!("  Information not found: {}", style(unknown).dim());
    if failed > 0 {
        println!("  Not scanned (invalid input): {}", style(failed).red());
    }
}
