//! Batch check command implementation

use crate::commands::check::exit_code;
use crate::config::Settings;
use crate::models::Indicator;
use crate::output::{create_progress_bar, paint_indicator, print_batch_summary, print_json_value};
use crate::runner::{self, ScanPlan};
use crate::utils::{Result, ScanError};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Serialize)]
pub struct BatchEntry {
    pub url: String,
    /// Overall indicator; absent when the URL could not be scanned at all
    pub overall: Option<Indicator>,
    pub error: Option<String>,
}

/// Run the batch check command; returns the worst exit code seen
pub async fn run_batch(
    file: &Path,
    parallel: usize,
    issues_only: bool,
    settings: &Settings,
    plan: ScanPlan,
    json: bool,
    quiet: bool,
) -> Result<i32> {
    // Read URLs from file
    let file = File::open(file)?;
    let reader = BufReader::new(file);

    let urls: Vec<String> = reader
        .lines()
        .filter_map(|line| {
            line.ok().and_then(|l| {
                let trimmed = l.trim().to_string();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    None
                } else {
                    Some(trimmed)
                }
            })
        })
        .collect();

    if urls.is_empty() {
        return Err(ScanError::InvalidUrl("no URLs found in file".to_string()));
    }

    let total = urls.len();
    let pb = (!quiet && !json).then(|| create_progress_bar(total as u64, "Scanning URLs"));

    // Scan URLs in parallel
    let entries: Vec<BatchEntry> = stream::iter(urls)
        .map(|url| {
            let settings = settings;
            let plan = plan;
            async move {
                match runner::scan(&url, settings, plan).await {
                    Ok(report) => BatchEntry {
                        url,
                        overall: Some(report.overall),
                        error: None,
                    },
                    Err(e) => BatchEntry {
                        url,
                        overall: None,
                        error: Some(e.to_string()),
                    },
                }
            }
        })
        .buffer_unordered(parallel.max(1))
        .inspect(|_| {
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        })
        .collect()
        .await;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    // Calculate statistics over all entries, before any display filter
    let safe = count_overall(&entries, Indicator::Safe);
    let suspicious = count_overall(&entries, Indicator::Warning);
    let dangerous = count_overall(&entries, Indicator::Danger);
    let unknown = count_overall(&entries, Indicator::Unknown);
    let failed = entries.iter().filter(|e| e.error.is_some()).count();

    let display_entries: Vec<&BatchEntry> = if issues_only {
        entries
            .iter()
            .filter(|e| e.overall != Some(Indicator::Safe))
            .collect()
    } else {
        entries.iter().collect()
    };

    if json {
        print_json_value(&display_entries)?;
    } else if !quiet {
        println!();

        for entry in &display_entries {
            let status_str = match entry.overall {
                Some(indicator) => paint_indicator(indicator),
                None => console::style("✗ not scanned").red().dim().to_string(),
            };

            let error_str = entry
                .error
                .as_ref()
                .map(|e| format!(" - {}", e))
                .unwrap_or_default();

            println!(
                "  {} {}{}",
                console::style(&entry.url).bold(),
                status_str,
                console::style(&error_str).red().dim()
            );
        }

        print_batch_summary(total, safe, suspicious, dangerous, unknown, failed);
    }

    Ok(entries.iter().map(entry_exit_code).max().unwrap_or(0))
}

fn count_overall(entries: &[BatchEntry], indicator: Indicator) -> usize {
    entries
        .iter()
        .filter(|e| e.overall == Some(indicator))
        .count()
}

/// Unscannable input counts as an operational failure (1) unless a scanned
/// URL produced something worse
fn entry_exit_code(entry: &BatchEntry) -> i32 {
    match entry.overall {
        Some(indicator) => exit_code(indicator),
        None => 1,
    }
}
