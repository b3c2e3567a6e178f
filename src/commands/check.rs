//! Check command implementation

use crate::config::Settings;
use crate::models::Indicator;
use crate::output::{self, print_json};
use crate::runner::{self, ScanPlan};
use crate::utils::Result;

/// Map an overall indicator to the process exit code. Operational failures
/// use 1, so verdict codes start above it.
pub fn exit_code(overall: Indicator) -> i32 {
    match overall {
        Indicator::Safe => 0,
        Indicator::Warning | Indicator::Unknown => 2,
        Indicator::Danger => 3,
    }
}

/// Run the check command; returns the exit code derived from the verdict
pub async fn run_check(
    url: &str,
    settings: &Settings,
    plan: ScanPlan,
    json: bool,
    quiet: bool,
) -> Result<i32> {
    let spinner = if quiet || json {
        None
    } else {
        Some(output::create_spinner(&format!("Checking {}...", url)))
    };

    let report = runner::scan(url, settings, plan).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let report = report?;

    if json {
        print_json(&report)?;
    } else if !quiet {
        output::print_overall(&report);
        println!();
        output::print_result_table(&report);
        output::print_legend();
    }

    Ok(exit_code(report.overall))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(Indicator::Safe), 0);
        assert_eq!(exit_code(Indicator::Warning), 2);
        assert_eq!(exit_code(Indicator::Unknown), 2);
        assert_eq!(exit_code(Indicator::Danger), 3);
    }

    #[test]
    fn test_verdict_codes_clear_operational_code() {
        // Exit code 1 is reserved for operational errors
        for indicator in [Indicator::Warning, Indicator::Unknown, Indicator::Danger] {
            assert!(exit_code(indicator) > 1);
        }
    }
}
