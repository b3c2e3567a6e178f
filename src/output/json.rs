//! JSON output formatter

use crate::models::ScanReport;
use crate::utils::Result;

/// Print a scan report as pretty JSON to stdout
pub fn print_json(report: &ScanReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

/// Print any serializable batch output as pretty JSON to stdout
pub fn print_json_value<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
