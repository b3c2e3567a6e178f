//! Indicator classes shown to the user

use serde::Serialize;
use std::fmt;

/// Severity bucket assigned to a single check outcome.
///
/// Ordered ascending by severity for aggregation: `Safe < Warning < Unknown
/// < Danger`. `Unknown` (data absent or provider error) sorts above
/// `Warning` so that missing information always alerts the user, and below
/// `Danger` so a confirmed problem always wins outright. It is rendered
/// distinctly from `Danger` and must never be read as `Safe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Safe,
    Warning,
    Unknown,
    Danger,
}

impl Indicator {
    /// All indicators in legend order
    pub const LEGEND: [Indicator; 4] = [
        Indicator::Safe,
        Indicator::Warning,
        Indicator::Danger,
        Indicator::Unknown,
    ];

    /// Legend text for this indicator
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::Safe => "safe",
            Indicator::Warning => "potentially suspicious",
            Indicator::Danger => "identified as phishing",
            Indicator::Unknown => "information not found/error",
        }
    }

    /// Get the icon for this indicator
    pub fn icon(&self) -> &'static str {
        match self {
            Indicator::Safe => "✓",
            Indicator::Warning => "⚠",
            Indicator::Danger => "✗",
            Indicator::Unknown => "?",
        }
    }

    /// Get the color name for this indicator
    pub fn color_name(&self) -> &'static str {
        match self {
            Indicator::Safe => "green",
            Indicator::Warning => "yellow",
            Indicator::Danger => "red",
            Indicator::Unknown => "grey",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
