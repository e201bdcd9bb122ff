//! Severity levels for reported issues

use serde::{Deserialize, Serialize};

/// Severity of an issue
///
/// `Error` is reserved for conditions that abort the surrounding workflow,
/// such as an unreachable target; it is never used for ordinary findings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    /// Informational finding, no security impact
    #[default]
    Info,
    /// Medium severity, moderate risk
    Medium,
    /// High severity, significant risk
    High,
    /// The check's premise could not be evaluated
    Error,
}

impl Severity {
    /// Get numeric value for sorting/comparison
    pub fn as_number(&self) -> u8 {
        match self {
            Severity::Info => 0,
            Severity::Medium => 1,
            Severity::High => 2,
            Severity::Error => 3,
        }
    }

    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Error => "Error",
        }
    }

    /// Whether issues at this severity abort the surrounding workflow
    pub fn is_fatal(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
