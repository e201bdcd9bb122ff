//! Issue definitions - the findings a check reports

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A single security-relevant observation produced by a check
///
/// Issues are write-once records: a check constructs them, hands them
/// upward, and neither the check nor the host mutates them afterwards.
/// They carry no generated ids or timestamps, so running a check twice
/// over identical responses yields identical issue sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Human-readable description of the finding
    #[serde(rename = "Summary")]
    pub summary: String,

    /// Severity classification
    #[serde(rename = "Severity")]
    pub severity: Severity,

    /// Resources the finding is tied to, with per-resource diagnostic detail
    ///
    /// Empty for header findings that relate only to the configured target.
    #[serde(rename = "URLs", default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<IssueUrl>,
}

/// A resource referenced by an issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueUrl {
    #[serde(rename = "URL")]
    pub url: String,

    /// Diagnostic detail, e.g. the error string from a failed fetch
    #[serde(rename = "Extra", default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Issue {
    /// Create a new issue with no attached URLs
    pub fn new(severity: Severity, summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            severity,
            urls: Vec::new(),
        }
    }

    /// Attach a resource with optional diagnostic detail
    pub fn with_url(mut self, url: impl Into<String>, extra: Option<String>) -> Self {
        self.urls.push(IssueUrl {
            url: url.into(),
            extra,
        });
        self
    }
}
