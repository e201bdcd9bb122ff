//! Check trait - the interface all checks implement

use crate::config::CheckConfig;
use crate::error::Result;
use crate::issue::Issue;
use serde::{Deserialize, Serialize};

/// Result of running a check
///
/// Zero issues is a valid outcome: nothing was found at the configured
/// severity threshold.
pub type CheckResult = Result<Vec<Issue>>;

/// Expected run cost of a check, a scheduling hint for the host runtime
///
/// The check itself never evaluates its own weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    /// A single quick request
    #[default]
    Light,
    /// Long-running or many requests
    Heavy,
}

impl Weight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weight::Light => "light",
            Weight::Heavy => "heavy",
        }
    }
}

/// The trait that all checks implement
///
/// `run` is synchronous and blocking: it performs the check's documented
/// HTTP request(s) and its evaluation inline, then returns. A check holds
/// no state between invocations and has no observable side effect beyond
/// the request itself; retry policy, scheduling, and isolation belong to
/// the host runtime.
pub trait Check: Send + Sync {
    /// Short name identifying this check (e.g. "XFrameOptions")
    fn name(&self) -> &str;

    /// Expected run cost, read only by the host scheduler
    fn weight(&self) -> Weight {
        Weight::Light
    }

    /// Execute the check against the configured target
    fn run(&self, config: &CheckConfig) -> CheckResult;
}
