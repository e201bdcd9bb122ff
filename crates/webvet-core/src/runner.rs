//! Execution harness - the host-facing half of the runtime contract

use crate::check::Check;
use crate::config::CheckConfig;
use crate::issue::Issue;
use crate::severity::Severity;
use tracing::{debug, warn};

/// Run a check and normalize its outcome into a sequence of issues
///
/// Normal completion passes the check's issues through untouched. A failure
/// propagating out of `run` becomes exactly one Error-severity issue naming
/// the check and carrying the configured target plus the failure detail, so
/// a host sees every outcome as a sequence of issues.
pub fn run_check(check: &dyn Check, config: &CheckConfig) -> Vec<Issue> {
    debug!(check = check.name(), target = %config.target, "Running check");

    match check.run(config) {
        Ok(issues) => {
            debug!(check = check.name(), issues = issues.len(), "Check completed");
            issues
        }
        Err(err) => {
            warn!(check = check.name(), error = %err, "Check failed");
            vec![
                Issue::new(Severity::Error, format!("{} check failed", check.name()))
                    .with_url(config.target.clone(), Some(err.to_string())),
            ]
        }
    }
}
