//! Robots check - does the site serve a robots.txt

use crate::client::{fetch, HttpResponse};
use std::time::Duration;
use webvet_core::{Check, CheckConfig, CheckResult, Issue, Severity};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Checks that the configured target answers with a 200
///
/// The host points this check at the site's robots.txt URL; anything other
/// than a 200 is reported as a missing robots.txt. Transport failures
/// propagate as a check failure.
pub struct RobotsCheck;

impl Check for RobotsCheck {
    fn name(&self) -> &str {
        "Robots"
    }

    fn run(&self, config: &CheckConfig) -> CheckResult {
        let response = fetch(config, CONNECT_TIMEOUT, REQUEST_TIMEOUT)?;
        Ok(evaluate(&response))
    }
}

fn evaluate(response: &HttpResponse) -> Vec<Issue> {
    if response.status != 200 {
        vec![Issue::new(Severity::Medium, "No robots.txt found")]
    } else {
        Vec::new()
    }
}
