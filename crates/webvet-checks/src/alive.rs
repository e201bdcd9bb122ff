//! Alive check - is the target reachable at all

use crate::client::HttpClient;
use std::time::Duration;
use tracing::debug;
use url::Url;
use webvet_core::{Check, CheckConfig, CheckResult, Error, Issue, Severity};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Checks whether the target site is reachable
///
/// Intended as the first check of a plan: any transport failure or
/// non-success status yields a single Error-severity issue carrying the
/// target and the failure detail, signaling the host that dependent checks
/// should not proceed. A 2xx response yields nothing.
pub struct AliveCheck;

impl Check for AliveCheck {
    fn name(&self) -> &str {
        "Alive"
    }

    fn run(&self, config: &CheckConfig) -> CheckResult {
        let url = config.target_url()?;
        let client = HttpClient::new(CONNECT_TIMEOUT, REQUEST_TIMEOUT)?;

        match client.get(&url) {
            Ok(response) => Ok(evaluate(&url, response.status)),
            Err(err) => {
                debug!(target = %url, error = %err, "Target unreachable");
                Ok(vec![unreachable_issue(&url, &err)])
            }
        }
    }
}

fn evaluate(target: &Url, status: u16) -> Vec<Issue> {
    if (200..300).contains(&status) {
        return Vec::new();
    }
    let err = Error::UnexpectedStatus {
        url: target.to_string(),
        status,
    };
    vec![unreachable_issue(target, &err)]
}

fn unreachable_issue(target: &Url, err: &Error) -> Issue {
    Issue::new(Severity::Error, "Site could not be reached")
        .with_url(target.to_string(), Some(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    #[test]
    fn test_success_emits_nothing() {
        assert!(evaluate(&target(), 200).is_empty());
        assert!(evaluate(&target(), 204).is_empty());
    }

    #[test]
    fn test_non_success_emits_one_error_issue() {
        let issues = evaluate(&target(), 503);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].summary, "Site could not be reached");
        assert_eq!(issues[0].urls[0].url, "https://example.com/");
        assert!(issues[0].urls[0].extra.as_deref().unwrap().contains("503"));
    }

    #[test]
    fn test_transport_failure_issue_carries_detail() {
        let err = Error::Connection {
            url: "https://example.com/".into(),
            message: "connection refused".into(),
        };
        let issue = unreachable_issue(&target(), &err);

        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.urls.len(), 1);
        assert!(issue.urls[0]
            .extra
            .as_deref()
            .unwrap()
            .contains("connection refused"));
    }
}
