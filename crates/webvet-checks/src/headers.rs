//! Header-presence checks
//!
//! Each check performs one GET against the configured target and applies a
//! per-header predicate to the captured response. The predicates are pure
//! functions over the snapshot, so each rule is testable without a network.

use crate::client::{fetch, HttpResponse};
use std::time::Duration;
use tracing::debug;
use webvet_core::{Check, CheckConfig, CheckResult, Issue, Severity};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

fn fetch_ok(config: &CheckConfig) -> webvet_core::Result<HttpResponse> {
    let response = fetch(config, CONNECT_TIMEOUT, REQUEST_TIMEOUT)?;
    response.error_for_status()?;
    Ok(response)
}

/// Checks whether X-Frame-Options is set to a value browsers honor
pub struct XFrameOptionsCheck;

impl Check for XFrameOptionsCheck {
    fn name(&self) -> &str {
        "XFrameOptions"
    }

    fn run(&self, config: &CheckConfig) -> CheckResult {
        Ok(evaluate_x_frame_options(&fetch_ok(config)?))
    }
}

fn evaluate_x_frame_options(response: &HttpResponse) -> Vec<Issue> {
    match response.header("x-frame-options") {
        Some(value) => {
            // DENY and SAMEORIGIN are the only universally supported values
            if matches!(value.to_uppercase().as_str(), "DENY" | "SAMEORIGIN") {
                vec![Issue::new(
                    Severity::Info,
                    "Site has a correct X-Frame-Options header",
                )]
            } else {
                vec![Issue::new(
                    Severity::High,
                    format!(
                        "Site has X-Frame-Options header but it has an unknown or invalid value: {}",
                        value
                    ),
                )]
            }
        }
        None => vec![Issue::new(
            Severity::High,
            "Site has no X-Frame-Options header set",
        )],
    }
}

/// Checks whether an https site sends Strict-Transport-Security
///
/// Plain-http responses are not evaluated at all: HSTS only means something
/// on the scheme the response was actually served over.
pub struct HstsCheck;

impl Check for HstsCheck {
    fn name(&self) -> &str {
        "HSTS"
    }

    fn run(&self, config: &CheckConfig) -> CheckResult {
        Ok(evaluate_hsts(&fetch_ok(config)?))
    }
}

fn evaluate_hsts(response: &HttpResponse) -> Vec<Issue> {
    if !response.is_https() {
        debug!(url = %response.final_url, "Not https, skipping HSTS evaluation");
        return Vec::new();
    }
    if response.header("strict-transport-security").is_some() {
        vec![Issue::new(
            Severity::Info,
            "Site sets Strict-Transport-Security header",
        )]
    } else {
        vec![Issue::new(
            Severity::High,
            "Site does not set Strict-Transport-Security header",
        )]
    }
}

/// Checks for X-Content-Type-Options: nosniff
pub struct XContentTypeOptionsCheck;

impl Check for XContentTypeOptionsCheck {
    fn name(&self) -> &str {
        "XContentTypeOptions"
    }

    fn run(&self, config: &CheckConfig) -> CheckResult {
        Ok(evaluate_x_content_type_options(&fetch_ok(config)?))
    }
}

fn evaluate_x_content_type_options(response: &HttpResponse) -> Vec<Issue> {
    match response.header("x-content-type-options") {
        // The only defined value; the comparison is case-sensitive
        Some("nosniff") => vec![Issue::new(
            Severity::Info,
            "Site sets X-Content-Type-Options header",
        )],
        Some(_) => vec![Issue::new(
            Severity::High,
            "Site sets an invalid X-Content-Type-Options header",
        )],
        None => vec![Issue::new(
            Severity::High,
            "Site does not set X-Content-Type-Options header",
        )],
    }
}

/// Checks the X-XSS-Protection header
pub struct XXssProtectionCheck;

impl Check for XXssProtectionCheck {
    fn name(&self) -> &str {
        "XXSSProtection"
    }

    fn run(&self, config: &CheckConfig) -> CheckResult {
        Ok(evaluate_x_xss_protection(&fetch_ok(config)?))
    }
}

fn evaluate_x_xss_protection(response: &HttpResponse) -> Vec<Issue> {
    match response.header("x-xss-protection") {
        Some("1; mode=block") => vec![Issue::new(
            Severity::Info,
            "Site sets X-XSS-Protection header",
        )],
        Some("0") => vec![Issue::new(
            Severity::High,
            "Site sets X-XSS-Protection header to disable the XSS filter",
        )],
        Some(value) => vec![Issue::new(
            Severity::High,
            format!("Site sets an invalid X-XSS-Protection header: {}", value),
        )],
        None => vec![Issue::new(
            Severity::High,
            "Site does not set X-XSS-Protection header",
        )],
    }
}

/// Disclosure headers that reveal details about the server software
const DISCLOSURE_HEADERS: [&str; 5] = [
    "Server",
    "X-Powered-By",
    "X-AspNet-Version",
    "X-AspNetMvc-Version",
    "X-Backend-Server",
];

/// Checks for headers that disclose server implementation details
///
/// Emits one Medium issue per disclosure header present, independently, in
/// the order of `DISCLOSURE_HEADERS`.
pub struct ServerDetailsCheck;

impl Check for ServerDetailsCheck {
    fn name(&self) -> &str {
        "ServerDetails"
    }

    fn run(&self, config: &CheckConfig) -> CheckResult {
        Ok(evaluate_server_details(&fetch_ok(config)?))
    }
}

fn evaluate_server_details(response: &HttpResponse) -> Vec<Issue> {
    DISCLOSURE_HEADERS
        .iter()
        .filter(|name| response.header(name).is_some())
        .map(|name| Issue::new(Severity::Medium, format!("Site sets the '{}' header", name)))
        .collect()
}
