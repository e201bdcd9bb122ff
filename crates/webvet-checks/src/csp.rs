//! Content-Security-Policy check and directive parser

use crate::client::{fetch, HttpResponse};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use webvet_core::{Check, CheckConfig, CheckResult, Issue, Severity};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Header names recognized as a full policy, in lookup order
///
/// Both the standard name and the legacy experimental form are accepted;
/// lookup is case-insensitive.
const CSP_HEADERS: [&str; 2] = ["content-security-policy", "x-content-security-policy"];

/// Header names recognized as a report-only policy
const CSP_REPORT_ONLY_HEADERS: [&str; 2] = [
    "content-security-policy-report-only",
    "x-content-security-policy-report-only",
];

/// Parse a raw Content-Security-Policy header value into a directive mapping
///
/// Clauses are separated by `;` with optional surrounding whitespace. The
/// first token of a clause is the directive name, the remaining tokens its
/// values. Values of a repeated directive name are appended to the existing
/// entry, never replaced. A clause with a name and no values yields an
/// empty value list; a clause with no tokens at all contributes nothing.
/// The parser never fails.
pub fn parse_csp(raw: &str) -> HashMap<String, Vec<String>> {
    let mut directives: HashMap<String, Vec<String>> = HashMap::new();

    for clause in raw.split(';') {
        let mut tokens = clause.split_whitespace();
        if let Some(name) = tokens.next() {
            directives
                .entry(name.to_string())
                .or_default()
                .extend(tokens.map(str::to_string));
        }
    }

    directives
}

/// Checks the Content-Security-Policy configuration of the target
pub struct CspCheck;

impl Check for CspCheck {
    fn name(&self) -> &str {
        "CSP"
    }

    fn run(&self, config: &CheckConfig) -> CheckResult {
        let response = fetch(config, CONNECT_TIMEOUT, REQUEST_TIMEOUT)?;
        response.error_for_status()?;
        Ok(evaluate(&response))
    }
}

fn first_header<'a>(response: &'a HttpResponse, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| response.header(name))
}

fn evaluate(response: &HttpResponse) -> Vec<Issue> {
    let policy = first_header(response, &CSP_HEADERS);
    let report_only = first_header(response, &CSP_REPORT_ONLY_HEADERS);

    // Fast fail if both headers are set
    if policy.is_some() && report_only.is_some() {
        return vec![Issue::new(
            Severity::High,
            "Both Content-Security-Policy and Content-Security-Policy-Report-Only headers set",
        )];
    }

    // Fast fail if only reporting is enabled
    if report_only.is_some() {
        return vec![Issue::new(
            Severity::High,
            "Content-Security-Policy-Report-Only header set",
        )];
    }

    let raw = match policy {
        Some(raw) => raw,
        None => {
            return vec![Issue::new(
                Severity::High,
                "No Content-Security-Policy header set",
            )]
        }
    };

    let directives = parse_csp(raw);
    if directives.is_empty() {
        return vec![Issue::new(
            Severity::High,
            "Malformed Content-Security-Policy header set",
        )];
    }
    debug!(directives = directives.len(), "Parsed CSP header");

    // eval-script and inline-script each defeat the point of CSP on their own
    let mut issues = Vec::new();
    if let Some(options) = directives.get("options") {
        if options.iter().any(|v| v == "eval-script") {
            issues.push(Issue::new(Severity::High, "CSP Rules allow eval-script"));
        }
        if options.iter().any(|v| v == "inline-script") {
            issues.push(Issue::new(Severity::High, "CSP Rules allow inline-script"));
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(headers: &[(&str, &str)]) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            final_url: "https://example.com/".to_string(),
        }
    }

    #[test]
    fn test_parse_two_directives() {
        let parsed = parse_csp("default-src 'self'; script-src 'none'");

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["default-src"], vec!["'self'"]);
        assert_eq!(parsed["script-src"], vec!["'none'"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_csp("").is_empty());
        assert!(parse_csp("   ").is_empty());
        assert!(parse_csp(";;;").is_empty());
    }

    #[test]
    fn test_parse_repeated_directive_accumulates() {
        let parsed = parse_csp("img-src a.example.com; img-src b.example.com");
        assert_eq!(parsed["img-src"], vec!["a.example.com", "b.example.com"]);
    }

    #[test]
    fn test_parse_name_only_clause() {
        let parsed = parse_csp("sandbox");
        assert_eq!(parsed["sandbox"], Vec::<String>::new());
    }

    #[test]
    fn test_parse_options_tokens_preserve_order() {
        let parsed = parse_csp("options eval-script inline-script");
        assert_eq!(parsed["options"], vec!["eval-script", "inline-script"]);
    }

    #[test]
    fn test_both_headers_set() {
        let issues = evaluate(&response_with(&[
            ("Content-Security-Policy", "default-src 'self'"),
            ("Content-Security-Policy-Report-Only", "default-src 'self'"),
        ]));

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::High);
        assert!(issues[0].summary.starts_with("Both"));
    }

    #[test]
    fn test_report_only_header_set() {
        let issues = evaluate(&response_with(&[(
            "Content-Security-Policy-Report-Only",
            "default-src 'self'",
        )]));

        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].summary,
            "Content-Security-Policy-Report-Only header set"
        );
    }

    #[test]
    fn test_no_header_set() {
        let issues = evaluate(&response_with(&[]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].summary, "No Content-Security-Policy header set");
    }

    #[test]
    fn test_empty_header_is_malformed() {
        let issues = evaluate(&response_with(&[("Content-Security-Policy", "")]));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].summary,
            "Malformed Content-Security-Policy header set"
        );
    }

    #[test]
    fn test_eval_and_inline_script_fire_independently() {
        let issues = evaluate(&response_with(&[(
            "Content-Security-Policy",
            "options eval-script inline-script",
        )]));

        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::High));
        assert_eq!(issues[0].summary, "CSP Rules allow eval-script");
        assert_eq!(issues[1].summary, "CSP Rules allow inline-script");

        let issues = evaluate(&response_with(&[(
            "Content-Security-Policy",
            "options eval-script",
        )]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].summary, "CSP Rules allow eval-script");
    }

    #[test]
    fn test_clean_policy_emits_nothing() {
        let issues = evaluate(&response_with(&[(
            "Content-Security-Policy",
            "default-src 'self'; script-src 'none'",
        )]));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_legacy_header_name_is_recognized() {
        let issues = evaluate(&response_with(&[(
            "X-Content-Security-Policy",
            "default-src 'self'",
        )]));
        assert!(issues.is_empty());

        let issues = evaluate(&response_with(&[(
            "X-Content-Security-Policy-Report-Only",
            "default-src 'self'",
        )]));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_header_names_match_case_insensitively() {
        let issues = evaluate(&response_with(&[(
            "CONTENT-SECURITY-POLICY",
            "options inline-script",
        )]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].summary, "CSP Rules allow inline-script");
    }
}
