//! Blocking HTTP client wrapper and response snapshot

use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;
use webvet_core::{CheckConfig, Error, Result};

/// User agent sent with every request
const USER_AGENT: &str = concat!("webvet/", env!("CARGO_PKG_VERSION"));

/// Snapshot of an HTTP response
///
/// Checks evaluate this snapshot rather than the live response, so every
/// evaluation stays a pure function over captured data. The underlying
/// connection is released when the live response is dropped at capture
/// time, on every exit path.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Final URL (after redirects)
    pub final_url: String,
}

impl HttpResponse {
    /// Check if the response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the final URL was served over https
    pub fn is_https(&self) -> bool {
        self.final_url.starts_with("https://")
    }

    /// Error if the status is outside the 2xx range
    pub fn error_for_status(&self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::UnexpectedStatus {
                url: self.final_url.clone(),
                status: self.status,
            })
        }
    }
}

/// Blocking HTTP client with per-check timeouts
///
/// TLS, redirect following, and timeout enforcement are owned by the
/// underlying library; the wrapper only captures the response and maps
/// transport failures onto the core error variants.
pub struct HttpClient {
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpClient {
    /// Build a client with the given connect and total timeouts
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Request(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Perform a GET request and capture the response
    pub fn get(&self, url: &Url) -> Result<HttpResponse> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| self.map_error(url, e))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.to_string(), v.to_string());
            }
        }

        debug!(%url, status, "Captured response");
        Ok(HttpResponse {
            status,
            headers,
            final_url,
        })
    }

    fn map_error(&self, url: &Url, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                url: url.to_string(),
                seconds: self.timeout.as_secs(),
            }
        } else if err.is_connect() {
            Error::Connection {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            Error::Request(err.to_string())
        }
    }
}

/// Fetch the configured target, the shared first step of every check
pub fn fetch(
    config: &CheckConfig,
    connect_timeout: Duration,
    timeout: Duration,
) -> Result<HttpResponse> {
    let url = config.target_url()?;
    let client = HttpClient::new(connect_timeout, timeout)?;
    client.get(&url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(status: u16, headers: &[(&str, &str)]) -> HttpResponse {
        HttpResponse {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            final_url: "https://example.com/".to_string(),
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = response_with(200, &[("X-Frame-Options", "DENY")]);
        assert_eq!(response.header("x-frame-options"), Some("DENY"));
        assert_eq!(response.header("X-FRAME-OPTIONS"), Some("DENY"));
        assert_eq!(response.header("x-powered-by"), None);
    }

    #[test]
    fn test_is_success() {
        assert!(response_with(200, &[]).is_success());
        assert!(response_with(204, &[]).is_success());
        assert!(!response_with(301, &[]).is_success());
        assert!(!response_with(404, &[]).is_success());
    }

    #[test]
    fn test_error_for_status() {
        assert!(response_with(200, &[]).error_for_status().is_ok());

        let err = response_with(503, &[]).error_for_status().unwrap_err();
        assert!(matches!(err, Error::UnexpectedStatus { status: 503, .. }));
    }

    #[test]
    fn test_is_https_follows_final_url() {
        let mut response = response_with(200, &[]);
        assert!(response.is_https());

        response.final_url = "http://example.com/".to_string();
        assert!(!response.is_https());
    }
}
