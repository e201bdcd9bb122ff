//! webvet checks - the built-in web security checks
//!
//! Every check probes a configured target with a single HTTP(S) GET and
//! derives zero or more issues from the captured response:
//! - reachability (`AliveCheck`)
//! - defensive headers (`XFrameOptionsCheck`, `HstsCheck`,
//!   `XContentTypeOptionsCheck`, `XXssProtectionCheck`)
//! - information disclosure (`ServerDetailsCheck`)
//! - robots.txt presence (`RobotsCheck`)
//! - Content-Security-Policy configuration (`CspCheck`)
//!
//! Checks are independent and stateless; a host runtime schedules them and
//! collects their issues.
//!
//! # Example
//!
//! ```no_run
//! use webvet_checks::CheckRegistry;
//! use webvet_core::{runner, CheckConfig};
//!
//! let config = CheckConfig::new("https://example.com");
//! let registry = CheckRegistry::builtin();
//!
//! for check in registry.all() {
//!     for issue in runner::run_check(check.as_ref(), &config) {
//!         println!("{}: {}", issue.severity, issue.summary);
//!     }
//! }
//! ```

pub mod alive;
pub mod client;
pub mod csp;
pub mod headers;
pub mod registry;
pub mod robots;

pub use alive::AliveCheck;
pub use client::{HttpClient, HttpResponse};
pub use csp::{parse_csp, CspCheck};
pub use headers::{
    HstsCheck, ServerDetailsCheck, XContentTypeOptionsCheck, XFrameOptionsCheck,
    XXssProtectionCheck,
};
pub use registry::CheckRegistry;
pub use robots::RobotsCheck;
