//! Check configuration supplied by the host runtime

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Configuration consumed, not owned, by a check
///
/// The host runtime supplies at minimum `target`, the absolute URL to
/// probe. Checks read the mapping and never mutate it; a missing or
/// malformed target is a configuration error, not a finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Absolute URL of the site to probe
    pub target: String,

    /// Remaining host-supplied keys, passed through untouched
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl CheckConfig {
    /// Create a configuration for a target URL
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            extra: HashMap::new(),
        }
    }

    /// Parse and validate a configuration from the host's JSON mapping
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        if value.get("target").is_none() {
            return Err(Error::MissingConfig {
                key: "target".into(),
            });
        }
        let config: CheckConfig =
            serde_json::from_value(value).map_err(|e| Error::Configuration(e.to_string()))?;
        config.target_url()?;
        Ok(config)
    }

    /// The target as a validated absolute URL
    pub fn target_url(&self) -> Result<Url> {
        if self.target.is_empty() {
            return Err(Error::MissingConfig {
                key: "target".into(),
            });
        }
        Url::parse(&self.target).map_err(|_| Error::InvalidTarget(self.target.clone()))
    }
}
