//! Check registry - index of the available checks

use crate::alive::AliveCheck;
use crate::csp::CspCheck;
use crate::headers::{
    HstsCheck, ServerDetailsCheck, XContentTypeOptionsCheck, XFrameOptionsCheck,
    XXssProtectionCheck,
};
use crate::robots::RobotsCheck;
use std::collections::HashMap;
use std::sync::Arc;
use webvet_core::Check;

/// Registry of checks, indexed by name
///
/// Lets a host runtime enumerate and select checks without hard-coding the
/// catalog.
pub struct CheckRegistry {
    checks: HashMap<String, Arc<dyn Check>>,
}

impl CheckRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            checks: HashMap::new(),
        }
    }

    /// Create a registry preloaded with the built-in checks
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(AliveCheck));
        registry.register(Arc::new(XFrameOptionsCheck));
        registry.register(Arc::new(HstsCheck));
        registry.register(Arc::new(XContentTypeOptionsCheck));
        registry.register(Arc::new(XXssProtectionCheck));
        registry.register(Arc::new(ServerDetailsCheck));
        registry.register(Arc::new(RobotsCheck));
        registry.register(Arc::new(CspCheck));
        registry
    }

    /// Register a check under its name
    pub fn register(&mut self, check: Arc<dyn Check>) {
        self.checks.insert(check.name().to_string(), check);
    }

    /// Get a check by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Check>> {
        self.checks.get(name).cloned()
    }

    /// Get all registered check names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.keys().map(|s| s.as_str())
    }

    /// Get all registered checks
    pub fn all(&self) -> impl Iterator<Item = Arc<dyn Check>> + '_ {
        self.checks.values().cloned()
    }

    /// Get number of registered checks
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}
