//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Environment variable holding the helper namespace.
pub const NAMESPACE_ENV: &str = "FORM_HELPERS_NAMESPACE";

/// Prefix used when no namespace is configured.
pub const DEFAULT_PREFIX: &str = "form";

/// Helper registration configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperConfig {
    /// Prefix for registered helper names (default: none, which registers
    /// helpers as `form-{helper}`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl HelperConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace = lookup(NAMESPACE_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if let Some(ns) = &namespace {
            validate_namespace(ns)?;
        }

        Ok(Self { namespace })
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// The prefix helpers are registered under.
    pub fn prefix(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_PREFIX)
    }
}

/// Check that a namespace is usable as a helper name prefix.
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() {
        bail!("{NAMESPACE_ENV} must not be empty");
    }
    if let Some(c) = namespace
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        bail!("{NAMESPACE_ENV} contains invalid character {c:?}: {namespace}");
    }
    Ok(())
}
