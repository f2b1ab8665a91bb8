//! Builder configuration.
//!
//! Controls how placeholders are named and how many a single statement may
//! allocate. Every field has a default, so an empty TOML document is valid:
//!
//! ```toml
//! placeholder_prefix = "$"
//! first_id = 1
//! max_placeholders = 65535
//! ```

use crate::error::{ClauseError, ClauseResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// PostgreSQL's extended query protocol carries the parameter count as an Int16.
pub const POSTGRES_MAX_PARAMETERS: u32 = 65535;

fn default_prefix() -> String {
    "$".to_string()
}

fn default_first_id() -> u32 {
    1
}

fn default_max_placeholders() -> u32 {
    POSTGRES_MAX_PARAMETERS
}

/// Configuration shared by registries and the statements that own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuilderConfig {
    /// Text written before each placeholder id (`$` renders `$1`, `$2`, ...).
    #[serde(default = "default_prefix")]
    pub placeholder_prefix: String,
    /// Id given to the first allocation of a fresh or reset registry.
    #[serde(default = "default_first_id")]
    pub first_id: u32,
    /// Upper bound on live placeholders per registry.
    #[serde(default = "default_max_placeholders")]
    pub max_placeholders: u32,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            placeholder_prefix: default_prefix(),
            first_id: default_first_id(),
            max_placeholders: default_max_placeholders(),
        }
    }
}

impl BuilderConfig {
    /// Create a configuration with defaults (`$` prefix, ids from 1, PostgreSQL's limit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.placeholder_prefix = prefix.into();
        self
    }

    /// Set the id of the first allocation.
    pub fn with_first_id(mut self, first_id: u32) -> Self {
        self.first_id = first_id;
        self
    }

    /// Set the placeholder capacity.
    pub fn with_max_placeholders(mut self, max: u32) -> Self {
        self.max_placeholders = max;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> ClauseResult<Self> {
        let config: BuilderConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ClauseResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ClauseError::config(format!("failed to read config file {}: {e}", path.display()))
        })?;

        Self::from_toml_str(&raw).map_err(|e| match e {
            ClauseError::Config(msg) => ClauseError::config(format!(
                "failed to parse config file {}: {msg}",
                path.display()
            )),
            other => other,
        })
    }

    /// Check the configuration for values that would produce ambiguous or unbindable SQL.
    pub fn validate(&self) -> ClauseResult<()> {
        let prefix = &self.placeholder_prefix;
        if prefix.is_empty() {
            return Err(ClauseError::config("placeholder_prefix cannot be empty"));
        }
        if prefix.chars().any(|c| c.is_whitespace() || c == '\0') {
            return Err(ClauseError::config(format!(
                "placeholder_prefix '{prefix}' cannot contain whitespace or NUL"
            )));
        }
        if prefix.ends_with(|c: char| c.is_ascii_digit()) {
            return Err(ClauseError::config(format!(
                "placeholder_prefix '{prefix}' cannot end with a digit"
            )));
        }
        if self.first_id == 0 {
            return Err(ClauseError::config("first_id must be at least 1"));
        }
        if self.max_placeholders == 0 {
            return Err(ClauseError::config("max_placeholders must be at least 1"));
        }
        if self.first_id.checked_add(self.max_placeholders - 1).is_none() {
            return Err(ClauseError::config(format!(
                "first_id {} leaves no room for {} placeholders",
                self.first_id, self.max_placeholders
            )));
        }
        Ok(())
    }
}
