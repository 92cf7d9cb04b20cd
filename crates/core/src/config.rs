// Manifest loader configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// What to do with a manifest input whose declaration is invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInputPolicy {
    /// Fail the whole load
    #[default]
    Abort,
    /// Drop the entry and keep going
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default)]
    pub on_invalid_input: InvalidInputPolicy,

    #[serde(default = "default_allow_duplicate_names")]
    pub allow_duplicate_names: bool,
}

fn default_allow_duplicate_names() -> bool {
    false
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            on_invalid_input: InvalidInputPolicy::default(),
            allow_duplicate_names: default_allow_duplicate_names(),
        }
    }
}

impl LoaderConfig {
    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }
}
