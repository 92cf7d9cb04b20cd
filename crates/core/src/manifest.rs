// Building tools from in-memory JSON manifests

use crate::config::{InvalidInputPolicy, LoaderConfig};
use crate::error::{DescriptorError, ManifestError, Result};
use crate::types::{Parameter, Tool, ToolInput};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct ToolManifest {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    inputs: Vec<InputEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct InputEntry {
    name: String,
    #[serde(rename = "type")]
    input_type: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    command_line_key: String,
    #[serde(default)]
    list: bool,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    command_line_flag: String,
}

/// Turns manifest documents into validated tools
#[derive(Debug, Clone, Default)]
pub struct ManifestLoader {
    config: LoaderConfig,
}

impl ManifestLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Parse a manifest from JSON text
    pub fn load_tool(&self, content: &str) -> Result<Tool> {
        let manifest: ToolManifest = serde_json::from_str(content).map_err(ManifestError::from)?;
        self.build(manifest)
    }

    /// Build a tool from an already-parsed manifest value
    pub fn load_tool_value(&self, value: serde_json::Value) -> Result<Tool> {
        let manifest: ToolManifest = serde_json::from_value(value).map_err(ManifestError::from)?;
        self.build(manifest)
    }

    fn build(&self, manifest: ToolManifest) -> Result<Tool> {
        let mut inputs = Vec::with_capacity(manifest.inputs.len());
        let mut seen = HashSet::new();
        let mut skipped = 0usize;

        for (index, entry) in manifest.inputs.into_iter().enumerate() {
            let name = entry.name.clone();
            let input = match ToolInput::new(
                entry.name,
                &entry.input_type,
                entry.description,
                entry.command_line_key,
                entry.list,
                entry.optional,
                entry.command_line_flag,
            ) {
                Ok(input) => input,
                Err(err) => match self.config.on_invalid_input {
                    InvalidInputPolicy::Abort => {
                        return Err(Self::entry_error(index, name, err));
                    }
                    InvalidInputPolicy::Skip => {
                        tracing::warn!(
                            "Skipping input #{} ({}) of tool {}: {}",
                            index,
                            name,
                            manifest.name,
                            err
                        );
                        skipped += 1;
                        continue;
                    }
                },
            };

            if !self.config.allow_duplicate_names && !seen.insert(input.name().to_string()) {
                return Err(ManifestError::DuplicateInput(name).into());
            }

            tracing::debug!("Loaded input {} ({})", input.name(), input.input_type());
            inputs.push(input);
        }

        tracing::info!(
            "Loaded tool {} with {} inputs ({} skipped)",
            manifest.name,
            inputs.len(),
            skipped
        );

        Ok(Tool::new(manifest.name, manifest.description, inputs))
    }

    fn entry_error(index: usize, name: String, source: DescriptorError) -> DescriptorError {
        ManifestError::Input {
            index,
            name,
            source: Box::new(source),
        }
        .into()
    }
}
