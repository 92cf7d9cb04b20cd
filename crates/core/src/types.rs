// Core descriptor types for tool inputs

use crate::error::{DescriptorError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declared kind of a tool input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputType {
    String,
    File,
    Flag,
    Numeric,
}

impl InputType {
    /// Every accepted input type, in declaration order
    pub const ALL: &'static [InputType] = &[
        InputType::String,
        InputType::File,
        InputType::Flag,
        InputType::Numeric,
    ];

    /// Token used for this type in tool manifests
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::String => "String",
            InputType::File => "File",
            InputType::Flag => "Flag",
            InputType::Numeric => "Numeric",
        }
    }
}

impl FromStr for InputType {
    type Err = DescriptorError;

    /// Exact, case-sensitive match against the manifest tokens.
    fn from_str(s: &str) -> Result<Self> {
        InputType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DescriptorError::invalid_type(s))
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accessors shared by every kind of tool parameter
pub trait Parameter {
    fn descriptor(&self) -> &ParameterDescriptor;

    fn name(&self) -> &str {
        &self.descriptor().name
    }

    fn description(&self) -> &str {
        &self.descriptor().description
    }

    fn command_line_key(&self) -> &str {
        &self.descriptor().command_line_key
    }

    fn is_list(&self) -> bool {
        self.descriptor().is_list
    }

    fn is_optional(&self) -> bool {
        self.descriptor().is_optional
    }

    fn command_line_flag(&self) -> &str {
        &self.descriptor().command_line_flag
    }
}

/// Descriptive and command-line metadata common to tool parameters.
///
/// Serialized with the same keys a manifest input entry uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub command_line_key: String,
    #[serde(default, rename = "list")]
    pub is_list: bool,
    #[serde(default, rename = "optional")]
    pub is_optional: bool,
    /// Literal flag token passed before the value; empty when the key is positional
    #[serde(default)]
    pub command_line_flag: String,
}

impl ParameterDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        command_line_key: impl Into<String>,
        is_list: bool,
        is_optional: bool,
        command_line_flag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            command_line_key: command_line_key.into(),
            is_list,
            is_optional,
            command_line_flag: command_line_flag.into(),
        }
    }
}

impl Parameter for ParameterDescriptor {
    fn descriptor(&self) -> &ParameterDescriptor {
        self
    }
}

/// One declared input of a tool.
///
/// Fields are private so the type can only be obtained through a validating
/// constructor. There is no mutation path after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolInput {
    #[serde(flatten)]
    base: ParameterDescriptor,
    #[serde(rename = "type")]
    input_type: InputType,
}

impl ToolInput {
    /// Build an input from a raw type token, as read from a manifest.
    ///
    /// Fails with [`DescriptorError::InvalidType`] unless `input_type` is
    /// exactly one of `String`, `File`, `Flag` or `Numeric`.
    pub fn new(
        name: impl Into<String>,
        input_type: &str,
        description: impl Into<String>,
        command_line_key: impl Into<String>,
        is_list: bool,
        is_optional: bool,
        command_line_flag: impl Into<String>,
    ) -> Result<Self> {
        let base = ParameterDescriptor::new(
            name,
            description,
            command_line_key,
            is_list,
            is_optional,
            command_line_flag,
        );
        let input_type = input_type.parse::<InputType>()?;
        Ok(Self::with_type(base, input_type))
    }

    /// Build an input from an already-typed declaration
    pub fn with_type(base: ParameterDescriptor, input_type: InputType) -> Self {
        Self { base, input_type }
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }
}

impl Parameter for ToolInput {
    fn descriptor(&self) -> &ParameterDescriptor {
        &self.base
    }
}

/// A tool and the inputs it declares
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    inputs: Vec<ToolInput>,
}

impl Tool {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        inputs: Vec<ToolInput>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            inputs,
        }
    }

    pub fn inputs(&self) -> &[ToolInput] {
        &self.inputs
    }

    /// Get an input by name
    pub fn input(&self, name: &str) -> Option<&ToolInput> {
        self.inputs.iter().find(|i| i.name() == name)
    }

    /// Get the first input bound to a command-line key
    pub fn input_by_command_line_key(&self, key: &str) -> Option<&ToolInput> {
        self.inputs.iter().find(|i| i.command_line_key() == key)
    }

    /// Inputs that must be supplied on every invocation
    pub fn required_inputs(&self) -> impl Iterator<Item = &ToolInput> {
        self.inputs.iter().filter(|i| !i.is_optional())
    }
}
