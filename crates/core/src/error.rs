//! Error types for tool descriptors and manifest loading.

use crate::types::InputType;

/// Result type for descriptor operations.
pub type Result<T> = std::result::Result<T, DescriptorError>;

/// Errors raised while building tool descriptors.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// The declared input type is not one of the recognized tokens.
    #[error("Unknown input type: {found:?} (expected one of {})", join_tokens(.accepted))]
    InvalidType {
        found: String,
        accepted: &'static [InputType],
    },

    /// Manifest could not be turned into a tool.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Loader configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

impl DescriptorError {
    pub(crate) fn invalid_type(found: impl Into<String>) -> Self {
        Self::InvalidType {
            found: found.into(),
            accepted: InputType::ALL,
        }
    }

    /// Check if this error came from an unrecognized input type.
    pub fn is_invalid_type(&self) -> bool {
        match self {
            Self::InvalidType { .. } => true,
            Self::Manifest(ManifestError::Input { source, .. }) => source.is_invalid_type(),
            _ => false,
        }
    }
}

/// Errors specific to reading a tool manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Manifest text is not valid JSON or does not have the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An input entry failed validation.
    #[error("Input #{index} ({name}): {source}")]
    Input {
        index: usize,
        name: String,
        #[source]
        source: Box<DescriptorError>,
    },

    /// Two inputs share the same name.
    #[error("Duplicate input name: {0}")]
    DuplicateInput(String),
}

fn join_tokens(types: &[InputType]) -> String {
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
