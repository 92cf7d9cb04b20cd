// Tool input descriptors and the in-memory manifest loader built on them

pub mod config;
pub mod error;
pub mod manifest;
pub mod schema;
pub mod types;

pub use config::{InvalidInputPolicy, LoaderConfig};
pub use error::{DescriptorError, ManifestError, Result};
pub use manifest::ManifestLoader;
pub use types::*;
