//! Error types for mapping operations.

use lightmap_model::{AssignError, ModelError, TransformError};
use thiserror::Error;

/// Errors that abort a `map` call.
#[derive(Debug, Error)]
pub enum MapError {
    /// A required property's resolved source key is absent from the source.
    #[error("Missing required property '{0}'")]
    MissingRequiredProperty(String),
    /// A required property was named in the exclusion list.
    #[error("Property '{0}' excluded but is required")]
    RequiredButExcluded(String),
    /// The target type's metadata could not be registered.
    #[error("metadata error: {0}")]
    Metadata(#[from] ModelError),
    /// A transformation rejected its input.
    #[error(transparent)]
    Transform(#[from] TransformError),
    /// The target's setter refused the value.
    #[error(transparent)]
    Assign(#[from] AssignError),
}

pub type Result<T> = std::result::Result<T, MapError>;
