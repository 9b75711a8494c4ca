use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid spec document: {0}")]
    Document(#[from] serde_json::Error),
    #[error("invalid property name: {0:?}")]
    InvalidPropertyName(String),
    #[error("unknown requirement mode: {0}")]
    UnknownRequirement(String),
    #[error("unknown transformation: {0}")]
    UnknownTransform(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// Failure raised by a transformation function.
///
/// The engine forwards it to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransformError {
    message: String,
}

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors from a target's property setter table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error("target has no property '{0}'")]
    UnknownProperty(String),
    #[error("property '{property}' cannot hold value: {reason}")]
    InvalidValue { property: String, reason: String },
}

impl AssignError {
    pub fn invalid(property: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.to_string(),
            reason: reason.into(),
        }
    }
}
