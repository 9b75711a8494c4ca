//! Requirement modes for mapped properties.
//!
//! The mode decides what happens when a property's source field is absent:
//! - **Required**: the mapping fails
//! - **Optional**: the target keeps its default
//! - **Nullable**: the target receives an explicit null

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// How a target property reacts to a missing source field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// Source field must be present; absence aborts the mapping.
    Required,
    /// Absence leaves the target property untouched.
    Optional,
    /// Absence assigns null to the target property.
    Nullable,
}

impl Requirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Requirement::Required => "required",
            Requirement::Optional => "optional",
            Requirement::Nullable => "nullable",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Requirement::Required)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Requirement {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "required" => Ok(Requirement::Required),
            "optional" => Ok(Requirement::Optional),
            "nullable" => Ok(Requirement::Nullable),
            _ => Err(ModelError::UnknownRequirement(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Requirement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
