//! Named transformations usable from spec documents.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, TransformError};
use crate::spec::Transformation;
use crate::value::Value;

/// Built-in value transformations addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinTransform {
    /// Uppercase string values.
    Uppercase,
    /// Lowercase string values.
    Lowercase,
    /// Trim surrounding whitespace from string values.
    Trim,
    /// Render any value as a string (null stays null).
    ToString,
    /// Parse strings as numbers; numbers pass through.
    ToNumber,
}

impl BuiltinTransform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Trim => "trim",
            Self::ToString => "to_string",
            Self::ToNumber => "to_number",
        }
    }

    pub fn apply(&self, value: Value) -> Result<Value, TransformError> {
        match self {
            Self::Uppercase => Ok(map_str(value, str::to_uppercase)),
            Self::Lowercase => Ok(map_str(value, str::to_lowercase)),
            Self::Trim => Ok(map_str(value, |s| s.trim().to_string())),
            Self::ToString => Ok(match value {
                Value::Null => Value::Null,
                Value::String(s) => Value::String(s),
                other => Value::String(other.to_string()),
            }),
            Self::ToNumber => to_number(value),
        }
    }

    pub fn transformation(self) -> Transformation {
        Transformation::fallible(move |value| self.apply(value)).labeled(self.as_str())
    }
}

fn map_str(value: Value, f: impl Fn(&str) -> String) -> Value {
    match value {
        Value::String(s) => Value::String(f(&s)),
        other => other,
    }
}

fn to_number(value: Value) -> Result<Value, TransformError> {
    match value {
        Value::Number(_) | Value::Null => Ok(value),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(int) = trimmed.parse::<i64>() {
                return Ok(Value::from(int));
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| TransformError::new(format!("'{s}' is not a number")))
        }
        other => Err(TransformError::new(format!("cannot convert {other} to a number"))),
    }
}

impl From<BuiltinTransform> for Transformation {
    fn from(builtin: BuiltinTransform) -> Self {
        builtin.transformation()
    }
}

impl fmt::Display for BuiltinTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltinTransform {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uppercase" => Ok(Self::Uppercase),
            "lowercase" => Ok(Self::Lowercase),
            "trim" => Ok(Self::Trim),
            "to_string" => Ok(Self::ToString),
            "to_number" => Ok(Self::ToNumber),
            _ => Err(ModelError::UnknownTransform(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for BuiltinTransform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
