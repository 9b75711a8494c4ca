//! The declarative rule attached to one target property.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;
use crate::requirement::Requirement;
use crate::value::Value;

/// Where a property reads its value from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceKeys {
    /// Exactly this key; no fallback to the property name.
    Single(String),
    /// Ordered candidates; the first one present in the source wins.
    Candidates(Vec<String>),
}

impl From<&str> for SourceKeys {
    fn from(key: &str) -> Self {
        SourceKeys::Single(key.to_string())
    }
}

impl From<String> for SourceKeys {
    fn from(key: String) -> Self {
        SourceKeys::Single(key)
    }
}

impl<S: Into<String>> From<Vec<S>> for SourceKeys {
    fn from(keys: Vec<S>) -> Self {
        SourceKeys::Candidates(keys.into_iter().map(Into::into).collect())
    }
}

type TransformFn = dyn Fn(Value) -> Result<Value, TransformError> + Send + Sync;

/// A shareable `value -> value` function.
#[derive(Clone)]
pub struct Transformation {
    label: Option<String>,
    func: Arc<TransformFn>,
}

impl Transformation {
    /// Wraps an infallible function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self {
            label: None,
            func: Arc::new(move |value| Ok(func(value))),
        }
    }

    /// Wraps a function that may reject its input.
    pub fn fallible<F>(func: F) -> Self
    where
        F: Fn(Value) -> Result<Value, TransformError> + Send + Sync + 'static,
    {
        Self {
            label: None,
            func: Arc::new(func),
        }
    }

    /// Attaches a display name, shown in `Debug` output.
    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn apply(&self, value: Value) -> Result<Value, TransformError> {
        (self.func)(value)
    }
}

impl fmt::Debug for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "Transformation({label})"),
            None => f.write_str("Transformation(<fn>)"),
        }
    }
}

/// Mapping rule for one target property.
///
/// A spec built from a bare [`Requirement`] (the shorthand form) reads the
/// source key equal to the property name and applies no transformation.
#[derive(Debug, Clone)]
pub struct PropertySpec {
    requirement: Requirement,
    from: Option<SourceKeys>,
    transformation: Option<Transformation>,
}

impl PropertySpec {
    pub fn new(requirement: Requirement) -> Self {
        Self {
            requirement,
            from: None,
            transformation: None,
        }
    }

    pub fn required() -> Self {
        Self::new(Requirement::Required)
    }

    pub fn optional() -> Self {
        Self::new(Requirement::Optional)
    }

    pub fn nullable() -> Self {
        Self::new(Requirement::Nullable)
    }

    /// Reads from exactly `key`.
    #[must_use]
    pub fn source(mut self, key: impl Into<String>) -> Self {
        self.from = Some(SourceKeys::Single(key.into()));
        self
    }

    /// Reads from the first of `keys` present in the source record.
    #[must_use]
    pub fn sources<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.from = Some(SourceKeys::Candidates(
            keys.into_iter().map(Into::into).collect(),
        ));
        self
    }

    #[must_use]
    pub fn with_source_keys(mut self, from: Option<SourceKeys>) -> Self {
        self.from = from;
        self
    }

    #[must_use]
    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformation = Some(transformation);
        self
    }

    /// Shortcut for an infallible declarative transformation.
    #[must_use]
    pub fn transform<F>(self, func: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.with_transformation(Transformation::new(func))
    }

    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    pub fn source_keys(&self) -> Option<&SourceKeys> {
        self.from.as_ref()
    }

    pub fn transformation(&self) -> Option<&Transformation> {
        self.transformation.as_ref()
    }

    pub fn is_shorthand(&self) -> bool {
        self.from.is_none() && self.transformation.is_none()
    }
}

impl From<Requirement> for PropertySpec {
    fn from(requirement: Requirement) -> Self {
        Self::new(requirement)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn shorthand_spec_has_no_source_or_transform() {
        let spec = PropertySpec::from(Requirement::Optional);
        assert!(spec.is_shorthand());
        assert_eq!(spec.requirement(), Requirement::Optional);
        assert!(spec.source_keys().is_none());
    }

    #[test]
    fn builder_sets_candidates_and_transform() {
        let spec = PropertySpec::required()
            .sources(["x", "y"])
            .transform(|v| json!(format!("{}!", v.as_str().unwrap_or_default())));
        assert_eq!(
            spec.source_keys(),
            Some(&SourceKeys::Candidates(vec!["x".into(), "y".into()]))
        );
        let out = spec.transformation().unwrap().apply(json!("hi")).unwrap();
        assert_eq!(out, json!("hi!"));
        assert!(!spec.is_shorthand());
    }

    #[test]
    fn source_keys_deserialize_from_string_or_list() {
        let single: SourceKeys = serde_json::from_value(json!("x")).unwrap();
        assert_eq!(single, SourceKeys::Single("x".into()));
        let list: SourceKeys = serde_json::from_value(json!(["x", "y"])).unwrap();
        assert_eq!(list, SourceKeys::from(vec!["x", "y"]));
    }

    #[test]
    fn debug_shows_label() {
        let t = Transformation::new(|v| v).labeled("identity");
        assert_eq!(format!("{t:?}"), "Transformation(identity)");
    }
}
