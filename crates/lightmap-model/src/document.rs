//! JSON spec documents: declarative property specs loaded at runtime.
//!
//! ```json
//! {
//!   "fullName": { "requirement": "required", "from": ["name", "full_name"] },
//!   "email": { "requirement": "nullable", "transformation": "lowercase" },
//!   "id": "required"
//! }
//! ```
//!
//! Property order in the document is the mapping order.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, Deserializer, Error as _, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metadata::TargetMetadata;
use crate::requirement::Requirement;
use crate::spec::{PropertySpec, SourceKeys};
use crate::transform::BuiltinTransform;
use crate::value::Value;

/// One property entry: a bare requirement or the full option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SpecEntry {
    Shorthand(Requirement),
    Full(SpecOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecOptions {
    pub requirement: Requirement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<SourceKeys>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformation: Option<BuiltinTransform>,
}

impl SpecEntry {
    pub fn requirement(&self) -> Requirement {
        match self {
            SpecEntry::Shorthand(requirement) => *requirement,
            SpecEntry::Full(options) => options.requirement,
        }
    }

    pub fn to_spec(&self) -> PropertySpec {
        match self {
            SpecEntry::Shorthand(requirement) => PropertySpec::from(*requirement),
            SpecEntry::Full(options) => {
                let spec = PropertySpec::new(options.requirement)
                    .with_source_keys(options.from.clone());
                match options.transformation {
                    Some(builtin) => spec.with_transformation(builtin.transformation()),
                    None => spec,
                }
            }
        }
    }
}

/// An ordered set of property entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecDocument {
    entries: Vec<(String, SpecEntry)>,
}

impl SpecDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    #[must_use]
    pub fn with_entry(mut self, property: impl Into<String>, entry: SpecEntry) -> Self {
        self.entries.push((property.into(), entry));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &SpecEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds target metadata in document order.
    pub fn to_metadata(&self) -> Result<TargetMetadata> {
        let mut metadata = TargetMetadata::new();
        for (property, entry) in &self.entries {
            metadata.attach(property.as_str(), entry.to_spec())?;
        }
        Ok(metadata)
    }
}

impl Serialize for SpecDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (property, entry) in &self.entries {
            map.serialize_entry(property, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SpecDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = SpecDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of property names to mapping specs")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((property, entry)) = access.next_entry::<String, SpecEntry>()? {
            entries.push((property, entry));
        }
        Ok(SpecDocument { entries })
    }
}

const OPTION_FIELDS: &[&str] = &["requirement", "from", "transformation"];

impl<'de> Deserialize<'de> for SpecEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(EntryVisitor)
    }
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = SpecEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a requirement mode or an object with `requirement`, `from` and `transformation`")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
        value.parse().map(SpecEntry::Shorthand).map_err(E::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut requirement = None;
        let mut from = None;
        let mut transformation = None;
        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                "requirement" => {
                    if requirement.is_some() {
                        return Err(de::Error::duplicate_field("requirement"));
                    }
                    requirement = Some(access.next_value::<Requirement>()?);
                }
                "from" => {
                    if from.is_some() {
                        return Err(de::Error::duplicate_field("from"));
                    }
                    from = Some(source_keys(access.next_value::<Value>()?).map_err(A::Error::custom)?);
                }
                "transformation" => {
                    if transformation.is_some() {
                        return Err(de::Error::duplicate_field("transformation"));
                    }
                    transformation = Some(access.next_value::<Option<BuiltinTransform>>()?);
                }
                other => return Err(de::Error::unknown_field(other, OPTION_FIELDS)),
            }
        }
        let requirement = requirement.ok_or_else(|| A::Error::missing_field("requirement"))?;
        Ok(SpecEntry::Full(SpecOptions {
            requirement,
            from: from.flatten(),
            transformation: transformation.flatten(),
        }))
    }
}

/// Reads a `from` value; null means no source keys were given.
fn source_keys(value: Value) -> std::result::Result<Option<SourceKeys>, String> {
    const EXPECTED: &str = "`from` must be a string or an array of strings";
    match value {
        Value::Null => Ok(None),
        Value::String(key) => Ok(Some(SourceKeys::Single(key))),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(key) => Ok(key),
                other => Err(format!("{EXPECTED}, found element {other}")),
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(|keys| Some(SourceKeys::Candidates(keys))),
        other => Err(format!("{EXPECTED}, found {other}")),
    }
}
