//! Target types populated by the mapping engine.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{AssignError, Result};
use crate::metadata::TargetMetadata;
use crate::value::Value;

/// A type the engine can construct and populate by property name.
///
/// `Default` supplies the fresh, empty instance. [`MapTarget::describe`] is
/// the one-time registration of the type's property specs and
/// [`MapTarget::assign`] is its name-indexed setter table.
pub trait MapTarget: Default + 'static {
    /// Declares the property specs for this type.
    fn describe(metadata: &mut TargetMetadata) -> Result<()>;

    /// Writes `value` into the field named `property`.
    fn assign(&mut self, property: &str, value: Value) -> std::result::Result<(), AssignError>;
}

/// A dynamic target: an ordered name/value record.
///
/// Declares no properties of its own; pair it with metadata loaded from a
/// [`SpecDocument`](crate::SpecDocument).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sets `property`, keeping its position if it was already set.
    pub fn insert(&mut self, property: impl Into<String>, value: Value) {
        let property = property.into();
        match self.fields.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((property, value)),
        }
    }
}

impl MapTarget for Record {
    fn describe(_metadata: &mut TargetMetadata) -> Result<()> {
        Ok(())
    }

    fn assign(&mut self, property: &str, value: Value) -> std::result::Result<(), AssignError> {
        self.insert(property, value);
        Ok(())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
