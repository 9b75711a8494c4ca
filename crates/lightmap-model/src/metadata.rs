//! Ordered property specifications for one target type.

use crate::error::{ModelError, Result};
use crate::spec::PropertySpec;

/// Property name to spec, in declaration order.
///
/// Names are unique. Re-attaching a name replaces its spec but keeps the
/// position of the first declaration.
#[derive(Debug, Clone, Default)]
pub struct TargetMetadata {
    type_name: Option<&'static str>,
    properties: Vec<(String, PropertySpec)>,
}

impl TargetMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_type<T: ?Sized>() -> Self {
        Self {
            type_name: Some(std::any::type_name::<T>()),
            properties: Vec::new(),
        }
    }

    pub fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }

    /// Declares `spec` for `property`; returns `self` for chaining.
    ///
    /// # Errors
    ///
    /// Returns an error if the property name is empty or blank.
    pub fn attach(
        &mut self,
        property: impl Into<String>,
        spec: impl Into<PropertySpec>,
    ) -> Result<&mut Self> {
        let property = property.into();
        if property.trim().is_empty() {
            return Err(ModelError::InvalidPropertyName(property));
        }
        let spec = spec.into();
        match self.properties.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => *existing = spec,
            None => self.properties.push((property, spec)),
        }
        Ok(self)
    }

    pub fn get(&self, property: &str) -> Option<&PropertySpec> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, spec)| spec)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySpec)> {
        self.properties
            .iter()
            .map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
