//! Mapping engine implementation.

use std::collections::BTreeMap;

use lightmap_model::{
    MapTarget, PropertySpec, SourceRecord, TargetMetadata, TransformError, Transformation, Value,
    registry,
};
use tracing::{debug, debug_span, trace};

use crate::error::{MapError, Result};
use crate::exclusion::{Exclusion, ExclusionList};
use crate::pipeline::TransformationPipeline;
use crate::requirement::{Outcome, dispatch};
use crate::resolver::resolve_source_key;

/// Builds populated target instances from untyped source records.
///
/// Replacements and instance-level transforms registered on an engine are
/// standing state: every later `map` call on the same engine sees them.
/// Use a fresh engine when isolation between calls is needed.
///
/// # Example
///
/// ```ignore
/// use lightmap_map::MappingEngine;
///
/// let mut engine = MappingEngine::new();
/// engine
///     .transform("name", |v| v)
///     .replace("source", "import");
/// let person: Person = engine.map(&record)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct MappingEngine {
    replacements: BTreeMap<String, Value>,
    transforms: BTreeMap<String, Transformation>,
}

impl MappingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a literal value that overrides every other rule for `property`.
    pub fn replace(&mut self, property: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.replacements.insert(property.into(), value.into());
        self
    }

    /// Registers an instance-level transform for `property`, run after the
    /// declared transform.
    pub fn transform<F>(&mut self, property: impl Into<String>, func: F) -> &mut Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.with_transformation(property, Transformation::new(func))
    }

    /// Like [`Self::transform`], for functions that can reject their input.
    pub fn try_transform<F>(&mut self, property: impl Into<String>, func: F) -> &mut Self
    where
        F: Fn(Value) -> std::result::Result<Value, TransformError> + Send + Sync + 'static,
    {
        self.with_transformation(property, Transformation::fallible(func))
    }

    pub fn with_transformation(
        &mut self,
        property: impl Into<String>,
        transformation: Transformation,
    ) -> &mut Self {
        self.transforms.insert(property.into(), transformation);
        self
    }

    pub fn replacement(&self, property: &str) -> Option<&Value> {
        self.replacements.get(property)
    }

    /// Builds a `T` from `source` using the metadata registered for `T`.
    pub fn map<T: MapTarget>(&self, source: &SourceRecord) -> Result<T> {
        self.map_excluding::<T, &str>(source, &[])
    }

    /// Builds a `T` from `source`, skipping the properties named in `exclude`.
    ///
    /// # Errors
    ///
    /// Fails with [`MapError::RequiredButExcluded`] if `exclude` names a
    /// required property, and with [`MapError::MissingRequiredProperty`] if a
    /// required property's source key is absent.
    pub fn map_excluding<T, S>(&self, source: &SourceRecord, exclude: &[S]) -> Result<T>
    where
        T: MapTarget,
        S: AsRef<str>,
    {
        let metadata = registry::specs_or_register::<T>()?;
        let exclusions: ExclusionList = exclude.iter().collect();
        self.map_into(T::default(), &metadata, source, &exclusions)
    }

    /// Populates `target` following `metadata`, in declaration order.
    pub fn map_into<T: MapTarget>(
        &self,
        mut target: T,
        metadata: &TargetMetadata,
        source: &SourceRecord,
        exclusions: &ExclusionList,
    ) -> Result<T> {
        let span = debug_span!(
            "map",
            target_type = metadata.type_name().unwrap_or("<dynamic>"),
            properties = metadata.len()
        );
        let _guard = span.enter();

        for (property, spec) in metadata.iter() {
            if let Err(error) = self.map_property(&mut target, property, spec, source, exclusions) {
                debug!(property, %error, "mapping aborted");
                return Err(error);
            }
        }
        Ok(target)
    }

    fn map_property<T: MapTarget>(
        &self,
        target: &mut T,
        property: &str,
        spec: &PropertySpec,
        source: &SourceRecord,
        exclusions: &ExclusionList,
    ) -> Result<()> {
        if exclusions.check(property, spec)? == Exclusion::Skip {
            trace!(property, "excluded");
            return Ok(());
        }
        if let Some(value) = self.replacements.get(property) {
            trace!(property, "replaced");
            target.assign(property, value.clone())?;
            return Ok(());
        }

        let key = resolve_source_key(source, property, spec.source_keys());
        match dispatch(spec.requirement(), source, key) {
            Outcome::Assign(raw) => {
                let pipeline = TransformationPipeline::new(
                    spec.transformation(),
                    self.transforms.get(property),
                );
                let value = pipeline.apply(raw.clone())?;
                trace!(property, source_key = key, "assigned");
                target.assign(property, value)?;
            }
            Outcome::Null => {
                trace!(property, source_key = key, "absent, assigned null");
                target.assign(property, Value::Null)?;
            }
            Outcome::Untouched => {
                trace!(property, source_key = key, "absent, left untouched");
            }
            Outcome::Missing => {
                return Err(MapError::MissingRequiredProperty(key.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lightmap_model::{Record, Requirement};
    use serde_json::json;

    use super::*;

    fn metadata() -> TargetMetadata {
        let mut metadata = TargetMetadata::new();
        metadata
            .attach("a", PropertySpec::required().sources(["x"]))
            .unwrap()
            .attach("b", PropertySpec::optional().source("y"))
            .unwrap()
            .attach("c", Requirement::Nullable)
            .unwrap();
        metadata
    }

    #[test]
    fn map_into_follows_metadata_order() {
        let source = SourceRecord::new()
            .with("c", json!(3))
            .with("y", json!(2))
            .with("x", json!(1));
        let record = MappingEngine::new()
            .map_into(Record::new(), &metadata(), &source, &ExclusionList::new())
            .unwrap();
        let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn replacement_of_any_value_counts_as_registered() {
        let mut engine = MappingEngine::new();
        engine.replace("a", Value::Null);
        let record = engine
            .map_into(Record::new(), &metadata(), &SourceRecord::new(), &ExclusionList::new())
            .unwrap();
        assert_eq!(record.get("a"), Some(&Value::Null));
    }

    #[test]
    fn later_registration_overwrites_earlier() {
        let mut engine = MappingEngine::new();
        engine.replace("a", "first").replace("a", "second");
        assert_eq!(engine.replacement("a"), Some(&json!("second")));
    }
}
