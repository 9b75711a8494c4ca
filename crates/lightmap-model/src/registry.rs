//! Metadata registry keyed by target type identity.
//!
//! Entries are seeded once per type from [`MapTarget::describe`], may be
//! extended by explicit [`attach`] calls, and are handed out as shared
//! read-only snapshots.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::error::Result;
use crate::metadata::TargetMetadata;
use crate::spec::PropertySpec;
use crate::target::MapTarget;

/// Type identity to property specs.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    entries: RwLock<HashMap<TypeId, Arc<TargetMetadata>>>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `spec` for `property` on type `T`.
    ///
    /// A type without an entry is seeded from `T::describe` first, so attaching
    /// never hides the declared properties. Existing readers keep the snapshot
    /// they already hold.
    pub fn attach<T: MapTarget>(
        &self,
        property: impl Into<String>,
        spec: impl Into<PropertySpec>,
    ) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut metadata = match entries.get(&TypeId::of::<T>()) {
            Some(existing) => (**existing).clone(),
            None => described::<T>()?,
        };
        metadata.attach(property, spec)?;
        entries.insert(TypeId::of::<T>(), Arc::new(metadata));
        Ok(())
    }

    /// Stores the metadata declared by `T::describe`, unless `T` already has an entry.
    pub fn register<T: MapTarget>(&self) -> Result<Arc<TargetMetadata>> {
        if let Some(existing) = self.specs::<T>() {
            return Ok(existing);
        }
        let metadata = described::<T>()?;
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let entry = entries
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Arc::new(metadata));
        Ok(Arc::clone(entry))
    }

    /// Read-only lookup of the specs registered for `T`.
    pub fn specs<T: ?Sized + 'static>(&self) -> Option<Arc<TargetMetadata>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<T>())
            .cloned()
    }

    /// Returns the specs for `T`, registering them from `T::describe` on first use.
    pub fn specs_or_register<T: MapTarget>(&self) -> Result<Arc<TargetMetadata>> {
        match self.specs::<T>() {
            Some(metadata) => Ok(metadata),
            None => self.register::<T>(),
        }
    }

    pub fn is_registered<T: ?Sized + 'static>(&self) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }
}

fn described<T: MapTarget>() -> Result<TargetMetadata> {
    let mut metadata = TargetMetadata::for_type::<T>();
    T::describe(&mut metadata)?;
    debug!(
        target_type = type_name::<T>(),
        properties = metadata.len(),
        "registered mapping metadata"
    );
    Ok(metadata)
}

/// The process-wide registry.
pub fn global() -> &'static MetadataRegistry {
    static GLOBAL: OnceLock<MetadataRegistry> = OnceLock::new();
    GLOBAL.get_or_init(MetadataRegistry::new)
}

pub fn attach<T: MapTarget>(
    property: impl Into<String>,
    spec: impl Into<PropertySpec>,
) -> Result<()> {
    global().attach::<T>(property, spec)
}

pub fn register<T: MapTarget>() -> Result<Arc<TargetMetadata>> {
    global().register::<T>()
}

pub fn specs<T: ?Sized + 'static>() -> Option<Arc<TargetMetadata>> {
    global().specs::<T>()
}

pub fn specs_or_register<T: MapTarget>() -> Result<Arc<TargetMetadata>> {
    global().specs_or_register::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssignError;
    use crate::requirement::Requirement;
    use crate::value::Value;

    #[derive(Default)]
    struct Described;

    impl MapTarget for Described {
        fn describe(metadata: &mut TargetMetadata) -> Result<()> {
            metadata
                .attach("first", Requirement::Required)?
                .attach("second", PropertySpec::optional().source("other"))?;
            Ok(())
        }

        fn assign(&mut self, property: &str, _value: Value) -> std::result::Result<(), AssignError> {
            Err(AssignError::UnknownProperty(property.to_string()))
        }
    }

    #[derive(Default)]
    struct Manual;

    impl MapTarget for Manual {
        fn describe(_metadata: &mut TargetMetadata) -> Result<()> {
            Ok(())
        }

        fn assign(&mut self, property: &str, _value: Value) -> std::result::Result<(), AssignError> {
            Err(AssignError::UnknownProperty(property.to_string()))
        }
    }

    #[test]
    fn register_runs_describe_once() {
        let registry = MetadataRegistry::new();
        assert!(registry.specs::<Described>().is_none());

        let first = registry.specs_or_register::<Described>().unwrap();
        let second = registry.register::<Described>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
        assert!(first.type_name().unwrap().ends_with("Described"));
    }

    #[test]
    fn attach_extends_an_empty_description() {
        let registry = MetadataRegistry::new();
        registry.attach::<Manual>("x", Requirement::Nullable).unwrap();
        let snapshot = registry.specs::<Manual>().unwrap();
        registry.attach::<Manual>("y", Requirement::Optional).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.specs::<Manual>().unwrap().len(), 2);
        assert!(registry.is_registered::<Manual>());
    }

    #[test]
    fn attach_before_register_keeps_described_properties() {
        let registry = MetadataRegistry::new();
        registry
            .attach::<Described>("third", Requirement::Nullable)
            .unwrap();

        let metadata = registry.specs_or_register::<Described>().unwrap();
        assert_eq!(
            metadata.property_names().collect::<Vec<_>>(),
            vec!["first", "second", "third"]
        );
        assert!(metadata.get("first").unwrap().requirement().is_required());
    }

    #[test]
    fn attach_can_override_a_described_property() {
        let registry = MetadataRegistry::new();
        registry
            .attach::<Described>("first", Requirement::Optional)
            .unwrap();

        let metadata = registry.register::<Described>().unwrap();
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get("first").unwrap().requirement(), Requirement::Optional);
    }
}
