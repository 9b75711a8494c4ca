//! Caller-supplied exclusion lists.

use std::collections::BTreeSet;

use lightmap_model::PropertySpec;

use crate::error::{MapError, Result};

/// Verdict for one property against the exclusion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Not excluded; map as usual.
    Proceed,
    /// Excluded; never assigned during this call.
    Skip,
}

/// Property names to omit from a single `map` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    names: BTreeSet<String>,
}

impl ExclusionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, property: &str) -> bool {
        self.names.contains(property)
    }

    /// Checks `property` against the list.
    ///
    /// Excluding a required property is an error; any other excluded
    /// property is skipped, never nulled.
    pub fn check(&self, property: &str, spec: &PropertySpec) -> Result<Exclusion> {
        if !self.contains(property) {
            return Ok(Exclusion::Proceed);
        }
        if spec.requirement().is_required() {
            return Err(MapError::RequiredButExcluded(property.to_string()));
        }
        Ok(Exclusion::Skip)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}
