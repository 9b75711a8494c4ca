//! Requirement-mode dispatch once the source key is known.

use lightmap_model::{Requirement, SourceRecord, Value};

/// What to do with a property after its source key is resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome<'s> {
    /// Source has the key; transform and assign this raw value.
    Assign(&'s Value),
    /// Optional and absent; leave the target's default in place.
    Untouched,
    /// Nullable and absent; assign null.
    Null,
    /// Required and absent; the mapping fails.
    Missing,
}

pub fn dispatch<'s>(requirement: Requirement, source: &'s SourceRecord, key: &str) -> Outcome<'s> {
    match (source.get(key), requirement) {
        (Some(value), _) => Outcome::Assign(value),
        (None, Requirement::Required) => Outcome::Missing,
        (None, Requirement::Optional) => Outcome::Untouched,
        (None, Requirement::Nullable) => Outcome::Null,
    }
}
