//! Declarative mapping model: requirement modes, property specifications,
//! per-type target metadata and the registry that holds it.

pub mod document;
pub mod error;
pub mod metadata;
pub mod registry;
pub mod requirement;
pub mod spec;
pub mod target;
pub mod transform;
pub mod value;

pub use document::{SpecDocument, SpecEntry, SpecOptions};
pub use error::{AssignError, ModelError, Result, TransformError};
pub use metadata::TargetMetadata;
pub use requirement::Requirement;
pub use spec::{PropertySpec, SourceKeys, Transformation};
pub use target::{MapTarget, Record};
pub use transform::BuiltinTransform;
pub use value::{SourceRecord, Value};
