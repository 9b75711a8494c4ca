#![deny(unsafe_code)]

//! Mapping resolution engine.
//!
//! For every property declared on a target type the engine validates the
//! caller's exclusion list, applies standing replacements, resolves the
//! source key, dispatches on the requirement mode and runs the
//! transformation pipeline before assigning the value.

pub mod engine;
pub mod error;
pub mod exclusion;
pub mod facade;
pub mod pipeline;
pub mod requirement;
pub mod resolver;

pub use engine::MappingEngine;
pub use error::{MapError, Result};
pub use exclusion::{Exclusion, ExclusionList};
pub use facade::LightMapper;
pub use pipeline::TransformationPipeline;
pub use requirement::{Outcome, dispatch};
pub use resolver::resolve_source_key;

pub use lightmap_model::{
    MapTarget, PropertySpec, Record, Requirement, SourceKeys, SourceRecord, TargetMetadata,
    Transformation, TransformError, Value,
};
