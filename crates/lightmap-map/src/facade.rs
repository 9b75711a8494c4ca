//! Stateless entry point that hands out fresh engines.

use lightmap_model::{MapTarget, SourceRecord, TransformError, Value};

use crate::engine::MappingEngine;
use crate::error::Result;

/// Starts every chain on a new [`MappingEngine`], so registrations made
/// through one chain never leak into another.
///
/// ```ignore
/// let target: Target = LightMapper
///     .transform("targetA", |v| v)
///     .replace("targetC", "replaced C")
///     .map(&source)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LightMapper;

impl LightMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn replace(&self, property: impl Into<String>, value: impl Into<Value>) -> MappingEngine {
        let mut engine = MappingEngine::new();
        engine.replace(property, value);
        engine
    }

    pub fn transform<F>(&self, property: impl Into<String>, func: F) -> MappingEngine
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        let mut engine = MappingEngine::new();
        engine.transform(property, func);
        engine
    }

    pub fn try_transform<F>(&self, property: impl Into<String>, func: F) -> MappingEngine
    where
        F: Fn(Value) -> std::result::Result<Value, TransformError> + Send + Sync + 'static,
    {
        let mut engine = MappingEngine::new();
        engine.try_transform(property, func);
        engine
    }

    pub fn map<T: MapTarget>(&self, source: &SourceRecord) -> Result<T> {
        MappingEngine::new().map(source)
    }

    pub fn map_excluding<T, S>(&self, source: &SourceRecord, exclude: &[S]) -> Result<T>
    where
        T: MapTarget,
        S: AsRef<str>,
    {
        MappingEngine::new().map_excluding(source, exclude)
    }
}
