//! The `map` command: spec document + source record -> mapped record.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use lightmap_map::{ExclusionList, MappingEngine};
use lightmap_model::{Record, SourceRecord, SpecDocument, Value};
use tracing::{debug, info};

/// Inputs for one `map` invocation.
#[derive(Debug, Clone, Default)]
pub struct MapRequest {
    pub specs: PathBuf,
    pub source: PathBuf,
    pub exclude: Vec<String>,
    pub replacements: Vec<(String, Value)>,
}

/// Splits `NAME=VALUE`; the value is parsed as JSON, falling back to a plain string.
pub fn parse_replacement(raw: &str) -> Result<(String, Value)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("replacement '{raw}' is not of the form NAME=VALUE"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("replacement '{raw}' has an empty property name"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((name.to_string(), value))
}

pub fn load_source(path: &Path) -> Result<SourceRecord> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read source record {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parse source record {} (expected a JSON object)", path.display()))
}

/// Maps `source` through `document` with a fresh engine.
pub fn map_record(
    document: &SpecDocument,
    source: &SourceRecord,
    exclude: &[String],
    replacements: &[(String, Value)],
) -> Result<Record> {
    let metadata = document.to_metadata().context("build metadata")?;
    let mut engine = MappingEngine::new();
    for (name, value) in replacements {
        engine.replace(name.as_str(), value.clone());
    }
    let exclusions: ExclusionList = exclude.iter().collect();
    let record = engine.map_into(Record::new(), &metadata, source, &exclusions)?;
    Ok(record)
}

pub fn run_map(request: &MapRequest) -> Result<Record> {
    let document = SpecDocument::from_path(&request.specs)
        .with_context(|| format!("load spec document {}", request.specs.display()))?;
    let source = load_source(&request.source)?;
    info!(
        properties = document.len(),
        source_fields = source.len(),
        excluded = request.exclude.len(),
        replaced = request.replacements.len(),
        "mapping record"
    );
    let record = map_record(&document, &source, &request.exclude, &request.replacements)?;
    debug!(assigned = record.len(), "mapping complete");
    Ok(record)
}
