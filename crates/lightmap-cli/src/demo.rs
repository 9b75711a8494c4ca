//! Built-in example: declared and instance transforms plus replacements.

use anyhow::Result;
use lightmap_map::{LightMapper, MapTarget, PropertySpec, Requirement, TargetMetadata};
use lightmap_model::{AssignError, ModelError, Record, SourceRecord, Value};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoTarget {
    pub target_a: String,
    pub target_b: String,
    pub target_c: String,
    pub target_d: String,
}

impl DemoTarget {
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        for (name, value) in [
            ("targetA", &self.target_a),
            ("targetB", &self.target_b),
            ("targetC", &self.target_c),
            ("targetD", &self.target_d),
        ] {
            record.insert(name, Value::String(value.clone()));
        }
        record
    }
}

fn append(value: Value, suffix: &str) -> Value {
    match value {
        Value::String(s) => Value::String(format!("{s}{suffix}")),
        other => other,
    }
}

impl MapTarget for DemoTarget {
    fn describe(metadata: &mut TargetMetadata) -> Result<(), ModelError> {
        metadata
            .attach(
                "targetA",
                PropertySpec::required()
                    .sources(["sourceA"])
                    .transform(|v| append(v, " transformed by declaration")),
            )?
            .attach("targetB", PropertySpec::required().sources(["sourceB"]))?
            .attach("targetC", PropertySpec::required().sources(["sourceC"]))?
            .attach("targetD", Requirement::Required)?;
        Ok(())
    }

    fn assign(&mut self, property: &str, value: Value) -> Result<(), AssignError> {
        let Value::String(text) = value else {
            return Err(AssignError::invalid(property, "expected a string"));
        };
        match property {
            "targetA" => self.target_a = text,
            "targetB" => self.target_b = text,
            "targetC" => self.target_c = text,
            "targetD" => self.target_d = text,
            other => return Err(AssignError::UnknownProperty(other.to_string())),
        }
        Ok(())
    }
}

pub fn demo_source() -> SourceRecord {
    SourceRecord::new()
        .with("sourceA", "to target A")
        .with("sourceB", "to target B")
}

pub fn run_demo() -> Result<DemoTarget> {
    let target = LightMapper
        .transform("targetA", |v| append(v, " transformed A"))
        .transform("targetB", |v| append(v, " transformed B"))
        .replace("targetC", "replaced C")
        .replace("targetD", "replaced D")
        .map::<DemoTarget>(&demo_source())?;
    Ok(target)
}
