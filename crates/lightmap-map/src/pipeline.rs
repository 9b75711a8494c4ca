//! Declarative transform followed by the engine's instance-level transform.

use lightmap_model::{TransformError, Transformation, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct TransformationPipeline<'a> {
    declared: Option<&'a Transformation>,
    instance: Option<&'a Transformation>,
}

impl<'a> TransformationPipeline<'a> {
    pub fn new(declared: Option<&'a Transformation>, instance: Option<&'a Transformation>) -> Self {
        Self { declared, instance }
    }

    /// Runs the declared transform, then the instance transform, on `value`.
    ///
    /// A failing step stops the pipeline and its error is returned unchanged.
    pub fn apply(&self, value: Value) -> Result<Value, TransformError> {
        let value = match self.declared {
            Some(declared) => declared.apply(value)?,
            None => value,
        };
        match self.instance {
            Some(instance) => instance.apply(value),
            None => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn append(suffix: &'static str) -> Transformation {
        Transformation::new(move |v| json!(format!("{}{suffix}", v.as_str().unwrap_or_default())))
    }

    #[test]
    fn identity_passes_value_through() {
        let pipeline = TransformationPipeline::default();
        assert_eq!(pipeline.apply(json!(7)).unwrap(), json!(7));
    }

    #[test]
    fn declared_runs_before_instance() {
        let declared = append("-declared");
        let instance = append("-instance");
        let pipeline = TransformationPipeline::new(Some(&declared), Some(&instance));
        assert_eq!(pipeline.apply(json!("v")).unwrap(), json!("v-declared-instance"));
    }

    #[test]
    fn instance_alone_sees_raw_value() {
        let instance = append("!");
        let pipeline = TransformationPipeline::new(None, Some(&instance));
        assert_eq!(pipeline.apply(json!("raw")).unwrap(), json!("raw!"));
    }

    #[test]
    fn failure_short_circuits() {
        let failing = Transformation::fallible(|_| Err(TransformError::new("boom")));
        let instance = append("!");
        let pipeline = TransformationPipeline::new(Some(&failing), Some(&instance));
        assert_eq!(pipeline.apply(json!("v")).unwrap_err(), TransformError::new("boom"));
    }
}
