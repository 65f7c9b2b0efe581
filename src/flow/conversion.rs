use super::definition::TaskFlow;
use crate::diagram::{Diagram, DiagramCompiler};
use crate::error::ConversionError;
use crate::validator::{self, ValidationReport};
use ahash::AHashSet;
use serde_json::Value;

/// A trait for inputs that can be turned into a strict `TaskFlow`.
///
/// Implemented for parsed JSON values and for raw JSON text. Implement it on
/// your own structs to plug a different description format into the model.
///
/// # Example
///
/// ```rust
/// use taskflow::prelude::*;
///
/// let flow = r#"{
///     "title": "Sign in",
///     "nodes": [
///         {"id": "s", "label": "Open app", "actor": "user", "type": "start"},
///         {"id": "e", "label": "Home", "actor": "system", "type": "end"}
///     ],
///     "edges": [{"from": "s", "to": "e"}]
/// }"#
/// .into_task_flow()
/// .unwrap();
///
/// assert_eq!(flow.nodes.len(), 2);
/// assert_eq!(flow.edges[0].source, "s");
/// ```
pub trait IntoTaskFlow {
    /// Consumes the input and converts it into a strict task flow.
    fn into_task_flow(self) -> Result<TaskFlow, ConversionError>;
}

impl IntoTaskFlow for Value {
    fn into_task_flow(self) -> Result<TaskFlow, ConversionError> {
        let flow: TaskFlow = serde_json::from_value(self)?;
        flow.check_invariants()?;
        Ok(flow)
    }
}

impl IntoTaskFlow for &Value {
    fn into_task_flow(self) -> Result<TaskFlow, ConversionError> {
        self.clone().into_task_flow()
    }
}

impl IntoTaskFlow for &str {
    fn into_task_flow(self) -> Result<TaskFlow, ConversionError> {
        let value: Value = serde_json::from_str(self)?;
        value.into_task_flow()
    }
}

impl TaskFlow {
    /// Builds a strict task flow from an untyped description.
    ///
    /// Missing `title`, `actors`, `nodes` and `edges` fall back to their
    /// defaults. Unknown node types or actors are rejected, and so are empty or
    /// repeated node ids and blank edge conditions. Edge endpoints are not
    /// resolved here.
    pub fn from_description(description: &Value) -> Result<Self, ConversionError> {
        description.into_task_flow()
    }

    /// Validates the description first and only builds the model when it is
    /// structurally sound.
    pub fn from_validated(description: &Value) -> Result<Self, ConversionError> {
        let report = validator::validate(description);
        if !report.valid {
            return Err(ConversionError::Invalid(report));
        }
        Self::from_description(description)
    }

    /// Converts the flow back into its untyped description, using `from`/`to`
    /// for edge endpoints.
    pub fn to_description(&self) -> Result<Value, ConversionError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Runs the structural validator over this flow.
    pub fn validate(&self) -> Result<ValidationReport, ConversionError> {
        Ok(validator::validate(&self.to_description()?))
    }

    /// Renders this flow with the default diagram settings.
    pub fn to_diagram(&self) -> Result<Diagram, ConversionError> {
        Ok(DiagramCompiler::default().compile(&self.to_description()?))
    }

    fn check_invariants(&self) -> Result<(), ConversionError> {
        let mut seen = AHashSet::with_capacity(self.nodes.len());
        for (index, node) in self.nodes.iter().enumerate() {
            if node.id.is_empty() {
                return Err(ConversionError::EmptyNodeId { index });
            }
            if !seen.insert(node.id.as_str()) {
                return Err(ConversionError::DuplicateNodeId(node.id.clone()));
            }
        }
        for (index, edge) in self.edges.iter().enumerate() {
            if edge.condition.as_deref().is_some_and(|c| c.trim().is_empty()) {
                return Err(ConversionError::EmptyCondition { index });
            }
        }
        Ok(())
    }
}
