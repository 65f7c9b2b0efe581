//! The single entry point external callers use: validate, then render.

use crate::diagram::{DiagramCompiler, INVALID_TITLE};
use crate::flow::view;
use crate::validator::{self, ValidationReport};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Body returned in place of a diagram when validation fails.
pub const INVALID_FLOW_DIAGRAM: &str = "flowchart TD\n ERR[Invalid flow input. See issues list.]\n";

/// The validation report together with the rendered diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildResult {
    pub validation: ValidationReport,
    #[serde(rename = "mermaid")]
    pub diagram: String,
    pub title: String,
}

/// Validates flow descriptions and renders the valid ones.
#[derive(Debug, Clone, Default)]
pub struct FlowBuilder {
    compiler: DiagramCompiler,
}

impl FlowBuilder {
    pub fn new(compiler: DiagramCompiler) -> Self {
        Self { compiler }
    }

    /// Validates `flow` and, only when it is valid, compiles it.
    ///
    /// Invalid flows get the fixed [`INVALID_FLOW_DIAGRAM`] body and the
    /// input's title (or `"Invalid Flow"`), without touching the compiler.
    pub fn build(&self, flow: &Value) -> BuildResult {
        let validation = validator::validate(flow);

        if !validation.valid {
            let title = flow
                .as_object()
                .map_or(INVALID_TITLE, |obj| view::title(obj, INVALID_TITLE))
                .to_string();
            debug!(issues = validation.issues.len(), %title, "flow invalid, skipping diagram");
            return BuildResult {
                validation,
                diagram: INVALID_FLOW_DIAGRAM.to_string(),
                title,
            };
        }

        let rendered = self.compiler.compile(flow);
        BuildResult {
            validation,
            diagram: rendered.diagram,
            title: rendered.title,
        }
    }
}

/// Validates and renders a flow description with the default settings.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use taskflow::builder::{build_task_flow, INVALID_FLOW_DIAGRAM};
///
/// let result = build_task_flow(&json!({"title": "Broken", "nodes": [], "edges": []}));
/// assert!(!result.validation.valid);
/// assert_eq!(result.title, "Broken");
/// assert_eq!(result.diagram, INVALID_FLOW_DIAGRAM);
/// ```
pub fn build_task_flow(flow: &Value) -> BuildResult {
    FlowBuilder::default().build(flow)
}
