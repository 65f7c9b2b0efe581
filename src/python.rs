use crate::builder::{BuildResult, build_task_flow as build};
use crate::diagram::{Diagram, to_diagram};
use crate::validator::{ValidationReport, validate};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use serde_json::Value;

impl<'py> IntoPyObject<'py> for ValidationReport {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let issues = self
            .issues
            .into_iter()
            .map(|issue| {
                let entry = PyDict::new(py);
                entry.set_item("type", issue.kind.as_str())?;
                entry.set_item("message", issue.message)?;
                Ok(entry)
            })
            .collect::<PyResult<Vec<_>>>()?;

        let dict = PyDict::new(py);
        dict.set_item("valid", self.valid)?;
        dict.set_item("issues", issues)?;
        Ok(dict)
    }
}

impl<'py> IntoPyObject<'py> for Diagram {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("title", self.title)?;
        dict.set_item("mermaid", self.diagram)?;
        Ok(dict)
    }
}

impl<'py> IntoPyObject<'py> for BuildResult {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("validation", self.validation.into_pyobject(py)?)?;
        dict.set_item("mermaid", self.diagram)?;
        dict.set_item("title", self.title)?;
        Ok(dict)
    }
}

fn parse(flow_json: &str) -> PyResult<Value> {
    serde_json::from_str(flow_json).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Checks a task flow against the structural rules.
///
/// Args:
///     flow_json (str): The flow description as JSON text.
///
/// Returns:
///     dict: ``{"valid": bool, "issues": [{"type": str, "message": str}]}``.
///
/// Raises:
///     ValueError: If the text is not valid JSON. Structural problems are
///         reported as issues, never raised.
#[pyfunction]
fn validate_flow(flow_json: &str) -> PyResult<ValidationReport> {
    Ok(validate(&parse(flow_json)?))
}

/// Renders a task flow as Mermaid text, regardless of validity.
///
/// Returns:
///     dict: ``{"title": str, "mermaid": str}``.
#[pyfunction]
fn flow_to_mermaid(flow_json: &str) -> PyResult<Diagram> {
    Ok(to_diagram(&parse(flow_json)?))
}

/// Validates a task flow and renders it when valid.
///
/// This is the tool an agent calls once it has gathered the flow.
///
/// Returns:
///     dict: ``{"validation": dict, "mermaid": str, "title": str}``. Invalid
///         flows get a fixed placeholder diagram.
#[pyfunction]
fn build_task_flow(flow_json: &str) -> PyResult<BuildResult> {
    Ok(build(&parse(flow_json)?))
}

/// Structural validation and Mermaid rendering for UX task flows.
#[pymodule]
fn taskflow(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(validate_flow, m)?)?;
    m.add_function(wrap_pyfunction!(flow_to_mermaid, m)?)?;
    m.add_function(wrap_pyfunction!(build_task_flow, m)?)?;
    Ok(())
}
