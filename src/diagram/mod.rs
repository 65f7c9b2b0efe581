//! Compiles flow descriptions into Mermaid flowchart text.
//!
//! Compilation works on the untyped description and never fails. It does not
//! depend on validity: malformed shapes produce a one-line error diagram and
//! malformed edges are dropped from the output.

use crate::flow::DEFAULT_TITLE;
use crate::flow::view::{self, Object};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

pub mod options;
pub mod shape;

pub use options::{DiagramOptions, Direction};
pub use shape::{Shape, escape};

/// Title reported for descriptions that cannot be rendered.
pub const INVALID_TITLE: &str = "Invalid Flow";

/// Body returned when the description is not an object.
pub const NOT_AN_OBJECT_DIAGRAM: &str = "flowchart TD\n ERR[Invalid flow: not an object]\n";

/// Body returned when `nodes` or `edges` is present but not a list.
pub const NOT_LISTS_DIAGRAM: &str = "flowchart TD\n ERR[Invalid flow: nodes/edges not lists]\n";

const NODE_INDENT: &str = " ";
const EDGE_INDENT: &str = "     ";

/// A rendered diagram and the title it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    pub title: String,
    #[serde(rename = "mermaid")]
    pub diagram: String,
}

/// Turns flow descriptions into Mermaid flowchart text.
#[derive(Debug, Clone, Default)]
pub struct DiagramCompiler {
    options: DiagramOptions,
}

pub struct DiagramCompilerBuilder {
    options: DiagramOptions,
}

impl DiagramCompilerBuilder {
    pub fn new() -> Self {
        Self {
            options: DiagramOptions::default(),
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.options.direction = direction;
        self
    }

    pub fn build(self) -> DiagramCompiler {
        DiagramCompiler {
            options: self.options,
        }
    }
}

impl Default for DiagramCompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramCompiler {
    pub fn builder() -> DiagramCompilerBuilder {
        DiagramCompilerBuilder::new()
    }

    pub fn options(&self) -> &DiagramOptions {
        &self.options
    }

    /// Renders a flow description.
    ///
    /// Nodes are declared first, in first-seen id order, followed by one
    /// connector per surviving edge in input order. A missing `nodes` or
    /// `edges` key counts as an empty list.
    pub fn compile(&self, flow: &Value) -> Diagram {
        let Some(flow) = flow.as_object() else {
            return Diagram {
                title: INVALID_TITLE.to_string(),
                diagram: NOT_AN_OBJECT_DIAGRAM.to_string(),
            };
        };

        let empty = Vec::new();
        let list = |key: &str| match flow.get(key) {
            None => Some(&empty),
            Some(value) => value.as_array(),
        };
        let (Some(nodes), Some(edges)) = (list("nodes"), list("edges")) else {
            return Diagram {
                title: view::title(flow, INVALID_TITLE).to_string(),
                diagram: NOT_LISTS_DIAGRAM.to_string(),
            };
        };

        let table = view::node_table(nodes);
        let node_lines = table
            .iter()
            .map(|(id, node)| format!("{NODE_INDENT}{}", render_node(id.as_str(), node)));

        let mut dropped = 0usize;
        let edge_lines: Vec<String> = edges
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|edge| {
                let line = render_edge(edge);
                if line.is_none() {
                    dropped += 1;
                }
                line
            })
            .collect();

        let diagram = std::iter::once(self.options.header())
            .chain(node_lines)
            .chain(edge_lines.iter().map(|line| format!("{EDGE_INDENT}{line}")))
            .join("\n");

        debug!(
            nodes = table.len(),
            edges = edge_lines.len(),
            dropped,
            "compiled task flow diagram"
        );

        Diagram {
            title: view::title(flow, DEFAULT_TITLE).to_string(),
            diagram,
        }
    }
}

fn render_node(id: &str, node: &Object) -> String {
    let label = view::str_field(node, "label").unwrap_or_default();
    Shape::for_declared(view::str_field(node, "type")).render(id, label)
}

/// Renders one connector, or `None` when the edge is skipped.
///
/// The skip rule is "no source, or a target is present". Edges with a falsy
/// target are therefore rendered and fully-wired edges are not. Kept as
/// observed; see the `suspect_` tests in `tests/diagram.rs`.
fn render_edge(edge: &Object) -> Option<String> {
    let source = edge.get("from");
    let target = edge.get("to");
    if !view::is_truthy(source) || view::is_truthy(target) {
        trace!(
            from = %view::display(source),
            to = %view::display(target),
            "skipping edge"
        );
        return None;
    }

    let source = view::display(source);
    let target = match target {
        None | Some(Value::Null) => "".into(),
        Some(value) => view::display(Some(value)),
    };
    Some(match view::condition(edge) {
        Some(condition) => format!("{source} -->|{}| {target}", escape(condition)),
        None => format!("{source} --> {target}"),
    })
}

/// Renders a flow description with the default settings.
pub fn to_diagram(flow: &Value) -> Diagram {
    DiagramCompiler::default().compile(flow)
}
