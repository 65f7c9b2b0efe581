use crate::flow::NodeType;

/// The Mermaid node shape used for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `id([label])`, used for start and end steps.
    Stadium,
    /// `id{label}`, used for decisions.
    Rhombus,
    /// `id[label]`, used for everything else.
    Rectangle,
}

impl Shape {
    /// Picks the shape for a declared node type. Unknown types render as rectangles.
    pub fn for_declared(node_type: Option<&str>) -> Self {
        match node_type {
            Some("start") | Some("end") => Shape::Stadium,
            Some("decision") => Shape::Rhombus,
            _ => Shape::Rectangle,
        }
    }

    pub fn render(&self, id: &str, label: &str) -> String {
        let label = escape(label);
        match self {
            Shape::Stadium => format!("{id}([{label}])"),
            Shape::Rhombus => format!("{id}{{{label}}}"),
            Shape::Rectangle => format!("{id}[{label}]"),
        }
    }
}

impl From<NodeType> for Shape {
    fn from(node_type: NodeType) -> Self {
        Shape::for_declared(Some(node_type.as_str()))
    }
}

/// Escapes quote characters so label and condition text stays inside its marker.
pub fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}
