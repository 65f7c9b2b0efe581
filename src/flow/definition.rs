use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when a flow description carries none.
pub const DEFAULT_TITLE: &str = "Untitled Flow";

/// The role a step plays in a task flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Start,
    Process,
    Decision,
    End,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Start => "start",
            NodeType::Process => "process",
            NodeType::Decision => "decision",
            NodeType::End => "end",
        }
    }

    /// Start and end steps are the boundary of a flow.
    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeType::Start | NodeType::End)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who performs the action at a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    User,
    System,
}

impl Actor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Actor::User => "user",
            Actor::System => "system",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single step in a task flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub actor: Actor,
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

impl Node {
    pub fn new(id: &str, label: &str, actor: Actor, node_type: NodeType) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            actor,
            node_type,
        }
    }
}

/// A directed transition between two steps.
///
/// Endpoints are plain ids; whether they resolve to declared nodes is checked
/// by the validator, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(rename = "from")]
    pub source: String,
    #[serde(rename = "to")]
    pub target: String,
    #[serde(default)]
    pub condition: Option<String>,
}

impl Edge {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            condition: None,
        }
    }

    /// Labels the edge. A blank condition leaves it unconditioned.
    pub fn with_condition(mut self, condition: &str) -> Self {
        self.condition = (!condition.trim().is_empty()).then(|| condition.to_string());
        self
    }
}

/// The strict, typed model of a task flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFlow {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_actors")]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Default for TaskFlow {
    fn default() -> Self {
        Self {
            title: default_title(),
            actors: default_actors(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_actors() -> Vec<Actor> {
    vec![Actor::User, Actor::System]
}
