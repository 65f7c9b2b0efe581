//! Structural validation of untyped flow descriptions.
//!
//! The validator never fails. Every defect it can find is returned as an
//! [`Issue`] in a [`ValidationReport`], in the order the checks run:
//!
//! 1. shape gates (`invalid_type`, `invalid_structure`), which stop validation
//! 2. node table (`no_nodes`)
//! 3. boundary cardinality (`start_node_count`, `end_node_count`)
//! 4. edge endpoints (`edge_source_missing`, `edge_target_missing`)
//! 5. per-node wiring (`no_incoming_edge`, `no_outgoing_edge`)
//! 6. decision branching (`decision_branch_count`, `missing_condition`)

use crate::flow::view::{self, Object};
use serde_json::Value;
use tracing::debug;

mod adjacency;
pub mod issue;

use adjacency::Adjacency;
pub use issue::*;

/// Declared role of an untyped node entry. Unrecognized or missing types are
/// neither start, end nor decision.
fn declared_type(node: &Object) -> Option<&str> {
    view::str_field(node, "type")
}

/// Checks a flow description against the task-flow topology rules.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use taskflow::validator::{validate, IssueKind};
///
/// let report = validate(&json!({
///     "nodes": [{"id": "s", "type": "start"}, {"id": "e", "type": "end"}],
///     "edges": [{"from": "s", "to": "e"}]
/// }));
/// assert!(report.valid);
///
/// let report = validate(&json!("not a flow"));
/// assert_eq!(report.kinds(), vec![IssueKind::InvalidType]);
/// ```
pub fn validate(flow: &Value) -> ValidationReport {
    let report = ValidationReport::from_issues(collect_issues(flow));
    debug!(valid = report.valid, issues = report.issues.len(), "validated task flow");
    report
}

fn collect_issues(flow: &Value) -> Vec<Issue> {
    let mut issues = Vec::new();

    let Some(flow) = flow.as_object() else {
        issues.push(Issue::new(
            IssueKind::InvalidType,
            format!(
                "Flow must be an object with 'nodes' and 'edges', but got {}: {}",
                json_type_name(flow),
                flow
            ),
        ));
        return issues;
    };

    let (Some(nodes), Some(edges)) = (
        flow.get("nodes").and_then(Value::as_array),
        flow.get("edges").and_then(Value::as_array),
    ) else {
        issues.push(Issue::new(
            IssueKind::InvalidStructure,
            "Flow must have 'nodes' and 'edges' as lists.",
        ));
        return issues;
    };

    let table = view::node_table(nodes);
    if table.is_empty() {
        issues.push(Issue::new(
            IssueKind::NoNodes,
            "Flow has no valid node definitions.",
        ));
    }

    let count_of = |role: &str| {
        table
            .values()
            .filter(|node| declared_type(node) == Some(role))
            .count()
    };

    let start_count = count_of("start");
    if start_count != 1 {
        issues.push(Issue::new(
            IssueKind::StartNodeCount,
            format!("Flow should have exactly 1 start node, found {start_count}."),
        ));
    }
    if count_of("end") == 0 {
        issues.push(Issue::new(
            IssueKind::EndNodeCount,
            "Flow should have at least 1 end node, found 0.",
        ));
    }

    let adjacency = Adjacency::build(&table, edges, &mut issues);

    for (idx, (id, node)) in table.iter().enumerate() {
        let role = declared_type(node);
        if role != Some("start") && adjacency.incoming[idx].is_empty() {
            issues.push(Issue::new(
                IssueKind::NoIncomingEdge,
                format!("Node '{id}' has no incoming edges and is not the start node."),
            ));
        }
        if role != Some("end") && adjacency.outgoing[idx].is_empty() {
            issues.push(Issue::new(
                IssueKind::NoOutgoingEdge,
                format!("Node '{id}' has no outgoing edges and is not an end node."),
            ));
        }
    }

    for (idx, (id, node)) in table.iter().enumerate() {
        if declared_type(node) != Some("decision") {
            continue;
        }
        let branches = &adjacency.outgoing[idx];
        if branches.len() < 2 {
            issues.push(Issue::new(
                IssueKind::DecisionBranchCount,
                format!("Decision node '{id}' should have at least 2 outgoing edges."),
            ));
        }
        for edge in branches.iter().filter(|e| view::condition(e).is_none()) {
            issues.push(Issue::new(
                IssueKind::MissingCondition,
                format!(
                    "Decision edge from '{id}' to '{}' should have a non-empty condition.",
                    view::display(edge.get("to"))
                ),
            ));
        }
    }

    issues
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
