use super::issue::{Issue, IssueKind};
use crate::flow::view::{self, NodeTable, Object};
use serde_json::Value;

/// Incoming and outgoing edges per known node.
///
/// Both lists are indexed by the node's position in the `NodeTable`, so they
/// follow node declaration order and each list follows edge input order.
pub(super) struct Adjacency<'a> {
    pub incoming: Vec<Vec<&'a Object>>,
    pub outgoing: Vec<Vec<&'a Object>>,
}

impl<'a> Adjacency<'a> {
    /// Wires every object edge into the adjacency lists and reports endpoints
    /// that do not resolve. An edge with one dangling endpoint still counts on
    /// the side that resolves. Non-object edges are ignored.
    pub(super) fn build(
        table: &NodeTable<'a>,
        edges: &'a [Value],
        issues: &mut Vec<Issue>,
    ) -> Self {
        let mut incoming = vec![Vec::new(); table.len()];
        let mut outgoing = vec![Vec::new(); table.len()];

        for edge in edges.iter().filter_map(Value::as_object) {
            let source = edge.get("from");
            let target = edge.get("to");
            let source_idx = resolve(table, source);
            let target_idx = resolve(table, target);

            if source_idx.is_none() {
                issues.push(Issue::new(
                    IssueKind::EdgeSourceMissing,
                    format!(
                        "Edge has source '{}' which is not a node id.",
                        view::display(source)
                    ),
                ));
            }
            if target_idx.is_none() {
                issues.push(Issue::new(
                    IssueKind::EdgeTargetMissing,
                    format!(
                        "Edge has target '{}' which is not a node id.",
                        view::display(target)
                    ),
                ));
            }

            if let Some(idx) = source_idx {
                outgoing[idx].push(edge);
            }
            if let Some(idx) = target_idx {
                incoming[idx].push(edge);
            }
        }

        Self { incoming, outgoing }
    }
}

/// Position of the node an endpoint refers to. A missing endpoint never resolves.
fn resolve<'a>(table: &NodeTable<'a>, endpoint: Option<&'a Value>) -> Option<usize> {
    table.get_index_of(&view::id_key(endpoint?))
}
