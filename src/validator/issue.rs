use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of structural defects the validator reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// The description is not an object.
    InvalidType,
    /// `nodes` or `edges` is not a list.
    InvalidStructure,
    NoNodes,
    StartNodeCount,
    EndNodeCount,
    EdgeSourceMissing,
    EdgeTargetMissing,
    NoIncomingEdge,
    NoOutgoingEdge,
    DecisionBranchCount,
    MissingCondition,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::InvalidType => "invalid_type",
            IssueKind::InvalidStructure => "invalid_structure",
            IssueKind::NoNodes => "no_nodes",
            IssueKind::StartNodeCount => "start_node_count",
            IssueKind::EndNodeCount => "end_node_count",
            IssueKind::EdgeSourceMissing => "edge_source_missing",
            IssueKind::EdgeTargetMissing => "edge_target_missing",
            IssueKind::NoIncomingEdge => "no_incoming_edge",
            IssueKind::NoOutgoingEdge => "no_outgoing_edge",
            IssueKind::DecisionBranchCount => "decision_branch_count",
            IssueKind::MissingCondition => "missing_condition",
        }
    }

    /// Shape errors stop the validator before any graph check runs.
    pub fn is_shape_error(&self) -> bool {
        matches!(self, IssueKind::InvalidType | IssueKind::InvalidStructure)
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structural defect found in a flow description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// The outcome of validating a flow description.
///
/// `valid` is true exactly when `issues` is empty. Issues keep the order in
/// which the checks ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub(crate) fn from_issues(issues: Vec<Issue>) -> Self {
        Self {
            valid: issues.is_empty(),
            issues,
        }
    }

    /// Returns true if any issue of the given kind was reported.
    pub fn has(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|i| i.kind == kind)
    }

    /// Returns the issues of the given kind, in report order.
    pub fn of_kind(&self, kind: IssueKind) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.kind == kind).collect()
    }

    /// The kinds of all issues, in report order.
    pub fn kinds(&self) -> Vec<IssueKind> {
        self.issues.iter().map(|i| i.kind).collect()
    }
}
