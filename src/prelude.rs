//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! taskflow crate.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use taskflow::prelude::*;
//!
//! let report = validate(&json!({"nodes": [], "edges": []}));
//! assert!(report.has(IssueKind::NoNodes));
//! ```

// Build orchestration
pub use crate::builder::{BuildResult, FlowBuilder, build_task_flow};

// Validation
pub use crate::validator::{Issue, IssueKind, ValidationReport, validate};

// Diagram compilation
pub use crate::diagram::{Diagram, DiagramCompiler, Direction, to_diagram};

// Model types
pub use crate::flow::{Actor, Edge, IntoTaskFlow, Node, NodeType, TaskFlow};

// Error types
pub use crate::error::{ConversionError, ExportError};

// Report formatting and export
pub use crate::export::save_diagram;
pub use crate::report::ReportFormatter;
