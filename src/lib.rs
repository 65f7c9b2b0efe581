//! # Taskflow - Task-Flow Validation and Diagram Engine
//!
//! **Taskflow** checks UX task-flow graphs (start, process, decision and end
//! steps joined by transitions) for structural soundness and compiles them into
//! Mermaid flowchart text.
//!
//! ## Core Workflow
//!
//! Flow descriptions usually come from an untrusted producer such as a language
//! model, so the engine works on the raw JSON value rather than forcing a strict
//! parse up front:
//!
//! 1.  **Validate**: [`validator::validate`] turns any JSON value into a
//!     [`ValidationReport`](validator::ValidationReport). It never fails; every
//!     defect becomes an issue.
//! 2.  **Render**: [`diagram::DiagramCompiler`] compiles a description into
//!     Mermaid text, independent of validity.
//! 3.  **Build**: [`builder::build_task_flow`] combines both: invalid flows get a
//!     placeholder diagram, valid ones get the compiled diagram.
//! 4.  **Model** (optional): once a description is valid, convert it into the
//!     strict [`TaskFlow`](flow::TaskFlow) with [`IntoTaskFlow`](flow::IntoTaskFlow).
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use taskflow::prelude::*;
//!
//! let description = json!({
//!     "title": "Reset password",
//!     "nodes": [
//!         {"id": "start", "label": "Open login", "actor": "user", "type": "start"},
//!         {"id": "known", "label": "Knows email?", "actor": "user", "type": "decision"},
//!         {"id": "send", "label": "Send reset link", "actor": "system", "type": "process"},
//!         {"id": "done", "label": "Done", "actor": "system", "type": "end"}
//!     ],
//!     "edges": [
//!         {"from": "start", "to": "known"},
//!         {"from": "known", "to": "send", "condition": "yes"},
//!         {"from": "known", "to": "done", "condition": "no"},
//!         {"from": "send", "to": "done"}
//!     ]
//! });
//!
//! let result = build_task_flow(&description);
//! assert!(result.validation.valid);
//! assert!(result.diagram.starts_with("flowchart TD"));
//!
//! let flow = TaskFlow::from_validated(&description).unwrap();
//! assert_eq!(flow.nodes[1].node_type, NodeType::Decision);
//! ```

pub mod builder;
pub mod diagram;
pub mod error;
pub mod export;
pub mod flow;
pub mod prelude;
pub mod report;
pub mod validator;

#[cfg(feature = "python-bindings")]
mod python;
