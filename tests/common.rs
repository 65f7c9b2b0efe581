//! Common test utilities for building flow descriptions.
use serde_json::{Value, json};

/// The smallest valid flow: `s -> e`.
#[allow(dead_code)]
pub fn minimal_flow() -> Value {
    json!({
        "nodes": [
            {"id": "s", "type": "start"},
            {"id": "e", "type": "end"}
        ],
        "edges": [{"from": "s", "to": "e"}]
    })
}

/// A complete, valid sign-up flow with one decision.
///
/// `start -> form -> check -(valid)-> create -> done`
/// `                 check -(invalid)-> form`
#[allow(dead_code)]
pub fn signup_flow() -> Value {
    json!({
        "title": "Sign up",
        "actors": ["user", "system"],
        "nodes": [
            {"id": "start", "label": "Open sign-up", "actor": "user", "type": "start"},
            {"id": "form", "label": "Fill in form", "actor": "user", "type": "process"},
            {"id": "check", "label": "Details valid?", "actor": "system", "type": "decision"},
            {"id": "create", "label": "Create account", "actor": "system", "type": "process"},
            {"id": "done", "label": "Welcome screen", "actor": "system", "type": "end"}
        ],
        "edges": [
            {"from": "start", "to": "form", "condition": null},
            {"from": "form", "to": "check", "condition": null},
            {"from": "check", "to": "create", "condition": "valid"},
            {"from": "check", "to": "form", "condition": "invalid"},
            {"from": "create", "to": "done", "condition": null}
        ]
    })
}

/// Two start nodes, one end node and no edges at all.
#[allow(dead_code)]
pub fn disconnected_flow() -> Value {
    json!({
        "title": "Disconnected",
        "nodes": [
            {"id": "a", "label": "A", "actor": "user", "type": "start"},
            {"id": "b", "label": "B", "actor": "user", "type": "start"},
            {"id": "z", "label": "Z", "actor": "system", "type": "end"}
        ],
        "edges": []
    })
}

/// A decision `d` with one conditioned and one unconditioned branch.
#[allow(dead_code)]
pub fn half_conditioned_decision() -> Value {
    json!({
        "nodes": [
            {"id": "s", "label": "Start", "actor": "user", "type": "start"},
            {"id": "d", "label": "Choose", "actor": "user", "type": "decision"},
            {"id": "a", "label": "A", "actor": "system", "type": "end"},
            {"id": "b", "label": "B", "actor": "system", "type": "end"}
        ],
        "edges": [
            {"from": "s", "to": "d"},
            {"from": "d", "to": "a", "condition": "yes"},
            {"from": "d", "to": "b"}
        ]
    })
}
