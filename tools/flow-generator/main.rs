use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate random task-flow descriptions for the taskflow validator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to, or `-` for stdout
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// Number of steps between the start and the final end node
    #[arg(long, default_value_t = 12)]
    steps: usize,

    /// Chance (0.0 to 1.0) that a step is a decision
    #[arg(long, default_value_t = 0.25)]
    decision_ratio: f64,

    /// Number of structural defects to inject
    #[arg(long, default_value_t = 0)]
    defects: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if !(0.0..=1.0).contains(&cli.decision_ratio) {
        eprintln!(
            "Error: --decision-ratio ({}) must be between 0.0 and 1.0",
            cli.decision_ratio
        );
        std::process::exit(1);
    }

    eprintln!(
        "Generating task flow ({} steps, decision ratio {}, {} defect(s))...",
        cli.steps, cli.decision_ratio, cli.defects
    );

    let mut flow = generate_flow(&mut rng, cli.steps, cli.decision_ratio);
    for _ in 0..cli.defects {
        let defect = inject_defect(&mut rng, &mut flow);
        eprintln!("-> Injected defect: {}", defect);
    }

    let json_output = serde_json::to_string_pretty(&flow)?;
    if cli.output == "-" {
        println!("{}", json_output);
    } else {
        fs::write(&cli.output, json_output)?;
        eprintln!("Successfully generated and saved flow to '{}'", cli.output);
    }

    Ok(())
}

/// Builds a structurally valid flow: a start node, a chain of steps and an end
/// node. Each decision continues on "yes" and sends "no" to an early exit.
fn generate_flow(rng: &mut ThreadRng, steps: usize, decision_ratio: f64) -> Value {
    let mut nodes = vec![json!({
        "id": "start", "label": "Start", "actor": "user", "type": "start"
    })];
    let mut edges = Vec::new();
    let mut previous = "start".to_string();
    let mut previous_is_decision = false;

    for step in 1..=steps {
        let id = format!("step_{}", step);
        let actor = if rng.random_bool(0.5) { "user" } else { "system" };
        edges.push(continue_edge(&previous, &id, previous_is_decision));

        previous_is_decision = rng.random_bool(decision_ratio);
        if previous_is_decision {
            let exit = format!("exit_{}", step);
            nodes.push(json!({
                "id": id, "label": format!("Check {}?", step), "actor": actor, "type": "decision"
            }));
            nodes.push(json!({
                "id": exit, "label": format!("Stop at {}", step), "actor": "system", "type": "end"
            }));
            edges.push(json!({"from": id, "to": exit, "condition": "no"}));
        } else {
            nodes.push(json!({
                "id": id, "label": format!("Step {}", step), "actor": actor, "type": "process"
            }));
        }
        previous = id;
    }

    nodes.push(json!({"id": "end", "label": "Done", "actor": "system", "type": "end"}));
    edges.push(continue_edge(&previous, "end", previous_is_decision));

    json!({
        "title": format!("Generated flow ({} steps)", steps),
        "actors": ["user", "system"],
        "nodes": nodes,
        "edges": edges,
    })
}

fn continue_edge(from: &str, to: &str, from_decision: bool) -> Value {
    let condition = if from_decision { json!("yes") } else { Value::Null };
    json!({"from": from, "to": to, "condition": condition})
}

/// Applies one random structural defect and returns a description of it.
fn inject_defect(rng: &mut ThreadRng, flow: &mut Value) -> String {
    let node_count = flow["nodes"].as_array().map_or(0, Vec::len);
    let edge_count = flow["edges"].as_array().map_or(0, Vec::len);

    match rng.random_range(0..4) {
        0 => {
            let id = format!("orphan_{}", node_count);
            if let Some(nodes) = flow["nodes"].as_array_mut() {
                nodes.push(json!({"id": id, "label": "Orphan", "actor": "user", "type": "process"}));
            }
            format!("unconnected node '{}'", id)
        }
        1 => {
            if let Some(edges) = flow["edges"].as_array_mut() {
                edges.push(json!({"from": "start", "to": "missing_target"}));
            }
            "edge to an undeclared node".to_string()
        }
        2 => {
            let id = format!("second_start_{}", node_count);
            if let Some(nodes) = flow["nodes"].as_array_mut() {
                nodes.push(json!({"id": id, "label": "Restart", "actor": "user", "type": "start"}));
            }
            format!("extra start node '{}'", id)
        }
        _ if edge_count > 0 => {
            let idx = rng.random_range(0..edge_count);
            if let Some(edges) = flow["edges"].as_array_mut() {
                edges.remove(idx);
            }
            format!("removed edge #{}", idx)
        }
        _ => "none (flow has no edges)".to_string(),
    }
}
