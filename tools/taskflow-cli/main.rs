use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;
use taskflow::export::{diagram_file_stem, save_diagram};
use taskflow::prelude::*;
use tracing::info;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionCli {
    Td,
    Tb,
    Bt,
    Lr,
    Rl,
}

impl From<DirectionCli> for Direction {
    fn from(direction: DirectionCli) -> Self {
        match direction {
            DirectionCli::Td => Direction::TopDown,
            DirectionCli::Tb => Direction::TopBottom,
            DirectionCli::Bt => Direction::BottomTop,
            DirectionCli::Lr => Direction::LeftRight,
            DirectionCli::Rl => Direction::RightLeft,
        }
    }
}

/// Validate UX task flows and render them as Mermaid flowcharts
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Flowchart direction for rendered diagrams
    #[arg(short, long, value_enum, global = true, default_value = "td")]
    direction: DirectionCli,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a flow description and print the validation report as JSON
    Validate {
        /// Path to the flow JSON file, or `-` for stdin
        input: String,
    },
    /// Render a flow description as Mermaid text, whether or not it is valid
    Render {
        /// Path to the flow JSON file, or `-` for stdin
        input: String,
    },
    /// Validate, then render valid flows
    Build {
        /// Path to the flow JSON file, or `-` for stdin
        input: String,

        /// Print the raw JSON result instead of the formatted report
        #[arg(long)]
        json: bool,

        /// Save the diagram as a `.mmd` file (defaults to the flow title)
        #[arg(short, long)]
        save: Option<Option<PathBuf>>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let compiler = DiagramCompiler::builder()
        .direction(cli.direction.into())
        .build();

    let code = match cli.command {
        Command::Validate { input } => {
            let report = validate(&load_flow(&input));
            print_json(&report);
            if report.valid { 0 } else { 2 }
        }
        Command::Render { input } => {
            let diagram = compiler.compile(&load_flow(&input));
            println!("{}", diagram.diagram);
            0
        }
        Command::Build { input, json, save } => run_build(&input, compiler, json, save),
    };
    std::process::exit(code);
}

fn run_build(
    input: &str,
    compiler: DiagramCompiler,
    json: bool,
    save: Option<Option<PathBuf>>,
) -> i32 {
    let flow = load_flow(input);

    let start = Instant::now();
    let result = FlowBuilder::new(compiler).build(&flow);
    info!(
        event = "build_complete",
        valid = result.validation.valid,
        issues = result.validation.issues.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "built task flow"
    );

    if json {
        print_json(&result);
    } else {
        print!("{}", ReportFormatter::format(&result));
    }

    if let Some(path) = save {
        let path = path.unwrap_or_else(|| match diagram_file_stem(&result.title) {
            stem if stem.is_empty() => PathBuf::from("task_flow"),
            stem => PathBuf::from(stem),
        });
        match save_diagram(&result, &path) {
            Ok(saved) => eprintln!("Mermaid diagram saved to: {}", saved.display()),
            Err(e) => exit_with_error(&e.to_string()),
        }
    }
    0
}

fn load_flow(input: &str) -> Value {
    let text = if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to read stdin: {}", e)));
        buf
    } else {
        fs::read_to_string(input).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read flow file '{}': {}", input, e))
        })
    };
    serde_json::from_str(&text)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse flow JSON: {}", e)))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => exit_with_error(&format!("Failed to serialize output: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
