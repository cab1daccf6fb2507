use clap::Parser;
use nagare::prelude::*;
use std::io;
use std::time::Instant;

/// An interactive dataflow graph execution engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow definition JSON file
    flow_path: String,

    /// Directory where output nodes persist their files
    #[arg(short, long, default_value = "out")]
    output_dir: String,

    /// Print the loaded graph before executing it
    #[arg(short, long)]
    print: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let total_start = Instant::now();

    // --- 1. Load and parse the flow definition ---
    let load_start = Instant::now();
    let flow = FlowDefinition::from_file(&cli.flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load flow definition '{}': {}",
            &cli.flow_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Build the graph ---
    let node_count = flow.nodes.len();
    let mut graph = flow.build_graph();
    println!(
        "Loaded flow with {} nodes from '{}'",
        node_count, cli.flow_path
    );

    if cli.print {
        println!("\n--- Graph ---");
        for node in graph.nodes() {
            if node.deps().is_empty() {
                println!("  #{} {}", node.id, node.kind_name());
            } else {
                println!("  #{} {} deps={:?}", node.id, node.kind_name(), node.deps());
            }
        }
        println!();
    }

    // --- 3. Execute ---
    println!("Starting flow execution...\n");
    let run_start = Instant::now();
    let mut engine = Engine::new(
        ConsoleReader::new(),
        DirStore::new(&cli.output_dir),
        io::stdout(),
    );
    engine.run(&mut graph);
    let run_duration = run_start.elapsed();

    // --- 4. Summary ---
    println!("\nFlow execution finished!");
    println!("\n--- Performance Summary ---");
    println!("Definition Loading: {:?}", load_duration);
    println!("Execution:          {:?}", run_duration);
    println!("---------------------------");
    println!("Total:              {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
