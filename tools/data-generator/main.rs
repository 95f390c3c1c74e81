use clap::Parser;
use kaiwa::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate sample flow documents for the Kaiwa validator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The number of dialogue nodes to generate
    #[arg(short, long, default_value_t = 9)]
    nodes: usize,

    /// Inject defects (dangling edges, blank prompts, duplicate ids) so the
    /// output exercises every validator check
    #[arg(long)]
    defects: bool,
}

const DESCRIPTIONS: &[&str] = &[
    "Greets the user and frames the conversation",
    "Collects the user's contact details",
    "Asks a clarifying question",
    "Confirms the gathered information",
    "Hands off to a human agent",
    "Wraps up and says goodbye",
];

const PROMPTS: &[&str] = &[
    "Hello! What brings you here today?",
    "Could you share your email address?",
    "Can you tell me a bit more about that?",
    "Just to confirm, is this correct?",
    "Let me connect you with a colleague.",
    "Thanks for chatting. Goodbye!",
];

const CONDITIONS: &[&str] = &[
    "user agrees",
    "user declines",
    "user asks for help",
    "no response for 30 seconds",
    "intent is unclear",
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }

    println!("Generating a flow with {} node(s)...", cli.nodes);

    let mut document = generate_flow(&mut rng, cli.nodes);
    if cli.defects {
        inject_defects(&mut rng, &mut document);
        println!("-> Injected defects for validator testing.");
    }

    let errors = validate(&document);
    println!("-> Generated flow carries {} violation(s).", errors.len());

    fs::write(&cli.output, document.to_json_pretty())?;
    println!("Successfully saved generated flow to '{}'", cli.output);

    Ok(())
}

/// Builds a mostly-linear flow with a few random cross edges, valid unless
/// defects are injected afterwards.
fn generate_flow(rng: &mut ThreadRng, node_count: usize) -> FlowDocument {
    let mut nodes: Vec<FlowNode> = (0..node_count)
        .map(|i| FlowNode {
            id: format!("state_{}", i),
            description: DESCRIPTIONS[i % DESCRIPTIONS.len()].to_string(),
            prompt: PROMPTS[i % PROMPTS.len()].to_string(),
            edges: Vec::new(),
        })
        .collect();

    // Chain every node to its successor so the weak connectivity check passes.
    for i in 0..node_count.saturating_sub(1) {
        let condition = CONDITIONS[rng.random_range(0..CONDITIONS.len())].to_string();
        nodes[i].edges.push(FlowEdge {
            to_node_id: format!("state_{}", i + 1),
            condition,
            parameters: None,
        });
    }

    // A few random cross edges for texture.
    for _ in 0..node_count / 3 {
        let from = rng.random_range(0..node_count);
        let to = rng.random_range(0..node_count);
        let condition = CONDITIONS[rng.random_range(0..CONDITIONS.len())].to_string();
        nodes[from].edges.push(FlowEdge {
            to_node_id: format!("state_{}", to),
            condition,
            parameters: None,
        });
    }

    FlowDocument {
        start_node_id: "state_0".to_string(),
        nodes,
    }
}

fn inject_defects(rng: &mut ThreadRng, document: &mut FlowDocument) {
    // Dangling target
    if let Some(node) = document.nodes.first_mut() {
        node.edges.push(FlowEdge {
            to_node_id: "ghost".to_string(),
            condition: "never".to_string(),
            parameters: None,
        });
    }

    // Blank prompt and empty condition on a random node
    let index = rng.random_range(0..document.nodes.len());
    let victim = &mut document.nodes[index];
    victim.prompt = String::new();
    victim.edges.push(FlowEdge {
        to_node_id: document.start_node_id.clone(),
        condition: String::new(),
        parameters: None,
    });

    // Duplicate id
    if let Some(first) = document.nodes.first().cloned() {
        document.nodes.push(first);
    }
}
