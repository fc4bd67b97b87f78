//! WORDSIM CLI
//!
//! Interactive nearest-neighbor queries over an embedding table file.

use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::{fmt, EnvFilter};
use wordsim::{combine, CombineOp, EmbeddingTable, Neighbor, SimilarityIndex};

/// WORDSIM - Word Similarity Explorer
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the embedding table file (one `label v1 v2 ... vD` per line)
    table: std::path::PathBuf,

    /// Default number of neighbors to show
    #[arg(short, long, default_value_t = 10)]
    k: usize,
}

enum Query {
    Nearest { label: String, k: usize },
    Combine { a: String, b: String, op: CombineOp, k: usize },
    Info,
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("wordsim=info".parse()?))
        .init();

    let args = Args::parse();

    let table = EmbeddingTable::load(&args.table)?;
    let index = SimilarityIndex::from_table(table)?;

    println!(
        "Loaded {} embeddings of dimension {}.",
        index.len(),
        index.dimension()
    );
    println!("Type 'help' for available commands, 'quit' to exit.\n");

    loop {
        print!("wordsim> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        match parse_query(input, args.k) {
            Ok(query) => {
                if let Err(e) = run_query(&index, query) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
    }

    Ok(())
}

fn parse_query(input: &str, default_k: usize) -> anyhow::Result<Query> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        anyhow::bail!("Empty command");
    }

    let cmd = parts[0].to_uppercase();

    match cmd.as_str() {
        "NEAREST" => {
            if parts.len() < 2 {
                anyhow::bail!("NEAREST requires a label: NEAREST <label> [k]");
            }
            let k = parse_k(&parts, 2, default_k)?;
            Ok(Query::Nearest {
                label: parts[1].to_string(),
                k,
            })
        }

        "ADD" | "SUB" => {
            if parts.len() < 3 {
                anyhow::bail!("{} requires two labels: {} <a> <b> [k]", cmd, cmd);
            }
            let op = if cmd == "ADD" {
                CombineOp::Add
            } else {
                CombineOp::Subtract
            };
            let k = parse_k(&parts, 3, default_k)?;
            Ok(Query::Combine {
                a: parts[1].to_string(),
                b: parts[2].to_string(),
                op,
                k,
            })
        }

        "INFO" => Ok(Query::Info),

        _ => anyhow::bail!("Unknown command: {}. Type 'help' for available commands.", cmd),
    }
}

fn parse_k(parts: &[&str], pos: usize, default_k: usize) -> anyhow::Result<usize> {
    match parts.get(pos) {
        Some(raw) => Ok(raw.parse::<usize>()?),
        None => Ok(default_k),
    }
}

fn run_query(index: &SimilarityIndex, query: Query) -> anyhow::Result<()> {
    match query {
        Query::Nearest { label, k } => {
            let results = index.nearest_to_label(&label, k)?;
            print_neighbors(&results);
        }

        Query::Combine { a, b, op, k } => {
            let va = index
                .vector(&a)
                .ok_or_else(|| anyhow::anyhow!("unknown label: {}", a))?;
            let vb = index
                .vector(&b)
                .ok_or_else(|| anyhow::anyhow!("unknown label: {}", b))?;
            let derived = combine(va, vb, op)?;
            let results = index.nearest(&derived, k)?;
            print_neighbors(&results);
        }

        Query::Info => {
            println!(
                "{} embeddings, dimension {}",
                index.len(),
                index.dimension()
            );
        }
    }

    Ok(())
}

fn print_neighbors(results: &[Neighbor]) {
    for (rank, neighbor) in results.iter().enumerate() {
        println!("{:>3}. {:<24} {:.4}", rank + 1, neighbor.label, neighbor.score);
    }
}

fn print_help() {
    println!(
        r#"
Available commands:

  NEAREST <label> [k]  - Top-k neighbors of a stored label (self excluded)
  ADD <a> <b> [k]      - Neighbors of the sum of two stored vectors
  SUB <a> <b> [k]      - Neighbors of the difference of two stored vectors
  INFO                 - Table size and dimensionality

  help                 - Show this help
  quit / exit          - Exit the CLI

Examples:
  NEAREST united
  NEAREST united 5
  ADD united states
  SUB america states 3
"#
    );
}
