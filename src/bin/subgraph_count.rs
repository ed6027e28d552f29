//! CLI front-end: load a graph (and, where needed, a schedule) and print a
//! count or a support number, plus how long the call took.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use subgraph_matching::engine::{
    count_matches_clique_triangle, count_matches_with_threads, fsm_support_with_threads,
};
use subgraph_matching::graph::{load_edge_list, CsrGraph};
use subgraph_matching::schedule::ScheduleFile;

#[derive(Parser)]
#[command(name = "subgraph-count", about = "Parallel backtracking subgraph matching over CSR adjacency")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count embeddings of a schedule-described pattern.
    Count {
        /// Path to a plain-text edge-list file.
        graph: PathBuf,
        /// Path to a compiled schedule JSON file.
        schedule: PathBuf,
        /// Worker thread count; defaults to the platform's parallelism.
        #[arg(long)]
        threads: Option<usize>,
    },
    /// Count triangles using the dedicated fast path (no schedule needed).
    Triangles {
        /// Path to a plain-text edge-list file.
        graph: PathBuf,
    },
    /// Compute minimum-image frequent-subgraph-mining support.
    FsmSupport {
        /// Path to a plain-text edge-list file.
        graph: PathBuf,
        /// Path to a compiled schedule JSON file.
        schedule: PathBuf,
        /// Worker thread count; defaults to the platform's parallelism.
        #[arg(long)]
        threads: Option<usize>,
    },
}

fn main() -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Count { graph, schedule, threads } => {
            let threads = resolve_threads(threads)?;
            let graph = load_graph(&graph)?;
            let schedule = ScheduleFile::load(&schedule)?;
            #[cfg(feature = "tracing")]
            tracing::debug!(vertices = graph.node_count(), threads, "starting count");
            let start = Instant::now();
            let result = count_matches_with_threads(&graph, &schedule, threads);
            println!("{result} ({:?})", start.elapsed());
        }
        Command::Triangles { graph } => {
            let graph = load_graph(&graph)?;
            let start = Instant::now();
            let result = count_matches_clique_triangle(&graph);
            println!("{result} ({:?})", start.elapsed());
        }
        Command::FsmSupport { graph, schedule, threads } => {
            let threads = resolve_threads(threads)?;
            let graph = load_graph(&graph)?;
            let schedule = ScheduleFile::load(&schedule)?;
            let start = Instant::now();
            let result = fsm_support_with_threads(&graph, &schedule, threads);
            println!("{result} ({:?})", start.elapsed());
        }
    }
    Ok(())
}

fn resolve_threads(requested: Option<usize>) -> Result<usize> {
    match requested {
        Some(0) => bail!("--threads must be at least 1"),
        Some(n) => Ok(n),
        None => Ok(std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)),
    }
}

fn load_graph(path: &PathBuf) -> Result<CsrGraph> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read graph file {}", path.display()))?;
    load_edge_list(&text)
}
