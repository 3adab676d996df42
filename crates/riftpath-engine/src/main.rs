//! CLI entry point for the riftpath query engine.
//!
//! Loads a champion dataset, builds the similarity graph, and writes JSON
//! results to stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use riftpath_core::EngineConfig;
use riftpath_engine::{EngineError, RecommendEngine};

#[derive(Parser)]
#[command(name = "riftpath")]
#[command(about = "Champion similarity graph queries over a tag dataset")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override the configured dataset path.
    #[arg(long, global = true)]
    data: Option<String>,

    /// Config file prefix (default: riftpath).
    #[arg(short, long, default_value = "riftpath", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three queries for a champion pair.
    Query {
        /// Champion the recommendation set is built around.
        #[arg(long)]
        champion: String,
        /// Champion the path and intersection are computed against.
        #[arg(long)]
        comparison: String,
    },
    /// Greedy clique recommendation set around one champion.
    Recommend {
        #[arg(long)]
        champion: String,
    },
    /// Shortest learning path between two champions (breadth-first).
    Path {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Reachability path between two champions (depth-first; not
    /// necessarily shortest).
    Reach {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Graph statistics for the loaded dataset.
    Stats,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let config = EngineConfig::load(&cli.config);
    let dataset_path = cli.data.clone().unwrap_or(config.dataset_path);
    let engine = RecommendEngine::from_dataset(&dataset_path)?;

    match cli.command {
        Command::Query { champion, comparison } => emit(engine.query(&champion, &comparison)),
        Command::Recommend { champion } => emit(engine.recommend(&champion)),
        Command::Path { from, to } => emit(engine.learning_path(&from, &to)),
        Command::Reach { from, to } => emit(engine.reachability_path(&from, &to)),
        Command::Stats => emit(Ok(engine.stats())),
    }
}

/// Print a query result as JSON. An unreachable pair is a user-facing
/// outcome, not a failure: it is reported as a `no_path` object with exit
/// code 0. Everything else propagates and exits non-zero.
fn emit<T: Serialize>(result: riftpath_engine::Result<T>) -> anyhow::Result<()> {
    match result {
        Ok(value) => println!("{}", serde_json::to_string(&value)?),
        Err(EngineError::Unreachable { start, goal }) => {
            println!(
                "{}",
                serde_json::json!({ "no_path": { "from": start, "to": goal } })
            );
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
