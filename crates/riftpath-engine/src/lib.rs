//! riftpath-engine: Tag-similarity graph and query engine for champion
//! datasets.
//!
//! Decodes a champion dataset, derives a weighted similarity graph from
//! shared tags, and answers three queries over it: a clique-style
//! recommendation set, a shortest learning path, and the shared-neighbor
//! intersection of two champions.

pub mod algorithms;
pub mod builder;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod types;

pub use error::{EngineError, Result};
pub use types::{GraphStats, QueryReport};

use std::path::Path;

use chrono::Utc;
use indexmap::IndexSet;

use riftpath_core::ChampionRecord;

use crate::graph::Graph;

/// The query façade: owns the built graph and exposes the queries.
///
/// Construction is the only mutating phase. A built engine is read-only
/// and can be shared freely across threads.
pub struct RecommendEngine {
    graph: Graph,
}

impl RecommendEngine {
    /// Build the engine from decoded champion records.
    pub fn from_records(records: &[ChampionRecord]) -> Self {
        Self {
            graph: builder::build_graph(records),
        }
    }

    /// Load a dataset file and build the engine from it.
    pub fn from_dataset(path: impl AsRef<Path>) -> Result<Self> {
        let records = dataset::load_champions(path)?;
        Ok(Self::from_records(&records))
    }

    /// Direct access to the underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Run all three queries for a champion pair.
    pub fn query(&self, champion: &str, comparison: &str) -> Result<QueryReport> {
        let start = std::time::Instant::now();

        let recommended = algorithms::clique(&self.graph, champion)?;
        let path = algorithms::shortest_path(&self.graph, champion, comparison)?;
        let similar = algorithms::intersect(&self.graph, champion, comparison)?;

        let computation_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(champion, comparison, computation_ms, "Query complete");

        Ok(QueryReport {
            champion: champion.to_string(),
            comparison: comparison.to_string(),
            recommended,
            path,
            similar,
            stats: self.stats(),
            computation_ms,
            computed_at: Utc::now(),
        })
    }

    /// Clique-style recommendation set around one champion.
    pub fn recommend(&self, champion: &str) -> Result<IndexSet<String>> {
        algorithms::clique(&self.graph, champion)
    }

    /// Shortest learning path (by hop count) between two champions.
    pub fn learning_path(&self, from: &str, to: &str) -> Result<Vec<String>> {
        algorithms::shortest_path(&self.graph, from, to)
    }

    /// A path found by depth-first traversal; not necessarily shortest.
    pub fn reachability_path(&self, from: &str, to: &str) -> Result<Vec<String>> {
        algorithms::dfs_path(&self.graph, from, to)
    }

    /// Champions adjacent to both arguments.
    pub fn similar(&self, a: &str, b: &str) -> Result<Vec<String>> {
        algorithms::intersect(&self.graph, a, b)
    }

    /// Statistics about the built graph.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_vertices: self.graph.vertex_count(),
            total_edges: self.graph.edge_count(),
        }
    }
}
