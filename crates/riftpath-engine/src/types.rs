//! Result types for the query façade.

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The façade's combined three-query result for a champion pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryReport {
    pub champion: String,
    pub comparison: String,
    /// Greedy clique around `champion`: champions that play alike.
    pub recommended: IndexSet<String>,
    /// Shortest learning path from `champion` to `comparison`, inclusive.
    pub path: Vec<String>,
    /// Neighbors shared by both champions, in `champion`'s neighbor order.
    pub similar: Vec<String>,
    pub stats: GraphStats,
    pub computation_ms: u64,
    pub computed_at: DateTime<Utc>,
}

/// Statistics about the built similarity graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_vertices: usize,
    pub total_edges: usize,
}
