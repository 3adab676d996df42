//! Builds the similarity graph from champion records.
//!
//! Two champions are linked when they share tags:
//! - same primary tag → weight 1
//! - both carry two tags and A's primary matches B's secondary, or the two
//!   secondaries match → weight 2
//!
//! Every vertex is added before any edge, and each firing rule issues both
//! edge directions explicitly, so the graph stays direction-agnostic and
//! `add_edge` can never see a missing endpoint. First write wins per
//! directed pair: once a pair is linked, later rules for it are no-ops.

use riftpath_core::ChampionRecord;

use crate::graph::Graph;

/// Weight for a shared primary tag.
const PRIMARY_WEIGHT: u32 = 1;
/// Weight for a secondary-tag match between two-tag champions.
const SECONDARY_WEIGHT: u32 = 2;

/// Build the similarity graph from decoded records.
///
/// Vertex order follows record order, which fixes the enumeration order
/// the clique expansion depends on.
pub fn build_graph(records: &[ChampionRecord]) -> Graph {
    let mut graph = Graph::new();

    for record in records {
        graph.add_vertex(record.id.clone());
    }

    for a in records {
        for b in records {
            if a.id != b.id {
                link_pair(&mut graph, a, b);
            }
        }
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Similarity graph built"
    );
    graph
}

/// Apply the tag rules for the ordered pair `(a, b)`, adding both edge
/// directions for every rule that fires.
fn link_pair(graph: &mut Graph, a: &ChampionRecord, b: &ChampionRecord) {
    if a.primary_tag().is_some() && a.primary_tag() == b.primary_tag() {
        add_both(graph, &a.id, &b.id, PRIMARY_WEIGHT);
    }

    if a.tags.len() == 2 && b.tags.len() == 2 {
        if a.primary_tag() == b.secondary_tag() {
            add_both(graph, &a.id, &b.id, SECONDARY_WEIGHT);
        }
        if a.secondary_tag() == b.secondary_tag() {
            add_both(graph, &a.id, &b.id, SECONDARY_WEIGHT);
        }
    }
}

fn add_both(graph: &mut Graph, a: &str, b: &str, weight: u32) {
    // Both endpoints were added up front, so neither call can fail.
    let _forward = graph.add_edge(a, b, weight);
    let _backward = graph.add_edge(b, a, weight);
    debug_assert!(_forward.is_ok() && _backward.is_ok());
}
