//! In-memory similarity graph: string-keyed vertices with weighted,
//! directional adjacency.
//!
//! Vertices never hold references to each other. All adjacency is by key
//! into the single owning map, and both maps preserve insertion order, so
//! enumeration is deterministic for a given dataset. Order determinism is
//! part of the contract: the clique expansion result depends on it.

use indexmap::IndexMap;

use crate::error::{EngineError, Result};

/// A named vertex holding its outgoing weighted edges.
#[derive(Debug, Clone)]
pub struct Vertex {
    key: String,
    neighbors: IndexMap<String, u32>,
}

impl Vertex {
    fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            neighbors: IndexMap::new(),
        }
    }

    /// The vertex's own key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add an outgoing edge. First write wins: a duplicate neighbor key is
    /// a silent no-op, as is a self-loop.
    pub fn add_neighbor(&mut self, key: impl Into<String>, weight: u32) {
        let key = key.into();
        if key == self.key {
            return;
        }
        self.neighbors.entry(key).or_insert(weight);
    }

    /// Neighbor keys in insertion order.
    pub fn neighbor_keys(&self) -> impl Iterator<Item = &str> {
        self.neighbors.keys().map(String::as_str)
    }

    /// Whether `key` is an outgoing neighbor.
    pub fn has_neighbor(&self, key: &str) -> bool {
        self.neighbors.contains_key(key)
    }

    /// Weight of the outgoing edge to `key`.
    pub fn edge_weight(&self, key: &str) -> Result<u32> {
        self.neighbors
            .get(key)
            .copied()
            .ok_or_else(|| EngineError::VertexNotFound {
                key: key.to_string(),
            })
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// The owning graph: key → vertex, in insertion order.
///
/// Built once by the builder and read-only afterwards; no interior
/// mutability, so a built graph can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: IndexMap<String, Vertex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex if absent and return it. Idempotent: adding an
    /// existing key returns the vertex already stored.
    pub fn add_vertex(&mut self, key: impl Into<String>) -> &mut Vertex {
        let key = key.into();
        self.vertices
            .entry(key.clone())
            .or_insert_with(|| Vertex::new(key))
    }

    /// Add a directed edge from `from` to `to`. Both endpoints must
    /// already exist; the reverse edge is not added.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u32) -> Result<()> {
        if !self.vertices.contains_key(to) {
            return Err(EngineError::VertexNotFound {
                key: to.to_string(),
            });
        }
        let vertex = self
            .vertices
            .get_mut(from)
            .ok_or_else(|| EngineError::VertexNotFound {
                key: from.to_string(),
            })?;
        vertex.add_neighbor(to, weight);
        Ok(())
    }

    pub fn get_vertex(&self, key: &str) -> Result<&Vertex> {
        self.vertices
            .get(key)
            .ok_or_else(|| EngineError::VertexNotFound {
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vertices.contains_key(key)
    }

    /// All vertex keys in insertion order.
    pub fn vertex_keys(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(String::as_str)
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::degree).sum()
    }
}
