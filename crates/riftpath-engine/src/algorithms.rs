//! Graph query algorithms: BFS shortest path, DFS reachability path,
//! greedy clique expansion, and ordered neighbor intersection.
//!
//! All algorithms are read-only over the graph and run in O(V + E). Edges
//! are directional, so reachability can be asymmetric: `shortest_path(a, b)`
//! may succeed while `shortest_path(b, a)` fails.

use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};

use crate::error::{EngineError, Result};
use crate::graph::Graph;

/// Shortest path from `start` to `goal` by edge count.
///
/// Breadth-first with a FIFO frontier. Edge weights are ignored: the first
/// time a vertex is reached is along a minimum-hop path. Returns the full
/// path including both endpoints; `shortest_path(a, a)` is `[a]`.
pub fn shortest_path(graph: &Graph, start: &str, goal: &str) -> Result<Vec<String>> {
    graph.get_vertex(start)?;
    graph.get_vertex(goal)?;

    // visited[key] = the first vertex that reached it; start maps to itself.
    let mut visited: IndexMap<String, String> = IndexMap::new();
    let mut frontier: VecDeque<(String, String)> = VecDeque::new();
    frontier.push_back((start.to_string(), start.to_string()));

    while let Some((key, parent)) = frontier.pop_front() {
        if visited.contains_key(goal) {
            break;
        }
        if visited.contains_key(&key) {
            continue;
        }
        visited.insert(key.clone(), parent);

        for neighbor in graph.get_vertex(&key)?.neighbor_keys() {
            if !visited.contains_key(neighbor) {
                // Parent captured at enqueue time: the first vertex to
                // reach `neighbor` wins even if its entry dequeues later.
                frontier.push_back((neighbor.to_string(), key.clone()));
            }
        }
    }

    reconstruct(&visited, start, goal)
}

/// A path from `start` to `goal` found by depth-first traversal.
///
/// Uses an explicit worklist stack rather than recursion, so traversal
/// depth is not bounded by the call stack. Neighbors are pushed in reverse
/// insertion order, which reproduces the discovery order of a recursive
/// walk. Each vertex is visited at most once. The result is whatever path
/// depth-first discovery finds first, not necessarily the shortest.
pub fn dfs_path(graph: &Graph, start: &str, goal: &str) -> Result<Vec<String>> {
    graph.get_vertex(start)?;
    graph.get_vertex(goal)?;

    let mut visited: IndexMap<String, String> = IndexMap::new();
    let mut stack: Vec<(String, String)> = vec![(start.to_string(), start.to_string())];

    while let Some((key, parent)) = stack.pop() {
        if visited.contains_key(&key) {
            continue;
        }
        visited.insert(key.clone(), parent);
        if key == goal {
            break;
        }

        let neighbors: Vec<&str> = graph.get_vertex(&key)?.neighbor_keys().collect();
        for neighbor in neighbors.into_iter().rev() {
            if !visited.contains_key(neighbor) {
                stack.push((neighbor.to_string(), key.clone()));
            }
        }
    }

    reconstruct(&visited, start, goal)
}

/// Greedy clique expansion around `seed`.
///
/// Single pass over the graph in insertion order: a vertex joins the set
/// when the current set is a subset of its outgoing neighbors. Growth is
/// monotonic and the result depends on enumeration order; this
/// approximates a clique rather than solving maximum clique.
pub fn clique(graph: &Graph, seed: &str) -> Result<IndexSet<String>> {
    graph.get_vertex(seed)?;

    let mut members: IndexSet<String> = IndexSet::new();
    members.insert(seed.to_string());

    for key in graph.vertex_keys() {
        let vertex = graph.get_vertex(key)?;
        if members.iter().all(|m| vertex.has_neighbor(m)) {
            members.insert(key.to_string());
        }
    }

    Ok(members)
}

/// Ordered intersection of two vertices' neighbor lists.
///
/// Preserves the order of `a`'s neighbor list. A vertex never holds
/// duplicate neighbors, so this degenerates to set intersection with a
/// deterministic order.
pub fn intersect(graph: &Graph, a: &str, b: &str) -> Result<Vec<String>> {
    let vertex_a = graph.get_vertex(a)?;
    let vertex_b = graph.get_vertex(b)?;

    Ok(vertex_a
        .neighbor_keys()
        .filter(|key| vertex_b.has_neighbor(key))
        .map(str::to_string)
        .collect())
}

/// Walk parent links from `goal` back to `start`, then reverse.
///
/// Guarded against an unvisited `goal`: a missing entry fails explicitly
/// instead of looping.
fn reconstruct(
    visited: &IndexMap<String, String>,
    start: &str,
    goal: &str,
) -> Result<Vec<String>> {
    if !visited.contains_key(goal) {
        return Err(EngineError::Unreachable {
            start: start.to_string(),
            goal: goal.to_string(),
        });
    }

    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while current != start {
        current = visited
            .get(current)
            .map(String::as_str)
            .ok_or_else(|| EngineError::Unreachable {
                start: start.to_string(),
                goal: goal.to_string(),
            })?;
        path.push(current.to_string());
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Directed chain A → B → C → D with no reverse edges, plus an
    /// isolated vertex E.
    fn directed_chain() -> Graph {
        let mut graph = Graph::new();
        for key in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(key);
        }
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 1).unwrap();
        graph.add_edge("C", "D", 2).unwrap();
        graph
    }

    /// Bidirectional diamond with a long detour:
    ///
    /// ```text
    /// A ↔ B ↔ D
    /// A ↔ C ↔ D   plus  A ↔ X ↔ Y ↔ D
    /// ```
    fn diamond() -> Graph {
        let mut graph = Graph::new();
        for key in ["A", "B", "C", "D", "X", "Y"] {
            graph.add_vertex(key);
        }
        for (from, to) in [
            ("A", "B"),
            ("A", "C"),
            ("B", "D"),
            ("C", "D"),
            ("A", "X"),
            ("X", "Y"),
            ("Y", "D"),
        ] {
            graph.add_edge(from, to, 1).unwrap();
            graph.add_edge(to, from, 1).unwrap();
        }
        graph
    }

    #[test]
    fn test_shortest_path_trivial() {
        let graph = directed_chain();
        assert_eq!(shortest_path(&graph, "A", "A").unwrap(), vec!["A"]);
    }

    #[test]
    fn test_shortest_path_directed_chain() {
        let graph = directed_chain();
        assert_eq!(
            shortest_path(&graph, "A", "D").unwrap(),
            vec!["A", "B", "C", "D"]
        );
    }

    #[test]
    fn test_shortest_path_respects_direction() {
        let graph = directed_chain();
        let err = shortest_path(&graph, "D", "A").unwrap_err();
        assert!(matches!(
            err,
            EngineError::Unreachable { start, goal } if start == "D" && goal == "A"
        ));
    }

    #[test]
    fn test_shortest_path_unreachable_isolated() {
        let graph = directed_chain();
        assert!(matches!(
            shortest_path(&graph, "A", "E").unwrap_err(),
            EngineError::Unreachable { .. }
        ));
    }

    #[test]
    fn test_shortest_path_unknown_vertex() {
        let graph = directed_chain();
        assert!(matches!(
            shortest_path(&graph, "A", "Z").unwrap_err(),
            EngineError::VertexNotFound { .. }
        ));
        assert!(matches!(
            shortest_path(&graph, "Z", "A").unwrap_err(),
            EngineError::VertexNotFound { .. }
        ));
    }

    #[test]
    fn test_shortest_path_picks_minimum_hops() {
        let graph = diamond();
        // Both two-hop routes beat the three-hop detour; BFS discovers B
        // before C, so the B route wins.
        assert_eq!(
            shortest_path(&graph, "A", "D").unwrap(),
            vec!["A", "B", "D"]
        );
    }

    #[test]
    fn test_dfs_path_endpoints_and_length() {
        let graph = diamond();
        let dfs = dfs_path(&graph, "A", "D").unwrap();
        let bfs = shortest_path(&graph, "A", "D").unwrap();

        assert_eq!(dfs.first().map(String::as_str), Some("A"));
        assert_eq!(dfs.last().map(String::as_str), Some("D"));
        assert!(dfs.len() >= bfs.len());
    }

    #[test]
    fn test_dfs_path_follows_first_neighbor() {
        let graph = directed_chain();
        // Only one route exists, and DFS must find exactly it.
        assert_eq!(
            dfs_path(&graph, "A", "D").unwrap(),
            vec!["A", "B", "C", "D"]
        );
    }

    #[test]
    fn test_dfs_path_unreachable() {
        let graph = directed_chain();
        assert!(matches!(
            dfs_path(&graph, "D", "A").unwrap_err(),
            EngineError::Unreachable { .. }
        ));
    }

    #[test]
    fn test_dfs_visits_once_in_cycles() {
        let mut graph = Graph::new();
        for key in ["A", "B", "C"] {
            graph.add_vertex(key);
        }
        // Cycle A → B → A, with C hanging off B.
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "A", 1).unwrap();
        graph.add_edge("B", "C", 1).unwrap();

        assert_eq!(dfs_path(&graph, "A", "C").unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_clique_contains_seed() {
        let graph = directed_chain();
        let members = clique(&graph, "E").unwrap();
        assert_eq!(members.len(), 1);
        assert!(members.contains("E"));
    }

    #[test]
    fn test_clique_greedy_expansion() {
        // Triangle A-B-C (bidirectional) plus D linked only to A.
        let mut graph = Graph::new();
        for key in ["A", "B", "C", "D"] {
            graph.add_vertex(key);
        }
        for (from, to) in [("A", "B"), ("A", "C"), ("B", "C"), ("A", "D")] {
            graph.add_edge(from, to, 1).unwrap();
            graph.add_edge(to, from, 1).unwrap();
        }

        let members = clique(&graph, "A").unwrap();
        let expected: Vec<&str> = vec!["A", "B", "C"];
        assert_eq!(members.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_clique_is_order_dependent() {
        // B and C are both adjacent to A but not to each other: whichever
        // enumerates first joins, then blocks the other.
        let mut graph = Graph::new();
        for key in ["A", "B", "C"] {
            graph.add_vertex(key);
        }
        for (from, to) in [("A", "B"), ("A", "C")] {
            graph.add_edge(from, to, 1).unwrap();
            graph.add_edge(to, from, 1).unwrap();
        }

        let members = clique(&graph, "A").unwrap();
        assert_eq!(
            members.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["A", "B"]
        );
    }

    #[test]
    fn test_clique_deterministic() {
        let graph = diamond();
        let first = clique(&graph, "A").unwrap();
        let second = clique(&graph, "A").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_intersect_disjoint() {
        let graph = directed_chain();
        // N(A) = {B}, N(C) = {D}.
        assert!(intersect(&graph, "A", "C").unwrap().is_empty());
    }

    #[test]
    fn test_intersect_subset_keeps_order() {
        let mut graph = Graph::new();
        for key in ["A", "B", "P", "Q", "R"] {
            graph.add_vertex(key);
        }
        for to in ["P", "Q"] {
            graph.add_edge("A", to, 1).unwrap();
        }
        for to in ["R", "Q", "P"] {
            graph.add_edge("B", to, 1).unwrap();
        }

        // N(A) ⊆ N(B): intersection is all of A's neighbors, in A's order.
        assert_eq!(intersect(&graph, "A", "B").unwrap(), vec!["P", "Q"]);
    }

    #[test]
    fn test_intersect_unknown_vertex() {
        let graph = directed_chain();
        assert!(matches!(
            intersect(&graph, "A", "Z").unwrap_err(),
            EngineError::VertexNotFound { .. }
        ));
    }
}
