//! An undirected, unweighted graph over arbitrary vertex labels.
//!
//! Adjacency is an insertion-ordered map from label to neighbour list, so
//! vertex iteration follows the order in which vertices first appeared, and
//! removing a vertex keeps the relative order of the others.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Map insert |
//! | `add_edge` / `remove_edge` | \(O(\text{degree})\) | Duplicate check / linear scan |
//! | `remove_vertex` | \(O(n + \text{degree}^2)\) | Order-preserving map removal |
//! | `edges` | \(O(n + m)\) | Each pair emitted once |

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::graph::traversal::{self, Bfs, Dfs, Neighborhood};
use crate::invariant::invariant_assert;
use crate::macros::{graph_debug, graph_trace};

/// Undirected graph keyed by labels.
///
/// Self-loops and duplicate edges are never stored; operations on absent
/// vertices or edges are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledGraph<L = String>
where
    L: Hash + Eq,
{
    adjacency: IndexMap<L, Vec<L>>,
}

impl<L> LabeledGraph<L>
where
    L: Clone + Eq + Hash + Ord,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }

    /// Creates a graph by replaying [`add_edge`](Self::add_edge) for each pair.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L)>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Adds a vertex with no edges. Ignored if it already exists.
    pub fn add_vertex(&mut self, vertex: L) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Connects `u` and `v`, creating either endpoint if needed.
    ///
    /// Ignored when `u == v`; adding an existing edge changes nothing.
    pub fn add_edge(&mut self, u: L, v: L) {
        if u == v {
            graph_debug!("ignoring self-loop edge");
            return;
        }
        let u_nbrs = self.adjacency.entry(u.clone()).or_default();
        if !u_nbrs.contains(&v) {
            u_nbrs.push(v.clone());
        }
        let v_nbrs = self.adjacency.entry(v).or_default();
        if !v_nbrs.contains(&u) {
            v_nbrs.push(u);
        }
        self.check_invariants();
    }

    /// Disconnects `u` and `v`. Ignored if either vertex or the edge is absent.
    pub fn remove_edge(&mut self, u: &L, v: &L) {
        if !self.contains_edge(u, v) {
            graph_debug!("ignoring removal of absent edge");
            return;
        }
        if let Some(nbrs) = self.adjacency.get_mut(u) {
            nbrs.retain(|n| n != v);
        }
        if let Some(nbrs) = self.adjacency.get_mut(v) {
            nbrs.retain(|n| n != u);
        }
        self.check_invariants();
    }

    /// Removes `vertex` and every edge touching it. Ignored if absent.
    pub fn remove_vertex(&mut self, vertex: &L) {
        if !self.contains_vertex(vertex) {
            graph_debug!("ignoring removal of absent vertex");
            return;
        }
        while let Some(first) = self
            .adjacency
            .get(vertex)
            .and_then(|nbrs| nbrs.first())
            .cloned()
        {
            self.remove_edge(vertex, &first);
        }
        self.adjacency.shift_remove(vertex);
        self.check_invariants();
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns `true` if `vertex` exists.
    pub fn contains_vertex(&self, vertex: &L) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns `true` if `u` and `v` are adjacent.
    pub fn contains_edge(&self, u: &L, v: &L) -> bool {
        self.adjacency
            .get(u)
            .map_or(false, |nbrs| nbrs.contains(v))
    }

    /// Neighbours of `vertex` in the order the edges were added.
    pub fn neighbors(&self, vertex: &L) -> Option<&[L]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Number of neighbours of `vertex`, `None` if absent.
    pub fn degree(&self, vertex: &L) -> Option<usize> {
        self.adjacency.get(vertex).map(Vec::len)
    }

    /// Returns the vertices in insertion order.
    pub fn vertices(&self) -> Vec<L> {
        self.adjacency.keys().cloned().collect()
    }

    /// Returns each undirected edge once.
    ///
    /// Vertices are walked in insertion order and a pair `(u, v)` is emitted
    /// while visiting `u` unless `v` was walked before it.
    pub fn edges(&self) -> Vec<(L, L)> {
        let mut processed: HashSet<&L> = HashSet::with_capacity(self.adjacency.len());
        let mut edges = Vec::new();
        for (u, nbrs) in &self.adjacency {
            for v in nbrs {
                if !processed.contains(v) {
                    edges.push((u.clone(), v.clone()));
                }
            }
            processed.insert(u);
        }
        edges
    }

    /// Returns `true` if consecutive vertices of `path` are adjacent.
    ///
    /// The empty path is valid; a single vertex is valid iff it exists.
    pub fn is_valid_path(&self, path: &[L]) -> bool {
        match path {
            [] => true,
            [only] => self.contains_vertex(only),
            _ => path.windows(2).all(|pair| self.contains_edge(&pair[0], &pair[1])),
        }
    }

    /// Lazy depth-first traversal from `start`.
    pub fn dfs_iter(&self, start: L) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }

    /// Lazy breadth-first traversal from `start`.
    pub fn bfs_iter(&self, start: L) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Depth-first visit order from `start`, smallest neighbour first.
    ///
    /// Stops right after `end` is visited. An unknown `start` yields an empty
    /// vector, and so does `start == end`.
    pub fn dfs(&self, start: &L, end: Option<&L>) -> Vec<L> {
        if end == Some(start) {
            return Vec::new();
        }
        let order = traversal::collect_until(self.dfs_iter(start.clone()), end);
        graph_trace!("dfs visited {} vertices", order.len());
        order
    }

    /// Breadth-first visit order from `start`, smallest neighbour first.
    ///
    /// Same early-stop and empty-result rules as [`dfs`](Self::dfs).
    pub fn bfs(&self, start: &L, end: Option<&L>) -> Vec<L> {
        if end == Some(start) {
            return Vec::new();
        }
        let order = traversal::collect_until(self.bfs_iter(start.clone()), end);
        graph_trace!("bfs visited {} vertices", order.len());
        order
    }

    /// Groups the vertices into connected components.
    ///
    /// Components appear in the order of their first vertex; members are
    /// listed in depth-first order.
    pub fn connected_components(&self) -> Vec<Vec<L>> {
        traversal::connected_components(self, self.adjacency.keys().cloned())
    }

    /// Returns the number of connected components.
    pub fn count_connected_components(&self) -> usize {
        self.connected_components().len()
    }

    /// Returns `true` if the graph contains a cycle.
    ///
    /// Uses the frontier-membership probe from every vertex in insertion
    /// order; see [`traversal::frontier_probe_has_cycle`].
    pub fn has_cycle(&self) -> bool {
        traversal::frontier_probe_has_cycle(self, self.adjacency.keys().cloned())
    }

    fn check_invariants(&self) {
        invariant_assert(
            self.adjacency
                .iter()
                .all(|(u, nbrs)| nbrs.iter().all(|v| v != u)),
            "adjacency lists must not contain self-loops",
        );
        invariant_assert(
            self.adjacency.iter().all(|(u, nbrs)| {
                nbrs.iter()
                    .all(|v| self.adjacency.get(v).map_or(false, |back| back.contains(u)))
            }),
            "adjacency must be symmetric",
        );
        invariant_assert(
            self.adjacency.values().all(|nbrs| {
                let unique: HashSet<&L> = nbrs.iter().collect();
                unique.len() == nbrs.len()
            }),
            "adjacency lists must not contain duplicates",
        );
    }
}

impl<L> Default for LabeledGraph<L>
where
    L: Clone + Eq + Hash + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Extend<(L, L)> for LabeledGraph<L>
where
    L: Clone + Eq + Hash + Ord,
{
    fn extend<I: IntoIterator<Item = (L, L)>>(&mut self, iter: I) {
        for (u, v) in iter {
            self.add_edge(u, v);
        }
    }
}

impl<L> FromIterator<(L, L)> for LabeledGraph<L>
where
    L: Clone + Eq + Hash + Ord,
{
    fn from_iter<I: IntoIterator<Item = (L, L)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<L> Neighborhood for LabeledGraph<L>
where
    L: Clone + Eq + Hash + Ord,
{
    type Node = L;

    fn contains(&self, node: &L) -> bool {
        self.contains_vertex(node)
    }

    fn neighbors_into(&self, node: &L, out: &mut Vec<L>) {
        if let Some(nbrs) = self.adjacency.get(node) {
            out.extend(nbrs.iter().cloned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[&str]) -> LabeledGraph<char> {
        edges
            .iter()
            .map(|e| {
                let mut chars = e.chars();
                (chars.next().unwrap(), chars.next().unwrap())
            })
            .collect()
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g = LabeledGraph::new();
        for v in "ABCDE".chars() {
            g.add_vertex(v);
        }
        g.add_vertex('A');
        assert_eq!(g.vertices(), vec!['A', 'B', 'C', 'D', 'E']);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn self_loop_is_ignored() {
        let mut g = LabeledGraph::new();
        g.add_edge('A', 'A');
        assert!(g.is_empty());
    }

    #[test]
    fn neighbors_keep_edge_order() {
        let g = graph(&["AC", "AB"]);
        assert_eq!(g.neighbors(&'A'), Some(&['C', 'B'][..]));
        assert_eq!(g.degree(&'B'), Some(1));
        assert_eq!(g.neighbors(&'Z'), None);
    }

    #[test]
    fn remove_vertex_keeps_insertion_order() {
        let mut g = graph(&["AB", "BC", "CD"]);
        g.remove_vertex(&'B');
        assert_eq!(g.vertices(), vec!['A', 'C', 'D']);
        assert_eq!(g.neighbors(&'A'), Some(&[][..]));
        assert_eq!(g.edges(), vec![('C', 'D')]);
    }

    #[test]
    fn unknown_start_traverses_nothing() {
        let g = graph(&["AB"]);
        assert!(g.dfs(&'Z', None).is_empty());
        assert!(g.bfs(&'Z', None).is_empty());
    }

    #[test]
    fn components_listed_by_first_vertex() {
        let g = graph(&["AB", "CD", "BE"]);
        assert_eq!(g.connected_components(), vec![vec!['A', 'B', 'E'], vec!['C', 'D']]);
    }
}
