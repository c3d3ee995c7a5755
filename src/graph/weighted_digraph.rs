//! A directed, edge-weighted graph over dense integer vertex ids.
//!
//! Vertices are the range `0..n`; edge weights live directly in an `n x n`
//! [`SquareMatrix`]. A cell equal to `W::zero()` means "no edge", so storing a
//! zero weight is indistinguishable from removing the edge.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(n^2)\) | Rebuilds the matrix one row/column larger |
//! | `add_edge` / `remove_edge` | \(O(1)\) | Single cell write |
//! | `edges` | \(O(n^2)\) | Row-major scan |
//! | `dfs` / `bfs` | \(O(n^2)\) | Each expansion scans a full row |
//! | `dijkstra` | \(O(n^2 \log n)\) | Lazy-deletion binary heap |
//!
//! Memory is \(O(n^2)\) regardless of the number of edges.

use core::cmp::Reverse;
use std::collections::BinaryHeap;

use num_traits::PrimInt;

use crate::collections::SquareMatrix;
use crate::graph::traversal::{self, Bfs, Dfs, Neighborhood};
use crate::invariant::invariant_assert;
use crate::macros::{graph_debug, graph_trace};

/// Directed weighted graph backed by an adjacency matrix.
///
/// Invalid mutations (out-of-range vertex, self-loop, negative weight) are
/// ignored and leave the graph unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedDigraph<W = i64> {
    matrix: SquareMatrix<W>,
}

impl<W: PrimInt> WeightedDigraph<W> {
    /// Creates an empty graph.
    pub const fn new() -> Self {
        Self {
            matrix: SquareMatrix::new(),
        }
    }

    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn with_vertices(vertex_count: usize) -> Self {
        let graph = Self {
            matrix: SquareMatrix::filled(vertex_count, W::zero()),
        };
        graph.check_invariants();
        graph
    }

    /// Creates a graph from `(src, dst, weight)` triples.
    ///
    /// The vertex count is `max(referenced index) + 1` (zero for an empty
    /// list); the edges are then replayed through [`add_edge`](Self::add_edge)
    /// in order, so invalid triples are skipped and later duplicates win.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let edges: Vec<_> = edges.into_iter().collect();
        let vertex_count = edges
            .iter()
            .map(|&(src, dst, _)| src.max(dst) + 1)
            .max()
            .unwrap_or(0);

        let mut graph = Self::with_vertices(vertex_count);
        for (src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Appends a vertex with no edges and returns the new vertex count.
    pub fn add_vertex(&mut self) -> usize {
        let count = self.matrix.grow_with(W::zero);
        self.check_invariants();
        count
    }

    /// Sets the weight of `src -> dst`.
    ///
    /// Ignored when `weight` is negative, `src == dst`, or either vertex is out
    /// of range. A weight of zero removes the edge.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: W) {
        if weight < W::zero() {
            graph_debug!("ignoring edge {src} -> {dst}: negative weight");
            return;
        }
        if src == dst {
            graph_debug!("ignoring edge {src} -> {dst}: self-loop");
            return;
        }
        match self.matrix.get_mut(src, dst) {
            Some(cell) => *cell = weight,
            None => {
                graph_debug!("ignoring edge {src} -> {dst}: vertex out of range");
                return;
            }
        }
        self.check_invariants();
    }

    /// Sets `src -> dst` with weight one.
    pub fn add_unit_edge(&mut self, src: usize, dst: usize) {
        self.add_edge(src, dst, W::one());
    }

    /// Removes `src -> dst`. Ignored when either vertex is out of range.
    pub fn remove_edge(&mut self, src: usize, dst: usize) {
        match self.matrix.get_mut(src, dst) {
            Some(cell) => *cell = W::zero(),
            None => graph_debug!("ignoring removal of {src} -> {dst}: vertex out of range"),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.matrix.dim()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.matrix.cells().filter(|(_, _, w)| !w.is_zero()).count()
    }

    /// Returns the vertex ids `0..n`.
    pub fn vertices(&self) -> Vec<usize> {
        (0..self.vertex_count()).collect()
    }

    /// Returns every edge as `(src, dst, weight)` in row-major order.
    pub fn edges(&self) -> Vec<(usize, usize, W)> {
        self.matrix
            .cells()
            .filter(|(_, _, w)| !w.is_zero())
            .map(|(src, dst, &w)| (src, dst, w))
            .collect()
    }

    /// Returns the weight of `src -> dst`, or `None` if there is no such edge.
    pub fn weight(&self, src: usize, dst: usize) -> Option<W> {
        self.matrix.get(src, dst).copied().filter(|w| !w.is_zero())
    }

    /// Returns `true` if `src -> dst` exists.
    pub fn has_edge(&self, src: usize, dst: usize) -> bool {
        self.weight(src, dst).is_some()
    }

    /// Iterates over the successors of `vertex` in ascending order, with weights.
    ///
    /// Yields nothing for an out-of-range vertex.
    pub fn successors(&self, vertex: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        self.matrix
            .row(vertex)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
            .map(|(dst, &w)| (dst, w))
    }

    /// Read access to the underlying adjacency matrix.
    pub fn matrix(&self) -> &SquareMatrix<W> {
        &self.matrix
    }

    /// Returns `true` if `path` can be walked along existing edges.
    ///
    /// The empty path is valid; a single vertex is valid iff it exists.
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        match path {
            [] => true,
            [only] => *only < self.vertex_count(),
            _ => path.windows(2).all(|pair| self.has_edge(pair[0], pair[1])),
        }
    }

    /// Lazy depth-first traversal from `start`.
    pub fn dfs_iter(&self, start: usize) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }

    /// Lazy breadth-first traversal from `start`.
    pub fn bfs_iter(&self, start: usize) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Depth-first visit order from `start`, smallest successor first.
    ///
    /// Stops right after `end` is visited. An out-of-range `start` yields an
    /// empty vector; `start == end` yields `[start]`.
    pub fn dfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        let order = traversal::collect_until(self.dfs_iter(start), end.as_ref());
        graph_trace!("dfs from {start} visited {} vertices", order.len());
        order
    }

    /// Breadth-first visit order from `start`, smallest successor first.
    ///
    /// Same early-stop and out-of-range rules as [`dfs`](Self::dfs).
    pub fn bfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        let order = traversal::collect_until(self.bfs_iter(start), end.as_ref());
        graph_trace!("bfs from {start} visited {} vertices", order.len());
        order
    }

    /// Returns `true` iff the graph contains a directed cycle.
    pub fn has_cycle(&self) -> bool {
        traversal::has_directed_cycle(self, 0..self.vertex_count())
    }

    /// Shortest distances from `src` to every vertex, indexed by vertex id.
    ///
    /// Unreachable vertices (and every vertex, if `src` is out of range) get
    /// `f64::INFINITY`.
    pub fn dijkstra(&self, src: usize) -> Vec<f64> {
        self.shortest_paths(src)
            .distances()
            .iter()
            .map(|d| d.and_then(|d| d.to_f64()).unwrap_or(f64::INFINITY))
            .collect()
    }

    /// Computes exact shortest distances and the shortest-path tree from `src`.
    ///
    /// A vertex's distance is fixed the first time it leaves the priority
    /// queue. Ties are broken by vertex id.
    pub fn shortest_paths(&self, src: usize) -> ShortestPaths<W> {
        let n = self.vertex_count();
        let mut dist: Vec<Option<W>> = vec![None; n];
        let mut pred = vec![None; n];
        let mut heap = BinaryHeap::new();

        if src < n {
            heap.push(Reverse((W::zero(), src, None)));
        }

        while let Some(Reverse((d, u, via))) = heap.pop() {
            if dist[u].is_some() {
                continue;
            }
            dist[u] = Some(d);
            pred[u] = via;

            for (v, w) in self.successors(u) {
                if dist[v].is_none() {
                    heap.push(Reverse((d.saturating_add(w), v, Some(u))));
                }
            }
        }

        graph_trace!(
            "shortest paths from {src} reached {} of {n} vertices",
            dist.iter().filter(|d| d.is_some()).count()
        );
        ShortestPaths {
            source: src,
            dist,
            pred,
        }
    }

    fn check_invariants(&self) {
        let m = &self.matrix;
        invariant_assert(
            m.rows().all(|row| row.len() == m.dim()),
            "adjacency matrix must be square",
        );
        invariant_assert(
            (0..m.dim()).all(|i| m.get(i, i).map_or(false, |w| w.is_zero())),
            "adjacency matrix diagonal must be zero",
        );
    }
}

impl<W: PrimInt> Default for WeightedDigraph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: PrimInt> FromIterator<(usize, usize, W)> for WeightedDigraph<W> {
    fn from_iter<I: IntoIterator<Item = (usize, usize, W)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<W: PrimInt> Neighborhood for WeightedDigraph<W> {
    type Node = usize;

    fn contains(&self, node: &usize) -> bool {
        *node < self.vertex_count()
    }

    fn neighbors_into(&self, node: &usize, out: &mut Vec<usize>) {
        out.extend(self.successors(*node).map(|(v, _)| v));
    }
}

/// Result of a single-source shortest-path computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<W> {
    source: usize,
    dist: Vec<Option<W>>,
    pred: Vec<Option<usize>>,
}

impl<W: Copy> ShortestPaths<W> {
    /// The source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance per vertex, `None` when unreachable.
    pub fn distances(&self) -> &[Option<W>] {
        &self.dist
    }

    /// Distance to `dst`, `None` when unreachable or out of range.
    pub fn distance(&self, dst: usize) -> Option<W> {
        self.dist.get(dst).copied().flatten()
    }

    /// Predecessor of `dst` on its shortest path.
    pub fn predecessor(&self, dst: usize) -> Option<usize> {
        self.pred.get(dst).copied().flatten()
    }

    /// Reconstructs the vertex sequence from the source to `dst`.
    pub fn path_to(&self, dst: usize) -> Option<Vec<usize>> {
        self.distance(dst)?;
        let mut path = vec![dst];
        let mut cur = dst;
        while let Some(prev) = self.predecessor(cur) {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        Some(path)
    }
}
