//! # `duograph` - Two Small Graph Toolkits
//!
//! Two structurally parallel graph types with deterministic traversals:
//!
//! - [`WeightedDigraph`]: a directed graph over vertex ids `0..n` whose edge
//!   weights live in a dense adjacency matrix. Supports DFS/BFS, cycle
//!   detection and single-source shortest paths (Dijkstra).
//! - [`LabeledGraph`]: an undirected graph over arbitrary labels, stored as
//!   insertion-ordered adjacency lists. Supports vertex removal, DFS/BFS,
//!   cycle detection and connected components.
//!
//! ## Behavioural Contract
//!
//! - **No-throw API**: invalid input (out-of-range ids, self-loops, negative
//!   weights, absent vertices or edges) is absorbed silently and leaves the
//!   graph unchanged. Queries on unknown vertices return `false`, `None`, an
//!   empty vector or infinity.
//! - **Deterministic order**: traversals manage an explicit frontier and push
//!   each batch of newly discovered neighbours in ascending order, so the
//!   smallest neighbour is always explored first.
//! - **Zero weight means no edge** in the weighted graph. Storing a weight of
//!   zero is the same as removing the edge.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when mutations are ignored and when
//!   traversals complete.
//!
//! ## Example
//!
//! ```rust
//! use duograph::{LabeledGraph, WeightedDigraph};
//!
//! let g = WeightedDigraph::<i64>::from_edges([(0, 1, 4), (1, 2, 3), (0, 2, 9)]);
//! assert_eq!(g.dfs(0, None), vec![0, 1, 2]);
//! assert_eq!(g.dijkstra(0), vec![0.0, 4.0, 7.0]);
//!
//! let mut h: LabeledGraph<&str> = [("a", "b"), ("b", "c")].into_iter().collect();
//! assert_eq!(h.count_connected_components(), 1);
//! h.remove_vertex(&"b");
//! assert_eq!(h.count_connected_components(), 2);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod invariant;
mod macros;

pub mod collections;
pub mod graph;

pub use collections::SquareMatrix;
pub use graph::{LabeledGraph, ShortestPaths, WeightedDigraph};
