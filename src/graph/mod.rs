//! Graph types and the traversals they share.
//!
//! - `weighted_digraph`: directed, weighted, adjacency-matrix backed
//! - `labeled_graph`: undirected, label-keyed, adjacency-list backed
//! - `traversal`: frontier-driven DFS/BFS, cycle checks and components

pub mod labeled_graph;
pub mod traversal;
pub mod weighted_digraph;
mod render;

pub use labeled_graph::LabeledGraph;
pub use traversal::{Bfs, Dfs, Frontier, Neighborhood, Queue, Stack, Traversal};
pub use weighted_digraph::{ShortestPaths, WeightedDigraph};
