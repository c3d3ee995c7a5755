//! Frontier-driven traversals shared by both graph types.
//!
//! Every traversal here manages its frontier explicitly instead of recursing,
//! and every batch of newly discovered neighbours is sorted ascending before it
//! is pushed. With a LIFO [`Stack`] the smallest neighbour is therefore expanded
//! first (depth-first order); with a FIFO [`Queue`] neighbours are dequeued
//! smallest first within each batch (breadth-first order). This makes the
//! visit order a pure function of the graph contents.
//!
//! The traversal is exposed as a lazy iterator ([`Dfs`] / [`Bfs`]). A node's
//! neighbours are only expanded when the iterator is advanced past it, so
//! stopping at a target vertex never looks beyond it.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Read-only adjacency view that the traversals operate on.
pub trait Neighborhood {
    /// Vertex identifier. `Ord` drives the deterministic visit order.
    type Node: Clone + Eq + Hash + Ord;

    /// Returns `true` if `node` is a vertex of the graph.
    fn contains(&self, node: &Self::Node) -> bool;

    /// Appends the neighbours of `node` to `out`, in any order.
    ///
    /// Appends nothing when `node` is not a vertex.
    fn neighbors_into(&self, node: &Self::Node, out: &mut Vec<Self::Node>);
}

/// Pending-vertex collection that decides the traversal discipline.
pub trait Frontier<N>: Default {
    /// Pushes a batch sorted ascending, draining `batch`.
    fn push_sorted(&mut self, batch: &mut Vec<N>);

    /// Removes the next vertex to visit.
    fn pop(&mut self) -> Option<N>;

    /// Returns `true` if `node` is currently pending.
    fn contains(&self, node: &N) -> bool
    where
        N: PartialEq;

    /// Removes every pending vertex.
    fn clear(&mut self);
}

/// Last-in-first-out frontier.
#[derive(Debug, Clone)]
pub struct Stack<N>(Vec<N>);

impl<N> Default for Stack<N> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<N> Frontier<N> for Stack<N> {
    fn push_sorted(&mut self, batch: &mut Vec<N>) {
        // Reverse so the smallest ends up on top.
        self.0.extend(batch.drain(..).rev());
    }

    #[inline]
    fn pop(&mut self) -> Option<N> {
        self.0.pop()
    }

    fn contains(&self, node: &N) -> bool
    where
        N: PartialEq,
    {
        self.0.contains(node)
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// First-in-first-out frontier.
#[derive(Debug, Clone)]
pub struct Queue<N>(VecDeque<N>);

impl<N> Default for Queue<N> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<N> Frontier<N> for Queue<N> {
    fn push_sorted(&mut self, batch: &mut Vec<N>) {
        self.0.extend(batch.drain(..));
    }

    #[inline]
    fn pop(&mut self) -> Option<N> {
        self.0.pop_front()
    }

    fn contains(&self, node: &N) -> bool
    where
        N: PartialEq,
    {
        self.0.contains(node)
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Lazy, deterministic traversal over a [`Neighborhood`].
///
/// Yields each reachable vertex exactly once. The start vertex is yielded
/// first; an unknown start yields nothing.
pub struct Traversal<'g, G: Neighborhood, F> {
    graph: &'g G,
    frontier: F,
    visited: HashSet<G::Node>,
    /// Last yielded vertex, expanded on the next call to `next`.
    pending: Option<G::Node>,
    batch: Vec<G::Node>,
}

/// Depth-first traversal.
pub type Dfs<'g, G> = Traversal<'g, G, Stack<<G as Neighborhood>::Node>>;

/// Breadth-first traversal.
pub type Bfs<'g, G> = Traversal<'g, G, Queue<<G as Neighborhood>::Node>>;

impl<'g, G, F> Traversal<'g, G, F>
where
    G: Neighborhood,
    F: Frontier<G::Node>,
{
    /// Creates a traversal rooted at `start`.
    pub fn new(graph: &'g G, start: G::Node) -> Self {
        let mut frontier = F::default();
        if graph.contains(&start) {
            frontier.push_sorted(&mut vec![start]);
        }
        Self {
            graph,
            frontier,
            visited: HashSet::new(),
            pending: None,
            batch: Vec::new(),
        }
    }

    fn expand(&mut self, node: &G::Node) {
        self.graph.neighbors_into(node, &mut self.batch);
        let visited = &self.visited;
        self.batch.retain(|n| !visited.contains(n));
        self.batch.sort_unstable();
        self.frontier.push_sorted(&mut self.batch);
    }
}

impl<'g, G, F> Iterator for Traversal<'g, G, F>
where
    G: Neighborhood,
    F: Frontier<G::Node>,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(prev) = self.pending.take() {
            self.expand(&prev);
        }

        loop {
            let node = self.frontier.pop()?;
            if self.visited.insert(node.clone()) {
                self.pending = Some(node.clone());
                return Some(node);
            }
        }
    }
}

/// Collects a traversal, stopping right after `end` is yielded.
///
/// When `end` is `None` or never reached the whole traversal is collected.
pub fn collect_until<N, I>(traversal: I, end: Option<&N>) -> Vec<N>
where
    N: PartialEq,
    I: IntoIterator<Item = N>,
{
    let mut out = Vec::new();
    for node in traversal {
        let reached = end == Some(&node);
        out.push(node);
        if reached {
            break;
        }
    }
    out
}

/// Frontier-membership cycle probe.
///
/// For each root (with fresh state per root) a stack traversal pops a vertex,
/// pushes all of its neighbours if it was not yet visited, and reports a cycle
/// when the popped vertex is still present in the stack afterwards. On
/// undirected adjacency this flags exactly the graphs that contain a cycle;
/// on directed adjacency it is order-sensitive and can disagree with
/// [`has_directed_cycle`].
pub fn frontier_probe_has_cycle<G, R>(graph: &G, roots: R) -> bool
where
    G: Neighborhood,
    R: IntoIterator<Item = G::Node>,
{
    let mut visited = HashSet::new();
    let mut stack = Stack::default();
    let mut batch = Vec::new();

    for root in roots {
        visited.clear();
        stack.clear();
        stack.push_sorted(&mut vec![root]);

        while let Some(node) = stack.pop() {
            if visited.insert(node.clone()) {
                graph.neighbors_into(&node, &mut batch);
                batch.sort_unstable();
                stack.push_sorted(&mut batch);
            }
            if stack.contains(&node) {
                return true;
            }
        }
    }
    false
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    OnPath,
    Done,
}

/// Three-colour directed cycle detection.
///
/// Returns `true` iff following edges from some root reaches a vertex that is
/// still on the current DFS path.
pub fn has_directed_cycle<G, R>(graph: &G, roots: R) -> bool
where
    G: Neighborhood,
    R: IntoIterator<Item = G::Node>,
{
    let mut marks: HashMap<G::Node, Mark> = HashMap::new();
    // Stack of (vertex, neighbours still to explore).
    let mut stack: Vec<(G::Node, Vec<G::Node>)> = Vec::new();

    for root in roots {
        if marks.contains_key(&root) || !graph.contains(&root) {
            continue;
        }
        let mut nbrs = Vec::new();
        graph.neighbors_into(&root, &mut nbrs);
        marks.insert(root.clone(), Mark::OnPath);
        stack.push((root, nbrs));

        loop {
            let step = match stack.last_mut() {
                None => break,
                Some((node, pending)) => pending.pop().ok_or_else(|| node.clone()),
            };

            match step {
                Ok(next) => match marks.get(&next) {
                    Some(Mark::OnPath) => return true,
                    Some(Mark::Done) => {}
                    None => {
                        let mut nbrs = Vec::new();
                        graph.neighbors_into(&next, &mut nbrs);
                        marks.insert(next.clone(), Mark::OnPath);
                        stack.push((next, nbrs));
                    }
                },
                Err(finished) => {
                    marks.insert(finished, Mark::Done);
                    stack.pop();
                }
            }
        }
    }
    false
}

/// Groups the vertices into connected components by flood fill.
///
/// Roots are tried in the given order; each root not yet covered by an
/// earlier component starts a new one. Component members are listed in
/// depth-first order from their root. Meaningful for symmetric adjacency.
pub fn connected_components<G, R>(graph: &G, roots: R) -> Vec<Vec<G::Node>>
where
    G: Neighborhood,
    R: IntoIterator<Item = G::Node>,
{
    let mut covered = HashSet::new();
    let mut components = Vec::new();

    for root in roots {
        if covered.contains(&root) || !graph.contains(&root) {
            continue;
        }
        let component: Vec<_> = Dfs::new(graph, root).collect();
        covered.extend(component.iter().cloned());
        components.push(component);
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain adjacency lists indexed by vertex.
    struct Lists(Vec<Vec<usize>>);

    impl Neighborhood for Lists {
        type Node = usize;

        fn contains(&self, node: &usize) -> bool {
            *node < self.0.len()
        }

        fn neighbors_into(&self, node: &usize, out: &mut Vec<usize>) {
            if let Some(nbrs) = self.0.get(*node) {
                out.extend_from_slice(nbrs);
            }
        }
    }

    #[test]
    fn dfs_expands_smallest_neighbor_first() {
        // Neighbour lists deliberately unsorted.
        let g = Lists(vec![vec![2, 1], vec![3], vec![3], vec![]]);
        let order: Vec<_> = Dfs::new(&g, 0).collect();
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn bfs_visits_level_by_level() {
        let g = Lists(vec![vec![2, 1], vec![3], vec![3], vec![]]);
        let order: Vec<_> = Bfs::new(&g, 0).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn unknown_start_yields_nothing() {
        let g = Lists(vec![vec![]]);
        assert_eq!(Dfs::new(&g, 5).count(), 0);
        assert_eq!(Bfs::new(&g, 5).count(), 0);
    }

    #[test]
    fn collect_until_stops_after_end() {
        let g = Lists(vec![vec![1, 2], vec![], vec![]]);
        assert_eq!(collect_until(Dfs::new(&g, 0), Some(&1)), vec![0, 1]);
        assert_eq!(collect_until(Dfs::new(&g, 0), Some(&9)), vec![0, 1, 2]);
        assert_eq!(collect_until(Dfs::new(&g, 0), None), vec![0, 1, 2]);
    }

    #[test]
    fn directed_cycle_detection() {
        let dag = Lists(vec![vec![1, 2], vec![2], vec![]]);
        assert!(!has_directed_cycle(&dag, 0..3));

        let cyclic = Lists(vec![vec![1], vec![2], vec![0]]);
        assert!(has_directed_cycle(&cyclic, 0..3));
    }

    #[test]
    fn probe_on_symmetric_lists() {
        let path = Lists(vec![vec![1], vec![0, 2], vec![1]]);
        assert!(!frontier_probe_has_cycle(&path, 0..3));

        let triangle = Lists(vec![vec![1, 2], vec![0, 2], vec![0, 1]]);
        assert!(frontier_probe_has_cycle(&triangle, 0..3));
    }

    #[test]
    fn components_cover_every_vertex_once() {
        let g = Lists(vec![vec![1], vec![0], vec![], vec![4], vec![3]]);
        let comps = connected_components(&g, 0..5);
        assert_eq!(comps, vec![vec![0, 1], vec![2], vec![3, 4]]);
    }
}
