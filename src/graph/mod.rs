//! An undirected, unweighted graph stored as an adjacency list, with breadth-first and
//! depth-first traversals.
//!
//! Edges are stored in both directions and in insertion order. Adding the same edge twice
//! stores it twice, which traversals tolerate.
//!
//! # Examples
//!
//! ```
//! use pathwork::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge('A', 'B');
//! graph.add_edge('A', 'C');
//! graph.add_edge('B', 'E');
//! graph.add_edge('B', 'D');
//!
//! // Level by level.
//! assert_eq!(graph.bfs_order(&'A'), vec![&'A', &'B', &'C', &'E', &'D']);
//!
//! // Only the origin and its direct neighbors.
//! assert_eq!(graph.bfs_within_order(&'A', 1), vec![&'A', &'B', &'C']);
//!
//! // A stack visits the most recently discovered neighbor first.
//! let outcome = graph.dfs(&'A');
//! assert_eq!(outcome.order(), &[&'A', &'C', &'B', &'D', &'E']);
//! assert!(!outcome.has_cycle());
//! ```

pub mod grid;

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// An undirected graph mapping every node to the list of its neighbors.
#[derive(Clone, Debug)]
pub struct Graph<K> {
    adjacency: HashMap<K, Vec<K>>,
    /// How many times each node was named as the second endpoint of an edge.
    in_degree: HashMap<K, usize>,
    edge_count: usize,
}

impl<K> Default for Graph<K> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            in_degree: HashMap::new(),
            edge_count: 0,
        }
    }
}

/// What a depth-first traversal found: the order nodes were visited in and every node that was
/// reached a second time before being visited.
#[derive(Clone, Debug)]
pub struct DfsOutcome<'a, K> {
    order: Vec<&'a K>,
    rediscovered: Vec<&'a K>,
    discovered_from: HashMap<&'a K, &'a K>,
}

impl<'a, K> DfsOutcome<'a, K>
where
    K: Eq + Hash,
{
    /// Nodes in the order they were visited.
    pub fn order(&self) -> &[&'a K] {
        &self.order
    }

    /// Nodes that were found from a second node while still waiting to be visited, in the
    /// order that happened. Each one closes a cycle in an undirected graph.
    pub fn rediscovered(&self) -> &[&'a K] {
        &self.rediscovered
    }

    /// Whether any node was reached through two different paths.
    pub fn has_cycle(&self) -> bool {
        !self.rediscovered.is_empty()
    }

    /// The node that most recently discovered `key`. The origin and unreached nodes have none.
    pub fn discovered_from(&self, key: &K) -> Option<&'a K> {
        self.discovered_from.get(key).copied()
    }
}

impl<K> Graph<K>
where
    K: Eq + Hash + Clone,
{
    /// Generates a new, empty `Graph`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates an empty `Graph` with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(nodes),
            in_degree: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Connects `u` and `v`, creating either node if it doesn't exist yet.
    pub fn add_edge(&mut self, u: K, v: K) {
        self.adjacency.entry(u.clone()).or_default().push(v.clone());
        self.adjacency.entry(v.clone()).or_default().push(u);
        *self.in_degree.entry(v).or_default() += 1;
        self.edge_count += 1;
    }

    /// The nodes directly connected to `key`, in the order their edges were added. Unknown
    /// nodes have no neighbors.
    pub fn neighbors(&self, key: &K) -> &[K] {
        self.adjacency.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `key` is the endpoint of any edge.
    pub fn contains_node(&self, key: &K) -> bool {
        self.adjacency.contains_key(key)
    }

    /// Every node, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> {
        self.adjacency.keys()
    }

    /// The number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// The number of edges added, counting repeated edges each time.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// How many edges named `key` as their second endpoint.
    pub fn in_degree(&self, key: &K) -> usize {
        self.in_degree.get(key).copied().unwrap_or(0)
    }

    /// Visits every node reachable from `origin` in breadth-first order, starting with `origin`
    /// itself.
    pub fn bfs<'a>(&'a self, origin: &'a K, mut visit: impl FnMut(&'a K)) {
        let mut queue = VecDeque::from([origin]);
        let mut visited = HashSet::new();

        // A node can be queued once per neighbor that saw it unvisited. Only the first copy to
        // come out of the queue is processed.
        while let Some(node) = queue.pop_front() {
            if !visited.insert(node) {
                continue;
            }

            visit(node);
            queue.extend(
                self.neighbors(node)
                    .iter()
                    .filter(|neighbor| !visited.contains(neighbor)),
            );
        }
    }

    /// Collects the nodes visited by [`bfs`][Graph::bfs].
    pub fn bfs_order<'a>(&'a self, origin: &'a K) -> Vec<&'a K> {
        let mut order = Vec::new();
        self.bfs(origin, |node| order.push(node));
        order
    }

    /// Like [`bfs`][Graph::bfs] but stops once it reaches nodes more than `max_depth` edges
    /// away from `origin`. A node's depth is fixed by the neighbor that first discovers it.
    pub fn bfs_within<'a>(
        &'a self,
        origin: &'a K,
        max_depth: usize,
        mut visit: impl FnMut(&'a K),
    ) {
        let mut queue = VecDeque::from([(origin, 0)]);
        let mut visited = HashSet::new();
        let mut depths = HashMap::from([(origin, 0)]);

        while let Some((node, depth)) = queue.pop_front() {
            if visited.contains(node) {
                continue;
            }
            // Depths only grow along the queue so nothing after this is shallow enough.
            if depth > max_depth {
                break;
            }

            visited.insert(node);
            visit(node);

            for neighbor in self.neighbors(node) {
                if !visited.contains(neighbor) {
                    let recorded = *depths.entry(neighbor).or_insert(depth + 1);
                    queue.push_back((neighbor, recorded));
                }
            }
        }
    }

    /// Collects the nodes visited by [`bfs_within`][Graph::bfs_within].
    pub fn bfs_within_order<'a>(&'a self, origin: &'a K, max_depth: usize) -> Vec<&'a K> {
        let mut order = Vec::new();
        self.bfs_within(origin, max_depth, |node| order.push(node));
        order
    }

    /// The fewest edges on any path between `from` and `to`, or `None` if `to` can't be reached.
    pub fn hop_distance(&self, from: &K, to: &K) -> Option<usize> {
        if from == to {
            return Some(0);
        }

        let mut queue = VecDeque::from([from]);
        let mut depths = HashMap::from([(from, 0)]);
        while let Some(node) = queue.pop_front() {
            let depth = depths.get(node).copied().unwrap_or(0);
            for neighbor in self.neighbors(node) {
                if depths.contains_key(neighbor) {
                    continue;
                }
                if neighbor == to {
                    return Some(depth + 1);
                }
                depths.insert(neighbor, depth + 1);
                queue.push_back(neighbor);
            }
        }

        None
    }

    /// Visits every node reachable from `origin` depth-first using an explicit stack.
    ///
    /// Each visited node pushes all of its unvisited neighbors, so siblings come off the stack
    /// in reverse insertion order. A neighbor that is already waiting on the stack, having been
    /// discovered from another node, is recorded in
    /// [`rediscovered`][DfsOutcome::rediscovered] before its discoverer is overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwork::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge('A', 'B');
    /// graph.add_edge('C', 'A');
    /// graph.add_edge('B', 'D');
    /// graph.add_edge('C', 'E');
    /// graph.add_edge('F', 'C');
    /// graph.add_edge('E', 'F');
    ///
    /// let outcome = graph.dfs(&'A');
    /// assert_eq!(outcome.order(), &[&'A', &'C', &'F', &'E', &'B', &'D']);
    /// assert_eq!(outcome.rediscovered(), &[&'E']);
    /// assert_eq!(outcome.discovered_from(&'E'), Some(&'F'));
    /// ```
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn dfs<'a>(&'a self, origin: &'a K) -> DfsOutcome<'a, K> {
        let mut stack = vec![origin];
        let mut visited = HashSet::new();
        let mut outcome = DfsOutcome {
            order: Vec::new(),
            rediscovered: Vec::new(),
            discovered_from: HashMap::new(),
        };

        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            outcome.order.push(node);

            for neighbor in self.neighbors(node) {
                if visited.contains(neighbor) {
                    continue;
                }
                if outcome.discovered_from.insert(neighbor, node).is_some() {
                    tracing::debug!(
                        visited = outcome.order.len(),
                        "node reached through a second path"
                    );
                    outcome.rediscovered.push(neighbor);
                }
                stack.push(neighbor);
            }
        }

        outcome
    }

    /// The number of connected components.
    pub fn component_count(&self) -> usize {
        let mut seen = HashSet::new();
        let mut components = 0;
        for node in self.adjacency.keys() {
            if seen.contains(node) {
                continue;
            }

            components += 1;
            self.bfs(node, |reached| {
                seen.insert(reached);
            });
        }

        components
    }
}
