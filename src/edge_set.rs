//! An undirected graph kept as a flat list of weighted edges, with a minimum spanning tree.
//!
//! The graph owns a [`DisjointSet`] over its nodes. Building the spanning tree rewrites that
//! partition so that, afterwards, two nodes share a set exactly when they are connected.
//!
//! # Examples
//!
//! ```
//! use pathwork::edge_set::{total_weight, EdgeSetGraph};
//!
//! let mut graph = EdgeSetGraph::new();
//! graph.add_edge('A', 'B', 5);
//! graph.add_edge('A', 'C', 7);
//! graph.add_edge('B', 'C', 9);
//! graph.add_edge('X', 'Y', 1);
//!
//! let forest = graph.minimum_spanning_tree();
//! assert_eq!(forest.len(), 3);
//! assert_eq!(total_weight(&forest), 13);
//!
//! assert_eq!(graph.find(&'C'), graph.find(&'A'));
//! assert_ne!(graph.find(&'X'), graph.find(&'A'));
//! ```

use std::hash::Hash;

use crate::disjoint_set::{Compression, DisjointSet};

/// An undirected, weighted edge. Which endpoint is `a` and which is `b` carries no meaning.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge<K> {
    a: K,
    b: K,
    weight: i64,
}

impl<K> Edge<K> {
    /// Generates a new `Edge`.
    pub fn new(a: K, b: K, weight: i64) -> Self {
        Self { a, b, weight }
    }

    /// The first endpoint.
    pub fn a(&self) -> &K {
        &self.a
    }

    /// The second endpoint.
    pub fn b(&self) -> &K {
        &self.b
    }

    /// The weight.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Both endpoints.
    pub fn endpoints(&self) -> (&K, &K) {
        (&self.a, &self.b)
    }
}

/// Sums the weights of `edges`.
pub fn total_weight<K>(edges: &[Edge<K>]) -> i64 {
    edges.iter().map(Edge::weight).sum()
}

/// A graph stored as its list of edges.
#[derive(Clone, Debug)]
pub struct EdgeSetGraph<K> {
    edges: Vec<Edge<K>>,
    sets: DisjointSet<K>,
}

impl<K> Default for EdgeSetGraph<K> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            sets: DisjointSet::default(),
        }
    }
}

impl<K> EdgeSetGraph<K>
where
    K: Eq + Hash + Clone,
{
    /// Generates a new, empty `EdgeSetGraph`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates an empty `EdgeSetGraph` whose partition uses the given compression while the
    /// spanning tree is built.
    pub fn with_compression(compression: Compression) -> Self {
        Self {
            edges: Vec::new(),
            sets: DisjointSet::with_compression(compression),
        }
    }

    /// Appends an edge. Endpoints the graph hasn't seen become sets of their own; known
    /// endpoints keep whatever set they are in.
    pub fn add_edge(&mut self, a: K, b: K, weight: i64) {
        self.sets.make_set(a.clone());
        self.sets.make_set(b.clone());
        self.edges.push(Edge::new(a, b, weight));
    }

    /// The edges, in insertion order until a spanning tree is built and in ascending weight
    /// order after.
    pub fn edges(&self) -> &[Edge<K>] {
        &self.edges
    }

    /// The number of distinct endpoints.
    pub fn node_count(&self) -> usize {
        self.sets.len()
    }

    /// The number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The representative of the set containing `node`, or `None` for an unknown node.
    pub fn find(&self, node: &K) -> Option<&K> {
        self.sets.find(node)
    }

    /// Merges the sets containing `a` and `b`. See [`DisjointSet::union`].
    pub fn union(&mut self, a: &K, b: &K) -> bool {
        self.sets.union(a, b)
    }

    /// Whether `a` and `b` are known and in the same set.
    pub fn same_set(&self, a: &K, b: &K) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// The partition of the nodes.
    pub fn sets(&self) -> &DisjointSet<K> {
        &self.sets
    }

    /// Builds a minimum spanning forest with Kruskal's algorithm: one tree per connected
    /// component.
    ///
    /// Every node starts in a set of its own. Edges are taken cheapest first, ties in the
    /// order they were added, and each one joining two different sets is kept. The partition
    /// is left describing the connected components.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn minimum_spanning_tree(&mut self) -> Vec<Edge<K>> {
        self.sets.reset();
        self.edges.sort_by_key(Edge::weight);

        let mut tree = Vec::with_capacity(self.sets.len().saturating_sub(1));
        let mut rejected = 0_usize;
        for edge in &self.edges {
            if self.sets.union(&edge.a, &edge.b) {
                tree.push(edge.clone());
            } else {
                rejected += 1;
                tracing::trace!(weight = edge.weight, "edge closes a cycle");
            }
        }

        tracing::debug!(
            accepted = tree.len(),
            rejected,
            total_weight = total_weight(&tree),
            "spanning tree built"
        );
        tree
    }
}

impl<K> Extend<(K, K, i64)> for EdgeSetGraph<K>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (K, K, i64)>>(&mut self, iter: I) {
        for (a, b, weight) in iter {
            self.add_edge(a, b, weight);
        }
    }
}

impl<K> FromIterator<(K, K, i64)> for EdgeSetGraph<K>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, K, i64)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
