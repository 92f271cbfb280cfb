//! An undirected graph with non-negative edge weights and single source shortest paths.
//!
//! # Examples
//!
//! ```
//! use pathwork::weighted::{Distance, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge("home", "shop", 4);
//! graph.add_edge("shop", "park", 3);
//! graph.add_edge("home", "park", 10);
//! graph.add_edge("lake", "hill", 1);
//!
//! let paths = graph.dijkstra(&"home");
//! assert_eq!(paths.distance(&"park"), Some(Distance::Finite(7)));
//! assert_eq!(paths.path_to(&"park"), Some(vec!["home", "shop", "park"]));
//!
//! // Known but unreachable.
//! assert_eq!(paths.distance(&"lake"), Some(Distance::Infinite));
//! assert_eq!(paths.path_to(&"lake"), None);
//!
//! // Never heard of it.
//! assert_eq!(paths.distance(&"moon"), None);
//! ```

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::hash::Hash;

/// How far a node is from the origin of a shortest path search.
///
/// Every finite distance is less than [`Distance::Infinite`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// The summed weight of the cheapest path.
    Finite(u64),
    /// No path exists.
    Infinite,
}

impl Distance {
    /// The distance as a number, if there is one.
    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(distance) => Some(distance),
            Distance::Infinite => None,
        }
    }

    /// Whether a path exists.
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(distance) => write!(f, "{}", distance),
            Distance::Infinite => f.write_str("infinite"),
        }
    }
}

/// An undirected graph whose edges carry a `u32` weight.
#[derive(Clone, Debug)]
pub struct WeightedGraph<K> {
    adjacency: HashMap<K, HashMap<K, u32>>,
}

impl<K> Default for WeightedGraph<K> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<K> WeightedGraph<K>
where
    K: Eq + Hash + Clone,
{
    /// Generates a new, empty `WeightedGraph`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates an empty `WeightedGraph` with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Joins `a` and `b` with an edge of the given weight, replacing any edge already
    /// between them.
    pub fn add_edge(&mut self, a: K, b: K, weight: u32) {
        self.adjacency
            .entry(b.clone())
            .or_default()
            .insert(a.clone(), weight);
        self.adjacency.entry(a).or_default().insert(b, weight);
    }

    /// The weight of the edge between `a` and `b`.
    pub fn weight(&self, a: &K, b: &K) -> Option<u32> {
        self.adjacency.get(a)?.get(b).copied()
    }

    /// The nodes joined to `node` with the weight of each edge, in no particular order.
    pub fn neighbors<'a>(&'a self, node: &K) -> impl Iterator<Item = (&'a K, u32)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(neighbor, weight)| (neighbor, *weight)))
    }

    /// Whether `node` is an endpoint of some edge.
    pub fn contains_node(&self, node: &K) -> bool {
        self.adjacency.contains_key(node)
    }

    /// The number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Finds the cheapest path from `origin` to every other node.
    ///
    /// Nodes sit in a min-priority queue keyed by their tentative distance. Improving a node's
    /// distance pushes a fresh entry rather than updating the old one, so a popped entry whose
    /// cost is worse than the node's recorded distance is out of date and gets skipped.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn dijkstra(&self, origin: &K) -> ShortestPaths<K> {
        let mut distances: HashMap<K, Distance> = self
            .adjacency
            .keys()
            .map(|node| (node.clone(), Distance::Infinite))
            .collect();
        distances.insert(origin.clone(), Distance::Finite(0));

        let mut predecessors = HashMap::new();
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            node: origin.clone(),
            cost: 0,
        }));

        let mut settled = 0_usize;
        let mut stale = 0_usize;
        while let Some(Reverse(HeapEntry { node, cost })) = heap.pop() {
            let best = distances.get(&node).copied().unwrap_or(Distance::Infinite);
            if Distance::Finite(cost) > best {
                stale += 1;
                tracing::trace!(cost, %best, "skipping stale entry");
                continue;
            }
            settled += 1;

            for (neighbor, weight) in self.neighbors(&node) {
                let candidate = Distance::Finite(cost + u64::from(weight));
                let current = distances.get(neighbor).copied().unwrap_or(Distance::Infinite);
                if candidate < current {
                    distances.insert(neighbor.clone(), candidate);
                    predecessors.insert(neighbor.clone(), node.clone());
                    heap.push(Reverse(HeapEntry {
                        node: neighbor.clone(),
                        cost: cost + u64::from(weight),
                    }));
                }
            }
        }

        tracing::debug!(settled, stale, "shortest paths found");
        ShortestPaths {
            origin: origin.clone(),
            distances,
            predecessors,
        }
    }
}

impl<K> FromIterator<(K, K, u32)> for WeightedGraph<K>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, K, u32)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (a, b, weight) in iter {
            graph.add_edge(a, b, weight);
        }
        graph
    }
}

/// A queue entry, ordered by cost alone.
#[derive(Debug)]
struct HeapEntry<K> {
    node: K,
    cost: u64,
}

impl<K> PartialEq for HeapEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<K> Eq for HeapEntry<K> {}

impl<K> PartialOrd for HeapEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for HeapEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

/// The result of [`WeightedGraph::dijkstra`].
#[derive(Clone, Debug)]
pub struct ShortestPaths<K> {
    origin: K,
    distances: HashMap<K, Distance>,
    predecessors: HashMap<K, K>,
}

impl<K> ShortestPaths<K>
where
    K: Eq + Hash + Clone,
{
    /// Where the search started.
    pub fn origin(&self) -> &K {
        &self.origin
    }

    /// The distance from the origin to `node`, or `None` if the graph doesn't have it.
    pub fn distance(&self, node: &K) -> Option<Distance> {
        self.distances.get(node).copied()
    }

    /// The node just before `node` on its cheapest path. The origin and unreachable nodes
    /// have none.
    pub fn predecessor(&self, node: &K) -> Option<&K> {
        self.predecessors.get(node)
    }

    /// Every node's distance.
    pub fn distances(&self) -> &HashMap<K, Distance> {
        &self.distances
    }

    /// Every reached node's predecessor.
    pub fn predecessors(&self) -> &HashMap<K, K> {
        &self.predecessors
    }

    /// The nodes along the cheapest path from the origin to `target`, both ends included.
    pub fn path_to(&self, target: &K) -> Option<Vec<K>> {
        if !self.distance(target)?.is_finite() {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous.clone());
            current = previous;
        }

        path.reverse();
        Some(path)
    }
}
