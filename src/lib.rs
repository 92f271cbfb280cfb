//! This crate exposes a handful of classic pointer and graph data structures
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores keys in `Node`s such that, for every `Node`,
//! all keys in its left subtree are smaller than its own key and all keys in
//! its right subtree are larger. [`tree::Tree`] keeps no duplicates and never
//! rebalances, so its height depends on the order keys arrive in.
//!
//! ## Graphs
//!
//! All graphs here are undirected and are built by adding edges. A node exists
//! as soon as it is the endpoint of an edge.
//!
//! - [`graph::Graph`] is an adjacency list supporting breadth-first and
//!   depth-first traversal. [`graph::grid::Grid`] counts connected regions of a
//!   cell grid with the same flood fill idea.
//! - [`weighted::WeightedGraph`] computes single-source shortest paths with
//!   Dijkstra's algorithm.
//! - [`edge_set::EdgeSetGraph`] keeps a plain edge list and a
//!   [`disjoint_set::DisjointSet`] and computes minimum spanning trees with
//!   Kruskal's algorithm.
//!
//! ```
//! use pathwork::edge_set::EdgeSetGraph;
//! use pathwork::weighted::{Distance, WeightedGraph};
//!
//! let mut roads = WeightedGraph::new();
//! roads.add_edge('A', 'B', 5);
//! roads.add_edge('B', 'C', 2);
//! roads.add_edge('A', 'C', 9);
//!
//! let paths = roads.dijkstra(&'A');
//! assert_eq!(paths.distance(&'C'), Some(Distance::Finite(7)));
//! assert_eq!(paths.path_to(&'C'), Some(vec!['A', 'B', 'C']));
//!
//! let mut cables = EdgeSetGraph::new();
//! cables.add_edge('A', 'B', 5);
//! cables.add_edge('B', 'C', 2);
//! cables.add_edge('A', 'C', 9);
//!
//! let tree = cables.minimum_spanning_tree();
//! assert_eq!(tree.len(), 2);
//! assert_eq!(pathwork::edge_set::total_weight(&tree), 7);
//! ```
//!
//! Every structure reports what it is doing through [`tracing`] events; install
//! a subscriber to see them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod disjoint_set;
pub mod edge_set;
pub mod graph;
pub mod tree;
pub mod weighted;

mod util;
