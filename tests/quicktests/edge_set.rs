use pathwork::disjoint_set::Compression;
use pathwork::edge_set::{total_weight, EdgeSetGraph};
use quickcheck_macros::quickcheck;

use crate::init_tracing;

const NODES: u8 = 10;

fn build(edges: &[(u8, u8, i8)], compression: Compression) -> EdgeSetGraph<u8> {
    let mut graph = EdgeSetGraph::with_compression(compression);
    graph.extend(
        edges
            .iter()
            .map(|&(a, b, weight)| (a % NODES, b % NODES, i64::from(weight))),
    );
    graph
}

#[quickcheck]
fn insertion_order_does_not_change_the_weight(edges: Vec<(u8, u8, i8)>) -> bool {
    init_tracing();
    let mut reversed = edges.clone();
    reversed.reverse();

    let forward = build(&edges, Compression::Disabled).minimum_spanning_tree();
    let backward = build(&reversed, Compression::Disabled).minimum_spanning_tree();

    total_weight(&forward) == total_weight(&backward) && forward.len() == backward.len()
}

#[quickcheck]
fn compression_does_not_change_the_tree(edges: Vec<(u8, u8, i8)>) -> bool {
    let plain = build(&edges, Compression::Disabled).minimum_spanning_tree();
    let halving = build(&edges, Compression::PathHalving).minimum_spanning_tree();

    plain == halving
}

#[quickcheck]
fn tree_edges_come_from_the_graph_and_skip_loops(edges: Vec<(u8, u8, i8)>) -> bool {
    let mut graph = build(&edges, Compression::Disabled);
    let tree = graph.minimum_spanning_tree();

    tree.iter().all(|edge| edge.a() != edge.b() && graph.edges().contains(edge))
}

#[quickcheck]
fn lightest_edge_is_always_taken(edges: Vec<(u8, u8, i8)>) -> bool {
    let mut graph = build(&edges, Compression::Disabled);
    let lightest = graph
        .edges()
        .iter()
        .filter(|edge| edge.a() != edge.b())
        .map(|edge| edge.weight())
        .min();
    let tree = graph.minimum_spanning_tree();

    tree.iter().map(|edge| edge.weight()).min() == lightest
}

#[quickcheck]
fn partition_answers_connectivity(edges: Vec<(u8, u8, i8)>) -> bool {
    let mut graph = build(&edges, Compression::PathHalving);
    let tree = graph.minimum_spanning_tree();

    // Re-joining along the tree alone gives the same partition.
    let mut replay = EdgeSetGraph::new();
    for edge in &tree {
        replay.add_edge(*edge.a(), *edge.b(), edge.weight());
    }
    replay.minimum_spanning_tree();

    tree.iter().all(|edge| graph.same_set(edge.a(), edge.b()))
        && replay.sets().set_count() + graph.node_count() - replay.node_count()
            == graph.sets().set_count()
}
