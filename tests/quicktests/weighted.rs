use pathwork::weighted::{Distance, WeightedGraph};
use quickcheck_macros::quickcheck;

use crate::init_tracing;

const NODES: u8 = 8;

fn build(edges: &[(u8, u8, u16)]) -> WeightedGraph<u8> {
    edges
        .iter()
        .map(|&(a, b, weight)| (a % NODES, b % NODES, u32::from(weight)))
        .collect()
}

#[quickcheck]
fn no_edge_can_shorten_a_path(edges: Vec<(u8, u8, u16)>, origin: u8) -> bool {
    init_tracing();
    let graph = build(&edges);
    let paths = graph.dijkstra(&(origin % NODES));

    (0..NODES).all(|node| {
        let from = match paths.distance(&node) {
            Some(Distance::Finite(distance)) => distance,
            _ => return true,
        };
        graph.neighbors(&node).all(|(neighbor, weight)| {
            paths.distance(neighbor) <= Some(Distance::Finite(from + u64::from(weight)))
        })
    })
}

#[quickcheck]
fn distances_are_symmetric(edges: Vec<(u8, u8, u16)>, a: u8, b: u8) -> bool {
    let graph = build(&edges);
    let (a, b) = (a % NODES, b % NODES);
    if !graph.contains_node(&a) || !graph.contains_node(&b) {
        return true;
    }

    graph.dijkstra(&a).distance(&b) == graph.dijkstra(&b).distance(&a)
}

#[quickcheck]
fn predecessors_lead_home(edges: Vec<(u8, u8, u16)>, origin: u8) -> bool {
    let graph = build(&edges);
    let origin = origin % NODES;
    let paths = graph.dijkstra(&origin);

    paths.predecessors().iter().all(|(node, previous)| {
        let through = paths.distance(previous).and_then(Distance::finite);
        let weight = graph.weight(previous, node).map(u64::from);
        match (through, weight, paths.distance(node)) {
            (Some(through), Some(weight), Some(Distance::Finite(distance))) => {
                through + weight == distance
            }
            _ => false,
        }
    }) && paths.predecessor(&origin).is_none()
}
