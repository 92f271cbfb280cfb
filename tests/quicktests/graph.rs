use pathwork::graph::grid::Grid;
use pathwork::graph::Graph;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::init_tracing;

const NODES: u8 = 8;

fn build(edges: &[(u8, u8)]) -> Graph<u8> {
    let mut graph = Graph::new();
    for &(u, v) in edges {
        graph.add_edge(u % NODES, v % NODES);
    }
    graph
}

/// Every node `hop_distance` can reach from `origin`, with `origin` itself.
fn reachable(graph: &Graph<u8>, origin: u8) -> HashSet<u8> {
    (0..NODES)
        .filter(|node| graph.hop_distance(&origin, node).is_some())
        .chain([origin])
        .collect()
}

#[quickcheck]
fn bfs_reaches_everything_connected(edges: Vec<(u8, u8)>, origin: u8) -> bool {
    let graph = build(&edges);
    let origin = origin % NODES;

    let order = graph.bfs_order(&origin);
    let visited: HashSet<u8> = order.iter().copied().copied().collect();

    order.len() == visited.len() && visited == reachable(&graph, origin)
}

#[quickcheck]
fn bfs_levels_never_decrease(edges: Vec<(u8, u8)>, origin: u8) -> bool {
    let graph = build(&edges);
    let origin = origin % NODES;

    let levels: Vec<_> = graph
        .bfs_order(&origin)
        .into_iter()
        .map(|node| graph.hop_distance(&origin, node))
        .collect();

    levels.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn bfs_within_stops_at_depth(edges: Vec<(u8, u8)>, origin: u8, max_depth: u8) -> bool {
    let graph = build(&edges);
    let origin = origin % NODES;
    let max_depth = usize::from(max_depth % NODES);

    let emitted: HashSet<u8> = graph
        .bfs_within_order(&origin, max_depth)
        .into_iter()
        .copied()
        .collect();
    let expected: HashSet<u8> = reachable(&graph, origin)
        .into_iter()
        .filter(|node| graph.hop_distance(&origin, node) <= Some(max_depth))
        .collect();

    emitted == expected
}

#[quickcheck]
fn dfs_visits_what_bfs_visits(edges: Vec<(u8, u8)>, origin: u8) -> bool {
    init_tracing();
    let graph = build(&edges);
    let origin = origin % NODES;

    let outcome = graph.dfs(&origin);
    let depth_first: HashSet<_> = outcome.order().iter().copied().collect();
    let breadth_first: HashSet<_> = graph.bfs_order(&origin).into_iter().collect();

    depth_first == breadth_first
        && outcome.order().first() == Some(&&origin)
        && outcome
            .order()
            .iter()
            .skip(1)
            .all(|node| outcome.discovered_from(node).is_some())
}

#[quickcheck]
fn forests_never_report_cycles(parents: Vec<u8>) -> bool {
    // Node i + 1 hangs off some node at or below i, so this is always a tree.
    let mut graph = Graph::new();
    for (index, parent) in parents.iter().enumerate().take(usize::from(u8::MAX)) {
        let child = index as u8 + 1;
        graph.add_edge(parent % child, child);
    }

    !graph.dfs(&0).has_cycle()
}

#[quickcheck]
fn components_partition_the_nodes(edges: Vec<(u8, u8)>) -> bool {
    let graph = build(&edges);

    let mut seen = HashSet::new();
    let mut components = 0;
    for node in 0..NODES {
        if graph.contains_node(&node) && seen.insert(node) {
            components += 1;
            seen.extend(reachable(&graph, node));
        }
    }

    graph.component_count() == components
}

#[quickcheck]
fn every_edge_is_counted(edges: Vec<(u8, u8)>) -> bool {
    let graph = build(&edges);

    let in_degrees: usize = (0..NODES).map(|node| graph.in_degree(&node)).sum();
    let degrees: usize = (0..NODES).map(|node| graph.neighbors(&node).len()).sum();

    graph.edge_count() == edges.len() && in_degrees == edges.len() && degrees == 2 * edges.len()
}

#[quickcheck]
fn grid_regions_are_graph_components(cells: Vec<bool>) -> bool {
    const COLUMNS: usize = 5;
    let rows: Vec<&[bool]> = cells.chunks_exact(COLUMNS).collect();
    let mut grid = match Grid::from_rows(rows.iter().copied()) {
        Ok(grid) => grid,
        Err(_) => return false,
    };

    // Join every active cell to itself and to its active neighbors right and below.
    let mut graph = Graph::new();
    for (row, cells) in rows.iter().enumerate() {
        for (column, active) in cells.iter().enumerate() {
            if !*active {
                continue;
            }
            graph.add_edge((row, column), (row, column));
            if grid.is_active(row, column + 1) {
                graph.add_edge((row, column), (row, column + 1));
            }
            if grid.is_active(row + 1, column) {
                graph.add_edge((row, column), (row + 1, column));
            }
        }
    }

    grid.count_connected_regions() == graph.component_count() && grid.active_count() == 0
}
