// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use rudiments::{
    DepthFirstSearch, DijkstraShortestPaths, Edge, EdgeWeightedGraph, Error,
    Graph, KruskalMst,
};

// 7 vertices, vertex 6 isolated
fn weighted_sample() -> Result<EdgeWeightedGraph, Error> {
    let mut graph = EdgeWeightedGraph::new(7);
    for (v, w, weight) in [
        (0, 1, 7),
        (0, 2, 9),
        (0, 5, 14),
        (1, 2, 10),
        (1, 3, 15),
        (2, 3, 11),
        (2, 5, 2),
        (3, 4, 6),
        (4, 5, 9),
    ] {
        graph.add_edge(Edge::new(v, w, weight))?;
    }
    Ok(graph)
}

#[test]
fn dijkstra_distances() -> Result<(), Error> {
    let graph = weighted_sample()?;
    let paths = DijkstraShortestPaths::new(&graph, 0)?;

    let expected = [0, 7, 9, 20, 20, 11];
    for (v, want) in expected.iter().enumerate() {
        assert_eq!(paths.dist_to(v)?, *want, "distance to {}", v);
        assert!(paths.has_path_to(v)?);
    }

    assert!(!paths.has_path_to(6)?);
    assert_eq!(paths.dist_to(6)?, u128::MAX);
    assert!(paths.path_to(6)?.is_none());
    Ok(())
}

#[test]
fn dijkstra_path_walks_from_source() -> Result<(), Error> {
    let graph = weighted_sample()?;
    let paths = DijkstraShortestPaths::new(&graph, 0)?;

    let mut path = paths.path_to(4)?.expect("vertex 4 is reachable");

    let mut at = 0;
    let mut total = 0u128;
    while let Some(edge) = path.pop() {
        total += edge.weight();
        at = edge.other(at)?;
    }

    assert_eq!(at, 4);
    assert_eq!(total, paths.dist_to(4)?);
    Ok(())
}

#[test]
fn kruskal_finds_the_unique_mst() -> Result<(), Error> {
    // Sedgewick's tinyEWG with weights scaled to integers
    let mut graph = EdgeWeightedGraph::new(8);
    for (v, w, weight) in [
        (4, 5, 35),
        (4, 7, 37),
        (5, 7, 28),
        (0, 7, 16),
        (1, 5, 32),
        (0, 4, 38),
        (2, 3, 17),
        (1, 7, 19),
        (0, 2, 26),
        (1, 2, 36),
        (1, 3, 29),
        (2, 7, 34),
        (6, 2, 40),
        (3, 6, 52),
        (6, 0, 58),
        (6, 4, 93),
    ] {
        graph.add_edge(Edge::new(v, w, weight))?;
    }

    let mst = KruskalMst::new(&graph)?;

    assert_eq!(mst.weight(), 181);
    assert_eq!(mst.len(), 7);

    let mut weights: Vec<u128> = mst.edges().map(|edge| edge.weight()).collect();
    weights.sort_unstable();
    assert_eq!(weights, vec![16, 17, 19, 26, 28, 35, 40]);
    Ok(())
}

#[test]
fn mst_edges_connect_every_vertex() -> Result<(), Error> {
    let graph = weighted_sample()?;
    let mst = KruskalMst::new(&graph)?;

    // vertex 6 is isolated, so the forest spans the other six vertices
    assert_eq!(mst.len(), 5);

    let mut skeleton = Graph::new(graph.vertices());
    for edge in mst.edges() {
        let v = edge.either();
        skeleton.add_edge(v, edge.other(v)?)?;
    }

    let search = DepthFirstSearch::new(&skeleton, 0)?;
    for v in 0..6 {
        assert!(search.marked(v)?, "vertex {} not spanned", v);
    }
    assert!(!search.marked(6)?);
    Ok(())
}

#[test]
fn dfs_reaches_only_the_component() -> Result<(), Error> {
    let mut graph = Graph::new(13);
    // Sedgewick's tinyG
    for (v, w) in [
        (0, 5),
        (4, 3),
        (0, 1),
        (9, 12),
        (6, 4),
        (5, 4),
        (0, 2),
        (11, 12),
        (9, 10),
        (0, 6),
        (7, 8),
        (9, 11),
        (5, 3),
    ] {
        graph.add_edge(v, w)?;
    }

    let search = DepthFirstSearch::new(&graph, 0)?;
    for v in [0, 1, 2, 3, 4, 5, 6] {
        assert!(search.marked(v)?);
    }
    for v in [7, 8, 9, 10, 11, 12] {
        assert!(!search.marked(v)?);
    }
    assert_eq!(search.count(), 7);
    Ok(())
}
