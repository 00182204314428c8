// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::rc::Rc;

use crate::collections::{Queue, QueueIter};
use crate::error::Error;
use crate::graph::{Edge, EdgeWeightedGraph};
use crate::sort;
use crate::unionfind::WeightedQuickUnion;

/// A minimum spanning forest of an [`EdgeWeightedGraph`].
///
/// Kruskal's algorithm: edges are taken in weight order and added to the
/// forest unless a [`WeightedQuickUnion`] cycle check rejects them. For a
/// connected graph with distinct weights the forest is the unique minimum
/// spanning tree.
#[derive(Debug, Clone)]
pub struct KruskalMst {
    weight: u128,
    mst: Queue<Rc<Edge>>,
}

impl KruskalMst {
    /// Compute a minimum spanning forest of `graph`
    pub fn new(graph: &EdgeWeightedGraph) -> Result<Self, Error> {
        let mut edges: Vec<Rc<Edge>> =
            graph.all_edges().iter().cloned().collect();
        sort::sort(&mut edges);

        let mut uf = WeightedQuickUnion::new(graph.vertices());
        let mut mst = Queue::new();
        let mut weight: u128 = 0;

        for edge in edges {
            let v = edge.either();
            let w = edge.other(v)?;
            if !uf.connected(v, w)? {
                uf.union(v, w)?;
                weight = weight.saturating_add(edge.weight());
                mst.enqueue(edge);
            }
        }

        Ok(KruskalMst { weight, mst })
    }

    /// The total weight of the spanning forest
    pub fn weight(&self) -> u128 {
        self.weight
    }

    /// The number of edges in the spanning forest
    pub fn len(&self) -> usize {
        self.mst.len()
    }

    /// Whether the forest holds no edges
    pub fn is_empty(&self) -> bool {
        self.mst.is_empty()
    }

    /// Iterate over the edges of the forest in the order they were taken
    pub fn edges(&self) -> QueueIter<Rc<Edge>> {
        self.mst.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::KruskalMst;
    use crate::error::Error;
    use crate::graph::{Edge, EdgeWeightedGraph};

    #[test]
    fn skips_cycle_edges() -> Result<(), Error> {
        let mut graph = EdgeWeightedGraph::new(3);
        graph.add_edge(Edge::new(0, 1, 1))?;
        graph.add_edge(Edge::new(1, 2, 2))?;
        // heaviest edge closes a cycle and must not be taken
        graph.add_edge(Edge::new(2, 0, 3))?;

        let mst = KruskalMst::new(&graph)?;
        assert_eq!(mst.len(), 2);
        assert_eq!(mst.weight(), 3);
        Ok(())
    }

    #[test]
    fn spans_disconnected_components() -> Result<(), Error> {
        let mut graph = EdgeWeightedGraph::new(4);
        graph.add_edge(Edge::new(0, 1, 1))?;
        graph.add_edge(Edge::new(2, 3, 5))?;

        let mst = KruskalMst::new(&graph)?;
        assert_eq!(mst.len(), 2);
        assert_eq!(mst.weight(), 6);
        Ok(())
    }

    #[test]
    fn empty_graph() -> Result<(), Error> {
        let graph = EdgeWeightedGraph::new(0);

        let mst = KruskalMst::new(&graph)?;
        assert!(mst.is_empty());
        assert_eq!(mst.weight(), 0);
        Ok(())
    }
}
