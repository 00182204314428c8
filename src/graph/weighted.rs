// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::rc::Rc;

use crate::collections::{Bag, BagIter};
use crate::error::Error;
use crate::graph::Edge;

/// An undirected graph whose edges carry weights.
///
/// Every [`Edge`] is shared between the adjacency bags of its two
/// endpoints through an [`Rc`], so the graph stores each edge once.
///
/// # Examples
///
/// ```
/// use rudiments::{Edge, EdgeWeightedGraph};
///
/// # fn main() -> Result<(), rudiments::Error> {
/// let mut graph = EdgeWeightedGraph::new(3);
/// graph.add_edge(Edge::new(0, 1, 5))?;
/// graph.add_edge(Edge::new(1, 2, 3))?;
///
/// assert_eq!(graph.degree(1)?, 2);
/// assert_eq!(graph.all_edges().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EdgeWeightedGraph {
    vertices: usize,
    edges: usize,
    adj: Vec<Bag<Rc<Edge>>>,
}

impl EdgeWeightedGraph {
    /// Create a graph of `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        EdgeWeightedGraph {
            vertices,
            edges: 0,
            adj: (0..vertices).map(|_| Bag::new()).collect(),
        }
    }

    /// The number of vertices
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// The number of edges
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Add `edge` to the adjacency lists of both its endpoints
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), Error> {
        let (v, w) = edge.endpoints();
        self.validate(v)?;
        self.validate(w)?;

        let shared = Rc::new(edge);
        self.adj[v].add(Rc::clone(&shared));
        self.adj[w].add(shared);
        self.edges += 1;
        Ok(())
    }

    /// Iterate over the edges incident to `v`
    pub fn adj(&self, v: usize) -> Result<BagIter<Rc<Edge>>, Error> {
        self.validate(v)?;
        Ok(self.adj[v].iter())
    }

    /// The degree of the vertex `v`, self-loops counted twice
    pub fn degree(&self, v: usize) -> Result<usize, Error> {
        self.validate(v)?;
        Ok(self.adj[v].len())
    }

    /// Collect every edge of the graph once.
    ///
    /// A self-loop appears twice in its vertex's adjacency bag but only
    /// one of the two copies is collected.
    pub fn all_edges(&self) -> Bag<Rc<Edge>> {
        let mut list = Bag::new();
        for v in 0..self.vertices {
            let mut self_loops = 0;
            for edge in self.adj[v].iter() {
                let (a, b) = edge.endpoints();
                let w = if a == v { b } else { a };
                if w > v {
                    list.add(Rc::clone(edge));
                } else if w == v {
                    if self_loops % 2 == 0 {
                        list.add(Rc::clone(edge));
                    }
                    self_loops += 1;
                }
            }
        }
        list
    }

    fn validate(&self, v: usize) -> Result<(), Error> {
        if v >= self.vertices {
            Err(Error::IndexOutOfBounds {
                index: v,
                len: self.vertices,
            })
        } else {
            Ok(())
        }
    }
}
