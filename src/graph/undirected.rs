// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::collections::{Bag, BagIter};
use crate::error::Error;

/// An undirected graph over the vertices `0..vertices`, kept as one
/// adjacency [`Bag`] per vertex.
///
/// Self-loops and parallel edges are allowed. Adjacency iteration visits
/// neighbors newest first, the bag order.
///
/// # Examples
///
/// ```
/// use rudiments::Graph;
///
/// # fn main() -> Result<(), rudiments::Error> {
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(0, 2)?;
///
/// assert_eq!(graph.degree(0)?, 2);
/// let neighbors: Vec<usize> = graph.adj(0)?.copied().collect();
/// assert_eq!(neighbors, vec![2, 1]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: usize,
    edges: usize,
    adj: Vec<Bag<usize>>,
}

impl Graph {
    /// Create a graph of `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        Graph {
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

    /// Add an edge between the vertices `v` and `w`
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<(), Error> {
        self.validate(v)?;
        self.validate(w)?;
        self.adj[v].add(w);
        self.adj[w].add(v);
        self.edges += 1;
        Ok(())
    }

    /// Iterate over the vertices adjacent to `v`
    pub fn adj(&self, v: usize) -> Result<BagIter<usize>, Error> {
        self.validate(v)?;
        Ok(self.adj[v].iter())
    }

    /// The degree of the vertex `v`
    pub fn degree(&self, v: usize) -> Result<usize, Error> {
        self.validate(v)?;
        Ok(self.adj[v].len())
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
