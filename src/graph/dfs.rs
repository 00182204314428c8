// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::collections::Stack;
use crate::error::Error;
use crate::graph::Graph;

/// Which vertices of a [`Graph`] are reachable from a source vertex.
///
/// The search runs iteratively over an explicit [`Stack`] at construction
/// time; afterwards reachability queries are constant time.
///
/// # Examples
///
/// ```
/// use rudiments::{DepthFirstSearch, Graph};
///
/// # fn main() -> Result<(), rudiments::Error> {
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(0, 2)?;
///
/// let search = DepthFirstSearch::new(&graph, 2)?;
/// assert!(search.marked(0)?);
/// assert!(search.marked(1)?);
/// assert!(!search.marked(3)?);
/// assert_eq!(search.count(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    marked: Vec<bool>,
    count: usize,
}

impl DepthFirstSearch {
    /// Search `graph` from the vertex `source`
    pub fn new(graph: &Graph, source: usize) -> Result<Self, Error> {
        let vertices = graph.vertices();
        if source >= vertices {
            return Err(Error::IndexOutOfBounds {
                index: source,
                len: vertices,
            });
        }

        let mut marked = vec![false; vertices];
        let mut count = 1;
        let mut stack = Stack::new();

        marked[source] = true;
        stack.push(source);

        while let Some(v) = stack.pop() {
            for &w in graph.adj(v)? {
                if !marked[w] {
                    marked[w] = true;
                    count += 1;
                    stack.push(w);
                }
            }
        }

        Ok(DepthFirstSearch { marked, count })
    }

    /// Whether the vertex `v` is reachable from the source
    pub fn marked(&self, v: usize) -> Result<bool, Error> {
        if v >= self.marked.len() {
            return Err(Error::IndexOutOfBounds {
                index: v,
                len: self.marked.len(),
            });
        }
        Ok(self.marked[v])
    }

    /// The number of vertices reachable from the source, itself included
    pub fn count(&self) -> usize {
        self.count
    }
}
