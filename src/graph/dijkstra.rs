// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::rc::Rc;

use crate::collections::{IndexMinPq, Stack};
use crate::error::Error;
use crate::graph::{Edge, EdgeWeightedGraph};

/// Distance to a vertex no path reaches
const INFINITY: u128 = u128::MAX;

/// Shortest paths from a source vertex of an [`EdgeWeightedGraph`].
///
/// Dijkstra's algorithm: vertices are settled in distance order off an
/// [`IndexMinPq`], relaxing the edges of each settled vertex. Distances to
/// unreachable vertices are reported as `u128::MAX`.
#[derive(Debug, Clone)]
pub struct DijkstraShortestPaths {
    dist_to: Vec<u128>,
    edge_to: Vec<Option<Rc<Edge>>>,
}

impl DijkstraShortestPaths {
    /// Compute the shortest paths from `source` through `graph`
    pub fn new(
        graph: &EdgeWeightedGraph,
        source: usize,
    ) -> Result<Self, Error> {
        let vertices = graph.vertices();
        if source >= vertices {
            return Err(Error::IndexOutOfBounds {
                index: source,
                len: vertices,
            });
        }

        let mut paths = DijkstraShortestPaths {
            dist_to: vec![INFINITY; vertices],
            edge_to: vec![None; vertices],
        };
        paths.dist_to[source] = 0;

        let mut pq = IndexMinPq::with_capacity(vertices);
        pq.insert(source, 0)?;

        while let Some(v) = pq.pop_min() {
            for edge in graph.adj(v)? {
                paths.relax(edge, v, &mut pq)?;
            }
        }

        Ok(paths)
    }

    /// The length of a shortest path from the source to `v`
    pub fn dist_to(&self, v: usize) -> Result<u128, Error> {
        self.validate(v)?;
        Ok(self.dist_to[v])
    }

    /// Whether any path leads from the source to `v`
    pub fn has_path_to(&self, v: usize) -> Result<bool, Error> {
        Ok(self.dist_to(v)? < INFINITY)
    }

    /// A shortest path from the source to `v`, if one exists.
    ///
    /// Popping the returned stack walks the path edge by edge, starting at
    /// the source.
    pub fn path_to(
        &self,
        v: usize,
    ) -> Result<Option<Stack<Rc<Edge>>>, Error> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }

        let mut path = Stack::new();
        let mut x = v;
        while let Some(edge) = &self.edge_to[x] {
            path.push(Rc::clone(edge));
            x = edge.other(x)?;
        }
        Ok(Some(path))
    }

    fn relax(
        &mut self,
        edge: &Rc<Edge>,
        v: usize,
        pq: &mut IndexMinPq<u128>,
    ) -> Result<(), Error> {
        let w = edge.other(v)?;
        let candidate = self.dist_to[v].saturating_add(edge.weight());

        if candidate < self.dist_to[w] {
            self.dist_to[w] = candidate;
            self.edge_to[w] = Some(Rc::clone(edge));
            if pq.contains(w)? {
                pq.decrease_key(w, candidate)?;
            } else {
                pq.insert(w, candidate)?;
            }
        }
        Ok(())
    }

    fn validate(&self, v: usize) -> Result<(), Error> {
        if v >= self.dist_to.len() {
            Err(Error::IndexOutOfBounds {
                index: v,
                len: self.dist_to.len(),
            })
        } else {
            Ok(())
        }
    }
}
