// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Undirected graphs and the algorithms that walk them.
//!
//! [`Graph`] is a plain adjacency-list graph, [`EdgeWeightedGraph`] hangs a
//! weighted [`Edge`] on every adjacency entry. [`DepthFirstSearch`] answers
//! reachability, [`DijkstraShortestPaths`] single-source distances and
//! [`KruskalMst`] minimum spanning forests.

mod dfs;
mod dijkstra;
mod edge;
mod kruskal;
mod undirected;
mod weighted;

pub use dfs::DepthFirstSearch;
pub use dijkstra::DijkstraShortestPaths;
pub use edge::Edge;
pub use kruskal::KruskalMst;
pub use undirected::Graph;
pub use weighted::EdgeWeightedGraph;
