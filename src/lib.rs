// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rudiments
//!
//! A library of classic data structures and algorithms. It has four parts:
//!
//! `collections`, the sequential workhorses: `Stack`, `Queue`, `Bag` and an
//! indexed minimum priority queue
//! `unionfind`, three structures for dynamic-connectivity queries
//! `search`, an ordered key-value map backed by a binary search tree
//! `graph`, undirected and edge-weighted graphs together with depth-first
//! search, Dijkstra shortest paths and Kruskal minimum spanning trees,
//! supported by the `sort` and `random` modules.
//!
//! Operations that take element or vertex indices validate them and return
//! [`Error`] instead of panicking.

#![deny(missing_docs)]

pub mod collections;
mod error;
pub mod graph;
pub mod random;
pub mod search;
pub mod sort;
pub mod unionfind;

pub use collections::{Bag, IndexMinPq, Queue, Stack};
pub use error::Error;
pub use graph::{
    DepthFirstSearch, DijkstraShortestPaths, Edge, EdgeWeightedGraph, Graph,
    KruskalMst,
};
pub use random::Lcg;
pub use search::Bst;
pub use unionfind::{QuickFind, QuickUnion, WeightedQuickUnion};
