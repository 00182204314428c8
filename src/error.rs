// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Error validating an element or vertex index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index beyond the bounds of the collection or graph
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// The length it was checked against
        len: usize,
    },
    /// A vertex that is not an endpoint of the queried edge
    #[error("vertex {vertex} is not an endpoint of this edge")]
    NotIncident {
        /// The vertex that was queried
        vertex: usize,
    },
    /// An index inserted twice into an indexed priority queue
    #[error("index {index} is already on the priority queue")]
    DuplicateIndex {
        /// The index that was already present
        index: usize,
    },
    /// A keyed operation on an index absent from an indexed priority queue
    #[error("index {index} is not on the priority queue")]
    AbsentIndex {
        /// The index that was absent
        index: usize,
    },
}
