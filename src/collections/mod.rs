// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sequential collections: a LIFO stack, a FIFO queue, an unordered bag and
//! an indexed minimum priority queue.

mod bag;
mod pq;
mod queue;
mod stack;

pub use bag::{Bag, Iter as BagIter};
pub use pq::IndexMinPq;
pub use queue::{Iter as QueueIter, Queue};
pub use stack::{Iter as StackIter, Stack};
