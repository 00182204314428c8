// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Dynamic connectivity over the sites `0..n`.
//!
//! All three structures answer the same queries: `connected` is reflexive,
//! symmetric and transitive, and `count` is the number of disjoint
//! components left after the unions performed so far. They differ in how
//! the work is split between `find` and `union`.

use crate::error::Error;

/// Union-find with an eagerly flattened id array.
///
/// `find` is constant time; `union` rewrites the id array and takes linear
/// time per call.
///
/// # Examples
///
/// ```
/// use rudiments::QuickFind;
///
/// # fn main() -> Result<(), rudiments::Error> {
/// let mut uf = QuickFind::new(5);
/// uf.union(0, 2)?;
/// uf.union(2, 4)?;
///
/// // reflexive, symmetric, transitive
/// assert!(uf.connected(0, 0)?);
/// assert!(uf.connected(2, 0)?);
/// assert!(uf.connected(0, 4)?);
/// assert_eq!(uf.count(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QuickFind {
    count: usize,
    id: Vec<usize>,
}

impl QuickFind {
    /// Create a structure of `n` singleton sites
    pub fn new(n: usize) -> Self {
        QuickFind {
            count: n,
            id: (0..n).collect(),
        }
    }

    /// The number of disjoint components
    pub fn count(&self) -> usize {
        self.count
    }

    /// The component identifier of site `p`
    pub fn find(&self, p: usize) -> Result<usize, Error> {
        validate(p, self.id.len())?;
        Ok(self.id[p])
    }

    /// Whether sites `p` and `q` are in the same component
    pub fn connected(&self, p: usize, q: usize) -> Result<bool, Error> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merge the components of sites `p` and `q`
    pub fn union(&mut self, p: usize, q: usize) -> Result<(), Error> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;

        if root_p == root_q {
            return Ok(());
        }

        for id in self.id.iter_mut() {
            if *id == root_p {
                *id = root_q;
            }
        }
        self.count -= 1;
        Ok(())
    }
}

/// Union-find as a parent forest, without weighting.
///
/// `find` chases parent links to the root, so both `find` and `union` take
/// time linear in the tree depth, which this variant does nothing to bound.
#[derive(Debug, Clone)]
pub struct QuickUnion {
    count: usize,
    id: Vec<usize>,
}

impl QuickUnion {
    /// Create a structure of `n` singleton sites
    pub fn new(n: usize) -> Self {
        QuickUnion {
            count: n,
            id: (0..n).collect(),
        }
    }

    /// The number of disjoint components
    pub fn count(&self) -> usize {
        self.count
    }

    /// The root site of the tree containing site `p`
    pub fn find(&self, p: usize) -> Result<usize, Error> {
        validate(p, self.id.len())?;
        let mut p = p;
        while p != self.id[p] {
            p = self.id[p];
        }
        Ok(p)
    }

    /// Whether sites `p` and `q` are in the same component
    pub fn connected(&self, p: usize, q: usize) -> Result<bool, Error> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merge the components of sites `p` and `q`
    pub fn union(&mut self, p: usize, q: usize) -> Result<(), Error> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;

        if root_p == root_q {
            return Ok(());
        }

        self.id[root_p] = root_q;
        self.count -= 1;
        Ok(())
    }
}

/// Union-find as a parent forest with size-weighted linking.
///
/// The root of the smaller tree is always linked under the root of the
/// larger, which keeps tree depth logarithmic in the number of sites and
/// with it every operation.
///
/// # Examples
///
/// ```
/// use rudiments::WeightedQuickUnion;
///
/// # fn main() -> Result<(), rudiments::Error> {
/// let mut uf = WeightedQuickUnion::new(5);
/// uf.union(0, 2)?;
/// uf.union(2, 4)?;
///
/// assert!(uf.connected(0, 4)?);
/// assert!(!uf.connected(0, 1)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    count: usize,
    size: Vec<usize>,
    id: Vec<usize>,
}

impl WeightedQuickUnion {
    /// Create a structure of `n` singleton sites
    pub fn new(n: usize) -> Self {
        WeightedQuickUnion {
            count: n,
            size: vec![1; n],
            id: (0..n).collect(),
        }
    }

    /// The number of disjoint components
    pub fn count(&self) -> usize {
        self.count
    }

    /// The root site of the tree containing site `p`
    pub fn find(&self, p: usize) -> Result<usize, Error> {
        validate(p, self.id.len())?;
        let mut p = p;
        while p != self.id[p] {
            p = self.id[p];
        }
        Ok(p)
    }

    /// Whether sites `p` and `q` are in the same component
    pub fn connected(&self, p: usize, q: usize) -> Result<bool, Error> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merge the components of sites `p` and `q`
    pub fn union(&mut self, p: usize, q: usize) -> Result<(), Error> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;

        if root_p == root_q {
            return Ok(());
        }

        let (smaller, larger) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };

        self.id[smaller] = larger;
        self.size[larger] += self.size[smaller];
        self.count -= 1;
        Ok(())
    }
}

fn validate(p: usize, len: usize) -> Result<(), Error> {
    if p >= len {
        Err(Error::IndexOutOfBounds { index: p, len })
    } else {
        Ok(())
    }
}
