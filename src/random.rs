// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A small linear congruential generator.
//!
//! Pseudo random numbers of roughly even distribution, enough for
//! generating test input and for scrambling slices ahead of quicksort.
//! Not cryptographically secure.

use std::time::{SystemTime, UNIX_EPOCH};

// The GLIBC parameters: x' = (1103515245 * x + 12345) mod 2^31
const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS: u64 = 1 << 31;

/// A linear congruential generator with the GLIBC parameters.
///
/// # Examples
///
/// ```
/// use rudiments::Lcg;
///
/// let mut rng = Lcg::new(42);
/// let values = rng.generate(200);
///
/// assert_eq!(values.len(), 200);
/// ```
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a generator from a fixed seed, for reproducible sequences
    pub fn new(seed: u64) -> Self {
        Lcg {
            state: seed % MODULUS,
        }
    }

    /// Create a generator seeded from the system clock
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos() as u64)
            .unwrap_or(0);
        Lcg::new(nanos)
    }

    /// The next number of the sequence
    pub fn next_u32(&mut self) -> u32 {
        self.state = (MULTIPLIER * self.state + INCREMENT) % MODULUS;
        self.state as u32
    }

    /// The next number of the sequence, reduced to `0..bound`
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            0
        } else {
            self.next_u32() % bound
        }
    }

    /// Generate `len` numbers into a vector
    pub fn generate(&mut self, len: usize) -> Vec<u32> {
        (0..len).map(|_| self.next_u32()).collect()
    }

    /// Rearrange the slice in uniformly pseudo random order.
    ///
    /// Fisher-Yates: every element is swapped with one drawn from the
    /// prefix up to and including itself.
    pub fn shuffle<T>(&mut self, a: &mut [T]) {
        for i in (1..a.len()).rev() {
            let j = self.below(i as u32 + 1) as usize;
            a.swap(i, j);
        }
    }
}
