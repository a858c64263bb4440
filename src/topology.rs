// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A lazily refined partition of the alphabet.

use std::fmt::Debug;

use log::debug;

use crate::set::SetLike;

/// A finite partition of the alphabet into blocks.
///
/// The blocks (the `basis`) are non-empty, pairwise disjoint, and their union
/// is the whole alphabet. Derivatives are only ever taken with respect to a
/// block, so the partition only has to be as fine as the literal sets that
/// a particular computation has run into so far.
///
/// A `Topology` is a value: refining it returns a new `Topology` and leaves
/// the original untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology<S> {
    basis: Vec<S>,
}

impl<S: Clone + Eq + Debug> Topology<S> {
    /// The coarsest partition: a single block holding the whole alphabet.
    pub fn trivial<T: SetLike<Set = S>>(alg: &T) -> Topology<S> {
        Topology {
            basis: vec![alg.all()],
        }
    }

    /// The blocks of the partition, in a stable order.
    pub fn basis(&self) -> &[S] {
        &self.basis
    }

    /// The number of blocks in the partition.
    pub fn len(&self) -> usize {
        self.basis.len()
    }

    /// Refine the partition so that it separates `set`.
    ///
    /// Every block of the result is either a subset of `set` or disjoint
    /// from it. A block that straddles `set` is split in place into its
    /// inside and outside parts, so the relative order of the existing blocks
    /// is preserved. Refining by a set that is already separated returns an
    /// equal `Topology`.
    pub fn refine_via_set<T: SetLike<Set = S>>(&self, alg: &T, set: &S) -> Topology<S> {
        let mut basis = Vec::with_capacity(self.basis.len() + 1);

        for block in self.basis.iter() {
            let inside = alg.intersect(block, set);
            if alg.is_empty(&inside) {
                basis.push(block.clone());
                continue;
            }

            let outside = alg.difference(block, set);
            if alg.is_empty(&outside) {
                basis.push(block.clone());
            } else {
                basis.push(inside);
                basis.push(outside);
            }
        }

        if basis.len() != self.basis.len() {
            debug!(
                "refined topology from {} to {} blocks via {:?}",
                self.basis.len(),
                basis.len(),
                set
            );
        }

        Topology { basis }
    }
}
