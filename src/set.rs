// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! The symbol-set algebra that regular expressions are parameterized over.
//!
//! A regular expression never looks inside the sets labelling its literals.
//! Everything it needs to know about them (emptiness, overlap, union, and so
//! on) is asked of a `SetLike` capability that is passed around explicitly.

use std::fmt::Debug;
use std::hash::Hash;

/// The operations on (possibly infinite) subsets of an alphabet.
pub trait SetLike {
    /// The representation of a subset of the alphabet.
    type Set: Clone + Eq + Ord + Hash + Debug;

    /// The empty subset.
    fn empty(&self) -> Self::Set;

    /// The subset containing every element of the alphabet.
    fn all(&self) -> Self::Set;

    /// The union of two subsets.
    fn union(&self, a: &Self::Set, b: &Self::Set) -> Self::Set;

    /// The intersection of two subsets.
    fn intersect(&self, a: &Self::Set, b: &Self::Set) -> Self::Set;

    /// The complement of a subset.
    fn invert(&self, a: &Self::Set) -> Self::Set;

    /// Check if a subset has no elements.
    fn is_empty(&self, a: &Self::Set) -> bool;

    /// Check if every element of `b` is also an element of `a`.
    fn contains_all(&self, a: &Self::Set, b: &Self::Set) -> bool {
        self.is_empty(&self.intersect(b, &self.invert(a)))
    }

    /// The set difference `a \ b`.
    fn difference(&self, a: &Self::Set, b: &Self::Set) -> Self::Set {
        self.intersect(a, &self.invert(b))
    }

    /// Classify how `first` and `second` overlap.
    fn test_overlap(&self, first: &Self::Set, second: &Self::Set) -> Overlap {
        if self.is_empty(&self.intersect(first, second)) {
            return Overlap::Empty;
        }

        match (
            self.contains_all(first, second),
            self.contains_all(second, first),
        ) {
            (true, true) => Overlap::Equal,
            (true, false) => Overlap::FirstContainsSecond,
            (false, true) => Overlap::SecondContainsFirst,
            (false, false) => Overlap::Partial,
        }
    }
}

/// A `SetLike` whose sets are built from individual symbols.
pub trait Symbols: SetLike {
    /// The element type of the alphabet.
    type Symbol;

    /// The set containing only `symbol`.
    fn singleton(&self, symbol: &Self::Symbol) -> Self::Set;
}

/// The ways in which two sets can overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// The sets are disjoint.
    Empty,

    /// The first set is a strict superset of the second.
    FirstContainsSecond,

    /// The second set is a strict superset of the first.
    SecondContainsFirst,

    /// The sets are equal (and not empty).
    Equal,

    /// The sets share some, but not all, of their elements.
    Partial,
}
