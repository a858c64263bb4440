// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Character classes: subsets of an `Alphabet` stored as sorted ranges.

use std::cmp;
use std::fmt::{self, Display};
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::slice;

use itertools::Itertools;

use crate::alphabet::Alphabet;
use crate::set::{SetLike, Symbols};

/// A (possibly empty) subset of the alphabet `A`.
///
/// A `Class` is kept in a canonical form: its ranges are sorted, do not
/// overlap, and no two of them are adjacent. Two classes are therefore equal
/// exactly when they contain the same elements.
#[derive(Debug, PartialEq, PartialOrd, Ord, Hash, Eq, Clone)]
pub struct Class<A: Alphabet> {
    ranges: Vec<Range<A>>,
}

/// An inclusive range of characters from the alphabet `A`.
#[derive(Debug, PartialEq, PartialOrd, Ord, Hash, Eq, Clone)]
pub struct Range<A: Alphabet> {
    start: A,
    end: A,
}

/// An iterator over the closed ranges of a class.
///
/// This is the return type of the `Class<A>::ranges()` method.
pub struct Ranges<'a, A: 'a + Alphabet> {
    inner: slice::Iter<'a, Range<A>>,
}

impl<A: Alphabet> Class<A> {
    /// The class with no elements.
    pub fn empty() -> Class<A> {
        Class { ranges: Vec::new() }
    }

    /// The class with every element of `A`.
    pub fn full() -> Class<A> {
        Class::from(Range::new(A::min_value(), A::max_value()))
    }

    /// The class containing only `a`.
    pub fn single(a: A) -> Class<A> {
        Class::from(Range::new(a.clone(), a))
    }

    /// Get an iterator over the closed ranges that make up the `Class`.
    ///
    /// The ranges returned by the iterator will be non-overlapping ranges
    /// and will be in increasing order. Adjacent ranges will also be combined.
    pub fn ranges(&self) -> Ranges<A> {
        Ranges {
            inner: self.ranges.iter(),
        }
    }

    /// Check if the subset of `A` is empty.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Check if the subset of `A` is the complement of the empty set
    /// (i.e. it is every element in `A`).
    pub fn is_complement_empty(&self) -> bool {
        match self.ranges.as_slice() {
            [only] => only.start == A::min_value() && only.end == A::max_value(),
            _ => false,
        }
    }

    /// Check if the class contains the character `c`.
    pub fn contains(&self, c: &A) -> bool {
        self.ranges
            .binary_search_by(|range| {
                if range.end < *c {
                    cmp::Ordering::Less
                } else if range.start > *c {
                    cmp::Ordering::Greater
                } else {
                    cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// The elements in either `self` or `other`.
    pub fn union(&self, other: &Class<A>) -> Class<A> {
        self.ranges
            .iter()
            .chain(other.ranges.iter())
            .cloned()
            .collect()
    }

    /// The elements in both `self` and `other`.
    pub fn intersect(&self, other: &Class<A>) -> Class<A> {
        let mut ranges = Vec::new();
        let (mut i, mut j) = (0, 0);

        // Pieces cut from canonical inputs are never adjacent, so the output
        // is canonical without another coalescing pass.
        while i < self.ranges.len() && j < other.ranges.len() {
            let left = &self.ranges[i];
            let right = &other.ranges[j];

            let start = cmp::max(&left.start, &right.start);
            let end = cmp::min(&left.end, &right.end);
            if start <= end {
                ranges.push(Range::new(start.clone(), end.clone()));
            }

            if left.end < right.end {
                i += 1;
            } else {
                j += 1;
            }
        }

        Class { ranges }
    }

    /// The elements of `A` that are not in `self`.
    pub fn complement(&self) -> Class<A> {
        let mut ranges = Vec::with_capacity(self.ranges.len() + 1);
        let mut next = Some(A::min_value());

        for range in self.ranges.iter() {
            if let Some(start) = next {
                if start < range.start {
                    if let Some(end) = range.start.decrement() {
                        ranges.push(Range::new(start, end));
                    }
                }
            }
            next = range.end.increment();
        }

        if let Some(start) = next {
            ranges.push(Range::new(start, A::max_value()));
        }

        Class { ranges }
    }
}

impl<A: Alphabet> From<Range<A>> for Class<A> {
    fn from(range: Range<A>) -> Class<A> {
        Class {
            ranges: vec![range],
        }
    }
}

impl<A: Alphabet> FromIterator<Range<A>> for Class<A> {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Range<A>>,
    {
        let ranges = iter
            .into_iter()
            .sorted()
            .coalesce(|prev, next| prev.coalesce(&next))
            .collect();

        Class { ranges }
    }
}

impl<A: Alphabet> Display for Class<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_complement_empty() {
            return write!(f, ".");
        }

        let ranges = self.ranges.iter().format_with("", |range, f| {
            if range.start == range.end {
                f(&format_args!("{:?}", range.start))
            } else {
                f(&format_args!("{:?}-{:?}", range.start, range.end))
            }
        });
        write!(f, "[{}]", ranges)
    }
}

impl<'a, A: Alphabet> Iterator for Ranges<'a, A> {
    type Item = &'a Range<A>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<A: Alphabet> Range<A> {
    /// Creates a new range of characters.
    ///
    /// If `end` is less than the `start` then they will be reversed.
    pub fn new(start: A, end: A) -> Range<A> {
        if end < start {
            Range {
                start: end,
                end: start,
            }
        } else {
            Range { start, end }
        }
    }

    /// The start of the range of characters.
    ///
    /// The start is included in the range.
    pub fn start(&self) -> A {
        self.start.clone()
    }

    /// The end of the range of characters.
    ///
    /// The end is included in the range.
    pub fn end(&self) -> A {
        self.end.clone()
    }

    // Merge two ranges that overlap or touch. `self` must not start after
    // `other`, which is how a sorted sequence of ranges presents them.
    fn coalesce(&self, other: &Self) -> Result<Self, (Self, Self)> {
        let touches = other
            .start
            .decrement()
            .map_or(true, |before| before <= self.end);

        if touches {
            let end = cmp::max(&self.end, &other.end).clone();
            Ok(Range::new(self.start.clone(), end))
        } else {
            Err((self.clone(), other.clone()))
        }
    }
}

/// The `SetLike` algebra of `Class<A>`.
#[derive(Debug)]
pub struct ClassAlgebra<A> {
    _alphabet: PhantomData<fn() -> A>,
}

impl<A: Alphabet> ClassAlgebra<A> {
    /// Create the algebra for classes over `A`.
    pub fn new() -> ClassAlgebra<A> {
        ClassAlgebra {
            _alphabet: PhantomData,
        }
    }
}

impl<A: Alphabet> Default for ClassAlgebra<A> {
    fn default() -> Self {
        ClassAlgebra::new()
    }
}

impl<A> Clone for ClassAlgebra<A> {
    fn clone(&self) -> Self {
        ClassAlgebra {
            _alphabet: PhantomData,
        }
    }
}

impl<A> Copy for ClassAlgebra<A> {}

impl<A: Alphabet> SetLike for ClassAlgebra<A> {
    type Set = Class<A>;

    fn empty(&self) -> Class<A> {
        Class::empty()
    }

    fn all(&self) -> Class<A> {
        Class::full()
    }

    fn union(&self, a: &Class<A>, b: &Class<A>) -> Class<A> {
        a.union(b)
    }

    fn intersect(&self, a: &Class<A>, b: &Class<A>) -> Class<A> {
        a.intersect(b)
    }

    fn invert(&self, a: &Class<A>) -> Class<A> {
        a.complement()
    }

    fn is_empty(&self, a: &Class<A>) -> bool {
        a.is_empty()
    }

    fn contains_all(&self, a: &Class<A>, b: &Class<A>) -> bool {
        b.intersect(a) == *b
    }
}

impl<A: Alphabet> Symbols for ClassAlgebra<A> {
    type Symbol = A;

    fn singleton(&self, symbol: &A) -> Class<A> {
        Class::single(symbol.clone())
    }
}
