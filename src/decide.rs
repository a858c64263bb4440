// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Decision procedures over regular expressions.
//!
//! Each procedure explores the derivatives of its arguments breadth first,
//! remembering what it has already seen, and stops as soon as a cheap
//! structural check settles the answer. The number of distinct derivatives
//! of a canonical regular expression is finite, so every exploration ends.

use std::collections::{HashMap, HashSet, VecDeque};

use log::trace;

use crate::derivative::FastEmptiness;
use crate::regex::{Regex, RegexContext};
use crate::set::SetLike;
use crate::topology::Topology;

impl<T: SetLike> RegexContext<T> {
    /// Check if `r` matches no string at all.
    pub fn is_empty(&self, r: &Regex<T::Set>) -> bool {
        let mut top = Topology::trivial(self.algebra());
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back(r.clone());

        while let Some(current) = queue.pop_front() {
            match self.fast_emptiness(&current) {
                FastEmptiness::Empty => continue,
                FastEmptiness::NonEmpty => return false,
                FastEmptiness::Unknown => {}
            }
            if !visited.insert(current.clone()) {
                continue;
            }

            let derived = self.for_each_block(&mut top, |block| self.derivative(&current, block));
            for d in derived {
                if visited.contains(&d) {
                    continue;
                }
                match self.fast_emptiness(&d) {
                    FastEmptiness::Empty => {}
                    FastEmptiness::NonEmpty => return false,
                    FastEmptiness::Unknown => queue.push_back(d),
                }
            }
        }

        trace!("{} derivatives explored, none non-empty", visited.len());
        true
    }

    /// Check if `a` and `b` match the same strings.
    pub fn equiv(&self, a: &Regex<T::Set>, b: &Regex<T::Set>) -> bool {
        self.explore_pairs(a, b, |ctx, a, b| ctx.equiv_heuristic(a, b))
    }

    /// Check if every string matched by `b` is also matched by `a`.
    pub fn includes(&self, a: &Regex<T::Set>, b: &Regex<T::Set>) -> bool {
        self.explore_pairs(a, b, |ctx, a, b| ctx.includes_heuristic(a, b))
    }

    /// Check if some string is matched by both `a` and `b`.
    pub fn intersects(&self, a: &Regex<T::Set>, b: &Regex<T::Set>) -> bool {
        !self.is_empty(&self.and(vec![a.clone(), b.clone()]))
    }

    /// The sets of symbols that can appear at each of the first `max_len`
    /// positions of a string matched by `r`.
    ///
    /// Element `i` of the result holds each symbol `c` for which some string
    /// matched by `r` has `c` at position `i`.
    pub fn first_sets(&self, r: &Regex<T::Set>, max_len: usize) -> Vec<T::Set> {
        let mut result = vec![self.algebra().empty(); max_len];
        let mut top = Topology::trivial(self.algebra());
        let mut emptiness = HashMap::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back((0, r.clone()));

        while let Some((offset, current)) = queue.pop_front() {
            if offset >= max_len || !visited.insert((offset, current.clone())) {
                continue;
            }
            if self.fast_emptiness(&current) == FastEmptiness::Empty {
                continue;
            }

            let derived = self.for_each_block(&mut top, |block| {
                Ok((block.clone(), self.derivative(&current, block)?))
            });
            for (block, d) in derived {
                let empty = match emptiness.get(&d) {
                    Some(&empty) => empty,
                    None => {
                        let empty = self.is_empty(&d);
                        emptiness.insert(d.clone(), empty);
                        empty
                    }
                };
                if empty {
                    continue;
                }

                result[offset] = self.algebra().union(&result[offset], &block);
                queue.push_back((offset + 1, d));
            }
        }

        result
    }

    /// The set of symbols that can start a string matched by `r`.
    pub fn first_set(&self, r: &Regex<T::Set>) -> T::Set {
        self.first_sets(r, 1)
            .pop()
            .unwrap_or_else(|| self.algebra().empty())
    }

    fn explore_pairs<H>(&self, a: &Regex<T::Set>, b: &Regex<T::Set>, heuristic: H) -> bool
    where
        H: Fn(&Self, &Regex<T::Set>, &Regex<T::Set>) -> Option<bool>,
    {
        let mut top = Topology::trivial(self.algebra());
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back((a.clone(), b.clone()));

        while let Some((a, b)) = queue.pop_front() {
            if !visited.insert((a.clone(), b.clone())) {
                continue;
            }
            match heuristic(self, &a, &b) {
                Some(true) => continue,
                Some(false) => return false,
                None => {}
            }

            let derived = self.for_each_block(&mut top, |block| {
                Ok((self.derivative(&a, block)?, self.derivative(&b, block)?))
            });
            for pair in derived {
                if visited.contains(&pair) {
                    continue;
                }
                match heuristic(self, &pair.0, &pair.1) {
                    Some(true) => {}
                    Some(false) => return false,
                    None => queue.push_back(pair),
                }
            }
        }

        true
    }

    // Some(answer) when the pair can be settled without exploring further.
    fn equiv_heuristic(&self, a: &Regex<T::Set>, b: &Regex<T::Set>) -> Option<bool> {
        if a == b {
            return Some(true);
        }
        if a.nullable() != b.nullable() {
            return Some(false);
        }

        // Without and or complement terms a first set is exact.
        match (self.fast_first_set(a), self.fast_first_set(b)) {
            (Some(fa), Some(fb)) if fa != fb => Some(false),
            _ => None,
        }
    }

    // Some(answer) when it is settled whether `a` includes `b`.
    fn includes_heuristic(&self, a: &Regex<T::Set>, b: &Regex<T::Set>) -> Option<bool> {
        if a == b || b.is_null() || a.is_all() {
            return Some(true);
        }
        if a.is_null() {
            return match self.fast_emptiness(b) {
                FastEmptiness::Empty => Some(true),
                FastEmptiness::NonEmpty => Some(false),
                FastEmptiness::Unknown => None,
            };
        }
        if b.nullable() && !a.nullable() {
            return Some(false);
        }

        match (self.fast_first_set(a), self.fast_first_set(b)) {
            (Some(ref fa), Some(ref fb)) if !self.algebra().contains_all(fa, fb) => Some(false),
            _ => None,
        }
    }
}
