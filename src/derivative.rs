// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Brzozowski derivatives with respect to blocks of a `Topology`.
//!
//! The derivative of a regular expression `r` with respect to a symbol `a`
//! is the regular expression that matches `w` exactly when `r` matches `aw`.
//! Here the derivative is taken with respect to a whole block of symbols at
//! once. That only makes sense when every symbol in the block has the same
//! derivative, so a literal whose set straddles the block reports itself
//! through `Unrefined` and the caller refines its topology and tries again.

use log::trace;

use crate::regex::{Regex, RegexContext, RegexKind};
use crate::set::{Overlap, SetLike, Symbols};
use crate::topology::Topology;

/// The derivative could not be taken because the block straddles a literal.
///
/// The payload is the literal's set. Refining the topology via that set
/// removes the obstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrefined<S>(pub S);

/// The result of the constant-time emptiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastEmptiness {
    /// The regular expression certainly matches nothing.
    Empty,

    /// The regular expression certainly matches something.
    NonEmpty,

    /// The answer needs the full decision procedure.
    Unknown,
}

impl<T: SetLike> RegexContext<T> {
    /// The symbols that can start a match of `r`, if they can be read off
    /// its structure.
    ///
    /// The result is `None` when `r` contains an and or a complement term
    /// anywhere. Otherwise the set is exact, since every canonical regular
    /// expression built without those terms other than `empty` matches
    /// something.
    pub fn fast_first_set(&self, r: &Regex<T::Set>) -> Option<T::Set> {
        let alg = self.algebra();

        match r.kind() {
            RegexKind::Eps | RegexKind::Empty => Some(alg.empty()),
            RegexKind::All => Some(alg.all()),
            RegexKind::Literal(set) => Some(set.clone()),
            RegexKind::Star(inner) => self.fast_first_set(inner),
            RegexKind::And(_) | RegexKind::Not(_) => None,
            RegexKind::Alt(args) => args.iter().try_fold(alg.empty(), |acc, arg| {
                self.fast_first_set(arg).map(|first| alg.union(&acc, &first))
            }),
            RegexKind::Seq(args) => {
                let mut result = alg.empty();
                let mut reachable = true;
                for arg in args {
                    let first = self.fast_first_set(arg)?;
                    if reachable {
                        result = alg.union(&result, &first);
                    }
                    reachable = reachable && arg.nullable();
                }
                Some(result)
            }
        }
    }

    /// Check emptiness of `r` without exploring its derivatives.
    pub fn fast_emptiness(&self, r: &Regex<T::Set>) -> FastEmptiness {
        if r.is_null() {
            return FastEmptiness::Empty;
        }
        if r.nullable() {
            return FastEmptiness::NonEmpty;
        }

        match self.fast_first_set(r) {
            None => FastEmptiness::Unknown,
            Some(ref first) if self.algebra().is_empty(first) => FastEmptiness::Empty,
            Some(_) => FastEmptiness::NonEmpty,
        }
    }

    /// The derivative of `r` with respect to the symbols in `block`.
    ///
    /// # Errors
    /// Returns `Unrefined` with the literal's set if some literal reachable
    /// in the derivation overlaps `block` only partially.
    pub fn derivative(
        &self,
        r: &Regex<T::Set>,
        block: &T::Set,
    ) -> Result<Regex<T::Set>, Unrefined<T::Set>> {
        let derived = match r.kind() {
            RegexKind::Eps | RegexKind::Empty => self.empty(),
            RegexKind::All => self.all(),
            RegexKind::Literal(set) => match self.algebra().test_overlap(block, set) {
                Overlap::Empty => self.empty(),
                Overlap::Equal | Overlap::SecondContainsFirst => self.eps(),
                Overlap::FirstContainsSecond | Overlap::Partial => {
                    return Err(Unrefined(set.clone()))
                }
            },
            RegexKind::Alt(args) => self.alt(self.derivative_each(args, block)?),
            RegexKind::And(args) => self.and(self.derivative_each(args, block)?),
            RegexKind::Not(inner) => self.not(self.derivative(inner, block)?),
            RegexKind::Star(inner) => self.seq(vec![self.derivative(inner, block)?, r.clone()]),
            RegexKind::Seq(args) => {
                let mut alternatives = Vec::new();
                for (i, arg) in args.iter().enumerate() {
                    let head = self.derivative(arg, block)?;
                    let rest = args[i + 1..].iter().cloned();
                    alternatives.push(self.seq(Some(head).into_iter().chain(rest)));
                    if !arg.nullable() {
                        break;
                    }
                }
                self.alt(alternatives)
            }
        };

        match self.fast_emptiness(&derived) {
            FastEmptiness::Empty => Ok(self.empty()),
            _ => Ok(derived),
        }
    }

    fn derivative_each(
        &self,
        args: &[Regex<T::Set>],
        block: &T::Set,
    ) -> Result<Vec<Regex<T::Set>>, Unrefined<T::Set>> {
        args.iter().map(|arg| self.derivative(arg, block)).collect()
    }

    /// Apply `f` to each block of `top`, refining `top` until every block
    /// succeeds.
    ///
    /// A failed pass is discarded as a whole and the next pass starts again
    /// from the first block of the refined topology.
    pub(crate) fn for_each_block<F, R>(&self, top: &mut Topology<T::Set>, mut f: F) -> Vec<R>
    where
        F: FnMut(&T::Set) -> Result<R, Unrefined<T::Set>>,
    {
        loop {
            let pass: Result<Vec<R>, _> = top.basis().iter().map(|block| f(block)).collect();
            match pass {
                Ok(results) => return results,
                Err(Unrefined(set)) => {
                    trace!("refining {} blocks via {:?}", top.len(), set);
                    *top = top.refine_via_set(self.algebra(), &set);
                }
            }
        }
    }
}

impl<T: Symbols> RegexContext<T> {
    /// The derivative of `r` with respect to each symbol of `word` in turn.
    ///
    /// # Panics
    /// Panics if the `Symbols` implementation returns a singleton that only
    /// partially overlaps some other set.
    pub fn derivative_word<I>(&self, r: &Regex<T::Set>, word: I) -> Regex<T::Set>
    where
        I: IntoIterator<Item = T::Symbol>,
    {
        let mut current = r.clone();

        for symbol in word {
            if current.is_null() {
                break;
            }

            let block = self.algebra().singleton(&symbol);
            current = match self.derivative(&current, &block) {
                Ok(derived) => derived,
                Err(Unrefined(set)) => panic!(
                    "Invalid Symbols: singleton {:?} partially overlaps {:?}.",
                    block, set
                ),
            };
        }

        current
    }

    /// Check if `r` matches `word`.
    pub fn matches<I>(&self, r: &Regex<T::Set>, word: I) -> bool
    where
        I: IntoIterator<Item = T::Symbol>,
    {
        self.derivative_word(r, word).nullable()
    }
}
