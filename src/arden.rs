// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Conversion of a `Dfa` back to a regular expression.
//!
//! Each state `i` gives a language equation `X_i = c_i | a_i1 X_1 | ...`
//! where `c_i` is `eps` for accepting states and `a_ij` is the literal on the
//! transition from `i` to `j`. The equations are solved by eliminating the
//! unknowns one at a time, using Arden's rule `X = u X | q  =>  X = u* q`
//! for any self-loop on the unknown being eliminated.

use std::collections::BTreeMap;

use log::trace;

use crate::dfa::Dfa;
use crate::regex::{Regex, RegexContext};
use crate::set::SetLike;

// `constant | coefficient_j X_j | ...`
struct Equation<S> {
    constant: Regex<S>,
    coefficients: BTreeMap<usize, Regex<S>>,
}

impl<T: SetLike> RegexContext<T> {
    /// A regular expression matching the same language as `dfa`.
    pub fn dfa_to_regex(&self, dfa: &Dfa<T::Set>) -> Regex<T::Set> {
        // Unknown 0 is the result, and unknown `i + 1` is state `i`.
        let mut system = Vec::with_capacity(dfa.len() + 1);
        system.push(Equation {
            constant: self.empty(),
            coefficients: Some((1, self.eps())).into_iter().collect(),
        });
        for state in dfa.states() {
            let coefficients = state
                .transitions()
                .map(|(to, label)| (to + 1, self.literal(label.clone())))
                .collect();
            let constant = if state.nullable() {
                self.eps()
            } else {
                self.empty()
            };
            system.push(Equation {
                constant,
                coefficients,
            });
        }

        while system.len() > 1 {
            let index = system.len() - 1;
            if let Some(equation) = system.pop() {
                self.eliminate(&mut system, index, equation);
            }
        }

        system
            .pop()
            .map(|equation| equation.constant)
            .unwrap_or_else(|| self.empty())
    }

    /// Normalise `r` by building its dfa and converting that back to a
    /// regular expression.
    pub fn rebuild(&self, r: &Regex<T::Set>) -> Regex<T::Set> {
        self.dfa_to_regex(&self.build_dfa(r))
    }

    fn eliminate(
        &self,
        system: &mut [Equation<T::Set>],
        index: usize,
        equation: Equation<T::Set>,
    ) {
        let Equation {
            mut constant,
            mut coefficients,
        } = equation;

        if let Some(self_loop) = coefficients.remove(&index) {
            let repeat = self.star(self_loop);
            constant = self.seq(vec![repeat.clone(), constant]);
            for coefficient in coefficients.values_mut() {
                *coefficient = self.seq(vec![repeat.clone(), coefficient.clone()]);
            }
        }

        trace!(
            "eliminating unknown {} with {} remaining references",
            index,
            coefficients.len()
        );

        for other in system.iter_mut() {
            let via = match other.coefficients.remove(&index) {
                Some(via) => via,
                None => continue,
            };

            other.constant = self.alt(vec![
                self.seq(vec![via.clone(), constant.clone()]),
                other.constant.clone(),
            ]);
            for (&k, coefficient) in coefficients.iter() {
                let path = self.seq(vec![via.clone(), coefficient.clone()]);
                let merged = match other.coefficients.remove(&k) {
                    Some(existing) => self.alt(vec![path, existing]),
                    None => path,
                };
                other.coefficients.insert(k, merged);
            }
        }
    }
}
