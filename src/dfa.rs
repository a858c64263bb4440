// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Deterministic finite automata built from the derivatives of a regular
//! expression.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::slice;

use log::{debug, trace};

use crate::derivative::FastEmptiness;
use crate::error::DfaError;
use crate::regex::{Regex, RegexContext};
use crate::set::{SetLike, Symbols};
use crate::topology::Topology;

/// A deterministic finite automaton ("dfa").
///
/// State `0` is the start state. Each state is labelled by the regular
/// expression (a derivative of the one the dfa was built from) that matches
/// the rest of the input from that state. The labels of the transitions out
/// of a state are pairwise disjoint. Derivatives that are evidently empty get
/// no state, so a missing transition means the input is rejected.
#[derive(Debug, Clone)]
pub struct Dfa<S> {
    states: Vec<State<S>>,
}

/// A state of a `Dfa`.
#[derive(Debug, Clone)]
pub struct State<S> {
    regex: Regex<S>,
    nullable: bool,
    transitions: BTreeMap<usize, S>,
}

impl<S> Dfa<S> {
    /// The number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Iterate over the states in order of their index.
    pub fn states(&self) -> slice::Iter<State<S>> {
        self.states.iter()
    }

    /// The state with index `id`, if there is one.
    pub fn state(&self, id: usize) -> Option<&State<S>> {
        self.states.get(id)
    }

    /// The start state.
    pub fn start(&self) -> &State<S> {
        &self.states[0]
    }

    /// Walk the dfa over `word` and check if it ends in an accepting state.
    pub fn accepts<T, I>(&self, alg: &T, word: I) -> bool
    where
        T: Symbols<Set = S>,
        I: IntoIterator<Item = T::Symbol>,
    {
        let mut current = self.start();

        for symbol in word {
            let single = alg.singleton(&symbol);
            let next = current
                .transitions()
                .find(|&(_, label)| alg.contains_all(label, &single))
                .and_then(|(to, _)| self.state(to));

            current = match next {
                Some(state) => state,
                None => return false,
            };
        }

        current.nullable()
    }
}

impl<S> State<S> {
    /// The regular expression that this state matches.
    pub fn regex(&self) -> &Regex<S> {
        &self.regex
    }

    /// Check if this is an accepting state.
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Iterate over the outgoing transitions as (target index, label) pairs.
    pub fn transitions(&self) -> impl Iterator<Item = (usize, &S)> + '_ {
        self.transitions.iter().map(|(to, label)| (*to, label))
    }
}

/// A builder for a `Dfa` that can bound the number of states.
#[derive(Debug, Clone, Default)]
pub struct DfaBuilder {
    state_limit: Option<usize>,
}

impl DfaBuilder {
    /// Create a builder with no limit on the number of states.
    pub fn new() -> DfaBuilder {
        DfaBuilder { state_limit: None }
    }

    /// Fail the build once the dfa would need more than `limit` states.
    pub fn state_limit(mut self, limit: usize) -> DfaBuilder {
        self.state_limit = Some(limit);
        self
    }

    /// Build the dfa for `r` by breadth first exploration of its derivatives.
    ///
    /// # Errors
    /// Returns `DfaError::TooManyStates` if a state limit is set and the dfa
    /// needs more states than that.
    pub fn build<T: SetLike>(
        &self,
        ctx: &RegexContext<T>,
        r: &Regex<T::Set>,
    ) -> Result<Dfa<T::Set>, DfaError> {
        let mut top = Topology::trivial(ctx.algebra());
        let mut states = StateTable::new(self.state_limit);
        let mut queue = VecDeque::new();

        queue.push_back(states.register(r)?.0);

        while let Some(source) = queue.pop_front() {
            let regex = states.regexes[source].clone();
            let mut cache = HashMap::new();

            let derived = ctx.for_each_block(&mut top, |block| {
                if let Some(d) = cache.get(block) {
                    return Ok((block.clone(), Regex::clone(d)));
                }
                let d = ctx.derivative(&regex, block)?;
                cache.insert(block.clone(), d.clone());
                Ok((block.clone(), d))
            });

            let mut transitions = BTreeMap::new();
            for (block, d) in derived {
                if ctx.fast_emptiness(&d) == FastEmptiness::Empty {
                    continue;
                }

                let (target, new) = states.register(&d)?;
                if new {
                    queue.push_back(target);
                }

                match transitions.entry(target) {
                    Entry::Occupied(mut entry) => {
                        let label = ctx.algebra().union(entry.get(), &block);
                        entry.insert(label);
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(block);
                    }
                }
            }

            trace!("state {} has {} transitions", source, transitions.len());
            states.transitions[source] = transitions;
        }

        debug!(
            "built dfa with {} states over {} blocks",
            states.regexes.len(),
            top.len()
        );

        Ok(states.into_dfa())
    }
}

impl<T: SetLike> RegexContext<T> {
    /// Build the dfa for `r` with no limit on the number of states.
    pub fn build_dfa(&self, r: &Regex<T::Set>) -> Dfa<T::Set> {
        match DfaBuilder::new().build(self, r) {
            Ok(dfa) => dfa,
            Err(err) => unreachable!("unbounded dfa construction failed: {}", err),
        }
    }
}

// The states discovered so far, indexed in order of discovery.
struct StateTable<S> {
    ids: HashMap<Regex<S>, usize>,
    regexes: Vec<Regex<S>>,
    transitions: Vec<BTreeMap<usize, S>>,
    limit: Option<usize>,
}

impl<S: Clone + Eq + std::hash::Hash> StateTable<S> {
    fn new(limit: Option<usize>) -> Self {
        StateTable {
            ids: HashMap::new(),
            regexes: Vec::new(),
            transitions: Vec::new(),
            limit,
        }
    }

    // The index of the state for `r` and whether it was newly added.
    fn register(&mut self, r: &Regex<S>) -> Result<(usize, bool), DfaError> {
        if let Some(&id) = self.ids.get(r) {
            return Ok((id, false));
        }

        if let Some(limit) = self.limit {
            if self.regexes.len() >= limit {
                return Err(DfaError::TooManyStates { limit });
            }
        }

        let id = self.regexes.len();
        self.ids.insert(r.clone(), id);
        self.regexes.push(r.clone());
        self.transitions.push(BTreeMap::new());
        Ok((id, true))
    }

    fn into_dfa(self) -> Dfa<S> {
        let states = self
            .regexes
            .into_iter()
            .zip(self.transitions)
            .map(|(regex, transitions)| State {
                nullable: regex.nullable(),
                regex,
                transitions,
            })
            .collect();

        Dfa { states }
    }
}
