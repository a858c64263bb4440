// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Regular expression types.
//!
//! The types in this module provide a representation of the extended regular
//! expressions supported by `luther_symbolic`. The key types are
//! `RegexContext<T>`, `Regex<S>` and `RegexKind<S>`.
//!
//! The regular expressions are generic over the representation `S` of the
//! sets of symbols that their literals match. The operations on those sets
//! come from a `SetLike` algebra `T` that is owned by the `RegexContext<T>`.
//!
//! `RegexContext<T>` is a factory for creating `Regex<S>` and has factory
//! methods for each variant of `RegexKind<S>`. There is no means of creating a
//! `Regex<S>` directly from a `RegexKind<S>`. The required use of factory
//! methods allows for maintaining the regular expressions in canonical form.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::iter;
use std::sync::Arc;

use itertools::Itertools;

use crate::alphabet::Alphabet;
use crate::class::{Class, ClassAlgebra, Range};
use crate::set::{SetLike, Symbols};

/// A context for creating regular expressions.
///
/// The factory methods in `RegexContext` create different kinds of `Regex` but
/// also maintain those `Regex` in canonical form. The need to maintain the
/// regular expressions in canonical form is why there is no means of creating
/// a `Regex` from a `RegexKind`.
///
/// The context is also where the derivative, the decision procedures and the
/// dfa construction live, since all of them need the set algebra.
///
/// # Type Parameter
/// - T: the algebra of the symbol sets that label literals
pub struct RegexContext<T: SetLike> {
    alg: T,
    eps: Regex<T::Set>,
    empty: Regex<T::Set>,
    all: Regex<T::Set>,
}

impl<T: SetLike> RegexContext<T> {
    /// Create a new `RegexContext` over the algebra `alg`.
    pub fn new(alg: T) -> RegexContext<T> {
        RegexContext {
            alg,
            eps: Regex::new(RegexKind::Eps),
            empty: Regex::new(RegexKind::Empty),
            all: Regex::new(RegexKind::All),
        }
    }

    /// The symbol set algebra of this context.
    pub fn algebra(&self) -> &T {
        &self.alg
    }

    /// Create the `Regex` that matches only the empty string.
    pub fn eps(&self) -> Regex<T::Set> {
        self.eps.clone()
    }

    /// Create the `Regex` that matches nothing.
    pub fn empty(&self) -> Regex<T::Set> {
        self.empty.clone()
    }

    /// Create the `Regex` that matches every string.
    pub fn all(&self) -> Regex<T::Set> {
        self.all.clone()
    }

    /// Create a literal `Regex`.
    ///
    /// The literal matches a single symbol from `set`. An empty `set` gives
    /// the `Regex` that matches nothing.
    pub fn literal(&self, set: T::Set) -> Regex<T::Set> {
        if self.alg.is_empty(&set) {
            self.empty()
        } else {
            Regex::new(RegexKind::Literal(set))
        }
    }

    /// Create a concatenation `Regex`.
    ///
    /// The concatenation matches each of `args` in sequence. Nested
    /// concatenations are flattened and `eps` terms dropped; any `empty` term
    /// makes the whole concatenation `empty`.
    pub fn seq<I>(&self, args: I) -> Regex<T::Set>
    where
        I: IntoIterator<Item = Regex<T::Set>>,
    {
        let mut flat = Vec::new();

        for arg in args {
            match arg.kind() {
                RegexKind::Eps => {}
                RegexKind::Empty => return self.empty(),
                RegexKind::Seq(inner) => flat.extend(inner.iter().cloned()),
                _ => flat.push(arg.clone()),
            }
        }

        if flat.len() <= 1 {
            return flat.pop().unwrap_or_else(|| self.eps());
        }

        Regex::new(RegexKind::Seq(flat))
    }

    /// Create an alternation (or logical-or) `Regex`.
    ///
    /// The alternation matches any of `args`. Nested alternations are
    /// flattened, literal alternatives are merged into one literal, and the
    /// remaining alternatives are put in a canonical order without duplicates.
    pub fn alt<I>(&self, args: I) -> Regex<T::Set>
    where
        I: IntoIterator<Item = Regex<T::Set>>,
    {
        let mut acc = Alternatives::new();
        for arg in args {
            match arg.kind() {
                RegexKind::Alt(inner) => inner.iter().for_each(|r| acc.push(&self.alg, r)),
                _ => acc.push(&self.alg, &arg),
            }
        }

        if acc.all {
            return self.all();
        }

        let Alternatives {
            mut members,
            set,
            eps,
            ..
        } = acc;

        if let Some(set) = set {
            members.insert(self.literal(set));
        }
        // ε is redundant beside any other nullable alternative
        if eps && !members.iter().any(Regex::nullable) {
            members.insert(self.eps());
        }

        self.make_variadic(members, RegexKind::Alt, || self.empty())
    }

    /// Create a logical-and `Regex`.
    ///
    /// The and regular expression matches the strings that all of `args`
    /// match. Literal arguments are intersected into one literal, and an
    /// intersection that is syntactically empty collapses to `empty` (or to
    /// `eps` when every argument is nullable).
    pub fn and<I>(&self, args: I) -> Regex<T::Set>
    where
        I: IntoIterator<Item = Regex<T::Set>>,
    {
        let mut members = BTreeSet::new();
        let mut set: Option<T::Set> = None;
        let mut eps = false;

        let flat = args.into_iter().flat_map(|arg| match arg.kind() {
            RegexKind::And(inner) => inner.clone(),
            _ => vec![arg.clone()],
        });
        for arg in flat {
            match arg.kind() {
                RegexKind::Empty => return self.empty(),
                RegexKind::All => {}
                RegexKind::Eps => eps = true,
                RegexKind::Literal(s) => {
                    set = Some(match set {
                        Some(prev) => self.alg.intersect(&prev, s),
                        None => s.clone(),
                    })
                }
                _ => {
                    members.insert(arg.clone());
                }
            }
        }

        let all_nullable = set.is_none() && members.iter().all(Regex::nullable);
        if eps {
            return if all_nullable { self.eps() } else { self.empty() };
        }

        // Every non-empty string in the intersection starts with a symbol in
        // each argument's first set.
        let first = members
            .iter()
            .filter_map(|m| self.fast_first_set(m))
            .chain(set.iter().cloned())
            .reduce(|a, b| self.alg.intersect(&a, &b));
        if let Some(first) = first {
            if self.alg.is_empty(&first) {
                return if all_nullable { self.eps() } else { self.empty() };
            }
        }

        if let Some(set) = set {
            members.insert(self.literal(set));
        }

        self.make_variadic(members, RegexKind::And, || self.all())
    }

    /// Create a complement (or negation) `Regex`.
    ///
    /// The complement regular expression matches everything that the supplied
    /// `other` regular expression does not match.
    pub fn not(&self, other: Regex<T::Set>) -> Regex<T::Set> {
        match other.kind() {
            RegexKind::Empty => self.all(),
            RegexKind::All => self.empty(),
            RegexKind::Eps => self.seq(vec![self.literal(self.alg.all()), self.all()]),
            RegexKind::Not(inner) => inner.clone(),
            _ => Regex::new(RegexKind::Not(other)),
        }
    }

    /// Create a repetition `Regex`.
    ///
    /// The repetition regular expression matches 0 or more occurrences of
    /// the `other` regular expression (kleene star).
    pub fn star(&self, other: Regex<T::Set>) -> Regex<T::Set> {
        match other.kind() {
            RegexKind::Eps | RegexKind::Empty => self.eps(),
            RegexKind::All | RegexKind::Star(_) => other,
            RegexKind::Literal(set) if self.alg.is_empty(&self.alg.invert(set)) => self.all(),
            RegexKind::Alt(args) if args.iter().any(Regex::is_eps) => {
                let rest = args.iter().filter(|r| !r.is_eps()).cloned();
                self.star(self.alt(rest))
            }
            _ => Regex::new(RegexKind::Star(other)),
        }
    }

    /// Create a `Regex` that matches one or more occurrences of `other`.
    pub fn plus(&self, other: Regex<T::Set>) -> Regex<T::Set> {
        match other.kind() {
            RegexKind::Eps | RegexKind::Empty | RegexKind::All | RegexKind::Star(_) => other,
            _ => self.seq(vec![other.clone(), self.star(other)]),
        }
    }

    /// Create a `Regex` that matches `other` or the empty string.
    pub fn opt(&self, other: Regex<T::Set>) -> Regex<T::Set> {
        match other.kind() {
            RegexKind::Eps | RegexKind::Empty => self.eps(),
            RegexKind::All => other,
            _ => self.alt(vec![other, self.eps()]),
        }
    }

    /// Create a `Regex` that matches between `min` and `max` occurrences of
    /// `other`.
    ///
    /// A `max` of `None` leaves the repetition unbounded. If `max` is less
    /// than `min` nothing can match and the result is `empty`.
    ///
    /// The repetition is expanded into a sequence of `max` (or `min + 1`)
    /// members, so large counts are expensive.
    pub fn rep(&self, other: Regex<T::Set>, min: u32, max: Option<u32>) -> Regex<T::Set> {
        let required = iter::repeat(other.clone()).take(min as usize);

        match max {
            None => self.seq(required.chain(iter::once(self.star(other)))),
            Some(max) if max < min => self.empty(),
            Some(max) => {
                let optional = iter::repeat(self.opt(other)).take((max - min) as usize);
                self.seq(required.chain(optional))
            }
        }
    }

    fn make_variadic<F, E>(
        &self,
        members: BTreeSet<Regex<T::Set>>,
        kind: F,
        none: E,
    ) -> Regex<T::Set>
    where
        F: FnOnce(Vec<Regex<T::Set>>) -> RegexKind<T::Set>,
        E: FnOnce() -> Regex<T::Set>,
    {
        let mut members: Vec<_> = members.into_iter().collect();
        match members.len() {
            0 => none(),
            1 => members.pop().unwrap_or_else(none),
            _ => Regex::new(kind(members)),
        }
    }
}

impl<T: Symbols> RegexContext<T> {
    /// Create a `Regex` that matches the single symbol `symbol`.
    pub fn symbol(&self, symbol: &T::Symbol) -> Regex<T::Set> {
        self.literal(self.alg.singleton(symbol))
    }

    /// Create a `Regex` that matches exactly the sequence of symbols `word`.
    pub fn string<I>(&self, word: I) -> Regex<T::Set>
    where
        I: IntoIterator<Item = T::Symbol>,
    {
        self.seq(word.into_iter().map(|s| self.symbol(&s)))
    }
}

impl<A: Alphabet> RegexContext<ClassAlgebra<A>> {
    /// Create a character class `Regex`.
    ///
    /// The class regular expression matches a single character from one of the
    /// ranges specified by `ranges`. Passing an empty iterator for `ranges`
    /// gives the regular expression that matches nothing.
    pub fn class<I>(&self, ranges: I) -> Regex<Class<A>>
    where
        I: IntoIterator<Item = Range<A>>,
    {
        self.literal(ranges.into_iter().collect())
    }
}

impl<T: SetLike + Default> Default for RegexContext<T> {
    fn default() -> Self {
        RegexContext::new(T::default())
    }
}

impl<T: SetLike + Debug> Debug for RegexContext<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RegexContext").field("alg", &self.alg).finish()
    }
}

// Accumulates the alternatives of an alternation in canonical form.
struct Alternatives<S> {
    members: BTreeSet<Regex<S>>,
    set: Option<S>,
    eps: bool,
    all: bool,
}

impl<S: Clone + Ord> Alternatives<S> {
    fn new() -> Self {
        Alternatives {
            members: BTreeSet::new(),
            set: None,
            eps: false,
            all: false,
        }
    }

    fn push<T: SetLike<Set = S>>(&mut self, alg: &T, r: &Regex<S>) {
        match r.kind() {
            RegexKind::Empty => {}
            RegexKind::Eps => self.eps = true,
            RegexKind::All => self.all = true,
            RegexKind::Literal(s) => {
                self.set = Some(match self.set.take() {
                    Some(prev) => alg.union(&prev, s),
                    None => s.clone(),
                })
            }
            _ => {
                self.members.insert(r.clone());
            }
        }
    }
}

/// A regular expression.
///
/// A `Regex` is created by the factory methods in `RegexContext`. It is not
/// possible to create a `Regex` directly, nor from a `RegexKind`, which lets
/// `RegexContext` keep every `Regex` in canonical form.
///
/// A `Regex` is immutable and cheap to clone. Equality, ordering and hashing
/// are structural, so two `Regex` built the same way from the same parts are
/// equal wherever they came from.
pub struct Regex<S> {
    node: Arc<Node<S>>,
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Node<S> {
    kind: RegexKind<S>,
    nullable: bool,
}

impl<S> Regex<S> {
    fn new(kind: RegexKind<S>) -> Regex<S> {
        use self::RegexKind::*;

        let nullable = match kind {
            Eps | All | Star(_) => true,
            Empty | Literal(_) => false,
            Alt(ref args) => args.iter().any(Regex::nullable),
            Seq(ref args) | And(ref args) => args.iter().all(Regex::nullable),
            Not(ref inner) => !inner.nullable(),
        };

        Regex {
            node: Arc::new(Node { kind, nullable }),
        }
    }

    /// Get the kind of the regular expression.
    pub fn kind(&self) -> &RegexKind<S> {
        &self.node.kind
    }

    /// Check if the regular expression matches the empty string.
    pub fn nullable(&self) -> bool {
        self.node.nullable
    }

    /// Check if this is the regular expression that matches nothing.
    pub fn is_null(&self) -> bool {
        match self.kind() {
            RegexKind::Empty => true,
            _ => false,
        }
    }

    /// Check if this is the regular expression that matches only the empty
    /// string.
    pub fn is_eps(&self) -> bool {
        match self.kind() {
            RegexKind::Eps => true,
            _ => false,
        }
    }

    /// Check if this is the regular expression that matches every string.
    pub fn is_all(&self) -> bool {
        match self.kind() {
            RegexKind::All => true,
            _ => false,
        }
    }
}

impl<S> Clone for Regex<S> {
    fn clone(&self) -> Self {
        Regex {
            node: self.node.clone(),
        }
    }
}

impl<S: PartialEq> PartialEq for Regex<S> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node) || self.node == other.node
    }
}

impl<S: Eq> Eq for Regex<S> {}

impl<S: PartialOrd> PartialOrd for Regex<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if Arc::ptr_eq(&self.node, &other.node) {
            Some(Ordering::Equal)
        } else {
            self.node.partial_cmp(&other.node)
        }
    }
}

impl<S: Ord> Ord for Regex<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        if Arc::ptr_eq(&self.node, &other.node) {
            Ordering::Equal
        } else {
            self.node.cmp(&other.node)
        }
    }
}

impl<S: Hash> Hash for Regex<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state)
    }
}

impl<S: Debug> Debug for Regex<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(self.kind(), f)
    }
}

impl<S: Display> Display for Regex<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self.kind(), f)
    }
}

/// The kind of a regular expression.
///
/// # Type Parameter
/// - S: the representation of the symbol sets that label literals
#[derive(Debug, PartialEq, PartialOrd, Ord, Hash, Eq, Clone)]
pub enum RegexKind<S> {
    /// The regular expression which matches only the empty string.
    Eps,

    /// The regular expression which matches nothing.
    Empty,

    /// The regular expression which matches every string.
    All,

    /// A regular expression which matches one symbol from a non-empty set.
    Literal(S),

    /// A regular expression which matches any of at least two alternatives.
    Alt(Vec<Regex<S>>),

    /// A regular expression which matches at least two regular expressions in
    /// sequence.
    Seq(Vec<Regex<S>>),

    /// A regular expression which matches what each of at least two regular
    /// expressions matches.
    And(Vec<Regex<S>>),

    /// A regular expression which matches the complement (or negation) of a
    /// different regular expression.
    Not(Regex<S>),

    /// A regular expression which matches 0 or more instances of a different
    /// regular expression.
    Star(Regex<S>),
}

impl<S: Display> Display for RegexKind<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::RegexKind::*;

        match self {
            Eps => write!(f, "Eps"),
            Empty => write!(f, "Empty"),
            All => write!(f, "All"),
            Literal(set) => write!(f, "{}", set),
            Alt(args) => write!(f, "Alt({})", args.iter().join(", ")),
            Seq(args) => write!(f, "Seq({})", args.iter().join(", ")),
            And(args) => write!(f, "And({})", args.iter().join(", ")),
            Not(inner) => write!(f, "Not({})", inner),
            Star(inner) => write!(f, "Star({})", inner),
        }
    }
}
