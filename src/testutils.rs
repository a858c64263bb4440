// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

// The utility types in this module are used to support tests in more than
// one other module.

use proptest::prelude::*;
use proptest::strategy::Union;

use crate::alphabet::Alphabet;
use crate::class::{Class, ClassAlgebra, Range};
use crate::regex::{Regex, RegexContext, RegexKind};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TestAlpha {
    A,
    B,
    C,
    D,
    E,
}

pub const ALPHABET: [TestAlpha; 5] = [
    TestAlpha::A,
    TestAlpha::B,
    TestAlpha::C,
    TestAlpha::D,
    TestAlpha::E,
];

impl Alphabet for TestAlpha {
    fn min_value() -> Self {
        TestAlpha::A
    }

    fn max_value() -> Self {
        TestAlpha::E
    }

    fn increment(&self) -> Option<Self> {
        use self::TestAlpha::*;

        match self {
            &A => Some(B),
            &B => Some(C),
            &C => Some(D),
            &D => Some(E),
            &E => None,
        }
    }

    fn decrement(&self) -> Option<Self> {
        use self::TestAlpha::*;

        match self {
            &A => None,
            &B => Some(A),
            &C => Some(B),
            &D => Some(C),
            &E => Some(D),
        }
    }
}

pub type TestContext = RegexContext<ClassAlgebra<TestAlpha>>;
pub type TestRegex = Regex<Class<TestAlpha>>;

pub fn test_context() -> TestContext {
    RegexContext::new(ClassAlgebra::new())
}

/// Every word over `TestAlpha` of length at most `max_len`, shortest first.
pub fn words(max_len: usize) -> Vec<Vec<TestAlpha>> {
    let mut result = vec![vec![]];
    let mut last = vec![vec![]];

    for _ in 0..max_len {
        last = last
            .iter()
            .flat_map(|word: &Vec<TestAlpha>| {
                ALPHABET.iter().map(move |c| {
                    let mut next = word.clone();
                    next.push(*c);
                    next
                })
            })
            .collect();
        result.extend(last.iter().cloned());
    }

    result
}

/// Membership by brute force over all the ways of splitting `word`.
pub fn naive_accepts(r: &TestRegex, word: &[TestAlpha]) -> bool {
    match r.kind() {
        RegexKind::Eps => word.is_empty(),
        RegexKind::Empty => false,
        RegexKind::All => true,
        RegexKind::Literal(class) => word.len() == 1 && class.contains(&word[0]),
        RegexKind::Alt(args) => args.iter().any(|a| naive_accepts(a, word)),
        RegexKind::And(args) => args.iter().all(|a| naive_accepts(a, word)),
        RegexKind::Not(inner) => !naive_accepts(inner, word),
        RegexKind::Seq(args) => naive_accepts_seq(args, word),
        RegexKind::Star(inner) => {
            word.is_empty()
                || (1..=word.len())
                    .any(|k| naive_accepts(inner, &word[..k]) && naive_accepts(r, &word[k..]))
        }
    }
}

fn naive_accepts_seq(args: &[TestRegex], word: &[TestAlpha]) -> bool {
    match args.split_first() {
        None => word.is_empty(),
        Some((first, rest)) => (0..=word.len())
            .any(|k| naive_accepts(first, &word[..k]) && naive_accepts_seq(rest, &word[k..])),
    }
}

/// Check the structural invariants that the factory methods maintain.
pub fn is_canonical(r: &TestRegex) -> bool {
    use crate::regex::RegexKind::*;

    let nullable = match r.kind() {
        Eps | All | Star(_) => true,
        Empty | Literal(_) => false,
        Alt(args) => args.iter().any(Regex::nullable),
        Seq(args) | And(args) => args.iter().all(Regex::nullable),
        Not(inner) => !inner.nullable(),
    };
    if nullable != r.nullable() {
        return false;
    }

    let sorted = |args: &[TestRegex]| args.windows(2).all(|w| w[0] < w[1]);
    let literals = |args: &[TestRegex]| {
        args.iter()
            .filter(|a| match a.kind() {
                Literal(_) => true,
                _ => false,
            })
            .count()
    };

    let local = match r.kind() {
        Eps | Empty | All => true,
        Literal(class) => !class.is_empty(),
        Alt(args) => {
            args.len() >= 2
                && sorted(args)
                && literals(args) <= 1
                && args.iter().all(|a| match a.kind() {
                    Empty | All | Alt(_) => false,
                    _ => true,
                })
                && (!args.iter().any(Regex::is_eps)
                    || args.iter().filter(|a| a.nullable()).count() == 1)
        }
        Seq(args) => {
            args.len() >= 2
                && args.iter().all(|a| match a.kind() {
                    Eps | Empty | Seq(_) => false,
                    _ => true,
                })
        }
        And(args) => {
            args.len() >= 2
                && sorted(args)
                && literals(args) <= 1
                && args.iter().all(|a| match a.kind() {
                    Eps | Empty | All | And(_) => false,
                    _ => true,
                })
        }
        Not(inner) => match inner.kind() {
            Eps | Empty | All | Not(_) => false,
            _ => true,
        },
        Star(inner) => match inner.kind() {
            Eps | Empty | All | Star(_) => false,
            Literal(class) => !class.is_complement_empty(),
            Alt(args) => !args.iter().any(Regex::is_eps),
            _ => true,
        },
    };

    local
        && match r.kind() {
            Alt(args) | Seq(args) | And(args) => args.iter().all(is_canonical),
            Not(inner) | Star(inner) => is_canonical(inner),
            _ => true,
        }
}

/// Random regular expressions over `TestAlpha`.
///
/// When `extended` is false the result has no `And` or `Not` terms.
pub fn arb_regex(extended: bool) -> BoxedStrategy<TestRegex> {
    let leaf = prop_oneof![
        1 => Just(test_context().eps()),
        1 => Just(test_context().empty()),
        6 => (0..ALPHABET.len(), 0..ALPHABET.len()).prop_map(|(s, e)| {
            test_context().class(vec![Range::new(ALPHABET[s], ALPHABET[e])])
        }),
    ];

    leaf.prop_recursive(3, 12, 3, move |inner| {
        let mut options = vec![
            prop::collection::vec(inner.clone(), 2..4)
                .prop_map(|v| test_context().seq(v))
                .boxed(),
            prop::collection::vec(inner.clone(), 2..4)
                .prop_map(|v| test_context().alt(v))
                .boxed(),
            inner.clone().prop_map(|r| test_context().star(r)).boxed(),
        ];
        if extended {
            options.push(
                prop::collection::vec(inner.clone(), 2..3)
                    .prop_map(|v| test_context().and(v))
                    .boxed(),
            );
            options.push(inner.prop_map(|r| test_context().not(r)).boxed());
        }
        Union::new(options)
    })
    .boxed()
}
