// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

#[macro_use]
extern crate assert_matches;

use luther_symbolic::class::{Class, Range};
use luther_symbolic::dfa::DfaBuilder;
use luther_symbolic::{parse, CharContext, CharRegex, DfaError, RegexKind};

fn ctx() -> CharContext {
    CharContext::default()
}

fn pattern(p: &str) -> CharRegex {
    match parse(p) {
        Ok(r) => r,
        Err(err) => panic!("unable to parse {:?}: {}", p, err),
    }
}

#[test]
fn parsed_alternation_is_equivalent_to_constructed() {
    let c = ctx();
    let expected = c.alt(vec![c.symbol(&'a'), c.symbol(&'b')]);

    let sut = pattern("a|b");

    assert!(c.equiv(&sut, &expected));
}

#[test]
fn parsed_empty_class_and_group_are_empty_and_eps() {
    assert!(pattern("[]").is_null());
    assert!(pattern("()").is_eps());
}

#[test]
fn dfa_for_two_chars_has_three_states() {
    let c = ctx();
    let ab = c.seq(vec![c.symbol(&'a'), c.symbol(&'b')]);

    let dfa = c.build_dfa(&ab);

    assert_eq!(dfa.len(), 3);
    let states: Vec<_> = dfa.states().collect();

    assert_eq!(states[0].regex(), &ab);
    assert!(!states[0].nullable());
    let start: Vec<_> = states[0].transitions().collect();
    assert_eq!(start, vec![(1, &Class::single('a'))]);

    assert_eq!(states[1].regex(), &c.symbol(&'b'));
    assert!(!states[1].nullable());
    let middle: Vec<_> = states[1].transitions().collect();
    assert_eq!(middle, vec![(2, &Class::single('b'))]);

    assert!(states[2].regex().is_eps());
    assert!(states[2].nullable());
    assert_eq!(states[2].transitions().count(), 0);
}

#[test]
fn dfa_for_two_chars_rejects_other_input() {
    let c = ctx();
    let dfa = c.build_dfa(&pattern("ab"));

    assert!(dfa.accepts(c.algebra(), "ab".chars()));
    assert!(!dfa.accepts(c.algebra(), "ac".chars()));
    assert!(!dfa.accepts(c.algebra(), "b".chars()));
    assert!(!dfa.accepts(c.algebra(), "abb".chars()));
}

#[test]
fn star_of_b_and_mandatory_d_is_empty() {
    let c = ctx();
    let b_star = c.star(c.symbol(&'b'));
    let r = c.and(vec![b_star.clone(), c.seq(vec![b_star, c.symbol(&'d')])]);

    assert!(c.equiv(&r, &c.empty()));
    assert!(c.is_empty(&r));
}

#[test]
fn plus_includes_single_but_not_reverse() {
    let c = ctx();
    let a = c.symbol(&'a');
    let a_plus = c.plus(a.clone());

    assert!(c.includes(&a_plus, &a));
    assert!(!c.includes(&a, &a_plus));
}

#[test]
fn star_is_equivalent_to_optional_star() {
    let c = ctx();
    let c_star = c.star(c.symbol(&'c'));

    assert!(c.equiv(&c_star, &c.opt(c_star.clone())));
}

#[test]
fn parsed_patterns_round_trip_through_dfa() {
    let c = ctx();
    let patterns = [
        "",
        "[]",
        "abc",
        "(ab|ac)*d",
        "[0-9]+(\\.[0-9]*)?",
        "a{2,4}b?",
        "(a|b)*abb",
        "[^a-c]x|y",
    ];

    for p in patterns.iter() {
        let r = pattern(p);

        let rebuilt = c.rebuild(&r);

        assert!(c.equiv(&r, &rebuilt), "pattern {:?} rebuilt as {}", p, rebuilt);
    }
}

#[test]
fn rebuild_of_intersection_removes_and() {
    let c = ctx();
    let r = c.and(vec![pattern("[a-c]*"), c.not(pattern("(.)*b(.)*"))]);

    let rebuilt = c.rebuild(&r);

    assert!(c.equiv(&rebuilt, &pattern("[ac]*")));
    assert!(c.fast_first_set(&rebuilt).is_some());
}

#[test]
fn matches_agrees_with_dfa_walk() {
    let c = ctx();
    let patterns = ["(ab|ac)*d", "a{2,4}b?", "[^a-c]x|y", "(a|b)*abb"];
    let words = ["", "d", "abd", "abacd", "aa", "aaaab", "aaaaa", "zx", "ax", "y", "abb", "babb", "ab"];

    for p in patterns.iter() {
        let r = pattern(p);
        let dfa = c.build_dfa(&r);

        for w in words.iter() {
            assert_eq!(
                c.matches(&r, w.chars()),
                dfa.accepts(c.algebra(), w.chars()),
                "pattern {:?} on {:?}",
                p,
                w
            );
        }
    }
}

#[test]
fn matches_decimal_number() {
    let c = ctx();
    let r = pattern("[0-9]+(\\.[0-9]*)?");

    assert!(c.matches(&r, "12".chars()));
    assert!(c.matches(&r, "12.".chars()));
    assert!(c.matches(&r, "12.5".chars()));
    assert!(!c.matches(&r, ".5".chars()));
    assert!(!c.matches(&r, "1.2.3".chars()));
}

#[test]
fn dfa_transition_labels_are_disjoint() {
    let c = ctx();
    let dfa = c.build_dfa(&pattern("(if|[a-z][a-z0-9]*|[0-9]+)"));

    for state in dfa.states() {
        let labels: Vec<_> = state.transitions().map(|(_, label)| label).collect();
        for (i, first) in labels.iter().enumerate() {
            for second in labels[i + 1..].iter() {
                assert!(first.intersect(second).is_empty());
            }
        }
    }
}

#[test]
fn first_sets_of_keyword_or_number() {
    let c = ctx();
    let r = pattern("if|[0-9]+");

    let sut = c.first_sets(&r, 3);

    let digits = Class::from(Range::new('0', '9'));
    assert_eq!(sut[0], digits.union(&Class::single('i')));
    assert_eq!(sut[1], digits.union(&Class::single('f')));
    assert_eq!(sut[2], digits);
}

#[test]
fn intersects_keyword_and_identifier() {
    let c = ctx();

    assert!(c.intersects(&pattern("if"), &pattern("[a-z]+")));
    assert!(!c.intersects(&pattern("if"), &pattern("[0-9]+")));
}

#[test]
fn state_limit_stops_large_dfa() {
    let c = ctx();
    let r = pattern("(a|b)*a(a|b)(a|b)(a|b)");

    let limited = DfaBuilder::new().state_limit(4).build(&c, &r);
    let unlimited = DfaBuilder::new().build(&c, &r);

    assert_matches!(limited, Err(DfaError::TooManyStates { limit: 4 }));
    assert_matches!(unlimited, Ok(ref dfa) if dfa.len() > 4);
}

#[test]
fn parse_error_reports_position_and_context() {
    let sut = parse("ab(cd");

    assert_matches!(sut, Err(ref err) => {
        assert_eq!(err.offset(), 5);
        assert_eq!(err.to_string(), "Expected ')' but got end of input at index 5\nab(cd\n     ^");
    });
}

#[test]
fn parsed_dot_star_is_all() {
    let r = pattern(".*");

    assert_matches!(r.kind(), RegexKind::All);
}
