// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use luther_symbolic::{parse, CharContext};

static DECIMAL_CONST_REGEX: &str =
    r"([1-9][0-9]*|0[0-7]*|0[xX][0-9a-fA-F]+)(([uU]([lL]|ll|LL)?)|(([lL]|ll|LL)[uU]?))?";

fn simple_benchmarks(c: &mut Criterion) {
    c.bench_function("decimal_const_dfa", |b| {
        b.iter(|| {
            let ctx = CharContext::default();
            let r = ctx.parse(DECIMAL_CONST_REGEX).expect("parse error");
            ctx.build_dfa(&r)
        })
    });

    c.bench_function("decimal_const_rebuild", |b| {
        let ctx = CharContext::default();
        let r = ctx.parse(DECIMAL_CONST_REGEX).expect("parse error");
        b.iter(|| ctx.rebuild(&r))
    });

    c.bench_function("intersection_is_empty", |b| {
        let ctx = CharContext::default();
        let lhs = parse("[a-z]*(ab|cd)[a-z]*").expect("parse error");
        let rhs = ctx.not(parse("[a-z]*b[a-z]*").expect("parse error"));
        let rhs = ctx.and(vec![rhs, ctx.not(parse("[a-z]*d[a-z]*").expect("parse error"))]);
        b.iter(|| ctx.intersects(&lhs, &rhs))
    });
}

fn scaling_keyword_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiple_keywords");

    for count in [1usize, 2, 4, 8, 16, 32].iter() {
        group.bench_with_input(BenchmarkId::new("keywords", count), count, |b, &count| {
            b.iter_with_setup(
                || get_keywords().into_iter().take(count).collect::<Vec<_>>(),
                |keywords| {
                    let ctx = CharContext::default();
                    let r = ctx.alt(keywords.iter().map(|k| ctx.string(k.chars())));
                    ctx.build_dfa(&r)
                },
            )
        });
    }

    group.finish();
}

criterion_group!(benches, simple_benchmarks, scaling_keyword_benchmark);
criterion_main!(benches);

fn get_keywords() -> Vec<&'static str> {
    vec![
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
        "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
        "typedef", "union", "unsigned", "void",
    ]
}
