// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A library for reasoning about extended regular expressions.
//!
//! The regular expressions support intersection (`and`) and complement
//! (`not`) alongside the usual operators, and are generic over the sets of
//! symbols that label their literals. Everything is built on Brzozowski
//! derivatives taken with respect to the blocks of a partition of the
//! alphabet that is refined only as far as a computation needs. On top of
//! that the library offers:
//!
//! - decision procedures: emptiness, equivalence, inclusion and intersection,
//! - the sets of symbols that can appear at each position of a match,
//! - construction of a deterministic finite automaton, and
//! - conversion of that automaton back to a regular expression.
//!
//! ```
//! use luther_symbolic::parse;
//!
//! let r = parse("(ab)*").unwrap();
//! let ctx = luther_symbolic::CharContext::default();
//!
//! assert!(ctx.matches(&r, "abab".chars()));
//! assert_eq!(ctx.build_dfa(&r).len(), 2);
//! ```

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

pub mod alphabet;
pub mod class;
pub mod derivative;
pub mod dfa;
pub mod regex;
pub mod set;
pub mod topology;

mod arden;
mod decide;
mod error;
mod parser;

#[cfg(test)]
mod testutils;

pub use crate::error::{DfaError, ParseError, Result};
pub use crate::parser::{parse, CharContext, CharRegex};
pub use crate::regex::{Regex, RegexContext, RegexKind};
