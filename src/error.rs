// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::fmt::{self, Display};
use std::result;

use failure::Fail;

const CONTEXT_WIDTH: usize = 5;

/// The error type for parsing the surface syntax of a regular expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
    input: String,
    offset: usize,
}

impl ParseError {
    pub(crate) fn new<M: Into<String>>(message: M, input: &str, offset: usize) -> ParseError {
        ParseError {
            message: message.into(),
            input: input.to_string(),
            offset,
        }
    }

    /// A description of what went wrong.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The text that was being parsed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The offset (in `char`'s) into the input at which the error occurred.
    pub fn offset(&self) -> usize {
        self.offset
    }

    // The input near the offset, and a caret under the offending char.
    fn context(&self) -> (String, String) {
        let start = self.offset.saturating_sub(CONTEXT_WIDTH);
        let window = self
            .input
            .chars()
            .skip(start)
            .take(self.offset - start + CONTEXT_WIDTH)
            .collect();
        let caret = format!("{}^", " ".repeat(self.offset - start));

        (window, caret)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (window, caret) = self.context();
        write!(
            f,
            "{} at index {}\n{}\n{}",
            self.message, self.offset, window, caret
        )
    }
}

impl Fail for ParseError {}

/// The error type for building a `Dfa` with a configured `DfaBuilder`.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum DfaError {
    /// The dfa needs more states than the builder allows.
    #[fail(display = "The dfa needs more than the limit of {} states.", limit)]
    TooManyStates {
        /// The configured limit.
        limit: usize,
    },
}

/// A specialized Result type for parsing regular expressions.
pub type Result<T> = result::Result<T, ParseError>;
