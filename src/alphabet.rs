// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Trait to define the alphabets that symbol classes range over.

use std::{char, fmt::Debug, hash::Hash};

/// Required functionality for the element type of a `Class`.
///
/// The alphabet is required to have a total order, maximum and minimum
/// elements, and the ability to step to the neighbouring elements. This is
/// what lets a `Class` be stored as a list of inclusive ranges and still
/// compute an exact complement.
pub trait Alphabet: Ord + Clone + Hash + Debug {
    /// The minimum value in the alphabet.
    fn min_value() -> Self;

    /// The maximum value in the alphabet.
    fn max_value() -> Self;

    /// Return the next element (None if this is already max_value()).
    fn increment(&self) -> Option<Self>;

    /// Return the previous element (None if this is already min_value()).
    fn decrement(&self) -> Option<Self>;
}

impl Alphabet for u8 {
    fn min_value() -> Self {
        u8::MIN
    }

    fn max_value() -> Self {
        u8::MAX
    }

    fn increment(&self) -> Option<Self> {
        self.checked_add(1)
    }

    fn decrement(&self) -> Option<Self> {
        self.checked_sub(1)
    }
}

const LAST_BEFORE_SURROGATE: char = '\u{D7FF}';
const FIRST_AFTER_SURROGATE: char = '\u{E000}';
const ZERO_CHAR: char = '\u{0000}';

impl Alphabet for char {
    fn min_value() -> Self {
        ZERO_CHAR
    }

    fn max_value() -> Self {
        char::MAX
    }

    // The surrogate block [0xD800, 0xDFFF] is skipped in both directions.
    fn increment(&self) -> Option<Self> {
        match *self {
            char::MAX => None,
            LAST_BEFORE_SURROGATE => Some(FIRST_AFTER_SURROGATE),
            c => char::from_u32(c as u32 + 1),
        }
    }

    fn decrement(&self) -> Option<Self> {
        match *self {
            ZERO_CHAR => None,
            FIRST_AFTER_SURROGATE => Some(LAST_BEFORE_SURROGATE),
            c => char::from_u32(c as u32 - 1),
        }
    }
}
