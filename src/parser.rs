// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A recursive descent parser for the surface syntax of regular expressions.
//!
//! The syntax is a small subset of the usual one: literal characters, `.`,
//! bracket classes, groups, alternation and the postfix quantifiers `*`, `+`,
//! `?` and `{m,n}`. Bracket classes are taken verbatim, so there are no
//! escapes between `[` and `]`.

use std::char;

use regex_syntax::hir::{self, HirKind};

use crate::class::{Class, ClassAlgebra, Range};
use crate::error::{ParseError, Result};
use crate::regex::{Regex, RegexContext};
use crate::set::SetLike;

/// The `RegexContext` for regular expressions over `char`.
pub type CharContext = RegexContext<ClassAlgebra<char>>;

/// A regular expression over `char`.
pub type CharRegex = Regex<Class<char>>;

const ESCAPED: &str = "\\/[]().|*?+";

// Bounded repetition is expanded into a sequence, so its counts are capped.
const MAX_REPETITION: u32 = 1000;

/// Parse `pattern` into a regular expression.
///
/// # Errors
/// Returns a `ParseError` locating the first syntax error in `pattern`.
pub fn parse(pattern: &str) -> Result<CharRegex> {
    CharContext::default().parse(pattern)
}

impl RegexContext<ClassAlgebra<char>> {
    /// Parse `pattern` into a regular expression made by this context.
    ///
    /// # Errors
    /// Returns a `ParseError` locating the first syntax error in `pattern`.
    pub fn parse(&self, pattern: &str) -> Result<CharRegex> {
        let mut parser = Parser {
            ctx: self,
            pattern,
            chars: pattern.chars().collect(),
            index: 0,
        };

        let r = parser.parse_alt()?;
        match parser.current() {
            None => Ok(r),
            Some(c) => parser.error(format!("Expected end of input but got '{}'", c)),
        }
    }
}

struct Parser<'a> {
    ctx: &'a CharContext,
    pattern: &'a str,
    chars: Vec<char>,
    index: usize,
}

impl<'a> Parser<'a> {
    fn current(&self) -> Option<char> {
        self.chars.get(self.index).cloned()
    }

    fn bump(&mut self) {
        if self.index < self.chars.len() {
            self.index += 1;
        }
    }

    fn error<T, M: Into<String>>(&self, message: M) -> Result<T> {
        Err(ParseError::new(message, self.pattern, self.index))
    }

    // The current char, or an error at the end of input.
    fn next_char(&mut self) -> Result<char> {
        match self.current() {
            Some(c) => {
                self.bump();
                Ok(c)
            }
            None => self.error("Unexpected end of input"),
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.current() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => self.error(format!("Expected '{}' but got '{}'", expected, c)),
            None => self.error(format!("Expected '{}' but got end of input", expected)),
        }
    }

    fn parse_alt(&mut self) -> Result<CharRegex> {
        let mut alternatives = vec![self.parse_seq()?];

        while let Some('|') = self.current() {
            self.bump();
            alternatives.push(self.parse_seq()?);
        }

        Ok(self.ctx.alt(alternatives))
    }

    fn parse_seq(&mut self) -> Result<CharRegex> {
        let mut items = Vec::new();

        loop {
            let item = match self.current() {
                None | Some(')') | Some('|') => break,
                Some('*') => return self.error("Unexpected '*' with nothing to repeat"),
                Some('[') => self.parse_class()?,
                Some('(') => self.parse_group()?,
                Some(_) => self.parse_char()?,
            };
            items.push(self.parse_modifiers(item)?);
        }

        Ok(self.ctx.seq(items))
    }

    fn parse_group(&mut self) -> Result<CharRegex> {
        self.expect('(')?;
        if let Some('?') = self.current() {
            self.bump();
            self.expect(':')?;
        }

        let r = self.parse_alt()?;
        self.expect(')')?;
        Ok(r)
    }

    fn parse_class(&mut self) -> Result<CharRegex> {
        self.expect('[')?;

        let negated = if let Some('^') = self.current() {
            self.bump();
            true
        } else {
            false
        };

        let mut ranges = Vec::new();
        loop {
            let start = match self.current() {
                Some(']') => break,
                _ => self.next_char()?,
            };

            if let Some('-') = self.current() {
                self.bump();
                match self.current() {
                    Some(']') => {
                        ranges.push(Range::new(start, start));
                        ranges.push(Range::new('-', '-'));
                    }
                    _ => {
                        let end = self.next_char()?;
                        ranges.push(Range::new(start, end));
                    }
                }
            } else {
                ranges.push(Range::new(start, start));
            }
        }
        self.expect(']')?;

        let class: Class<char> = ranges.into_iter().collect();
        if negated {
            Ok(self.ctx.literal(self.ctx.algebra().invert(&class)))
        } else {
            Ok(self.ctx.literal(class))
        }
    }

    fn parse_char(&mut self) -> Result<CharRegex> {
        match self.current() {
            Some(']') => self.error("Unexpected ']'"),
            Some('.') => {
                self.bump();
                Ok(self.ctx.all_symbols())
            }
            Some('\\') => {
                self.bump();
                self.parse_escape()
            }
            _ => {
                let c = self.next_char()?;
                Ok(self.ctx.symbol(&c))
            }
        }
    }

    fn parse_escape(&mut self) -> Result<CharRegex> {
        let c = match self.current() {
            Some(c) => c,
            None => return self.error("Unexpected end of input"),
        };

        let symbol = match c {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'd' => {
                self.bump();
                return Ok(self.ctx.literal(unicode_digits()));
            }
            'x' => {
                self.bump();
                return self.parse_code_point(2);
            }
            'u' => {
                self.bump();
                return self.parse_code_point(4);
            }
            c if ESCAPED.contains(c) => c,
            c => return self.error(format!("Unknown escape '\\{}'", c)),
        };

        self.bump();
        Ok(self.ctx.symbol(&symbol))
    }

    fn parse_code_point(&mut self, digits: usize) -> Result<CharRegex> {
        let start = self.index;
        let mut value = 0;

        for _ in 0..digits {
            match self.current().and_then(|c| c.to_digit(16)) {
                Some(digit) => value = value * 16 + digit,
                None => return self.error("Expected a hexadecimal digit"),
            }
            self.bump();
        }

        match char::from_u32(value) {
            Some(c) => Ok(self.ctx.symbol(&c)),
            None => Err(ParseError::new(
                format!("Invalid code point {:X}", value),
                self.pattern,
                start,
            )),
        }
    }

    fn parse_modifiers(&mut self, mut r: CharRegex) -> Result<CharRegex> {
        loop {
            r = match self.current() {
                Some('*') => {
                    self.bump();
                    self.ctx.star(r)
                }
                Some('+') => {
                    self.bump();
                    self.ctx.plus(r)
                }
                Some('?') => {
                    self.bump();
                    self.ctx.opt(r)
                }
                Some('{') => {
                    let start = self.index;
                    self.bump();
                    let (min, max) = self.parse_bounds()?;
                    if let Some(max) = max {
                        if max < min {
                            return Err(ParseError::new(
                                format!("Invalid repetition {{{},{}}}", min, max),
                                self.pattern,
                                start,
                            ));
                        }
                    }
                    self.ctx.rep(r, min, max)
                }
                _ => return Ok(r),
            };
        }
    }

    // The bounds of `{m}`, `{m,}` or `{m,n}` after the opening brace.
    fn parse_bounds(&mut self) -> Result<(u32, Option<u32>)> {
        let min = self.parse_number()?;

        if let Some(',') = self.current() {
            self.bump();
            if let Some('}') = self.current() {
                self.bump();
                return Ok((min, None));
            }
            let max = self.parse_number()?;
            self.expect('}')?;
            Ok((min, Some(max)))
        } else {
            self.expect('}')?;
            Ok((min, Some(min)))
        }
    }

    fn parse_number(&mut self) -> Result<u32> {
        let start = self.index;
        while let Some('0'..='9') = self.current() {
            self.bump();
        }

        let digits: String = self.chars[start..self.index].iter().collect();
        if digits.is_empty() {
            return match self.current() {
                Some(c) => self.error(format!("Expected a number but got '{}'", c)),
                None => self.error("Expected a number but got end of input"),
            };
        }

        match digits.parse() {
            Ok(n) if n <= MAX_REPETITION => Ok(n),
            _ => Err(ParseError::new(
                "Repetition count is too large",
                self.pattern,
                start,
            )),
        }
    }
}

impl RegexContext<ClassAlgebra<char>> {
    fn all_symbols(&self) -> CharRegex {
        self.literal(self.algebra().all())
    }
}

// The Unicode decimal digits (general category Nd).
fn unicode_digits() -> Class<char> {
    let parsed = regex_syntax::Parser::new()
        .parse(r"\d")
        .map(|hir| hir.into_kind());

    match parsed {
        Ok(HirKind::Class(hir::Class::Unicode(class))) => class
            .iter()
            .map(|range| Range::new(range.start(), range.end()))
            .collect(),
        _ => Range::new('0', '9').into(),
    }
}
