//! Single pass parser for polynomials written as a sum of signed terms, like
//! `3x^2 + 2x - 5` or, as printed back, `3x²+2x-5`.
//!
//! Each term is an optional coefficient, optionally followed by the variable
//! symbol, optionally followed by its power (`^7` or `⁷`). Whitespace is
//! allowed between every token. A term without coefficient has coefficient 1,
//! and a variable without power has power 1.

use std::str::FromStr;

use log::{debug, trace};

use super::{display::from_superscript, variable::Variable, Coefficient, Polynomial, Power, Term};
use crate::error::{InvalidPolynomialError, ParseErrorKind};

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Skips whitespace and returns the next character, without consuming it.
    fn peek_token(&mut self) -> Option<char> {
        while self.peek().map_or(false, char::is_whitespace) {
            self.bump();
        }
        self.peek()
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while self.peek().map_or(false, &pred) {
            self.bump();
        }
        self.pos - start
    }

    fn error(&self, kind: ParseErrorKind) -> InvalidPolynomialError {
        InvalidPolynomialError {
            position: self.pos,
            kind,
        }
    }

    /// Reads a number glued to its optional sign, in the usual decimal
    /// notation. On `None`, nothing was consumed.
    ///
    /// The `e` exponent notation is only tried if `with_exponent` is set, so
    /// that it doesn't eat a variable called `e`.
    fn scan_coefficient<C: Coefficient>(
        &mut self,
        with_exponent: bool,
    ) -> Result<Option<C>, InvalidPolynomialError> {
        let start = self.pos;

        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }

        let mut digits = self.eat_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') {
            self.bump();
            digits += self.eat_while(|c| c.is_ascii_digit());
        }

        if digits == 0 {
            self.pos = start;
            return Ok(None);
        }

        if with_exponent && matches!(self.peek(), Some('e' | 'E')) {
            let mark = self.pos;
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if self.eat_while(|c| c.is_ascii_digit()) == 0 {
                self.pos = mark;
            }
        }

        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse().map(Some).map_err(|_| InvalidPolynomialError {
            position: start,
            kind: ParseErrorKind::MalformedCoefficient,
        })
    }

    /// Reads a run of digits, as mapped to ASCII by `digit`, into a power.
    /// The largest value of `P` is out of range, as its term would have no
    /// integral.
    fn scan_power<P: Power>(
        &mut self,
        digit: impl Fn(char) -> Option<char>,
    ) -> Result<Option<P>, InvalidPolynomialError> {
        let start = self.pos;

        let mut text = String::new();
        while let Some(d) = self.peek().and_then(&digit) {
            text.push(d);
            self.bump();
        }

        if text.is_empty() {
            return Ok(None);
        }

        match text.parse::<P>() {
            Ok(power) if power != P::max_value() => Ok(Some(power)),
            _ => Err(InvalidPolynomialError {
                position: start,
                kind: ParseErrorKind::ExponentOutOfRange,
            }),
        }
    }
}

impl<V, C, P> FromStr for Polynomial<V, C, P>
where
    V: Variable,
    C: Coefficient,
    P: Power,
{
    type Err = InvalidPolynomialError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut scanner = Scanner::new(input);
        let with_exponent = !V::matches('e');
        let mut terms: Vec<Term<V, C, P>> = Vec::new();

        while let Some(first) = scanner.peek_token() {
            let start = scanner.pos;

            let (coefficient, has_coefficient) =
                match scanner.scan_coefficient::<C>(with_exponent)? {
                    Some(c) => (c, true),
                    None if first == '+' || first == '-' => {
                        // Sign apart from its number, or sign of a bare variable.
                        scanner.bump();
                        let sign = if first == '-' { -C::one() } else { C::one() };
                        match scanner.peek_token() {
                            Some(c) if c.is_ascii_digit() || c == '.' => {
                                let value = scanner
                                    .scan_coefficient::<C>(with_exponent)?
                                    .ok_or_else(|| scanner.error(ParseErrorKind::DanglingSign))?;
                                (sign * value, true)
                            }
                            Some(c) if V::matches(c) => (sign, true),
                            _ => return Err(scanner.error(ParseErrorKind::DanglingSign)),
                        }
                    }
                    None => (C::one(), false),
                };

            match scanner.peek_token() {
                Some(c) if V::matches(c) => scanner.bump(),
                _ if has_coefficient => {
                    let term = Term::new_constant(coefficient);
                    trace!("constant term {} at {}", term, start);
                    terms.push(term);
                    continue;
                }
                _ => return Err(scanner.error(ParseErrorKind::UnexpectedCharacter(first))),
            }

            let power = match scanner.peek_token() {
                Some('^') => {
                    scanner.bump();
                    scanner.peek_token();
                    scanner
                        .scan_power(|c| c.is_ascii_digit().then_some(c))?
                        .ok_or_else(|| scanner.error(ParseErrorKind::MissingExponent))?
                }
                Some(c) if from_superscript(c).is_some() => scanner
                    .scan_power(from_superscript)?
                    .ok_or_else(|| scanner.error(ParseErrorKind::MissingExponent))?,
                _ => P::one(),
            };

            let term = Term::new(coefficient, power);
            trace!("term {} at {}", term, start);
            terms.push(term);
        }

        let polynomial = Polynomial::from_terms(terms);
        debug!("parsed {:?} as {:?}", input, polynomial.to_string());

        Ok(polynomial)
    }
}
