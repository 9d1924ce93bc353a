//! Parsing of the reconstruction form.
//!
//! The `Debug` output of [`Gf2k`], [`Monomial`] and [`Polynomial`] reads like
//! the constructor call that produces the value:
//!
//! ```text
//! Gf2k::new(256, 0x11d, 0x2)
//! Monomial::new(Gf2k::new(256, 0x11d, 0x2), 5, 3)
//! Polynomial::new(Gf2k::new(256, 0x11d, 0x2), [3, 1, 4])
//! ```
//!
//! This module implements [`FromStr`] for all three so that the text can be
//! turned back into an equal value. Parsed values go through the same
//! validating constructors as values built in code.
//!
//! ```
//! use gf2k::{Gf2k, Polynomial};
//!
//! let p = Polynomial::new(&Gf2k::default(), &[3, 1, 4]).unwrap();
//! let text = format!("{p:?}");
//! assert_eq!(text.parse::<Polynomial>().unwrap(), p);
//! ```

use std::str::FromStr;

use crate::algebra::{Monomial, Polynomial};
use crate::error::{Error, Result};
use crate::gf::Gf2k;

/// A hand-written scanner over the reconstruction grammar.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_whitespace();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &str) -> Result<()> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.error(&format!("expected `{token}`")))
        }
    }

    fn integer(&mut self) -> Result<u64> {
        self.skip_whitespace();
        let rest = self.rest();
        let (digits, radix, prefix) = match rest
            .strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
        {
            Some(hex) => (hex, 16, 2),
            None => (rest, 10, 0),
        };
        let len = digits
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(digits.len());
        if len == 0 {
            return Err(self.error("expected an integer"));
        }
        let value = u64::from_str_radix(&digits[..len], radix)
            .map_err(|err| self.error(&format!("invalid integer: {err}")))?;
        self.pos += prefix + len;
        Ok(value)
    }

    fn u32(&mut self) -> Result<u32> {
        let value = self.integer()?;
        u32::try_from(value).map_err(|_| self.error(&format!("{value} does not fit in 32 bits")))
    }

    fn usize(&mut self) -> Result<usize> {
        let value = self.integer()?;
        usize::try_from(value).map_err(|_| self.error(&format!("{value} is too large")))
    }

    fn element(&mut self, field: &Gf2k) -> Result<u8> {
        let value = self.u32()?;
        field.element(value)
    }

    fn field(&mut self) -> Result<Gf2k> {
        self.expect("Gf2k::new")?;
        self.expect("(")?;
        let size = self.u32()?;
        self.expect(",")?;
        let poly = self.u32()?;
        self.expect(",")?;
        let generator = self.u32()?;
        self.expect(")")?;
        Gf2k::new(size, poly, generator)
    }

    fn monomial(&mut self) -> Result<Monomial> {
        self.expect("Monomial::new")?;
        self.expect("(")?;
        let field = self.field()?;
        self.expect(",")?;
        let coefficient = self.element(&field)?;
        self.expect(",")?;
        let degree = self.usize()?;
        self.expect(")")?;
        Monomial::new(&field, coefficient, degree)
    }

    fn polynomial(&mut self) -> Result<Polynomial> {
        self.expect("Polynomial::new")?;
        self.expect("(")?;
        let field = self.field()?;
        self.expect(",")?;
        self.expect("[")?;
        let mut coefficients = Vec::new();
        while !self.eat("]") {
            coefficients.push(self.element(&field)?);
            if !self.eat(",") {
                self.expect("]")?;
                break;
            }
        }
        self.expect(")")?;
        Polynomial::new(&field, &coefficients)
    }

    fn finish<T>(mut self, value: T) -> Result<T> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            Ok(value)
        } else {
            Err(self.error("unexpected trailing input"))
        }
    }

    fn error(&self, message: &str) -> Error {
        Error::parse(format!("{message} at offset {} in {:?}", self.pos, self.input))
    }
}

impl FromStr for Gf2k {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut cursor = Cursor::new(s);
        let field = cursor.field()?;
        cursor.finish(field)
    }
}

impl FromStr for Monomial {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut cursor = Cursor::new(s);
        let monomial = cursor.monomial()?;
        cursor.finish(monomial)
    }
}

impl FromStr for Polynomial {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut cursor = Cursor::new(s);
        let polynomial = cursor.polynomial()?;
        cursor.finish(polynomial)
    }
}
