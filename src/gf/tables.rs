//! Precomputed log/exp tables for GF(2^k).
//!
//! Every nonzero element of GF(2^k) is a power of the generator `g`, so
//! multiplication reduces to adding discrete logarithms. The tables cost
//! O(n) memory and make every field operation a couple of lookups.

use super::poly::{is_irreducible, mul_mod};
use super::FieldParams;
use crate::error::{Error, Result};

/// Precomputed arithmetic tables for a GF(2^k) field.
///
/// `exp` has length `2n - 2` and repeats itself after `n - 1` entries, so the
/// sum of two logarithms can index it without a modulo.
#[derive(Debug, Clone)]
pub struct GfTables {
    params: FieldParams,
    /// Discrete logarithm: `log[g^i] = i`. `log[0]` is unused.
    log: Vec<u8>,
    /// Antilogarithm: `exp[i] = g^i`, with `exp[i] == exp[i + n - 1]`.
    exp: Vec<u8>,
}

impl GfTables {
    /// Validate the parameters and build the tables.
    ///
    /// # Errors
    ///
    /// Returns, in order of checking:
    /// - [`Error::InvalidFieldSize`] if the size is not 4, 8, ..., 256
    /// - [`Error::PolynomialOutOfRange`] if the modulus is not of degree k
    /// - [`Error::NotGenerator`] if the generator is 0 or 1
    /// - [`Error::ReduciblePolynomial`] if the modulus factors over GF(2)
    /// - [`Error::NotGenerator`] if the generator is not an element or its
    ///   powers cycle early
    pub fn new(params: FieldParams) -> Result<Self> {
        let FieldParams {
            size,
            poly,
            generator,
        } = params;

        if !matches!(size, 4 | 8 | 16 | 32 | 64 | 128 | 256) {
            return Err(Error::InvalidFieldSize(size));
        }
        if poly < size || poly >= 2 * size {
            return Err(Error::PolynomialOutOfRange { size, poly });
        }
        let not_generator = Error::NotGenerator {
            size,
            poly,
            generator,
        };
        if generator < 2 {
            return Err(not_generator);
        }
        if !is_irreducible(poly) {
            return Err(Error::ReduciblePolynomial(poly));
        }
        if generator >= size {
            return Err(not_generator);
        }

        let order = (size - 1) as usize;
        let mut log = vec![0u8; size as usize];
        let mut exp = vec![0u8; 2 * order];

        // Walk g^0, g^1, ..., g^(n-2). Returning to 1 early means g has a
        // smaller multiplicative order and the tables would not be bijective.
        let mut x = 1u32;
        for i in 0..order {
            if x == 1 && i != 0 {
                return Err(not_generator);
            }
            // x < size <= 256 and i < 255
            exp[i] = x as u8;
            exp[i + order] = x as u8;
            log[x as usize] = i as u8;
            x = mul_mod(x, generator, poly, size);
        }

        Ok(Self { params, log, exp })
    }

    /// The parameters these tables were built from.
    #[must_use]
    pub fn params(&self) -> FieldParams {
        self.params
    }

    /// Number of field elements.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.params.size
    }

    /// Order of the multiplicative group, `size - 1`.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.params.size - 1
    }

    /// Extension degree k, where size = 2^k.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.params.size.trailing_zeros()
    }

    /// Assert that `x` is an element of the field.
    ///
    /// # Panics
    ///
    /// Panics if `x >= size`.
    #[inline]
    #[track_caller]
    pub fn check_element(&self, x: u8) {
        assert!(
            u32::from(x) < self.params.size,
            "element {x} is out of range for GF({})",
            self.params.size
        );
    }

    fn raw_log(&self, x: u8) -> usize {
        usize::from(self.log[usize::from(x)])
    }

    /// Multiply two field elements.
    ///
    /// # Panics
    ///
    /// Panics if either operand is not an element of the field.
    #[must_use]
    #[track_caller]
    pub fn mul(&self, x: u8, y: u8) -> u8 {
        self.check_element(x);
        self.check_element(y);
        if x == 0 || y == 0 {
            return 0;
        }
        self.exp[self.raw_log(x) + self.raw_log(y)]
    }

    /// Divide two field elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `y` is zero.
    ///
    /// # Panics
    ///
    /// Panics if either operand is not an element of the field.
    #[track_caller]
    pub fn div(&self, x: u8, y: u8) -> Result<u8> {
        self.check_element(x);
        self.check_element(y);
        if y == 0 {
            return Err(Error::DivisionByZero { size: self.size() });
        }
        if x == 0 {
            return Ok(0);
        }
        let order = self.order() as usize;
        Ok(self.exp[order + self.raw_log(x) - self.raw_log(y)])
    }

    /// Multiplicative inverse of an element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `x` is zero.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not an element of the field.
    #[track_caller]
    pub fn inv(&self, x: u8) -> Result<u8> {
        self.check_element(x);
        if x == 0 {
            return Err(Error::DivisionByZero { size: self.size() });
        }
        let order = self.order() as usize;
        Ok(self.exp[order - self.raw_log(x)])
    }

    /// The generator raised to `e`, i.e. `g^(e mod (n - 1))`.
    #[must_use]
    pub fn exp(&self, e: u32) -> u8 {
        self.exp[(e % self.order()) as usize]
    }

    /// Discrete logarithm of `x` to the base of the generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LogarithmOfZero`] if `x` is zero.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not an element of the field.
    #[track_caller]
    pub fn log(&self, x: u8) -> Result<u8> {
        self.check_element(x);
        if x == 0 {
            return Err(Error::LogarithmOfZero { size: self.size() });
        }
        Ok(self.log[usize::from(x)])
    }

    /// Compute `x^e` through the log tables.
    ///
    /// `0^0` is taken to be 1.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not an element of the field.
    #[must_use]
    #[track_caller]
    pub fn pow(&self, x: u8, e: u32) -> u8 {
        self.check_element(x);
        if e == 0 {
            return 1;
        }
        if x == 0 {
            return 0;
        }
        let order = u64::from(self.order());
        let l = (self.raw_log(x) as u64 * u64::from(e)) % order;
        self.exp[l as usize]
    }
}
