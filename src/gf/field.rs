//! The shared field handle.
//!
//! A [`Gf2k`] is a reference-counted pointer to the validated tables of one
//! field, so cloning it is cheap. Handles obtained from the same registry for
//! the same parameters point at the same tables.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::poly::primitive_poly;
use super::{FieldParams, FieldRegistry, GfTables};
use crate::error::{Error, Result};

/// A finite field GF(2^k) with 4 <= 2^k <= 256.
///
/// Elements are plain `u8` values in `0..size`. Addition is XOR;
/// multiplication, division, inversion and exponentiation are table lookups.
///
/// The element operations panic when given a value outside `0..size`. Use
/// [`Gf2k::element`] to turn untrusted input into an element first.
///
/// Equality, hashing and ordering follow the [`FieldParams`]. Equality first
/// checks whether both handles share the same tables.
///
/// # Example
///
/// ```
/// use gf2k::Gf2k;
///
/// let gf = Gf2k::new(256, 0x11d, 0x02).unwrap();
/// assert_eq!(gf.mul(0x11, 0x14), 0x49);
/// assert_eq!(gf.add(0x11, 0x14), 0x05);
/// assert_eq!(gf.div(0x49, 0x14).unwrap(), 0x11);
///
/// // Identical parameters resolve to the identical instance
/// let again = Gf2k::new(256, 0x11d, 0x02).unwrap();
/// assert!(gf.same_instance(&again));
/// ```
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "FieldParams", try_from = "FieldParams")
)]
pub struct Gf2k {
    tables: Arc<GfTables>,
}

impl Gf2k {
    /// Get the field GF(`size`) with modulus `poly` and generator `generator`.
    ///
    /// The field is looked up in (or added to) the global [`FieldRegistry`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is not one of 4, 8, 16, 32, 64, 128, 256
    /// - `poly` is not in `size..2 * size`
    /// - `poly` is reducible over GF(2)
    /// - `generator` does not generate the multiplicative group
    ///
    /// # Example
    ///
    /// ```
    /// use gf2k::{Error, Gf2k};
    ///
    /// assert!(Gf2k::new(16, 0x13, 2).is_ok());
    /// assert_eq!(Gf2k::new(17, 0x13, 2).unwrap_err(), Error::InvalidFieldSize(17));
    /// assert_eq!(Gf2k::new(64, 0x42, 2).unwrap_err(), Error::ReduciblePolynomial(0x42));
    /// ```
    pub fn new(size: u32, poly: u32, generator: u32) -> Result<Self> {
        FieldRegistry::global().get_or_build(size, poly, generator)
    }

    /// Get the field described by `params` from the global registry.
    ///
    /// # Errors
    ///
    /// See [`Gf2k::new`].
    pub fn from_params(params: FieldParams) -> Result<Self> {
        FieldRegistry::global().intern(params)
    }

    /// Get the field of the given size using a known primitive polynomial
    /// and generator from [`PRIMITIVE_POLYS`](super::PRIMITIVE_POLYS).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldSize`] for unsupported sizes.
    pub fn with_size(size: u32) -> Result<Self> {
        let entry = primitive_poly(size).ok_or(Error::InvalidFieldSize(size))?;
        Self::new(entry.size, entry.poly, entry.generator)
    }

    pub(crate) fn from_tables(tables: GfTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Check whether both handles point at the same tables.
    ///
    /// Handles for equal parameters from the same registry always do.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tables, &other.tables)
    }

    /// Fail with [`Error::IncompatibleFields`] unless both fields are equal.
    pub(crate) fn check_compatible(&self, other: &Self) -> Result<()> {
        if self == other {
            Ok(())
        } else {
            Err(Error::incompatible(self.params(), other.params()))
        }
    }

    /// The parameters identifying this field.
    #[must_use]
    pub fn params(&self) -> FieldParams {
        self.tables.params()
    }

    /// Number of elements.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.tables.size()
    }

    /// The packed modulus polynomial.
    #[must_use]
    pub fn poly(&self) -> u32 {
        self.params().poly
    }

    /// The generator used for the log/exp tables.
    #[must_use]
    pub fn generator(&self) -> u32 {
        self.params().generator
    }

    /// Extension degree k, where size = 2^k.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.tables.degree()
    }

    /// Order of the multiplicative group, `size - 1`.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.tables.order()
    }

    /// Check whether `value` is an element of this field.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        value < self.size()
    }

    /// Convert an integer into a field element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if `value >= size`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn element(&self, value: u32) -> Result<u8> {
        if !self.contains(value) {
            return Err(Error::ElementOutOfRange {
                value,
                size: self.size(),
            });
        }
        // value < size <= 256
        Ok(value as u8)
    }

    /// Iterate over all elements of the field.
    #[allow(clippy::cast_possible_truncation)]
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator {
        // size - 1 <= 255
        0..=self.order() as u8
    }

    /// Iterate over all non-zero elements of the field.
    #[allow(clippy::cast_possible_truncation)]
    pub fn units(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator {
        1..=self.order() as u8
    }

    /// Field addition (XOR).
    ///
    /// # Panics
    ///
    /// Panics if either operand is not an element of the field.
    #[must_use]
    #[track_caller]
    pub fn add(&self, x: u8, y: u8) -> u8 {
        self.tables.check_element(x);
        self.tables.check_element(y);
        x ^ y
    }

    /// Field subtraction, identical to addition in characteristic 2.
    ///
    /// # Panics
    ///
    /// Panics if either operand is not an element of the field.
    #[must_use]
    #[track_caller]
    pub fn sub(&self, x: u8, y: u8) -> u8 {
        self.add(x, y)
    }

    /// Additive inverse; every element is its own negation.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not an element of the field.
    #[must_use]
    #[track_caller]
    pub fn neg(&self, x: u8) -> u8 {
        self.tables.check_element(x);
        x
    }

    /// Field multiplication.
    ///
    /// # Panics
    ///
    /// Panics if either operand is not an element of the field.
    #[must_use]
    #[track_caller]
    pub fn mul(&self, x: u8, y: u8) -> u8 {
        self.tables.mul(x, y)
    }

    /// Field division.
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
        self.tables.div(x, y)
    }

    /// Multiplicative inverse.
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
        self.tables.inv(x)
    }

    /// The generator raised to the power `e`.
    #[must_use]
    pub fn exp(&self, e: u32) -> u8 {
        self.tables.exp(e)
    }

    /// Discrete logarithm to the base of the generator.
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
        self.tables.log(x)
    }

    /// Compute `x^e`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not an element of the field.
    #[must_use]
    #[track_caller]
    pub fn pow(&self, x: u8, e: u32) -> u8 {
        self.tables.pow(x, e)
    }

    /// Access the underlying tables.
    #[must_use]
    pub fn tables(&self) -> &GfTables {
        &self.tables
    }
}

impl Default for Gf2k {
    /// The field described by [`FieldParams::DEFAULT`].
    fn default() -> Self {
        Self::from_params(FieldParams::DEFAULT)
            .expect("the default field parameters should always be constructible")
    }
}

impl From<Gf2k> for FieldParams {
    fn from(field: Gf2k) -> Self {
        field.params()
    }
}

impl TryFrom<FieldParams> for Gf2k {
    type Error = Error;

    fn try_from(params: FieldParams) -> Result<Self> {
        Self::from_params(params)
    }
}

impl PartialEq for Gf2k {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other) || self.params() == other.params()
    }
}

impl Eq for Gf2k {}

impl Hash for Gf2k {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.params().hash(state);
    }
}

impl PartialOrd for Gf2k {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Gf2k {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.same_instance(other) {
            return Ordering::Equal;
        }
        self.params().cmp(&other.params())
    }
}

/// The reconstruction form, e.g. `Gf2k::new(256, 0x11d, 0x2)`.
///
/// Parsing this text with [`str::parse`] yields an equal field.
impl fmt::Debug for Gf2k {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FieldParams {
            size,
            poly,
            generator,
        } = self.params();
        write!(f, "Gf2k::new({size}, {poly:#x}, {generator:#x})")
    }
}

impl fmt::Display for Gf2k {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.params())
    }
}
